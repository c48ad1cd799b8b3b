//! Annotated HTML rendering of a pattern tree.
//!
//! The visual counterpart of [`synthesize`](crate::synth::synthesize): the
//! same inorder traversal over the same three node shapes, with literal
//! runs, class ranges and quantifiers wrapped in `<span>`s for styling.
//! Display diverges from the regex table only for the space class (shown as
//! an annotated blank) and the punctuation class (abbreviated).

use crate::char_class::code_ranges;
use crate::synth::Quantifier;
use crate::tree::{Mode, PatternTree, summarize_leaf};

const SPACE_SPAN: &str = "<span class=\"pat-space\" title=\"space character\"> </span>";

/// Render a pattern tree as annotated HTML.
pub fn render_html(tree: &PatternTree) -> String {
    match tree {
        PatternTree::Branch {
            root,
            mode: Mode::Literal,
            left,
            right,
        } => format!(
            "{}<span class=\"pat-literal\">{}</span>{}",
            render_html(left),
            literal_markup(root),
            render_html(right)
        ),
        PatternTree::Branch {
            root,
            mode: Mode::Class,
            left,
            right,
        } => {
            let run: String = root
                .chars()
                .map(|code| format!("<span class=\"pat-range\">[{}]</span>", display_body(code)))
                .collect();
            format!("{}{}{}", render_html(left), run, render_html(right))
        }
        PatternTree::Leaf(strs) => leaf_markup(strs),
    }
}

/// Escape literal text for HTML and annotate spaces.
fn literal_markup(text: &str) -> String {
    escape_html(text).replace(' ', SPACE_SPAN)
}

/// Bracket body shown for a class code; falls back to the regex table.
fn display_body(code: char) -> &'static str {
    match code {
        'S' => SPACE_SPAN,
        'O' => "!@#&hellip;",
        _ => code_ranges(code),
    }
}

fn leaf_markup(strs: &[String]) -> String {
    let summary = summarize_leaf(strs);
    if summary.max_len == 0 {
        return String::new();
    }
    let mut out = String::from("<span class=\"pat-range\">[");
    for code in &summary.codes {
        out.push_str(display_body(*code));
    }
    out.push_str("]</span>");
    match Quantifier::for_lengths(summary.min_len, summary.max_len) {
        Quantifier::One => {}
        q @ Quantifier::Between(..) => {
            out.push_str(&format!("<span class=\"pat-counts\">{q}</span>"));
        }
        q => {
            out.push_str(&format!("<span class=\"pat-quantifier\">{q}</span>"));
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn class_run_markup() {
        let html = render_html(&build(&strs(&["123", "456"])));
        assert_eq!(html, "<span class=\"pat-range\">[0-9]</span>".repeat(3));
    }

    #[test]
    fn literal_and_leaf_markup() {
        let html = render_html(&build(&strs(&["skull", "school"])));
        assert!(html.contains("<span class=\"pat-literal\">s</span>"));
        assert!(html.contains("<span class=\"pat-literal\">l</span>"));
        assert!(html.contains("<span class=\"pat-range\">[a-z]</span>"));
        assert!(html.contains("<span class=\"pat-counts\">{0,2}</span>"));
        assert!(html.contains("<span class=\"pat-quantifier\">?</span>"));
    }

    #[test]
    fn literal_text_is_html_escaped() {
        let html = render_html(&build(&strs(&["a<b&c>d"])));
        assert!(html.contains("a&lt;b&amp;c&gt;d"));
    }

    #[test]
    fn spaces_are_annotated() {
        let html = render_html(&build(&strs(&["a b", "a b"])));
        assert!(html.contains(SPACE_SPAN));
    }

    #[test]
    fn punctuation_class_is_abbreviated() {
        let html = render_html(&build(&strs(&["a$", "b#"])));
        assert!(html.contains("!@#&hellip;"));
        assert!(!html.contains("~'"));
    }

    #[test]
    fn empty_leaf_renders_nothing() {
        assert_eq!(render_html(&PatternTree::Leaf(strs(&[""]))), "");
    }
}
