//! Regex synthesis: inorder rendering of a pattern tree.
//!
//! Literal branches become escaped text, class branches become one bracket
//! expression per code, and leaves become a single class with a quantifier
//! chosen from the spread of the residual string lengths.

use std::fmt;

use crate::char_class::code_ranges;
use crate::tree::{Mode, PatternTree, summarize_leaf};

/// Length spread beyond which a leaf gives up on an exact `{min,max}` range
/// and uses an open-ended quantifier instead. Tunable.
pub const OPEN_SPREAD: usize = 4;

/// Repetition marker applied to a leaf class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantifier {
    One,
    Optional,
    ZeroOrMore,
    OneOrMore,
    Between(usize, usize),
}

impl Quantifier {
    /// Pick the quantifier for a leaf whose string lengths span `min..=max`.
    ///
    /// Callers must not ask for `max == 0`; such a leaf renders nothing at
    /// all, quantifier included.
    pub fn for_lengths(min: usize, max: usize) -> Quantifier {
        if max <= 1 {
            if min == 0 {
                Quantifier::Optional
            } else {
                Quantifier::One
            }
        } else if max - min > OPEN_SPREAD {
            if min == 0 {
                Quantifier::ZeroOrMore
            } else {
                Quantifier::OneOrMore
            }
        } else {
            Quantifier::Between(min, max)
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::One => Ok(()),
            Quantifier::Optional => write!(f, "?"),
            Quantifier::ZeroOrMore => write!(f, "*"),
            Quantifier::OneOrMore => write!(f, "+"),
            Quantifier::Between(min, max) => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Render a pattern tree as a regular expression.
///
/// A single inorder traversal, so the output preserves the left-to-right
/// order of the sample text.
pub fn synthesize(tree: &PatternTree) -> String {
    match tree {
        PatternTree::Branch {
            root,
            mode: Mode::Literal,
            left,
            right,
        } => format!(
            "{}{}{}",
            synthesize(left),
            escape_literal(root),
            synthesize(right)
        ),
        PatternTree::Branch {
            root,
            mode: Mode::Class,
            left,
            right,
        } => {
            // Each code keeps its own bracket, even when adjacent codes are
            // equal: the run length stays visible in the pattern.
            let run: String = root
                .chars()
                .map(|code| format!("[{}]", code_ranges(code)))
                .collect();
            format!("{}{}{}", synthesize(left), run, synthesize(right))
        }
        PatternTree::Leaf(strs) => leaf_expr(strs),
    }
}

/// Escape every regex metacharacter in a literal run.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Render a leaf as one bracket expression plus a quantifier.
fn leaf_expr(strs: &[String]) -> String {
    let summary = summarize_leaf(strs);
    if summary.max_len == 0 {
        return String::new();
    }
    let mut out = String::from("[");
    for code in &summary.codes {
        out.push_str(code_ranges(*code));
    }
    out.push(']');
    out.push_str(&Quantifier::for_lengths(summary.min_len, summary.max_len).to_string());
    out
}
