//! Pattern tree construction.
//!
//! The tree is built by repeatedly splitting the sample set around its
//! longest common substring. When no literal substring is shared, the set
//! is reclassified into class codes and the search retries once in class
//! mode; when that also fails, the residual strings become a leaf.

use itertools::{Itertools, MinMaxResult};

use crate::char_class::classify;
use crate::substring::longest_common_substring;

/// Which alphabet a branch was discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Literal characters of the samples.
    Literal,
    /// Class codes produced by [`classify`].
    Class,
}

/// A binary tree whose branches are common substrings of the sample set.
///
/// Leaves hold residual class-code strings (possibly empty) for which no
/// common substring exists even after class abstraction. A leaf is only
/// produced once both the literal and the class search have failed, so its
/// strings are always class codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTree {
    Branch {
        /// The common substring this node was split on. Never empty.
        root: String,
        mode: Mode,
        left: Box<PatternTree>,
        right: Box<PatternTree>,
    },
    Leaf(Vec<String>),
}

/// Build a pattern tree from a set of sample strings.
///
/// Total and deterministic: the same samples always produce the same tree.
/// Recursion depth is bounded by the shortest sample length, since every
/// split strictly shortens all participants on both sides.
pub fn build(samples: &[String]) -> PatternTree {
    build_in_mode(samples.to_vec(), Mode::Literal)
}

fn build_in_mode(strs: Vec<String>, mode: Mode) -> PatternTree {
    let lcs = longest_common_substring(&strs);
    if lcs.is_empty() {
        return match mode {
            // One-shot alphabet fallback: reclassify and retry in class mode.
            Mode::Literal => {
                build_in_mode(strs.iter().map(|s| classify(s)).collect(), Mode::Class)
            }
            Mode::Class => PatternTree::Leaf(strs),
        };
    }

    let mut prefixes = Vec::with_capacity(strs.len());
    let mut suffixes = Vec::with_capacity(strs.len());
    for s in &strs {
        // Always the first occurrence: later occurrences would change which
        // prefix/suffix sets are recursed into.
        let at = s
            .find(&lcs)
            .expect("common substring not present in sample");
        prefixes.push(s[..at].to_string());
        suffixes.push(s[at + lcs.len()..].to_string());
    }

    PatternTree::Branch {
        root: lcs,
        mode,
        left: Box::new(build_in_mode(prefixes, mode)),
        right: Box::new(build_in_mode(suffixes, mode)),
    }
}

/// Aggregate view of a leaf, used to render it as a single class.
#[derive(Debug, PartialEq, Eq)]
pub struct LeafSummary {
    /// Distinct class codes, in first-appearance order.
    pub codes: Vec<char>,
    /// Shortest string length, in characters.
    pub min_len: usize,
    /// Longest string length, in characters.
    pub max_len: usize,
}

/// Summarize a leaf's residual strings.
///
/// An empty leaf (or one holding only empty strings) reports `max_len == 0`
/// and renders nothing downstream.
pub fn summarize_leaf(strs: &[String]) -> LeafSummary {
    let mut codes = Vec::new();
    for s in strs {
        for code in s.chars() {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }
    let (min_len, max_len) = match strs.iter().map(|s| s.chars().count()).minmax() {
        MinMaxResult::NoElements => (0, 0),
        MinMaxResult::OneElement(n) => (n, n),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    LeafSummary {
        codes,
        min_len,
        max_len,
    }
}
