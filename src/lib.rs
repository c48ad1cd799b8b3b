//! Infer a generalized regular expression from a set of example strings.
//!
//! Samples are split recursively around their longest common substring,
//! falling back from literal characters to character classes once nothing
//! literal is shared. The resulting tree renders as a plain regex pattern
//! or as annotated HTML.
//!
//! # Example
//!
//! ```rust
//! use rexgen::{build, synthesize};
//!
//! let samples = ["skull".to_string(), "school".to_string()];
//! let tree = build(&samples);
//!
//! assert_eq!(synthesize(&tree), "s[a-z][a-z][a-z]{0,2}l[a-z]?");
//! ```

pub mod char_class;
pub mod render;
pub mod substring;
pub mod synth;
pub mod tree;

pub use char_class::{CODE_RANGES, CharKind, classify};
pub use render::render_html;
pub use substring::longest_common_substring;
pub use synth::{Quantifier, synthesize};
pub use tree::{Mode, PatternTree, build};
