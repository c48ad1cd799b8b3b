//! Character kinds and the shared class-code table.
//!
//! Every input character belongs to exactly one [`CharKind`]. Replacing each
//! character of a string by its one-letter code produces the class string
//! compared during class-mode generalization.

use phf::{Map, phf_map};

/// The kind a character is mapped to when literal commonality is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Lower,
    Upper,
    Digit,
    Space,
    Other,
}

/// Bracket-expression body for each class code.
///
/// This table is the single source for both the regex synthesizer and the
/// markup renderer, so the two stay consistent by construction. The `O`
/// body keeps `-`, `\`, `[` and `]` escaped so it remains well-formed when
/// concatenated with other bodies inside one bracket expression.
pub static CODE_RANGES: Map<char, &'static str> = phf_map! {
    'a' => "a-z",
    'A' => "A-Z",
    'N' => "0-9",
    'S' => " ",
    'O' => "!@#$%^&*()_+=\\-`~'\";:,<.>/?\\\\\\[\\]{}",
};

impl CharKind {
    /// Classify a single character.
    ///
    /// Kinds are ASCII-exact so they agree with the rendered ranges; any
    /// non-ASCII character is `Other`.
    pub fn of(ch: char) -> CharKind {
        match ch {
            'a'..='z' => CharKind::Lower,
            'A'..='Z' => CharKind::Upper,
            '0'..='9' => CharKind::Digit,
            ' ' => CharKind::Space,
            _ => CharKind::Other,
        }
    }

    /// The one-letter code used in class strings.
    pub fn code(self) -> char {
        match self {
            CharKind::Lower => 'a',
            CharKind::Upper => 'A',
            CharKind::Digit => 'N',
            CharKind::Space => 'S',
            CharKind::Other => 'O',
        }
    }

    /// Inverse of [`CharKind::code`].
    pub fn from_code(code: char) -> Option<CharKind> {
        match code {
            'a' => Some(CharKind::Lower),
            'A' => Some(CharKind::Upper),
            'N' => Some(CharKind::Digit),
            'S' => Some(CharKind::Space),
            'O' => Some(CharKind::Other),
            _ => None,
        }
    }
}

/// Replace every character of `s` by its class code.
///
/// The output has the same length in characters as the input.
pub fn classify(s: &str) -> String {
    s.chars().map(|c| CharKind::of(c).code()).collect()
}

/// Bracket body for a class code.
///
/// Only the builder produces class codes, so an unknown code means a broken
/// producer, not bad input.
pub fn code_ranges(code: char) -> &'static str {
    CODE_RANGES
        .get(&code)
        .copied()
        .expect("unknown class code")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_upper_digit() {
        assert_eq!(CharKind::of('a'), CharKind::Lower);
        assert_eq!(CharKind::of('z'), CharKind::Lower);
        assert_eq!(CharKind::of('A'), CharKind::Upper);
        assert_eq!(CharKind::of('Z'), CharKind::Upper);
        assert_eq!(CharKind::of('0'), CharKind::Digit);
        assert_eq!(CharKind::of('9'), CharKind::Digit);
    }

    #[test]
    fn space_is_its_own_kind() {
        assert_eq!(CharKind::of(' '), CharKind::Space);
        assert_eq!(CharKind::of('\t'), CharKind::Other);
    }

    #[test]
    fn punctuation_and_non_ascii_are_other() {
        for ch in ['$', '#', '@', '!', '\n', 'é', '°'] {
            assert_eq!(CharKind::of(ch), CharKind::Other, "expected Other: {ch:?}");
        }
    }

    #[test]
    fn every_character_gets_exactly_one_kind() {
        for s in ["abc$1250", "xby#340", "sbs@00000"] {
            for ch in s.chars() {
                let kind = CharKind::of(ch);
                assert_eq!(CharKind::from_code(kind.code()), Some(kind));
            }
        }
    }

    #[test]
    fn classify_preserves_length() {
        assert_eq!(classify("abc$1250"), "aaaONNNN");
        assert_eq!(classify("Mr X 7"), "AaSASN");
        assert_eq!(classify(""), "");
    }

    #[test]
    fn table_covers_all_codes() {
        for kind in [
            CharKind::Lower,
            CharKind::Upper,
            CharKind::Digit,
            CharKind::Space,
            CharKind::Other,
        ] {
            assert!(CODE_RANGES.contains_key(&kind.code()));
        }
    }
}
