//! Longest common substring over a set of strings.
//!
//! All candidates are enumerated on character boundaries, so multi-byte
//! input is handled, and "longest" means longest in characters.

/// Return the longest substring contained in every string of `strs`.
///
/// Returns the empty string for an empty list, or when no non-empty
/// substring is shared. A one-element list degenerates to the whole string.
///
/// Tie-break: candidates are substrings of the first string, scanned by
/// ascending start position and ascending length, replacing the best only
/// when strictly longer. Among maximal-length candidates the one starting
/// leftmost in the first string wins, so the result is deterministic.
pub fn longest_common_substring(strs: &[String]) -> String {
    let Some(first) = strs.first() else {
        return String::new();
    };

    // Byte offsets of every char boundary in the first string.
    let mut bounds: Vec<usize> = first.char_indices().map(|(i, _)| i).collect();
    bounds.push(first.len());
    let chars = bounds.len() - 1;

    let mut best = "";
    let mut best_chars = 0;
    for i in 0..chars {
        for j in (i + 1)..=chars {
            if j - i <= best_chars {
                continue;
            }
            let candidate = &first[bounds[i]..bounds[j]];
            if strs.iter().all(|s| s.contains(candidate)) {
                best = candidate;
                best_chars = j - i;
            }
        }
    }
    best.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shared_prefix_letter() {
        assert_eq!(longest_common_substring(&strs(&["skull", "school"])), "s");
    }

    #[test]
    fn longest_run_wins() {
        assert_eq!(
            longest_common_substring(&strs(&["abcde", "xbcdy"])),
            "bcd"
        );
    }

    #[test]
    fn leftmost_wins_among_equal_lengths() {
        // "ab" and "cd" are both common and both two characters long.
        assert_eq!(
            longest_common_substring(&strs(&["abxcd", "cdxab"])),
            "ab"
        );
    }

    #[test]
    fn empty_list() {
        assert_eq!(longest_common_substring(&[]), "");
    }

    #[test]
    fn singleton_degenerates_to_whole_string() {
        assert_eq!(longest_common_substring(&strs(&["abc"])), "abc");
    }

    #[test]
    fn no_common_substring() {
        assert_eq!(longest_common_substring(&strs(&["123", "456"])), "");
    }

    #[test]
    fn empty_member_forces_empty_result() {
        assert_eq!(longest_common_substring(&strs(&["abc", ""])), "");
        assert_eq!(longest_common_substring(&strs(&["", "abc"])), "");
    }

    #[test]
    fn multibyte_input() {
        assert_eq!(
            longest_common_substring(&strs(&["héllo", "chéllar"])),
            "héll"
        );
    }

    #[test]
    fn deterministic_for_duplicates() {
        let set = strs(&["aba", "aba", "aba"]);
        assert_eq!(longest_common_substring(&set), "aba");
        assert_eq!(
            longest_common_substring(&set),
            longest_common_substring(&set)
        );
    }
}
