//! The matching routines.

/// Matches a `?`-only pattern against the whole of `subject`.
///
/// `?` matches any single byte; every other pattern byte must match
/// literally. Lengths must be equal, so an empty pattern matches only
/// an empty subject.
pub fn match_qmark(pattern: &[u8], subject: &[u8]) -> bool {
    pattern.len() == subject.len()
        && pattern
            .iter()
            .zip(subject)
            .all(|(&p, &s)| p == b'?' || p == s)
}

/// Finds the first occurrence of a `?`-only pattern within `subject`.
///
/// Returns the byte offset where the match begins. An empty pattern
/// matches at offset zero. Candidates are tried left to right, so the
/// earliest match wins.
pub fn find_qmark(pattern: &[u8], subject: &[u8]) -> Option<usize> {
    // Leading '?'s match anything, so anchor the scan on the first
    // literal byte and count them back in afterwards.
    let q = pattern.iter().take_while(|&&b| b == b'?').count();
    if q == pattern.len() {
        return (subject.len() >= q).then_some(0);
    }
    let anchor = pattern[q];
    let literal = &pattern[q..];
    let mut pos = q;
    while pos + literal.len() <= subject.len() {
        if subject[pos] == anchor && match_qmark(literal, &subject[pos..pos + literal.len()]) {
            return Some(pos - q);
        }
        pos += 1;
    }
    None
}

/// Matches a glob pattern with `*` and `?` wildcards against the whole
/// of `subject`.
///
/// Literal runs between stars must appear in order. The run before the
/// first star anchors at the front of the subject and the run after
/// the last star anchors at the back; runs in between take the
/// earliest position available.
pub fn match_bytes(pattern: &[u8], subject: &[u8]) -> bool {
    let Some(first_star) = pattern.iter().position(|&b| b == b'*') else {
        return match_qmark(pattern, subject);
    };

    let head = &pattern[..first_star];
    if subject.len() < head.len() || !match_qmark(head, &subject[..head.len()]) {
        return false;
    }
    let mut subject = &subject[head.len()..];

    // rposition cannot miss: first_star is a '*'.
    let last_star = pattern
        .iter()
        .rposition(|&b| b == b'*')
        .unwrap_or(first_star);
    let tail = &pattern[last_star + 1..];
    if subject.len() < tail.len() || !match_qmark(tail, &subject[subject.len() - tail.len()..]) {
        return false;
    }
    subject = &subject[..subject.len() - tail.len()];

    if last_star > first_star {
        for seg in pattern[first_star + 1..last_star].split(|&b| b == b'*') {
            match find_qmark(seg, subject) {
                Some(start) => subject = &subject[start + seg.len()..],
                None => return false,
            }
        }
    }
    true
}

/// Convenience wrapper over [`match_bytes`] for `&str` arguments.
pub fn matches(pattern: &str, subject: &str) -> bool {
    match_bytes(pattern.as_bytes(), subject.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qmark_matches_literals_and_single_bytes() {
        assert!(match_qmark(b"abc", b"abc"));
        assert!(match_qmark(b"a?c", b"abc"));
        assert!(match_qmark(b"???", b"xyz"));
        assert!(!match_qmark(b"a?c", b"ac"));
        assert!(!match_qmark(b"a?c", b"abd"));
        assert!(match_qmark(b"", b""));
        assert!(!match_qmark(b"", b"x"));
    }

    #[test]
    fn find_qmark_returns_the_earliest_match() {
        assert_eq!(find_qmark(b"cd", b"abcdcd"), Some(2));
        assert_eq!(find_qmark(b"?d", b"abcdcd"), Some(2));
        assert_eq!(find_qmark(b"zz", b"abcdcd"), None);
        assert_eq!(find_qmark(b"", b"abc"), Some(0));
        assert_eq!(find_qmark(b"??", b"a"), None);
        assert_eq!(find_qmark(b"??", b"ab"), Some(0));
    }

    #[test]
    fn find_qmark_leading_wildcards_need_room_on_the_left() {
        // "?b" cannot match at the very front: the '?' needs a byte
        // before the 'b'.
        assert_eq!(find_qmark(b"?b", b"ba"), None);
        assert_eq!(find_qmark(b"?b", b"aab"), Some(1));
        assert_eq!(find_qmark(b"?b", b"abba"), Some(0));
    }

    #[test]
    fn find_qmark_skips_a_false_anchor_and_keeps_scanning() {
        // First 'c' is followed by 'x', not 'd'; the scan must move on.
        assert_eq!(find_qmark(b"cd", b"cxcd"), Some(2));
    }

    #[test]
    fn star_matches_any_run() {
        assert!(matches("*", ""));
        assert!(matches("*", "anything"));
        assert!(matches("*.txt", "report.txt"));
        assert!(!matches("*.txt", "report.txtx"));
        assert!(matches("a*b*c", "axxbyyc"));
        assert!(matches("a*b*c", "abc"));
        assert!(!matches("a*b*c", "axxbyy"));
    }

    #[test]
    fn trailing_star_pattern_anchors_at_the_back() {
        assert!(matches("*.txt", "a.txt.txt"));
        assert!(matches("*.txt", ".txt"));
        assert!(!matches("*.txt", "txt"));
    }

    #[test]
    fn leading_literal_anchors_at_the_front() {
        assert!(matches("log*", "logfile"));
        assert!(matches("log*", "log"));
        assert!(!matches("log*", "mylogfile"));
    }

    #[test]
    fn qmark_only_pattern_requires_exact_length() {
        assert!(matches("a?c", "abc"));
        assert!(!matches("a?c", "ac"));
        assert!(!matches("a?c", "abcc"));
    }

    #[test]
    fn mixed_wildcards() {
        assert!(matches("?*", "x"));
        assert!(matches("?*", "xyz"));
        assert!(!matches("?*", ""));
        assert!(matches("a?*?z", "abcz"));
        assert!(!matches("a?*?z", "az"));
    }

    #[test]
    fn consecutive_stars_collapse() {
        assert!(matches("a**c", "abc"));
        assert!(matches("a**c", "ac"));
        assert!(!matches("a**c", "ab"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_subject() {
        assert!(matches("", ""));
        assert!(!matches("", "a"));
    }

    #[test]
    fn wildcards_do_not_special_case_separators() {
        assert!(matches("*.rs", "src/lib.rs"));
        assert!(matches("src?lib.rs", "src/lib.rs"));
    }

    #[test]
    fn interior_segments_must_appear_in_order() {
        assert!(matches("*ab*cd*", "xxabyycdzz"));
        assert!(!matches("*cd*ab*", "xxabyycdzz"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn text() -> impl Strategy<Value = Vec<u8>> {
            proptest::collection::vec(proptest::char::range('a', 'e').prop_map(|c| c as u8), 0..12)
        }

        proptest! {
            #[test]
            fn every_subject_matches_itself(s in text()) {
                prop_assert!(match_bytes(&s, &s));
            }

            #[test]
            fn lone_star_matches_everything(s in text()) {
                prop_assert!(match_bytes(b"*", &s));
            }

            #[test]
            fn star_sandwich_matches_any_containing_subject(
                needle in proptest::collection::vec(
                    proptest::char::range('a', 'e').prop_map(|c| c as u8),
                    1..6,
                ),
                prefix in text(),
                suffix in text(),
            ) {
                let mut pattern = vec![b'*'];
                pattern.extend_from_slice(&needle);
                pattern.push(b'*');
                let mut subject = prefix;
                subject.extend_from_slice(&needle);
                subject.extend_from_slice(&suffix);
                prop_assert!(match_bytes(&pattern, &subject));
            }

            #[test]
            fn all_qmarks_match_iff_lengths_agree(
                s in text(),
                n in 0usize..12,
            ) {
                let pattern = vec![b'?'; n];
                prop_assert_eq!(
                    match_qmark(&pattern, &s),
                    n == s.len()
                );
            }
        }
    }
}
