//! # Singularize
//!
//! Collapse runs of repeated adjacent characters.

/// Collapse every run of identical adjacent chars to a single char.
///
/// `"++a little Bunny"` becomes `"+a litle Buny"`.
///
/// The output is never longer than the input, and no two adjacent output
/// chars are equal.
pub fn collapse_adjacent(text: &str) -> String {
    collapse_where(text, |_| true)
}

/// Collapse runs of `target` only; runs of other chars are kept.
///
/// ```
/// use strkit::singularize::collapse_adjacent_char;
///
/// assert_eq!(collapse_adjacent_char("a__b__cc", '_'), "a_b_cc");
/// ```
pub fn collapse_adjacent_char(
    text: &str,
    target: char,
) -> String {
    collapse_where(text, |ch| ch == target)
}

/// Drop each char that repeats the previous input char and satisfies `collapse`.
fn collapse_where<F>(
    text: &str,
    collapse: F,
) -> String
where
    F: Fn(char) -> bool,
{
    let mut buf = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    for ch in text.chars() {
        if last != Some(ch) || !collapse(ch) {
            buf.push(ch);
        }
        last = Some(ch);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::strings::char_len;

    #[test]
    fn test_collapse_adjacent() {
        assert_eq!(
            collapse_adjacent("++a little Bunny raBBit waNdering in a huge Forest"),
            "+a litle Buny raBit waNdering in a huge Forest"
        );
        assert_eq!(collapse_adjacent("aaa"), "a");
        assert_eq!(collapse_adjacent("aAaA"), "aAaA");
        assert_eq!(collapse_adjacent(""), "");
        assert_eq!(collapse_adjacent("çççağ"), "çağ");
    }

    #[test]
    fn test_collapse_adjacent_char() {
        assert_eq!(collapse_adjacent_char("a___b", '_'), "a_b");
        assert_eq!(collapse_adjacent_char("bookkeeper__x", '_'), "bookkeeper_x");
        assert_eq!(collapse_adjacent_char("aa bb", 'c'), "aa bb");
        assert_eq!(collapse_adjacent_char("", '_'), "");
    }

    #[test]
    fn test_only_target_runs_collapse() {
        // The first char of a target run always survives.
        assert_eq!(collapse_adjacent_char("--a--a--", '-'), "-a-a-");
        assert_eq!(collapse_adjacent_char("xx--xx", '-'), "xx-xx");
    }

    proptest::proptest! {
        #[test]
        fn collapse_never_grows(text in "[ab_ ]{0,64}") {
            let once = collapse_adjacent(&text);
            proptest::prop_assert!(char_len(&once) <= char_len(&text));
        }

        #[test]
        fn collapse_is_idempotent(text in "\\PC{0,32}") {
            let once = collapse_adjacent(&text);
            proptest::prop_assert_eq!(collapse_adjacent(&once), once.clone());
        }

        #[test]
        fn collapse_leaves_no_adjacent_repeats(text in "[aab_ ]{0,64}") {
            let once: Vec<char> = collapse_adjacent(&text).chars().collect();
            proptest::prop_assert!(once.windows(2).all(|w| w[0] != w[1]));
        }

        #[test]
        fn collapse_char_keeps_other_runs(text in "[ab_]{0,64}") {
            let collapsed = collapse_adjacent_char(&text, '_');
            proptest::prop_assert!(!collapsed.contains("__"));
            proptest::prop_assert_eq!(collapsed.replace('_', ""), text.replace('_', ""));
        }
    }
}
