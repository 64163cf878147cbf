//! # Window Mask

/// The character written over redacted positions by [`mask_window`].
pub const WINDOW_MASK_CHAR: char = '*';

/// Redact the characters of the window `[start, start + length)`, except
/// the first.
///
/// The character at `start` stays visible; each following position inside
/// the window becomes [`WINDOW_MASK_CHAR`]. Characters outside the window
/// are kept. A window running past the end of `text` stops there, and a
/// `start` at or beyond the end leaves `text` unchanged.
///
/// ## Arguments
/// * `text` - The source text.
/// * `start` - Char index of the window's (visible) first position.
/// * `length` - Window width in chars.
///
/// ## Returns
/// A new string with the same number of chars as `text`.
///
/// ```
/// use strkit::masking::mask_window;
///
/// assert_eq!(
///     mask_window("++a little Bunny raBBit waNdering", 8, 12),
///     "++a littl***********Bit waNdering",
/// );
/// ```
pub fn mask_window(
    text: &str,
    start: usize,
    length: usize,
) -> String {
    let end = start.saturating_add(length);

    text.chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx > start && idx < end {
                WINDOW_MASK_CHAR
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::strings::char_len;

    const SOURCE: &str = "++a little Bunny raBBit waNdering in a huge Forest";

    #[test]
    fn test_documented_window() {
        assert_eq!(
            mask_window(SOURCE, 8, 12),
            "++a littl***********Bit waNdering in a huge Forest"
        );
    }

    #[test]
    fn test_start_position_stays_visible() {
        assert_eq!(mask_window("abcdef", 0, 3), "a**def");
        assert_eq!(mask_window("abcdef", 2, 3), "abc**f");
    }

    #[test]
    fn test_window_clamped_at_end() {
        assert_eq!(mask_window("abcdef", 3, 100), "abcd**");
        assert_eq!(mask_window("abcdef", 3, usize::MAX), "abcd**");
    }

    #[test]
    fn test_start_out_of_range() {
        assert_eq!(mask_window("abcdef", 6, 3), "abcdef");
        assert_eq!(mask_window("abcdef", 600, 3), "abcdef");
        assert_eq!(mask_window("", 0, 3), "");
    }

    #[test]
    fn test_narrow_windows_mask_nothing() {
        assert_eq!(mask_window("abcdef", 2, 0), "abcdef");
        assert_eq!(mask_window("abcdef", 2, 1), "abcdef");
    }

    #[test]
    fn test_multibyte_positions() {
        let masked = mask_window("Türkiye Cumhuriyeti", 0, 7);
        assert_eq!(masked, "T****** Cumhuriyeti");
        assert_eq!(char_len(&masked), char_len("Türkiye Cumhuriyeti"));
    }
}
