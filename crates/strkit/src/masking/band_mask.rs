//! # Band Mask

/// The default block character of a [`BandMask`].
pub const DEFAULT_MASK_CHAR: char = '*';

/// Head / block / tail mask.
///
/// Keeps the first `start_len` and the last `end_len` characters of a text
/// and replaces everything between them with a single block of
/// `mask_len` copies of `mask_char`. The block width does not depend on how
/// many characters it hides.
///
/// ## Style Hints
///
/// Instance names should prefer `band`, or `mask` when there is no ambiguity.
///
/// ```
/// use strkit::masking::BandMask;
///
/// let band = BandMask::new(2, 3, 2);
/// assert_eq!(band.apply("Turkiye"), "Tu***ye");
///
/// let band = band.with_mask_char('#');
/// assert_eq!(band.apply("Turkiye"), "Tu###ye");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandMask {
    start_len: usize,
    mask_len: usize,
    end_len: usize,
    mask_char: char,
}

impl BandMask {
    /// Build a new mask using [`DEFAULT_MASK_CHAR`].
    ///
    /// ## Arguments
    /// * `start_len` - Number of leading chars to reveal.
    /// * `mask_len` - Width of the mask block.
    /// * `end_len` - Number of trailing chars to reveal.
    pub fn new(
        start_len: usize,
        mask_len: usize,
        end_len: usize,
    ) -> Self {
        Self {
            start_len,
            mask_len,
            end_len,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Set the block character.
    pub fn with_mask_char(
        self,
        mask_char: char,
    ) -> Self {
        Self { mask_char, ..self }
    }

    /// The number of revealed leading chars.
    pub fn start_len(&self) -> usize {
        self.start_len
    }

    /// The width of the mask block.
    pub fn mask_len(&self) -> usize {
        self.mask_len
    }

    /// The number of revealed trailing chars.
    pub fn end_len(&self) -> usize {
        self.end_len
    }

    /// The block character.
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Apply the mask to `text`.
    ///
    /// When the revealed head and tail cover the whole text there is nothing
    /// to hide, and `text` is returned unchanged.
    pub fn apply(
        &self,
        text: &str,
    ) -> String {
        let len = text.chars().count();
        let tail_start = len.saturating_sub(self.end_len);

        let mut buf = String::with_capacity(text.len() + self.mask_len);
        let mut block_written = false;
        for (idx, ch) in text.chars().enumerate() {
            if idx < self.start_len || idx >= tail_start {
                buf.push(ch);
            } else if !block_written {
                buf.extend(core::iter::repeat_n(self.mask_char, self.mask_len));
                block_written = true;
            }
        }
        buf
    }
}

/// Apply a [`BandMask`] with the default block character.
///
/// ## Arguments
/// * `text` - The source text.
/// * `start_len` - Number of leading chars to reveal.
/// * `mask_len` - Width of the mask block.
/// * `end_len` - Number of trailing chars to reveal.
pub fn mask_band(
    text: &str,
    start_len: usize,
    mask_len: usize,
    end_len: usize,
) -> String {
    BandMask::new(start_len, mask_len, end_len).apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_band() {
        assert_eq!(mask_band("Turkiye", 2, 3, 2), "Tu***ye");
    }

    #[test]
    fn test_block_width_is_fixed() {
        assert_eq!(mask_band("4111111111111111", 4, 4, 4), "4111****1111");
        assert_eq!(mask_band("abcdefgh", 1, 10, 1), "a**********h");
        assert_eq!(mask_band("abcdefgh", 1, 0, 1), "ah");
    }

    #[test]
    fn test_block_written_once() {
        let masked = mask_band("a-very-long-secret-value", 2, 3, 2);
        assert_eq!(masked, "a-***ue");
        assert_eq!(masked.matches('*').count(), 3);
    }

    #[test]
    fn test_mask_char_may_appear_in_head() {
        assert_eq!(mask_band("*abcd*", 1, 2, 1), "****");
    }

    #[test]
    fn test_overlapping_head_and_tail() {
        assert_eq!(mask_band("Turkiye", 4, 3, 3), "Turkiye");
        assert_eq!(mask_band("Turkiye", 10, 3, 10), "Turkiye");
        assert_eq!(mask_band("", 2, 3, 2), "");
    }

    #[test]
    fn test_zero_head_or_tail() {
        assert_eq!(mask_band("secret", 0, 3, 2), "***et");
        assert_eq!(mask_band("secret", 2, 3, 0), "se***");
        assert_eq!(mask_band("secret", 0, 3, 0), "***");
    }

    #[test]
    fn test_custom_mask_char() {
        let band = BandMask::new(1, 2, 1).with_mask_char('•');
        assert_eq!(band.mask_char(), '•');
        assert_eq!(band.apply("Şifre"), "Ş••e");
    }

    #[test]
    fn test_accessors() {
        let band = BandMask::new(2, 3, 4);
        assert_eq!(band.start_len(), 2);
        assert_eq!(band.mask_len(), 3);
        assert_eq!(band.end_len(), 4);
        assert_eq!(band.mask_char(), DEFAULT_MASK_CHAR);
    }
}
