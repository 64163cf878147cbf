//! # Word Tokenizer

use core::iter::FusedIterator;

/// The characters which separate words.
///
/// This is a fixed set; word splitting is not locale aware.
pub const WORD_DELIMITERS: [char; 7] = ['.', '?', '!', ' ', ';', ':', ','];

/// Is `ch` one of the [`WORD_DELIMITERS`]?
#[inline]
pub fn is_word_delimiter(ch: char) -> bool {
    WORD_DELIMITERS.contains(&ch)
}

/// Split `text` into words.
///
/// Yields the maximal runs of non-delimiter characters, left to right.
/// Consecutive delimiters never produce empty words.
///
/// ## Arguments
/// * `text` - The source text.
///
/// ## Returns
/// An iterator of sub-slices of `text`.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator over the words of a text; see [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(|c: char| !is_word_delimiter(c))?;
        let tail = &self.rest[start..];
        let end = tail.find(is_word_delimiter).unwrap_or(tail.len());

        let (word, rest) = tail.split_at(end);
        self.rest = rest;
        Some(word)
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(
            words("++a little Bunny raBBit"),
            vec!["++a", "little", "Bunny", "raBBit"]
        );
    }

    #[test]
    fn test_every_delimiter() {
        assert_eq!(
            words("one.two?three!four five;six:seven,eight"),
            vec!["one", "two", "three", "four", "five", "six", "seven", "eight"]
        );
    }

    #[test]
    fn test_empty_tokens_discarded() {
        assert_eq!(words(""), Vec::<&str>::new());
        assert_eq!(words(" .,;:!? "), Vec::<&str>::new());
        assert_eq!(words("..hello,,  world!!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_other_whitespace_is_not_a_delimiter() {
        assert_eq!(words("tab\tline\nbreak"), vec!["tab\tline\nbreak"]);
        assert_eq!(words("dash-and_under"), vec!["dash-and_under"]);
    }

    #[test]
    fn test_multibyte_words() {
        assert_eq!(
            words("Türkiye, güzel; ülke."),
            vec!["Türkiye", "güzel", "ülke"]
        );
    }

    #[test]
    fn test_fused() {
        let mut tokens = tokenize("a b");
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), Some("b"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
