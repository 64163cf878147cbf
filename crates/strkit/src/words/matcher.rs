//! # Word Matcher
//!
//! Case-insensitive search over the words produced by
//! [`tokenize`](super::tokenize).

use crate::{
    support::strings::{contains_fold_case, eq_fold_case},
    words::tokenizer::tokenize,
};

/// How a word is compared against the seek word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MatchMode {
    /// The whole word equals the seek word.
    #[default]
    Exact,

    /// The word contains the seek word.
    Contains,
}

impl MatchMode {
    /// Does `word` match `seek` under this mode?
    ///
    /// Comparison ignores case in both modes.
    pub fn matches(
        self,
        word: &str,
        seek: &str,
    ) -> bool {
        match self {
            MatchMode::Exact => eq_fold_case(word, seek),
            MatchMode::Contains => contains_fold_case(word, seek),
        }
    }
}

/// The words of `text` which match `seek`, in text order.
///
/// ## Arguments
/// * `text` - The source text.
/// * `seek` - The word to look for.
/// * `mode` - Whole-word or substring matching.
pub fn matching_words<'a>(
    text: &'a str,
    seek: &'a str,
    mode: MatchMode,
) -> impl Iterator<Item = &'a str> + 'a {
    tokenize(text).filter(move |word| mode.matches(word, seek))
}

/// Count the words of `text` equal to `seek`, ignoring case.
pub fn count_exact(
    text: &str,
    seek: &str,
) -> usize {
    matching_words(text, seek, MatchMode::Exact).count()
}

/// Count the words of `text` containing `seek`, ignoring case.
pub fn count_contains(
    text: &str,
    seek: &str,
) -> usize {
    matching_words(text, seek, MatchMode::Contains).count()
}

/// Call `visit` with every word of `text` equal to `seek`, ignoring case.
///
/// Words are visited in text order; a panic in `visit` is not caught.
pub fn for_each_exact<F>(
    text: &str,
    seek: &str,
    visit: F,
) where
    F: FnMut(&str),
{
    matching_words(text, seek, MatchMode::Exact).for_each(visit)
}

/// Call `visit` with every word of `text` containing `seek`, ignoring case.
///
/// Words are visited in text order; a panic in `visit` is not caught.
pub fn for_each_contains<F>(
    text: &str,
    seek: &str,
    visit: F,
) where
    F: FnMut(&str),
{
    matching_words(text, seek, MatchMode::Contains).for_each(visit)
}

/// Fallible [`for_each_exact`].
///
/// Stops at, and returns, the first error from `visit`.
pub fn try_for_each_exact<F, E>(
    text: &str,
    seek: &str,
    visit: F,
) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    matching_words(text, seek, MatchMode::Exact).try_for_each(visit)
}

/// Fallible [`for_each_contains`].
///
/// Stops at, and returns, the first error from `visit`.
pub fn try_for_each_contains<F, E>(
    text: &str,
    seek: &str,
    visit: F,
) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    matching_words(text, seek, MatchMode::Contains).try_for_each(visit)
}

/// Does `text` contain `seek` anywhere, ignoring case?
///
/// This searches the raw text, not words; `"ny ra"` is found in
/// `"Bunny raBBit"`. A missing text contains nothing.
pub fn contains_no_case<'a>(
    text: impl Into<Option<&'a str>>,
    seek: &str,
) -> bool {
    text.into()
        .is_some_and(|text| contains_fold_case(text, seek))
}
