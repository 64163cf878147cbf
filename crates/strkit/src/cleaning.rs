//! # Cleaning
//!
//! Character stripping, plus small null-tolerant helpers.
//!
//! The null-tolerant functions take `impl Into<Option<&str>>`, so they
//! accept either a `&str` or an `Option<&str>`; a missing text produces
//! the documented fallback instead of an error.

use crate::support::chars::{char_is_digit, char_is_symbol};

/// Remove every decimal digit from `text`.
///
/// Only `Nd` chars are dropped; whitespace around them is kept.
///
/// ```
/// use strkit::cleaning::strip_digits;
///
/// assert_eq!(strip_digits("123 ankara ++"), " ankara ++");
/// ```
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|&c| !char_is_digit(c)).collect()
}

/// Remove every symbol (math, currency, modifier, other) from `text`.
///
/// Punctuation, letters and digits are kept.
pub fn strip_symbols(text: &str) -> String {
    text.chars().filter(|&c| !char_is_symbol(c)).collect()
}

/// Remove every space (U+0020) from `text`, inside and out.
///
/// Other whitespace is kept. A missing text yields `""`.
pub fn trim_inside<'a>(text: impl Into<Option<&'a str>>) -> String {
    text.into()
        .map(|text| text.replace(' ', ""))
        .unwrap_or_default()
}

/// The first `length` chars of `text`, or all of it when shorter.
///
/// A missing text yields `""`.
pub fn cut<'a>(
    text: impl Into<Option<&'a str>>,
    length: usize,
) -> String {
    text.into()
        .map(|text| match text.char_indices().nth(length) {
            Some((end, _)) => text[..end].to_string(),
            None => text.to_string(),
        })
        .unwrap_or_default()
}

/// `text` followed by `times` more copies of itself.
///
/// `multiplex("#", 21)` is 22 `#`s.
pub fn multiplex(
    text: &str,
    times: usize,
) -> String {
    text.repeat(times.saturating_add(1))
}

/// Does `values` hold a missing or empty string?
///
/// A missing sequence yields `false`.
pub fn null_exists<'a, S>(values: Option<&'a [Option<S>]>) -> bool
where
    S: AsRef<str> + 'a,
{
    values.is_some_and(|values| {
        values
            .iter()
            .any(|v| v.as_ref().is_none_or(|s| s.as_ref().is_empty()))
    })
}
