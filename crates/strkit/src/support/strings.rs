//! # String Utilities

use std::borrow::Cow;

/// Decode bytes as UTF-8, replacing invalid sequences with `U+FFFD`.
///
/// Reuses the input allocation when the bytes are already valid.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    if let Cow::Owned(string) = String::from_utf8_lossy(&v) {
        string
    } else {
        // SAFETY: `String::from_utf8_lossy` only borrows when `v` is valid UTF-8.
        unsafe { String::from_utf8_unchecked(v) }
    }
}

/// Simple (locale independent) case fold of `text`.
///
/// Borrows when folding would not change anything.
pub fn fold_case(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| c.to_lowercase().eq(Some(c))) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Case-insensitive equality under [`fold_case`].
pub fn eq_fold_case(
    a: &str,
    b: &str,
) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive substring test under [`fold_case`].
///
/// An empty `needle` is contained in every `haystack`.
pub fn contains_fold_case(
    haystack: &str,
    needle: &str,
) -> bool {
    fold_case(haystack).contains(fold_case(needle).as_ref())
}

/// Number of `char`s in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
