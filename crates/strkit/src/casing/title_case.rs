//! # Title Case

use crate::casing::culture::Culture;

/// Title case `text` under the default culture (`en-US`).
///
/// See [`to_title_case_in`].
pub fn to_title_case(text: &str) -> String {
    to_title_case_in(text, &Culture::default())
}

/// Title case `text` under `culture`.
///
/// The whole text is lowercased, then the first letter of every
/// whitespace-delimited word is uppercased. Leading non-letters of a word
/// are skipped: `"++a"` becomes `"++A"`.
///
/// ## Arguments
/// * `text` - The source text.
/// * `culture` - The casing culture.
pub fn to_title_case_in(
    text: &str,
    culture: &Culture,
) -> String {
    let lowered = culture.to_lowercase(text);

    let mut buf = String::with_capacity(lowered.len());
    let mut want_capital = true;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            want_capital = true;
            buf.push(ch);
        } else if want_capital && ch.is_alphabetic() {
            want_capital = false;
            culture.push_uppercase(ch, &mut buf);
        } else {
            buf.push(ch);
        }
    }
    buf
}
