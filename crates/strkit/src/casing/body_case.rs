//! # Body Case

use crate::support::chars::{
    char_is_case_neutral,
    char_is_uppercase_letter,
    char_to_simple_upper,
};

/// Sentence-style capitalization: force the first letter of `text` uppercase.
///
/// Digits, whitespace, symbols and punctuation are copied as-is. Any other
/// char is uppercased only while the output holds no uppercase letter yet;
/// after that, every char keeps its original case. In practice only the
/// first letter of the whole text is ever forced uppercase; later words are
/// not capitalized, even after a space.
///
/// Uppercasing maps one char to one char; a char with no single-char
/// uppercase form (`ß`) is kept as-is.
///
/// ```
/// use strkit::casing::to_body_case;
///
/// assert_eq!(to_body_case("++a little Bunny"), "++A little Bunny");
/// ```
pub fn to_body_case(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    let mut seen_upper = false;
    for ch in text.chars() {
        if char_is_case_neutral(ch) || seen_upper {
            buf.push(ch);
            seen_upper |= char_is_uppercase_letter(ch);
            continue;
        }

        let upper = char_to_simple_upper(ch);
        buf.push(upper);
        seen_upper |= char_is_uppercase_letter(upper);
    }
    buf
}
