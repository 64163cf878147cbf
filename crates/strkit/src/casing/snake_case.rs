//! # Lower Snake Case

use crate::{
    singularize::collapse_adjacent_char,
    support::chars::{char_is_uppercase_letter, char_to_simple_lower},
};

/// The word separator of [`to_lower_snake_case`].
pub const SNAKE_SEPARATOR: char = '_';

/// Convert `text` to `lower_snake_case`.
///
/// The first char is lowercased. After it, each uppercase letter becomes
/// the separator followed by its lowercase form, each whitespace char
/// becomes the separator, and everything else is copied. Runs of
/// separators are then collapsed to one.
///
/// Lowercasing maps one char to one char, so `İ` becomes a plain `i`.
///
/// ```
/// use strkit::casing::to_lower_snake_case;
///
/// assert_eq!(to_lower_snake_case("HelloWorld  Again"), "hello_world_again");
/// ```
pub fn to_lower_snake_case(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut buf = String::with_capacity(text.len() + text.len() / 4);
    buf.push(char_to_simple_lower(first));
    for ch in chars {
        if char_is_uppercase_letter(ch) {
            buf.push(SNAKE_SEPARATOR);
            buf.push(char_to_simple_lower(ch));
        } else if ch.is_whitespace() {
            buf.push(SNAKE_SEPARATOR);
        } else {
            buf.push(ch);
        }
    }

    collapse_adjacent_char(&buf, SNAKE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_snake_case() {
        assert_eq!(
            to_lower_snake_case("++a little Bunny raBBit waNdering in a huge Forest"),
            "++a_little_bunny_ra_b_bit_wa_ndering_in_a_huge_forest"
        );
        assert_eq!(to_lower_snake_case("camelCaseName"), "camel_case_name");
        assert_eq!(to_lower_snake_case("PascalCase"), "pascal_case");
        assert_eq!(to_lower_snake_case(""), "");
        assert_eq!(to_lower_snake_case("X"), "x");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(to_lower_snake_case("a \t B"), "a_b");
        assert_eq!(to_lower_snake_case("already__snake"), "already_snake");
        assert_eq!(to_lower_snake_case("trailing space "), "trailing_space_");
    }

    #[test]
    fn test_first_char_is_only_lowercased() {
        // A leading space is not turned into a separator.
        assert_eq!(to_lower_snake_case(" Lead"), " _lead");
        assert_eq!(to_lower_snake_case("ABC"), "a_b_c");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(to_lower_snake_case("şehirMerkezi Çarşı"), "şehir_merkezi_çarşı");
    }

    #[test]
    fn test_lowercase_is_one_to_one() {
        assert_eq!(to_lower_snake_case("İstanbul"), "istanbul");
        assert_eq!(to_lower_snake_case("AİB"), "a_i_b");
        assert_eq!(to_lower_snake_case("straße"), "straße");
        assert_eq!(to_lower_snake_case("GROẞ"), "g_r_o_ß");
    }
}
