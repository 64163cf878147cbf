//! # Character Classification
//!
//! Unicode general-category predicates used by the cleaning and casing
//! transforms.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Is `ch` a decimal digit (`Nd`)?
///
/// Letter-like numbers (`Nl`) and other numbers (`No`) such as `½` or `Ⅻ`
/// are not digits.
#[inline]
pub fn char_is_digit(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

/// Is `ch` a symbol (`Sm`, `Sc`, `Sk` or `So`)?
#[inline]
pub fn char_is_symbol(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Is `ch` punctuation (any `P*` category)?
#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Is `ch` an uppercase letter (`Lu`)?
///
/// Narrower than [`char::is_uppercase`], which also accepts
/// `Other_Uppercase` code points such as `Ⓐ` and `Ⅻ`.
#[inline]
pub fn char_is_uppercase_letter(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::UppercaseLetter)
}

/// Is `ch` left alone by case transforms which only touch "word" characters?
///
/// Digits, whitespace, symbols and punctuation are case-neutral.
#[inline]
pub fn char_is_case_neutral(ch: char) -> bool {
    char_is_digit(ch) || ch.is_whitespace() || char_is_symbol(ch) || char_is_punctuation(ch)
}

/// The uppercase form of `ch`, when it is a single char.
///
/// Chars whose uppercase form expands (`ß` to `SS`) are returned unchanged.
#[inline]
pub fn char_to_simple_upper(ch: char) -> char {
    single_char(ch.to_uppercase()).unwrap_or(ch)
}

/// The lowercase form of `ch`, when it is a single char.
///
/// `İ` lowercases to `i`, its Unicode simple mapping. Other chars whose
/// lowercase form expands are returned unchanged.
#[inline]
pub fn char_to_simple_lower(ch: char) -> char {
    match ch {
        'İ' => 'i',
        _ => single_char(ch.to_lowercase()).unwrap_or(ch),
    }
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
