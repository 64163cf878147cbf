//! # Casing
//!
//! Case transforms:
//! * [`to_title_case`] / [`to_title_case_in`] - capitalize every word, under a [`Culture`];
//! * [`to_body_case`] - capitalize the first letter of the text;
//! * [`to_lower_snake_case`] - `lower_snake_case`.
//!
//! [`CaseStyle`] names each transform, for callers that pick one at runtime.

pub mod body_case;
pub mod culture;
pub mod snake_case;
pub mod title_case;

#[doc(inline)]
pub use body_case::to_body_case;
#[doc(inline)]
pub use culture::{Culture, DEFAULT_CULTURE};
#[doc(inline)]
pub use snake_case::{SNAKE_SEPARATOR, to_lower_snake_case};
#[doc(inline)]
pub use title_case::{to_title_case, to_title_case_in};

/// A case transform, selectable by name.
///
/// Parses from (and displays as) kebab-case names: `"title"`, `"body"`,
/// `"lower-snake"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CaseStyle {
    /// See [`to_title_case`].
    Title,

    /// See [`to_body_case`].
    Body,

    /// See [`to_lower_snake_case`].
    LowerSnake,
}

impl CaseStyle {
    /// Apply this transform to `text`.
    ///
    /// Title case uses the default culture.
    pub fn apply(
        self,
        text: &str,
    ) -> String {
        match self {
            CaseStyle::Title => to_title_case(text),
            CaseStyle::Body => to_body_case(text),
            CaseStyle::LowerSnake => to_lower_snake_case(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_case_style_names() {
        for style in CaseStyle::iter() {
            let name = style.to_string();
            assert_eq!(name.parse::<CaseStyle>().unwrap(), style);
        }
        assert_eq!(CaseStyle::LowerSnake.to_string(), "lower-snake");
        assert_eq!("TITLE".parse::<CaseStyle>().unwrap(), CaseStyle::Title);
        assert!("upper".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_case_style_apply() {
        let text = "hello big World";
        assert_eq!(CaseStyle::Title.apply(text), "Hello Big World");
        assert_eq!(CaseStyle::Body.apply(text), "Hello big World");
        assert_eq!(CaseStyle::LowerSnake.apply(text), "hello_big_world");
    }
}
