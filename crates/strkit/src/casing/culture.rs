//! # Casing Cultures
//!
//! A [`Culture`] selects the simple upper/lower mappings used by title
//! casing. Every culture maps one char to one char using the Unicode
//! simple mappings, except the Turkic languages, which pair dotted and
//! dotless `i`:
//!
//! | culture      | `i` upper | `I` lower |
//! |--------------|-----------|-----------|
//! | `tr`, `az`   | `İ`       | `ı`       |
//! | all others   | `I`       | `i`       |

use core::{fmt, str::FromStr};

use crate::{
    errors::{SKResult, StrkitError},
    support::chars::{char_to_simple_lower, char_to_simple_upper},
};

/// The culture used when none is given.
pub const DEFAULT_CULTURE: &str = "en-US";

/// Languages with dotted / dotless `i` casing.
const TURKIC_LANGUAGES: [&str; 2] = ["tr", "az"];

/// A parsed culture identifier, such as `"en-US"` or `"tr-TR"`.
///
/// The empty identifier names the invariant culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Culture {
    name: String,
    language: String,
    turkic: bool,
}

impl Default for Culture {
    fn default() -> Self {
        Self {
            name: DEFAULT_CULTURE.to_string(),
            language: "en".to_string(),
            turkic: false,
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Culture {
    type Err = StrkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Culture {
    /// The invariant culture.
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            language: String::new(),
            turkic: false,
        }
    }

    /// Parse a culture identifier.
    ///
    /// Identifiers are a 2-3 letter language subtag followed by any number
    /// of 1-8 char alphanumeric subtags, separated by `-` or `_`.
    /// Matching is case-insensitive; `"TR_tr"` and `"tr-TR"` are the same
    /// culture.
    ///
    /// ## Errors
    /// [`StrkitError::UnknownCulture`] when the identifier is malformed.
    pub fn parse(identifier: &str) -> SKResult<Self> {
        if identifier.is_empty() {
            return Ok(Self::invariant());
        }

        let unknown = || StrkitError::UnknownCulture {
            identifier: identifier.to_string(),
        };

        let mut subtags = identifier.split(['-', '_']);
        let language = subtags.next().ok_or_else(unknown)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(unknown());
        }

        let mut name = language.to_ascii_lowercase();
        for (idx, subtag) in subtags.enumerate() {
            if !(1..=8).contains(&subtag.len()) || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(unknown());
            }
            name.push('-');
            // Region subtags are conventionally uppercase.
            if idx == 0 && subtag.len() == 2 {
                name.push_str(&subtag.to_ascii_uppercase());
            } else {
                name.push_str(subtag);
            }
        }

        let language = language.to_ascii_lowercase();
        let turkic = TURKIC_LANGUAGES.contains(&language.as_str());
        log::trace!("parsed culture {identifier:?} as {name:?} (turkic: {turkic})");

        Ok(Self {
            name,
            language,
            turkic,
        })
    }

    /// The normalized identifier; empty for the invariant culture.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowercase language subtag; empty for the invariant culture.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Is this the invariant culture?
    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    /// Append the lowercase form of `ch` to `buf`.
    pub fn push_lowercase(
        &self,
        ch: char,
        buf: &mut String,
    ) {
        match ch {
            'I' if self.turkic => buf.push('ı'),
            'İ' if self.turkic => buf.push('i'),
            _ => buf.push(char_to_simple_lower(ch)),
        }
    }

    /// Append the uppercase form of `ch` to `buf`.
    pub fn push_uppercase(
        &self,
        ch: char,
        buf: &mut String,
    ) {
        match ch {
            'i' if self.turkic => buf.push('İ'),
            _ => buf.push(char_to_simple_upper(ch)),
        }
    }

    /// Lowercase all of `text`.
    pub fn to_lowercase(
        &self,
        text: &str,
    ) -> String {
        let mut buf = String::with_capacity(text.len());
        for ch in text.chars() {
            self.push_lowercase(ch, &mut buf);
        }
        buf
    }
}
