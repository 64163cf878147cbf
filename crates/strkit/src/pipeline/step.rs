//! # Pipeline Steps

use core::{fmt, str::FromStr};

use crate::{
    casing::{CaseStyle, Culture, to_title_case_in},
    cleaning::{cut, strip_digits, strip_symbols, trim_inside},
    errors::{SKResult, StrkitError},
    masking::{BandMask, mask_window},
    singularize::{collapse_adjacent, collapse_adjacent_char},
};

/// A single text transform with its parameters.
///
/// ## Text Form
///
/// Steps parse from, and display as, `name[:args]`:
///
/// | step                              | text form                         |
/// |-----------------------------------|-----------------------------------|
/// | [`Step::StripDigits`]             | `strip-digits`                    |
/// | [`Step::StripSymbols`]            | `strip-symbols`                   |
/// | [`Step::TrimInside`]              | `trim-inside`                     |
/// | [`Step::Singularize`]             | `singularize`                     |
/// | [`Step::SingularizeChar`]         | `singularize:_`                   |
/// | [`Step::Case`]                    | `title`, `body`, `lower-snake`    |
/// | [`Step::TitleCaseIn`]             | `title:tr-TR`                     |
/// | [`Step::MaskWindow`]              | `mask-window:8,12`                |
/// | [`Step::MaskBand`]                | `mask-band:2,3,2` / `mask-band:2,3,2,#` |
/// | [`Step::Cut`]                     | `cut:5`                           |
///
/// A char argument is written either as the char itself, or as its code
/// point, `U+XXXX`. Whitespace, control chars, `|` and `,` always display
/// in the code point form, so `singularize:U+0020` collapses runs of
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Remove decimal digits.
    StripDigits,

    /// Remove symbols.
    StripSymbols,

    /// Remove spaces.
    TrimInside,

    /// Collapse runs of any char.
    Singularize,

    /// Collapse runs of one char.
    SingularizeChar(char),

    /// A case transform.
    Case(CaseStyle),

    /// Title case under a specific culture.
    TitleCaseIn(Culture),

    /// A window mask.
    MaskWindow {
        /// Char index of the visible first position.
        start: usize,

        /// Window width in chars.
        length: usize,
    },

    /// A band mask.
    MaskBand(BandMask),

    /// Keep at most this many leading chars.
    Cut(usize),
}

impl Step {
    /// Apply this step to `text`.
    pub fn apply(
        &self,
        text: &str,
    ) -> String {
        match self {
            Step::StripDigits => strip_digits(text),
            Step::StripSymbols => strip_symbols(text),
            Step::TrimInside => trim_inside(text),
            Step::Singularize => collapse_adjacent(text),
            Step::SingularizeChar(target) => collapse_adjacent_char(text, *target),
            Step::Case(style) => style.apply(text),
            Step::TitleCaseIn(culture) => to_title_case_in(text, culture),
            Step::MaskWindow { start, length } => mask_window(text, *start, *length),
            Step::MaskBand(band) => band.apply(text),
            Step::Cut(length) => cut(text, *length),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Step::StripDigits => write!(f, "strip-digits"),
            Step::StripSymbols => write!(f, "strip-symbols"),
            Step::TrimInside => write!(f, "trim-inside"),
            Step::Singularize => write!(f, "singularize"),
            Step::SingularizeChar(target) => write!(f, "singularize:{}", CharArg(*target)),
            Step::Case(style) => write!(f, "{style}"),
            Step::TitleCaseIn(culture) => write!(f, "title:{culture}"),
            Step::MaskWindow { start, length } => write!(f, "mask-window:{start},{length}"),
            Step::MaskBand(band) => write!(
                f,
                "mask-band:{},{},{},{}",
                band.start_len(),
                band.mask_len(),
                band.end_len(),
                CharArg(band.mask_char())
            ),
            Step::Cut(length) => write!(f, "cut:{length}"),
        }
    }
}

/// Display form of a char argument.
struct CharArg(char);

impl CharArg {
    fn needs_code_point(&self) -> bool {
        let ch = self.0;
        ch.is_whitespace() || ch.is_control() || matches!(ch, '|' | ',')
    }
}

impl fmt::Display for CharArg {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.needs_code_point() {
            write!(f, "U+{:04X}", self.0 as u32)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Step {
    type Err = StrkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_step(s)
    }
}

fn invalid_step(
    step: &str,
    reason: impl Into<String>,
) -> StrkitError {
    StrkitError::InvalidStep {
        step: step.to_string(),
        reason: reason.into(),
    }
}

fn split_args<'a>(
    step: &str,
    args: Option<&'a str>,
    expected: &[usize],
) -> SKResult<Vec<&'a str>> {
    let args = args.ok_or_else(|| invalid_step(step, "missing arguments"))?;
    let parts: Vec<&str> = args.split(',').collect();
    if !expected.contains(&parts.len()) {
        return Err(invalid_step(
            step,
            format!("expected {expected:?} arguments, found {}", parts.len()),
        ));
    }
    Ok(parts)
}

fn parse_number(
    step: &str,
    part: &str,
) -> SKResult<usize> {
    part.trim()
        .parse::<usize>()
        .map_err(|e| invalid_step(step, format!("{part:?}: {e}")))
}

fn parse_char(
    step: &str,
    part: &str,
) -> SKResult<char> {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => return Ok(ch),
        (None, _) => return Err(invalid_step(step, "missing char")),
        _ => (),
    }

    let code = part
        .strip_prefix("U+")
        .or_else(|| part.strip_prefix("u+"))
        .filter(|hex| (1..=6).contains(&hex.len()))
        .ok_or_else(|| invalid_step(step, format!("{part:?} is not a single char")))?;
    u32::from_str_radix(code, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| invalid_step(step, format!("{part:?} is not a code point")))
}

fn parse_step(s: &str) -> SKResult<Step> {
    let (name, args) = match s.split_once(':') {
        Some((name, args)) => (name.trim(), Some(args)),
        None => (s.trim(), None),
    };

    let no_args = |step: Step| match args {
        None => Ok(step),
        Some(_) => Err(invalid_step(s, "takes no arguments")),
    };

    match name {
        "strip-digits" => no_args(Step::StripDigits),
        "strip-symbols" => no_args(Step::StripSymbols),
        "trim-inside" => no_args(Step::TrimInside),
        "singularize" => match args {
            None => Ok(Step::Singularize),
            Some(target) => Ok(Step::SingularizeChar(parse_char(s, target)?)),
        },
        "title" => match args {
            None => Ok(Step::Case(CaseStyle::Title)),
            Some(culture) => Ok(Step::TitleCaseIn(culture.trim().parse()?)),
        },
        "mask-window" => {
            let parts = split_args(s, args, &[2])?;
            Ok(Step::MaskWindow {
                start: parse_number(s, parts[0])?,
                length: parse_number(s, parts[1])?,
            })
        }
        "mask-band" => {
            let parts = split_args(s, args, &[3, 4])?;
            let mut band = BandMask::new(
                parse_number(s, parts[0])?,
                parse_number(s, parts[1])?,
                parse_number(s, parts[2])?,
            );
            if let Some(mask_char) = parts.get(3) {
                band = band.with_mask_char(parse_char(s, mask_char)?);
            }
            Ok(Step::MaskBand(band))
        }
        "cut" => {
            let parts = split_args(s, args, &[1])?;
            Ok(Step::Cut(parse_number(s, parts[0])?))
        }
        other => match other.parse::<CaseStyle>() {
            Ok(style) => no_args(Step::Case(style)),
            Err(_) => Err(invalid_step(s, "unknown step")),
        },
    }
}
