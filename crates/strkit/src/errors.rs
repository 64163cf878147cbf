//! # Error Types

/// Errors from strkit operations.
///
/// The core transforms are total and never fail; these errors come from
/// culture parsing and the collaborator wrappers.
#[derive(Debug, thiserror::Error)]
pub enum StrkitError {
    /// A culture identifier could not be parsed.
    #[error("unknown culture identifier: {identifier:?}")]
    UnknownCulture {
        /// The rejected identifier.
        identifier: String,
    },

    /// A pipeline step description could not be parsed.
    #[error("invalid step {step:?}: {reason}")]
    InvalidStep {
        /// The rejected step description.
        step: String,

        /// Why it was rejected.
        reason: String,
    },

    /// Random generation was asked to draw from an empty alphabet.
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    /// Malformed Base64 or DEFLATE input.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// No font is registered under the requested name.
    #[error("unknown font: {name:?}")]
    UnknownFont {
        /// The requested font name.
        name: String,
    },

    /// Font bytes could not be parsed.
    #[error("invalid font data: {0}")]
    InvalidFont(String),

    /// Rendering was asked to draw text that is empty after trimming.
    #[error("nothing to render: text is empty after trimming")]
    EmptyText,

    /// The operation is not available in this build.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for strkit operations.
pub type SKResult<T> = core::result::Result<T, StrkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StrkitError::UnknownCulture {
            identifier: "x y".to_string(),
        };
        assert_eq!(err.to_string(), "unknown culture identifier: \"x y\"");

        let err = StrkitError::UnsupportedPlatform("raster");
        assert_eq!(err.to_string(), "unsupported platform: raster");

        let err: StrkitError = std::io::Error::other("boom").into();
        assert!(matches!(err, StrkitError::Io(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
