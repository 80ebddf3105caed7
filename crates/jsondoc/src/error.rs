//! Error types for document handling and date resolution.

use thiserror::Error;

/// Error while resolving a date from text.
///
/// A scanner "no match" is not an error — it is control flow that sends the
/// resolver to the next candidate format. Only the two cases below are ever
/// surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The value was null, empty or all-whitespace. Reported before any scan
    /// attempt so callers can tell missing data from malformed data.
    #[error("unparseable date with empty value")]
    EmptyValue,

    /// Every strategy — the scanner and all fallback patterns — declined.
    #[error("unparseable date: {text:?}, supported formats: [{patterns}]")]
    NoFormatMatched { text: String, patterns: String },
}

/// Error from the document façade and typed accessors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    /// The underlying codec rejected the text.
    #[error("invalid JSON document: {message}")]
    InvalidDocument { message: String },

    /// The document parsed, but its root is not the requested container.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The document parsed, but its root is not the requested container.
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    /// A value could not be coerced to the requested type.
    #[error("can not cast to {target}, value: {value}")]
    Cast { target: &'static str, value: String },

    /// A date-valued field failed to resolve.
    #[error(transparent)]
    Date(#[from] DateParseError),
}

impl JsonError {
    pub(crate) fn codec(err: serde_json::Error) -> Self {
        JsonError::InvalidDocument {
            message: err.to_string(),
        }
    }

    pub(crate) fn cast(target: &'static str, value: &serde_json::Value) -> Self {
        JsonError::Cast {
            target,
            value: value.to_string(),
        }
    }
}
