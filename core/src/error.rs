//! Error types for the conversion engine.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Why a notation string could not be turned into an address.
///
/// Codecs fail fast: the first invalid field is reported and no partial
/// quadruple is ever returned. Parsing never clamps or substitutes a
/// default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Input does not match the notation's lexical shape
    /// (wrong field count, wrong character set, wrong digit length).
    #[error("invalid {notation} input: {reason}")]
    Format {
        /// Human-readable notation name, e.g. "dotted-decimal".
        notation: &'static str,
        /// What exactly was wrong with the input.
        reason: String,
    },

    /// Input is lexically valid but a field or the whole value falls
    /// outside the representable range.
    #[error("{notation} value out of range: {reason}")]
    Range {
        /// Human-readable notation name.
        notation: &'static str,
        /// Which value overflowed and its bounds.
        reason: String,
    },
}

impl ConvertError {
    /// Create a lexical-shape error.
    pub fn format(notation: &'static str, reason: impl Into<String>) -> Self {
        Self::Format {
            notation,
            reason: reason.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn range(notation: &'static str, reason: impl Into<String>) -> Self {
        Self::Range {
            notation,
            reason: reason.into(),
        }
    }
}
