//! Error types for the formatting and parsing functions.
//!
//! Only the two parsers can fail: malformed byte-size strings and
//! malformed age strings. The windowing and clamping functions are total
//! over their numeric domains and never error. Policy is fail-fast: a
//! string that does not match the expected grammar produces a descriptive
//! error rather than a partially-parsed value.

use thiserror::Error;

/// The error type for parse failures in trellis-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The byte-size string did not match `<number> <unit>`.
    #[error("invalid byte size '{0}': expected '<number> <unit>' like '420 GB'")]
    InvalidByteSize(String),

    /// The unit token's first letter was not one of B/K/M/G/T/P.
    #[error("unknown byte unit '{0}': expected one of B, KB, MB, GB, TB, PB")]
    UnknownUnit(String),

    /// An age token did not match `<integer><unit>`.
    #[error("invalid age string '{input}': {reason}")]
    InvalidAge {
        /// The full input string that failed to parse
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// The same duration unit appeared in more than one token.
    ///
    /// Aggregation semantics for repeated units were never defined by the
    /// widgets that produce these strings, so repeats are rejected.
    #[error("duration unit '{unit}' appears more than once in '{input}'")]
    DuplicateAgeUnit {
        /// The full input string
        input: String,
        /// The canonical unit that repeated
        unit: &'static str,
    },

    /// Subtracting the parsed duration from the reference instant left the
    /// representable date range.
    #[error("age '{0}' is out of range")]
    AgeOutOfRange(String),
}

/// A specialized Result type for parse operations.
pub type Result<T> = std::result::Result<T, FormatError>;
