//! Error handling for the trellis CLI.
//!
//! Core parse failures arrive as [`trellis_core::FormatError`] and are
//! wrapped here together with configuration and argument errors. `main`
//! converts the final error into a miette diagnostic so users get a
//! readable report instead of a Debug dump.

use miette::Report;
use thiserror::Error;
use trellis_core::FormatError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A core formatting or parsing function rejected its input.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration loading or merging failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A command-line argument was syntactically valid but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Converts a [`CliError`] into a miette [`Report`], attaching a help
/// hint where one is actionable.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Format(FormatError::InvalidByteSize(ref input)) => miette::miette!(
            help = "sizes look like '420 GB' or '1.5 MB'",
            "invalid byte size '{input}'"
        ),
        CliError::Format(FormatError::InvalidAge { ref input, ref reason }) => miette::miette!(
            help = "age strings look like '1m 1d' or '10 hours, 23 minutes'",
            "invalid age string '{input}': {reason}"
        ),
        CliError::Config(ref message) => miette::miette!(
            help = "check trellis.toml syntax and TRELLIS_* environment variables",
            "configuration error: {message}"
        ),
        other => miette::miette!("{other}"),
    }
}
