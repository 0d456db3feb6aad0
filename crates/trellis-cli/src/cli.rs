//! Command-line interface definition for the trellis CLI.
//!
//! This module defines the complete CLI structure using clap v4's derive
//! macros. Each subcommand maps onto exactly one `trellis-core` function.
//!
//! # Command Structure
//!
//! - `trellis bytes format` - Format a byte count as a human-readable size
//! - `trellis bytes parse` - Parse a size string back into a byte count
//! - `trellis age` - Resolve a relative-age string to a UTC instant
//! - `trellis pages` - Compute the pagination window for a page range
//! - `trellis percent` - Clamp a value/max pair to an integer percentage
//! - `trellis offset` - Extract a UTC offset from a display string

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Trellis - display-formatting utilities for web UI components
#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Display-formatting utilities for web UI components",
    long_about = "Trellis provides the pure formatting and parsing functions behind\n\
                  common UI widgets: byte-size labels, relative-age displays,\n\
                  pagination controls, progress bars, and timezone badges.\n\
                  Each subcommand runs one of those functions from the shell."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a trellis.toml config file with display defaults
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available trellis subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format or parse byte sizes
    #[command(subcommand)]
    Bytes(BytesCommand),

    /// Resolve a relative-age string to a UTC instant
    ///
    /// Accepts both compact ("1m 1d") and verbose ("1 month, 1 day")
    /// forms and prints the instant that far in the past.
    Age(AgeArgs),

    /// Compute the window of page links to render
    Pages(PagesArgs),

    /// Compute an integer percentage from a value and maximum
    Percent(PercentArgs),

    /// Extract the UTC offset from a display string
    Offset(OffsetArgs),
}

/// Byte-size subcommands
#[derive(Subcommand, Debug)]
pub enum BytesCommand {
    /// Format a raw byte count as a human-readable size
    Format(BytesFormatArgs),

    /// Parse a size string like "420 GB" into a byte count
    Parse(BytesParseArgs),
}

/// Arguments for `bytes format`
#[derive(Args, Debug)]
pub struct BytesFormatArgs {
    /// The byte count to format
    pub bytes: f64,

    /// Force a specific unit (B, KB, MB, GB, TB, PB)
    ///
    /// Unrecognized units are ignored and the unit is auto-detected,
    /// matching the behavior of the size labels in the UI.
    #[arg(short, long, value_name = "UNIT")]
    pub unit: Option<String>,
}

/// Arguments for `bytes parse`
#[derive(Args, Debug)]
pub struct BytesParseArgs {
    /// The size string to parse, e.g. "420 GB"
    pub size: String,
}

/// Arguments for the age command
#[derive(Args, Debug)]
pub struct AgeArgs {
    /// The age string, e.g. "1m 1d" or "10 hours, 23 minutes"
    pub age: String,

    /// Reference instant (RFC 3339) to subtract from instead of now
    #[arg(long, value_name = "TIMESTAMP")]
    pub at: Option<String>,
}

/// Arguments for the pages command
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Current page (0-indexed)
    pub current: usize,

    /// Total number of pages
    pub total: usize,

    /// How many page links to show (defaults to the configured value)
    #[arg(short, long, value_name = "N")]
    pub show: Option<usize>,
}

/// Arguments for the percent command
#[derive(Args, Debug)]
pub struct PercentArgs {
    /// The current value
    pub value: f64,

    /// The maximum value (defaults to the configured value)
    #[arg(short, long, value_name = "MAX")]
    pub max: Option<f64>,
}

/// Arguments for the offset command
#[derive(Args, Debug)]
pub struct OffsetArgs {
    /// The display string to search, e.g. "13:00 (UTC-0800)"
    pub text: String,

    /// Strip the colon so "-08:00" prints as "-0800"
    #[arg(long)]
    pub normalize: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_bytes_format_with_unit() {
        let cli = Cli::try_parse_from(["trellis", "bytes", "format", "1250000", "--unit", "GB"])
            .unwrap();
        match cli.command {
            Command::Bytes(BytesCommand::Format(args)) => {
                assert_eq!(args.bytes, 1_250_000.0);
                assert_eq!(args.unit.as_deref(), Some("GB"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_pages_with_defaulted_show() {
        let cli = Cli::try_parse_from(["trellis", "pages", "3", "10"]).unwrap();
        match cli.command {
            Command::Pages(args) => {
                assert_eq!(args.current, 3);
                assert_eq!(args.total, 10);
                assert_eq!(args.show, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["trellis", "-v", "-q", "percent", "22"]);
        assert!(result.is_err());
    }

    #[test]
    fn age_accepts_reference_instant() {
        let cli = Cli::try_parse_from([
            "trellis",
            "age",
            "1 month, 1 day",
            "--at",
            "2024-06-15T12:00:00Z",
        ])
        .unwrap();
        match cli.command {
            Command::Age(args) => {
                assert_eq!(args.age, "1 month, 1 day");
                assert_eq!(args.at.as_deref(), Some("2024-06-15T12:00:00Z"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
