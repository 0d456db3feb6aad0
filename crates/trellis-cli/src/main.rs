//! Trellis CLI - display-formatting utilities from the shell.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use trellis_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    // Execute the appropriate command, converting CLI errors to miette
    // diagnostics for readable error reporting
    commands::execute(&args).map_err(error::cli_error_to_miette)
}
