//! # trellis-cli
//!
//! Shell access to the trellis display-formatting utilities. Every
//! subcommand is a thin wrapper over one `trellis-core` function, which
//! makes the CLI double as a debugging harness: paste the string a widget
//! rendered and see what the core parses out of it.
//!
//! The crate is organized like a typical clap application:
//!
//! - [`cli`]: argument structure (clap v4 derive)
//! - [`commands`]: dispatch and output
//! - [`config`]: layered display defaults (file < env < flags)
//! - [`error`]: CLI error taxonomy and miette conversion
//! - [`logger`]: tracing-subscriber setup

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;

pub use config::DisplayConfig;
pub use error::{CliError, Result};
