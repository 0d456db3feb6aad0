//! Command dispatch for the trellis CLI.
//!
//! Each handler resolves its effective settings (flags over config), calls
//! the corresponding `trellis-core` function, and prints the result on
//! stdout. Anything diagnostic goes to the tracing layer instead, so
//! stdout stays scriptable.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;
use trellis_core::{
    age_to_instant, age_to_instant_at, format_bytes, normalize_utc_offset, pagination_window,
    parse_bytes, parse_utc_offset, percent_complete, ByteUnit,
};

use crate::cli::{
    AgeArgs, BytesCommand, BytesFormatArgs, BytesParseArgs, Cli, Command, OffsetArgs, PagesArgs,
    PercentArgs,
};
use crate::config::DisplayConfig;
use crate::error::{CliError, Result};

/// Executes the parsed command line.
///
/// # Errors
///
/// Returns a [`CliError`] when configuration loading fails or a core
/// parser rejects its input.
pub fn execute(args: &Cli) -> Result<()> {
    let config = match &args.config {
        Some(path) => DisplayConfig::load_required(path)?,
        None => DisplayConfig::load(None)?,
    };
    debug!(?config, "resolved display configuration");

    match &args.command {
        Command::Bytes(BytesCommand::Format(format_args)) => {
            bytes_format(format_args, &config)
        }
        Command::Bytes(BytesCommand::Parse(parse_args)) => bytes_parse(parse_args),
        Command::Age(age_args) => age(age_args),
        Command::Pages(pages_args) => pages(pages_args, &config),
        Command::Percent(percent_args) => percent(percent_args, &config),
        Command::Offset(offset_args) => offset(offset_args),
    }
}

fn bytes_format(args: &BytesFormatArgs, config: &DisplayConfig) -> Result<()> {
    let unit = args.unit.as_deref().or(config.byte_unit.map(ByteUnit::label));
    let formatted = format_bytes(args.bytes, unit);
    debug!(bytes = args.bytes, ?unit, %formatted, "formatted byte size");
    println!("{formatted}");
    Ok(())
}

fn bytes_parse(args: &BytesParseArgs) -> Result<()> {
    let bytes = parse_bytes(&args.size)?;
    debug!(size = %args.size, bytes, "parsed byte size");
    println!("{bytes}");
    Ok(())
}

fn age(args: &AgeArgs) -> Result<()> {
    let instant = match &args.at {
        Some(at) => {
            let reference: DateTime<Utc> = DateTime::parse_from_rfc3339(at)
                .map_err(|e| {
                    CliError::InvalidArgument(format!("--at is not RFC 3339 ('{at}'): {e}"))
                })?
                .with_timezone(&Utc);
            age_to_instant_at(&args.age, reference)?
        }
        None => age_to_instant(&args.age)?,
    };
    debug!(age = %args.age, %instant, "resolved age string");
    println!("{}", instant.to_rfc3339_opts(SecondsFormat::Secs, true));
    Ok(())
}

fn pages(args: &PagesArgs, config: &DisplayConfig) -> Result<()> {
    let show = args.show.unwrap_or(config.pages_to_show);
    let window = pagination_window(args.current, args.total, show);
    debug!(
        current = args.current,
        total = args.total,
        show,
        len = window.len(),
        "computed pagination window"
    );
    let rendered: Vec<String> = window.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}

fn percent(args: &PercentArgs, config: &DisplayConfig) -> Result<()> {
    let max = args.max.unwrap_or(config.percent_max);
    let percent = percent_complete(args.value, max);
    debug!(value = args.value, max, percent, "computed percent complete");
    println!("{percent}");
    Ok(())
}

fn offset(args: &OffsetArgs) -> Result<()> {
    let found = parse_utc_offset(&args.text);
    debug!(text = %args.text, offset = %found, "extracted UTC offset");
    if args.normalize {
        println!("{}", normalize_utc_offset(found));
    } else {
        println!("{found}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("argv parses")
    }

    #[test]
    fn bytes_parse_surfaces_core_errors() {
        let cli = parse(&["trellis", "bytes", "parse", "lots of data"]);
        assert!(matches!(execute(&cli), Err(CliError::Format(_))));
    }

    #[test]
    fn age_rejects_non_rfc3339_reference() {
        let cli = parse(&["trellis", "age", "1d", "--at", "yesterday"]);
        assert!(matches!(execute(&cli), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn missing_config_file_fails_before_dispatch() {
        let cli = parse(&[
            "trellis",
            "--config",
            "/nonexistent/trellis.toml",
            "percent",
            "22",
        ]);
        assert!(matches!(execute(&cli), Err(CliError::Config(_))));
    }

    #[test]
    fn happy_paths_execute_cleanly() {
        for argv in [
            vec!["trellis", "bytes", "format", "1250000"],
            vec!["trellis", "bytes", "parse", "420 GB"],
            vec!["trellis", "age", "1m 1d", "--at", "2024-06-15T12:00:00Z"],
            vec!["trellis", "pages", "3", "10", "--show", "5"],
            vec!["trellis", "percent", "22", "--max", "50"],
            vec!["trellis", "offset", "13:00 (UTC-0800)"],
        ] {
            let cli = parse(&argv);
            assert!(execute(&cli).is_ok(), "command failed: {argv:?}");
        }
    }
}
