//! UTC-offset extraction from display strings.
//!
//! Timestamp widgets render strings like `"13:00 (UTC-0800)"`, and the
//! page objects that drive browser tests need to pull the offset back out
//! of the rendered text. Both sides call this one function, so the
//! runtime formatter and the test helper can never disagree about what
//! counts as an offset.

use once_cell::sync::Lazy;
use regex::Regex;

/// A signed HH:MM or HHMM offset, e.g. `-0800` or `+05:30`.
static UTC_OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]\d{2}:?\d{2}").expect("offset regex is valid"));

/// Extracts the first UTC-offset substring, or `""` if none is present.
///
/// # Example
///
/// ```
/// use trellis_core::parse_utc_offset;
///
/// assert_eq!(parse_utc_offset("13:00 (UTC-0800)"), "-0800");
/// assert_eq!(parse_utc_offset("non-time string"), "");
/// ```
#[must_use]
pub fn parse_utc_offset(input: &str) -> &str {
    UTC_OFFSET
        .find(input)
        .map_or("", |found| found.as_str())
}

/// Strips the optional colon so `"-08:00"` and `"-0800"` compare equal.
///
/// Assertion helpers use this to compare offsets rendered by different
/// widgets, which are not consistent about the colon.
#[must_use]
pub fn normalize_utc_offset(offset: &str) -> String {
    offset.replace(':', "")
}
