//! Relative-age string parsing.
//!
//! Age widgets render durations two ways: compact (`"1m 1d"`) and verbose
//! (`"1 month, 1 day"`). Both describe the same thing, a duration in the
//! past relative to now, and both must parse to the same instant. Months
//! and years are calendar-aware (subtracting one month from March 31 lands
//! on the last day of February), matching how the dates were produced.

use chrono::{DateTime, Days, Duration, Months, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormatError, Result};

/// One token: an integer count, optional whitespace, unit letters.
static AGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*([a-zA-Z]+)$").expect("age token regex is valid"));

/// A parsed age string: per-unit counts, all in the past.
///
/// Field order is largest unit first; absent units are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeParts {
    /// Calendar years
    pub years: u32,
    /// Calendar months
    pub months: u32,
    /// Weeks (always 7 days)
    pub weeks: u64,
    /// Days
    pub days: u64,
    /// Hours
    pub hours: i64,
    /// Minutes
    pub minutes: i64,
    /// Seconds
    pub seconds: i64,
}

/// The slot an age token's unit maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl AgeUnit {
    fn name(self) -> &'static str {
        match self {
            AgeUnit::Years => "years",
            AgeUnit::Months => "months",
            AgeUnit::Weeks => "weeks",
            AgeUnit::Days => "days",
            AgeUnit::Hours => "hours",
            AgeUnit::Minutes => "minutes",
            AgeUnit::Seconds => "seconds",
        }
    }

    /// Maps a unit token to its slot.
    ///
    /// Compact single letters follow the age widget's legend: `y`, `m`
    /// (month), `w`, `d`, `h`, `s`. Minutes only ever appear spelled out
    /// (`"23 minutes"`) or as `min`, so bare `m` is unambiguous here.
    fn from_token(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "y" | "yr" | "yrs" | "year" | "years" => Some(AgeUnit::Years),
            "m" | "mo" | "mos" | "month" | "months" => Some(AgeUnit::Months),
            "w" | "wk" | "wks" | "week" | "weeks" => Some(AgeUnit::Weeks),
            "d" | "day" | "days" => Some(AgeUnit::Days),
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(AgeUnit::Hours),
            "min" | "mins" | "minute" | "minutes" => Some(AgeUnit::Minutes),
            "s" | "sec" | "secs" | "second" | "seconds" => Some(AgeUnit::Seconds),
            _ => None,
        }
    }
}

/// Parses an age string into per-unit counts without applying them.
///
/// Tokens are separated by `", "` in the verbose form and by single spaces
/// in the compact form; a single token needs no separator at all. Each
/// token is `<integer><optional whitespace><unit letters>`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidAge`] for tokens that do not match the
/// grammar or name an unknown unit, and [`FormatError::DuplicateAgeUnit`]
/// when the same unit appears twice (the widgets never emit repeats, so a
/// repeat means the input is wrong).
pub fn parse_age(input: &str) -> Result<AgeParts> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormatError::InvalidAge {
            input: input.to_string(),
            reason: "empty age string".to_string(),
        });
    }

    // Verbose form joins parts with ", "; compact form with single spaces.
    // In the compact form each token is free of internal whitespace, so
    // splitting on ' ' still yields whole tokens.
    let tokens: Vec<&str> = if trimmed.contains(", ") {
        trimmed.split(", ").collect()
    } else if AGE_TOKEN.is_match(trimmed) {
        // A single verbose token like "10 hours" contains a space but is
        // one age part, not two.
        vec![trimmed]
    } else {
        trimmed.split(' ').collect()
    };

    let mut parts = AgeParts::default();
    let mut seen: Vec<AgeUnit> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let captures = AGE_TOKEN.captures(token).ok_or_else(|| FormatError::InvalidAge {
            input: input.to_string(),
            reason: format!("token '{token}' does not match '<integer><unit>'"),
        })?;

        let count: u64 = captures[1]
            .parse()
            .map_err(|_| FormatError::InvalidAge {
                input: input.to_string(),
                reason: format!("count in '{token}' is out of range"),
            })?;

        let unit = AgeUnit::from_token(&captures[2]).ok_or_else(|| FormatError::InvalidAge {
            input: input.to_string(),
            reason: format!("unknown duration unit '{}'", &captures[2]),
        })?;

        if seen.contains(&unit) {
            return Err(FormatError::DuplicateAgeUnit {
                input: input.to_string(),
                unit: unit.name(),
            });
        }
        seen.push(unit);

        let clamp_u32 = |n: u64| u32::try_from(n).unwrap_or(u32::MAX);
        let clamp_i64 = |n: u64| i64::try_from(n).unwrap_or(i64::MAX);
        match unit {
            AgeUnit::Years => parts.years = clamp_u32(count),
            AgeUnit::Months => parts.months = clamp_u32(count),
            AgeUnit::Weeks => parts.weeks = count,
            AgeUnit::Days => parts.days = count,
            AgeUnit::Hours => parts.hours = clamp_i64(count),
            AgeUnit::Minutes => parts.minutes = clamp_i64(count),
            AgeUnit::Seconds => parts.seconds = clamp_i64(count),
        }
    }

    Ok(parts)
}

/// Subtracts the parsed duration from an explicit reference instant.
///
/// Years and months subtract on the calendar (chrono clamps to the last
/// valid day of the target month); weeks, days, hours, minutes, and
/// seconds subtract as fixed spans.
///
/// # Errors
///
/// Propagates parse errors from [`parse_age`], and returns
/// [`FormatError::AgeOutOfRange`] if the subtraction leaves the
/// representable date range.
pub fn age_to_instant_at(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let parts = parse_age(input)?;
    let out_of_range = || FormatError::AgeOutOfRange(input.to_string());

    let months = parts.years.saturating_mul(12).saturating_add(parts.months);
    let days = parts.weeks.saturating_mul(7).saturating_add(parts.days);

    let instant = now
        .checked_sub_months(Months::new(months))
        .ok_or_else(out_of_range)?
        .checked_sub_days(Days::new(days))
        .ok_or_else(out_of_range)?;

    let span = Duration::try_hours(parts.hours)
        .and_then(|h| Duration::try_minutes(parts.minutes).and_then(|m| h.checked_add(&m)))
        .and_then(|hm| Duration::try_seconds(parts.seconds).and_then(|s| hm.checked_add(&s)))
        .ok_or_else(out_of_range)?;

    instant.checked_sub_signed(span).ok_or_else(out_of_range)
}

/// Subtracts the parsed duration from the current UTC instant.
///
/// This is the runtime entry point; tests use [`age_to_instant_at`] with a
/// fixed instant instead.
///
/// # Errors
///
/// Same as [`age_to_instant_at`].
pub fn age_to_instant(input: &str) -> Result<DateTime<Utc>> {
    age_to_instant_at(input, Utc::now())
}
