//! Byte-size formatting and parsing.
//!
//! Converts raw byte counts into human-scaled strings like `"1.25 MB"`
//! and back. Units are decimal (each step is 1000x the previous), not
//! binary, matching what the size labels in the UI have always shown.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// A byte-size unit on the decimal (1000-based) scale.
///
/// Ordered smallest to largest; the discriminant is the power of 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ByteUnit {
    /// Bytes
    B = 0,
    /// Kilobytes (1000 B)
    Kb = 1,
    /// Megabytes (1000 KB)
    Mb = 2,
    /// Gigabytes (1000 MB)
    Gb = 3,
    /// Terabytes (1000 GB)
    Tb = 4,
    /// Petabytes (1000 TB)
    Pb = 5,
}

/// All units, smallest to largest.
const UNITS: [ByteUnit; 6] = [
    ByteUnit::B,
    ByteUnit::Kb,
    ByteUnit::Mb,
    ByteUnit::Gb,
    ByteUnit::Tb,
    ByteUnit::Pb,
];

impl ByteUnit {
    /// The display label, e.g. `"GB"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::Kb => "KB",
            ByteUnit::Mb => "MB",
            ByteUnit::Gb => "GB",
            ByteUnit::Tb => "TB",
            ByteUnit::Pb => "PB",
        }
    }

    /// The multiplier relative to bytes (`1000^index`).
    #[must_use]
    pub fn scale(self) -> f64 {
        1000f64.powi(self as i32)
    }

    /// Matches a full unit label case-insensitively (`"gb"` -> `Gb`).
    ///
    /// This is the matching rule the formatter's unit hint uses. Partial
    /// matches are deliberately not accepted.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        UNITS
            .iter()
            .copied()
            .find(|u| u.label().eq_ignore_ascii_case(label))
    }

    /// Matches on the first letter of a unit token (`"gigs"` -> `Gb`).
    ///
    /// This is the looser rule the parser uses, since widget output and
    /// hand-typed input both show up here.
    #[must_use]
    pub fn from_first_letter(token: &str) -> Option<Self> {
        match token.chars().next()?.to_ascii_uppercase() {
            'B' => Some(ByteUnit::B),
            'K' => Some(ByteUnit::Kb),
            'M' => Some(ByteUnit::Mb),
            'G' => Some(ByteUnit::Gb),
            'T' => Some(ByteUnit::Tb),
            'P' => Some(ByteUnit::Pb),
            _ => None,
        }
    }
}

/// Picks the largest unit that keeps the scaled value below 1000.
///
/// Zero, negative, and non-finite inputs all land on `B`.
fn auto_unit(bytes: f64) -> ByteUnit {
    let mut index = 0;
    let mut value = bytes;
    while value >= 1000.0 && index < UNITS.len() - 1 {
        value /= 1000.0;
        index += 1;
    }
    UNITS[index]
}

/// Formats a byte count as a human-readable string like `"1.25 MB"`.
///
/// If `unit_hint` names a known unit label (case-insensitive), conversion
/// is forced to that unit; otherwise the hint is ignored and the unit is
/// auto-detected. Whole scaled values print with no decimal places,
/// fractional ones with exactly two.
///
/// Negative and non-finite inputs are treated as zero.
///
/// # Example
///
/// ```
/// use trellis_core::format_bytes;
///
/// assert_eq!(format_bytes(1000.0, None), "1 KB");
/// assert_eq!(format_bytes(1_250_000.0, None), "1.25 MB");
/// assert_eq!(format_bytes(1_250_000.0, Some("GB")), "0.00 GB");
/// ```
#[must_use]
pub fn format_bytes(bytes: f64, unit_hint: Option<&str>) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 {
        bytes
    } else {
        0.0
    };

    let unit = unit_hint
        .and_then(ByteUnit::from_label)
        .unwrap_or_else(|| auto_unit(bytes));

    let scaled = bytes / unit.scale();
    if scaled == scaled.trunc() {
        format!("{scaled:.0} {}", unit.label())
    } else {
        format!("{:.2} {}", scaled, unit.label())
    }
}

/// Formats an optional byte count, rendering missing values as `"0 B"`.
///
/// Widgets frequently bind fields that may be absent; this mirrors that
/// contract without forcing callers to unwrap first.
#[must_use]
pub fn format_bytes_opt(bytes: Option<f64>, unit_hint: Option<&str>) -> String {
    format_bytes(bytes.unwrap_or(0.0), unit_hint)
}

/// Parses a string like `"420 GB"` back into a byte count.
///
/// Only the first letter of the unit token is significant, so `"420 gigs"`
/// parses the same as `"420 GB"`. Whitespace between number and unit is
/// optional.
///
/// # Errors
///
/// Returns [`FormatError::InvalidByteSize`] when the string does not look
/// like `<number> <unit>`, and [`FormatError::UnknownUnit`] when the unit
/// token starts with an unrecognized letter.
pub fn parse_bytes(input: &str) -> Result<f64> {
    let trimmed = input.trim();

    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| FormatError::InvalidByteSize(input.to_string()))?;
    let (number, unit) = trimmed.split_at(split);
    let unit = unit.trim();

    let magnitude: f64 = number
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidByteSize(input.to_string()))?;

    let unit = ByteUnit::from_first_letter(unit)
        .ok_or_else(|| FormatError::UnknownUnit(unit.to_string()))?;

    Ok(magnitude * unit.scale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_whole_kilobyte() {
        assert_eq!(format_bytes(1000.0, None), "1 KB");
    }

    #[test]
    fn formats_fractional_megabytes() {
        assert_eq!(format_bytes(1_250_000.0, None), "1.25 MB");
    }

    #[test]
    fn formats_zero_and_negative_as_zero_bytes() {
        assert_eq!(format_bytes(0.0, None), "0 B");
        assert_eq!(format_bytes(-42.0, None), "0 B");
        assert_eq!(format_bytes(f64::NAN, None), "0 B");
    }

    #[test]
    fn formats_missing_value_as_zero_bytes() {
        assert_eq!(format_bytes_opt(None, None), "0 B");
    }

    #[test]
    fn unit_hint_overrides_auto_detection() {
        assert_eq!(format_bytes(1_250_000.0, Some("GB")), "0.00 GB");
        assert_eq!(format_bytes(1_250_000.0, Some("gb")), "0.00 GB");
    }

    #[test]
    fn invalid_unit_hint_falls_back_to_auto_detection() {
        assert_eq!(format_bytes(1_250_000.0, Some("XB")), "1.25 MB");
        assert_eq!(format_bytes(1_250_000.0, Some("")), "1.25 MB");
    }

    #[test]
    fn auto_detection_caps_at_petabytes() {
        assert_eq!(format_bytes(3.0e18, None), "3000 PB");
    }

    #[test]
    fn sub_kilobyte_values_stay_in_bytes() {
        assert_eq!(format_bytes(999.0, None), "999 B");
        assert_eq!(format_bytes(512.5, None), "512.50 B");
    }

    #[test]
    fn parses_basic_sizes() {
        assert_eq!(parse_bytes("420 GB").unwrap(), 420.0e9);
        assert_eq!(parse_bytes("1 KB").unwrap(), 1000.0);
        assert_eq!(parse_bytes("0 B").unwrap(), 0.0);
    }

    #[test]
    fn parser_uses_first_letter_of_unit_only() {
        assert_eq!(parse_bytes("2 gigs").unwrap(), 2.0e9);
        assert_eq!(parse_bytes("2 g").unwrap(), 2.0e9);
        assert_eq!(parse_bytes("1.5m").unwrap(), 1.5e6);
    }

    #[test]
    fn parser_rejects_garbage() {
        assert!(matches!(
            parse_bytes("lots of data"),
            Err(FormatError::InvalidByteSize(_))
        ));
        assert!(matches!(
            parse_bytes("12 XB"),
            Err(FormatError::UnknownUnit(_))
        ));
        assert!(matches!(
            parse_bytes(""),
            Err(FormatError::InvalidByteSize(_))
        ));
        assert!(matches!(
            parse_bytes("123"),
            Err(FormatError::InvalidByteSize(_))
        ));
    }

    proptest! {
        /// Round-trip: format then parse recovers the input within the
        /// 2-decimal rounding the formatter applies to the scaled value.
        #[test]
        fn format_parse_round_trips(bytes in 0.0f64..1.0e18) {
            let formatted = format_bytes(bytes, None);
            let parsed = parse_bytes(&formatted).unwrap();
            // The formatter rounds the scaled value to 2 decimals, so the
            // reconstructed count can be off by half a hundredth of a unit.
            let unit_scale = 1000f64.powi(
                formatted
                    .split(' ')
                    .nth(1)
                    .and_then(ByteUnit::from_first_letter)
                    .unwrap() as i32,
            );
            let tolerance = unit_scale * 0.005 + 1e-9;
            prop_assert!((parsed - bytes).abs() <= tolerance);
        }

        /// The formatter never panics and always emits "<number> <unit>".
        #[test]
        fn formatter_output_shape(bytes in proptest::num::f64::ANY) {
            let formatted = format_bytes(bytes, None);
            let mut parts = formatted.split(' ');
            let number = parts.next().unwrap();
            let unit = parts.next().unwrap();
            prop_assert!(parts.next().is_none());
            prop_assert!(number.parse::<f64>().is_ok());
            prop_assert!(ByteUnit::from_label(unit).is_some());
        }
    }
}
