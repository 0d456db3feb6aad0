//! # trellis-core
//!
//! The reusable logic core of the trellis component library: the pure
//! formatting, parsing, and windowing functions that UI widgets consume.
//!
//! Every function here is synchronous, side-effect free, and operates on
//! plain values. Rendering, DOM binding, and browser automation live in
//! other layers; this crate is the part worth unit testing in isolation.
//!
//! ## Modules
//!
//! - **bytes**: Human-readable byte-size formatting and its inverse parser
//! - **age**: Compact/verbose relative-age strings ("1m 1d") to instants
//! - **paging**: Pagination window calculation and percent-complete
//! - **offset**: UTC-offset extraction from free-form display strings
//!
//! ## Example
//!
//! ```
//! use trellis_core::{format_bytes, pagination_window, percent_complete};
//!
//! assert_eq!(format_bytes(1_250_000.0, None), "1.25 MB");
//! assert_eq!(pagination_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
//! assert_eq!(percent_complete(22.0, 50.0), 44);
//! ```
//!
//! ## Error Handling
//!
//! The two parsers (`parse_bytes`, `parse_age`) validate input shape at
//! the boundary and fail fast with a descriptive [`FormatError`]. The
//! remaining functions are total over their numeric domains and return
//! plain values.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod age;
pub mod bytes;
pub mod error;
pub mod offset;
pub mod paging;

// Re-export main entry points for convenience
pub use age::{age_to_instant, age_to_instant_at, parse_age, AgeParts};
pub use bytes::{format_bytes, format_bytes_opt, parse_bytes, ByteUnit};
pub use error::{FormatError, Result};
pub use offset::{normalize_utc_offset, parse_utc_offset};
pub use paging::{
    pagination_window, percent_complete, DEFAULT_PAGES_TO_SHOW, DEFAULT_PERCENT_MAX,
};
