//! Utility functions and helpers.
//!
//! - [`time`] - Expiry date parsing and whole-day arithmetic
//! - [`format`] - Number formatting for console output
//!
//! # Examples
//!
//! ```
//! use cred_expiry_tools::utils::time::{days_remaining, parse_end_date, parse_reference_time};
//!
//! let reference = parse_reference_time("2025-01-01").unwrap();
//! let end = parse_end_date("01/10/2025").unwrap();
//! assert_eq!(days_remaining(end, reference), 9);
//! ```

pub mod format;
pub mod time;
