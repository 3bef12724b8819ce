//! Date parsing and day arithmetic shared by every expiry computation.
//!
//! Credential expiry dates arrive as `MM/DD/YYYY` strings with no time
//! component. They are compared against a reference timestamp that keeps its
//! time of day, so an item expiring "today" already counts as one day past
//! once the clock has moved beyond midnight.

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// `strftime` pattern for credential `EndDateTime` values
pub const END_DATE_FORMAT: &str = "%m/%d/%Y";

const SECONDS_PER_DAY: i64 = 86_400;

/// Parses a credential expiry date such as `"01/10/2025"` or `"1/9/2025"`.
///
/// Month and day may be zero-padded or not, and a single-digit day may also
/// be space-padded (`"1/ 9/2025"`); the year must be exactly four digits.
/// Returns `None` for anything else, including surrounding whitespace and the
/// `"Unknown"` placeholder.
///
/// # Examples
///
/// ```
/// use cred_expiry_tools::utils::time::parse_end_date;
///
/// assert!(parse_end_date("02/15/2025").is_some());
/// assert!(parse_end_date("2/5/2025").is_some());
/// assert!(parse_end_date("2025-02-15").is_none());
/// assert!(parse_end_date("Unknown").is_none());
/// ```
pub fn parse_end_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('/');
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day = day
        .strip_prefix(' ')
        .filter(|d| d.len() == 1)
        .unwrap_or(day);
    if !is_digits(month, 2) || !is_digits(day, 2) || year.len() != 4 || !is_digits(year, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Between one and `max_len` ASCII digits, nothing else.
fn is_digits(value: &str, max_len: usize) -> bool {
    (1..=max_len).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whole days from `reference` until midnight of `end_date`, rounded down.
///
/// Negative values mean the date is already behind the reference.
pub fn days_remaining(end_date: NaiveDate, reference: NaiveDateTime) -> i64 {
    let delta = end_date.and_time(NaiveTime::MIN) - reference;
    let mut seconds = delta.num_seconds();
    if delta.subsec_nanos() < 0 {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}

/// Parses a `--reference-date` argument.
///
/// Accepts `YYYY-MM-DD` (taken as midnight) or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    bail!(
        "Invalid reference date '{}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
        value
    )
}

/// Current local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_end_date_padded_and_unpadded() {
        let padded = parse_end_date("01/09/2025").unwrap();
        let unpadded = parse_end_date("1/9/2025").unwrap();
        assert_eq!(padded, unpadded);
        assert_eq!(padded.month(), 1);
        assert_eq!(padded.day(), 9);
    }

    #[test]
    fn test_parse_end_date_rejects_bad_input() {
        assert!(parse_end_date("").is_none());
        assert!(parse_end_date("Unknown").is_none());
        assert!(parse_end_date("not-a-date").is_none());
        assert!(parse_end_date("13/01/2025").is_none());
        assert!(parse_end_date("02/30/2025").is_none());
        assert!(parse_end_date("01/10/25").is_none());
        assert!(parse_end_date("01/10/02025").is_none());
        assert!(parse_end_date("01/10/2025 12:00").is_none());
    }

    #[test]
    fn test_parse_end_date_rejects_stray_whitespace() {
        assert!(parse_end_date(" 01/10/2025").is_none());
        assert!(parse_end_date("\t01/10/2025").is_none());
        assert!(parse_end_date("01/ 10/2025").is_none());
        assert!(parse_end_date("01/10/ 2025").is_none());
        assert!(parse_end_date("01/10/2025 ").is_none());
        assert!(parse_end_date("1/ 09/2025").is_none());
        assert!(parse_end_date("01/10/2025/").is_none());
    }

    #[test]
    fn test_parse_end_date_space_padded_day() {
        assert_eq!(parse_end_date("1/ 9/2025"), parse_end_date("01/09/2025"));
        assert!(parse_end_date("1/ 9/2025").is_some());
    }

    #[test]
    fn test_days_remaining_at_midnight() {
        let end = parse_end_date("01/10/2025").unwrap();
        assert_eq!(days_remaining(end, at(2025, 1, 1, 0, 0)), 9);
    }

    #[test]
    fn test_days_remaining_keeps_time_of_day() {
        let end = parse_end_date("01/10/2025").unwrap();
        assert_eq!(days_remaining(end, at(2025, 1, 1, 10, 30)), 8);
    }

    #[test]
    fn test_days_remaining_floors_negative() {
        let today = parse_end_date("01/01/2025").unwrap();
        assert_eq!(days_remaining(today, at(2025, 1, 1, 0, 0)), 0);
        assert_eq!(days_remaining(today, at(2025, 1, 1, 0, 1)), -1);

        let yesterday = parse_end_date("12/31/2024").unwrap();
        assert_eq!(days_remaining(yesterday, at(2025, 1, 1, 10, 0)), -2);
    }

    #[test]
    fn test_parse_reference_time() {
        assert_eq!(parse_reference_time("2025-01-01").unwrap(), at(2025, 1, 1, 0, 0));
        assert_eq!(
            parse_reference_time("2025-01-01T10:30:00").unwrap(),
            at(2025, 1, 1, 10, 30)
        );
        assert!(parse_reference_time("01/01/2025").is_err());
    }
}
