//! Strict delivery date parsing
//!
//! Delivery dates are accepted only in the `dd.mm.yyyy` layout. Parsing is done in
//! two stages: a structural match against a fixed pattern, then a calendar check
//! through `chrono`. Lenient parsing (two-digit years, month names, padding) is
//! never attempted.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `chrono` format string matching the accepted layout.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// ASCII classes only: `\d` would also match non-Latin digits.
static DATE_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date must use the dd.mm.yyyy layout")]
    Layout,
    #[error("{day:02}.{month:02}.{year:04} is not a calendar date")]
    Calendar { day: u32, month: u32, year: i32 },
}

/// Parses `value` as a `dd.mm.yyyy` calendar date.
///
/// # Examples
///
/// ```
/// let date = parse_strict("01.06.2024").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert!(parse_strict("01.06.24").is_err());
/// assert!(parse_strict("32.11.2024").is_err());
/// ```
pub fn parse_strict(value: &str) -> Result<NaiveDate, DateParseError> {
    let captures = DATE_LAYOUT.captures(value).ok_or(DateParseError::Layout)?;

    let day: u32 = captures[1].parse().map_err(|_| DateParseError::Layout)?;
    let month: u32 = captures[2].parse().map_err(|_| DateParseError::Layout)?;
    let year: i32 = captures[3].parse().map_err(|_| DateParseError::Layout)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateParseError::Calendar { day, month, year })
}

/// Whole calendar days from `today` to `date`; negative for past dates.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Formats `date` in the accepted `dd.mm.yyyy` layout.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
