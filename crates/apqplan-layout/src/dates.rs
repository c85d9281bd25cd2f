//! Calendar date arithmetic used by the layout engine.
//!
//! The dashboard's source computed everything from millisecond
//! differences with ceiling rounding, which required callers to
//! normalize all timestamps to midnight first. Here dates are
//! [`NaiveDate`] (day granularity by construction), so the ceiling is
//! the identity and the midnight precondition is encoded in the type.

use apqplan_core::LayoutError;
use chrono::NaiveDate;

/// Shift a date by `n` calendar days (`n` may be negative).
///
/// Rolls over month and year boundaries; the input is not mutated.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + chrono::Duration::days(n)
}

/// Absolute day count between two dates.
///
/// Symmetric: `days_between(a, b) == days_between(b, a)`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Parse a strict `YYYY-MM-DD` date string.
///
/// This is the one boundary where malformed input surfaces as an error;
/// everything past it operates on already-valid dates.
pub fn parse_date(s: &str) -> Result<NaiveDate, LayoutError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| LayoutError::InvalidDate(s.to_string()))
}

/// Short ko-KR month/day label, e.g. "3월 15일".
///
/// Purely presentational; never used in layout math.
pub fn format_display_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}월 {}일", date.month(), date.day())
}
