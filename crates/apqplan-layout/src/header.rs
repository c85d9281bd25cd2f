//! Timeline header builder.
//!
//! Generates the month/year ruler drawn above the bars. Two algorithms
//! coexist, matching the two dashboard views:
//!
//! - [`build_timeline_headers`] (detail view): **equal-width** month
//!   columns. Every month gets `1/N` of the axis regardless of its true
//!   day count, so a 28-day February is as wide as a 31-day month. This
//!   is a deliberate simplification for a clean grid-ruler appearance;
//!   it means the ruler does not align pixel-exactly with the
//!   day-proportional bar positions from [`crate::grid`]. Known visual
//!   approximation, preserved rather than fixed.
//! - [`build_weighted_headers`] (portfolio view): day-weighted month
//!   columns whose widths are proportional to true day counts, clamped
//!   to the visible window.

use apqplan_core::ChartAnchor;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// Equal-width headers (detail view)
// ============================================================================

/// One month column of the equal-width ruler
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthSegment {
    pub year: i32,
    /// Zero-based month (0 = January), chrono `month0` convention
    pub month0: u32,
    pub left_percent: f64,
    pub width_percent: f64,
}

impl MonthSegment {
    /// One-based month number label, e.g. "3" for March
    pub fn label(&self) -> String {
        (self.month0 + 1).to_string()
    }
}

/// A run of month columns sharing one year, rendered as a merged cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: i32,
    /// Number of month columns in this year
    pub column_span: usize,
}

impl YearGroup {
    /// Width of the merged year cell, given the total month count
    pub fn width_percent(&self, total_months: usize) -> f64 {
        self.column_span as f64 / total_months as f64 * 100.0
    }
}

/// The complete ruler structure for the detail view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineHeaders {
    pub months: Vec<MonthSegment>,
    pub years: Vec<YearGroup>,
}

impl TimelineHeaders {
    pub fn total_months(&self) -> usize {
        self.months.len()
    }
}

/// Enumerate whole months from the anchor's month-start up to (but not
/// reaching) `anchor.start + total_days`, then assign equal widths.
pub fn build_timeline_headers(anchor: &ChartAnchor) -> TimelineHeaders {
    let end = anchor.end();
    let mut cursor = first_of_month(anchor.start);

    let mut raw: Vec<(i32, u32)> = Vec::new();
    let mut years: Vec<YearGroup> = Vec::new();

    while cursor < end {
        raw.push((cursor.year(), cursor.month0()));
        match years.last_mut() {
            Some(group) if group.year == cursor.year() => group.column_span += 1,
            _ => years.push(YearGroup { year: cursor.year(), column_span: 1 }),
        }
        cursor = next_month(cursor);
    }

    let n = raw.len() as f64;
    let months = raw
        .into_iter()
        .enumerate()
        .map(|(idx, (year, month0))| MonthSegment {
            year,
            month0,
            left_percent: idx as f64 / n * 100.0,
            width_percent: 1.0 / n * 100.0,
        })
        .collect();

    TimelineHeaders { months, years }
}

// ============================================================================
// Day-weighted headers (portfolio view)
// ============================================================================

/// One month column of the day-weighted ruler, clamped to the window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedMonth {
    pub year: i32,
    /// Zero-based month (0 = January)
    pub month0: u32,
    /// First visible day of the month, in days from the anchor
    pub start_day: i64,
    /// Visible day count of the month
    pub days: i64,
}

impl WeightedMonth {
    pub fn left_percent(&self, anchor: &ChartAnchor) -> f64 {
        self.start_day as f64 / anchor.total_days as f64 * 100.0
    }

    pub fn width_percent(&self, anchor: &ChartAnchor) -> f64 {
        self.days as f64 / anchor.total_days as f64 * 100.0
    }
}

/// A year's worth of day-weighted columns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedYearGroup {
    pub year: i32,
    /// Total visible days belonging to this year
    pub days: i64,
}

impl WeightedYearGroup {
    pub fn width_percent(&self, anchor: &ChartAnchor) -> f64 {
        self.days as f64 / anchor.total_days as f64 * 100.0
    }
}

/// The complete ruler structure for the portfolio view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedHeaders {
    pub months: Vec<WeightedMonth>,
    pub years: Vec<WeightedYearGroup>,
}

/// Enumerate months overlapping the window, clamping the first and last
/// to the visible edges so widths stay day-proportional.
pub fn build_weighted_headers(anchor: &ChartAnchor) -> WeightedHeaders {
    let window_end = anchor.end();
    let mut months: Vec<WeightedMonth> = Vec::new();

    let mut cursor = anchor.start;
    while cursor <= window_end {
        let month_start = first_of_month(cursor);
        let month_end = last_of_month(cursor);

        let start_day = if month_start < anchor.start {
            0
        } else {
            (month_start - anchor.start).num_days()
        };
        let end_day = if month_end > window_end {
            anchor.total_days
        } else {
            (month_end - anchor.start).num_days()
        };

        months.push(WeightedMonth {
            year: cursor.year(),
            month0: cursor.month0(),
            start_day,
            days: end_day - start_day,
        });

        cursor = next_month(month_start);
    }

    let mut years: Vec<WeightedYearGroup> = Vec::new();
    for month in &months {
        match years.last_mut() {
            Some(group) if group.year == month.year => group.days += month.days,
            _ => years.push(WeightedYearGroup { year: month.year, days: month.days }),
        }
    }

    WeightedHeaders { months, years }
}

// ============================================================================
// Month cursor helpers
// ============================================================================

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    next_month(first_of_month(date)) - chrono::Duration::days(1)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}
