//! Grid position calculator.
//!
//! Maps a task's date range into the chart coordinate system defined by
//! a [`ChartAnchor`]: first into whole-day grid units, then into a
//! normalized `(left%, width%)` interval for proportional layout.
//!
//! Two deliberate behaviors are preserved from the dashboard:
//!
//! - Duration is inclusive-inclusive (`end - start + 1`), so a same-day
//!   task still renders a visible one-day bar.
//! - No bounds checking. Ranges fully or partially outside
//!   `[0, total_days]` come back as-is: negative offsets, widths past
//!   100%. Clipping is the presentation layer's concern; some call
//!   sites filter, others rely on overflow clipping.

use apqplan_core::{ChartAnchor, DateRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date range expressed in whole days relative to a chart anchor.
///
/// `offset_days` is negative when the range starts before the anchor;
/// `duration_days` is zero or negative for inverted ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Days from the anchor start to the range start
    pub offset_days: i64,
    /// Inclusive day count covered by the range
    pub duration_days: i64,
}

impl GridPosition {
    /// Convert to a normalized `(left%, width%)` interval.
    ///
    /// `left = offset/total*100`, `width = duration/total*100`. Not
    /// clamped to `[0, 100]` by design.
    pub fn normalize(&self, anchor: &ChartAnchor) -> NormalizedInterval {
        let total = anchor.total_days as f64;
        NormalizedInterval {
            left_percent: self.offset_days as f64 / total * 100.0,
            width_percent: self.duration_days as f64 / total * 100.0,
        }
    }
}

/// A `(left%, width%)` pair placing an entity on a 0-100% horizontal axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInterval {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Compute the grid position of `range` relative to `anchor_start`.
///
/// The original computed `ceil((start - anchorStart) / 1 day)` from a
/// millisecond difference, which rounds fractional same-day offsets
/// up. At [`NaiveDate`] granularity the ceiling is exact, which is the
/// behavior the original required its callers to guarantee by
/// normalizing dates to midnight.
pub fn compute_grid_position(range: DateRange, anchor_start: NaiveDate) -> GridPosition {
    let offset_days = (range.start - anchor_start).num_days();
    // +1 for inclusive-inclusive semantics: a one-day task is one day wide
    let duration_days = (range.end - range.start).num_days() + 1;
    GridPosition {
        offset_days,
        duration_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn same_day_range_at_anchor() {
        // start == end == anchor  =>  offset 0, duration 1
        let anchor = date(2025, 3, 1);
        let pos = compute_grid_position(DateRange::single(anchor), anchor);
        assert_eq!(pos, GridPosition { offset_days: 0, duration_days: 1 });
    }

    #[test]
    fn detail_view_scenario() {
        // Anchor 2025-03-01, 670 days; plan 2025-09-01 .. 2025-11-30
        let anchor = ChartAnchor::new(date(2025, 3, 1), 670).unwrap();
        let range = DateRange::new(date(2025, 9, 1), date(2025, 11, 30));

        let pos = compute_grid_position(range, anchor.start);
        assert_eq!(pos.offset_days, 184);
        assert_eq!(pos.duration_days, 91);

        let interval = pos.normalize(&anchor);
        assert!((interval.left_percent - 27.46).abs() < 0.01);
        assert!((interval.width_percent - 13.58).abs() < 0.01);
    }

    #[test]
    fn range_before_anchor_yields_negative_offset() {
        let anchor = date(2025, 3, 1);
        let range = DateRange::new(date(2025, 2, 1), date(2025, 2, 15));
        let pos = compute_grid_position(range, anchor);
        assert_eq!(pos.offset_days, -28);
        assert_eq!(pos.duration_days, 15);
    }

    #[test]
    fn inverted_range_yields_negative_duration() {
        // end < start is not rejected; width goes negative and the bar
        // renders as invisible
        let anchor = ChartAnchor::new(date(2025, 1, 1), 100).unwrap();
        let range = DateRange::new(date(2025, 1, 20), date(2025, 1, 10));
        let pos = compute_grid_position(range, anchor.start);
        assert_eq!(pos.duration_days, -9);

        let interval = pos.normalize(&anchor);
        assert!(interval.width_percent < 0.0);
    }

    #[test]
    fn overrun_is_not_clamped() {
        let anchor = ChartAnchor::new(date(2025, 1, 1), 30).unwrap();
        let range = DateRange::new(date(2025, 1, 16), date(2025, 3, 1));
        let interval = compute_grid_position(range, anchor.start).normalize(&anchor);
        assert_eq!(interval.left_percent, 50.0);
        assert!(interval.left_percent + interval.width_percent > 100.0);
    }

    #[test]
    fn normalize_percent_formula() {
        let anchor = ChartAnchor::new(date(2025, 1, 1), 200).unwrap();
        let pos = GridPosition { offset_days: 50, duration_days: 20 };
        let interval = pos.normalize(&anchor);
        assert_eq!(interval.left_percent, 25.0);
        assert_eq!(interval.width_percent, 10.0);
    }
}
