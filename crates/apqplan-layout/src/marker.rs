//! Marker position resolver.
//!
//! Computes normalized horizontal positions for milestone markers and
//! the "today" indicator line. Unlike the grid calculator, marker math
//! uses the plain (unrounded) day difference; the two formulas coexist
//! in the dashboard and are kept distinct per component.

use apqplan_core::ChartAnchor;
use chrono::NaiveDate;

/// Resolve a marker date to its `left%` position on the chart.
///
/// Returns `None` when the position falls outside `[0, 100]`; callers
/// drop such markers instead of rendering them. A marker exactly at the
/// anchor resolves to `Some(0.0)`.
pub fn resolve_marker_position(date: NaiveDate, anchor: &ChartAnchor) -> Option<f64> {
    let days = (date - anchor.start).num_days() as f64;
    let left = days / anchor.total_days as f64 * 100.0;
    if (0.0..=100.0).contains(&left) {
        Some(left)
    } else {
        None
    }
}

/// Position of the "today" line, from the local wall clock.
///
/// Recomputed on every call, never cached, so a session spanning
/// midnight shows a stale position only until the next render pass.
pub fn today_marker_position(anchor: &ChartAnchor) -> Option<f64> {
    resolve_marker_position(chrono::Local::now().date_naive(), anchor)
}
