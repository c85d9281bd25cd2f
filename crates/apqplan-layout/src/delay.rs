//! Delay/status evaluator.
//!
//! Compares planned vs actual end dates to classify a bar's timeline
//! health. The classification drives bar styling only: plan bars are
//! neutral, actual bars are black when on time and red when delayed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Timeline health of a task or phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DelayStatus {
    /// No delay judgment possible yet (no actual end date)
    #[default]
    Normal,
    /// Finished on or before the planned end
    OnTime,
    /// Finished after the planned end
    Delayed,
}

impl DelayStatus {
    pub fn is_delayed(&self) -> bool {
        matches!(self, DelayStatus::Delayed)
    }
}

/// Classify a task's delay from its planned and actual end dates.
///
/// Equal dates resolve to `OnTime`: the comparison is strictly
/// greater-than, never `>=`.
pub fn classify_delay(planned_end: NaiveDate, actual_end: Option<NaiveDate>) -> DelayStatus {
    match actual_end {
        None => DelayStatus::Normal,
        Some(actual) if actual > planned_end => DelayStatus::Delayed,
        Some(_) => DelayStatus::OnTime,
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
    fn absent_actual_is_normal() {
        assert_eq!(classify_delay(date(2025, 1, 10), None), DelayStatus::Normal);
    }

    #[test]
    fn equal_dates_are_on_time() {
        // Boundary: strict greater-than, so same-day completion is on time
        assert_eq!(
            classify_delay(date(2025, 1, 10), Some(date(2025, 1, 10))),
            DelayStatus::OnTime
        );
    }

    #[test]
    fn later_actual_is_delayed() {
        assert_eq!(
            classify_delay(date(2025, 1, 10), Some(date(2025, 1, 11))),
            DelayStatus::Delayed
        );
    }

    #[test]
    fn earlier_actual_is_on_time() {
        assert_eq!(
            classify_delay(date(2025, 1, 10), Some(date(2025, 1, 5))),
            DelayStatus::OnTime
        );
    }

    #[test]
    fn wire_format_is_camel_case() {
        assert_eq!(serde_json::to_string(&DelayStatus::OnTime).unwrap(), r#""onTime""#);
        assert_eq!(serde_json::to_string(&DelayStatus::Normal).unwrap(), r#""normal""#);
        assert_eq!(serde_json::to_string(&DelayStatus::Delayed).unwrap(), r#""delayed""#);
    }
}
