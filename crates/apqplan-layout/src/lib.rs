//! # apqplan-layout
//!
//! Timeline layout and scheduling-geometry engine for apqplan.
//!
//! This crate converts date ranges, milestones, and "today" markers
//! into normalized horizontal grid coordinates for chart rendering,
//! plus the derived delay/status classification. It is a pure function
//! library: no I/O, no shared state, every output recomputed per render
//! pass from the caller's current collections.
//!
//! Modules:
//! - [`dates`] — calendar day arithmetic and display formatting
//! - [`grid`] — (offset, duration) grid positions and `(left%, width%)`
//!   normalized intervals
//! - [`header`] — month/year ruler segments (equal-width and
//!   day-weighted variants)
//! - [`marker`] — milestone and today line positions with
//!   out-of-window filtering
//! - [`delay`] — planned-vs-actual delay classification
//! - [`chart`] — full per-view assembly (detail and portfolio)
//! - [`theme`] — semantic color to concrete value mapping
//!
//! ## Example
//!
//! ```rust
//! use apqplan_core::{ChartAnchor, DateRange, Milestone, Task};
//! use apqplan_layout::GanttLayout;
//! use chrono::NaiveDate;
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let anchor = ChartAnchor::new(date(2025, 3, 1), 670)?;
//!
//! let tasks = vec![
//!     Task::new(6, "Process FMEA")
//!         .phase("DV Preparation")
//!         .plan(DateRange::new(date(2025, 9, 1), date(2025, 11, 30)))
//!         .actual(DateRange::new(date(2025, 9, 1), date(2025, 11, 15))),
//! ];
//! let milestones = vec![Milestone::new("T/OF", date(2025, 7, 15))];
//!
//! let layout = GanttLayout::build_at(&anchor, &tasks, &milestones, date(2025, 10, 1));
//! assert_eq!(layout.row_count(), 1);
//! assert_eq!(layout.milestones.len(), 1);
//! # Ok::<(), apqplan_core::LayoutError>(())
//! ```

pub mod chart;
pub mod dates;
pub mod delay;
pub mod grid;
pub mod header;
pub mod marker;
pub mod theme;

pub use chart::{ClientGroup, GanttLayout, MilestoneLine, PhaseRows, PortfolioLayout, ProjectBar, TaskBar};
pub use dates::{add_days, days_between, format_display_date, parse_date};
pub use delay::{classify_delay, DelayStatus};
pub use grid::{compute_grid_position, GridPosition, NormalizedInterval};
pub use header::{
    build_timeline_headers, build_weighted_headers, MonthSegment, TimelineHeaders, WeightedHeaders,
    WeightedMonth, WeightedYearGroup, YearGroup,
};
pub use marker::{resolve_marker_position, today_marker_position};
pub use theme::{health_color, Theme};
