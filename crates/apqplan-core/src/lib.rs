//! # apqplan-core
//!
//! Core domain model for the apqplan timeline layout engine.
//!
//! This crate provides:
//! - Domain types: `Task`, `ProjectInfo`, `Milestone`, `DateRange`
//! - The chart coordinate system: `ChartAnchor`
//! - Status enums: `TaskState`, `ProjectHealth`
//! - Semantic marker colors: `MarkerColor`
//! - Error types
//!
//! All types here are plain data recomputed per render pass; nothing is
//! cached or persisted. The layout math itself lives in `apqplan-layout`.
//!
//! ## Example
//!
//! ```rust
//! use apqplan_core::{ChartAnchor, DateRange, Task, TaskState};
//! use chrono::NaiveDate;
//!
//! let anchor = ChartAnchor::new(
//!     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     670,
//! ).unwrap();
//!
//! let task = Task::new(6, "Process FMEA")
//!     .phase("DV Preparation")
//!     .plan(DateRange::new(
//!         NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
//!     ))
//!     .with_state(TaskState::InProgress);
//!
//! assert_eq!(anchor.total_days, 670);
//! assert!(task.actual.is_none());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique identifier for a task row
pub type TaskId = u32;

/// Unique identifier for a project
pub type ProjectId = String;

// ============================================================================
// Date Range
// ============================================================================

/// An inclusive calendar date range.
///
/// `end >= start` is expected but deliberately not enforced: callers may
/// pass inverted ranges, which flow through the layout math as negative
/// durations and render as invisible bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day range.
    pub const fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Whether `end < start`. Inverted ranges are legal input.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

// ============================================================================
// Chart Anchor
// ============================================================================

/// The coordinate system of a chart.
///
/// Day 0 is `start`; the visible span `[0, total_days]` maps to
/// `[0%, 100%]` horizontal space. Observed spans in the dashboard are 670
/// (single-project detail view) and 730 (portfolio view).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAnchor {
    /// The calendar date at the left edge of the chart (day 0)
    pub start: NaiveDate,
    /// Width of the visible window in days
    pub total_days: i64,
}

impl ChartAnchor {
    /// Create an anchor, rejecting non-positive spans.
    ///
    /// A zero or negative span would put a division by zero (or a sign
    /// flip) into every percent computation downstream, so it is checked
    /// here once instead of in each layout function.
    pub fn new(start: NaiveDate, total_days: i64) -> Result<Self, LayoutError> {
        if total_days <= 0 {
            return Err(LayoutError::InvalidSpan(total_days));
        }
        Ok(Self { start, total_days })
    }

    /// The exclusive right edge of the visible window.
    pub fn end(&self) -> NaiveDate {
        self.start + chrono::Duration::days(self.total_days)
    }
}

// ============================================================================
// Task
// ============================================================================

/// Lifecycle state of a single task row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[default]
    Pending,
    Delayed,
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskState::Completed => write!(f, "Completed"),
            TaskState::InProgress => write!(f, "In Progress"),
            TaskState::Pending => write!(f, "Pending"),
            TaskState::Delayed => write!(f, "Delayed"),
        }
    }
}

/// An APQP task with planned and (optionally) actual execution dates.
///
/// `plan` and `actual` are two parallel ranges: scheduled vs realized
/// execution. `actual` is `None` while the task has not started.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Human-readable name
    pub name: String,
    /// APQP phase label used to group rows on the chart
    pub phase: String,
    /// Planned execution range
    pub plan: DateRange,
    /// Actual execution range (`None` if not started)
    pub actual: Option<DateRange>,
    /// Lifecycle state
    pub status: TaskState,
    /// Responsible person or team
    pub assignee: String,
}

impl Task {
    /// Create a new task. Plan defaults to a single-day range at the
    /// epoch of the 2025 model year; set it with [`Task::plan`].
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Self {
            id,
            name: name.into(),
            phase: String::new(),
            plan: DateRange::single(day),
            actual: None,
            status: TaskState::Pending,
            assignee: String::new(),
        }
    }

    /// Set the phase label
    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Set the planned range
    pub fn plan(mut self, plan: DateRange) -> Self {
        self.plan = plan;
        self
    }

    /// Set the actual range
    pub fn actual(mut self, actual: DateRange) -> Self {
        self.actual = Some(actual);
        self
    }

    /// Set the lifecycle state
    pub fn with_state(mut self, status: TaskState) -> Self {
        self.status = status;
        self
    }

    /// Set the assignee
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }
}

// ============================================================================
// Milestone
// ============================================================================

/// Semantic marker color.
///
/// The dashboard originally carried free-form CSS class names on
/// milestones and statuses; here the palette is a closed set, and the
/// mapping to concrete color values lives in the layout crate's theme
/// table. Keeps the data model decoupled from any styling vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Blue,
    Indigo,
    Purple,
    Slate,
    Red,
    Orange,
    Green,
    Yellow,
    Gray,
}

/// A labeled point-in-time marker overlaid on the timeline.
///
/// Milestones are positions, not durations: T/OF, P1, P2, SOP and the
/// like.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Milestone {
    /// Short label shown on the marker badge (e.g. "SOP")
    pub name: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Semantic color tag
    #[serde(default)]
    pub color: MarkerColor,
}

impl Milestone {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            color: MarkerColor::default(),
        }
    }

    /// Set the semantic color
    pub fn color(mut self, color: MarkerColor) -> Self {
        self.color = color;
        self
    }
}

// ============================================================================
// Project
// ============================================================================

/// Overall health of a project in the portfolio view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectHealth {
    #[serde(rename = "On Track")]
    #[default]
    OnTrack,
    Delayed,
    Critical,
    Completed,
}

impl std::fmt::Display for ProjectHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectHealth::OnTrack => write!(f, "On Track"),
            ProjectHealth::Delayed => write!(f, "Delayed"),
            ProjectHealth::Critical => write!(f, "Critical"),
            ProjectHealth::Completed => write!(f, "Completed"),
        }
    }
}

/// A development project as shown on the portfolio Gantt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Unique identifier (e.g. "P-001")
    pub id: ProjectId,
    /// Human-readable name
    pub name: String,
    /// Customer part number
    pub part_no: String,
    /// Client the project belongs to; portfolio rows group by this
    pub client: String,
    /// Responsible project manager
    pub manager: String,
    /// Project start date
    pub start: NaiveDate,
    /// Project end date
    pub end: NaiveDate,
    /// Overall health classification
    pub status: ProjectHealth,
    /// Completion percentage (0-100)
    pub progress: u8,
    /// Milestone markers overlaid on the project row
    pub milestones: Vec<Milestone>,
}

impl ProjectInfo {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            part_no: String::new(),
            client: String::new(),
            manager: String::new(),
            start,
            end,
            status: ProjectHealth::default(),
            progress: 0,
            milestones: Vec::new(),
        }
    }

    /// Set the part number
    pub fn part_no(mut self, part_no: impl Into<String>) -> Self {
        self.part_no = part_no.into();
        self
    }

    /// Set the client
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// Set the manager
    pub fn manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = manager.into();
        self
    }

    /// Set the health classification
    pub fn with_health(mut self, status: ProjectHealth) -> Self {
        self.status = status;
        self
    }

    /// Set the completion percentage
    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Add a milestone marker
    pub fn milestone(mut self, milestone: Milestone) -> Self {
        self.milestones.push(milestone);
        self
    }

    /// The project's planned range as a `DateRange`
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Layout error
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("chart span must be a positive number of days, got {0}")]
    InvalidSpan(i64),

    #[error("invalid date string (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

// ============================================================================
// Tests
// ============================================================================
