//! Chart assembly.
//!
//! Turns domain collections into plain-data layout structures, once per
//! render pass. Nothing here is cached; every build is a pure function
//! of its inputs (the today line reads the clock by contract, with a
//! deterministic `*_at` seam for tests).
//!
//! Two assemblies mirror the two dashboard views:
//!
//! - [`GanttLayout`]: single-project detail view. Equal-width month
//!   ruler, plan/actual bars with ceil-based inclusive grid math, delay
//!   classification per row, milestone and today lines.
//! - [`PortfolioLayout`]: multi-project view grouped by client.
//!   Day-weighted ruler and floor-based, non-inclusive bar math; the
//!   two views deliberately do not share their position formulas.

use apqplan_core::{ChartAnchor, DateRange, Milestone, ProjectId, ProjectInfo, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::delay::{classify_delay, DelayStatus};
use crate::grid::{compute_grid_position, NormalizedInterval};
use crate::header::{build_timeline_headers, build_weighted_headers, TimelineHeaders, WeightedHeaders};
use crate::marker::resolve_marker_position;
use crate::theme::health_color;

// ============================================================================
// Detail view
// ============================================================================

/// One task row's bars, ready for proportional placement
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub task_id: TaskId,
    /// Planned bar (neutral styling)
    pub plan: NormalizedInterval,
    /// Actual bar, absent while the task has not started
    pub actual: Option<NormalizedInterval>,
    /// Styling classification for the actual bar
    pub delay: DelayStatus,
}

/// Task rows grouped under one APQP phase header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseRows {
    pub phase: String,
    pub bars: Vec<TaskBar>,
}

/// A vertical milestone line with its badge label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneLine {
    pub name: String,
    pub left_percent: f64,
    pub color: apqplan_core::MarkerColor,
}

/// Complete layout for the single-project detail chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GanttLayout {
    pub headers: TimelineHeaders,
    pub phases: Vec<PhaseRows>,
    /// In-window milestone lines; out-of-range markers are dropped
    pub milestones: Vec<MilestoneLine>,
    /// Today line position, `None` when today is outside the window
    pub today_percent: Option<f64>,
}

impl GanttLayout {
    /// Build the detail-view layout with the today line at the local
    /// wall-clock date.
    pub fn build(anchor: &ChartAnchor, tasks: &[Task], milestones: &[Milestone]) -> Self {
        Self::build_at(anchor, tasks, milestones, chrono::Local::now().date_naive())
    }

    /// Build with an explicit status date for the today line.
    pub fn build_at(
        anchor: &ChartAnchor,
        tasks: &[Task],
        milestones: &[Milestone],
        status_date: NaiveDate,
    ) -> Self {
        let headers = build_timeline_headers(anchor);

        // Group rows by phase, first-appearance order
        let mut phases: Vec<PhaseRows> = Vec::new();
        for task in tasks {
            let bar = TaskBar {
                task_id: task.id,
                plan: compute_grid_position(task.plan, anchor.start).normalize(anchor),
                actual: task
                    .actual
                    .map(|range| compute_grid_position(range, anchor.start).normalize(anchor)),
                delay: classify_delay(task.plan.end, task.actual.map(|range| range.end)),
            };
            match phases.iter_mut().find(|group| group.phase == task.phase) {
                Some(group) => group.bars.push(bar),
                None => phases.push(PhaseRows {
                    phase: task.phase.clone(),
                    bars: vec![bar],
                }),
            }
        }

        let milestones = resolve_milestone_lines(milestones, anchor);
        let today_percent = resolve_marker_position(status_date, anchor);

        debug!(
            phases = phases.len(),
            rows = tasks.len(),
            milestones = milestones.len(),
            today = today_percent.is_some(),
            "assembled detail gantt layout"
        );

        Self {
            headers,
            phases,
            milestones,
            today_percent,
        }
    }

    /// Total number of task rows across all phases
    pub fn row_count(&self) -> usize {
        self.phases.iter().map(|group| group.bars.len()).sum()
    }
}

fn resolve_milestone_lines(milestones: &[Milestone], anchor: &ChartAnchor) -> Vec<MilestoneLine> {
    milestones
        .iter()
        .filter_map(|ms| {
            resolve_marker_position(ms.date, anchor).map(|left_percent| MilestoneLine {
                name: ms.name.clone(),
                left_percent,
                color: ms.color,
            })
        })
        .collect()
}

// ============================================================================
// Portfolio view
// ============================================================================

/// One project row on the portfolio chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectBar {
    pub project_id: ProjectId,
    /// The project's timeline bar
    pub bar: NormalizedInterval,
    /// Semantic bar color derived from the project's health
    pub color: apqplan_core::MarkerColor,
    /// Completion percentage shown inside the bar
    pub progress: u8,
    /// In-window milestone lines for this row
    pub milestones: Vec<MilestoneLine>,
}

/// Project rows grouped under one client header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientGroup {
    pub client: String,
    pub projects: Vec<ProjectBar>,
}

/// Complete layout for the portfolio chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLayout {
    pub headers: WeightedHeaders,
    pub clients: Vec<ClientGroup>,
}

impl PortfolioLayout {
    pub fn build(anchor: &ChartAnchor, projects: &[ProjectInfo]) -> Self {
        let headers = build_weighted_headers(anchor);

        // Group by client, first-appearance order
        let mut clients: Vec<ClientGroup> = Vec::new();
        for project in projects {
            let row = ProjectBar {
                project_id: project.id.clone(),
                bar: portfolio_interval(project.range(), anchor),
                color: health_color(project.status),
                progress: project.progress,
                milestones: resolve_milestone_lines(&project.milestones, anchor),
            };
            match clients.iter_mut().find(|group| group.client == project.client) {
                Some(group) => group.projects.push(row),
                None => clients.push(ClientGroup {
                    client: project.client.clone(),
                    projects: vec![row],
                }),
            }
        }

        debug!(
            clients = clients.len(),
            projects = projects.len(),
            "assembled portfolio layout"
        );

        Self { headers, clients }
    }
}

/// Portfolio bar math: floor-based and non-inclusive.
///
/// The portfolio view never adds the detail view's `+1` day, so a
/// same-day range has zero width here. The two formulas coexist in the
/// dashboard and are kept separate on purpose.
fn portfolio_interval(range: DateRange, anchor: &ChartAnchor) -> NormalizedInterval {
    let total = anchor.total_days as f64;
    let offset = (range.start - anchor.start).num_days() as f64;
    let duration = (range.end - range.start).num_days() as f64;
    NormalizedInterval {
        left_percent: offset / total * 100.0,
        width_percent: duration / total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apqplan_core::{MarkerColor, ProjectHealth, TaskState};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn anchor(year: i32, month: u32, day: u32, total_days: i64) -> ChartAnchor {
        ChartAnchor::new(date(year, month, day), total_days).unwrap()
    }

    fn task(id: TaskId, phase: &str, plan: (NaiveDate, NaiveDate), actual: Option<(NaiveDate, NaiveDate)>) -> Task {
        let mut t = Task::new(id, format!("task-{id}"))
            .phase(phase)
            .plan(DateRange::new(plan.0, plan.1));
        if let Some((start, end)) = actual {
            t = t.actual(DateRange::new(start, end));
        }
        t
    }

    #[test]
    fn rows_group_by_phase_in_first_appearance_order() {
        let a = anchor(2025, 3, 1, 670);
        let tasks = vec![
            task(1, "Design", (date(2025, 3, 1), date(2025, 3, 15)), None),
            task(2, "DV", (date(2025, 9, 1), date(2025, 11, 30)), None),
            task(3, "Design", (date(2025, 3, 1), date(2025, 3, 20)), None),
        ];

        let layout = GanttLayout::build_at(&a, &tasks, &[], date(2025, 6, 1));
        assert_eq!(layout.phases.len(), 2);
        assert_eq!(layout.phases[0].phase, "Design");
        assert_eq!(layout.phases[0].bars.len(), 2);
        assert_eq!(layout.phases[1].phase, "DV");
        assert_eq!(layout.row_count(), 3);
    }

    #[test]
    fn delay_classification_flows_into_bars() {
        let a = anchor(2025, 3, 1, 670);
        let tasks = vec![
            // Finished late
            task(1, "PV", (date(2025, 10, 1), date(2025, 11, 30)), Some((date(2025, 10, 15), date(2025, 12, 10)))),
            // Finished exactly on the planned end
            task(2, "PV", (date(2025, 10, 1), date(2025, 11, 30)), Some((date(2025, 10, 1), date(2025, 11, 30)))),
            // Not started
            task(3, "PV", (date(2026, 9, 1), date(2026, 10, 31)), None),
        ];

        let layout = GanttLayout::build_at(&a, &tasks, &[], date(2025, 6, 1));
        let bars = &layout.phases[0].bars;
        assert_eq!(bars[0].delay, DelayStatus::Delayed);
        assert_eq!(bars[1].delay, DelayStatus::OnTime);
        assert_eq!(bars[2].delay, DelayStatus::Normal);
        assert!(bars[2].actual.is_none());
    }

    #[test]
    fn out_of_window_milestones_are_dropped() {
        let a = anchor(2025, 3, 1, 670);
        let milestones = vec![
            Milestone::new("T/OF", date(2025, 7, 15)),
            Milestone::new("pre-anchor", date(2025, 1, 1)),
        ];

        let layout = GanttLayout::build_at(&a, &[], &milestones, date(2025, 6, 1));
        assert_eq!(layout.milestones.len(), 1);
        assert_eq!(layout.milestones[0].name, "T/OF");
    }

    #[test]
    fn today_line_inside_and_outside_window() {
        let a = anchor(2025, 3, 1, 670);

        let inside = GanttLayout::build_at(&a, &[], &[], date(2025, 3, 1));
        assert_eq!(inside.today_percent, Some(0.0));

        let outside = GanttLayout::build_at(&a, &[], &[], date(2024, 1, 1));
        assert_eq!(outside.today_percent, None);
    }

    #[test]
    fn portfolio_groups_by_client() {
        let a = anchor(2025, 1, 1, 730);
        let projects = vec![
            ProjectInfo::new("P-001", "Pop-up Monitor", date(2025, 3, 1), date(2026, 12, 31))
                .client("Hyundai")
                .with_health(ProjectHealth::Delayed),
            ProjectInfo::new("P-002", "ccNC Infotainment", date(2025, 1, 15), date(2026, 6, 30))
                .client("Kia"),
            ProjectInfo::new("P-003", "Integrated Control Unit", date(2025, 6, 1), date(2027, 2, 28))
                .client("Hyundai"),
        ];

        let layout = PortfolioLayout::build(&a, &projects);
        assert_eq!(layout.clients.len(), 2);
        assert_eq!(layout.clients[0].client, "Hyundai");
        assert_eq!(layout.clients[0].projects.len(), 2);
        assert_eq!(layout.clients[0].projects[0].color, MarkerColor::Orange);
        assert_eq!(layout.clients[1].client, "Kia");
    }

    #[test]
    fn portfolio_bar_math_is_non_inclusive() {
        // Same range through both formulas: portfolio width is one day
        // narrower than the detail view's inclusive bar
        let a = anchor(2025, 1, 1, 100);
        let range = DateRange::new(date(2025, 1, 11), date(2025, 1, 20));

        let portfolio = portfolio_interval(range, &a);
        assert_eq!(portfolio.left_percent, 10.0);
        assert_eq!(portfolio.width_percent, 9.0);

        let detail = compute_grid_position(range, a.start).normalize(&a);
        assert_eq!(detail.width_percent, 10.0);
    }

    #[test]
    fn portfolio_same_day_range_is_invisible() {
        let a = anchor(2025, 1, 1, 100);
        let bar = portfolio_interval(DateRange::single(date(2025, 1, 11)), &a);
        assert_eq!(bar.width_percent, 0.0);
    }

    #[test]
    fn unstarted_task_keeps_state_out_of_geometry() {
        // TaskState is carried on the domain type but geometry only
        // depends on the date ranges
        let a = anchor(2025, 3, 1, 670);
        let t = task(18, "PV", (date(2025, 11, 1), date(2025, 12, 15)), None)
            .with_state(TaskState::Pending);
        let layout = GanttLayout::build_at(&a, &[t], &[], date(2025, 6, 1));
        assert_eq!(layout.phases[0].bars[0].delay, DelayStatus::Normal);
    }
}
