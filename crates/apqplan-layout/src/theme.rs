//! Color theme mapping.
//!
//! The data model carries semantic colors ([`MarkerColor`]) and delay
//! classifications; this module owns the mapping to concrete color
//! values. Presentation layers pick a theme and look colors up here,
//! so the layout output itself stays free of styling vocabulary.

use apqplan_core::{MarkerColor, ProjectHealth};

use crate::delay::DelayStatus;

/// Color theme for chart rendering
#[derive(Clone, Debug)]
pub struct Theme {
    pub blue: String,
    pub indigo: String,
    pub purple: String,
    pub slate: String,
    pub red: String,
    pub orange: String,
    pub green: String,
    pub yellow: String,
    pub gray: String,
    /// Actual bar color when on time (or not yet judged)
    pub on_time_color: String,
    /// Actual bar color when delayed
    pub delayed_color: String,
    /// Plan bar outline color (plan bars are neutral)
    pub plan_outline_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            blue: "#3b82f6".into(),
            indigo: "#6366f1".into(),
            purple: "#a855f7".into(),
            slate: "#334155".into(),
            red: "#dc2626".into(),
            orange: "#f97316".into(),
            green: "#22c55e".into(),
            yellow: "#eab308".into(),
            gray: "#9ca3af".into(),
            on_time_color: "#000000".into(),
            delayed_color: "#dc2626".into(),
            plan_outline_color: "#9ca3af".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            blue: "#60a5fa".into(),
            indigo: "#818cf8".into(),
            purple: "#c084fc".into(),
            slate: "#94a3b8".into(),
            red: "#ef4444".into(),
            orange: "#fb923c".into(),
            green: "#4ade80".into(),
            yellow: "#facc15".into(),
            gray: "#6b7280".into(),
            on_time_color: "#eaeaea".into(),
            delayed_color: "#ef4444".into(),
            plan_outline_color: "#6b7280".into(),
        }
    }

    /// Resolve a semantic marker color to this theme's value
    pub fn marker(&self, color: MarkerColor) -> &str {
        match color {
            MarkerColor::Blue => &self.blue,
            MarkerColor::Indigo => &self.indigo,
            MarkerColor::Purple => &self.purple,
            MarkerColor::Slate => &self.slate,
            MarkerColor::Red => &self.red,
            MarkerColor::Orange => &self.orange,
            MarkerColor::Green => &self.green,
            MarkerColor::Yellow => &self.yellow,
            MarkerColor::Gray => &self.gray,
        }
    }

    /// Resolve the actual-bar color for a delay classification
    pub fn actual_bar(&self, delay: DelayStatus) -> &str {
        if delay.is_delayed() {
            &self.delayed_color
        } else {
            &self.on_time_color
        }
    }
}

/// Semantic color for a project's health on the portfolio view
pub fn health_color(health: ProjectHealth) -> MarkerColor {
    match health {
        ProjectHealth::OnTrack => MarkerColor::Blue,
        ProjectHealth::Delayed => MarkerColor::Orange,
        ProjectHealth::Critical => MarkerColor::Red,
        ProjectHealth::Completed => MarkerColor::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marker_lookup_matches_palette() {
        let theme = Theme::light();
        assert_eq!(theme.marker(MarkerColor::Blue), theme.blue);
        assert_eq!(theme.marker(MarkerColor::Slate), theme.slate);
    }

    #[test]
    fn actual_bar_black_unless_delayed() {
        let theme = Theme::light();
        assert_eq!(theme.actual_bar(DelayStatus::OnTime), "#000000");
        assert_eq!(theme.actual_bar(DelayStatus::Normal), "#000000");
        assert_eq!(theme.actual_bar(DelayStatus::Delayed), "#dc2626");
    }

    #[test]
    fn health_maps_to_closed_palette() {
        assert_eq!(health_color(ProjectHealth::OnTrack), MarkerColor::Blue);
        assert_eq!(health_color(ProjectHealth::Critical), MarkerColor::Red);
        assert_eq!(health_color(ProjectHealth::Completed), MarkerColor::Green);
        assert_eq!(health_color(ProjectHealth::Delayed), MarkerColor::Orange);
    }
}
