//! Immutable view-model handed to the renderers.

use chrono::{DateTime, Utc};
use nba_shots::{FreeThrows, TeamStatistics, WinProjection};
use serde::Serialize;

use crate::builder::{
    build_chart_row, build_scoring_impact_with, build_zone_rows, ChartRow, ScoringImpact,
    ViewMode, ZoneRow,
};

/// Everything needed to draw the dashboard for one team and view mode.
///
/// A snapshot is rebuilt whenever its inputs change and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub team: String,
    pub view_mode: ViewMode,
    pub zone_rows: Vec<ZoneRow>,
    pub chart_rows: Vec<ChartRow>,
    pub impact: ScoringImpact,
    pub free_throws: FreeThrows,
    pub wins: Option<WinProjection>,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn build(
        stats: &TeamStatistics,
        view_mode: ViewMode,
        wins_per_point: f64,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let zone_rows = build_zone_rows(stats);
        let chart_rows = zone_rows
            .iter()
            .map(|row| build_chart_row(row, view_mode))
            .collect();
        Self {
            team: stats.team.clone(),
            view_mode,
            zone_rows,
            chart_rows,
            impact: build_scoring_impact_with(stats, wins_per_point),
            free_throws: stats.free_throws,
            wins: stats.wins,
            fetched_at,
        }
    }

    /// Same team data under another view mode.
    pub fn with_view_mode(&self, view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            chart_rows: self
                .zone_rows
                .iter()
                .map(|row| build_chart_row(row, view_mode))
                .collect(),
            ..self.clone()
        }
    }

    pub fn chart_title(&self) -> String {
        format!("Shot Distribution Analysis ({})", self.view_mode.label())
    }
}
