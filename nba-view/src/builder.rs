//! Pure transformations from `TeamStatistics` to render-ready rows.
//!
//! Nothing here divides by attempts: percentage and expected value are
//! taken as supplied, so a zone with zero attempts needs no special case.

use nba_shots::{ShotZone, TeamStatistics};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::format::SuggestedChange;

/// Wins gained per point of per-game scoring differential.
pub const DEFAULT_WINS_PER_POINT: f64 = 2.7;

/// Which pair of numbers the chart compares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Attempts,
    Makes,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Attempts, ViewMode::Makes];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Attempts => "attempts",
            ViewMode::Makes => "makes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Attempts => "Attempts",
            ViewMode::Makes => "Makes",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attempts" => Ok(ViewMode::Attempts),
            "makes" => Ok(ViewMode::Makes),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Everything the details panel shows for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneRow {
    pub zone: ShotZone,
    pub label: &'static str,
    pub current_attempts: f64,
    pub optimal_attempts: f64,
    pub current_makes: f64,
    pub optimal_makes: f64,
    pub current_percentage: f64,
    pub expected_value: f64,
    /// Optimal minus current attempts, as supplied by the endpoint
    pub attempt_change: f64,
    pub makes_difference: f64,
}

impl ZoneRow {
    pub fn suggested_change(&self) -> SuggestedChange {
        SuggestedChange::from_difference(self.attempt_change)
    }
}

/// One bar group of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartRow {
    pub name: &'static str,
    pub current: f64,
    pub optimal: f64,
}

/// Aggregate scoring figures for a team.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringImpact {
    pub current_ppg: f64,
    pub optimized_ppg: f64,
    pub point_differential: f64,
    pub projected_wins_impact: f64,
}

/// One row per zone, always in RA, NRA, MR, LC3, RC3, AB3 order.
pub fn build_zone_rows(stats: &TeamStatistics) -> Vec<ZoneRow> {
    ShotZone::ALL
        .iter()
        .map(|&zone| {
            let current = stats.current.zones.get(zone);
            let optimal = stats.optimal.zones.get(zone);
            let impact = stats.impact.zones.get(zone);
            ZoneRow {
                zone,
                label: zone.label(),
                current_attempts: current.attempts,
                optimal_attempts: optimal.attempts,
                current_makes: current.makes,
                optimal_makes: optimal.makes,
                current_percentage: current.percentage,
                expected_value: current.ev,
                attempt_change: impact.attempt_difference,
                makes_difference: impact.makes_difference,
            }
        })
        .collect()
}

/// Select the attempts or the makes pair of a zone row.
pub fn build_chart_row(row: &ZoneRow, mode: ViewMode) -> ChartRow {
    let (current, optimal) = match mode {
        ViewMode::Attempts => (row.current_attempts, row.optimal_attempts),
        ViewMode::Makes => (row.current_makes, row.optimal_makes),
    };
    ChartRow {
        name: row.zone.code(),
        current,
        optimal,
    }
}

pub fn build_scoring_impact(stats: &TeamStatistics) -> ScoringImpact {
    build_scoring_impact_with(stats, DEFAULT_WINS_PER_POINT)
}

/// Scoring impact with an explicit wins-per-point multiplier.
pub fn build_scoring_impact_with(stats: &TeamStatistics, wins_per_point: f64) -> ScoringImpact {
    let point_differential = stats.impact.points_difference;
    ScoringImpact {
        current_ppg: stats.current.ppg,
        optimized_ppg: stats.optimal.ppg,
        point_differential,
        projected_wins_impact: point_differential * wins_per_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_shots::SAMPLE_TEAM_DATA;

    fn bulls() -> TeamStatistics {
        TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Chicago Bulls").unwrap()
    }

    fn celtics() -> TeamStatistics {
        TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Boston Celtics").unwrap()
    }

    #[test]
    fn test_zone_rows_fixed_order() {
        // The Celtics payload lists its zones in scrambled key order
        for stats in [bulls(), celtics()] {
            let rows = build_zone_rows(&stats);
            assert_eq!(rows.len(), 6);
            let zones: Vec<ShotZone> = rows.iter().map(|r| r.zone).collect();
            assert_eq!(zones, ShotZone::ALL.to_vec());
        }
    }

    #[test]
    fn test_zone_row_values() {
        let rows = build_zone_rows(&bulls());
        let ra = &rows[0];
        assert_eq!(ra.label, "Restricted Area");
        assert_eq!(ra.current_attempts, 29.9);
        assert_eq!(ra.optimal_attempts, 25.9);
        assert_eq!(ra.current_makes, 18.837);
        assert_eq!(ra.optimal_makes, 16.317);
        assert_eq!(ra.current_percentage, 0.63);
        assert_eq!(ra.expected_value, 1.26);
        assert_eq!(ra.attempt_change, -4.0);
        assert_eq!(ra.makes_difference, -2.52);
    }

    #[test]
    fn test_suggested_change_example() {
        let rows = build_zone_rows(&bulls());
        let nra = &rows[1];
        assert_eq!(nra.current_attempts, 20.0);
        assert_eq!(nra.optimal_attempts, 15.0);
        assert_eq!(nra.suggested_change().to_string(), "Decrease by 5.0");
        assert_eq!(rows[3].suggested_change().to_string(), "Increase by 3.0");
    }

    #[test]
    fn test_chart_row_attempts_ignores_makes() {
        let mut row = build_zone_rows(&bulls())[0];
        row.current_makes = f64::NAN;
        row.optimal_makes = f64::NAN;
        let chart = build_chart_row(&row, ViewMode::Attempts);
        assert_eq!(chart, ChartRow { name: "RA", current: 29.9, optimal: 25.9 });
    }

    #[test]
    fn test_chart_row_makes_ignores_attempts() {
        let mut row = build_zone_rows(&bulls())[5];
        row.current_attempts = f64::NAN;
        row.optimal_attempts = f64::NAN;
        let chart = build_chart_row(&row, ViewMode::Makes);
        assert_eq!(chart, ChartRow { name: "AB3", current: 8.568, optimal: 9.928 });
    }

    #[test]
    fn test_scoring_impact() {
        let stats = bulls();
        let impact = build_scoring_impact(&stats);
        assert_eq!(impact.current_ppg, 113.639);
        assert_eq!(impact.optimized_ppg, 115.039);
        assert_eq!(impact.point_differential, 1.4);
        assert!((impact.projected_wins_impact - stats.impact.points_difference * 2.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_differential_means_zero_wins() {
        let impact = build_scoring_impact(&celtics());
        assert_eq!(impact.point_differential, 0.0);
        assert_eq!(impact.projected_wins_impact, 0.0);
    }

    #[test]
    fn test_custom_multiplier() {
        let impact = build_scoring_impact_with(&bulls(), 3.0);
        assert!((impact.projected_wins_impact - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("Makes".parse::<ViewMode>().unwrap(), ViewMode::Makes);
        assert_eq!("attempts".parse::<ViewMode>().unwrap(), ViewMode::Attempts);
        assert_eq!("points".parse::<ViewMode>().unwrap_err(), "unknown view mode: points");
        assert_eq!(ViewMode::default(), ViewMode::Attempts);
    }
}
