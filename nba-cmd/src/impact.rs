//! `impact` subcommand: points per game and projected win impact.

use anyhow::Context;
use chrono::Utc;
use nba_shots::api::StatsClient;
use nba_view::format::{format_count, format_percentage, format_signed};
use nba_view::{DashboardSnapshot, ViewMode};
use std::fmt::Write as _;

pub async fn run_impact(
    client: &StatsClient,
    team: &str,
    wins_per_point: f64,
) -> anyhow::Result<()> {
    let stats = client
        .fetch_team_statistics(team)
        .await
        .with_context(|| format!("fetching statistics for {}", team))?;
    let snapshot = DashboardSnapshot::build(&stats, ViewMode::default(), wins_per_point, Utc::now());
    print!("{}", render_impact(&snapshot));
    Ok(())
}

pub fn render_impact(snapshot: &DashboardSnapshot) -> String {
    let impact = &snapshot.impact;
    let ft = &snapshot.free_throws;
    let mut out = String::new();
    let _ = writeln!(out, "{}: Scoring Impact", snapshot.team);
    let _ = writeln!(out, "  Current PPG:          {}", format_count(impact.current_ppg));
    let _ = writeln!(out, "  Optimized PPG:        {}", format_count(impact.optimized_ppg));
    let _ = writeln!(
        out,
        "  Point differential:   {}",
        format_signed(impact.point_differential)
    );
    let _ = writeln!(
        out,
        "  Projected win impact: {}",
        format_signed(impact.projected_wins_impact)
    );
    let ft_points = ft
        .points
        .map(|points| format!(", {} points", format_count(points)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  Free throws:          {} attempts at {}{} (unchanged)",
        format_count(ft.attempts),
        format_percentage(ft.percentage),
        ft_points
    );
    if let Some(wins) = &snapshot.wins {
        let _ = writeln!(
            out,
            "  Season projection:    {} -> {} wins ({})",
            format_count(wins.current_wins),
            format_count(wins.projected_wins),
            format_signed(wins.wins_difference)
        );
    }
    out
}
