//! `zones` subcommand: per-zone current vs optimal shot distribution.

use crate::OutputFormat;
use anyhow::Context;
use chrono::Utc;
use log::info;
use nba_shots::api::StatsClient;
use nba_view::format::{format_count, format_ev, format_percentage};
use nba_view::{DashboardSnapshot, ViewMode, ZoneRow};
use serde::Serialize;
use std::fmt::Write as _;
use std::io;

pub async fn run_zones(
    client: &StatsClient,
    team: &str,
    view: ViewMode,
    format: OutputFormat,
    wins_per_point: f64,
) -> anyhow::Result<()> {
    let stats = client
        .fetch_team_statistics(team)
        .await
        .with_context(|| format!("fetching statistics for {}", team))?;
    let snapshot = DashboardSnapshot::build(&stats, view, wins_per_point, Utc::now());
    info!("Built {} zone rows for {}", snapshot.zone_rows.len(), snapshot.team);

    match format {
        OutputFormat::Table => print!("{}", render_table(&snapshot)),
        OutputFormat::Csv => write_csv(&snapshot.zone_rows, io::stdout().lock())?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }
    Ok(())
}

/// Fixed-width table of the zone rows, with the chart series for the
/// snapshot's view mode in the first two numeric columns.
pub fn render_table(snapshot: &DashboardSnapshot) -> String {
    let mode = snapshot.view_mode.label();
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", snapshot.team, snapshot.chart_title());
    let _ = writeln!(
        out,
        "{:<5} {:<22} {:>10} {:>10} {:>7} {:>6}  {}",
        "Zone",
        "Label",
        format!("Cur {}", mode),
        format!("Opt {}", mode),
        "FG%",
        "EV",
        "Suggested"
    );
    for (row, chart) in snapshot.zone_rows.iter().zip(&snapshot.chart_rows) {
        let _ = writeln!(
            out,
            "{:<5} {:<22} {:>10} {:>10} {:>7} {:>6}  {}",
            chart.name,
            row.label,
            format_count(chart.current),
            format_count(chart.optimal),
            format_percentage(row.current_percentage),
            format_ev(row.expected_value),
            row.suggested_change()
        );
    }
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    zone: &'a str,
    label: &'a str,
    current_attempts: f64,
    optimal_attempts: f64,
    current_makes: f64,
    optimal_makes: f64,
    current_percentage: f64,
    expected_value: f64,
    attempt_change: f64,
    makes_difference: f64,
    suggested_change: String,
}

impl<'a> From<&'a ZoneRow> for CsvRow<'a> {
    fn from(row: &'a ZoneRow) -> Self {
        Self {
            zone: row.zone.code(),
            label: row.label,
            current_attempts: row.current_attempts,
            optimal_attempts: row.optimal_attempts,
            current_makes: row.current_makes,
            optimal_makes: row.optimal_makes,
            current_percentage: row.current_percentage,
            expected_value: row.expected_value,
            attempt_change: row.attempt_change,
            makes_difference: row.makes_difference,
            suggested_change: row.suggested_change().to_string(),
        }
    }
}

/// Write zone rows as CSV with a header line.
pub fn write_csv<W: io::Write>(rows: &[ZoneRow], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(CsvRow::from(row))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_shots::{TeamStatistics, SAMPLE_TEAM_DATA};
    use nba_view::DEFAULT_WINS_PER_POINT;

    fn bulls(mode: ViewMode) -> DashboardSnapshot {
        let stats = TeamStatistics::from_payload(SAMPLE_TEAM_DATA, "Chicago Bulls").unwrap();
        DashboardSnapshot::build(&stats, mode, DEFAULT_WINS_PER_POINT, Utc::now())
    }

    #[test]
    fn test_render_table_rows_in_zone_order() {
        let table = render_table(&bulls(ViewMode::Attempts));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Chicago Bulls: Shot Distribution Analysis (Attempts)"));
        assert!(lines[1].contains("Cur Attempts"));
        assert!(lines[2].starts_with("RA "));
        assert!(lines[3].starts_with("NRA"));
        assert!(lines[3].contains("Decrease by 5.0"));
        assert!(lines[7].starts_with("AB3"));
        assert!(lines[7].contains("Increase by 4.0"));
    }

    #[test]
    fn test_render_table_makes_view() {
        let table = render_table(&bulls(ViewMode::Makes));
        let ra = table.lines().nth(2).unwrap();
        assert!(ra.contains("18.8"));
        assert!(ra.contains("16.3"));
        assert!(ra.contains("63.0%"));
        assert!(ra.contains("1.26"));
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&bulls(ViewMode::Attempts).zone_rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("zone,label,current_attempts,optimal_attempts"));
        assert!(lines[0].ends_with("suggested_change"));
        assert!(lines[1].starts_with("RA,Restricted Area,29.9,25.9"));
        assert!(lines[2].ends_with("Decrease by 5.0"));
    }
}
