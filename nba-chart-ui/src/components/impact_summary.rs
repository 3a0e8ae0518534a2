//! Scoring impact summary: PPG, point differential and projected wins.

use dioxus::prelude::*;
use nba_shots::{FreeThrows, WinProjection};
use nba_view::format::{format_count, format_percentage, format_signed};
use nba_view::ScoringImpact;

#[derive(Props, Clone, PartialEq)]
pub struct ImpactSummaryProps {
    pub impact: ScoringImpact,
    pub free_throws: FreeThrows,
    #[props(default)]
    pub wins: Option<WinProjection>,
}

#[component]
pub fn ImpactSummary(props: ImpactSummaryProps) -> Element {
    let impact = props.impact;
    let current_ppg = format_count(impact.current_ppg);
    let optimized_ppg = format_count(impact.optimized_ppg);
    let differential = format_signed(impact.point_differential);
    let wins_impact = format_signed(impact.projected_wins_impact);
    let ft_attempts = format_count(props.free_throws.attempts);
    let ft_percentage = format_percentage(props.free_throws.percentage);
    let season = props.wins.map(|wins| {
        format!(
            "Season projection: {} wins now, {} projected ({}).",
            format_count(wins.current_wins),
            format_count(wins.projected_wins),
            format_signed(wins.wins_difference)
        )
    });

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px;",
            Stat { label: "Current PPG", value: current_ppg }
            Stat { label: "Optimized PPG", value: optimized_ppg }
            Stat { label: "Point Differential", value: differential }
            Stat { label: "Projected Win Impact", value: wins_impact }
        }
        p {
            style: "font-size: 12px; color: #666; margin: 8px 0 0 0;",
            "Free throws held constant: {ft_attempts} attempts at {ft_percentage}."
        }
        if let Some(season) = season {
            p {
                style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
                "{season}"
            }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px; text-align: center;",
            div { style: "font-size: 12px; color: #666;", "{label}" }
            div { style: "font-size: 20px; font-weight: 600; margin-top: 4px;", "{value}" }
        }
    }
}
