//! Per-zone expected value listing with the suggested attempt change.

use dioxus::prelude::*;
use nba_view::format::{format_count, format_ev, format_percentage, format_signed};
use nba_view::ZoneRow;

#[derive(Props, Clone, PartialEq)]
pub struct ZoneDetailsProps {
    pub rows: Vec<ZoneRow>,
}

#[component]
pub fn ZoneDetails(props: ZoneDetailsProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            for row in props.rows.iter() {
                ZoneDetailRow { key: "{row.zone}", row: *row }
            }
        }
    }
}

#[component]
fn ZoneDetailRow(row: ZoneRow) -> Element {
    let change = row.suggested_change();
    let change_color = if change.is_increase() { "#16a34a" } else { "#dc2626" };
    let current_attempts = format_count(row.current_attempts);
    let optimal_attempts = format_count(row.optimal_attempts);
    let current_makes = format_count(row.current_makes);
    let optimal_makes = format_count(row.optimal_makes);
    let percentage = format_percentage(row.current_percentage);
    let ev = format_ev(row.expected_value);
    let makes_difference = format_signed(row.makes_difference);

    rsx! {
        div {
            style: "padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 8px;",
            h3 {
                style: "margin: 0; font-size: 15px; font-weight: 600;",
                "{row.zone} Shots "
                span { style: "font-weight: normal; color: #666; font-size: 12px;", "({row.label})" }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 8px; font-size: 14px;",
                div {
                    p { style: "margin: 2px 0;", "Current: {current_attempts} attempts, {current_makes} makes" }
                    p { style: "margin: 2px 0;", "FG%: {percentage}" }
                    p { style: "margin: 2px 0;", "EV: {ev} points/shot" }
                }
                div {
                    p { style: "margin: 2px 0;", "Optimal: {optimal_attempts} attempts, {optimal_makes} makes" }
                    p { style: "margin: 2px 0; color: {change_color};", "{change}" }
                    p { style: "margin: 2px 0; color: #666;", "Makes: {makes_difference}" }
                }
            }
        }
    }
}
