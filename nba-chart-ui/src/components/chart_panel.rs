//! Bar chart panel: heading, legend and the D3 render target.

use crate::js_bridge::{CURRENT_COLOR, OPTIMAL_COLOR};
use dioxus::prelude::*;
use nba_view::ViewMode;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id D3 renders into
    pub id: String,
    pub view_mode: ViewMode,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Current vs optimal bar chart for the selected view mode.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let label = props.view_mode.label();
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "Y-axis: {label} per game"
            }
            div {
                style: "display: flex; gap: 16px; font-size: 12px; margin-bottom: 4px;",
                LegendSwatch { color: CURRENT_COLOR, text: format!("Current {}", label) }
                LegendSwatch { color: OPTIMAL_COLOR, text: format!("Optimal {}", label) }
            }
            div {
                style: "{style}",
                if props.loading {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                        "Loading chart..."
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}

#[component]
fn LegendSwatch(color: &'static str, text: String) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 4px;",
            span { style: "width: 12px; height: 12px; display: inline-block; background: {color};" }
            "{text}"
        }
    }
}
