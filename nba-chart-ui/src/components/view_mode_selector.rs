//! Attempts/makes toggle for the chart.

use crate::state::AppState;
use dioxus::prelude::*;
use nba_view::ViewMode;

#[component]
pub fn ViewModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_mode = (state.view_mode)();

    let on_mode_change = move |evt: Event<FormData>| match evt.value().parse::<ViewMode>() {
        Ok(mode) => state.view_mode.set(mode),
        Err(e) => log::warn!("Ignoring view mode change: {}", e),
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Compare: "
            select {
                onchange: on_mode_change,
                for (mode, label) in ViewMode::ALL.map(|m| (m, m.label())) {
                    option {
                        value: "{mode}",
                        selected: mode == current_mode,
                        "{label}"
                    }
                }
            }
        }
    }
}
