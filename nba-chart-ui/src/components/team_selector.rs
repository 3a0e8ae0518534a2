//! Dropdown selector for choosing a team.

use crate::state::AppState;
use dioxus::prelude::*;

/// Team dropdown selector.
/// Reads available teams from AppState and updates selected_team on change.
#[component]
pub fn TeamSelector() -> Element {
    let mut state = use_context::<AppState>();
    let teams = state.teams.read().clone();
    let selected = (state.selected_team)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if value != *state.selected_team.peek() {
            state.selected_team.set(value);
        }
    };

    rsx! {
        div {
            style: "width: 240px;",
            label {
                r#for: "team-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Team: "
            }
            select {
                id: "team-select",
                disabled: teams.is_empty(),
                onchange: on_change,
                if selected.is_empty() {
                    option { value: "", selected: true, "Select a team" }
                }
                for team in teams.iter() {
                    option {
                        value: "{team}",
                        selected: *team == selected,
                        "{team}"
                    }
                }
            }
        }
    }
}
