//! NBA Shot Analysis Dashboard
//!
//! Compares each team's current shot distribution with the optimal one
//! computed by the statistics service, as a D3.js grouped bar chart plus an
//! expected value listing and a scoring impact summary.
//!
//! Data flow:
//! 1. On mount: fetch the team list from `/test` and select the first team.
//! 2. On team selection: fetch `/api/team-data` tagged with a request token.
//!    Responses for superseded selections are dropped.
//! 3. On data or view mode change: rebuild the `DashboardSnapshot` and
//!    re-render the chart via D3.js.
//!
//! The service location can be overridden with `window.NBA_STATS_URL` and the
//! wins multiplier with `window.NBA_WINS_PER_POINT`, set before the WASM loads.

use chrono::Utc;
use dioxus::prelude::*;
use nba_chart_ui::components::{
    Card, ChartPanel, ErrorDisplay, ImpactSummary, LoadingSpinner, TeamSelector,
    ViewModeSelector, ZoneDetails,
};
use nba_chart_ui::js_bridge::{self, BarChartConfig};
use nba_chart_ui::state::AppState;
use nba_shots::api::{FetcherConfig, StatsClient};
use nba_view::{DashboardSnapshot, DEFAULT_WINS_PER_POINT};

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "shot-distribution-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("shot-analysis-root"))
        .launch(App);
}

fn fetcher_config() -> FetcherConfig {
    match js_bridge::window_setting("NBA_STATS_URL") {
        Some(url) => FetcherConfig::with_base_url(url),
        None => FetcherConfig::default(),
    }
}

fn wins_per_point_setting() -> f64 {
    js_bridge::window_setting("NBA_WINS_PER_POINT")
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(DEFAULT_WINS_PER_POINT)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(|| StatsClient::new(fetcher_config()).map_err(|e| e.to_string()));
    let snapshot = use_memo(move || state.snapshot());

    // ─── Effect 1: load the team list once on mount ───
    let teams_client = client.clone();
    use_effect(move || {
        state.wins_per_point.set(wins_per_point_setting());
        js_bridge::init_charts();

        let client = match teams_client.clone() {
            Ok(client) => client,
            Err(e) => {
                state.teams_error.set(Some(e));
                state.loading_teams.set(false);
                return;
            }
        };
        log::info!("Loading teams from {}", client.base_url());

        spawn(async move {
            match client.list_teams().await {
                Ok(teams) => {
                    if let Some(first) = teams.first() {
                        state.selected_team.set(first.clone());
                    }
                    state.teams.set(teams);
                }
                Err(e) => {
                    log::error!("Failed to load teams: {}", e);
                    state.teams_error.set(Some(e.to_string()));
                }
            }
            state.loading_teams.set(false);
        });
    });

    // ─── Effect 2: fetch statistics whenever the selected team changes ───
    // Only the response for the latest selection is applied.
    use_effect(move || {
        let team = (state.selected_team)();
        if team.is_empty() {
            return;
        }
        let Ok(client) = client.clone() else {
            return;
        };

        let token = state.team_data.write().begin();
        spawn(async move {
            let result = client.fetch_team_statistics(&team).await;
            if let Err(e) = &result {
                log::warn!("Failed to load statistics for {}: {}", team, e);
            }
            if !state.team_data.write().resolve(token, result, Utc::now()) {
                log::info!("Dropped superseded statistics for {}", team);
            }
        });
    });

    // ─── Effect 3: re-render the chart for the current snapshot ───
    use_effect(move || match snapshot() {
        Some(snapshot) => {
            let config = BarChartConfig::for_view_mode(&snapshot.chart_title(), snapshot.view_mode);
            js_bridge::render_bar_chart(CHART_CONTAINER_ID, &snapshot.chart_rows, &config);
        }
        None => js_bridge::destroy_chart(CHART_CONTAINER_ID),
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1280px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            Card {
                title: "NBA Shot Analysis Dashboard".to_string(),

                div {
                    style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap; margin-bottom: 16px;",
                    TeamSelector {}
                    ViewModeSelector {}
                }

                if let Some(err) = state.error_message() {
                    ErrorDisplay { message: err }
                } else if state.is_loading() {
                    LoadingSpinner {}
                } else if let Some(snapshot) = snapshot() {
                    Dashboard { snapshot }
                } else {
                    LoadingSpinner { message: "Select a team to begin.".to_string() }
                }
            }
        }
    }
}

/// Chart, expected value listing and scoring impact for one snapshot.
#[component]
fn Dashboard(snapshot: DashboardSnapshot) -> Element {
    let chart_title = snapshot.chart_title();
    let updated = snapshot.fetched_at.format("%H:%M:%S UTC").to_string();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 16px;",
            Card {
                title: chart_title,
                ChartPanel {
                    id: CHART_CONTAINER_ID.to_string(),
                    view_mode: snapshot.view_mode,
                    min_height: 420,
                }
            }
            Card {
                title: "Expected Value Analysis".to_string(),
                ZoneDetails { rows: snapshot.zone_rows.clone() }
            }
        }
        div {
            style: "margin-top: 16px;",
            Card {
                title: "Scoring Impact".to_string(),
                ImpactSummary {
                    impact: snapshot.impact,
                    free_throws: snapshot.free_throws,
                    wins: snapshot.wins,
                }
            }
        }
        p {
            style: "font-size: 11px; color: #888; text-align: center; margin-top: 8px;",
            "{snapshot.team} statistics fetched at {updated}. Optimal distributions are computed by the statistics service."
        }
    }
}
