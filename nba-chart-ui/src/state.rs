//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use nba_shots::TeamStatistics;
use nba_view::{DashboardSnapshot, FetchSlot, LoadState, ViewMode, DEFAULT_WINS_PER_POINT};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the team list is still loading
    pub loading_teams: Signal<bool>,
    /// Error from the team list fetch
    pub teams_error: Signal<Option<String>>,
    /// Available team names, in server order
    pub teams: Signal<Vec<String>>,
    /// Currently selected team (empty until the team list arrives)
    pub selected_team: Signal<String>,
    /// Chart comparison mode
    pub view_mode: Signal<ViewMode>,
    /// Statistics of the selected team, guarded against stale responses
    pub team_data: Signal<FetchSlot<TeamStatistics>>,
    /// Multiplier from point differential to projected wins
    pub wins_per_point: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading_teams: Signal::new(true),
            teams_error: Signal::new(None),
            teams: Signal::new(Vec::new()),
            selected_team: Signal::new(String::new()),
            view_mode: Signal::new(ViewMode::default()),
            team_data: Signal::new(FetchSlot::new()),
            wins_per_point: Signal::new(DEFAULT_WINS_PER_POINT),
        }
    }

    /// Build the current snapshot, if the selected team's data is loaded.
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        let mode = (self.view_mode)();
        let wins_per_point = (self.wins_per_point)();
        match self.team_data.read().state() {
            LoadState::Ready { value, fetched_at } => Some(DashboardSnapshot::build(
                value,
                mode,
                wins_per_point,
                *fetched_at,
            )),
            _ => None,
        }
    }

    /// Message to show instead of the dashboard, if any.
    pub fn error_message(&self) -> Option<String> {
        if let Some(err) = (self.teams_error)() {
            return Some(err);
        }
        self.team_data.read().state().error().map(str::to_string)
    }

    pub fn is_loading(&self) -> bool {
        (self.loading_teams)() || self.team_data.read().state().is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
