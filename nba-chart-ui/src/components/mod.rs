//! Reusable Dioxus RSX components for the shot analysis dashboard.

mod card;
mod chart_panel;
mod error_display;
mod impact_summary;
mod loading_spinner;
mod team_selector;
mod view_mode_selector;
mod zone_details;

pub use card::Card;
pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use impact_summary::ImpactSummary;
pub use loading_spinner::LoadingSpinner;
pub use team_selector::TeamSelector;
pub use view_mode_selector::ViewModeSelector;
pub use zone_details::ZoneDetails;
