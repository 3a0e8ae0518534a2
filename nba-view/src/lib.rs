//! View-model derivation for the shot analysis dashboard and CLI.
//!
//! This crate turns a fetched `TeamStatistics` into the flat, ordered rows
//! the chart and details panels render, and keeps overlapping fetches in
//! last-selection-wins order.

pub mod builder;
pub mod format;
pub mod sequence;
pub mod snapshot;

pub use builder::{
    build_chart_row, build_scoring_impact, build_scoring_impact_with, build_zone_rows, ChartRow,
    ScoringImpact, ViewMode, ZoneRow, DEFAULT_WINS_PER_POINT,
};
pub use format::SuggestedChange;
pub use sequence::{FetchSlot, LoadState, RequestSequence, RequestToken};
pub use snapshot::DashboardSnapshot;
