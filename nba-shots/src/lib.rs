//! Core types and client for NBA team shot-location statistics.
//!
//! - `zone`: the six fixed court regions and the `ZoneMap` container keyed by them
//! - `team`: `TeamStatistics` and the payload parsing for `/api/team-data`
//! - `error`: the `ShotsError` type shared by every crate in the workspace
//! - `api` (feature `api`): `StatsClient`, the HTTP fetcher for teams and statistics

pub mod error;
pub mod team;
pub mod zone;

#[cfg(feature = "api")]
pub mod api;

pub use error::{Result, ShotsError};
pub use team::{parse_team_list, FreeThrows, ShotProfile, TeamImpact, TeamStatistics, WinProjection, ZoneImpact, ZoneRecord};
pub use zone::{ShotZone, ZoneMap};

/// Embedded sample payload of `/api/team-data`, shared by tests across the workspace.
pub static SAMPLE_TEAM_DATA: &str = include_str!("../../fixtures/team_data.json");

/// Embedded sample payload of `/test`.
pub static SAMPLE_TEAM_LIST: &str = include_str!("../../fixtures/teams.json");
