//! Command implementations for the NBA shot analysis CLI.
//!
//! Provides subcommands for listing teams, printing a team's per-zone
//! view-model and summarizing its scoring impact.

use clap::{Args, Subcommand, ValueEnum};
use nba_shots::api::{FetcherConfig, StatsClient, DEFAULT_BASE_URL};
use nba_view::{ViewMode, DEFAULT_WINS_PER_POINT};
use std::time::Duration;

pub mod impact;
pub mod teams;
pub mod zones;

/// Connection and policy settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Base URL of the shot statistics service
    #[arg(long, env = "NBA_STATS_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Wins gained per point of per-game scoring differential
    #[arg(long, env = "NBA_WINS_PER_POINT", default_value_t = DEFAULT_WINS_PER_POINT, global = true)]
    pub wins_per_point: f64,
}

impl Settings {
    pub fn client(&self) -> anyhow::Result<StatsClient> {
        let config = FetcherConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..FetcherConfig::default()
        };
        Ok(StatsClient::new(config)?)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the teams the statistics service knows about
    Teams,

    /// Show current vs optimal shot distribution per zone
    Zones {
        /// Team name, exactly as listed by `teams`
        team: String,

        /// Compare attempts or makes
        #[arg(long, value_enum, default_value_t = ViewArg::Attempts)]
        view: ViewArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show points per game and projected win impact
    Impact {
        /// Team name, exactly as listed by `teams`
        team: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Attempts,
    Makes,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Attempts => ViewMode::Attempts,
            ViewArg::Makes => ViewMode::Makes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

pub async fn run(settings: Settings, command: Command) -> anyhow::Result<()> {
    let client = settings.client()?;
    match command {
        Command::Teams => teams::run_teams(&client).await,
        Command::Zones { team, view, format } => {
            zones::run_zones(&client, &team, view.into(), format, settings.wins_per_point).await
        }
        Command::Impact { team } => {
            impact::run_impact(&client, &team, settings.wins_per_point).await
        }
    }
}
