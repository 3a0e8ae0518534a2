//! NBA CLI - Command line tool for team shot distribution analysis.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "nba-cli",
    version,
    about = "NBA shot distribution analysis toolkit"
)]
struct Cli {
    #[command(flatten)]
    settings: nba_cmd::Settings,

    #[command(subcommand)]
    command: nba_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using statistics service at {}", cli.settings.base_url);
    nba_cmd::run(cli.settings, cli.command).await
}
