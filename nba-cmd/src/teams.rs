//! `teams` subcommand.

use anyhow::Context;
use log::info;
use nba_shots::api::StatsClient;

/// Print every available team, one per line.
pub async fn run_teams(client: &StatsClient) -> anyhow::Result<()> {
    let teams = client
        .list_teams()
        .await
        .with_context(|| format!("listing teams from {}", client.base_url()))?;
    info!("{} teams available", teams.len());
    for team in &teams {
        println!("{}", team);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use nba_shots::SAMPLE_TEAM_LIST;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: String) -> Settings {
        Settings {
            base_url,
            timeout_secs: 5,
            wins_per_point: 2.7,
        }
    }

    #[tokio::test]
    async fn test_run_teams() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_TEAM_LIST))
            .mount(&server)
            .await;

        let client = settings(server.uri()).client().unwrap();
        assert!(run_teams(&client).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_teams_reports_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = settings(server.uri()).client().unwrap();
        let err = run_teams(&client).await.unwrap_err();
        assert!(format!("{:#}", err).contains(&server.uri()));
    }
}
