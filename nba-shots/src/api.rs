//! HTTP client for the team statistics endpoint.
//!
//! Every call is a single attempt: a failed request surfaces as
//! `ShotsError::Network` and retrying is left to the caller.

use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

use crate::error::{Result, ShotsError};
use crate::team::{parse_team_list, TeamStatistics};

/// Base URL of the statistics service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Route listing the available teams.
pub const TEAMS_PATH: &str = "/test";

/// Route serving statistics for every team.
pub const TEAM_DATA_PATH: &str = "/api/team-data";

/// Connection settings for `StatsClient`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub base_url: String,
    /// Request timeout (native targets only; the browser owns fetch timeouts)
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("nba-shots/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetcherConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Fetches team lists and team statistics from the external endpoint.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());

        let client = builder.build().map_err(|e| ShotsError::Network {
            url: config.base_url.clone(),
            reason: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the teams the endpoint has statistics for, in server order.
    pub async fn list_teams(&self) -> Result<Vec<String>> {
        let body = self.get_text(TEAMS_PATH).await?;
        let teams = parse_team_list(&body)?;
        info!("Found {} teams at {}", teams.len(), self.base_url);
        Ok(teams)
    }

    /// Fetch the statistics of a single team.
    pub async fn fetch_team_statistics(&self, team: &str) -> Result<TeamStatistics> {
        info!("Fetching team statistics for {}", team);
        let body = self.get_text(TEAM_DATA_PATH).await?;
        TeamStatistics::from_payload(&body, team)
    }

    async fn get_text(&self, route: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, route);
        let network_error = |reason: String| {
            warn!("Request to {} failed: {}", url, reason);
            ShotsError::Network {
                url: url.clone(),
                reason,
            }
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("bad response status: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(format!("failed to read response body: {}", e)))?;
        debug!("{} returned {} bytes", url, body.len());
        Ok(body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::zone::ShotZone;
    use crate::{SAMPLE_TEAM_DATA, SAMPLE_TEAM_LIST};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(route: &str, template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> StatsClient {
        StatsClient::new(FetcherConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_list_teams() {
        let server = serve(TEAMS_PATH, ResponseTemplate::new(200).set_body_string(SAMPLE_TEAM_LIST)).await;
        let teams = client_for(&server).list_teams().await.unwrap();
        assert_eq!(teams, vec!["Boston Celtics", "Chicago Bulls"]);
    }

    #[tokio::test]
    async fn test_list_teams_empty() {
        let server = serve(
            TEAMS_PATH,
            ResponseTemplate::new(200).set_body_string(r#"{"available_teams": []}"#),
        )
        .await;
        let err = client_for(&server).list_teams().await.unwrap_err();
        assert_eq!(err, ShotsError::EmptyResult);
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let server = serve(
            TEAMS_PATH,
            ResponseTemplate::new(500).set_body_string(r#"{"error": "file not found"}"#),
        )
        .await;
        let err = client_for(&server).list_teams().await.unwrap_err();
        assert!(matches!(err, ShotsError::Network { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = StatsClient::new(FetcherConfig::with_base_url("http://127.0.0.1:1")).unwrap();
        let err = client.list_teams().await.unwrap_err();
        assert!(matches!(err, ShotsError::Network { .. }));
    }

    #[tokio::test]
    async fn test_fetch_team_statistics() {
        let server = serve(TEAM_DATA_PATH, ResponseTemplate::new(200).set_body_string(SAMPLE_TEAM_DATA)).await;
        let stats = client_for(&server)
            .fetch_team_statistics("Chicago Bulls")
            .await
            .unwrap();
        assert_eq!(stats.team, "Chicago Bulls");
        assert_eq!(stats.optimal.zones.get(ShotZone::AboveTheBreak3).attempts, 29.2);
    }

    #[tokio::test]
    async fn test_fetch_missing_team() {
        let server = serve(TEAM_DATA_PATH, ResponseTemplate::new(200).set_body_string(SAMPLE_TEAM_DATA)).await;
        let err = client_for(&server)
            .fetch_team_statistics("Vancouver Grizzlies")
            .await
            .unwrap_err();
        assert_eq!(err, ShotsError::NotFound("Vancouver Grizzlies".to_string()));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = StatsClient::new(FetcherConfig::with_base_url("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
