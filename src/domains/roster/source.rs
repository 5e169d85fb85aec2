//! Roster sources - a single attempt at loading the raw roster payload.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::RosterError;
use crate::core::config::RosterConfig;

/// A single, non-retrying attempt at loading the raw roster JSON.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_raw(&self) -> Result<Value, RosterError>;
}

/// Loads the roster from the public character API.
#[derive(Debug, Clone)]
pub struct HttpRosterSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRosterSource {
    /// Build a source for the configured endpoint and user agent.
    pub fn new(config: &RosterConfig) -> Result<Self, RosterError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RosterSource for HttpRosterSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_raw(&self) -> Result<Value, RosterError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Roster response received: {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> RosterConfig {
        RosterConfig {
            endpoint: format!("{}/api/characters", server.uri()),
            ..RosterConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_raw_sends_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/characters"))
            .and(header("user-agent", "mcp-dragonball/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpRosterSource::new(&config_for(&server)).unwrap();
        let raw = source.fetch_raw().await.unwrap();
        assert_eq!(raw, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_fetch_raw_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpRosterSource::new(&config_for(&server)).unwrap();
        let err = source.fetch_raw().await.unwrap_err();
        assert!(matches!(err, RosterError::Status(503)));
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[tokio::test]
    async fn test_fetch_raw_malformed_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpRosterSource::new(&config_for(&server)).unwrap();
        let err = source.fetch_raw().await.unwrap_err();
        assert!(matches!(err, RosterError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_fetch_raw_out_of_range_number_fails_the_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{ "id": 1, "name": "Goku", "maxKi": 1e400 }]"#),
            )
            .mount(&server)
            .await;

        let source = HttpRosterSource::new(&config_for(&server)).unwrap();
        let err = source.fetch_raw().await.unwrap_err();
        assert!(matches!(err, RosterError::InvalidJson(_)));
    }
}
