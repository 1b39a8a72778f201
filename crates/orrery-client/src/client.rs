//! Blocking HTTP client for the planet metadata service.

use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

use orrery_config::ClientConfig;
use orrery_store::Planet;

/// Errors returned by [`PlanetClient::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service has no record with that name.
    #[error("planet not found")]
    NotFound,

    /// The service answered with a non-success status other than 404.
    #[error("server responded with status {0}")]
    Server(u16),

    /// The request never produced a response (connection refused, timeout...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not a planet record.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Client for `GET /planets/{name}`.
#[derive(Clone)]
pub struct PlanetClient {
    agent: ureq::Agent,
    base_url: String,
}

impl PlanetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.server_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a body; the name is percent-encoded as one path segment.
    pub fn planet_url(&self, name: &str) -> String {
        format!(
            "{}/planets/{}",
            self.base_url,
            utf8_percent_encode(name, NON_ALPHANUMERIC)
        )
    }

    /// Fetch one planet record by name.
    pub fn fetch(&self, name: &str) -> Result<Planet, ClientError> {
        let url = self.planet_url(name);
        debug!(%url, "fetching planet metadata");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Err(ClientError::NotFound),
            Err(ureq::Error::Status(status, _)) => {
                warn!(%url, status, "metadata request failed");
                return Err(ClientError::Server(status));
            }
            Err(ureq::Error::Transport(transport)) => {
                warn!(%url, error = %transport, "metadata request failed");
                return Err(ClientError::Transport(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_url_encodes_segment() {
        let client = PlanetClient::new("http://127.0.0.1:5001/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://127.0.0.1:5001");
        assert_eq!(
            client.planet_url("earth"),
            "http://127.0.0.1:5001/planets/earth"
        );
        assert_eq!(
            client.planet_url("a b/c"),
            "http://127.0.0.1:5001/planets/a%20b%2Fc"
        );
    }

    #[test]
    fn test_from_config() {
        let client = PlanetClient::from_config(&ClientConfig::default());
        assert_eq!(client.base_url(), "http://127.0.0.1:5001");
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener to get a port nobody is serving.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = PlanetClient::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2));
        assert!(matches!(client.fetch("earth"), Err(ClientError::Transport(_))));
    }
}
