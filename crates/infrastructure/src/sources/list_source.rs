use async_trait::async_trait;
use ferrous_sweep_application::ports::ListSource;
use ferrous_sweep_domain::DomainError;
use std::time::Duration;
use tracing::{debug, info};

/// Reads list text from `http(s)://` URLs or local paths.
///
/// URLs go through a shared `reqwest` client with a per-request timeout;
/// anything else is treated as a filesystem path (an optional `file://`
/// prefix is stripped).
pub struct DefaultListSource {
    http_client: reqwest::Client,
    fetch_timeout: Duration,
}

impl DefaultListSource {
    pub fn new(fetch_timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("ferrous-sweep/", env!("CARGO_PKG_VERSION")))
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            fetch_timeout,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    fn is_url(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    async fn fetch_url(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .http_client
            .get(url)
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(|e| DomainError::list_source(url, format!("fetch error: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::list_source(
                url,
                format!("HTTP {}", response.status().as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::list_source(url, format!("read error: {}", e)))
    }

    async fn read_file(&self, location: &str) -> Result<String, DomainError> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::list_source(location, e.to_string()))
    }
}

#[async_trait]
impl ListSource for DefaultListSource {
    async fn fetch(&self, location: &str) -> Result<String, DomainError> {
        let text = if Self::is_url(location) {
            debug!(url = %location, "Fetching list over HTTP");
            self.fetch_url(location).await?
        } else {
            debug!(path = %location, "Reading list from file");
            self.read_file(location).await?
        };

        info!(source = %location, bytes = text.len(), "List source loaded");
        Ok(text)
    }
}
