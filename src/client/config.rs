//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Public Strava API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Configuration for the Strava client.
///
/// # Example
///
/// ```
/// use strava_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("strava-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root (a proxy, a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Parse and normalize the base URL so that paths can be appended to it.
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let trimmed = self.base_url.trim_end_matches('/');
        let url = Url::parse(trimmed)?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base url {:?} cannot carry endpoint paths",
                self.base_url
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_url, "https://www.strava.com/api/v3");
        assert!(config.user_agent.starts_with("strava-rs/"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/api/v3/");
        assert_eq!(
            config.parsed_base_url().unwrap().as_str(),
            "http://127.0.0.1:8080/api/v3"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ClientConfig::default().with_base_url("not a url").parsed_base_url().is_err());
        assert!(matches!(
            ClientConfig::default().with_base_url("mailto:me@example.com").parsed_base_url(),
            Err(Error::Config(_))
        ));
    }
}
