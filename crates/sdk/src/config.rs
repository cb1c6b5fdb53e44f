//! Configuration types for the Render SDK.

use std::time::Duration;
use url::Url;

/// Base URL of the public Render API.
pub const DEFAULT_BASE_URL: &str = "https://api.render.com";

/// Default request timeout applied by the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Render client.
///
/// Built once at startup; the API key is never refreshed afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Render API.
    pub base_url: Url,
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse("https://example.com").unwrap();
        let config = ClientConfig::new(url.clone(), "rnd_test");

        assert_eq!(config.base_url, url);
        assert_eq!(config.api_key, "rnd_test");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url, "rnd_secret");

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("rnd_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
