//! Main client for the Render SDK.

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{RenderError, RenderResult};
use crate::request::ApiRequest;
use crate::transport::HttpTransport;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Render API.
#[derive(Debug, Clone)]
pub struct RenderClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl RenderClient {
    /// Create a new client builder.
    pub fn builder() -> RenderClientBuilder {
        RenderClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> RenderResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Issue one request against the Render API.
    pub async fn send(&self, request: &ApiRequest) -> RenderResult<Value> {
        self.http.send(request).await
    }
}

/// Builder for creating a RenderClient.
pub struct RenderClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl RenderClientBuilder {
    /// Create a new builder pointed at the public Render API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the Render API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> RenderResult<RenderClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| RenderError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(&self.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RenderError::Config(format!(
                "Unsupported base URL scheme: {}",
                base_url.scheme()
            )));
        }

        let config = ClientConfig {
            base_url,
            api_key,
            timeout: self.timeout,
        };

        RenderClient::from_config(config)
    }
}

impl Default for RenderClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_builder_defaults_to_render_api() {
        let client = RenderClient::builder().api_key("rnd_test").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.render.com/");
    }

    #[test]
    fn test_builder_requires_api_key() {
        let err = RenderClient::builder().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = RenderClient::builder().api_key("  ").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = RenderClient::builder()
            .api_key("rnd_test")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = RenderClient::builder()
            .api_key("rnd_test")
            .base_url("ftp://api.render.com")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[tokio::test]
    async fn test_send_owners_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/owners"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = RenderClient::builder()
            .base_url(server.uri())
            .api_key("rnd_test")
            .build()
            .unwrap();

        let payload = client.send(&api::owners::list()).await.unwrap();
        assert_eq!(payload, serde_json::json!([]));
    }
}
