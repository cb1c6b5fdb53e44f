//! HTTP transport layer for the Render SDK.

use crate::config::ClientConfig;
use crate::error::{RenderError, RenderResult};
use crate::request::ApiRequest;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
///
/// Every call is a single attempt: no retries, no circuit breaking.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> RenderResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| RenderError::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let client = Client::builder()
            .user_agent(concat!("render-sdk/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| RenderError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the full URL for a request.
    ///
    /// `.` and `..` are rejected: URL normalization would drop them and
    /// silently address a different endpoint.
    fn build_url(&self, request: &ApiRequest) -> RenderResult<url::Url> {
        if let Some(segment) = request
            .segments()
            .iter()
            .find(|s| s.as_str() == "." || s.as_str() == "..")
        {
            return Err(RenderError::InvalidInput(format!(
                "invalid path segment: {:?}",
                segment
            )));
        }

        let mut url = self.config.base_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RenderError::Config("Base URL cannot carry a path".to_string()))?;
            segments.pop_if_empty().extend(request.segments());
        }

        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }

        Ok(url)
    }

    /// Issue the request and normalize the outcome.
    ///
    /// A 204 or an empty body is an empty object, not an error.
    pub async fn send(&self, request: &ApiRequest) -> RenderResult<Value> {
        let url = self.build_url(request)?;
        debug!(method = %request.method(), url = %url, "Render API request");

        let mut builder = self.client.request(request.method().clone(), url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                method = %request.method(),
                path = %request.path(),
                status = status.as_u16(),
                "Render API returned an error"
            );
            return Err(RenderError::from_response(status, &body));
        }

        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
