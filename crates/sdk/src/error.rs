//! Error types for the Render SDK.

use reqwest::StatusCode;
use serde::Deserialize;

/// Result type for SDK operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Error types that can occur when calling the Render API.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Transport-level failure (DNS, connection refused, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-2xx response.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A successful response carried a body that is not valid JSON, or the
    /// JSON did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Coarse classification of a [`RenderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Validation,
    Network,
    Api,
    Decode,
}

impl RenderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Config(_) | Self::InvalidUrl(_) => ErrorKind::Config,
            Self::InvalidInput(_) => ErrorKind::Validation,
        }
    }

    /// Create an API error from a status code and response body.
    ///
    /// The message is taken from the JSON body's `message` field. A JSON body
    /// without one falls back to the status line; a body that is not JSON
    /// falls back to `HTTP error, status <code>`.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(ErrorResponse {
                message: Some(message),
            }) => message,
            Ok(_) => status.to_string(),
            Err(_) => format!("HTTP error, status {}", status.as_u16()),
        };

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Error response body returned by the Render API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = RenderError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"deploy in progress"}"#,
        );
        match err {
            RenderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "deploy in progress");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_json_without_message() {
        let err = RenderError::from_response(StatusCode::NOT_FOUND, r#"{"id":"not_found"}"#);
        match err {
            RenderError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "404 Not Found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_unparseable_body() {
        let err = RenderError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("HTTP error, status 502"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            RenderError::Config("missing key".to_string()).kind(),
            ErrorKind::Config
        );
        assert_eq!(
            RenderError::InvalidInput("empty".to_string()).kind(),
            ErrorKind::Validation
        );

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(RenderError::from(decode).kind(), ErrorKind::Decode);
    }
}
