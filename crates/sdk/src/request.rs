//! A single outbound call to the Render API.

use reqwest::Method;
use serde_json::Value;

/// Method, path, query and optional JSON body of one Render API call.
///
/// Path segments are kept unencoded and percent-encoded by the transport
/// when they are joined onto the base URL, so an identifier can never
/// introduce extra path segments. The transport refuses `.` and `..`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Human-readable path, e.g. `/v1/services?limit=20`. Used for logging.
    pub fn path(&self) -> String {
        let mut path = format!("/{}", self.segments.join("/"));
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            path.push('?');
            path.push_str(&pairs.join("&"));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_with_query() {
        let request = ApiRequest::get(["v1", "services"])
            .query("includePreviews", "true")
            .query("limit", "20");

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/v1/services?includePreviews=true&limit=20");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_json_body() {
        let request = ApiRequest::put(["v1", "services", "srv-1", "env-vars", "PORT"])
            .json(serde_json::json!({"value": "8080"}));

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.path(), "/v1/services/srv-1/env-vars/PORT");
        assert_eq!(request.body(), Some(&serde_json::json!({"value": "8080"})));
    }
}
