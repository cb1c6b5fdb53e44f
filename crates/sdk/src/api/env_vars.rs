//! Environment variable API endpoints.

use crate::request::ApiRequest;
use serde_json::json;

/// List the environment variables of a service.
pub fn list(service_id: &str) -> ApiRequest {
    ApiRequest::get(["v1", "services", service_id, "env-vars"])
}

/// Add or update one environment variable.
pub fn put(service_id: &str, key: &str, value: &str) -> ApiRequest {
    ApiRequest::put(["v1", "services", service_id, "env-vars", key]).json(json!({ "value": value }))
}

/// Delete one environment variable.
pub fn delete(service_id: &str, key: &str) -> ApiRequest {
    ApiRequest::delete(["v1", "services", service_id, "env-vars", key])
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_paths() {
        assert_eq!(list("srv-1").path(), "/v1/services/srv-1/env-vars");

        let put = put("srv-1", "PORT", "8080");
        assert_eq!(put.method(), &Method::PUT);
        assert_eq!(put.path(), "/v1/services/srv-1/env-vars/PORT");
        assert_eq!(put.body(), Some(&json!({"value": "8080"})));

        let delete = delete("srv-1", "PORT");
        assert_eq!(delete.method(), &Method::DELETE);
        assert!(delete.body().is_none());
    }
}
