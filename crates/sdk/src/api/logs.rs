//! Logs API endpoints.

use crate::api::LOG_LIMIT;
use crate::request::ApiRequest;

/// Most recent logs of one resource, newest first.
pub fn list(owner_id: &str, resource: &str) -> ApiRequest {
    ApiRequest::get(["v1", "logs"])
        .query("ownerId", owner_id)
        .query("direction", "backward")
        .query("resource", resource)
        .query("limit", LOG_LIMIT.to_string())
}
