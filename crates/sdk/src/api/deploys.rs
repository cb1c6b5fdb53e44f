//! Deploys API endpoints.

use crate::api::LIST_LIMIT;
use crate::request::ApiRequest;

/// List the most recent deploys of a service.
pub fn list(service_id: &str) -> ApiRequest {
    ApiRequest::get(["v1", "services", service_id, "deploys"])
        .query("limit", LIST_LIMIT.to_string())
}

/// Trigger a new deploy of a service.
pub fn trigger(service_id: &str) -> ApiRequest {
    ApiRequest::post(["v1", "services", service_id, "deploys"])
}

/// Get a single deploy.
pub fn get(service_id: &str, deploy_id: &str) -> ApiRequest {
    ApiRequest::get(["v1", "services", service_id, "deploys", deploy_id])
}

/// Cancel an in-progress deploy.
pub fn cancel(service_id: &str, deploy_id: &str) -> ApiRequest {
    ApiRequest::post(["v1", "services", service_id, "deploys", deploy_id, "cancel"])
}
