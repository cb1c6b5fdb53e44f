//! Services API endpoints.

use crate::api::LIST_LIMIT;
use crate::error::RenderResult;
use crate::models::CreateServiceRequest;
use crate::request::ApiRequest;

/// List services, previews included.
pub fn list() -> ApiRequest {
    ApiRequest::get(["v1", "services"])
        .query("includePreviews", "true")
        .query("limit", LIST_LIMIT.to_string())
}

/// Create a service.
pub fn create(body: &CreateServiceRequest) -> RenderResult<ApiRequest> {
    Ok(ApiRequest::post(["v1", "services"]).json(serde_json::to_value(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnvVar, ServiceType};
    use reqwest::Method;

    #[test]
    fn test_list() {
        assert_eq!(list().path(), "/v1/services?includePreviews=true&limit=20");
    }

    #[test]
    fn test_create() {
        let request = create(&CreateServiceRequest {
            name: "api".to_string(),
            service_type: ServiceType::WebService,
            owner_id: "tea-1".to_string(),
            repo: Some("https://github.com/acme/api".to_string()),
            env_vars: vec![EnvVar {
                key: "PORT".to_string(),
                value: "8080".to_string(),
            }],
        })
        .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/v1/services");
        let body = request.body().unwrap();
        assert_eq!(body["envVars"][0]["key"], "PORT");
        assert_eq!(body["repo"], "https://github.com/acme/api");
    }
}
