//! Owners API endpoints.

use crate::api::LIST_LIMIT;
use crate::request::ApiRequest;

/// List the workspaces and users the API key can act for.
pub fn list() -> ApiRequest {
    ApiRequest::get(["v1", "owners"]).query("limit", LIST_LIMIT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        assert_eq!(list().path(), "/v1/owners?limit=20");
    }
}
