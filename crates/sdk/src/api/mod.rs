//! Render API endpoints.
//!
//! Each function builds the [`ApiRequest`](crate::request::ApiRequest) for one
//! endpoint; [`RenderClient::send`](crate::client::RenderClient::send) issues it.

pub mod deploys;
pub mod env_vars;
pub mod logs;
pub mod owners;
pub mod services;

/// Page size for list endpoints.
pub const LIST_LIMIT: u32 = 20;

/// Page size for log queries.
pub const LOG_LIMIT: u32 = 40;
