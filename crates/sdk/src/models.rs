//! Response and request models for the Render API.
//!
//! Response fields are optional so a record missing a field still decodes;
//! formatting decides what to show in its place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One element of the `GET /v1/services` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub service: Service,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub suspended: Option<String>,
    pub auto_deploy: Option<String>,
    pub branch: Option<String>,
    pub repo: Option<String>,
    pub owner_id: Option<String>,
    pub dashboard_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub service_details: Option<ServiceDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDetails {
    pub region: Option<String>,
    pub env: Option<String>,
    pub plan: Option<String>,
    pub build_plan: Option<String>,
    pub url: Option<String>,
}

/// One element of the `GET /v1/services/{id}/deploys` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployEntry {
    pub deploy: Deploy,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deploy {
    pub id: Option<String>,
    pub commit: Option<Commit>,
    pub status: Option<String>,
    pub trigger: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Commit {
    pub id: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<String>,
}

/// One element of the `GET /v1/services/{id}/env-vars` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVarEntry {
    pub env_var: EnvVar,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A key/value pair, used both in responses and in create-service bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

/// One element of the `GET /v1/owners` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerEntry {
    pub owner: Owner,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub owner_type: Option<String>,
}

/// Body of `GET /v1/logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogsPage {
    pub has_more: bool,
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub message: Option<String>,
}

/// Service types accepted by `POST /v1/services`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    StaticSite,
    WebService,
    PrivateService,
    BackgroundWorker,
    CronJob,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::StaticSite,
        ServiceType::WebService,
        ServiceType::PrivateService,
        ServiceType::BackgroundWorker,
        ServiceType::CronJob,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::StaticSite => "static_site",
            ServiceType::WebService => "web_service",
            ServiceType::PrivateService => "private_service",
            ServiceType::BackgroundWorker => "background_worker",
            ServiceType::CronJob => "cron_job",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown service type: {}", s))
    }
}

/// Body of `POST /v1/services`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<EnvVar>,
}
