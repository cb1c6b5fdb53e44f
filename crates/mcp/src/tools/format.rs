// Text rendering of Render API records
//
// Every record renders the same labelled lines in the same order; a missing
// field shows a placeholder instead of dropping its line.

use render_sdk::models::{Deploy, EnvVar, LogEntry, Owner, Service};
use serde_json::Value;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_DEPLOYED: &str = "Not deployed";
pub const NOT_FINISHED: &str = "Not finished";

const SEPARATOR: &str = "---";

fn value_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(placeholder)
}

pub fn format_service(service: &Service) -> String {
    let details = service.service_details.clone().unwrap_or_default();
    let plan = details
        .build_plan
        .as_deref()
        .filter(|p| !p.is_empty())
        .or(details.plan.as_deref());

    [
        format!("Name: {}", value_or(service.name.as_deref(), NOT_SPECIFIED)),
        format!("Type: {}", value_or(service.service_type.as_deref(), NOT_SPECIFIED)),
        format!("Status: {}", value_or(service.suspended.as_deref(), NOT_SPECIFIED)),
        format!("Region: {}", value_or(details.region.as_deref(), NOT_SPECIFIED)),
        format!("Environment: {}", value_or(details.env.as_deref(), NOT_SPECIFIED)),
        format!("Plan: {}", value_or(plan, NOT_SPECIFIED)),
        format!("URL: {}", value_or(details.url.as_deref(), NOT_DEPLOYED)),
        format!("Auto Deploy: {}", value_or(service.auto_deploy.as_deref(), NOT_SPECIFIED)),
        format!("Branch: {}", value_or(service.branch.as_deref(), NOT_SPECIFIED)),
        format!("Created At: {}", value_or(service.created_at.as_deref(), NOT_SPECIFIED)),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

pub fn format_deploy(deploy: &Deploy) -> String {
    let commit = deploy.commit.clone().unwrap_or_default();

    [
        format!("ID: {}", value_or(deploy.id.as_deref(), NOT_SPECIFIED)),
        format!("Status: {}", value_or(deploy.status.as_deref(), NOT_SPECIFIED)),
        format!("Trigger: {}", value_or(deploy.trigger.as_deref(), NOT_SPECIFIED)),
        format!("Commit ID: {}", value_or(commit.id.as_deref(), NOT_SPECIFIED)),
        format!(
            "Commit Message: {}",
            value_or(first_line(commit.message.as_deref()), NOT_SPECIFIED)
        ),
        format!("Created At: {}", value_or(deploy.created_at.as_deref(), NOT_SPECIFIED)),
        format!("Finished At: {}", value_or(deploy.finished_at.as_deref(), NOT_FINISHED)),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

pub fn format_owner(owner: &Owner) -> String {
    [
        format!("ID: {}", value_or(owner.id.as_deref(), NOT_SPECIFIED)),
        format!("Name: {}", value_or(owner.name.as_deref(), NOT_SPECIFIED)),
        format!("Email: {}", value_or(owner.email.as_deref(), NOT_SPECIFIED)),
        format!("Type: {}", value_or(owner.owner_type.as_deref(), NOT_SPECIFIED)),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

pub fn format_env_var(env_var: &EnvVar) -> String {
    format!("{}={}", env_var.key, env_var.value)
}

pub fn format_log(entry: &LogEntry) -> String {
    format!(
        "[{}] {}",
        value_or(entry.timestamp.as_deref(), NOT_SPECIFIED),
        value_or(entry.message.as_deref(), NOT_SPECIFIED)
    )
}

/// `banner`, a blank line, then the records; or `empty` alone when there are
/// no records.
pub fn format_list(banner: &str, empty: &str, records: Vec<String>) -> String {
    if records.is_empty() {
        return empty.to_string();
    }
    format!("{}\n\n{}", banner, records.join("\n"))
}

/// A confirmation sentence followed by the pretty-printed payload.
pub fn format_confirmation(sentence: &str, payload: &Value) -> String {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!("{}\n\n{}", sentence, pretty)
}

// Commit messages can span paragraphs; keep the record to one line per field.
fn first_line(message: Option<&str>) -> Option<&str> {
    message.and_then(|m| m.lines().next())
}
