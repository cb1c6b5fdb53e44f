// Render tool table: one row per MCP tool

use super::endpoint::{Endpoint, EndpointTool, Param, ParamKind, ToolArgs};
use super::format::{
    format_confirmation, format_deploy, format_env_var, format_list, format_log, format_owner,
    format_service,
};
use super::ToolRegistry;
use anyhow::Result;
use render_sdk::api::{deploys, env_vars, logs, owners, services};
use render_sdk::models::{
    CreateServiceRequest, Deploy, DeployEntry, EnvVarEntry, LogEntry, LogsPage, OwnerEntry,
    ServiceEntry, ServiceType,
};
use render_sdk::{ApiRequest, RenderClient, RenderError, RenderResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const SERVICE_TYPES: &[&str] = &[
    "static_site",
    "web_service",
    "private_service",
    "background_worker",
    "cron_job",
];

const SERVICE_ID: Param = Param::required(
    "serviceId",
    ParamKind::Identifier,
    "The ID of the service (e.g. srv-xxxxx)",
);
const DEPLOY_ID: Param = Param::required(
    "deployId",
    ParamKind::Identifier,
    "The ID of the deploy (e.g. dep-xxxxx)",
);
const ENV_VAR_KEY: Param = Param::required(
    "envVarKey",
    ParamKind::Identifier,
    "The name of the environment variable",
);

/// Every tool this server exposes, in listing order.
pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get-services",
        description: "Get list of available services",
        params: &[],
        action: "retrieve services",
        request: get_services_request,
        render: render_services,
    },
    Endpoint {
        name: "create-service",
        description: "Create a new service",
        params: &[
            Param::required("name", ParamKind::Identifier, "Name of the service"),
            Param::required("type", ParamKind::Enum(SERVICE_TYPES), "Type of the service"),
            Param::required(
                "ownerId",
                ParamKind::Identifier,
                "The ID of the workspace or user that owns the service",
            ),
            Param::optional("repo", ParamKind::String, "URL of the Git repository to build from"),
            Param::optional(
                "envVars",
                ParamKind::KeyValueList,
                "Environment variables to set on the new service",
            ),
        ],
        action: "create service",
        request: create_service_request,
        render: render_created_service,
    },
    Endpoint {
        name: "get-deploys",
        description: "Get the most recent deploys of a service",
        params: &[SERVICE_ID],
        action: "retrieve deploys",
        request: get_deploys_request,
        render: render_deploys,
    },
    Endpoint {
        name: "trigger-deploy",
        description: "Trigger a new deploy of a service",
        params: &[SERVICE_ID],
        action: "trigger deploy",
        request: trigger_deploy_request,
        render: render_triggered_deploy,
    },
    Endpoint {
        name: "retrieve-deploy",
        description: "Get the details of a single deploy",
        params: &[SERVICE_ID, DEPLOY_ID],
        action: "retrieve deploy",
        request: retrieve_deploy_request,
        render: render_deploy,
    },
    Endpoint {
        name: "cancel-deploy",
        description: "Cancel an in-progress deploy",
        params: &[SERVICE_ID, DEPLOY_ID],
        action: "cancel deploy",
        request: cancel_deploy_request,
        render: render_cancelled_deploy,
    },
    Endpoint {
        name: "list-env-var",
        description: "List the environment variables of a service",
        params: &[SERVICE_ID],
        action: "retrieve environment variables",
        request: list_env_vars_request,
        render: render_env_vars,
    },
    Endpoint {
        name: "add-update-env-var",
        description: "Add or update an environment variable of a service",
        params: &[
            SERVICE_ID,
            ENV_VAR_KEY,
            Param::required(
                "envVarValue",
                ParamKind::String,
                "The value of the environment variable",
            ),
        ],
        action: "add/update environment variable",
        request: put_env_var_request,
        render: render_put_env_var,
    },
    Endpoint {
        name: "delete-env-var",
        description: "Delete an environment variable from a service",
        params: &[SERVICE_ID, ENV_VAR_KEY],
        action: "delete environment variable",
        request: delete_env_var_request,
        render: render_deleted_env_var,
    },
    Endpoint {
        name: "get-owners",
        description: "Get the workspaces and users the API key has access to",
        params: &[],
        action: "retrieve owners",
        request: get_owners_request,
        render: render_owners,
    },
    Endpoint {
        name: "get-logs",
        description: "Get the most recent logs of a service",
        params: &[
            Param::required(
                "ownerId",
                ParamKind::Identifier,
                "The ID of the workspace or user that owns the service",
            ),
            Param::required(
                "serverId",
                ParamKind::Identifier,
                "The ID of the service to fetch logs for",
            ),
        ],
        action: "retrieve logs",
        request: get_logs_request,
        render: render_logs,
    },
];

/// Register every Render tool against one shared client.
pub fn register_render_tools(registry: &mut ToolRegistry, client: Arc<RenderClient>) -> Result<()> {
    for endpoint in ENDPOINTS {
        registry.register(Arc::new(EndpointTool::new(endpoint, client.clone())))?;
    }
    Ok(())
}

// Request builders

fn get_services_request(_: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(services::list())
}

fn create_service_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    let service_type: ServiceType = args
        .required("type")?
        .parse()
        .map_err(RenderError::InvalidInput)?;

    services::create(&CreateServiceRequest {
        name: args.required("name")?.to_string(),
        service_type,
        owner_id: args.required("ownerId")?.to_string(),
        repo: args.optional("repo").map(str::to_string),
        env_vars: args.key_values("envVars")?,
    })
}

fn get_deploys_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(deploys::list(args.required("serviceId")?))
}

fn trigger_deploy_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(deploys::trigger(args.required("serviceId")?))
}

fn retrieve_deploy_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(deploys::get(
        args.required("serviceId")?,
        args.required("deployId")?,
    ))
}

fn cancel_deploy_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(deploys::cancel(
        args.required("serviceId")?,
        args.required("deployId")?,
    ))
}

fn list_env_vars_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(env_vars::list(args.required("serviceId")?))
}

fn put_env_var_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(env_vars::put(
        args.required("serviceId")?,
        args.required("envVarKey")?,
        args.required("envVarValue")?,
    ))
}

fn delete_env_var_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(env_vars::delete(
        args.required("serviceId")?,
        args.required("envVarKey")?,
    ))
}

fn get_owners_request(_: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(owners::list())
}

fn get_logs_request(args: &ToolArgs) -> RenderResult<ApiRequest> {
    Ok(logs::list(
        args.required("ownerId")?,
        args.required("serverId")?,
    ))
}

// Renderers

fn render_services(_: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(render_list(
        "Available Render Services:",
        "No services found",
        payload,
        serde_json::from_value::<Vec<ServiceEntry>>,
        |e| format_service(&e.service),
    ))
}

fn render_created_service(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(format_confirmation(
        &format!("Service {} created:", args.required("name")?),
        &payload,
    ))
}

fn render_deploys(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(render_list(
        &format!("Deploys for service {}:", args.required("serviceId")?),
        "No deploys found",
        payload,
        serde_json::from_value::<Vec<DeployEntry>>,
        |e| format_deploy(&e.deploy),
    ))
}

fn render_triggered_deploy(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(format_confirmation(
        &format!("Deploy triggered for service {}:", args.required("serviceId")?),
        &payload,
    ))
}

fn render_deploy(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    let banner = format!(
        "Deploy {} of service {}:",
        args.required("deployId")?,
        args.required("serviceId")?
    );

    Ok(match serde_json::from_value::<Deploy>(payload.clone()) {
        Ok(deploy) => format!("{}\n\n{}", banner, format_deploy(&deploy)),
        Err(e) => {
            debug!(error = %e, "Unrecognized deploy payload, rendering as JSON");
            format_confirmation(&banner, &payload)
        }
    })
}

fn render_cancelled_deploy(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(format_confirmation(
        &format!("Deploy {} cancelled:", args.required("deployId")?),
        &payload,
    ))
}

fn render_env_vars(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(render_list(
        &format!(
            "Environment variables for service {}:",
            args.required("serviceId")?
        ),
        "No environment variables found",
        payload,
        serde_json::from_value::<Vec<EnvVarEntry>>,
        |e| format_env_var(&e.env_var),
    ))
}

fn render_put_env_var(_: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(format_confirmation("Env. variable added/updated:", &payload))
}

fn render_deleted_env_var(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(format_confirmation(
        &format!(
            "Env. variable {} deleted from service {}:",
            args.required("envVarKey")?,
            args.required("serviceId")?
        ),
        &payload,
    ))
}

fn render_owners(_: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(render_list(
        "Available owners:",
        "No owners found",
        payload,
        serde_json::from_value::<Vec<OwnerEntry>>,
        |e| format_owner(&e.owner),
    ))
}

fn render_logs(args: &ToolArgs, payload: Value) -> RenderResult<String> {
    Ok(render_list(
        &format!("Recent logs for {}:", args.required("serverId")?),
        "No logs found",
        payload,
        |payload| {
            if payload.is_array() {
                serde_json::from_value::<Vec<LogEntry>>(payload)
            } else {
                serde_json::from_value::<LogsPage>(payload).map(|page| page.logs)
            }
        },
        format_log,
    ))
}

/// Render a list response.
///
/// A no-content success (`{}` or `null`) is an empty list. A payload that
/// does not decode into records is shown as pretty JSON under the banner.
fn render_list<T>(
    banner: &str,
    empty: &str,
    payload: Value,
    decode: impl FnOnce(Value) -> serde_json::Result<Vec<T>>,
    format: impl Fn(&T) -> String,
) -> String {
    if is_no_content(&payload) {
        return empty.to_string();
    }

    match decode(payload.clone()) {
        Ok(entries) => format_list(banner, empty, entries.iter().map(format).collect()),
        Err(e) => {
            debug!(error = %e, "Unrecognized list payload, rendering as JSON");
            format_confirmation(banner, &payload)
        }
    }
}

fn is_no_content(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
