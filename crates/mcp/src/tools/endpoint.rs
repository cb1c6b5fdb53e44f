// Generic tool that proxies one Render API endpoint

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_enum, json_schema_identifier, json_schema_object,
    json_schema_string, Tool,
};
use anyhow::Result;
use render_sdk::models::EnvVar;
use render_sdk::{ApiRequest, RenderClient, RenderError, RenderResult};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::warn;

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    /// Free-form string.
    String,
    /// Non-empty string interpolated into the request path.
    Identifier,
    /// One of a fixed set of literals.
    Enum(&'static [&'static str]),
    /// Array of `{key, value}` string pairs.
    KeyValueList,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
        }
    }

    fn schema(&self) -> Value {
        match self.kind {
            ParamKind::String => json_schema_string(self.description),
            ParamKind::Identifier => json_schema_identifier(self.description),
            ParamKind::Enum(values) => json_schema_enum(values, self.description),
            ParamKind::KeyValueList => json_schema_array(
                json_schema_object(
                    json!({
                        "key": json_schema_identifier("Variable name"),
                        "value": json_schema_string("Variable value")
                    }),
                    vec!["key", "value"],
                ),
                self.description,
            ),
        }
    }
}

/// One row of the tool table: what to call and how to present the result.
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    /// Phrase used in `Failed to <action>: ...`.
    pub action: &'static str,
    pub request: fn(&ToolArgs) -> RenderResult<ApiRequest>,
    pub render: fn(&ToolArgs, Value) -> RenderResult<String>,
}

impl Endpoint {
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|param| (param.name.to_string(), param.schema()))
            .collect();
        let required = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name)
            .collect();

        json_schema_object(Value::Object(properties), required)
    }
}

/// Validated tool arguments.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    pub fn from_value(arguments: Value) -> RenderResult<Self> {
        match arguments {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::default()),
            other => Err(RenderError::InvalidInput(format!(
                "arguments must be an object, got {}",
                other
            ))),
        }
    }

    pub fn required(&self, name: &str) -> RenderResult<&str> {
        self.optional(name)
            .ok_or_else(|| RenderError::InvalidInput(format!("missing argument: {}", name)))
    }

    pub fn optional(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn key_values(&self, name: &str) -> RenderResult<Vec<EnvVar>> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| RenderError::InvalidInput(format!("{}: {}", name, e))),
        }
    }
}

/// Executes an [`Endpoint`] against the Render API.
pub struct EndpointTool {
    endpoint: &'static Endpoint,
    client: Arc<RenderClient>,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, client: Arc<RenderClient>) -> Self {
        Self { endpoint, client }
    }

    async fn run(&self, arguments: Value) -> RenderResult<String> {
        let args = ToolArgs::from_value(arguments)?;
        let request = (self.endpoint.request)(&args)?;
        let payload = self.client.send(&request).await?;
        (self.endpoint.render)(&args, payload)
    }
}

#[async_trait::async_trait]
impl Tool for EndpointTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.endpoint.name.to_string(),
            description: self.endpoint.description.to_string(),
            input_schema: self.endpoint.input_schema(),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        match self.run(arguments).await {
            Ok(text) => Ok(CallToolResult::text(text)),
            Err(e) => {
                warn!(
                    tool = %self.endpoint.name,
                    kind = ?e.kind(),
                    error = %e,
                    "Render API call failed"
                );
                Ok(CallToolResult::error(format!(
                    "Failed to {}: {}",
                    self.endpoint.action, e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[Param] = &[
        Param::required("serviceId", ParamKind::Identifier, "Service ID"),
        Param::optional("note", ParamKind::String, "Free text"),
        Param::optional("envVars", ParamKind::KeyValueList, "Variables"),
    ];

    fn noop_request(_: &ToolArgs) -> RenderResult<ApiRequest> {
        Ok(ApiRequest::get(["v1", "owners"]))
    }

    fn noop_render(_: &ToolArgs, _: Value) -> RenderResult<String> {
        Ok(String::new())
    }

    static ENDPOINT: Endpoint = Endpoint {
        name: "noop",
        description: "Does nothing",
        params: PARAMS,
        action: "do nothing",
        request: noop_request,
        render: noop_render,
    };

    #[test]
    fn test_input_schema_shape() {
        let schema = ENDPOINT.input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["serviceId"]));
        assert_eq!(schema["properties"]["serviceId"]["minLength"], 1);
        assert_eq!(schema["properties"]["note"]["type"], "string");
        assert_eq!(schema["properties"]["envVars"]["type"], "array");
        assert_eq!(
            schema["properties"]["envVars"]["items"]["required"],
            json!(["key", "value"])
        );
    }

    #[test]
    fn test_tool_args_accessors() {
        let args = ToolArgs::from_value(json!({
            "serviceId": "srv-1",
            "envVars": [{"key": "PORT", "value": "8080"}]
        }))
        .unwrap();

        assert_eq!(args.required("serviceId").unwrap(), "srv-1");
        assert!(args.optional("note").is_none());
        assert!(args.required("note").is_err());
        assert_eq!(args.key_values("envVars").unwrap().len(), 1);
        assert!(args.key_values("missing").unwrap().is_empty());
    }

    #[test]
    fn test_tool_args_rejects_non_object() {
        assert!(ToolArgs::from_value(json!("srv-1")).is_err());
        assert!(ToolArgs::from_value(Value::Null).is_ok());
    }
}
