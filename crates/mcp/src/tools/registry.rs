// MCP tool trait and registry

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::{bail, Result};
use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with arguments already validated against its schema
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;
}

struct RegisteredTool {
    schema: ToolSchema,
    validator: Validator,
    tool: Arc<dyn Tool>,
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool. Fails if the name is taken or its input schema does
    /// not compile.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let schema = tool.schema();
        if self.index.contains_key(&schema.name) {
            bail!("Tool already registered: {}", schema.name);
        }

        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&schema.input_schema)
            .map_err(|e| anyhow::anyhow!("Invalid input schema for {}: {}", schema.name, e))?;

        self.index.insert(schema.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            schema,
            validator,
            tool,
        });
        Ok(())
    }

    /// List all tool schemas, in registration order
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|entry| entry.schema.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate and run a tool.
    ///
    /// Never fails: unknown tools, invalid arguments and tool errors are all
    /// rendered into an error result.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> CallToolResult {
        let Some(entry) = self.lookup(name) else {
            warn!(tool = %name, "Unknown tool");
            return CallToolResult::error(format!("Unknown tool: {}", name));
        };

        let arguments = if arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            arguments
        };

        if let Some(violation) = entry.validator.iter_errors(&arguments).next() {
            warn!(tool = %name, error = %violation, "Invalid tool arguments");
            return CallToolResult::error(format!(
                "Invalid arguments for {}: {}",
                name, violation
            ));
        }

        debug!(tool = %name, "Executing tool");
        match entry.tool.execute(arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool execution failed");
                CallToolResult::error(format!("Tool {} failed: {:#}", name, e))
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&i| &self.tools[i])
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

/// String schema for identifiers interpolated into request paths. Rejects
/// the empty string and the dot segments `.` and `..`.
pub fn json_schema_identifier(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "minLength": 1,
        "not": {"enum": [".", ".."]},
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_array(items: Value, description: &str) -> Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name.to_string(),
                description: "Echo the message back".to_string(),
                input_schema: json_schema_object(
                    json!({
                        "message": json_schema_identifier("Message to echo"),
                        "mode": json_schema_enum(&["plain", "loud"], "Echo mode")
                    }),
                    vec!["message"],
                ),
            }
        }

        async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
            let message = arguments["message"].as_str().unwrap_or_default();
            if message == "boom" {
                bail!("exploded");
            }
            Ok(CallToolResult::text(message))
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "echo" })).unwrap();
        registry
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = registry();
        let err = registry
            .register(Arc::new(EchoTool { name: "echo" }))
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_schemas_keeps_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool { name: "zeta" })).unwrap();
        registry.register(Arc::new(EchoTool { name: "alpha" })).unwrap();

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let result = registry().dispatch("echo", json!({"message": "hi"})).await;
        assert!(!result.is_error());
        assert_eq!(result.joined_text(), "hi");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let result = registry().dispatch("nope", json!({})).await;
        assert!(result.is_error());
        assert_eq!(result.joined_text(), "Unknown tool: nope");
    }

    #[tokio::test]
    async fn test_dispatch_missing_required_argument() {
        let result = registry().dispatch("echo", Value::Null).await;
        assert!(result.is_error());
        let text = result.joined_text();
        assert!(text.starts_with("Invalid arguments for echo:"));
        assert!(text.contains("message"));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_wrong_type_and_enum() {
        let registry = registry();

        let result = registry.dispatch("echo", json!({"message": 42})).await;
        assert!(result.is_error());

        let result = registry
            .dispatch("echo", json!({"message": "hi", "mode": "quiet"}))
            .await;
        assert!(result.is_error());

        let result = registry.dispatch("echo", json!({"message": ""})).await;
        assert!(result.is_error());

        for dots in [".", ".."] {
            let result = registry.dispatch("echo", json!({"message": dots})).await;
            assert!(result.is_error(), "accepted {:?}", dots);
        }

        let result = registry.dispatch("echo", json!({"message": "..."})).await;
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_dispatch_converts_tool_error() {
        let result = registry().dispatch("echo", json!({"message": "boom"})).await;
        assert!(result.is_error());
        assert_eq!(result.joined_text(), "Tool echo failed: exploded");
    }
}
