pub mod catalog;
pub mod endpoint;
pub mod format;
mod registry;

pub use catalog::{register_render_tools, ENDPOINTS};
pub use endpoint::{Endpoint, EndpointTool, Param, ParamKind, ToolArgs};
pub use registry::{
    json_schema_array, json_schema_enum, json_schema_identifier, json_schema_object,
    json_schema_string, Tool, ToolRegistry,
};
