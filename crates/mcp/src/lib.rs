// MCP (Model Context Protocol) server for the Render API
// Exposes Render endpoints as tools to agent clients over stdio

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{Cli, ServerConfig};
pub use server::McpServer;
