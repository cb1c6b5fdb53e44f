// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use render_mcp::server::McpServer;
use render_mcp::tools::{register_render_tools, ToolRegistry};
use render_mcp::{Cli, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_cli(&cli)?;
    let client = Arc::new(config.client().context("Failed to create Render client")?);

    tracing::debug!(base_url = %config.base_url(), "Render MCP server starting");

    let mut registry = ToolRegistry::new();
    register_render_tools(&mut registry, client)?;

    tracing::debug!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
