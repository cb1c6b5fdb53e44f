// Command-line and environment configuration for the MCP server

use clap::Parser;
use render_sdk::{RenderClient, RenderError, RenderResult, DEFAULT_BASE_URL};

/// Environment variable holding the Render API key.
pub const API_KEY_ENV: &str = "RENDER_API_KEY";

#[derive(Parser, Clone)]
#[command(name = "render-mcp")]
#[command(about = "MCP server exposing the Render API as tools over stdio", long_about = None)]
pub struct Cli {
    /// Render API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the Render API
    #[arg(long, env = "RENDER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    api_key: String,
    base_url: String,
}

impl ServerConfig {
    /// Fails when no API key was supplied.
    pub fn from_cli(cli: &Cli) -> RenderResult<Self> {
        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                RenderError::Config(format!("{} environment variable is not set", API_KEY_ENV))
            })?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: cli.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the one client shared by every tool.
    pub fn client(&self) -> RenderResult<RenderClient> {
        RenderClient::builder()
            .base_url(&self.base_url)
            .api_key(&self.api_key)
            .build()
    }
}
