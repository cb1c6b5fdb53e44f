//! # Render SDK
//!
//! Minimal client for the Render cloud hosting REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_sdk::{api, RenderClient, RenderResult};
//!
//! #[tokio::main]
//! async fn main() -> RenderResult<()> {
//!     let client = RenderClient::builder()
//!         .api_key("rnd_your_api_key")
//!         .build()?;
//!
//!     let services = client.send(&api::services::list()).await?;
//!     println!("{}", serde_json::to_string_pretty(&services)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! Every call is a single attempt. Failures come back as [`RenderError`],
//! classified by [`RenderError::kind`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod transport;

pub use client::{RenderClient, RenderClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ErrorKind, RenderError, RenderResult};
pub use request::ApiRequest;
