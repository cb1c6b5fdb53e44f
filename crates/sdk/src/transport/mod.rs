//! Transport layer for the Render SDK.

pub mod http;

pub use http::HttpTransport;
