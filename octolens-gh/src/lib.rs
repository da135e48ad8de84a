//! # GitHub Resource Gateway
//!
//! Read-oriented access to the GitHub REST API. A single
//! [`GitHubClient`] dispatches requests with fixed headers and an optional
//! bearer token, classifies failures into [`GatewayError`], and exposes one
//! pipeline per operation that reshapes the upstream payload into a compact,
//! stable record (see [`records`]).

pub mod client;
pub mod config;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod params;
pub mod records;
pub mod text;

// Re-export the client
pub use client::{ApiRequest, GitHubClient, create_github_client};
pub use config::GatewayConfig;
// Re-export the error taxonomy
pub use error::{ErrorKind, ErrorRecord, GatewayError, Result};
pub use params::clamp_limit;
