//! # GitHub API Endpoints
//!
//! One pipeline per logical resource. Each pipeline builds an [`ApiRequest`]
//! from normalized parameters, dispatches it, and maps the typed upstream
//! payload into a stable record from [`crate::records`].
//!
//! [`ApiRequest`]: crate::client::ApiRequest

pub mod actions;
pub mod commits;
pub mod contents;
pub mod issues;
pub mod pulls;
pub mod rate_limit;
pub mod releases;
pub mod repos;
pub mod search;
pub mod stats;
pub mod trending;
pub mod users;

#[cfg(test)]
pub(crate) mod tests;
