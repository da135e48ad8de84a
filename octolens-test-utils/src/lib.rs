//! Test utilities shared across the octolens workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Upstream GitHub payload fixtures ([`fixtures`])
//! - Mock server mounting shortcuts ([`mount_json`], [`mount_status`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod mock;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use mock::{mount_json, mount_status};
