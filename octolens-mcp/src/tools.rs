//! Parameter structs for the exposed tools, one module per category.
//!
//! Optional text parameters default to empty, which the gateway treats as
//! "not set". `limit` is clamped to `[1, 100]` by the gateway.

pub mod commits;
pub mod files;
pub mod issues;
pub mod repository;
pub mod search;
pub mod users;
pub mod workflows;

pub const fn default_limit() -> i64 {
  10
}

pub fn default_state() -> String {
  "open".to_string()
}

pub fn default_sort_updated() -> String {
  "updated".to_string()
}
