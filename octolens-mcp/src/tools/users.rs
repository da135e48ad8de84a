//! Parameter structs for user and organization tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{default_limit, default_sort_updated};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserParams {
  /// GitHub username, e.g. "octocat".
  pub username: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserRepositoriesParams {
  /// GitHub username.
  pub username: String,
  /// Sort by "created", "updated", "pushed", or "full_name". Defaults to "updated".
  #[serde(default = "default_sort_updated")]
  pub sort: String,
  /// Maximum number of repositories (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OrganizationParams {
  /// Organization login, e.g. "github".
  pub org: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OrganizationRepositoriesParams {
  /// Organization login.
  pub org: String,
  /// Sort by "created", "updated", "pushed", or "full_name". Defaults to "updated".
  #[serde(default = "default_sort_updated")]
  pub sort: String,
  /// Maximum number of repositories (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}
