//! Parameter structs for repository, release, and tag tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::default_limit;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RepoParams {
  /// Repository owner (user or organization), e.g. "octocat".
  pub owner: String,
  /// Repository name, e.g. "Hello-World".
  pub repo: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RepoListParams {
  /// Repository owner (user or organization).
  pub owner: String,
  /// Repository name.
  pub repo: String,
  /// Maximum number of results (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}
