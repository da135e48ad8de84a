//! Parameter structs for commit and branch tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::default_limit;

const fn default_branch_limit() -> i64 {
  30
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommitsParams {
  pub owner: String,
  pub repo: String,
  /// Branch name. Empty uses the default branch.
  #[serde(default)]
  pub branch: String,
  /// Maximum number of commits (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommitParams {
  pub owner: String,
  pub repo: String,
  /// Commit SHA, full or abbreviated.
  pub sha: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BranchesParams {
  pub owner: String,
  pub repo: String,
  /// Maximum number of branches (1-100). Defaults to 30.
  #[serde(default = "default_branch_limit")]
  pub limit: i64,
}
