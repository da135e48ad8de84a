//! Parameter structs for GitHub Actions tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::default_limit;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkflowRunsParams {
  pub owner: String,
  pub repo: String,
  /// Only runs triggered on this branch. Empty for all.
  #[serde(default)]
  pub branch: String,
  /// Run status or conclusion, e.g. "completed", "in_progress", "failure". Empty for all.
  #[serde(default)]
  pub status: String,
  /// Maximum number of runs (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}
