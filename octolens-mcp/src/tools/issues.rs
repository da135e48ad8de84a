//! Parameter structs for issue and pull request tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{default_limit, default_state};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IssuesParams {
  pub owner: String,
  pub repo: String,
  /// Filter by state: "open", "closed", or "all". Defaults to "open".
  #[serde(default = "default_state")]
  pub state: String,
  /// Comma-separated label names, e.g. "bug,help wanted". Empty for no filter.
  #[serde(default)]
  pub labels: String,
  /// Maximum number of issues (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IssueParams {
  pub owner: String,
  pub repo: String,
  /// Issue number.
  pub issue_number: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IssueCommentsParams {
  pub owner: String,
  pub repo: String,
  /// Issue or pull request number.
  pub issue_number: u64,
  /// Maximum number of comments (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PullRequestsParams {
  pub owner: String,
  pub repo: String,
  /// Filter by state: "open", "closed", or "all". Defaults to "open".
  #[serde(default = "default_state")]
  pub state: String,
  /// Maximum number of pull requests (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PullRequestParams {
  pub owner: String,
  pub repo: String,
  /// Pull request number.
  pub pr_number: u64,
}
