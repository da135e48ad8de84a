//! Parameter structs for search and trending tools.

use schemars::JsonSchema;
use serde::Deserialize;

use super::default_limit;

fn default_sort_stars() -> String {
  "stars".to_string()
}

fn default_since_daily() -> String {
  "daily".to_string()
}

fn default_since_weekly() -> String {
  "weekly".to_string()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchRepositoriesParams {
  /// Search keywords, optionally with GitHub qualifiers, e.g. "web framework".
  pub query: String,
  /// Sort by "stars", "forks", or "updated". Defaults to "stars".
  #[serde(default = "default_sort_stars")]
  pub sort: String,
  /// Restrict to a language, e.g. "rust". Empty for any.
  #[serde(default)]
  pub language: String,
  /// Maximum number of results (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchCodeParams {
  /// Code to search for, e.g. "tokio::spawn".
  pub query: String,
  /// Restrict to repositories of this owner. Empty for all.
  #[serde(default)]
  pub owner: String,
  /// Restrict to this repository (requires owner). Empty for all.
  #[serde(default)]
  pub repo: String,
  /// Restrict to a language. Empty for any.
  #[serde(default)]
  pub language: String,
  /// Maximum number of results (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchIssuesParams {
  /// Search keywords.
  pub query: String,
  /// Restrict to repositories of this owner. Empty for all.
  #[serde(default)]
  pub owner: String,
  /// Restrict to this repository (requires owner). Empty for all.
  #[serde(default)]
  pub repo: String,
  /// "open" or "closed". Empty for both.
  #[serde(default)]
  pub state: String,
  /// Maximum number of results (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

/// Free-text search over users or topics
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
  /// Search keywords, optionally with GitHub qualifiers.
  pub query: String,
  /// Maximum number of results (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TrendingRepositoriesParams {
  /// Restrict to a language, e.g. "python". Empty for all.
  #[serde(default)]
  pub language: String,
  /// "daily", "weekly", or "monthly". Defaults to "daily".
  #[serde(default = "default_since_daily")]
  pub since: String,
  /// Maximum number of repositories (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TrendingDevelopersParams {
  /// Restrict to a language. Empty for all.
  #[serde(default)]
  pub language: String,
  /// "daily", "weekly", or "monthly". Defaults to "weekly".
  #[serde(default = "default_since_weekly")]
  pub since: String,
  /// Maximum number of developers (1-100). Defaults to 10.
  #[serde(default = "default_limit")]
  pub limit: i64,
}
