//! Parameter structs for file and directory tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FileParams {
  pub owner: String,
  pub repo: String,
  /// Path of the file inside the repository, e.g. "src/main.rs".
  pub path: String,
  /// Branch, tag, or commit. Empty uses the default branch.
  #[serde(default)]
  pub branch: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DirectoryParams {
  pub owner: String,
  pub repo: String,
  /// Directory path. Empty lists the repository root.
  #[serde(default)]
  pub path: String,
  /// Branch, tag, or commit. Empty uses the default branch.
  #[serde(default)]
  pub branch: String,
}
