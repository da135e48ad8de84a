//! Files, directories, and README pipelines over the contents API.

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::{FILE_CONTENT_BUDGET, README_BUDGET};
use crate::error::{GatewayError, Result};
use crate::models::RawContent;
use crate::params::QueryParams;
use crate::records::{DirectoryEntry, DirectoryListing, FileContent, Readme};
use crate::text::{decode_content, truncate};

impl GitHubClient {
  /// Get a file's decoded text, cut to 5,000 characters.
  ///
  /// # Errors
  ///
  /// A directory path is rejected with [`GatewayError::RequestFailed`]
  /// pointing the caller at `list_directory`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_file_content(&self, owner: &str, repo: &str, path: &str, branch: &str) -> Result<FileContent> {
    info!("Fetching file {} from {}/{}", path, owner, repo);

    let payload = self.dispatch(contents_request(owner, repo, path, branch)).await?;
    if payload.is_array() {
      warn!("{} in {}/{} is a directory", path, owner, repo);
      return Err(GatewayError::request_failed(format!(
        "'{path}' is a directory. Use list_directory to see its contents."
      )));
    }

    let raw: RawContent = serde_json::from_value(payload)?;
    let decoded = decode_content(
      raw.content.as_deref().unwrap_or_default(),
      raw.encoding.as_deref().unwrap_or_default(),
    );
    let content = truncate(&decoded, FILE_CONTENT_BUDGET);

    Ok(FileContent {
      repository: format!("{owner}/{repo}"),
      path: raw.path,
      name: raw.name,
      size: raw.size,
      kind: raw.kind,
      url: raw.html_url.unwrap_or_default(),
      content: content.text,
      truncated: content.truncated,
    })
  }

  /// List a directory. An empty `path` lists the repository root.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_directory(&self, owner: &str, repo: &str, path: &str, branch: &str) -> Result<DirectoryListing> {
    info!("Listing '{}' in {}/{}", path, owner, repo);

    let payload = self.dispatch(contents_request(owner, repo, path, branch)).await?;
    // A file path answers with a single object; list it as one entry.
    let raw: Vec<RawContent> = match payload {
      Value::Array(_) => serde_json::from_value(payload)?,
      other => vec![serde_json::from_value(other)?],
    };

    let entries: Vec<DirectoryEntry> = raw
      .into_iter()
      .map(|e| DirectoryEntry {
        name: e.name,
        path: e.path,
        kind: e.kind,
        size: e.size,
        url: e.html_url.unwrap_or_default(),
      })
      .collect();

    Ok(DirectoryListing {
      repository: format!("{owner}/{repo}"),
      path: if path.is_empty() { "/".to_string() } else { path.to_string() },
      entry_count: entries.len(),
      entries,
    })
  }

  /// Get the repository README, cut to 10,000 characters.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_readme(&self, owner: &str, repo: &str) -> Result<Readme> {
    info!("Fetching README for {}/{}", owner, repo);

    let raw: RawContent = self.fetch(ApiRequest::get(format!("repos/{owner}/{repo}/readme"))).await?;
    let decoded = decode_content(
      raw.content.as_deref().unwrap_or_default(),
      raw.encoding.as_deref().unwrap_or_default(),
    );
    let content = truncate(&decoded, README_BUDGET);

    Ok(Readme {
      repository: format!("{owner}/{repo}"),
      name: raw.name,
      path: raw.path,
      size: raw.size,
      url: raw.html_url.unwrap_or_default(),
      content: content.text,
      truncated: content.truncated,
    })
  }
}

fn contents_request(owner: &str, repo: &str, path: &str, branch: &str) -> ApiRequest {
  let path = path.trim_matches('/');
  ApiRequest::get(format!("repos/{owner}/{repo}/contents/{path}")).query(QueryParams::new().optional("ref", Some(branch)))
}
