//! Typed views of upstream GitHub payloads.
//!
//! Every struct is `#[serde(default)]` so a field missing from a payload
//! falls back to its type's default (empty string, `false`, `0`, empty list).
//! Fields GitHub sends as `null` are `Option`s, and each pipeline states the
//! default it substitutes.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Brief account reference embedded in most payloads
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawUser {
  pub login: String,
  pub html_url: String,
  pub avatar_url: String,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Login of an optional account, or an empty string
pub fn login_of(user: Option<&RawUser>) -> String {
  user.map(|u| u.login.clone()).unwrap_or_default()
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawLicense {
  pub name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRepository {
  pub name: String,
  pub full_name: String,
  pub description: Option<String>,
  pub html_url: String,
  pub created_at: String,
  pub updated_at: String,
  pub language: Option<String>,
  pub stargazers_count: u64,
  pub watchers_count: u64,
  pub forks_count: u64,
  pub open_issues_count: u64,
  pub size: u64,
  pub has_wiki: bool,
  pub has_pages: bool,
  pub has_issues: bool,
  pub has_projects: bool,
  pub has_downloads: bool,
  pub license: Option<RawLicense>,
  pub default_branch: String,
  pub topics: Vec<String>,
  pub fork: bool,
  pub archived: bool,
  pub visibility: String,
  pub owner: Option<RawUser>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawContributor {
  pub login: String,
  pub contributions: u64,
  pub html_url: String,
  #[serde(rename = "type")]
  pub kind: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTrafficViews {
  pub count: u64,
  pub uniques: u64,
  pub views: Vec<RawTrafficPoint>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTrafficPoint {
  pub timestamp: String,
  pub count: u64,
  pub uniques: u64,
}

/// Git-level author or committer of a commit
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawGitActor {
  pub name: String,
  pub email: String,
  pub date: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCommitData {
  pub message: String,
  pub author: Option<RawGitActor>,
  pub committer: Option<RawGitActor>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCommitStats {
  pub additions: u64,
  pub deletions: u64,
  pub total: u64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCommitFile {
  pub filename: String,
  pub status: String,
  pub additions: u64,
  pub deletions: u64,
  pub changes: u64,
}

/// A commit as returned by the list and detail endpoints
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCommit {
  pub sha: String,
  pub html_url: String,
  pub commit: RawCommitData,
  pub stats: Option<RawCommitStats>,
  pub files: Vec<RawCommitFile>,
}

/// Bare `{ "sha": ... }` reference
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawShaRef {
  pub sha: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawBranch {
  pub name: String,
  pub commit: RawShaRef,
  pub protected: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawLabel {
  pub name: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawMilestone {
  pub title: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawIssue {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub user: Option<RawUser>,
  pub body: Option<String>,
  pub labels: Vec<RawLabel>,
  pub assignees: Vec<RawUser>,
  pub milestone: Option<RawMilestone>,
  pub comments: u64,
  pub created_at: String,
  pub updated_at: String,
  pub closed_at: Option<String>,
  pub html_url: String,
  pub repository_url: String,
  /// Present only when the entry is a pull request
  pub pull_request: Option<Value>,
}

impl RawIssue {
  pub const fn is_pull_request(&self) -> bool {
    self.pull_request.is_some()
  }

  /// `owner/repo` derived from `repository_url`
  pub fn repository_slug(&self) -> String {
    let mut segments = self.repository_url.rsplit('/');
    match (segments.next(), segments.next()) {
      (Some(repo), Some(owner)) if !repo.is_empty() && !owner.is_empty() => format!("{owner}/{repo}"),
      _ => String::new(),
    }
  }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawComment {
  pub id: u64,
  pub user: Option<RawUser>,
  pub body: Option<String>,
  pub created_at: String,
  pub html_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawPullRequestRef {
  pub label: String,
  #[serde(rename = "ref")]
  pub ref_name: String,
  pub sha: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawPullRequest {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub user: Option<RawUser>,
  pub body: Option<String>,
  pub draft: bool,
  pub merged: bool,
  pub mergeable: Option<bool>,
  pub head: RawPullRequestRef,
  pub base: RawPullRequestRef,
  pub commits: u64,
  pub additions: u64,
  pub deletions: u64,
  pub changed_files: u64,
  pub comments: u64,
  pub review_comments: u64,
  pub created_at: String,
  pub updated_at: String,
  pub merged_at: Option<String>,
  pub closed_at: Option<String>,
  pub html_url: String,
}

/// File or directory entry from the contents API
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawContent {
  pub name: String,
  pub path: String,
  pub size: u64,
  #[serde(rename = "type")]
  pub kind: String,
  pub html_url: Option<String>,
  pub content: Option<String>,
  pub encoding: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawUserProfile {
  pub login: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub company: Option<String>,
  pub location: Option<String>,
  pub email: Option<String>,
  pub blog: Option<String>,
  pub twitter_username: Option<String>,
  pub html_url: String,
  pub avatar_url: String,
  pub public_repos: u64,
  pub public_gists: u64,
  pub followers: u64,
  pub following: u64,
  #[serde(rename = "type")]
  pub kind: String,
  pub created_at: String,
  pub updated_at: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawOrganization {
  pub login: String,
  pub name: Option<String>,
  pub description: Option<String>,
  pub blog: Option<String>,
  pub location: Option<String>,
  pub email: Option<String>,
  pub html_url: String,
  pub avatar_url: String,
  pub public_repos: u64,
  pub followers: u64,
  pub created_at: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawAsset {
  pub name: String,
  pub size: u64,
  pub download_count: u64,
  pub content_type: Option<String>,
  pub browser_download_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRelease {
  pub tag_name: String,
  pub name: Option<String>,
  pub author: Option<RawUser>,
  pub draft: bool,
  pub prerelease: bool,
  pub created_at: String,
  pub published_at: Option<String>,
  pub body: Option<String>,
  pub assets: Vec<RawAsset>,
  pub html_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTag {
  pub name: String,
  pub commit: RawShaRef,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawWorkflow {
  pub id: u64,
  pub name: String,
  pub path: String,
  pub state: String,
  pub created_at: String,
  pub updated_at: String,
  pub html_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawWorkflowList {
  pub total_count: u64,
  pub workflows: Vec<RawWorkflow>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawWorkflowRun {
  pub id: u64,
  pub name: Option<String>,
  pub run_number: u64,
  pub event: String,
  pub status: Option<String>,
  pub conclusion: Option<String>,
  pub head_branch: Option<String>,
  pub head_sha: String,
  pub actor: Option<RawUser>,
  pub created_at: String,
  pub updated_at: String,
  pub html_url: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawWorkflowRuns {
  pub total_count: u64,
  pub workflow_runs: Vec<RawWorkflowRun>,
}

/// Envelope shared by every search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawSearch<T> {
  pub total_count: u64,
  pub incomplete_results: bool,
  pub items: Vec<T>,
}

impl<T> Default for RawSearch<T> {
  fn default() -> Self {
    Self {
      total_count: 0,
      incomplete_results: false,
      items: Vec::new(),
    }
  }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCodeResult {
  pub name: String,
  pub path: String,
  pub html_url: String,
  pub score: f64,
  pub repository: RawRepository,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawSearchUser {
  pub login: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub html_url: String,
  pub avatar_url: String,
  pub score: f64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawTopic {
  pub name: String,
  pub display_name: Option<String>,
  pub short_description: Option<String>,
  pub featured: bool,
  pub curated: bool,
  pub score: f64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRateBucket {
  pub limit: u64,
  pub remaining: u64,
  pub used: u64,
  pub reset: i64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawRateLimit {
  pub resources: BTreeMap<String, RawRateBucket>,
}

/// One week of `stats/commit_activity`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawCommitActivityWeek {
  pub total: u64,
  pub week: i64,
  pub days: Vec<u64>,
}
