//! Commit history and branch pipelines.

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::{HEADLINE_CLIP, PREVIEW_BUDGET};
use crate::error::Result;
use crate::models::{RawBranch, RawCommit};
use crate::params::QueryParams;
use crate::records::{
  BranchList, BranchSummary, CommitChangeStats, CommitDetail, CommitFileSummary, CommitList, CommitSummary,
};
use crate::text::{headline, short_sha, truncate};

/// Files listed in a commit detail before the list is cut
const COMMIT_FILES_SHOWN: usize = 30;

impl GitHubClient {
  /// List recent commits, optionally on a specific branch.
  ///
  /// An empty `branch` leaves `sha` unset so GitHub uses the default branch.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_commits(
    &self,
    owner: &str,
    repo: &str,
    branch: &str,
    limit: i64,
  ) -> Result<CommitList> {
    info!("Fetching commits for {}/{}", owner, repo);

    let params = QueryParams::new().limit(limit).optional("sha", Some(branch));
    let raw: Vec<RawCommit> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/commits")).query(params))
      .await?;

    let commits: Vec<CommitSummary> = raw.into_iter().map(commit_summary).collect();
    let branch = branch.trim();

    Ok(CommitList {
      repository: format!("{owner}/{repo}"),
      branch: if branch.is_empty() {
        "default".to_string()
      } else {
        branch.to_string()
      },
      commit_count: commits.len(),
      commits,
    })
  }

  /// Get one commit with its change statistics and touched files.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_commit_details(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitDetail> {
    info!("Fetching commit {} in {}/{}", sha, owner, repo);

    let raw: RawCommit = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/commits/{sha}")))
      .await?;
    Ok(commit_detail(raw))
  }

  /// List branches with their head commits.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_branches(&self, owner: &str, repo: &str, limit: i64) -> Result<BranchList> {
    info!("Fetching branches for {}/{}", owner, repo);

    let raw: Vec<RawBranch> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/branches")).query(QueryParams::new().limit(limit)))
      .await?;

    let branches: Vec<BranchSummary> = raw
      .into_iter()
      .map(|b| BranchSummary {
        name: b.name,
        sha: short_sha(&b.commit.sha),
        full_sha: b.commit.sha,
        protected: b.protected,
      })
      .collect();

    Ok(BranchList {
      repository: format!("{owner}/{repo}"),
      branch_count: branches.len(),
      branches,
    })
  }
}

fn commit_summary(raw: RawCommit) -> CommitSummary {
  let author = raw.commit.author.unwrap_or_default();
  CommitSummary {
    sha: short_sha(&raw.sha),
    message: headline(&raw.commit.message, HEADLINE_CLIP),
    author: author.name,
    date: author.date,
    url: raw.html_url,
    full_sha: raw.sha,
  }
}

fn commit_detail(raw: RawCommit) -> CommitDetail {
  let author = raw.commit.author.unwrap_or_default();
  let committer = raw.commit.committer.unwrap_or_default();
  let stats = raw.stats.unwrap_or_default();
  let message = truncate(&raw.commit.message, PREVIEW_BUDGET);

  let files_changed = raw.files.len();
  let files = raw
    .files
    .into_iter()
    .take(COMMIT_FILES_SHOWN)
    .map(|f| CommitFileSummary {
      filename: f.filename,
      status: f.status,
      additions: f.additions,
      deletions: f.deletions,
      changes: f.changes,
    })
    .collect();

  CommitDetail {
    sha: short_sha(&raw.sha),
    full_sha: raw.sha,
    message: message.text,
    message_truncated: message.truncated,
    author: author.name,
    author_email: author.email,
    committer: committer.name,
    date: author.date,
    url: raw.html_url,
    stats: CommitChangeStats {
      additions: stats.additions,
      deletions: stats.deletions,
      total: stats.total,
    },
    files_changed,
    files,
    files_truncated: files_changed > COMMIT_FILES_SHOWN,
  }
}
