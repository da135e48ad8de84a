//! # Pull Request Pipelines
//!
//! Pull request listings and single pull requests.

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::PREVIEW_BUDGET;
use crate::error::Result;
use crate::models::{RawPullRequest, login_of};
use crate::params::QueryParams;
use crate::records::{PullRequestDetail, PullRequestList, PullRequestSummary};
use crate::text::truncate;

impl GitHubClient {
  /// List pull requests in the given state (`open`, `closed`, or `all`).
  #[instrument(skip(self), level = "debug")]
  pub async fn get_pull_requests(&self, owner: &str, repo: &str, state: &str, limit: i64) -> Result<PullRequestList> {
    info!("Fetching {} pull requests for {}/{}", state, owner, repo);

    let params = QueryParams::new().optional("state", Some(state)).limit(limit);
    let raw: Vec<RawPullRequest> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/pulls")).query(params))
      .await?;

    let pull_requests: Vec<PullRequestSummary> = raw
      .into_iter()
      .map(|pr| PullRequestSummary {
        number: pr.number,
        author: login_of(pr.user.as_ref()),
        draft: pr.draft,
        head: pr.head.ref_name,
        base: pr.base.ref_name,
        created_at: pr.created_at,
        updated_at: pr.updated_at,
        merged_at: pr.merged_at.unwrap_or_default(),
        url: pr.html_url,
        title: pr.title,
        state: pr.state,
      })
      .collect();

    Ok(PullRequestList {
      repository: format!("{owner}/{repo}"),
      state_filter: state.to_string(),
      pull_request_count: pull_requests.len(),
      pull_requests,
    })
  }

  /// Get a specific pull request
  #[instrument(skip(self), level = "debug")]
  pub async fn get_pull_request_details(&self, owner: &str, repo: &str, pr_number: u64) -> Result<PullRequestDetail> {
    info!("Fetching pull request #{} in {}/{}", pr_number, owner, repo);

    let pr: RawPullRequest = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/pulls/{pr_number}")))
      .await?;

    let body = truncate(pr.body.as_deref().unwrap_or_default(), PREVIEW_BUDGET);
    Ok(PullRequestDetail {
      number: pr.number,
      author: login_of(pr.user.as_ref()),
      body: body.text,
      body_truncated: body.truncated,
      draft: pr.draft,
      merged: pr.merged,
      mergeable: pr.mergeable,
      head: pr.head.ref_name,
      base: pr.base.ref_name,
      commits: pr.commits,
      additions: pr.additions,
      deletions: pr.deletions,
      changed_files: pr.changed_files,
      comments: pr.comments,
      review_comments: pr.review_comments,
      created_at: pr.created_at,
      updated_at: pr.updated_at,
      merged_at: pr.merged_at.unwrap_or_default(),
      closed_at: pr.closed_at.unwrap_or_default(),
      url: pr.html_url,
      title: pr.title,
      state: pr.state,
    })
  }
}
