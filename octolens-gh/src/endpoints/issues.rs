//! # Issue Pipelines
//!
//! Issue listings, single issues, and issue comments. GitHub's issues
//! endpoint interleaves pull requests, so listings filter them out before
//! counting.

use tracing::{debug, info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::PREVIEW_BUDGET;
use crate::error::Result;
use crate::models::{RawComment, RawIssue, login_of};
use crate::params::QueryParams;
use crate::records::{CommentList, CommentSummary, IssueDetail, IssueList, IssueSummary};
use crate::text::truncate;

impl GitHubClient {
  /// List issues (pull requests excluded) filtered by state and labels.
  ///
  /// `labels` is GitHub's comma-separated label list; empty means no filter.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_issues(
    &self,
    owner: &str,
    repo: &str,
    state: &str,
    labels: &str,
    limit: i64,
  ) -> Result<IssueList> {
    info!("Fetching {} issues for {}/{}", state, owner, repo);

    let params = QueryParams::new()
      .optional("state", Some(state))
      .limit(limit)
      .optional("labels", Some(labels));
    let raw: Vec<RawIssue> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/issues")).query(params))
      .await?;

    let received = raw.len();
    let issues = retain_issues(raw);
    debug!("Kept {} of {} entries after removing pull requests", issues.len(), received);

    let issues: Vec<IssueSummary> = issues.into_iter().map(issue_summary).collect();
    Ok(IssueList {
      repository: format!("{owner}/{repo}"),
      state_filter: state.to_string(),
      issue_count: issues.len(),
      issues,
    })
  }

  /// Get one issue. Pull requests are reachable here too and are flagged.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_details(&self, owner: &str, repo: &str, issue_number: u64) -> Result<IssueDetail> {
    info!("Fetching issue #{} in {}/{}", issue_number, owner, repo);

    let raw: RawIssue = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/issues/{issue_number}")))
      .await?;

    let body = truncate(raw.body.as_deref().unwrap_or_default(), PREVIEW_BUDGET);
    Ok(IssueDetail {
      number: raw.number,
      author: login_of(raw.user.as_ref()),
      body: body.text,
      body_truncated: body.truncated,
      labels: raw.labels.into_iter().map(|l| l.name).collect(),
      assignees: raw.assignees.into_iter().map(|a| a.login).collect(),
      milestone: raw.milestone.map(|m| m.title).unwrap_or_default(),
      comments: raw.comments,
      created_at: raw.created_at,
      updated_at: raw.updated_at,
      closed_at: raw.closed_at.unwrap_or_default(),
      url: raw.html_url,
      is_pull_request: raw.pull_request.is_some(),
      title: raw.title,
      state: raw.state,
    })
  }

  /// List comments on an issue or pull request.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_comments(
    &self,
    owner: &str,
    repo: &str,
    issue_number: u64,
    limit: i64,
  ) -> Result<CommentList> {
    info!("Fetching comments on #{} in {}/{}", issue_number, owner, repo);

    let raw: Vec<RawComment> = self
      .fetch(
        ApiRequest::get(format!("repos/{owner}/{repo}/issues/{issue_number}/comments"))
          .query(QueryParams::new().limit(limit)),
      )
      .await?;

    let comments: Vec<CommentSummary> = raw
      .into_iter()
      .map(|c| {
        let body = truncate(c.body.as_deref().unwrap_or_default(), PREVIEW_BUDGET);
        CommentSummary {
          id: c.id,
          author: login_of(c.user.as_ref()),
          body: body.text,
          body_truncated: body.truncated,
          created_at: c.created_at,
          url: c.html_url,
        }
      })
      .collect();

    Ok(CommentList {
      repository: format!("{owner}/{repo}"),
      issue_number,
      comment_count: comments.len(),
      comments,
    })
  }
}

/// Drop pull requests from an issues page.
pub fn retain_issues(entries: Vec<RawIssue>) -> Vec<RawIssue> {
  entries.into_iter().filter(|e| !e.is_pull_request()).collect()
}

fn issue_summary(raw: RawIssue) -> IssueSummary {
  IssueSummary {
    number: raw.number,
    author: login_of(raw.user.as_ref()),
    created_at: raw.created_at,
    updated_at: raw.updated_at,
    comments: raw.comments,
    labels: raw.labels.into_iter().map(|l| l.name).collect(),
    url: raw.html_url,
    title: raw.title,
    state: raw.state,
  }
}

#[cfg(test)]
mod tests {
  use octolens_test_utils::{fixtures, mount_json};
  use serde_json::{Value, json};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::endpoints::tests::client_for;

  fn mixed_page() -> Value {
    json!([
        fixtures::issue(1, "Crash on start"),
        fixtures::pull_request_issue(2, "Fix crash"),
        fixtures::issue(3, "Docs typo"),
        fixtures::pull_request_issue(4, "Bump deps"),
        fixtures::issue(5, "Slow build"),
    ])
  }

  #[tokio::test]
  async fn test_get_repository_issues_filters_pull_requests() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/issues"))
      .and(query_param("state", "open"))
      .and(query_param("per_page", "10"))
      .respond_with(ResponseTemplate::new(200).set_body_json(mixed_page()))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let list = client.get_repository_issues("o", "r", "open", "", 10).await?;

    assert_eq!(list.issue_count, 3);
    assert_eq!(list.state_filter, "open");
    let numbers: Vec<u64> = list.issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, [1, 3, 5]);
    assert_eq!(list.issues[0].author, "reporter");
    assert_eq!(list.issues[0].labels, ["bug"]);

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "labels"));
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_issues_sends_labels() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/issues"))
      .and(query_param("labels", "bug,help wanted"))
      .and(query_param("state", "closed"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let list = client.get_repository_issues("o", "r", "closed", "bug,help wanted", 10).await?;
    assert_eq!(list.issue_count, 0);
    Ok(())
  }

  #[test]
  fn test_retain_issues_is_idempotent() {
    let page: Vec<RawIssue> = serde_json::from_value(mixed_page()).unwrap();

    let once = retain_issues(page);
    let once_numbers: Vec<u64> = once.iter().map(|i| i.number).collect();
    let twice = retain_issues(once);
    let twice_numbers: Vec<u64> = twice.iter().map(|i| i.number).collect();

    assert_eq!(once_numbers, twice_numbers);
    assert!(twice.iter().all(|i| !i.is_pull_request()));
  }

  #[tokio::test]
  async fn test_get_issue_details() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    let mut payload = fixtures::issue(1347, "Found a bug");
    payload["body"] = json!("x".repeat(750));
    payload["assignees"] = json!([fixtures::user("octocat")]);
    payload["milestone"] = json!({ "title": "v1.0" });
    mount_json(&mock_server, "/repos/o/r/issues/1347", payload).await;

    let client = client_for(&mock_server);
    let issue = client.get_issue_details("o", "r", 1347).await?;

    assert_eq!(issue.number, 1347);
    assert_eq!(issue.body.chars().count(), 500);
    assert!(issue.body_truncated);
    assert_eq!(issue.assignees, ["octocat"]);
    assert_eq!(issue.milestone, "v1.0");
    assert_eq!(issue.closed_at, "");
    assert!(!issue.is_pull_request);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_details_null_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    let mut payload = fixtures::pull_request_issue(9, "Refactor");
    payload["body"] = Value::Null;
    payload["user"] = Value::Null;
    mount_json(&mock_server, "/repos/o/r/issues/9", payload).await;

    let client = client_for(&mock_server);
    let issue = client.get_issue_details("o", "r", 9).await?;

    assert_eq!(issue.body, "");
    assert!(!issue.body_truncated);
    assert_eq!(issue.author, "");
    assert!(issue.is_pull_request);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_comments() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r/issues/1/comments",
      json!([
          { "id": 10, "user": fixtures::user("alice"), "body": "Me too", "created_at": "2024-01-03T00:00:00Z", "html_url": "https://github.com/o/r/issues/1#issuecomment-10" },
          { "id": 11, "user": fixtures::user("bob"), "body": null, "created_at": "2024-01-04T00:00:00Z", "html_url": "https://github.com/o/r/issues/1#issuecomment-11" }
      ]),
    )
    .await;

    let client = client_for(&mock_server);
    let list = client.get_issue_comments("o", "r", 1, 10).await?;

    assert_eq!(list.issue_number, 1);
    assert_eq!(list.comment_count, 2);
    assert_eq!(list.comments[0].author, "alice");
    assert_eq!(list.comments[1].body, "");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_issues_omits_empty_state_and_labels() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/repos/o/r/issues", mixed_page()).await;

    let client = client_for(&mock_server);
    let list = client.get_repository_issues("o", "r", "", "", 10).await?;
    assert_eq!(list.issue_count, 3);

    let requests = mock_server.received_requests().await.unwrap_or_default();
    let keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, ["per_page"]);
    Ok(())
  }
}
