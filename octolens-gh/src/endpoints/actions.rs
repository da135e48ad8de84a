//! GitHub Actions workflow pipelines.

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::error::Result;
use crate::models::{RawWorkflowList, RawWorkflowRuns, login_of};
use crate::params::QueryParams;
use crate::records::{WorkflowList, WorkflowRunList, WorkflowRunSummary, WorkflowSummary};
use crate::text::short_sha;

impl GitHubClient {
  /// List the workflows defined in a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn get_workflows(&self, owner: &str, repo: &str) -> Result<WorkflowList> {
    info!("Fetching workflows for {}/{}", owner, repo);

    let raw: RawWorkflowList = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/actions/workflows")))
      .await?;

    Ok(WorkflowList {
      repository: format!("{owner}/{repo}"),
      total_count: raw.total_count,
      workflows: raw
        .workflows
        .into_iter()
        .map(|w| WorkflowSummary {
          id: w.id,
          name: w.name,
          path: w.path,
          state: w.state,
          created_at: w.created_at,
          updated_at: w.updated_at,
          url: w.html_url,
        })
        .collect(),
    })
  }

  /// List recent workflow runs, optionally filtered by branch and status.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_workflow_runs(
    &self,
    owner: &str,
    repo: &str,
    branch: &str,
    status: &str,
    limit: i64,
  ) -> Result<WorkflowRunList> {
    info!("Fetching workflow runs for {}/{}", owner, repo);

    let params = QueryParams::new()
      .limit(limit)
      .optional("branch", Some(branch))
      .optional("status", Some(status));
    let raw: RawWorkflowRuns = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/actions/runs")).query(params))
      .await?;

    let runs: Vec<WorkflowRunSummary> = raw
      .workflow_runs
      .into_iter()
      .map(|run| WorkflowRunSummary {
        id: run.id,
        name: run.name.unwrap_or_default(),
        run_number: run.run_number,
        event: run.event,
        status: run.status.unwrap_or_default(),
        conclusion: run.conclusion.unwrap_or_default(),
        branch: run.head_branch.unwrap_or_default(),
        sha: short_sha(&run.head_sha),
        actor: login_of(run.actor.as_ref()),
        created_at: run.created_at,
        updated_at: run.updated_at,
        url: run.html_url,
      })
      .collect();

    Ok(WorkflowRunList {
      repository: format!("{owner}/{repo}"),
      total_count: raw.total_count,
      showing: runs.len(),
      runs,
    })
  }
}

#[cfg(test)]
mod tests {
  use octolens_test_utils::{fixtures, mount_json};
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::endpoints::tests::client_for;

  #[tokio::test]
  async fn test_get_workflows() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r/actions/workflows",
      json!({
          "total_count": 1,
          "workflows": [{
              "id": 161335,
              "name": "CI",
              "path": ".github/workflows/ci.yml",
              "state": "active",
              "created_at": "2020-01-08T23:48:37Z",
              "updated_at": "2020-01-08T23:50:21Z",
              "html_url": "https://github.com/o/r/blob/main/.github/workflows/ci.yml"
          }]
      }),
    )
    .await;

    let client = client_for(&mock_server);
    let list = client.get_workflows("o", "r").await?;

    assert_eq!(list.total_count, 1);
    assert_eq!(list.workflows[0].name, "CI");
    assert_eq!(list.workflows[0].state, "active");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_workflow_runs_filters() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/actions/runs"))
      .and(query_param("branch", "main"))
      .and(query_param("status", "completed"))
      .and(query_param("per_page", "5"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_count": 250,
          "workflow_runs": [{
              "id": 30433642,
              "name": "Build",
              "run_number": 562,
              "event": "push",
              "status": "completed",
              "conclusion": null,
              "head_branch": "main",
              "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
              "actor": fixtures::user("octocat"),
              "created_at": "2020-01-22T19:33:08Z",
              "updated_at": "2020-01-22T19:33:08Z",
              "html_url": "https://github.com/o/r/actions/runs/30433642"
          }]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let runs = client.get_workflow_runs("o", "r", "main", "completed", 5).await?;

    assert_eq!(runs.total_count, 250);
    assert_eq!(runs.showing, 1);
    let run = &runs.runs[0];
    assert_eq!(run.sha, "acb5820");
    assert_eq!(run.conclusion, "");
    assert_eq!(run.actor, "octocat");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_workflow_runs_omits_empty_filters() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r/actions/runs",
      json!({ "total_count": 0, "workflow_runs": [] }),
    )
    .await;

    let client = client_for(&mock_server);
    let runs = client.get_workflow_runs("o", "r", "", "", 10).await?;
    assert_eq!(runs.showing, 0);

    let requests = mock_server.received_requests().await.unwrap_or_default();
    let keys: Vec<String> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, ["per_page"]);
    Ok(())
  }
}
