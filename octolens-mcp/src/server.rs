//! MCP server implementation with all tool handlers.
//!
//! Every handler forwards its parameters to one gateway pipeline and
//! converts the outcome with [`ToolResponse::from_result`]. Gateway failures
//! come back as tool results with `is_error` set, never as protocol errors.

use octolens_gh::GitHubClient;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use crate::catalog;
use crate::tools::commits::{BranchesParams, CommitParams, CommitsParams};
use crate::tools::files::{DirectoryParams, FileParams};
use crate::tools::issues::{IssueCommentsParams, IssueParams, IssuesParams, PullRequestParams, PullRequestsParams};
use crate::tools::repository::{RepoListParams, RepoParams};
use crate::tools::search::{
  SearchCodeParams, SearchIssuesParams, SearchParams, SearchRepositoriesParams, TrendingDevelopersParams,
  TrendingRepositoriesParams,
};
use crate::tools::users::{OrganizationParams, OrganizationRepositoriesParams, UserParams, UserRepositoriesParams};
use crate::tools::workflows::WorkflowRunsParams;
use crate::types::ToolResponse;

#[derive(Clone)]
pub struct OctolensMcpServer {
  github: GitHubClient,
  tool_router: ToolRouter<Self>,
}

#[tool_router]
impl OctolensMcpServer {
  pub fn new(github: GitHubClient) -> Self {
    Self {
      github,
      tool_router: Self::tool_router(),
    }
  }

  // =========================================================================
  // Repository analysis
  // =========================================================================

  #[tool(
    description = "Get repository metadata: description, statistics, features, license, topics, and default branch",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_info(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_repository_info(&p.owner, &p.repo).await).into_result()
  }

  #[tool(
    description = "Get the programming languages of a repository with byte counts and percentages",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_languages(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_repository_languages(&p.owner, &p.repo).await).into_result()
  }

  #[tool(
    description = "Get the top contributors of a repository by commit count",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_contributors(&self, params: Parameters<RepoListParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_repository_contributors(&p.owner, &p.repo, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get repository statistics combined with commit activity and code frequency over the last year",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_stats(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_repository_stats(&p.owner, &p.repo).await).into_result()
  }

  #[tool(
    description = "Get page views for the last 14 days. Requires push access to the repository.",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_traffic(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_repository_traffic(&p.owner, &p.repo).await).into_result()
  }

  // =========================================================================
  // Commits & history
  // =========================================================================

  #[tool(
    description = "List recent commits of a repository, optionally on a specific branch",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_commits(&self, params: Parameters<CommitsParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_repository_commits(&p.owner, &p.repo, &p.branch, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get a commit with its message, change statistics, and changed files",
    annotations(read_only_hint = true, idempotent_hint = true)
  )]
  async fn get_commit_details(&self, params: Parameters<CommitParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_commit_details(&p.owner, &p.repo, &p.sha).await).into_result()
  }

  #[tool(
    description = "List the branches of a repository with their head commits and protection status",
    annotations(read_only_hint = true)
  )]
  async fn list_branches(&self, params: Parameters<BranchesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.list_branches(&p.owner, &p.repo, p.limit).await).into_result()
  }

  // =========================================================================
  // Issues & pull requests
  // =========================================================================

  #[tool(
    description = "List issues of a repository (pull requests excluded), filtered by state and labels",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_issues(&self, params: Parameters<IssuesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_repository_issues(&p.owner, &p.repo, &p.state, &p.labels, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get an issue with its body, labels, assignees, and milestone",
    annotations(read_only_hint = true)
  )]
  async fn get_issue_details(&self, params: Parameters<IssueParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_issue_details(&p.owner, &p.repo, p.issue_number)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "List comments on an issue or pull request",
    annotations(read_only_hint = true)
  )]
  async fn get_issue_comments(&self, params: Parameters<IssueCommentsParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_issue_comments(&p.owner, &p.repo, p.issue_number, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "List pull requests of a repository. Defaults to open pull requests.",
    annotations(read_only_hint = true)
  )]
  async fn get_pull_requests(&self, params: Parameters<PullRequestsParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_pull_requests(&p.owner, &p.repo, &p.state, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get a pull request with its branches, merge state, and change statistics",
    annotations(read_only_hint = true)
  )]
  async fn get_pull_request_details(&self, params: Parameters<PullRequestParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_pull_request_details(&p.owner, &p.repo, p.pr_number)
        .await,
    )
    .into_result()
  }

  // =========================================================================
  // Files & content
  // =========================================================================

  #[tool(
    description = "Get the decoded text of a file, truncated to 5000 characters",
    annotations(read_only_hint = true)
  )]
  async fn get_file_content(&self, params: Parameters<FileParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_file_content(&p.owner, &p.repo, &p.path, &p.branch)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "List the files and directories at a path. An empty path lists the repository root.",
    annotations(read_only_hint = true)
  )]
  async fn list_directory(&self, params: Parameters<DirectoryParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .list_directory(&p.owner, &p.repo, &p.path, &p.branch)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get the decoded README of a repository, truncated to 10000 characters",
    annotations(read_only_hint = true)
  )]
  async fn get_readme(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_readme(&p.owner, &p.repo).await).into_result()
  }

  // =========================================================================
  // Search & discovery
  // =========================================================================

  #[tool(
    description = "Search repositories by keywords, optionally filtered by language",
    annotations(read_only_hint = true)
  )]
  async fn search_repositories(&self, params: Parameters<SearchRepositoriesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .search_repositories(&p.query, &p.sort, &p.language, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Search code across GitHub, optionally scoped to an owner or repository",
    annotations(read_only_hint = true)
  )]
  async fn search_code(&self, params: Parameters<SearchCodeParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .search_code(&p.query, &p.owner, &p.repo, &p.language, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Search issues and pull requests, optionally scoped to an owner or repository",
    annotations(read_only_hint = true)
  )]
  async fn search_issues(&self, params: Parameters<SearchIssuesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .search_issues(&p.query, &p.owner, &p.repo, &p.state, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(description = "Search users and organizations", annotations(read_only_hint = true))]
  async fn search_users(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.search_users(&p.query, p.limit).await).into_result()
  }

  #[tool(description = "Search repository topics", annotations(read_only_hint = true))]
  async fn search_topics(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.search_topics(&p.query, p.limit).await).into_result()
  }

  #[tool(
    description = "Get recently created repositories ranked by stars for a daily, weekly, or monthly window",
    annotations(read_only_hint = true)
  )]
  async fn get_trending_repositories(
    &self,
    params: Parameters<TrendingRepositoriesParams>,
  ) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_trending_repositories(&p.language, &p.since, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get developers whose recently created repositories collected the most stars",
    annotations(read_only_hint = true)
  )]
  async fn get_trending_developers(
    &self,
    params: Parameters<TrendingDevelopersParams>,
  ) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_trending_developers(&p.language, &p.since, p.limit)
        .await,
    )
    .into_result()
  }

  // =========================================================================
  // Users & organizations
  // =========================================================================

  #[tool(
    description = "Get a user's public profile and statistics",
    annotations(read_only_hint = true)
  )]
  async fn get_user_profile(&self, params: Parameters<UserParams>) -> Result<CallToolResult, McpError> {
    ToolResponse::from_result(self.github.get_user_profile(&params.0.username).await).into_result()
  }

  #[tool(description = "List a user's public repositories", annotations(read_only_hint = true))]
  async fn get_user_repositories(&self, params: Parameters<UserRepositoriesParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_user_repositories(&p.username, &p.sort, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get an organization's public profile",
    annotations(read_only_hint = true)
  )]
  async fn get_organization_info(&self, params: Parameters<OrganizationParams>) -> Result<CallToolResult, McpError> {
    ToolResponse::from_result(self.github.get_organization_info(&params.0.org).await).into_result()
  }

  #[tool(
    description = "List an organization's public repositories",
    annotations(read_only_hint = true)
  )]
  async fn get_organization_repositories(
    &self,
    params: Parameters<OrganizationRepositoriesParams>,
  ) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_organization_repositories(&p.org, &p.sort, p.limit)
        .await,
    )
    .into_result()
  }

  // =========================================================================
  // Releases & packages
  // =========================================================================

  #[tool(
    description = "List releases of a repository, newest first",
    annotations(read_only_hint = true)
  )]
  async fn get_repository_releases(&self, params: Parameters<RepoListParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_repository_releases(&p.owner, &p.repo, p.limit)
        .await,
    )
    .into_result()
  }

  #[tool(
    description = "Get the latest published release of a repository with its assets",
    annotations(read_only_hint = true)
  )]
  async fn get_latest_release(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_latest_release(&p.owner, &p.repo).await).into_result()
  }

  #[tool(description = "List tags of a repository", annotations(read_only_hint = true))]
  async fn get_repository_tags(&self, params: Parameters<RepoListParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_repository_tags(&p.owner, &p.repo, p.limit).await).into_result()
  }

  // =========================================================================
  // Workflows & actions
  // =========================================================================

  #[tool(
    description = "List the GitHub Actions workflows of a repository",
    annotations(read_only_hint = true)
  )]
  async fn get_workflows(&self, params: Parameters<RepoParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(self.github.get_workflows(&p.owner, &p.repo).await).into_result()
  }

  #[tool(
    description = "List recent GitHub Actions runs, optionally filtered by branch and status",
    annotations(read_only_hint = true)
  )]
  async fn get_workflow_runs(&self, params: Parameters<WorkflowRunsParams>) -> Result<CallToolResult, McpError> {
    let p = params.0;
    ToolResponse::from_result(
      self
        .github
        .get_workflow_runs(&p.owner, &p.repo, &p.branch, &p.status, p.limit)
        .await,
    )
    .into_result()
  }

  // =========================================================================
  // Utilities
  // =========================================================================

  #[tool(
    description = "Get the remaining GitHub API quota for core, search, GraphQL, and code search",
    annotations(read_only_hint = true)
  )]
  async fn get_rate_limit(&self) -> Result<CallToolResult, McpError> {
    ToolResponse::from_result(self.github.get_rate_limit().await).into_result()
  }

  #[tool(
    description = "Describe this server: available tools by category, rate limits, and authentication",
    annotations(read_only_hint = true, idempotent_hint = true)
  )]
  async fn server_info(&self) -> Result<CallToolResult, McpError> {
    ToolResponse::Ok(catalog::capability_directory(self.github.config())).into_result()
  }
}

#[tool_handler]
impl ServerHandler for OctolensMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "octolens MCP server. Provides read-only access to GitHub repositories, commits, issues, \
         pull requests, files, search, users, releases, and workflows. Call server_info for the \
         full tool directory."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }
}
