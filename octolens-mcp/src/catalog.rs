//! Capability directory: every exposed tool grouped by category, plus rate
//! limit and authentication guidance. Returned by the `server_info` tool.

use octolens_gh::GatewayConfig;
use octolens_gh::consts::TOKEN_ENV_VAR;
use serde::Serialize;

pub const SERVER_NAME: &str = "octolens";

pub const SERVER_DESCRIPTION: &str =
  "Analyze GitHub repositories, search code, view issues and pull requests, and inspect releases and workflows";

/// Tool names by category, in presentation order
pub const CATEGORIES: &[(&str, &[&str])] = &[
  (
    "Repository Analysis",
    &[
      "get_repository_info",
      "get_repository_languages",
      "get_repository_contributors",
      "get_repository_stats",
      "get_repository_traffic",
    ],
  ),
  (
    "Commits & History",
    &["get_repository_commits", "get_commit_details", "list_branches"],
  ),
  (
    "Issues & PRs",
    &[
      "get_repository_issues",
      "get_issue_details",
      "get_issue_comments",
      "get_pull_requests",
      "get_pull_request_details",
    ],
  ),
  ("Files & Content", &["get_file_content", "list_directory", "get_readme"]),
  (
    "Search & Discovery",
    &[
      "search_repositories",
      "search_code",
      "search_issues",
      "search_users",
      "search_topics",
      "get_trending_repositories",
      "get_trending_developers",
    ],
  ),
  (
    "Users & Organizations",
    &[
      "get_user_profile",
      "get_user_repositories",
      "get_organization_info",
      "get_organization_repositories",
    ],
  ),
  (
    "Releases & Packages",
    &["get_repository_releases", "get_latest_release", "get_repository_tags"],
  ),
  ("Workflows & Actions", &["get_workflows", "get_workflow_runs"]),
  ("Utilities", &["get_rate_limit", "server_info"]),
];

#[derive(Debug, Serialize)]
pub struct CapabilityDirectory {
  pub server_name: &'static str,
  pub version: &'static str,
  pub description: &'static str,
  pub api_provider: &'static str,
  pub transport: &'static str,
  pub categories: Vec<ToolCategory>,
  pub tool_count: usize,
  pub rate_limits: RateLimitGuidance,
  pub authentication: AuthenticationGuidance,
}

#[derive(Debug, Serialize)]
pub struct ToolCategory {
  pub name: &'static str,
  pub tools: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RateLimitGuidance {
  pub without_token: &'static str,
  pub with_token: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AuthenticationGuidance {
  pub required: bool,
  pub recommended: bool,
  pub env_var: &'static str,
  pub get_token: &'static str,
  /// Whether this server instance was started with a token
  pub configured: bool,
}

/// Every tool name, flattened in category order
pub fn tool_names() -> impl Iterator<Item = &'static str> {
  CATEGORIES.iter().flat_map(|(_, tools)| tools.iter().copied())
}

pub fn capability_directory(config: &GatewayConfig) -> CapabilityDirectory {
  CapabilityDirectory {
    server_name: SERVER_NAME,
    version: env!("CARGO_PKG_VERSION"),
    description: SERVER_DESCRIPTION,
    api_provider: "GitHub REST API",
    transport: "stdio",
    categories: CATEGORIES
      .iter()
      .map(|&(name, tools)| ToolCategory {
        name,
        tools: tools.to_vec(),
      })
      .collect(),
    tool_count: tool_names().count(),
    rate_limits: RateLimitGuidance {
      without_token: "60 requests per hour",
      with_token: "5000 requests per hour (recommended)",
    },
    authentication: AuthenticationGuidance {
      required: false,
      recommended: true,
      env_var: TOKEN_ENV_VAR,
      get_token: "https://github.com/settings/tokens",
      configured: config.is_authenticated(),
    },
  }
}
