//! Stable output records returned by the pipelines.
//!
//! Field names are a compatibility contract with callers: fields may be
//! added but never renamed or removed.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Repository analysis
// ---------------------------------------------------------------------------

/// Response for `get_repository_info`.
#[derive(Debug, Serialize)]
pub struct RepositoryInfo {
  pub name: String,
  pub description: String,
  pub url: String,
  pub created_at: String,
  pub updated_at: String,
  pub language: String,
  pub statistics: RepositoryStatistics,
  pub features: RepositoryFeatures,
  pub license: String,
  pub default_branch: String,
  pub topics: Vec<String>,
  pub is_fork: bool,
  pub is_archived: bool,
  pub visibility: String,
}

#[derive(Debug, Serialize)]
pub struct RepositoryStatistics {
  pub stars: u64,
  pub watchers: u64,
  pub forks: u64,
  pub open_issues: u64,
  pub size_kb: u64,
}

#[derive(Debug, Serialize)]
pub struct RepositoryFeatures {
  pub has_wiki: bool,
  pub has_pages: bool,
  pub has_issues: bool,
  pub has_projects: bool,
  pub has_downloads: bool,
}

/// Response for `get_repository_languages`.
#[derive(Debug, Serialize)]
pub struct LanguageBreakdown {
  pub repository: String,
  pub total_bytes: u64,
  pub language_count: usize,
  /// Ordered by descending byte count.
  pub languages: Vec<LanguageShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
  pub language: String,
  pub bytes: u64,
  pub percentage: f64,
}

/// Response for `get_repository_contributors`.
#[derive(Debug, Serialize)]
pub struct ContributorList {
  pub repository: String,
  pub contributor_count: usize,
  pub total_contributions: u64,
  pub contributors: Vec<ContributorSummary>,
}

#[derive(Debug, Serialize)]
pub struct ContributorSummary {
  pub username: String,
  pub contributions: u64,
  pub profile_url: String,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Response for `get_repository_traffic`.
#[derive(Debug, Serialize)]
pub struct TrafficSummary {
  pub repository: String,
  pub views: TrafficTotals,
  pub daily: Vec<TrafficDay>,
}

#[derive(Debug, Serialize)]
pub struct TrafficTotals {
  pub count: u64,
  pub uniques: u64,
}

#[derive(Debug, Serialize)]
pub struct TrafficDay {
  pub timestamp: String,
  pub count: u64,
  pub uniques: u64,
}

/// Response for `get_repository_stats`.
#[derive(Debug, Serialize)]
pub struct RepositoryStatsReport {
  pub repository: String,
  pub stars: u64,
  pub forks: u64,
  pub watchers: u64,
  pub open_issues: u64,
  pub size_kb: u64,
  pub commit_activity: CommitActivity,
  pub code_frequency: CodeFrequency,
  /// True when a secondary statistic could not be fetched and was zeroed.
  pub partial: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CommitActivity {
  pub total_commits_last_year: u64,
  pub last_4_weeks: u64,
  pub average_per_week: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CodeFrequency {
  pub total_additions: u64,
  pub total_deletions: u64,
  pub weeks_tracked: usize,
}

// ---------------------------------------------------------------------------
// Commits & history
// ---------------------------------------------------------------------------

/// Response for `get_repository_commits`.
#[derive(Debug, Serialize)]
pub struct CommitList {
  pub repository: String,
  pub branch: String,
  pub commit_count: usize,
  pub commits: Vec<CommitSummary>,
}

#[derive(Debug, Serialize)]
pub struct CommitSummary {
  pub sha: String,
  pub full_sha: String,
  pub message: String,
  pub author: String,
  pub date: String,
  pub url: String,
}

/// Response for `get_commit_details`.
#[derive(Debug, Serialize)]
pub struct CommitDetail {
  pub sha: String,
  pub full_sha: String,
  pub message: String,
  pub message_truncated: bool,
  pub author: String,
  pub author_email: String,
  pub committer: String,
  pub date: String,
  pub url: String,
  pub stats: CommitChangeStats,
  pub files_changed: usize,
  pub files: Vec<CommitFileSummary>,
  pub files_truncated: bool,
}

#[derive(Debug, Serialize)]
pub struct CommitChangeStats {
  pub additions: u64,
  pub deletions: u64,
  pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct CommitFileSummary {
  pub filename: String,
  pub status: String,
  pub additions: u64,
  pub deletions: u64,
  pub changes: u64,
}

/// Response for `list_branches`.
#[derive(Debug, Serialize)]
pub struct BranchList {
  pub repository: String,
  pub branch_count: usize,
  pub branches: Vec<BranchSummary>,
}

#[derive(Debug, Serialize)]
pub struct BranchSummary {
  pub name: String,
  pub sha: String,
  pub full_sha: String,
  pub protected: bool,
}

// ---------------------------------------------------------------------------
// Issues & pull requests
// ---------------------------------------------------------------------------

/// Response for `get_repository_issues`.
#[derive(Debug, Serialize)]
pub struct IssueList {
  pub repository: String,
  pub state_filter: String,
  pub issue_count: usize,
  pub issues: Vec<IssueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub author: String,
  pub created_at: String,
  pub updated_at: String,
  pub comments: u64,
  pub labels: Vec<String>,
  pub url: String,
}

/// Response for `get_issue_details`.
#[derive(Debug, Serialize)]
pub struct IssueDetail {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub author: String,
  pub body: String,
  pub body_truncated: bool,
  pub labels: Vec<String>,
  pub assignees: Vec<String>,
  pub milestone: String,
  pub comments: u64,
  pub created_at: String,
  pub updated_at: String,
  pub closed_at: String,
  pub url: String,
  pub is_pull_request: bool,
}

/// Response for `get_issue_comments`.
#[derive(Debug, Serialize)]
pub struct CommentList {
  pub repository: String,
  pub issue_number: u64,
  pub comment_count: usize,
  pub comments: Vec<CommentSummary>,
}

#[derive(Debug, Serialize)]
pub struct CommentSummary {
  pub id: u64,
  pub author: String,
  pub body: String,
  pub body_truncated: bool,
  pub created_at: String,
  pub url: String,
}

/// Response for `get_pull_requests`.
#[derive(Debug, Serialize)]
pub struct PullRequestList {
  pub repository: String,
  pub state_filter: String,
  pub pull_request_count: usize,
  pub pull_requests: Vec<PullRequestSummary>,
}

#[derive(Debug, Serialize)]
pub struct PullRequestSummary {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub author: String,
  pub draft: bool,
  pub head: String,
  pub base: String,
  pub created_at: String,
  pub updated_at: String,
  pub merged_at: String,
  pub url: String,
}

/// Response for `get_pull_request_details`.
#[derive(Debug, Serialize)]
pub struct PullRequestDetail {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub author: String,
  pub body: String,
  pub body_truncated: bool,
  pub draft: bool,
  pub merged: bool,
  /// `null` while GitHub is still computing mergeability.
  pub mergeable: Option<bool>,
  pub head: String,
  pub base: String,
  pub commits: u64,
  pub additions: u64,
  pub deletions: u64,
  pub changed_files: u64,
  pub comments: u64,
  pub review_comments: u64,
  pub created_at: String,
  pub updated_at: String,
  pub merged_at: String,
  pub closed_at: String,
  pub url: String,
}

// ---------------------------------------------------------------------------
// Files & content
// ---------------------------------------------------------------------------

/// Response for `get_file_content`.
#[derive(Debug, Serialize)]
pub struct FileContent {
  pub repository: String,
  pub path: String,
  pub name: String,
  pub size: u64,
  #[serde(rename = "type")]
  pub kind: String,
  pub url: String,
  pub content: String,
  pub truncated: bool,
}

/// Response for `list_directory`.
#[derive(Debug, Serialize)]
pub struct DirectoryListing {
  pub repository: String,
  pub path: String,
  pub entry_count: usize,
  pub entries: Vec<DirectoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct DirectoryEntry {
  pub name: String,
  pub path: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub size: u64,
  pub url: String,
}

/// Response for `get_readme`.
#[derive(Debug, Serialize)]
pub struct Readme {
  pub repository: String,
  pub name: String,
  pub path: String,
  pub size: u64,
  pub url: String,
  pub content: String,
  pub truncated: bool,
}

// ---------------------------------------------------------------------------
// Search & discovery
// ---------------------------------------------------------------------------

/// Response for `search_repositories`.
#[derive(Debug, Serialize)]
pub struct RepositorySearch {
  pub total_count: u64,
  pub showing: usize,
  pub repositories: Vec<RepositorySearchHit>,
}

#[derive(Debug, Serialize)]
pub struct RepositorySearchHit {
  pub name: String,
  pub description: String,
  pub url: String,
  pub stars: u64,
  pub forks: u64,
  pub language: String,
  pub updated_at: String,
  pub topics: Vec<String>,
}

/// Response for `search_code`.
#[derive(Debug, Serialize)]
pub struct CodeSearch {
  pub query: String,
  pub total_count: u64,
  pub showing: usize,
  pub results: Vec<CodeSearchHit>,
}

#[derive(Debug, Serialize)]
pub struct CodeSearchHit {
  pub name: String,
  pub path: String,
  pub repository: String,
  pub url: String,
  pub score: f64,
}

/// Response for `search_issues`.
#[derive(Debug, Serialize)]
pub struct IssueSearch {
  pub query: String,
  pub total_count: u64,
  pub showing: usize,
  pub results: Vec<IssueSearchHit>,
}

#[derive(Debug, Serialize)]
pub struct IssueSearchHit {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub repository: String,
  pub author: String,
  pub is_pull_request: bool,
  pub comments: u64,
  pub created_at: String,
  pub url: String,
}

/// Response for `search_users`.
#[derive(Debug, Serialize)]
pub struct UserSearch {
  pub total_count: u64,
  pub showing: usize,
  pub users: Vec<UserSearchHit>,
}

#[derive(Debug, Serialize)]
pub struct UserSearchHit {
  pub username: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub profile_url: String,
  pub avatar_url: String,
  pub score: f64,
}

/// Response for `search_topics`.
#[derive(Debug, Serialize)]
pub struct TopicSearch {
  pub total_count: u64,
  pub showing: usize,
  pub topics: Vec<TopicSearchHit>,
}

#[derive(Debug, Serialize)]
pub struct TopicSearchHit {
  pub name: String,
  pub display_name: String,
  pub short_description: String,
  pub featured: bool,
  pub curated: bool,
  pub score: f64,
}

/// Response for `get_trending_repositories`.
#[derive(Debug, Serialize)]
pub struct TrendingRepositories {
  pub period: String,
  pub language: String,
  pub since_date: String,
  pub repositories: Vec<TrendingRepository>,
}

#[derive(Debug, Serialize)]
pub struct TrendingRepository {
  pub name: String,
  pub description: String,
  pub url: String,
  pub stars: u64,
  pub forks: u64,
  pub language: String,
}

/// Response for `get_trending_developers`.
#[derive(Debug, Serialize)]
pub struct TrendingDevelopers {
  pub period: String,
  pub language: String,
  pub developer_count: usize,
  pub developers: Vec<TrendingDeveloper>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingDeveloper {
  pub username: String,
  pub profile_url: String,
  pub avatar_url: String,
  pub total_stars: u64,
  pub repository_count: usize,
  /// At most three names, in search-rank order.
  pub top_repositories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Users & organizations
// ---------------------------------------------------------------------------

/// Response for `get_user_profile`.
#[derive(Debug, Serialize)]
pub struct UserProfile {
  pub username: String,
  pub name: String,
  pub bio: String,
  pub company: String,
  pub location: String,
  pub email: String,
  pub blog: String,
  pub twitter: String,
  pub profile_url: String,
  pub avatar_url: String,
  pub statistics: UserStatistics,
  pub account: UserAccount,
}

#[derive(Debug, Serialize)]
pub struct UserStatistics {
  pub public_repos: u64,
  pub public_gists: u64,
  pub followers: u64,
  pub following: u64,
}

#[derive(Debug, Serialize)]
pub struct UserAccount {
  #[serde(rename = "type")]
  pub kind: String,
  pub created_at: String,
  pub updated_at: String,
}

/// Response for `get_user_repositories`.
#[derive(Debug, Serialize)]
pub struct UserRepositories {
  pub username: String,
  pub repository_count: usize,
  pub repositories: Vec<OwnedRepository>,
}

/// Response for `get_organization_repositories`.
#[derive(Debug, Serialize)]
pub struct OrganizationRepositories {
  pub organization: String,
  pub repository_count: usize,
  pub repositories: Vec<OwnedRepository>,
}

#[derive(Debug, Serialize)]
pub struct OwnedRepository {
  pub name: String,
  pub description: String,
  pub language: String,
  pub stars: u64,
  pub forks: u64,
  pub is_fork: bool,
  pub updated_at: String,
  pub url: String,
}

/// Response for `get_organization_info`.
#[derive(Debug, Serialize)]
pub struct OrganizationInfo {
  pub login: String,
  pub name: String,
  pub description: String,
  pub blog: String,
  pub location: String,
  pub email: String,
  pub profile_url: String,
  pub avatar_url: String,
  pub public_repos: u64,
  pub followers: u64,
  pub created_at: String,
}

// ---------------------------------------------------------------------------
// Releases & packages
// ---------------------------------------------------------------------------

/// Response for `get_repository_releases`.
#[derive(Debug, Serialize)]
pub struct ReleaseList {
  pub repository: String,
  pub release_count: usize,
  pub releases: Vec<ReleaseSummary>,
}

#[derive(Debug, Serialize)]
pub struct ReleaseSummary {
  pub tag_name: String,
  pub name: String,
  pub author: String,
  pub draft: bool,
  pub prerelease: bool,
  pub created_at: String,
  pub published_at: String,
  pub body: String,
  pub body_truncated: bool,
  pub asset_count: usize,
  pub download_count: u64,
  pub url: String,
}

/// Response for `get_latest_release`.
#[derive(Debug, Serialize)]
pub struct ReleaseDetail {
  #[serde(flatten)]
  pub release: ReleaseSummary,
  pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Serialize)]
pub struct ReleaseAsset {
  pub name: String,
  pub size: u64,
  pub download_count: u64,
  pub content_type: String,
  pub url: String,
}

/// Response for `get_repository_tags`.
#[derive(Debug, Serialize)]
pub struct TagList {
  pub repository: String,
  pub tag_count: usize,
  pub tags: Vec<TagSummary>,
}

#[derive(Debug, Serialize)]
pub struct TagSummary {
  pub name: String,
  pub sha: String,
  pub full_sha: String,
}

// ---------------------------------------------------------------------------
// Workflows & actions
// ---------------------------------------------------------------------------

/// Response for `get_workflows`.
#[derive(Debug, Serialize)]
pub struct WorkflowList {
  pub repository: String,
  pub total_count: u64,
  pub workflows: Vec<WorkflowSummary>,
}

#[derive(Debug, Serialize)]
pub struct WorkflowSummary {
  pub id: u64,
  pub name: String,
  pub path: String,
  pub state: String,
  pub created_at: String,
  pub updated_at: String,
  pub url: String,
}

/// Response for `get_workflow_runs`.
#[derive(Debug, Serialize)]
pub struct WorkflowRunList {
  pub repository: String,
  pub total_count: u64,
  pub showing: usize,
  pub runs: Vec<WorkflowRunSummary>,
}

#[derive(Debug, Serialize)]
pub struct WorkflowRunSummary {
  pub id: u64,
  pub name: String,
  pub run_number: u64,
  pub event: String,
  pub status: String,
  pub conclusion: String,
  pub branch: String,
  pub sha: String,
  pub actor: String,
  pub created_at: String,
  pub updated_at: String,
  pub url: String,
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

/// Response for `get_rate_limit`.
#[derive(Debug, Serialize)]
pub struct RateLimitStatus {
  pub authenticated: bool,
  pub resources: RateLimitResources,
}

#[derive(Debug, Serialize)]
pub struct RateLimitResources {
  pub core: RateLimitBucket,
  pub search: RateLimitBucket,
  pub graphql: RateLimitBucket,
  pub code_search: RateLimitBucket,
}

#[derive(Debug, Default, Serialize)]
pub struct RateLimitBucket {
  pub limit: u64,
  pub remaining: u64,
  pub used: u64,
  pub reset: i64,
  /// RFC 3339 rendering of `reset`, empty when unknown.
  pub reset_at: String,
}
