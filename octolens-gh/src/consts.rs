//! Constants for the octolens-gh gateway

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("octolens/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github+json";

/// Accept header value for the topic search preview
pub const ACCEPT_TOPICS_PREVIEW: &str = "application/vnd.github.mercy-preview+json";

/// Header carrying the pinned REST API version
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// Pinned REST API version
pub const API_VERSION: &str = "2022-11-28";

/// Default whole-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the optional bearer token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Bounds applied to every result-count parameter
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Preview budget for issue, pull request, comment, release, and commit bodies
pub const PREVIEW_BUDGET: usize = 500;

/// Budget for file content
pub const FILE_CONTENT_BUDGET: usize = 5_000;

/// Budget for README content
pub const README_BUDGET: usize = 10_000;

/// Clip applied to descriptions in listings
pub const DESCRIPTION_CLIP: usize = 200;

/// Clip applied to commit headlines in listings
pub const HEADLINE_CLIP: usize = 100;

/// Number of topics kept per repository in listings
pub const LISTING_TOPICS: usize = 5;

/// Length of a shortened commit identifier
pub const SHORT_SHA_LEN: usize = 7;

/// Placeholder for content that is not valid text
pub const BINARY_SENTINEL: &str = "[Binary content - cannot decode]";
