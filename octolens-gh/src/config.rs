//! # Gateway Configuration
//!
//! Immutable endpoint and credential settings shared by every request the
//! dispatcher issues. Built once at startup and handed to [`GitHubClient`].
//!
//! [`GitHubClient`]: crate::GitHubClient

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::consts::{API_BASE_URL, API_URL_ENV_VAR, DEFAULT_TIMEOUT_SECS, TOKEN_ENV_VAR};

/// Endpoint, credential, and timeout settings for the GitHub gateway
#[derive(Clone)]
pub struct GatewayConfig {
  pub(crate) base_url: String,
  pub(crate) token: Option<String>,
  pub(crate) timeout: Duration,
}

impl Default for GatewayConfig {
  fn default() -> Self {
    Self::new()
  }
}

impl GatewayConfig {
  /// Unauthenticated configuration pointing at the public API
  pub fn new() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      token: None,
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }

  /// Load the token and base URL from `GITHUB_TOKEN` / `GITHUB_API_URL`.
  ///
  /// An unset or blank token yields an unauthenticated configuration, which
  /// is fully supported at the upstream's lower rate ceiling.
  pub fn from_env() -> Self {
    let config = Self::new().with_token(env::var(TOKEN_ENV_VAR).ok());
    match env::var(API_URL_ENV_VAR) {
      Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
      _ => config,
    }
  }

  /// Set or clear the bearer token. Blank tokens are treated as absent.
  pub fn with_token(mut self, token: Option<String>) -> Self {
    self.token = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    self
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  pub const fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub const fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Whether requests will carry an `Authorization` header
  pub const fn is_authenticated(&self) -> bool {
    self.token.is_some()
  }
}

// Keep the token out of debug output and logs.
impl fmt::Debug for GatewayConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GatewayConfig")
      .field("base_url", &self.base_url)
      .field("token", &self.token.as_ref().map(|_| "<redacted>"))
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// Check that a base URL is an absolute http(s) URL.
pub fn validate_base_url(raw: &str) -> Result<String, String> {
  let parsed = Url::parse(raw).map_err(|e| format!("invalid API base URL '{raw}': {e}"))?;
  match parsed.scheme() {
    "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
    scheme => Err(format!("unsupported scheme '{scheme}' in API base URL '{raw}'")),
  }
}
