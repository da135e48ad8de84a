//! # GitHub HTTP Client
//!
//! The request dispatcher: one HTTP call per invocation against the
//! configured base URL, with fixed headers, optional bearer credential, a
//! whole-request timeout, and deterministic classification of failures into
//! [`GatewayError`].

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::config::GatewayConfig;
use crate::consts::{ACCEPT, API_VERSION, API_VERSION_HEADER, USER_AGENT};
use crate::error::{GatewayError, Result};
use crate::params::QueryParams;

/// A single upstream call, built fresh per invocation
#[derive(Debug, Clone)]
pub struct ApiRequest {
  pub method: Method,
  pub path: String,
  pub query: BTreeMap<String, String>,
  pub body: Option<Value>,
  pub accept: Option<&'static str>,
}

impl ApiRequest {
  pub fn get(path: impl Into<String>) -> Self {
    Self::new(Method::GET, path)
  }

  pub fn new(method: Method, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
      query: BTreeMap::new(),
      body: None,
      accept: None,
    }
  }

  pub fn query(mut self, params: QueryParams) -> Self {
    self.query = params.into_inner();
    self
  }

  pub fn json(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }

  /// Override the `Accept` header for endpoints that need a preview media type
  pub const fn accept(mut self, accept: &'static str) -> Self {
    self.accept = Some(accept);
    self
  }
}

/// Represents a GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) config: Arc<GatewayConfig>,
}

impl GitHubClient {
  /// Create a new GitHub client
  pub fn new(config: GatewayConfig) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

    // Connections are scoped to a single invocation.
    let client = Client::builder()
      .default_headers(headers)
      .user_agent(USER_AGENT)
      .timeout(config.timeout())
      .pool_max_idle_per_host(0)
      .build()
      .map_err(|e| GatewayError::request_failed(format!("failed to build HTTP client: {e}")))?;

    Ok(Self {
      client,
      config: Arc::new(config),
    })
  }

  pub fn config(&self) -> &GatewayConfig {
    &self.config
  }

  /// Append `path` to the base URL one segment at a time.
  ///
  /// Each `/`-separated piece is percent-encoded, so a `#` or `?` in a file
  /// name stays part of the path. Empty pieces are dropped.
  pub(crate) fn url_for(&self, path: &str) -> Result<Url> {
    let base = &self.config.base_url;
    let mut url =
      Url::parse(base).map_err(|e| GatewayError::request_failed(format!("invalid API base URL '{base}': {e}")))?;
    url
      .path_segments_mut()
      .map_err(|()| GatewayError::request_failed(format!("API base URL '{base}' cannot carry a path")))?
      .pop_if_empty()
      .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
  }

  /// Issue one request and return the decoded JSON body.
  ///
  /// Empty success bodies (204, or 202 from statistics endpoints still being
  /// computed) decode to an empty JSON object.
  ///
  /// # Errors
  ///
  /// Non-success statuses are classified per [`GatewayError::from_status`];
  /// transport faults, timeouts, and undecodable bodies become
  /// [`GatewayError::RequestFailed`].
  #[instrument(skip(self, request), fields(method = %request.method, path = %request.path), level = "debug")]
  pub async fn dispatch(&self, request: ApiRequest) -> Result<Value> {
    let url = self.url_for(&request.path)?;
    trace!("GitHub API URL: {}", url);

    let mut builder = self.client.request(request.method.clone(), url);
    if !request.query.is_empty() {
      builder = builder.query(&request.query);
    }
    if let Some(accept) = request.accept {
      builder = builder.header(header::ACCEPT, accept);
    }
    if let Some(token) = &self.config.token {
      builder = builder.bearer_auth(token);
    }
    if let Some(body) = &request.body {
      builder = builder.json(body);
    }

    let response = builder.send().await.map_err(|e| {
      warn!("GitHub request to {} failed: {}", request.path, e);
      GatewayError::from(e)
    })?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    let body = response.text().await?;
    if !status.is_success() {
      warn!("GitHub API error for {}: HTTP {}", request.path, status);
      return Err(GatewayError::from_status(status, &request.path, body));
    }

    trace!("Received {} bytes", body.len());
    if body.trim().is_empty() {
      return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(&body)?)
  }

  /// Dispatch and decode into a typed upstream model.
  pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
    let value = self.dispatch(request).await?;
    Ok(serde_json::from_value(value)?)
  }
}

/// Create a GitHub client from the process environment
pub fn create_github_client() -> Result<GitHubClient> {
  GitHubClient::new(GatewayConfig::from_env())
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use serde_json::json;
  use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::error::ErrorKind;

  fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
    let config = GatewayConfig::new()
      .with_base_url(server.uri())
      .with_token(token.map(str::to_string));
    GitHubClient::new(config).unwrap()
  }

  #[tokio::test]
  async fn test_dispatch_sends_fixed_headers_and_bearer_token() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/octocat/Hello-World"))
      .and(header("accept", ACCEPT))
      .and(header("x-github-api-version", API_VERSION))
      .and(header("user-agent", USER_AGENT))
      .and(header("authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "full_name": "octocat/Hello-World" })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, Some("test_token"));
    let value = client.dispatch(ApiRequest::get("repos/octocat/Hello-World")).await?;

    assert_eq!(value["full_name"], "octocat/Hello-World");
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_without_token_omits_authorization() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rate_limit"))
      .and(header_exists("authorization"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rate_limit"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "resources": {} })))
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, None);
    let value = client.dispatch(ApiRequest::get("rate_limit")).await?;

    assert!(value.get("resources").is_some());
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_passes_query_and_accept_override() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/search/topics"))
      .and(query_param("q", "rust"))
      .and(query_param("per_page", "5"))
      .and(header("accept", "application/vnd.github.mercy-preview+json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total_count": 0, "items": [] })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, None);
    let request = ApiRequest::get("search/topics")
      .query(QueryParams::new().param("q", "rust").param("per_page", 5))
      .accept("application/vnd.github.mercy-preview+json");
    let value = client.dispatch(request).await?;

    assert_eq!(value["total_count"], 0);
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_empty_body_returns_empty_record() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/repos/o/r/subscription"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, Some("t"));
    let value = client
      .dispatch(ApiRequest::new(Method::DELETE, "repos/o/r/subscription"))
      .await?;

    assert_eq!(value, json!({}));
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_sends_json_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/markdown"))
      .and(body_json(json!({ "text": "# hi" })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, None);
    let value = client
      .dispatch(ApiRequest::new(Method::POST, "markdown").json(json!({ "text": "# hi" })))
      .await?;

    assert_eq!(value["ok"], true);
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_classifies_statuses() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    for (status, route) in [(404, "/a"), (403, "/b"), (401, "/c"), (422, "/d"), (500, "/e")] {
      Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
        .mount(&mock_server)
        .await;
    }

    let client = client_for(&mock_server, None);
    let expectations = [
      ("a", ErrorKind::NotFound),
      ("b", ErrorKind::RateLimitedOrForbidden),
      ("c", ErrorKind::AuthenticationFailed),
      ("d", ErrorKind::ValidationFailed),
      ("e", ErrorKind::UpstreamError),
    ];
    for (route, kind) in expectations {
      let err = client.dispatch(ApiRequest::get(route)).await.unwrap_err();
      assert_eq!(err.kind(), kind, "route {route}");
    }

    let err = client.dispatch(ApiRequest::get("e")).await.unwrap_err();
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("upstream says no"));
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_timeout_is_request_failed() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/slow"))
      .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
      .mount(&mock_server)
      .await;

    let config = GatewayConfig::new()
      .with_base_url(mock_server.uri())
      .with_timeout(Duration::from_millis(50));
    let client = GitHubClient::new(config)?;

    let err = client.dispatch(ApiRequest::get("slow")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    Ok(())
  }

  #[tokio::test]
  async fn test_dispatch_invalid_json_is_request_failed() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/garbage"))
      .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, None);
    let err = client.dispatch(ApiRequest::get("garbage")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    Ok(())
  }

  #[tokio::test]
  async fn test_connection_refused_is_request_failed() {
    let config = GatewayConfig::new().with_base_url("http://127.0.0.1:9");
    let client = GitHubClient::new(config).unwrap();

    let err = client.dispatch(ApiRequest::get("users/octocat")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestFailed);
  }

  #[test]
  fn test_url_for_encodes_each_segment() {
    let client = GitHubClient::new(GatewayConfig::new()).unwrap();

    let url = client.url_for("repos/o/r/contents/docs/c#.md").unwrap();
    assert_eq!(url.as_str(), "https://api.github.com/repos/o/r/contents/docs/c%23.md");
    assert!(url.fragment().is_none());

    let url = client.url_for("/repos/o/r/contents/what?.md").unwrap();
    assert_eq!(url.path(), "/repos/o/r/contents/what%3F.md");
    assert!(url.query().is_none());
  }

  #[test]
  fn test_url_for_keeps_base_path_prefix() {
    let config = GatewayConfig::new().with_base_url("https://ghe.example.com/api/v3/");
    let client = GitHubClient::new(config).unwrap();

    let url = client.url_for("repos/o/r").unwrap();
    assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/repos/o/r");
  }

  #[tokio::test]
  async fn test_dispatch_sends_encoded_path() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/contents/notes%20and%20ideas.md"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "notes and ideas.md" })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server, None);
    let value = client
      .dispatch(ApiRequest::get("repos/o/r/contents/notes and ideas.md"))
      .await?;

    assert_eq!(value["name"], "notes and ideas.md");
    Ok(())
  }
}
