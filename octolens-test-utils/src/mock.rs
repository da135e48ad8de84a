//! Shortcuts for mounting canned GitHub responses on a [`MockServer`].

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Answer `GET {route}` with a 200 JSON body
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
  Mock::given(method("GET"))
    .and(path(route))
    .respond_with(ResponseTemplate::new(200).set_body_json(body))
    .mount(server)
    .await;
}

/// Answer `GET {route}` with a bare status and a GitHub-style error body
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
  Mock::given(method("GET"))
    .and(path(route))
    .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
      "message": "Mocked failure",
      "documentation_url": "https://docs.github.com/rest"
    })))
    .mount(server)
    .await;
}
