//! Helpers and cross-pipeline tests for the endpoint modules.

use wiremock::MockServer;

use crate::client::GitHubClient;
use crate::config::GatewayConfig;


/// Client pointed at a mock server, authenticated with `test_token`
pub(crate) fn client_for(server: &MockServer) -> GitHubClient {
  let config = GatewayConfig::new()
    .with_base_url(server.uri())
    .with_token(Some("test_token".to_string()));
  GitHubClient::new(config).expect("client builds")
}
