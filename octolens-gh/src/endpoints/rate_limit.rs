//! Rate limit status.

use chrono::DateTime;
use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::error::Result;
use crate::models::{RawRateBucket, RawRateLimit};
use crate::records::{RateLimitBucket, RateLimitResources, RateLimitStatus};

impl GitHubClient {
  /// Get remaining quota for the core, search, GraphQL, and code search
  /// buckets. Querying it does not count against the limit.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_rate_limit(&self) -> Result<RateLimitStatus> {
    info!("Fetching rate limit status");

    let mut raw: RawRateLimit = self.fetch(ApiRequest::get("rate_limit")).await?;
    let mut take = |name: &str| raw.resources.remove(name).map(bucket).unwrap_or_default();

    Ok(RateLimitStatus {
      authenticated: self.config.is_authenticated(),
      resources: RateLimitResources {
        core: take("core"),
        search: take("search"),
        graphql: take("graphql"),
        code_search: take("code_search"),
      },
    })
  }
}

fn bucket(raw: RawRateBucket) -> RateLimitBucket {
  RateLimitBucket {
    limit: raw.limit,
    remaining: raw.remaining,
    used: raw.used,
    reset: raw.reset,
    reset_at: reset_at(raw.reset),
  }
}

/// RFC 3339 form of an epoch-seconds reset time, empty when unset or out of
/// range
fn reset_at(epoch_seconds: i64) -> String {
  if epoch_seconds <= 0 {
    return String::new();
  }
  DateTime::from_timestamp(epoch_seconds, 0)
    .map(|t| t.to_rfc3339())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use octolens_test_utils::mount_json;
  use serde_json::json;
  use wiremock::MockServer;

  use super::*;
  use crate::endpoints::tests::client_for;

  #[tokio::test]
  async fn test_get_rate_limit() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/rate_limit",
      json!({
          "resources": {
              "core": { "limit": 5000, "remaining": 4999, "reset": 1691591363, "used": 1 },
              "search": { "limit": 30, "remaining": 18, "reset": 1691591091, "used": 12 },
              "graphql": { "limit": 5000, "remaining": 4993, "reset": 1691593228, "used": 7 },
              "integration_manifest": { "limit": 5000, "remaining": 5000, "reset": 1691594631, "used": 0 }
          },
          "rate": { "limit": 5000, "remaining": 4999, "reset": 1372700873, "used": 1 }
      }),
    )
    .await;

    let client = client_for(&mock_server);
    let status = client.get_rate_limit().await?;

    assert!(status.authenticated);
    assert_eq!(status.resources.core.remaining, 4999);
    assert_eq!(status.resources.core.reset_at, "2023-08-09T14:29:23+00:00");
    assert_eq!(status.resources.search.used, 12);
    assert_eq!(status.resources.code_search.limit, 0);
    assert_eq!(status.resources.code_search.reset_at, "");
    Ok(())
  }

  #[test]
  fn test_reset_at_bounds() {
    assert_eq!(reset_at(0), "");
    assert_eq!(reset_at(-1), "");
    assert_eq!(reset_at(i64::MAX), "");
    assert_eq!(reset_at(1), "1970-01-01T00:00:01+00:00");
  }
}
