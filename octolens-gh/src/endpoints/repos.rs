//! Repository analysis pipelines: metadata, languages, contributors, traffic.

use std::collections::BTreeMap;

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::error::Result;
use crate::models::{RawContributor, RawRepository, RawTrafficViews};
use crate::params::QueryParams;
use crate::records::{
  ContributorList, ContributorSummary, LanguageBreakdown, LanguageShare, RepositoryFeatures, RepositoryInfo,
  RepositoryStatistics, TrafficDay, TrafficSummary, TrafficTotals,
};

impl GitHubClient {
  /// Get repository metadata, statistics, and feature flags.
  ///
  /// # Errors
  ///
  /// Returns the classified [`GatewayError`](crate::GatewayError) of the
  /// single upstream call.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_info(&self, owner: &str, repo: &str) -> Result<RepositoryInfo> {
    info!("Fetching repository info for {}/{}", owner, repo);

    let raw: RawRepository = self.fetch(ApiRequest::get(format!("repos/{owner}/{repo}"))).await?;
    Ok(map_repository_info(raw))
  }

  /// Get the language byte breakdown with percentage shares.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_languages(&self, owner: &str, repo: &str) -> Result<LanguageBreakdown> {
    info!("Fetching languages for {}/{}", owner, repo);

    let raw: BTreeMap<String, u64> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/languages")))
      .await?;
    let languages = language_shares(raw);

    Ok(LanguageBreakdown {
      repository: format!("{owner}/{repo}"),
      total_bytes: languages.iter().map(|l| l.bytes).sum(),
      language_count: languages.len(),
      languages,
    })
  }

  /// Get the top contributors by commit count.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_contributors(&self, owner: &str, repo: &str, limit: i64) -> Result<ContributorList> {
    info!("Fetching contributors for {}/{}", owner, repo);

    let request = ApiRequest::get(format!("repos/{owner}/{repo}/contributors")).query(QueryParams::new().limit(limit));
    let raw: Vec<RawContributor> = self.fetch(request).await?;

    let contributors: Vec<ContributorSummary> = raw
      .into_iter()
      .map(|c| ContributorSummary {
        username: c.login,
        contributions: c.contributions,
        profile_url: c.html_url,
        kind: c.kind,
      })
      .collect();

    Ok(ContributorList {
      repository: format!("{owner}/{repo}"),
      contributor_count: contributors.len(),
      total_contributions: contributors.iter().map(|c| c.contributions).sum(),
      contributors,
    })
  }

  /// Get the last 14 days of page views. Requires push access upstream; a
  /// caller without it receives the classified 403/404 error.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_traffic(&self, owner: &str, repo: &str) -> Result<TrafficSummary> {
    info!("Fetching traffic for {}/{}", owner, repo);

    let raw: RawTrafficViews = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/traffic/views")))
      .await?;

    Ok(TrafficSummary {
      repository: format!("{owner}/{repo}"),
      views: TrafficTotals {
        count: raw.count,
        uniques: raw.uniques,
      },
      daily: raw
        .views
        .into_iter()
        .map(|v| TrafficDay {
          timestamp: v.timestamp,
          count: v.count,
          uniques: v.uniques,
        })
        .collect(),
    })
  }
}

pub(crate) fn map_repository_info(raw: RawRepository) -> RepositoryInfo {
  RepositoryInfo {
    name: raw.full_name,
    description: raw.description.unwrap_or_else(|| "No description".to_string()),
    url: raw.html_url,
    created_at: raw.created_at,
    updated_at: raw.updated_at,
    language: raw.language.unwrap_or_else(|| "Not specified".to_string()),
    statistics: RepositoryStatistics {
      stars: raw.stargazers_count,
      watchers: raw.watchers_count,
      forks: raw.forks_count,
      open_issues: raw.open_issues_count,
      size_kb: raw.size,
    },
    features: RepositoryFeatures {
      has_wiki: raw.has_wiki,
      has_pages: raw.has_pages,
      has_issues: raw.has_issues,
      has_projects: raw.has_projects,
      has_downloads: raw.has_downloads,
    },
    license: raw
      .license
      .map(|l| l.name)
      .filter(|n| !n.is_empty())
      .unwrap_or_else(|| "No license".to_string()),
    default_branch: raw.default_branch,
    topics: raw.topics,
    is_fork: raw.fork,
    is_archived: raw.archived,
    visibility: raw.visibility,
  }
}

/// Convert a language→bytes map into descending shares of the total.
///
/// Shares are whole hundredths of a percent assigned by largest remainder,
/// so a non-empty map always sums to exactly 100.00 while each entry stays
/// within 0.01 of its exact share. A zero total yields zero for everyone.
pub fn language_shares(bytes_by_language: BTreeMap<String, u64>) -> Vec<LanguageShare> {
  let mut entries: Vec<(String, u64)> = bytes_by_language.into_iter().collect();
  // Stable sort keeps ties in name order.
  entries.sort_by(|a, b| b.1.cmp(&a.1));

  let total: u128 = entries.iter().map(|(_, bytes)| u128::from(*bytes)).sum();
  if total == 0 {
    return entries
      .into_iter()
      .map(|(language, bytes)| LanguageShare {
        language,
        bytes,
        percentage: 0.0,
      })
      .collect();
  }

  const SCALE: u128 = 10_000;
  let mut hundredths: Vec<u128> = Vec::with_capacity(entries.len());
  let mut remainders: Vec<(usize, u128)> = Vec::with_capacity(entries.len());
  for (idx, (_, bytes)) in entries.iter().enumerate() {
    let scaled = u128::from(*bytes) * SCALE;
    hundredths.push(scaled / total);
    remainders.push((idx, scaled % total));
  }

  let assigned: u128 = hundredths.iter().sum();
  let leftover = usize::try_from(SCALE - assigned).unwrap_or(0);
  remainders.sort_by(|a, b| b.1.cmp(&a.1));
  for (idx, _) in remainders.into_iter().take(leftover) {
    hundredths[idx] += 1;
  }

  entries
    .into_iter()
    .zip(hundredths)
    .map(|((language, bytes), share)| LanguageShare {
      language,
      bytes,
      percentage: share as f64 / 100.0,
    })
    .collect()
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
  async fn test_get_repository_info_defaults_missing_license() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/octocat/Hello-World",
      fixtures::repository("octocat/Hello-World", 100),
    )
    .await;

    let client = client_for(&mock_server);
    let info = client.get_repository_info("octocat", "Hello-World").await?;

    assert_eq!(info.name, "octocat/Hello-World");
    assert_eq!(info.statistics.stars, 100);
    assert_eq!(info.license, "No license");
    assert_eq!(info.default_branch, "main");
    assert!(info.features.has_wiki);

    let json = serde_json::to_value(&info)?;
    assert_eq!(json["statistics"]["stars"], 100);
    assert_eq!(json["license"], "No license");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_info_sparse_payload() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r",
      json!({ "full_name": "o/r", "description": null, "language": null, "license": { "name": "MIT License" } }),
    )
    .await;

    let client = client_for(&mock_server);
    let info = client.get_repository_info("o", "r").await?;

    assert_eq!(info.description, "No description");
    assert_eq!(info.language, "Not specified");
    assert_eq!(info.license, "MIT License");
    assert_eq!(info.statistics.forks, 0);
    assert!(info.topics.is_empty());
    assert!(!info.is_archived);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_languages() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r/languages",
      json!({ "Shell": 250, "Rust": 700, "Python": 50 }),
    )
    .await;

    let client = client_for(&mock_server);
    let breakdown = client.get_repository_languages("o", "r").await?;

    assert_eq!(breakdown.total_bytes, 1000);
    assert_eq!(breakdown.language_count, 3);
    let names: Vec<&str> = breakdown.languages.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(names, ["Rust", "Shell", "Python"]);
    assert_eq!(breakdown.languages[0].percentage, 70.0);
    assert_eq!(breakdown.languages[1].percentage, 25.0);
    assert_eq!(breakdown.languages[2].percentage, 5.0);
    Ok(())
  }

  #[test]
  fn test_language_shares_sum_to_hundred() {
    let map: BTreeMap<String, u64> = [("A", 1), ("B", 1), ("C", 1), ("D", 7), ("E", 13), ("F", 977)]
      .into_iter()
      .map(|(k, v)| (k.to_string(), v))
      .collect();

    let shares = language_shares(map);
    let sum: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() <= 0.02, "sum was {sum}");

    for pair in shares.windows(2) {
      assert!(pair[0].bytes >= pair[1].bytes);
    }
  }

  #[test]
  fn test_language_shares_thirds() {
    let map: BTreeMap<String, u64> = [("Go", 1), ("C", 1), ("Zig", 1)]
      .into_iter()
      .map(|(k, v)| (k.to_string(), v))
      .collect();

    let shares = language_shares(map);
    let sum: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() <= 0.02);
    for share in &shares {
      assert!((share.percentage - 33.33).abs() <= 0.011);
    }
  }

  #[test]
  fn test_language_shares_zero_total() {
    let map: BTreeMap<String, u64> = [("Empty", 0), ("AlsoEmpty", 0)]
      .into_iter()
      .map(|(k, v)| (k.to_string(), v))
      .collect();

    let shares = language_shares(map);
    assert_eq!(shares.len(), 2);
    assert!(shares.iter().all(|s| s.percentage == 0.0));

    assert!(language_shares(BTreeMap::new()).is_empty());
  }

  #[tokio::test]
  async fn test_get_repository_contributors_clamps_limit() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/contributors"))
      .and(query_param("per_page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          { "login": "alice", "contributions": 40, "html_url": "https://github.com/alice", "type": "User" },
          { "login": "dependabot[bot]", "contributions": 2, "html_url": "https://github.com/apps/dependabot", "type": "Bot" }
      ])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let list = client.get_repository_contributors("o", "r", 0).await?;

    assert_eq!(list.contributor_count, 2);
    assert_eq!(list.total_contributions, 42);
    assert_eq!(list.contributors[1].kind, "Bot");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_repository_traffic() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/repos/o/r/traffic/views",
      json!({
          "count": 14850,
          "uniques": 3782,
          "views": [
              { "timestamp": "2024-01-01T00:00:00Z", "count": 440, "uniques": 143 },
              { "timestamp": "2024-01-02T00:00:00Z", "count": 1308, "uniques": 414 }
          ]
      }),
    )
    .await;

    let client = client_for(&mock_server);
    let traffic = client.get_repository_traffic("o", "r").await?;

    assert_eq!(traffic.views.count, 14850);
    assert_eq!(traffic.daily.len(), 2);
    assert_eq!(traffic.daily[1].uniques, 414);
    Ok(())
  }
}
