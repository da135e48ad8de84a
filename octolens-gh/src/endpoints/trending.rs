//! Trending discovery built on repository search.
//!
//! GitHub has no trending API. Repositories created inside a recent window
//! and ranked by stars stand in for it; trending developers are the owners
//! of those repositories, ranked by the stars they collected.

use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info, instrument};

use crate::client::GitHubClient;
use crate::consts::DESCRIPTION_CLIP;
use crate::error::Result;
use crate::models::{RawRepository, RawSearch};
use crate::params::{SearchQualifiers, build_search_query, clamp_limit};
use crate::records::{TrendingDeveloper, TrendingDevelopers, TrendingRepositories, TrendingRepository};
use crate::text::clip;

/// Repositories contributing to a trending developer's entry
const DEVELOPER_TOP_REPOSITORIES: usize = 3;

/// Star floor for trending repositories
const REPOSITORY_MIN_STARS: u32 = 100;

/// Star floor for repositories counted toward trending developers
const DEVELOPER_MIN_STARS: u32 = 10;

/// Look-back window named by the `since` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
  Daily,
  Weekly,
  Monthly,
}

impl TrendingWindow {
  /// Parse `daily`, `weekly`, or `monthly`. Anything else is daily.
  pub fn from_since(since: &str) -> Self {
    match since.trim().to_ascii_lowercase().as_str() {
      "weekly" => Self::Weekly,
      "monthly" => Self::Monthly,
      _ => Self::Daily,
    }
  }

  pub const fn days(self) -> u64 {
    match self {
      Self::Daily => 1,
      Self::Weekly => 7,
      Self::Monthly => 30,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Daily => "daily",
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
    }
  }

  /// First day of the window ending `today`.
  pub fn start(self, today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(self.days())).unwrap_or(NaiveDate::MIN)
  }
}

/// `stars:>{min} created:>={start}` plus an optional language qualifier
pub fn trending_query(min_stars: u32, start: NaiveDate, language: &str) -> String {
  build_search_query(
    &format!("stars:>{min_stars} created:>={}", start.format("%Y-%m-%d")),
    SearchQualifiers {
      language: Some(language),
      ..SearchQualifiers::default()
    },
  )
}

impl GitHubClient {
  /// Get recently created repositories ranked by stars.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_trending_repositories(&self, language: &str, since: &str, limit: i64) -> Result<TrendingRepositories> {
    let window = TrendingWindow::from_since(since);
    info!("Fetching {} trending repositories", window.as_str());

    let start = window.start(Utc::now().date_naive());
    let q = trending_query(REPOSITORY_MIN_STARS, start, language);
    let raw: RawSearch<RawRepository> = self.search("search/repositories", &q, Some("stars"), limit).await?;

    Ok(TrendingRepositories {
      period: window.as_str().to_string(),
      language: display_language(language),
      since_date: start.format("%Y-%m-%d").to_string(),
      repositories: raw
        .items
        .into_iter()
        .map(|r| TrendingRepository {
          name: r.full_name,
          description: clip(r.description.as_deref().unwrap_or_default(), DESCRIPTION_CLIP),
          url: r.html_url,
          stars: r.stargazers_count,
          forks: r.forks_count,
          language: r.language.unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect(),
    })
  }

  /// Get the owners of recently starred repositories, ranked by total
  /// stars across those repositories.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_trending_developers(&self, language: &str, since: &str, limit: i64) -> Result<TrendingDevelopers> {
    let window = TrendingWindow::from_since(since);
    info!("Fetching {} trending developers", window.as_str());

    let start = window.start(Utc::now().date_naive());
    let q = trending_query(DEVELOPER_MIN_STARS, start, language);
    let raw: RawSearch<RawRepository> = self.search("search/repositories", &q, Some("stars"), 100).await?;

    let mut developers = rank_developers(raw.items);
    developers.truncate(clamp_limit(limit) as usize);
    debug!("Ranked {} trending developers", developers.len());

    Ok(TrendingDevelopers {
      period: window.as_str().to_string(),
      language: display_language(language),
      developer_count: developers.len(),
      developers,
    })
  }
}

fn display_language(language: &str) -> String {
  let language = language.trim();
  if language.is_empty() {
    "all".to_string()
  } else {
    language.to_string()
  }
}

/// Fold repositories by owner and order owners by descending total stars.
///
/// Owners keep their first-appearance order on ties. Repositories without an
/// owner are skipped.
pub fn rank_developers(repositories: Vec<RawRepository>) -> Vec<TrendingDeveloper> {
  let mut developers: Vec<TrendingDeveloper> = Vec::new();

  for repo in repositories {
    let Some(owner) = repo.owner.filter(|o| !o.login.is_empty()) else {
      continue;
    };

    match developers.iter_mut().find(|d| d.username == owner.login) {
      Some(developer) => {
        developer.total_stars += repo.stargazers_count;
        developer.repository_count += 1;
        if developer.top_repositories.len() < DEVELOPER_TOP_REPOSITORIES {
          developer.top_repositories.push(repo.name);
        }
      }
      None => developers.push(TrendingDeveloper {
        username: owner.login,
        profile_url: owner.html_url,
        avatar_url: owner.avatar_url,
        total_stars: repo.stargazers_count,
        repository_count: 1,
        top_repositories: vec![repo.name],
      }),
    }
  }

  // `sort_by` is stable, so equal totals stay in first-appearance order.
  developers.sort_by(|a, b| b.total_stars.cmp(&a.total_stars));
  developers
}

#[cfg(test)]
mod tests {
  use octolens_test_utils::fixtures;
  use serde_json::Value;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, Request, ResponseTemplate};

  use super::*;
  use crate::endpoints::tests::client_for;

  fn raw_repo(owner: &str, name: &str, stars: u64) -> RawRepository {
    let value = fixtures::repository(&format!("{owner}/{name}"), stars);
    serde_json::from_value(value).unwrap()
  }

  fn query_of(request: &Request) -> String {
    request
      .url
      .query_pairs()
      .find(|(k, _)| k == "q")
      .map(|(_, v)| v.into_owned())
      .unwrap_or_default()
  }

  #[test]
  fn test_trending_window_parsing() {
    assert_eq!(TrendingWindow::from_since("daily"), TrendingWindow::Daily);
    assert_eq!(TrendingWindow::from_since("Weekly"), TrendingWindow::Weekly);
    assert_eq!(TrendingWindow::from_since("monthly"), TrendingWindow::Monthly);
    assert_eq!(TrendingWindow::from_since("hourly"), TrendingWindow::Daily);
    assert_eq!(TrendingWindow::from_since(""), TrendingWindow::Daily);
  }

  #[test]
  fn test_trending_query() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let start = TrendingWindow::Weekly.start(today);
    assert_eq!(trending_query(100, start, ""), "stars:>100 created:>=2024-02-23");

    let start = TrendingWindow::Monthly.start(today);
    assert_eq!(
      trending_query(10, start, "rust"),
      "stars:>10 created:>=2024-01-31 language:rust"
    );
  }

  #[test]
  fn test_rank_developers_groups_and_orders() {
    let repos = vec![
      raw_repo("alice", "a1", 500),
      raw_repo("bob", "b1", 300),
      raw_repo("carol", "c1", 450),
      raw_repo("bob", "b2", 150),
      raw_repo("alice", "a2", 10),
      raw_repo("alice", "a3", 10),
      raw_repo("alice", "a4", 10),
    ];

    let ranked = rank_developers(repos);
    let names: Vec<&str> = ranked.iter().map(|d| d.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);

    assert_eq!(ranked[0].total_stars, 530);
    assert_eq!(ranked[0].repository_count, 4);
    assert_eq!(ranked[0].top_repositories, ["a1", "a2", "a3"]);
    assert_eq!(ranked[1].total_stars, 450);
    assert_eq!(ranked[2].total_stars, 450);
  }

  #[test]
  fn test_rank_developers_skips_ownerless() {
    let mut orphan = raw_repo("ghost", "lost", 999);
    orphan.owner = None;

    let ranked = rank_developers(vec![orphan, raw_repo("dave", "d1", 1)]);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].username, "dave");
  }

  #[tokio::test]
  async fn test_get_trending_repositories() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .and(query_param("sort", "stars"))
      .and(query_param("per_page", "10"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(fixtures::search(1, vec![fixtures::repository("new/hotness", 900)])),
      )
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let trending = client.get_trending_repositories("", "fortnightly", 10).await?;

    assert_eq!(trending.period, "daily");
    assert_eq!(trending.language, "all");
    assert_eq!(trending.repositories[0].name, "new/hotness");
    assert_eq!(trending.repositories[0].stars, 900);

    let requests = mock_server.received_requests().await.unwrap_or_default();
    let q = query_of(&requests[0]);
    assert!(q.starts_with("stars:>100 created:>="), "q was {q}");
    assert!(q.ends_with(&trending.since_date));
    Ok(())
  }

  #[tokio::test]
  async fn test_get_trending_developers() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    let items: Vec<Value> = vec![
      fixtures::repository("alice/a1", 50),
      fixtures::repository("bob/b1", 80),
      fixtures::repository("alice/a2", 40),
      fixtures::repository("carol/c1", 20),
    ];

    Mock::given(method("GET"))
      .and(path("/search/repositories"))
      .and(query_param("per_page", "100"))
      .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::search(4, items)))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let trending = client.get_trending_developers("python", "weekly", 2).await?;

    assert_eq!(trending.period, "weekly");
    assert_eq!(trending.language, "python");
    assert_eq!(trending.developer_count, 2);
    assert_eq!(trending.developers[0].username, "alice");
    assert_eq!(trending.developers[0].total_stars, 90);
    assert_eq!(trending.developers[1].username, "bob");

    let requests = mock_server.received_requests().await.unwrap_or_default();
    let q = query_of(&requests[0]);
    assert!(q.starts_with("stars:>10 created:>="));
    assert!(q.ends_with("language:python"));
    Ok(())
  }
}
