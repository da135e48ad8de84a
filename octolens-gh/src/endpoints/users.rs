//! User and organization pipelines.

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::DESCRIPTION_CLIP;
use crate::error::Result;
use crate::models::{RawOrganization, RawRepository, RawUserProfile};
use crate::params::QueryParams;
use crate::records::{
  OrganizationInfo, OrganizationRepositories, OwnedRepository, UserAccount, UserProfile, UserRepositories,
  UserStatistics,
};
use crate::text::clip;

impl GitHubClient {
  /// Get a user's public profile
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_profile(&self, username: &str) -> Result<UserProfile> {
    info!("Fetching profile for {}", username);

    let raw: RawUserProfile = self.fetch(ApiRequest::get(format!("users/{username}"))).await?;

    Ok(UserProfile {
      username: raw.login,
      name: raw.name.unwrap_or_default(),
      bio: raw.bio.unwrap_or_default(),
      company: raw.company.unwrap_or_default(),
      location: raw.location.unwrap_or_default(),
      email: raw.email.unwrap_or_default(),
      blog: raw.blog.unwrap_or_default(),
      twitter: raw.twitter_username.unwrap_or_default(),
      profile_url: raw.html_url,
      avatar_url: raw.avatar_url,
      statistics: UserStatistics {
        public_repos: raw.public_repos,
        public_gists: raw.public_gists,
        followers: raw.followers,
        following: raw.following,
      },
      account: UserAccount {
        kind: raw.kind,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
      },
    })
  }

  /// List a user's public repositories
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_repositories(&self, username: &str, sort: &str, limit: i64) -> Result<UserRepositories> {
    info!("Fetching repositories for user {}", username);

    let repositories = self.owned_repositories(format!("users/{username}/repos"), sort, limit).await?;
    Ok(UserRepositories {
      username: username.to_string(),
      repository_count: repositories.len(),
      repositories,
    })
  }

  /// Get an organization's public profile
  #[instrument(skip(self), level = "debug")]
  pub async fn get_organization_info(&self, org: &str) -> Result<OrganizationInfo> {
    info!("Fetching organization {}", org);

    let raw: RawOrganization = self.fetch(ApiRequest::get(format!("orgs/{org}"))).await?;

    Ok(OrganizationInfo {
      login: raw.login,
      name: raw.name.unwrap_or_default(),
      description: raw.description.unwrap_or_default(),
      blog: raw.blog.unwrap_or_default(),
      location: raw.location.unwrap_or_default(),
      email: raw.email.unwrap_or_default(),
      profile_url: raw.html_url,
      avatar_url: raw.avatar_url,
      public_repos: raw.public_repos,
      followers: raw.followers,
      created_at: raw.created_at,
    })
  }

  /// List an organization's public repositories
  #[instrument(skip(self), level = "debug")]
  pub async fn get_organization_repositories(
    &self,
    org: &str,
    sort: &str,
    limit: i64,
  ) -> Result<OrganizationRepositories> {
    info!("Fetching repositories for organization {}", org);

    let repositories = self.owned_repositories(format!("orgs/{org}/repos"), sort, limit).await?;
    Ok(OrganizationRepositories {
      organization: org.to_string(),
      repository_count: repositories.len(),
      repositories,
    })
  }

  async fn owned_repositories(&self, path: String, sort: &str, limit: i64) -> Result<Vec<OwnedRepository>> {
    let params = QueryParams::new().optional("sort", Some(sort)).limit(limit);
    let raw: Vec<RawRepository> = self.fetch(ApiRequest::get(path).query(params)).await?;

    Ok(
      raw
        .into_iter()
        .map(|r| OwnedRepository {
          name: r.name,
          description: clip(r.description.as_deref().unwrap_or_default(), DESCRIPTION_CLIP),
          language: r.language.unwrap_or_else(|| "Unknown".to_string()),
          stars: r.stargazers_count,
          forks: r.forks_count,
          is_fork: r.fork,
          updated_at: r.updated_at,
          url: r.html_url,
        })
        .collect(),
    )
  }
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
  async fn test_get_user_profile() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/users/octocat",
      json!({
          "login": "octocat",
          "name": "The Octocat",
          "bio": null,
          "company": "@github",
          "location": "San Francisco",
          "email": null,
          "blog": "https://github.blog",
          "twitter_username": null,
          "html_url": "https://github.com/octocat",
          "avatar_url": "https://avatars.githubusercontent.com/u/583231",
          "public_repos": 8,
          "public_gists": 8,
          "followers": 9000,
          "following": 9,
          "type": "User",
          "created_at": "2011-01-25T18:44:36Z",
          "updated_at": "2024-01-01T00:00:00Z"
      }),
    )
    .await;

    let client = client_for(&mock_server);
    let profile = client.get_user_profile("octocat").await?;

    assert_eq!(profile.username, "octocat");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.twitter, "");
    assert_eq!(profile.statistics.followers, 9000);
    assert_eq!(profile.account.kind, "User");

    let json = serde_json::to_value(&profile)?;
    assert_eq!(json["account"]["type"], "User");
    Ok(())
  }

  #[tokio::test]
  async fn test_get_user_repositories() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    let mut long = fixtures::repository("octocat/verbose", 3);
    long["description"] = json!("d".repeat(300));
    long["fork"] = json!(true);

    Mock::given(method("GET"))
      .and(path("/users/octocat/repos"))
      .and(query_param("sort", "updated"))
      .and(query_param("per_page", "10"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(json!([fixtures::repository("octocat/Hello-World", 100), long])),
      )
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let repos = client.get_user_repositories("octocat", "updated", 10).await?;

    assert_eq!(repos.repository_count, 2);
    assert_eq!(repos.repositories[0].name, "Hello-World");
    assert_eq!(repos.repositories[1].description.len(), 200);
    assert!(repos.repositories[1].is_fork);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_organization_info() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    mount_json(
      &mock_server,
      "/orgs/github",
      json!({
          "login": "github",
          "name": "GitHub",
          "description": null,
          "html_url": "https://github.com/github",
          "avatar_url": "https://avatars.githubusercontent.com/u/9919",
          "public_repos": 400,
          "followers": 50000,
          "created_at": "2008-05-11T04:37:31Z"
      }),
    )
    .await;

    let client = client_for(&mock_server);
    let org = client.get_organization_info("github").await?;

    assert_eq!(org.name, "GitHub");
    assert_eq!(org.description, "");
    assert_eq!(org.public_repos, 400);
    Ok(())
  }

  #[tokio::test]
  async fn test_get_organization_repositories() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/orgs/github/repos"))
      .and(query_param("sort", "created"))
      .and(query_param("per_page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([fixtures::repository("github/docs", 15000)])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let client = client_for(&mock_server);
    let repos = client.get_organization_repositories("github", "created", -3).await?;

    assert_eq!(repos.organization, "github");
    assert_eq!(repos.repositories[0].stars, 15000);
    assert_eq!(repos.repositories[0].language, "Rust");
    Ok(())
  }
}
