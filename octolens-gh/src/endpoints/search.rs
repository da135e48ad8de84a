//! # Search Pipelines
//!
//! Repository, code, issue, user, and topic search. Each composes a single
//! `q` string from free text plus qualifiers and reports the upstream
//! `total_count` next to the page it actually returns.

use tracing::{debug, info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::{ACCEPT_TOPICS_PREVIEW, DESCRIPTION_CLIP, LISTING_TOPICS};
use crate::error::Result;
use crate::models::{RawCodeResult, RawIssue, RawRepository, RawSearch, RawSearchUser, RawTopic, login_of};
use crate::params::{QueryParams, SearchQualifiers, build_search_query, scope_qualifiers};
use crate::records::{
  CodeSearch, CodeSearchHit, IssueSearch, IssueSearchHit, RepositorySearch, RepositorySearchHit, TopicSearch,
  TopicSearchHit, UserSearch, UserSearchHit,
};
use crate::text::clip;

impl GitHubClient {
  /// Search repositories, optionally restricted to one language.
  ///
  /// `sort` is passed through (`stars`, `forks`, `updated`); results are
  /// always in descending order.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_repositories(
    &self,
    query: &str,
    sort: &str,
    language: &str,
    limit: i64,
  ) -> Result<RepositorySearch> {
    info!("Searching repositories for '{}'", query);

    let q = build_search_query(
      query,
      SearchQualifiers {
        language: Some(language),
        ..SearchQualifiers::default()
      },
    );
    let raw: RawSearch<RawRepository> = self.search("search/repositories", &q, Some(sort), limit).await?;

    let repositories: Vec<RepositorySearchHit> = raw.items.into_iter().map(repository_hit).collect();
    Ok(RepositorySearch {
      total_count: raw.total_count,
      showing: repositories.len(),
      repositories,
    })
  }

  /// Search code, scoped to `repo:owner/repo` when both are given or to
  /// `user:owner` when only the owner is.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_code(
    &self,
    query: &str,
    owner: &str,
    repo: &str,
    language: &str,
    limit: i64,
  ) -> Result<CodeSearch> {
    info!("Searching code for '{}'", query);

    let slug = repo_slug(owner, repo);
    let qualifiers = SearchQualifiers {
      language: Some(language),
      ..scope_qualifiers(owner, slug.as_deref())
    };
    let q = build_search_query(query, qualifiers);
    let raw: RawSearch<RawCodeResult> = self.search("search/code", &q, None, limit).await?;

    let results: Vec<CodeSearchHit> = raw
      .items
      .into_iter()
      .map(|item| CodeSearchHit {
        name: item.name,
        path: item.path,
        repository: item.repository.full_name,
        url: item.html_url,
        score: item.score,
      })
      .collect();

    Ok(CodeSearch {
      query: q,
      total_count: raw.total_count,
      showing: results.len(),
      results,
    })
  }

  /// Search issues and pull requests, optionally scoped and filtered by
  /// state.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(
    &self,
    query: &str,
    owner: &str,
    repo: &str,
    state: &str,
    limit: i64,
  ) -> Result<IssueSearch> {
    info!("Searching issues for '{}'", query);

    let slug = repo_slug(owner, repo);
    let mut q = build_search_query(query, scope_qualifiers(owner, slug.as_deref()));
    let state = state.trim();
    if !state.is_empty() {
      if !q.is_empty() {
        q.push(' ');
      }
      q.push_str("state:");
      q.push_str(state);
    }
    let raw: RawSearch<RawIssue> = self.search("search/issues", &q, None, limit).await?;

    let results: Vec<IssueSearchHit> = raw
      .items
      .into_iter()
      .map(|item| IssueSearchHit {
        repository: item.repository_slug(),
        author: login_of(item.user.as_ref()),
        is_pull_request: item.is_pull_request(),
        number: item.number,
        title: item.title,
        state: item.state,
        comments: item.comments,
        created_at: item.created_at,
        url: item.html_url,
      })
      .collect();

    Ok(IssueSearch {
      query: q,
      total_count: raw.total_count,
      showing: results.len(),
      results,
    })
  }

  /// Search users and organizations.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_users(&self, query: &str, limit: i64) -> Result<UserSearch> {
    info!("Searching users for '{}'", query);

    let raw: RawSearch<RawSearchUser> = self.search("search/users", query.trim(), None, limit).await?;

    let users: Vec<UserSearchHit> = raw
      .items
      .into_iter()
      .map(|u| UserSearchHit {
        username: u.login,
        kind: u.kind,
        profile_url: u.html_url,
        avatar_url: u.avatar_url,
        score: u.score,
      })
      .collect();

    Ok(UserSearch {
      total_count: raw.total_count,
      showing: users.len(),
      users,
    })
  }

  /// Search topics. Uses the topics preview media type.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_topics(&self, query: &str, limit: i64) -> Result<TopicSearch> {
    info!("Searching topics for '{}'", query);

    let params = QueryParams::new().param("q", query.trim()).limit(limit);
    let raw: RawSearch<RawTopic> = self
      .fetch(
        ApiRequest::get("search/topics")
          .query(params)
          .accept(ACCEPT_TOPICS_PREVIEW),
      )
      .await?;

    let topics: Vec<TopicSearchHit> = raw
      .items
      .into_iter()
      .map(|t| TopicSearchHit {
        display_name: t.display_name.unwrap_or_else(|| t.name.clone()),
        name: t.name,
        short_description: t.short_description.unwrap_or_default(),
        featured: t.featured,
        curated: t.curated,
        score: t.score,
      })
      .collect();

    Ok(TopicSearch {
      total_count: raw.total_count,
      showing: topics.len(),
      topics,
    })
  }

  /// Run one search call. `sort` implies descending order.
  pub(crate) async fn search<T: serde::de::DeserializeOwned>(
    &self,
    endpoint: &str,
    q: &str,
    sort: Option<&str>,
    limit: i64,
  ) -> Result<RawSearch<T>> {
    debug!("Search {} q={:?}", endpoint, q);

    let mut params = QueryParams::new().param("q", q).limit(limit).optional("sort", sort);
    if params.get("sort").is_some() {
      params = params.param("order", "desc");
    }
    self.fetch(ApiRequest::get(endpoint).query(params)).await
  }
}

fn repo_slug(owner: &str, repo: &str) -> Option<String> {
  let (owner, repo) = (owner.trim(), repo.trim());
  (!owner.is_empty() && !repo.is_empty()).then(|| format!("{owner}/{repo}"))
}

pub(crate) fn repository_hit(raw: RawRepository) -> RepositorySearchHit {
  RepositorySearchHit {
    name: raw.full_name,
    description: clip(raw.description.as_deref().unwrap_or_default(), DESCRIPTION_CLIP),
    url: raw.html_url,
    stars: raw.stargazers_count,
    forks: raw.forks_count,
    language: raw.language.unwrap_or_else(|| "Unknown".to_string()),
    updated_at: raw.updated_at,
    topics: raw.topics.into_iter().take(LISTING_TOPICS).collect(),
  }
}
