//! Release and tag pipelines.

use tracing::{info, instrument};

use crate::client::{ApiRequest, GitHubClient};
use crate::consts::PREVIEW_BUDGET;
use crate::error::Result;
use crate::models::{RawRelease, RawTag, login_of};
use crate::params::QueryParams;
use crate::records::{ReleaseAsset, ReleaseDetail, ReleaseList, ReleaseSummary, TagList, TagSummary};
use crate::text::{short_sha, truncate};

impl GitHubClient {
  /// List releases, newest first
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_releases(&self, owner: &str, repo: &str, limit: i64) -> Result<ReleaseList> {
    info!("Fetching releases for {}/{}", owner, repo);

    let raw: Vec<RawRelease> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/releases")).query(QueryParams::new().limit(limit)))
      .await?;

    let releases: Vec<ReleaseSummary> = raw.into_iter().map(|r| release_summary(r).0).collect();
    Ok(ReleaseList {
      repository: format!("{owner}/{repo}"),
      release_count: releases.len(),
      releases,
    })
  }

  /// Get the latest published release with its assets.
  ///
  /// Drafts and prereleases are never "latest"; a repository without a
  /// published release answers `NotFound`.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<ReleaseDetail> {
    info!("Fetching latest release for {}/{}", owner, repo);

    let raw: RawRelease = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/releases/latest")))
      .await?;

    let (release, assets) = release_summary(raw);
    Ok(ReleaseDetail { release, assets })
  }

  /// List tags with their commits
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_tags(&self, owner: &str, repo: &str, limit: i64) -> Result<TagList> {
    info!("Fetching tags for {}/{}", owner, repo);

    let raw: Vec<RawTag> = self
      .fetch(ApiRequest::get(format!("repos/{owner}/{repo}/tags")).query(QueryParams::new().limit(limit)))
      .await?;

    let tags: Vec<TagSummary> = raw
      .into_iter()
      .map(|t| TagSummary {
        name: t.name,
        sha: short_sha(&t.commit.sha),
        full_sha: t.commit.sha,
      })
      .collect();

    Ok(TagList {
      repository: format!("{owner}/{repo}"),
      tag_count: tags.len(),
      tags,
    })
  }
}

/// Summary plus the asset list it was computed from
fn release_summary(raw: RawRelease) -> (ReleaseSummary, Vec<ReleaseAsset>) {
  let body = truncate(raw.body.as_deref().unwrap_or_default(), PREVIEW_BUDGET);
  let assets: Vec<ReleaseAsset> = raw
    .assets
    .into_iter()
    .map(|a| ReleaseAsset {
      name: a.name,
      size: a.size,
      download_count: a.download_count,
      content_type: a.content_type.unwrap_or_default(),
      url: a.browser_download_url,
    })
    .collect();

  let summary = ReleaseSummary {
    name: raw.name.filter(|n| !n.is_empty()).unwrap_or_else(|| raw.tag_name.clone()),
    tag_name: raw.tag_name,
    author: login_of(raw.author.as_ref()),
    draft: raw.draft,
    prerelease: raw.prerelease,
    created_at: raw.created_at,
    published_at: raw.published_at.unwrap_or_default(),
    body: body.text,
    body_truncated: body.truncated,
    asset_count: assets.len(),
    download_count: assets.iter().map(|a| a.download_count).sum(),
    url: raw.html_url,
  };
  (summary, assets)
}
