//! Repository statistics aggregate.
//!
//! The repository record is required. Commit activity and code frequency are
//! best effort: GitHub answers 202 with an empty body while it computes them,
//! and either may fail independently. A missing secondary is zeroed and the
//! report is marked `partial`.

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::client::{ApiRequest, GitHubClient};
use crate::error::Result;
use crate::models::{RawCommitActivityWeek, RawRepository};
use crate::records::{CodeFrequency, CommitActivity, RepositoryStatsReport};
use crate::text::round2;

impl GitHubClient {
  /// Get repository counters combined with commit activity and code churn.
  ///
  /// # Errors
  ///
  /// Only a failure of the primary repository call is returned.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_stats(&self, owner: &str, repo: &str) -> Result<RepositoryStatsReport> {
    info!("Fetching statistics for {}/{}", owner, repo);

    let raw: RawRepository = self.fetch(ApiRequest::get(format!("repos/{owner}/{repo}"))).await?;

    let (activity, frequency) = tokio::join!(
      self.dispatch(ApiRequest::get(format!("repos/{owner}/{repo}/stats/commit_activity"))),
      self.dispatch(ApiRequest::get(format!("repos/{owner}/{repo}/stats/code_frequency"))),
    );

    let commit_activity = activity.ok().and_then(|v| summarize_commit_activity(v).ok());
    if commit_activity.is_none() {
      warn!("Commit activity unavailable for {}/{}, reporting zeros", owner, repo);
    }

    let code_frequency = frequency.ok().and_then(summarize_code_frequency);
    if code_frequency.is_none() {
      warn!("Code frequency unavailable for {}/{}, reporting zeros", owner, repo);
    }

    let partial = commit_activity.is_none() || code_frequency.is_none();

    Ok(RepositoryStatsReport {
      repository: raw.full_name,
      stars: raw.stargazers_count,
      forks: raw.forks_count,
      watchers: raw.watchers_count,
      open_issues: raw.open_issues_count,
      size_kb: raw.size,
      commit_activity: commit_activity.unwrap_or_default(),
      code_frequency: code_frequency.unwrap_or_default(),
      partial,
    })
  }
}

/// Summarize a year of weekly commit totals. Anything other than an array of
/// weeks (including the `{}` of a 202) is an error.
fn summarize_commit_activity(payload: Value) -> serde_json::Result<CommitActivity> {
  let weeks: Vec<RawCommitActivityWeek> = serde_json::from_value(payload)?;

  let total: u64 = weeks.iter().map(|w| w.total).sum();
  let last_4_weeks: u64 = weeks.iter().rev().take(4).map(|w| w.total).sum();
  let average_per_week = if weeks.is_empty() {
    0.0
  } else {
    round2(total as f64 / weeks.len() as f64)
  };

  Ok(CommitActivity {
    total_commits_last_year: total,
    last_4_weeks,
    average_per_week,
  })
}

/// Sum `[week, additions, -deletions]` triples.
fn summarize_code_frequency(payload: Value) -> Option<CodeFrequency> {
  let weeks: Vec<Vec<i64>> = serde_json::from_value(payload).ok()?;

  let mut summary = CodeFrequency {
    weeks_tracked: weeks.len(),
    ..CodeFrequency::default()
  };
  for week in &weeks {
    summary.total_additions += week.get(1).map_or(0, |a| a.unsigned_abs());
    summary.total_deletions += week.get(2).map_or(0, |d| d.unsigned_abs());
  }
  Some(summary)
}
