//! # Parameter Normalizer
//!
//! Pure helpers that turn caller-supplied parameters into upstream query
//! parameters: limit clamping, optional filters, and search-query composition.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::consts::{MAX_LIMIT, MIN_LIMIT};

/// Clamp a requested result count into `[1, 100]`. Out-of-range values are
/// never an error.
pub fn clamp_limit(requested: i64) -> u32 {
  let clamped = requested.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
  u32::try_from(clamped).unwrap_or(MIN_LIMIT)
}

/// A query parameter pair, or `None` when the value is empty or unset.
///
/// Upstream filters treat an absent parameter differently from an empty one,
/// so empty values are never sent.
pub fn optional_param(name: &str, value: Option<&str>) -> Option<(String, String)> {
  value
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(|v| (name.to_string(), v.to_string()))
}

/// Qualifier clauses appended to free-text search
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchQualifiers<'a> {
  pub language: Option<&'a str>,
  pub repo: Option<&'a str>,
  pub user: Option<&'a str>,
}

/// Compose free text with the non-empty qualifiers, in the fixed order
/// `language:`, `repo:`, `user:`.
pub fn build_search_query(free_text: &str, qualifiers: SearchQualifiers<'_>) -> String {
  let clauses = [
    ("language", qualifiers.language),
    ("repo", qualifiers.repo),
    ("user", qualifiers.user),
  ];

  let mut parts = Vec::with_capacity(4);
  let text = free_text.trim();
  if !text.is_empty() {
    parts.push(text.to_string());
  }
  for (name, value) in clauses {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
      parts.push(format!("{name}:{value}"));
    }
  }
  parts.join(" ")
}

/// Qualifiers scoping a search to `repo:owner/name` when both parts are
/// given, or to `user:owner` when only the owner is.
pub fn scope_qualifiers<'a>(owner: &'a str, repo_slug: Option<&'a str>) -> SearchQualifiers<'a> {
  let owner = owner.trim();
  match repo_slug {
    Some(slug) if !owner.is_empty() => SearchQualifiers {
      repo: Some(slug),
      ..SearchQualifiers::default()
    },
    _ if !owner.is_empty() => SearchQualifiers {
      user: Some(owner),
      ..SearchQualifiers::default()
    },
    _ => SearchQualifiers::default(),
  }
}

/// Ordered, de-duplicated upstream query parameters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn param(mut self, name: &str, value: impl Display) -> Self {
    self.0.insert(name.to_string(), value.to_string());
    self
  }

  /// Add `per_page` after clamping.
  pub fn limit(self, requested: i64) -> Self {
    self.param("per_page", clamp_limit(requested))
  }

  pub fn optional(mut self, name: &str, value: Option<&str>) -> Self {
    if let Some((key, value)) = optional_param(name, value) {
      self.0.insert(key, value);
    }
    self
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  pub fn into_inner(self) -> BTreeMap<String, String> {
    self.0
  }
}
