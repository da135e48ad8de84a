//! # Gateway Errors
//!
//! The single error taxonomy shared by the dispatcher and every pipeline,
//! plus the serializable [`ErrorRecord`] callers receive in place of data.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Classified failure of a gateway invocation. None of these are retried.
#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("Repository or resource not found: {path}")]
  NotFound { path: String },

  #[error("Rate limit exceeded or access forbidden. Consider setting GITHUB_TOKEN for a higher rate limit.")]
  RateLimitedOrForbidden { body: String },

  #[error("Authentication failed. Please check the GITHUB_TOKEN credential.")]
  AuthenticationFailed,

  #[error("Validation failed: {body}")]
  ValidationFailed { body: String },

  #[error("GitHub API error {status}: {body}")]
  UpstreamError { status: u16, body: String },

  #[error("Request failed: {0}")]
  RequestFailed(String),
}

/// Machine-readable name of a [`GatewayError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
  NotFound,
  RateLimitedOrForbidden,
  AuthenticationFailed,
  ValidationFailed,
  UpstreamError,
  RequestFailed,
}

/// Caller-facing description of a failed invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
  pub kind: ErrorKind,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<u16>,
}

impl GatewayError {
  /// Classify a non-success upstream status.
  pub fn from_status(status: StatusCode, path: &str, body: String) -> Self {
    match status {
      StatusCode::NOT_FOUND => Self::NotFound { path: path.to_string() },
      StatusCode::FORBIDDEN => Self::RateLimitedOrForbidden { body },
      StatusCode::UNAUTHORIZED => Self::AuthenticationFailed,
      StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed { body },
      other => Self::UpstreamError {
        status: other.as_u16(),
        body,
      },
    }
  }

  pub fn request_failed(message: impl Into<String>) -> Self {
    Self::RequestFailed(message.into())
  }

  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::NotFound { .. } => ErrorKind::NotFound,
      Self::RateLimitedOrForbidden { .. } => ErrorKind::RateLimitedOrForbidden,
      Self::AuthenticationFailed => ErrorKind::AuthenticationFailed,
      Self::ValidationFailed { .. } => ErrorKind::ValidationFailed,
      Self::UpstreamError { .. } => ErrorKind::UpstreamError,
      Self::RequestFailed(_) => ErrorKind::RequestFailed,
    }
  }

  /// Upstream HTTP status, when the failure came from one
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::NotFound { .. } => Some(404),
      Self::RateLimitedOrForbidden { .. } => Some(403),
      Self::AuthenticationFailed => Some(401),
      Self::ValidationFailed { .. } => Some(422),
      Self::UpstreamError { status, .. } => Some(*status),
      Self::RequestFailed(_) => None,
    }
  }

  pub fn to_record(&self) -> ErrorRecord {
    ErrorRecord {
      kind: self.kind(),
      message: self.to_string(),
      status: self.status(),
    }
  }
}

impl From<reqwest::Error> for GatewayError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Self::RequestFailed(format!("request timed out: {err}"))
    } else {
      Self::RequestFailed(err.to_string())
    }
  }
}

impl From<serde_json::Error> for GatewayError {
  fn from(err: serde_json::Error) -> Self {
    Self::RequestFailed(format!("failed to decode GitHub response: {err}"))
  }
}

/// Result alias used across the gateway
pub type Result<T, E = GatewayError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_classification() {
    let cases = [
      (StatusCode::NOT_FOUND, ErrorKind::NotFound),
      (StatusCode::FORBIDDEN, ErrorKind::RateLimitedOrForbidden),
      (StatusCode::UNAUTHORIZED, ErrorKind::AuthenticationFailed),
      (StatusCode::UNPROCESSABLE_ENTITY, ErrorKind::ValidationFailed),
      (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::UpstreamError),
      (StatusCode::BAD_GATEWAY, ErrorKind::UpstreamError),
    ];

    for (status, expected) in cases {
      let err = GatewayError::from_status(status, "repos/o/r", String::new());
      assert_eq!(err.kind(), expected, "status {status}");
      assert_eq!(err.status(), Some(status.as_u16()));
    }
  }

  #[test]
  fn test_not_found_message_includes_path() {
    let err = GatewayError::from_status(StatusCode::NOT_FOUND, "repos/octocat/missing", String::new());
    assert!(err.to_string().contains("repos/octocat/missing"));
  }

  #[test]
  fn test_forbidden_message_recommends_token() {
    let err = GatewayError::from_status(StatusCode::FORBIDDEN, "rate_limit", String::new());
    assert!(err.to_string().contains("GITHUB_TOKEN"));
  }

  #[test]
  fn test_upstream_and_validation_messages_include_body() {
    let err = GatewayError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "search/code", "bad q".to_string());
    assert!(err.to_string().contains("bad q"));

    let err = GatewayError::from_status(StatusCode::SERVICE_UNAVAILABLE, "x", "try later".to_string());
    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("try later"));
  }

  #[test]
  fn test_error_record_serialization() {
    let record = GatewayError::request_failed("connection refused").to_record();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["kind"], "RequestFailed");
    assert_eq!(json["message"], "Request failed: connection refused");
    assert!(json.get("status").is_none());

    let record = GatewayError::from_status(StatusCode::NOT_FOUND, "users/ghost", String::new()).to_record();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["kind"], "NotFound");
    assert_eq!(json["status"], 404);
  }
}
