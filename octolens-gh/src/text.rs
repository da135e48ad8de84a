//! Text shaping helpers shared by the pipelines.
//!
//! All lengths are counted in characters of the decoded text, never in bytes
//! of the transport encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::consts::{BINARY_SENTINEL, SHORT_SHA_LEN};

/// Text cut to a budget, remembering whether anything was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncated {
  pub text: String,
  pub truncated: bool,
}

/// Keep at most `budget` characters of `text`.
pub fn truncate(text: &str, budget: usize) -> Truncated {
  match text.char_indices().nth(budget) {
    Some((cut, _)) => Truncated {
      text: text[..cut].to_string(),
      truncated: true,
    },
    None => Truncated {
      text: text.to_string(),
      truncated: false,
    },
  }
}

/// Truncate without reporting, for one-line listing summaries.
pub fn clip(text: &str, budget: usize) -> String {
  truncate(text, budget).text
}

/// First line of a commit message, clipped.
pub fn headline(message: &str, budget: usize) -> String {
  clip(message.lines().next().unwrap_or_default(), budget)
}

/// The 7-character form of a commit identifier.
pub fn short_sha(sha: &str) -> String {
  clip(sha, SHORT_SHA_LEN)
}

/// Decode upstream file content.
///
/// Base64 payloads arrive wrapped with newlines. Anything that does not
/// decode to UTF-8 text is replaced by [`BINARY_SENTINEL`].
pub fn decode_content(content: &str, encoding: &str) -> String {
  if !encoding.eq_ignore_ascii_case("base64") {
    return content.to_string();
  }

  let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
  STANDARD
    .decode(compact.as_bytes())
    .ok()
    .and_then(|bytes| String::from_utf8(bytes).ok())
    .unwrap_or_else(|| BINARY_SENTINEL.to_string())
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
