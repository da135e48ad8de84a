//! Structured response envelope for octolens-mcp tools.
//!
//! A successful tool returns its record unchanged. A failed one returns
//! `{"error": {"kind", "message", "status"?}}` and sets `is_error`.

use octolens_gh::{ErrorRecord, GatewayError};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Result of a tool invocation: the record, or the classified failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolResponse<T: Serialize> {
  Ok(T),
  Error { error: ErrorRecord },
}

impl<T: Serialize> ToolResponse<T> {
  /// The single conversion from a pipeline result into a tool response.
  pub fn from_result(result: Result<T, GatewayError>) -> Self {
    match result {
      Ok(record) => Self::Ok(record),
      Err(err) => {
        warn!("Tool failed with {:?}: {}", err.kind(), err);
        Self::Error {
          error: err.to_record(),
        }
      }
    }
  }

  pub const fn is_error(&self) -> bool {
    matches!(self, Self::Error { .. })
  }

  /// Serialize to a `CallToolResult`, setting `is_error` for error responses.
  pub fn to_call_tool_result(&self) -> CallToolResult {
    let json = serde_json::to_string_pretty(self).unwrap_or_else(|e| {
      format!(r#"{{"error":{{"kind":"RequestFailed","message":"Serialization failed: {e}"}}}}"#)
    });
    let mut result = CallToolResult::success(vec![Content::text(json)]);
    result.is_error = Some(self.is_error());
    result
  }

  /// Wrap for returning from a tool handler. Gateway failures are tool
  /// results, never protocol errors.
  pub fn into_result(self) -> Result<CallToolResult, McpError> {
    Ok(self.to_call_tool_result())
  }
}
