//! Result envelopes for MCP tool responses
//!
//! Every tool call answers with a `CallToolResult` carrying a single text
//! block. Failures set `is_error` instead of surfacing a protocol error, so
//! the calling agent sees one uniform shape either way.

use rmcp::{
    model::{CallToolResult, Content, RawContent},
    ErrorData as McpError,
};
use serde::Serialize;

/// Build a success envelope holding pretty-printed JSON of `data`.
///
/// Fails only when `data` cannot be serialized.
pub fn json_success<T: Serialize + ?Sized>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Build a success envelope holding plain text.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Build a failure envelope: one text block with `is_error` set.
///
/// The message is diagnostic only; callers should key off the error flag.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// First text block of an envelope, if any.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
