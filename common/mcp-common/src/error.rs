//! Protocol-level error helpers
//!
//! Tool failures travel inside the result envelope (see [`crate::result`]).
//! `McpError` is reserved for faults in the protocol layer itself, such as a
//! tool schema that cannot be rendered for `tools/list`.

use rmcp::ErrorData as McpError;

/// Type alias for MCP handler results
pub type McpResult<T> = Result<T, McpError>;

/// Convert an error into an MCP internal error.
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(err.into_mcp_error().message.contains("JSON error"));
    }
}
