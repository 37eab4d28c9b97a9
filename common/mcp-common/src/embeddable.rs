//! Embeddable MCP trait for in-process execution
//!
//! Lets a host call an MCP server's tools directly, without spawning it as a
//! subprocess and speaking the protocol over stdio.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use planner_mcp::{Config, PlannerMcpServer};
//!
//! let server = PlannerMcpServer::new(&Config::load()?)?;
//! let tools = server.list_tools()?;
//! let result = server.call_tool("get_next_tasks", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
///
/// These cover faults in the embedding itself. A tool that runs and fails
/// reports through the `is_error` flag of its `CallToolResult` instead.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool arguments were not a JSON object
    #[error("tool arguments must be a JSON object, got {0}")]
    ArgumentsNotObject(&'static str),

    /// Tool metadata could not be rendered
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Name a JSON value's kind for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so concurrent tool calls from
/// several tasks can share one server.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools the server exposes
    fn list_tools(&self) -> EmbeddableResult<Vec<Tool>>;

    /// Execute a tool by name. `params` must be a JSON object or null.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
