//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] for stderr logging
//! - **Results**: helpers that build `CallToolResult` envelopes, success and failure alike
//! - **Errors**: [`IntoMcpError`] for the few places a protocol-level error is still wanted
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{error_result, json_success};
//!
//! fn handle(outcome: Result<serde_json::Value, MyError>) -> CallToolResult {
//!     match outcome {
//!         Ok(payload) => json_success(&payload).unwrap_or_else(|e| error_result(e.message)),
//!         Err(e) => error_result(e.to_string()),
//!     }
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{json_kind, EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{IntoMcpError, McpResult};
pub use init::init_tracing;
pub use result::{error_result, json_success, result_text, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
