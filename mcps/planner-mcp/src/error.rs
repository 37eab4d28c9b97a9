//! Dispatch error taxonomy
//!
//! None of these reach the MCP caller as protocol errors. The dispatcher
//! renders each one into a failure envelope whose text is the `Display`
//! output below.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum DispatchError {
    /// Tool name is not in the registry
    #[error("Unknown tool: {0}")]
    UnknownCommand(String),

    /// Argument bag failed schema validation; no request was sent
    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments {
        command: &'static str,
        reason: String,
    },

    /// The current plan could not be resolved; the dependent request was not sent
    #[error("{command} failed: no current plan ({reason}). Create a plan or set one as current first")]
    NoCurrentPlan {
        command: &'static str,
        reason: String,
    },

    /// The planner API rejected the request or could not be reached
    #[error("{command} failed: {source}")]
    RemoteFailure {
        command: &'static str,
        source: ApiError,
    },

    /// edit_comment removed the old comment but could not create its replacement
    #[error(
        "{command} failed: comment {comment_id} was deleted but the replacement could not be created, \
         so the task no longer has that comment: {source}"
    )]
    PartialEdit {
        command: &'static str,
        comment_id: String,
        source: ApiError,
    },
}

impl DispatchError {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::UnknownCommand(_) => "unknown_command",
            DispatchError::InvalidArguments { .. } => "invalid_arguments",
            DispatchError::NoCurrentPlan { .. } => "no_current_plan",
            DispatchError::RemoteFailure { .. } => "remote_failure",
            DispatchError::PartialEdit { .. } => "partial_edit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_command() {
        let err = DispatchError::RemoteFailure {
            command: "remove_comment",
            source: ApiError::Status {
                status: 404,
                body: "{\"detail\":\"Comment not found\"}".to_string(),
            },
        };
        let text = err.to_string();
        assert!(text.starts_with("remove_comment failed"));
        assert!(text.contains("404"));
        assert!(text.contains("Comment not found"));
        assert_eq!(err.kind(), "remote_failure");
    }

    #[test]
    fn test_unknown_command_message() {
        let err = DispatchError::UnknownCommand("delete_everything".to_string());
        assert_eq!(err.to_string(), "Unknown tool: delete_everything");
    }
}
