//! Parameter types for planner MCP tools
//!
//! Each struct is both the validation schema (via serde) and the
//! advertised input schema (via schemars) for one tool. Unknown fields are
//! ignored so placeholder arguments from older clients still validate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{CommentType, TaskStatus};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Parameters for creating a plan from free text
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreatePlanParams {
    #[schemars(description = "Plan name, a short statement of the plan's overall goal")]
    pub name: String,

    #[schemars(description = "Optional longer description of the plan")]
    pub description: Option<String>,

    #[schemars(description = "Plan text the planner parses into a structured task list")]
    pub text: Option<String>,
}

/// Parameters for adding a comment to a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "ID of the task to comment on")]
    pub task_id: String,

    #[schemars(description = "Comment text")]
    pub content: String,

    #[serde(rename = "type")]
    #[schemars(description = "Comment type, defaults to 'Note'")]
    pub comment_type: Option<CommentType>,
}

/// Parameters for changing a task's status
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskStatusParams {
    #[schemars(description = "ID of the task to update")]
    pub task_id: String,

    #[schemars(description = "New status for the task")]
    pub status: TaskStatus,
}

/// Parameters for removing a comment from a task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveCommentParams {
    #[schemars(description = "ID of the task holding the comment")]
    pub task_id: String,

    #[schemars(description = "ID of the comment to remove")]
    pub comment_id: String,
}

/// Parameters for replacing a comment's content
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditCommentParams {
    #[schemars(description = "ID of the task holding the comment")]
    pub task_id: String,

    #[schemars(description = "ID of the comment to replace")]
    pub comment_id: String,

    #[schemars(description = "Replacement comment text")]
    pub content: String,

    #[serde(rename = "type")]
    #[schemars(description = "Comment type for the replacement, defaults to 'Note'")]
    pub comment_type: Option<CommentType>,
}

/// Parameters for switching the current plan
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetCurrentPlanParams {
    #[schemars(description = "ID of the plan to mark as current")]
    pub plan_id: String,
}

/// Parameters for fetching one task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "ID of the task to fetch from the current plan")]
    pub task_id: String,
}
