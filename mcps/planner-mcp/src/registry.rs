//! Command registry
//!
//! The closed set of tools this server exposes. Each [`Command`] knows its
//! wire name, usage text, parameter schema, and whether it acts on the
//! current plan. [`Command::validate`] turns a loose argument bag into a
//! typed [`Invocation`] before anything touches the network.

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::DispatchError;
use crate::params::*;

/// Every tool the server answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CreatePlan,
    GetCurrentPlanTasks,
    GetNextTasks,
    AddComment,
    UpdateTaskStatus,
    RemoveComment,
    ListPlans,
    SetCurrentPlan,
    GetTask,
    EditComment,
}

/// A command paired with its validated arguments
#[derive(Debug)]
pub enum Invocation {
    CreatePlan(CreatePlanParams),
    GetCurrentPlanTasks,
    GetNextTasks,
    AddComment(AddCommentParams),
    UpdateTaskStatus(UpdateTaskStatusParams),
    RemoveComment(RemoveCommentParams),
    ListPlans,
    SetCurrentPlan(SetCurrentPlanParams),
    GetTask(GetTaskParams),
    EditComment(EditCommentParams),
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::CreatePlan,
        Command::GetCurrentPlanTasks,
        Command::GetNextTasks,
        Command::AddComment,
        Command::UpdateTaskStatus,
        Command::RemoveComment,
        Command::ListPlans,
        Command::SetCurrentPlan,
        Command::GetTask,
        Command::EditComment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::CreatePlan => "create_plan",
            Command::GetCurrentPlanTasks => "get_current_plan_tasks",
            Command::GetNextTasks => "get_next_tasks",
            Command::AddComment => "add_comment",
            Command::UpdateTaskStatus => "update_task_status",
            Command::RemoveComment => "remove_comment",
            Command::ListPlans => "list_plans",
            Command::SetCurrentPlan => "set_current_plan",
            Command::GetTask => "get_task",
            Command::EditComment => "edit_comment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether the command must resolve the current plan before its request
    pub fn needs_current_plan(self) -> bool {
        !matches!(
            self,
            Command::CreatePlan | Command::ListPlans | Command::SetCurrentPlan
        )
    }

    /// Usage text shown to the calling agent in `tools/list`
    pub fn description(self) -> &'static str {
        match self {
            Command::CreatePlan => {
                "Create a new plan and make it the current plan. Give the plan a short name \
                 stating its goal, and optionally plan text, which the planner parses into a \
                 structured task list. Text parses best when each task starts on its own line \
                 (\"Task 1: Design database schema\"), followed by its details and any \
                 \"Depends on Task N\" lines. Returns the created plan, including its generated \
                 ID and tasks."
            }
            Command::GetCurrentPlanTasks => {
                "List every task in the current plan, in task order, with ID, title, \
                 description, status, dependencies and comments. Useful for an overview before \
                 starting work or to check progress. Takes no arguments; fails if no plan is \
                 current."
            }
            Command::GetNextTasks => {
                "List the tasks that should be worked on next in the current plan, chosen by \
                 status and dependencies. Call it after finishing a task or when starting a work \
                 session. Takes no arguments; fails if no plan is current."
            }
            Command::AddComment => {
                "Add a comment to a task in the current plan to record notes, questions, \
                 suggestions or issues. Type is one of Note (default), Question, Suggestion, \
                 Issue, Other. Comments cannot be edited in place; use edit_comment or remove \
                 and re-add."
            }
            Command::UpdateTaskStatus => {
                "Set the status of a task in the current plan. Status is one of Pending, \
                 Working, Pending For Review, Complete, Need Fixed. Move a task to Working when \
                 starting it and to Complete only when it is truly done. Returns the updated \
                 task."
            }
            Command::RemoveComment => {
                "Remove a comment from a task in the current plan, for example once its action \
                 item is done or it has gone stale."
            }
            Command::ListPlans => "List every plan known to the planner, current or not.",
            Command::SetCurrentPlan => {
                "Mark an existing plan as the current plan. Task and comment tools act on the \
                 current plan."
            }
            Command::GetTask => {
                "Fetch a single task from the current plan, including its comments."
            }
            Command::EditComment => {
                "Replace a comment on a task in the current plan. The planner has no update \
                 endpoint for comments, so this deletes the comment and then adds a new one with \
                 the given content; the new comment gets a new ID. If the delete succeeds but \
                 the add fails, the original comment is gone and the error says so."
            }
        }
    }

    /// JSON schema for the command's arguments
    pub fn input_schema(self) -> Result<JsonObject, serde_json::Error> {
        match self {
            Command::CreatePlan => schema_object::<CreatePlanParams>(),
            Command::AddComment => schema_object::<AddCommentParams>(),
            Command::UpdateTaskStatus => schema_object::<UpdateTaskStatusParams>(),
            Command::RemoveComment => schema_object::<RemoveCommentParams>(),
            Command::SetCurrentPlan => schema_object::<SetCurrentPlanParams>(),
            Command::GetTask => schema_object::<GetTaskParams>(),
            Command::EditComment => schema_object::<EditCommentParams>(),
            Command::GetCurrentPlanTasks | Command::GetNextTasks | Command::ListPlans => {
                schema_object::<EmptyParams>()
            }
        }
    }

    /// The command as an MCP tool definition
    pub fn tool(self) -> Result<Tool, serde_json::Error> {
        Ok(Tool::new(
            self.name(),
            self.description(),
            Arc::new(self.input_schema()?),
        ))
    }

    /// Check `args` against the command's schema and produce typed arguments.
    ///
    /// Missing required fields, wrongly typed fields, and enum values outside
    /// their set all fail with `InvalidArguments`.
    pub fn validate(self, args: &JsonObject) -> Result<Invocation, DispatchError> {
        let invocation = match self {
            Command::CreatePlan => Invocation::CreatePlan(self.parse(args)?),
            Command::GetCurrentPlanTasks => {
                self.parse::<EmptyParams>(args)?;
                Invocation::GetCurrentPlanTasks
            }
            Command::GetNextTasks => {
                self.parse::<EmptyParams>(args)?;
                Invocation::GetNextTasks
            }
            Command::AddComment => Invocation::AddComment(self.parse(args)?),
            Command::UpdateTaskStatus => Invocation::UpdateTaskStatus(self.parse(args)?),
            Command::RemoveComment => Invocation::RemoveComment(self.parse(args)?),
            Command::ListPlans => {
                self.parse::<EmptyParams>(args)?;
                Invocation::ListPlans
            }
            Command::SetCurrentPlan => Invocation::SetCurrentPlan(self.parse(args)?),
            Command::GetTask => Invocation::GetTask(self.parse(args)?),
            Command::EditComment => Invocation::EditComment(self.parse(args)?),
        };

        for (field, id) in invocation.path_ids() {
            if matches!(id, "" | "." | "..") {
                return Err(DispatchError::InvalidArguments {
                    command: self.name(),
                    reason: format!("{} {:?} is not a usable identifier", field, id),
                });
            }
        }
        Ok(invocation)
    }

    fn parse<T: DeserializeOwned>(self, args: &JsonObject) -> Result<T, DispatchError> {
        serde_json::from_value(Value::Object(args.clone())).map_err(|e| {
            DispatchError::InvalidArguments {
                command: self.name(),
                reason: e.to_string(),
            }
        })
    }
}

impl Invocation {
    pub fn command(&self) -> Command {
        match self {
            Invocation::CreatePlan(_) => Command::CreatePlan,
            Invocation::GetCurrentPlanTasks => Command::GetCurrentPlanTasks,
            Invocation::GetNextTasks => Command::GetNextTasks,
            Invocation::AddComment(_) => Command::AddComment,
            Invocation::UpdateTaskStatus(_) => Command::UpdateTaskStatus,
            Invocation::RemoveComment(_) => Command::RemoveComment,
            Invocation::ListPlans => Command::ListPlans,
            Invocation::SetCurrentPlan(_) => Command::SetCurrentPlan,
            Invocation::GetTask(_) => Command::GetTask,
            Invocation::EditComment(_) => Command::EditComment,
        }
    }

    /// Caller-supplied IDs that end up as URL path segments.
    ///
    /// URL normalization rewrites empty, `.` and `..` segments, so those
    /// values are refused rather than sent.
    fn path_ids(&self) -> Vec<(&'static str, &str)> {
        match self {
            Invocation::AddComment(p) => vec![("task_id", p.task_id.as_str())],
            Invocation::UpdateTaskStatus(p) => vec![("task_id", p.task_id.as_str())],
            Invocation::RemoveComment(p) => vec![
                ("task_id", p.task_id.as_str()),
                ("comment_id", p.comment_id.as_str()),
            ],
            Invocation::EditComment(p) => vec![
                ("task_id", p.task_id.as_str()),
                ("comment_id", p.comment_id.as_str()),
            ],
            Invocation::SetCurrentPlan(p) => vec![("plan_id", p.plan_id.as_str())],
            Invocation::GetTask(p) => vec![("task_id", p.task_id.as_str())],
            Invocation::CreatePlan(_)
            | Invocation::GetCurrentPlanTasks
            | Invocation::GetNextTasks
            | Invocation::ListPlans => Vec::new(),
        }
    }
}

/// All tool definitions, in registry order
pub fn tools() -> Result<Vec<Tool>, serde_json::Error> {
    Command::ALL.into_iter().map(Command::tool).collect()
}

fn schema_object<T: JsonSchema>() -> Result<JsonObject, serde_json::Error> {
    let schema = schemars::schema_for!(T);
    serde_json::from_value(serde_json::to_value(schema)?)
}
