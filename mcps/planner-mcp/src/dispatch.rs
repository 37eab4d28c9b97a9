//! Tool dispatcher
//!
//! Takes a tool name and a loose argument bag, validates it, resolves the
//! current plan when the command needs one, sends the command's request to
//! the planner API, and wraps whatever comes back in a result envelope.
//! Nothing is cached between calls: the current plan is looked up again on
//! every call that needs it.

use mcp_common::{error_result, json_success, text_success, CallToolResult};
use rmcp::model::JsonObject;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::api::{ApiPath, ApiRequest, ApiTransport};
use crate::error::DispatchError;
use crate::params::EditCommentParams;
use crate::registry::{Command, Invocation};

/// Notice returned when the current plan has no tasks
pub const NO_PLAN_TASKS_NOTICE: &str =
    "No tasks found in the current plan. Every task may already be complete, or none have been created yet.";

/// Notice returned when the planner has nothing to suggest next
pub const NO_NEXT_TASKS_NOTICE: &str =
    "No tasks available to work on next. Every task may already be complete, or none have been created yet.";

/// What a successful command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Planner API payload, passed through verbatim
    Payload(Value),
    /// Fixed text standing in for an empty result
    Notice(&'static str),
}

/// The plan the planner currently marks as active
#[derive(Debug, Clone)]
pub struct CurrentPlan {
    pub id: String,
    /// Full plan document as returned by `GET /plans/current`
    pub document: Value,
}

/// Routes tool calls to the planner API
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn ApiTransport>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    /// Run a tool call and always produce an envelope.
    ///
    /// Every failure, from an unknown tool name to a planner outage, comes
    /// back as an envelope with `is_error` set.
    #[instrument(skip(self, args), fields(tool = %name))]
    pub async fn dispatch(&self, name: &str, args: Option<JsonObject>) -> CallToolResult {
        match self.try_dispatch(name, args).await {
            Ok(Outcome::Payload(payload)) => json_success(&payload)
                .unwrap_or_else(|e| error_result(format!("{} failed: {}", name, e.message))),
            Ok(Outcome::Notice(notice)) => text_success(notice),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "tool call failed");
                error_result(e.to_string())
            }
        }
    }

    /// Run a tool call, keeping the typed error.
    pub async fn try_dispatch(
        &self,
        name: &str,
        args: Option<JsonObject>,
    ) -> Result<Outcome, DispatchError> {
        let command = Command::from_name(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        let invocation = command.validate(&args.unwrap_or_default())?;

        info!("dispatching {}", command.name());
        self.execute(invocation).await
    }

    async fn execute(&self, invocation: Invocation) -> Result<Outcome, DispatchError> {
        let command = invocation.command();

        match invocation {
            Invocation::CreatePlan(params) => {
                let body = json!({
                    "name": params.name,
                    "text": params.text.unwrap_or_default(),
                });
                self.send(command, ApiRequest::post("/plans/from-text", body))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::GetCurrentPlanTasks => {
                // The lookup response is the plan itself, tasks included.
                let mut plan = self.current_plan(command).await?;
                match plan.document.get_mut("tasks").map(Value::take) {
                    Some(Value::Array(tasks)) if !tasks.is_empty() => {
                        Ok(Outcome::Payload(Value::Array(tasks)))
                    }
                    _ => Ok(Outcome::Notice(NO_PLAN_TASKS_NOTICE)),
                }
            }

            Invocation::GetNextTasks => {
                self.current_plan(command).await?;
                let tasks = self
                    .send(command, ApiRequest::get("/plans/next-tasks"))
                    .await?;
                if is_empty_listing(&tasks) {
                    Ok(Outcome::Notice(NO_NEXT_TASKS_NOTICE))
                } else {
                    Ok(Outcome::Payload(tasks))
                }
            }

            Invocation::AddComment(params) => {
                let plan = self.current_plan(command).await?;
                let body = json!({
                    "content": params.content,
                    "type": params.comment_type.unwrap_or_default(),
                });
                let path = ApiPath::from_segments([
                    "plans",
                    plan.id.as_str(),
                    "tasks",
                    params.task_id.as_str(),
                    "comments",
                ]);
                self.send(command, ApiRequest::post(path, body))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::UpdateTaskStatus(params) => {
                let plan = self.current_plan(command).await?;
                let body = json!({ "status": params.status });
                let path = ApiPath::from_segments([
                    "plans",
                    plan.id.as_str(),
                    "tasks",
                    params.task_id.as_str(),
                    "status",
                ]);
                self.send(command, ApiRequest::put(path, Some(body)))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::RemoveComment(params) => {
                let plan = self.current_plan(command).await?;
                let path = ApiPath::from_segments([
                    "plans",
                    plan.id.as_str(),
                    "tasks",
                    params.task_id.as_str(),
                    "comments",
                    params.comment_id.as_str(),
                ]);
                self.send(command, ApiRequest::delete(path))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::ListPlans => self
                .send(command, ApiRequest::get("/plans/"))
                .await
                .map(Outcome::Payload),

            Invocation::SetCurrentPlan(params) => {
                let path =
                    ApiPath::from_segments(["plans", params.plan_id.as_str(), "set-current"]);
                self.send(command, ApiRequest::put(path, None))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::GetTask(params) => {
                let plan = self.current_plan(command).await?;
                let path = ApiPath::from_segments([
                    "plans",
                    plan.id.as_str(),
                    "tasks",
                    params.task_id.as_str(),
                ]);
                self.send(command, ApiRequest::get(path))
                    .await
                    .map(Outcome::Payload)
            }

            Invocation::EditComment(params) => self.edit_comment(command, params).await,
        }
    }

    /// Delete the old comment, then create its replacement.
    ///
    /// Not atomic: the create only runs after the delete succeeded, and a
    /// failed create leaves the task without the comment.
    async fn edit_comment(
        &self,
        command: Command,
        params: EditCommentParams,
    ) -> Result<Outcome, DispatchError> {
        let plan = self.current_plan(command).await?;
        let comments = [
            "plans",
            plan.id.as_str(),
            "tasks",
            params.task_id.as_str(),
            "comments",
        ];

        let mut target = comments.to_vec();
        target.push(params.comment_id.as_str());
        self.send(command, ApiRequest::delete(ApiPath::from_segments(target)))
            .await?;

        let body = json!({
            "content": params.content,
            "type": params.comment_type.unwrap_or_default(),
        });
        let create = ApiRequest::post(ApiPath::from_segments(comments), body);
        match self.api.send(create).await {
            Ok(created) => Ok(Outcome::Payload(created)),
            Err(source) => {
                warn!(
                    comment_id = %params.comment_id,
                    "comment deleted but replacement was not created"
                );
                Err(DispatchError::PartialEdit {
                    command: command.name(),
                    comment_id: params.comment_id,
                    source,
                })
            }
        }
    }

    /// Resolve the current plan through `GET /plans/current`.
    ///
    /// Any failure, including a planner API error, counts as "no current plan".
    pub async fn current_plan(&self, command: Command) -> Result<CurrentPlan, DispatchError> {
        let no_plan = |reason: String| DispatchError::NoCurrentPlan {
            command: command.name(),
            reason,
        };

        let document = self
            .api
            .send(ApiRequest::get("/plans/current"))
            .await
            .map_err(|e| no_plan(format!("lookup failed: {}", e)))?;

        match document.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => Ok(CurrentPlan {
                id: id.to_string(),
                document,
            }),
            _ => Err(no_plan("the planner has no plan marked as current".to_string())),
        }
    }

    async fn send(&self, command: Command, request: ApiRequest) -> Result<Value, DispatchError> {
        self.api
            .send(request)
            .await
            .map_err(|source| DispatchError::RemoteFailure {
                command: command.name(),
                source,
            })
    }
}

fn is_empty_listing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
