//! MCP Server implementation
//!
//! `ServerHandler` is implemented by hand rather than through
//! `#[tool_router]`: tool names and schemas come from the registry, and
//! every call, unknown tools included, is answered with an envelope from the
//! dispatcher instead of a protocol error.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use mcp_common::{
    json_kind, EmbeddableError, EmbeddableMcp, EmbeddableResult, IntoMcpError, McpResult,
};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use serde_json::Value;

use crate::api::{ApiTransport, HttpTransport};
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::registry;

/// The planner MCP server
#[derive(Clone)]
pub struct PlannerMcpServer {
    dispatcher: Dispatcher,
}

impl PlannerMcpServer {
    /// Build a server that talks to the planner API over HTTP.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&config.api)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build a server on top of any transport.
    pub fn with_transport(api: Arc<dyn ApiTransport>) -> Self {
        tracing::info!("Relaying planner tools to {}", api.base_url());
        Self {
            dispatcher: Dispatcher::new(api),
        }
    }
}

impl ServerHandler for PlannerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Planner MCP Server - manages project plans and their tasks through the planner \
                 API. Create a plan from text with create_plan, then use get_next_tasks to pick \
                 work, update_task_status to track progress, and add_comment to record notes. \
                 Task and comment tools act on the current plan."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = McpResult<ListToolsResult>> + Send + '_ {
        std::future::ready(
            registry::tools()
                .map(ListToolsResult::with_all_items)
                .map_err(IntoMcpError::into_mcp_error),
        )
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = McpResult<CallToolResult>> + Send + '_ {
        async move {
            Ok(self
                .dispatcher
                .dispatch(&request.name, request.arguments)
                .await)
        }
    }
}

#[async_trait]
impl EmbeddableMcp for PlannerMcpServer {
    fn server_name(&self) -> &str {
        "planner-mcp"
    }

    fn list_tools(&self) -> EmbeddableResult<Vec<Tool>> {
        registry::tools().map_err(|e| EmbeddableError::McpError(e.to_string()))
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let args = match params {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => return Err(EmbeddableError::ArgumentsNotObject(json_kind(&other))),
        };
        Ok(self.dispatcher.dispatch(name, args).await)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }
}
