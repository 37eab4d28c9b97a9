//! Planner MCP Server
//!
//! Relays plan and task tools to the planner REST API over stdio.
//!
//! # Configuration
//! Set `API_BASE_URL` (default `http://localhost:8000`).

use planner_mcp::{Config, PlannerMcpServer};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("planner_mcp")?;

    tracing::info!("Starting Planner MCP Server");

    let config = Config::load()?;
    tracing::info!("Planner API URL: {}", config.api.base_url);

    let server = PlannerMcpServer::new(&config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
