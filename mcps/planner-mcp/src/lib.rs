//! Planner MCP Library
//!
//! MCP tools for plan and task management, relayed to an external planner
//! REST API. The planner owns all plan state; this crate validates tool
//! arguments, resolves the current plan, and forwards one request per call.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use planner_mcp::{Config, PlannerMcpServer};
//!
//! let server = PlannerMcpServer::new(&Config::load()?)?;
//! // Serve via stdio, or call tools in-process through EmbeddableMcp
//! ```
//!
//! # Configuration
//! Set `API_BASE_URL` (default `http://localhost:8000`).

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod params;
pub mod registry;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::PlannerMcpServer;

pub use config::Config;
pub use dispatch::{Dispatcher, Outcome};
pub use error::DispatchError;
pub use registry::Command;

// Re-export parameter types for direct API usage
pub use params::*;
