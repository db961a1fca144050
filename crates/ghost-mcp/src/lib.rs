//! # ghost-mcp
//!
//! MCP server exposing generic Ghost Admin API verbs as tools:
//!
//! - `ghost_get{endpoint}`, `ghost_post{endpoint, data}`,
//!   `ghost_put{endpoint, data}`, `ghost_delete{endpoint}`
//! - `list_tools{}`: a static description of all tools
//!
//! Every tool answers with a JSON envelope, `{success: true, data}` or
//! `{success: false, error, details}`. Requests are dispatched through
//! [`ghost_client::GhostClient`].

pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod server;
pub mod tools;

pub use catalog::{ToolCatalog, ToolInfo, ToolKind};
pub use config::{ConfigOverrides, ServerConfig};
pub use envelope::{ListToolsResponse, ToolEnvelope};
pub use error::{McpServerError, Result};
pub use server::GhostMcpServer;
pub use tools::{GhostTools, ToolOutput};
