//! MCP server over stdio.
//!
//! Advertises the catalog's tools and routes `tools/call` requests to
//! [`GhostTools`]. Tool failures are returned as results with `isError` set;
//! only an unknown tool name is a protocol error.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use tracing::{info, instrument};

use crate::catalog::{SERVER_NAME, SERVER_VERSION, ToolKind};
use crate::error::{McpServerError, Result};
use crate::tools::{GhostTools, ToolOutput};

const INSTRUCTIONS: &str = "Generic access to the Ghost Admin API. Use ghost_get, ghost_post, \
ghost_put and ghost_delete with an endpoint relative to /ghost/api/admin/ (e.g. \"posts\", \
\"posts/{id}\", \"tags?limit=all\"). Write payloads use Ghost's envelope, e.g. \
{\"posts\": [{...}]}. Call list_tools for parameters and examples.";

/// MCP handler for the Ghost tools.
#[derive(Debug, Clone)]
pub struct GhostMcpServer {
    tools: Arc<GhostTools>,
}

impl GhostMcpServer {
    #[must_use]
    pub fn new(tools: GhostTools) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }

    /// MCP tool definitions derived from the catalog.
    #[must_use]
    pub fn mcp_tools(&self) -> Vec<Tool> {
        self.tools
            .catalog()
            .tools()
            .iter()
            .map(|info| Tool::new(info.name, info.description, Arc::new(info.input_schema())))
            .collect()
    }

    /// Routes one tool call.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` if no tool with this name exists.
    #[instrument(skip(self, arguments))]
    pub async fn handle_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let kind = ToolKind::from_name(name).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown tool: '{name}'"), None)
        })?;

        let arguments = arguments.unwrap_or_default();
        let output = self.tools.execute(kind, &arguments).await;
        Ok(into_call_result(output))
    }

    /// Serves MCP over stdin/stdout until the peer disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the MCP handshake fails or the service task dies.
    pub async fn serve_stdio(self) -> Result<()> {
        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| McpServerError::Service(format!("failed to start MCP service: {e}")))?;

        info!("MCP service ready on stdio");

        let reason = service
            .waiting()
            .await
            .map_err(|e| McpServerError::Service(e.to_string()))?;
        info!("MCP service stopped: {reason:?}");

        Ok(())
    }
}

fn into_call_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.text)];
    if output.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

impl ServerHandler for GhostMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.mcp_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.handle_call(&request.name, request.arguments).await
    }
}
