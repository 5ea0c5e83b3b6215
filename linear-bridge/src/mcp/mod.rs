//! Model Context Protocol (MCP) server support
//!
//! Exposes the issue operations as six named tools over an rmcp stdio
//! server. Tool failures, schema validation and remote errors alike, come
//! back as flagged error content blocks; the server process only dies on
//! transport-level faults.

pub mod tool_registry;
pub mod tools;
pub mod types;

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use crate::issues::IssueService;
use tool_registry::{BaseToolImpl, ToolContext, ToolRegistry};

/// MCP server over the Linear issue operations
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server wrapping the given issue service
    pub fn new(service: IssueService) -> Self {
        let mut registry = ToolRegistry::new();
        tools::register_linear_tools(&mut registry);

        Self {
            registry: Arc::new(registry),
            context: Arc::new(ToolContext::new(Arc::new(service))),
        }
    }

    /// Dispatch one tool call by name.
    ///
    /// Always yields a `CallToolResult`: unknown tools, invalid arguments,
    /// and operation failures all become flagged error blocks so a single
    /// bad call never terminates the server.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> CallToolResult {
        let Some(tool) = self.registry.get(name) else {
            return BaseToolImpl::create_error_response(format!("Error: Unknown tool: {name}"));
        };

        match tool.execute(arguments, &self.context).await {
            Ok(result) => result,
            Err(e) => BaseToolImpl::create_error_response(format!("Error: {e}")),
        }
    }

    fn instructions() -> String {
        "A Linear issue-tracking bridge. Use linear_list_teams to find team IDs, \
         linear_create_issue / linear_update_issue to write issues, and \
         linear_list_issues / linear_get_issue / linear_delete_issue to read and \
         remove them. Loose names for status, project, assignee, and labels are \
         resolved to identifiers automatically."
            .into()
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability { list_changed: None }),
            resources: None,
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(InitializeResult {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "linear-bridge".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(Self::instructions()),
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .dispatch(&request.name, request.arguments.unwrap_or_default())
            .await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: "linear-bridge".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(Self::instructions()),
        }
    }
}
