//! Tool registry for MCP operations
//!
//! A registry pattern instead of one large match statement: each tool
//! declares its name, description, and JSON schema, and the server
//! dispatches by name.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;

use crate::issues::IssueService;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// The issue service carrying the remote client and default team
    pub service: Arc<IssueService>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(service: Arc<IssueService>) -> Self {
        Self { service }
    }
}

/// Interface implemented by every MCP tool
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// The tool's wire name
    fn name(&self) -> &'static str;

    /// Human-readable description advertised to clients
    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool.
    ///
    /// Operation failures should come back as flagged error content blocks
    /// (`Ok` with `is_error`); an `Err` is reserved for argument validation
    /// and serialization faults, and the server converts it into an error
    /// block as well so a single bad call never kills the transport.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry of MCP tools, keyed by wire name
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All registered tools as `Tool` objects for the list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema),
                    annotations: None,
                }
            })
            .collect()
    }
}

/// Shared helpers for tool implementations
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse the raw argument map into a typed request, rejecting malformed
    /// arguments before any remote call is attempted
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Success response carrying a text content block
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Error response: a text content block flagged as an error
    pub fn create_error_response<T: Into<String>>(message: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: message.into(),
                }),
                None,
            )],
            is_error: Some(true),
        }
    }

    /// Success response with the record serialized as pretty JSON
    pub fn create_json_response<T: serde::Serialize>(
        record: &T,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(record)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(Self::create_success_response(text))
    }
}
