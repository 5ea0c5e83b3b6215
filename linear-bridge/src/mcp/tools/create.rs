//! Issue creation tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateIssueRequest;

/// Tool for creating a new issue in the configured team
pub struct CreateIssueTool;

#[async_trait]
impl McpTool for CreateIssueTool {
    fn name(&self) -> &'static str {
        "linear_create_issue"
    }

    fn description(&self) -> &'static str {
        "Create a new Linear issue. Title is required, all other fields are optional. \
         Supports priorities (urgent/high/medium/low), status, project assignment, \
         assignee, and labels."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Issue title (required)"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description in markdown"
                },
                "priority": {
                    "type": "string",
                    "enum": ["urgent", "high", "medium", "low"],
                    "description": "Issue priority"
                },
                "status": {
                    "type": "string",
                    "description": "Status/state name (e.g., \"Todo\", \"In Progress\")"
                },
                "project": {
                    "type": "string",
                    "description": "Project name or ID"
                },
                "assignee": {
                    "type": "string",
                    "description": "Assignee username, email, or display name"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Array of label/tag names"
                }
            },
            "required": ["title"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(title = %request.title, "creating issue via MCP");

        match context.service.create(request.into()).await {
            Ok(issue) => BaseToolImpl::create_json_response(&issue),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
