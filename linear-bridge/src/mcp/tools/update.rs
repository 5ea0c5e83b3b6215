//! Issue update tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::UpdateIssueRequest;

/// Tool for partially updating an existing issue
pub struct UpdateIssueTool;

#[async_trait]
impl McpTool for UpdateIssueTool {
    fn name(&self) -> &'static str {
        "linear_update_issue"
    }

    fn description(&self) -> &'static str {
        "Update an existing Linear issue. Requires issue ID or identifier (e.g., \"ABC-123\"). \
         All other fields are optional and will only update if provided."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID or identifier (e.g., \"ABC-123\")"
                },
                "title": {
                    "type": "string",
                    "description": "New issue title"
                },
                "description": {
                    "type": "string",
                    "description": "New issue description in markdown"
                },
                "priority": {
                    "type": "string",
                    "enum": ["urgent", "high", "medium", "low"],
                    "description": "New priority"
                },
                "status": {
                    "type": "string",
                    "description": "New status/state name"
                },
                "project": {
                    "type": "string",
                    "description": "New project name or ID"
                },
                "assignee": {
                    "type": "string",
                    "description": "New assignee username, email, or display name"
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "New array of label/tag names"
                }
            },
            "required": ["issueId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: UpdateIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_id = %request.issue_id, "updating issue via MCP");

        match context.service.update(request.into()).await {
            Ok(issue) => BaseToolImpl::create_json_response(&issue),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
