//! Issue deletion tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteIssueRequest;

/// Tool for deleting an issue
pub struct DeleteIssueTool;

#[async_trait]
impl McpTool for DeleteIssueTool {
    fn name(&self) -> &'static str {
        "linear_delete_issue"
    }

    fn description(&self) -> &'static str {
        "Permanently delete a Linear issue by ID or identifier. This action cannot be \
         undone. Use with caution."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID or identifier to delete"
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
        let request: DeleteIssueRequest = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!(issue_id = %request.issue_id, "deleting issue via MCP");

        match context.service.delete(&request.issue_id).await {
            Ok(outcome) => BaseToolImpl::create_json_response(&outcome),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
