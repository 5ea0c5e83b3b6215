//! Single-issue fetch tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetIssueRequest;

/// Tool for fetching one issue with full details
pub struct GetIssueTool;

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "linear_get_issue"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific Linear issue by ID or identifier \
         (e.g., \"ABC-123\"). Returns full issue details including description, state, \
         priority, and assignee."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID or identifier (e.g., \"ABC-123\")"
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
        let request: GetIssueRequest = BaseToolImpl::parse_arguments(arguments)?;

        match context.service.get(&request.issue_id).await {
            Ok(issue) => BaseToolImpl::create_json_response(&issue),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
