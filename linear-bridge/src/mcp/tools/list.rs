//! Issue listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListIssuesRequest;

/// Tool for listing issues from the configured team
pub struct ListIssuesTool;

#[async_trait]
impl McpTool for ListIssuesTool {
    fn name(&self) -> &'static str {
        "linear_list_issues"
    }

    fn description(&self) -> &'static str {
        "List Linear issues from the configured team. Supports filtering by status and \
         assignee. Returns up to 50 issues by default (configurable with limit)."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "description": "Filter by status/state name"
                },
                "limit": {
                    "type": "number",
                    "description": "Maximum number of issues to return (default: 50)"
                },
                "assigneeId": {
                    "type": "string",
                    "description": "Filter by assignee ID"
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListIssuesRequest = BaseToolImpl::parse_arguments(arguments)?;

        match context.service.list(request.into()).await {
            Ok(issues) => BaseToolImpl::create_json_response(&issues),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
