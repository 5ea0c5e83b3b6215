//! Team listing tool

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for listing all visible teams
pub struct ListTeamsTool;

#[async_trait]
impl McpTool for ListTeamsTool {
    fn name(&self) -> &'static str {
        "linear_list_teams"
    }

    fn description(&self) -> &'static str {
        "List all Linear teams you have access to. Use this to find team IDs and keys. \
         No parameters required."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match context.service.list_teams().await {
            Ok(teams) => BaseToolImpl::create_json_response(&teams),
            Err(e) => Ok(BaseToolImpl::create_error_response(format!("Error: {e}"))),
        }
    }
}
