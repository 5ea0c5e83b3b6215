//! The six Linear tools exposed over MCP
//!
//! One module per tool, mirroring the CLI operation set: teams listing,
//! create, update (protocol-only), list, get, and delete.

mod create;
mod delete;
mod get;
mod list;
mod teams;
mod update;

pub use create::CreateIssueTool;
pub use delete::DeleteIssueTool;
pub use get::GetIssueTool;
pub use list::ListIssuesTool;
pub use teams::ListTeamsTool;
pub use update::UpdateIssueTool;

use super::tool_registry::ToolRegistry;

/// Register every Linear tool with the registry
pub fn register_linear_tools(registry: &mut ToolRegistry) {
    registry.register(ListTeamsTool);
    registry.register(CreateIssueTool);
    registry.register(UpdateIssueTool);
    registry.register(ListIssuesTool);
    registry.register(GetIssueTool);
    registry.register(DeleteIssueTool);
}
