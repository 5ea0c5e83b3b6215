//! Request types for the MCP tools
//!
//! Field names follow the wire contract of the tool schemas (camelCase for
//! the multi-word identifiers), and each type converts into the operation
//! parameters the issue service takes.

use serde::{Deserialize, Serialize};

use crate::issues::{CreateIssueParams, ListIssuesParams, Priority, UpdateIssueParams};

/// Arguments for `linear_create_issue`
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreateIssueRequest {
    /// Issue title (required)
    pub title: String,
    /// Issue description in markdown
    pub description: Option<String>,
    /// Issue priority
    pub priority: Option<Priority>,
    /// Status/state name (e.g. "Todo", "In Progress")
    pub status: Option<String>,
    /// Project name or ID
    pub project: Option<String>,
    /// Assignee username, email, or display name
    pub assignee: Option<String>,
    /// Label/tag names
    pub labels: Option<Vec<String>>,
}

impl From<CreateIssueRequest> for CreateIssueParams {
    fn from(request: CreateIssueRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: request.status,
            project: request.project,
            assignee: request.assignee,
            labels: request.labels.unwrap_or_default(),
        }
    }
}

/// Arguments for `linear_update_issue`
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueRequest {
    /// Issue ID or identifier (e.g. "ABC-123")
    pub issue_id: String,
    /// New issue title
    pub title: Option<String>,
    /// New issue description in markdown
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New status/state name
    pub status: Option<String>,
    /// New project name or ID
    pub project: Option<String>,
    /// New assignee username, email, or display name
    pub assignee: Option<String>,
    /// New label/tag names
    pub labels: Option<Vec<String>>,
}

impl From<UpdateIssueRequest> for UpdateIssueParams {
    fn from(request: UpdateIssueRequest) -> Self {
        Self {
            issue_id: request.issue_id,
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: request.status,
            project: request.project,
            assignee: request.assignee,
            labels: request.labels,
        }
    }
}

/// Arguments for `linear_list_issues`
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListIssuesRequest {
    /// Filter by status/state name
    pub status: Option<String>,
    /// Maximum number of issues to return (default: 50)
    pub limit: Option<u32>,
    /// Filter by assignee ID
    pub assignee_id: Option<String>,
}

impl From<ListIssuesRequest> for ListIssuesParams {
    fn from(request: ListIssuesRequest) -> Self {
        Self {
            status: request.status,
            limit: request.limit,
            assignee_id: request.assignee_id,
        }
    }
}

/// Arguments for `linear_get_issue`
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueRequest {
    /// Issue ID or identifier (e.g. "ABC-123")
    pub issue_id: String,
}

/// Arguments for `linear_delete_issue`
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIssueRequest {
    /// Issue ID or identifier to delete
    pub issue_id: String,
}
