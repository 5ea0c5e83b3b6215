//! Entity types exchanged with the remote service
//!
//! These are transient, request-scoped copies of remote entities; nothing in
//! this crate persists them.

use serde::{Deserialize, Serialize};

/// A Linear team
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    /// Durable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short key prefixed onto issue identifiers (e.g. `ENG`)
    pub key: String,
}

/// A workflow state ("status"), scoped to a team
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowState {
    /// Durable identifier
    pub id: String,
    /// State name (e.g. `Todo`, `In Progress`)
    pub name: String,
}

/// A project
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Durable identifier
    pub id: String,
    /// Project name
    pub name: String,
}

/// A workspace user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Durable identifier
    pub id: String,
    /// Account name
    pub name: String,
    /// Display name
    pub display_name: String,
    /// Email address, when visible to the credential
    pub email: Option<String>,
}

/// An issue label, scoped to a team
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// Durable identifier
    pub id: String,
    /// Label name
    pub name: String,
}

/// The state reference embedded in an issue
#[derive(Debug, Clone, Deserialize)]
pub struct StateRef {
    /// Durable identifier
    pub id: String,
    /// State name
    pub name: String,
}

/// The assignee reference embedded in an issue
#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    /// Durable identifier
    pub id: String,
    /// Account name
    pub name: String,
    /// Email address
    pub email: Option<String>,
}

/// An issue as returned by the remote service
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Opaque identifier
    pub id: String,
    /// Human identifier (e.g. `ABC-123`)
    pub identifier: String,
    /// Title
    pub title: String,
    /// Markdown description
    pub description: Option<String>,
    /// Web URL
    pub url: String,
    /// Priority: 1 urgent through 4 low; 0 or absent means unset
    pub priority: Option<u8>,
    /// Workflow state reference
    pub state: Option<StateRef>,
    /// Assignee reference
    pub assignee: Option<UserRef>,
}

/// Outbound payload for issue create/update mutations.
///
/// Every field is optional and unset fields are omitted from the JSON
/// entirely, so a partial update sends exactly the provided fields and a
/// create without priority carries no `priority` key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueInput {
    /// Owning team (required by the create mutation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// Issue title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Numeric priority, 1 through 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Resolved workflow state identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    /// Resolved project identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Resolved assignee identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Resolved label identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_input_omits_unset_fields() {
        let input = IssueInput {
            team_id: Some("team-1".to_string()),
            title: Some("X".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("priority"));
        assert!(!object.contains_key("labelIds"));
    }

    #[test]
    fn issue_input_uses_camel_case_on_the_wire() {
        let input = IssueInput {
            team_id: Some("team-1".to_string()),
            state_id: Some("state-1".to_string()),
            label_ids: Some(vec!["label-1".to_string()]),
            ..Default::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("teamId").is_some());
        assert!(value.get("stateId").is_some());
        assert_eq!(value["labelIds"][0], "label-1");
    }

    #[test]
    fn issue_deserializes_nested_refs() {
        let issue: Issue = serde_json::from_str(
            r#"{
                "id": "uuid-1",
                "identifier": "ENG-42",
                "title": "Fix login",
                "description": null,
                "url": "https://linear.app/issue/ENG-42",
                "priority": 2,
                "state": {"id": "state-1", "name": "Todo"},
                "assignee": {"id": "user-1", "name": "alice", "email": "alice@example.com"}
            }"#,
        )
        .unwrap();

        assert_eq!(issue.identifier, "ENG-42");
        assert_eq!(issue.state.unwrap().name, "Todo");
        assert_eq!(issue.assignee.unwrap().email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn user_deserializes_display_name() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "name": "alice", "displayName": "Alice W", "email": null}"#,
        )
        .unwrap();
        assert_eq!(user.display_name, "Alice W");
        assert_eq!(user.email, None);
    }
}
