//! Issue operations orchestrated over the remote client
//!
//! Every operation is one independent request/response exchange: resolve the
//! loose names the caller supplied (sequentially; the lookups are
//! independent, so order does not affect the merged payload), issue the
//! remote call, and flatten the result into a displayable record. There is
//! no cross-call session state.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{IssueInput, LinearClient, Team};
use crate::config::TEAM_ID_VAR;
use crate::error::{LinearBridgeError, Result};
use crate::resolver;

/// Default page size for [`IssueService::list`]
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Issue priority, a closed enumeration mapped onto Linear's 1–4 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Maps to 1
    Urgent,
    /// Maps to 2
    High,
    /// Maps to 3
    Medium,
    /// Maps to 4
    Low,
}

impl Priority {
    /// The numeric value the remote API expects
    pub fn as_value(self) -> u8 {
        match self {
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

impl FromStr for Priority {
    type Err = LinearBridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "urgent" => Ok(Priority::Urgent),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(LinearBridgeError::Api(format!(
                "invalid priority '{other}' (expected urgent, high, medium, or low)"
            ))),
        }
    }
}

/// Parameters for creating an issue.
///
/// Only the title is required. Optional attributes are resolved to remote
/// identifiers where needed and included only when resolution succeeds.
#[derive(Debug, Clone, Default)]
pub struct CreateIssueParams {
    /// Issue title
    pub title: String,
    /// Markdown description, included verbatim
    pub description: Option<String>,
    /// Priority, included verbatim after numeric mapping
    pub priority: Option<Priority>,
    /// Status name, resolved against the team's workflow states
    pub status: Option<String>,
    /// Project name or identifier
    pub project: Option<String>,
    /// Assignee email, name, or display name fragment
    pub assignee: Option<String>,
    /// Label names; unmatched names are dropped
    pub labels: Vec<String>,
}

impl CreateIssueParams {
    /// Parameters with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Parameters for a partial issue update
#[derive(Debug, Clone, Default)]
pub struct UpdateIssueParams {
    /// Issue id or human identifier
    pub issue_id: String,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New status name
    pub status: Option<String>,
    /// New project name or identifier
    pub project: Option<String>,
    /// New assignee fragment
    pub assignee: Option<String>,
    /// Replacement label names; `None` leaves labels untouched
    pub labels: Option<Vec<String>>,
}

/// Parameters for listing issues
#[derive(Debug, Clone, Default)]
pub struct ListIssuesParams {
    /// Post-filter by status name, case-insensitive exact
    pub status: Option<String>,
    /// Page size, default [`DEFAULT_LIST_LIMIT`]
    pub limit: Option<u32>,
    /// Post-filter by assignee identifier, exact
    pub assignee_id: Option<String>,
}

/// Flat record returned by create and update
#[derive(Debug, Clone, Serialize)]
pub struct CreatedIssue {
    /// Opaque identifier
    pub id: String,
    /// Human identifier
    pub identifier: String,
    /// Title
    pub title: String,
    /// Web URL
    pub url: String,
    /// Resolved state name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Assignee fields on a detailed issue record
#[derive(Debug, Clone, Serialize)]
pub struct AssigneeDetails {
    /// Opaque identifier
    pub id: String,
    /// Account name
    pub name: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Flat record returned by get
#[derive(Debug, Clone, Serialize)]
pub struct IssueDetails {
    /// Opaque identifier
    pub id: String,
    /// Human identifier
    pub identifier: String,
    /// Title
    pub title: String,
    /// Markdown description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Web URL
    pub url: String,
    /// Resolved state name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Numeric priority, absent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Assignee, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeDetails>,
}

/// Assignee fields on a list entry
#[derive(Debug, Clone, Serialize)]
pub struct AssigneeSummary {
    /// Opaque identifier
    pub id: String,
    /// Account name
    pub name: String,
}

/// Flat record returned by list
#[derive(Debug, Clone, Serialize)]
pub struct IssueSummary {
    /// Opaque identifier
    pub id: String,
    /// Human identifier
    pub identifier: String,
    /// Title
    pub title: String,
    /// Web URL
    pub url: String,
    /// Resolved state name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Numeric priority, absent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Assignee, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeSummary>,
}

/// Outcome record for delete
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcome {
    /// Always true; failures surface as errors instead
    pub success: bool,
    /// The identifier the caller passed in
    #[serde(rename = "issueId")]
    pub issue_id: String,
}

/// Orchestration over the remote directory client.
///
/// Holds the shared client handle and the ambient default team identifier.
/// Team-scoped operations (create, list, update) fail with `NotConfigured`
/// when no default team is available; team listing and single-issue
/// get/delete work without one.
pub struct IssueService {
    client: Arc<dyn LinearClient>,
    team_id: Option<String>,
}

impl IssueService {
    /// Create a service over the given client and optional default team
    pub fn new(client: Arc<dyn LinearClient>, team_id: Option<String>) -> Self {
        Self { client, team_id }
    }

    fn default_team(&self) -> Result<&str> {
        self.team_id
            .as_deref()
            .ok_or(LinearBridgeError::NotConfigured(TEAM_ID_VAR))
    }

    /// List all teams, a direct passthrough
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.client.teams().await
    }

    /// Create an issue.
    ///
    /// Optional status/project/assignee/labels are resolved via the name
    /// resolver and included only when resolution succeeds; unmatched names
    /// are silently omitted.
    pub async fn create(&self, params: CreateIssueParams) -> Result<CreatedIssue> {
        let team_id = self.default_team()?;

        let mut input = IssueInput {
            team_id: Some(team_id.to_string()),
            title: Some(params.title),
            description: params.description,
            priority: params.priority.map(Priority::as_value),
            ..Default::default()
        };
        self.resolve_into(
            &mut input,
            team_id,
            params.status.as_deref(),
            params.project.as_deref(),
            params.assignee.as_deref(),
            Some(&params.labels),
        )
        .await?;

        tracing::debug!(?input, "creating issue");
        let issue = self
            .client
            .create_issue(input)
            .await?
            .ok_or(LinearBridgeError::CreationFailed)?;

        Ok(CreatedIssue {
            id: issue.id,
            identifier: issue.identifier,
            title: issue.title,
            url: issue.url,
            state: issue.state.map(|s| s.name),
        })
    }

    /// Fetch one issue by opaque id or human identifier
    pub async fn get(&self, issue_id: &str) -> Result<IssueDetails> {
        let issue = self
            .client
            .issue(issue_id)
            .await?
            .ok_or_else(|| LinearBridgeError::NotFound(issue_id.to_string()))?;

        Ok(IssueDetails {
            id: issue.id,
            identifier: issue.identifier,
            title: issue.title,
            description: issue.description,
            url: issue.url,
            state: issue.state.map(|s| s.name),
            priority: normalize_priority(issue.priority),
            assignee: issue.assignee.map(|a| AssigneeDetails {
                id: a.id,
                name: a.name,
                email: a.email,
            }),
        })
    }

    /// List issues for the default team.
    ///
    /// Fetches a single page of up to `limit` issues and post-filters
    /// client-side by status name and assignee id. Because filtering happens
    /// after the fetch, the result can be shorter than `limit` even when
    /// more matching issues exist beyond the fetched page.
    pub async fn list(&self, params: ListIssuesParams) -> Result<Vec<IssueSummary>> {
        let team_id = self.default_team()?;
        let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

        let issues = self.client.team_issues(team_id, limit).await?;
        let mut summaries = Vec::new();

        for issue in issues {
            if let Some(status) = &params.status {
                let matches = issue
                    .state
                    .as_ref()
                    .is_some_and(|s| s.name.eq_ignore_ascii_case(status));
                if !matches {
                    continue;
                }
            }

            if let Some(assignee_id) = &params.assignee_id {
                let matches = issue
                    .assignee
                    .as_ref()
                    .is_some_and(|a| &a.id == assignee_id);
                if !matches {
                    continue;
                }
            }

            summaries.push(IssueSummary {
                id: issue.id,
                identifier: issue.identifier,
                title: issue.title,
                url: issue.url,
                state: issue.state.map(|s| s.name),
                priority: normalize_priority(issue.priority),
                assignee: issue.assignee.map(|a| AssigneeSummary {
                    id: a.id,
                    name: a.name,
                }),
            });
        }

        Ok(summaries)
    }

    /// Apply a partial update to an issue.
    ///
    /// Requires the default team because status and label resolution are
    /// team-scoped even for updates. Only provided (and successfully
    /// resolved) fields are sent.
    pub async fn update(&self, params: UpdateIssueParams) -> Result<CreatedIssue> {
        let team_id = self.default_team()?;

        let mut input = IssueInput {
            title: params.title,
            description: params.description,
            priority: params.priority.map(Priority::as_value),
            ..Default::default()
        };
        self.resolve_into(
            &mut input,
            team_id,
            params.status.as_deref(),
            params.project.as_deref(),
            params.assignee.as_deref(),
            params.labels.as_deref(),
        )
        .await?;

        tracing::debug!(issue_id = %params.issue_id, ?input, "updating issue");
        let issue = self
            .client
            .update_issue(&params.issue_id, input)
            .await?
            .ok_or_else(|| LinearBridgeError::UpdateFailed(params.issue_id.clone()))?;

        Ok(CreatedIssue {
            id: issue.id,
            identifier: issue.identifier,
            title: issue.title,
            url: issue.url,
            state: issue.state.map(|s| s.name),
        })
    }

    /// Delete an issue.
    ///
    /// The issue is fetched first; when the lookup yields nothing the
    /// operation fails with `NotFound` and no delete mutation is issued.
    pub async fn delete(&self, issue_id: &str) -> Result<DeleteOutcome> {
        let issue = self
            .client
            .issue(issue_id)
            .await?
            .ok_or_else(|| LinearBridgeError::NotFound(issue_id.to_string()))?;

        let success = self.client.delete_issue(&issue.id).await?;
        if !success {
            return Err(LinearBridgeError::DeletionFailed(issue_id.to_string()));
        }

        Ok(DeleteOutcome {
            success: true,
            issue_id: issue_id.to_string(),
        })
    }

    /// Resolve the loose-name attributes into `input`, omitting every field
    /// whose resolution finds no match.
    async fn resolve_into(
        &self,
        input: &mut IssueInput,
        team_id: &str,
        status: Option<&str>,
        project: Option<&str>,
        assignee: Option<&str>,
        labels: Option<&[String]>,
    ) -> Result<()> {
        let client = self.client.as_ref();

        if let Some(status) = status {
            input.state_id = resolver::resolve_state(client, team_id, status).await?;
        }
        if let Some(project) = project {
            input.project_id = resolver::resolve_project(client, project).await?;
        }
        if let Some(assignee) = assignee {
            input.assignee_id = resolver::resolve_user(client, assignee).await?;
        }
        if let Some(labels) = labels {
            if !labels.is_empty() {
                let ids = resolver::resolve_labels(client, team_id, labels).await?;
                if !ids.is_empty() {
                    input.label_ids = Some(ids);
                }
            }
        }

        Ok(())
    }
}

/// The remote service uses 0 for "no priority"; treat it as unset
fn normalize_priority(priority: Option<u8>) -> Option<u8> {
    priority.filter(|p| *p != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{issue, label, state, user, MockClient, MockFailures};

    fn service(client: MockClient) -> IssueService {
        IssueService::new(Arc::new(client), Some("team-1".to_string()))
    }

    fn service_without_team(client: MockClient) -> IssueService {
        IssueService::new(Arc::new(client), None)
    }

    #[test]
    fn priority_maps_onto_numeric_scale() {
        assert_eq!(Priority::Urgent.as_value(), 1);
        assert_eq!(Priority::High.as_value(), 2);
        assert_eq!(Priority::Medium.as_value(), 3);
        assert_eq!(Priority::Low.as_value(), 4);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("URGENT".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("critical".parse::<Priority>().is_err());
    }

    #[tokio::test]
    async fn create_requires_default_team() {
        let service = service_without_team(MockClient::new());

        let err = service
            .create(CreateIssueParams::new("X"))
            .await
            .unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn create_omits_priority_when_unset() {
        let client = Arc::new(MockClient::new());
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        service.create(CreateIssueParams::new("X")).await.unwrap();

        let created = client.created.lock().unwrap();
        assert_eq!(created[0].priority, None);
        let wire = serde_json::to_value(&created[0]).unwrap();
        assert!(wire.get("priority").is_none());
    }

    #[tokio::test]
    async fn create_maps_priority_urgent_to_one() {
        let client = Arc::new(MockClient::new());
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let mut params = CreateIssueParams::new("X");
        params.priority = Some(Priority::Urgent);
        service.create(params).await.unwrap();

        assert_eq!(client.created.lock().unwrap()[0].priority, Some(1));
    }

    #[tokio::test]
    async fn create_resolves_labels_and_drops_unmatched() {
        let client = Arc::new(MockClient::new().with_labels("team-1", vec![label("l1", "Test")]));
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let mut params = CreateIssueParams::new("X");
        params.priority = Some(Priority::Low);
        params.labels = vec!["Test".to_string(), "Missing".to_string()];
        let created = service.create(params).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.title, "X");

        let recorded = client.created.lock().unwrap();
        assert_eq!(recorded[0].priority, Some(4));
        assert_eq!(recorded[0].label_ids, Some(vec!["l1".to_string()]));
    }

    #[tokio::test]
    async fn create_omits_labels_when_none_match() {
        let client = Arc::new(MockClient::new().with_labels("team-1", vec![label("l1", "Bug")]));
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let mut params = CreateIssueParams::new("X");
        params.labels = vec!["Missing".to_string()];
        service.create(params).await.unwrap();

        assert_eq!(client.created.lock().unwrap()[0].label_ids, None);
    }

    #[tokio::test]
    async fn create_silently_omits_unresolved_status() {
        let client = Arc::new(MockClient::new().with_states("team-1", vec![state("s1", "Todo")]));
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let mut params = CreateIssueParams::new("X");
        params.status = Some("Nonexistent".to_string());
        service.create(params).await.unwrap();

        assert_eq!(client.created.lock().unwrap()[0].state_id, None);
    }

    #[tokio::test]
    async fn create_resolves_status_and_assignee() {
        let client = Arc::new(
            MockClient::new()
                .with_states("team-1", vec![state("s1", "Todo")])
                .with_users(vec![user("u1", "alice", "Alice", Some("alice@example.com"))]),
        );
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let mut params = CreateIssueParams::new("X");
        params.status = Some("todo".to_string());
        params.assignee = Some("alice".to_string());
        let created = service.create(params).await.unwrap();

        let recorded = client.created.lock().unwrap();
        assert_eq!(recorded[0].state_id.as_deref(), Some("s1"));
        assert_eq!(recorded[0].assignee_id.as_deref(), Some("u1"));
        assert_eq!(created.state.as_deref(), Some("Todo"));
    }

    #[tokio::test]
    async fn create_fails_when_remote_returns_no_issue() {
        let client = MockClient::new().with_failures(MockFailures {
            create_returns_nothing: true,
            ..Default::default()
        });
        let service = service(client);

        let err = service
            .create(CreateIssueParams::new("X"))
            .await
            .unwrap_err();
        assert!(matches!(err, LinearBridgeError::CreationFailed));
    }

    #[tokio::test]
    async fn get_flattens_state_and_assignee() {
        let mut seeded = issue("uuid-1", "ENG-1", "Fix login", Some(("s1", "Todo")));
        seeded.priority = Some(2);
        let service = service(MockClient::new().with_issues(vec![seeded]));

        let details = service.get("ENG-1").await.unwrap();
        assert_eq!(details.id, "uuid-1");
        assert_eq!(details.state.as_deref(), Some("Todo"));
        assert_eq!(details.priority, Some(2));
    }

    #[tokio::test]
    async fn get_treats_priority_zero_as_unset() {
        let mut seeded = issue("uuid-1", "ENG-1", "Fix login", None);
        seeded.priority = Some(0);
        let service = service(MockClient::new().with_issues(vec![seeded]));

        let details = service.get("ENG-1").await.unwrap();
        assert_eq!(details.priority, None);
    }

    #[tokio::test]
    async fn get_unknown_issue_is_not_found() {
        let service = service(MockClient::new());

        let err = service.get("ENG-404").await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotFound(id) if id == "ENG-404"));
    }

    #[tokio::test]
    async fn list_requires_default_team() {
        let service = service_without_team(MockClient::new());

        let err = service.list(ListIssuesParams::default()).await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn list_fetches_at_most_limit_before_filtering() {
        let issues = (1..=10)
            .map(|n| issue(&format!("uuid-{n}"), &format!("ENG-{n}"), "t", None))
            .collect();
        let service = service(MockClient::new().with_issues(issues));

        let params = ListIssuesParams {
            limit: Some(5),
            ..Default::default()
        };
        let summaries = service.list(params).await.unwrap();
        assert_eq!(summaries.len(), 5);
    }

    #[tokio::test]
    async fn list_post_filters_by_status_within_the_fetched_page() {
        // Ten issues alternate between Todo and Done; with limit=4 only the
        // first page is fetched, so fewer Todo issues come back than exist.
        let issues = (1..=10)
            .map(|n| {
                let st = if n % 2 == 0 { ("s2", "Done") } else { ("s1", "Todo") };
                issue(&format!("uuid-{n}"), &format!("ENG-{n}"), "t", Some(st))
            })
            .collect();
        let service = service(MockClient::new().with_issues(issues));

        let params = ListIssuesParams {
            status: Some("todo".to_string()),
            limit: Some(4),
            ..Default::default()
        };
        let summaries = service.list(params).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| s.state.as_deref() == Some("Todo")));
    }

    #[tokio::test]
    async fn list_filters_by_assignee_id_exactly() {
        let mut a = issue("uuid-1", "ENG-1", "t", None);
        a.assignee = Some(crate::api::UserRef {
            id: "u1".to_string(),
            name: "alice".to_string(),
            email: None,
        });
        let b = issue("uuid-2", "ENG-2", "t", None);
        let service = service(MockClient::new().with_issues(vec![a, b]));

        let params = ListIssuesParams {
            assignee_id: Some("u1".to_string()),
            ..Default::default()
        };
        let summaries = service.list(params).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].identifier, "ENG-1");
    }

    #[tokio::test]
    async fn update_requires_default_team() {
        let service = service_without_team(MockClient::new());

        let params = UpdateIssueParams {
            issue_id: "ENG-1".to_string(),
            ..Default::default()
        };
        let err = service.update(params).await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn update_sends_only_provided_fields() {
        let client = Arc::new(MockClient::new().with_issues(vec![issue(
            "uuid-1",
            "ENG-1",
            "Old title",
            None,
        )]));
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let params = UpdateIssueParams {
            issue_id: "ENG-1".to_string(),
            title: Some("New title".to_string()),
            ..Default::default()
        };
        service.update(params).await.unwrap();

        let updated = client.updated.lock().unwrap();
        let (id, input) = &updated[0];
        assert_eq!(id, "ENG-1");
        let wire = serde_json::to_value(input).unwrap();
        assert_eq!(wire.as_object().unwrap().len(), 1);
        assert_eq!(wire["title"], "New title");
    }

    #[tokio::test]
    async fn update_resolves_status_against_the_default_team() {
        let client = Arc::new(
            MockClient::new()
                .with_states("team-1", vec![state("s1", "In Progress")])
                .with_issues(vec![issue("uuid-1", "ENG-1", "t", None)]),
        );
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let params = UpdateIssueParams {
            issue_id: "ENG-1".to_string(),
            status: Some("in progress".to_string()),
            ..Default::default()
        };
        service.update(params).await.unwrap();

        let updated = client.updated.lock().unwrap();
        assert_eq!(updated[0].1.state_id.as_deref(), Some("s1"));
    }

    #[tokio::test]
    async fn delete_unknown_issue_issues_no_mutation() {
        let client = Arc::new(MockClient::new());
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let err = service.delete("ENG-404").await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotFound(_)));
        assert!(client.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_uses_the_opaque_id() {
        let client = Arc::new(MockClient::new().with_issues(vec![issue(
            "uuid-1",
            "ENG-1",
            "t",
            None,
        )]));
        let service = IssueService::new(client.clone(), Some("team-1".to_string()));

        let outcome = service.delete("ENG-1").await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.issue_id, "ENG-1");
        assert_eq!(*client.deleted.lock().unwrap(), vec!["uuid-1".to_string()]);
    }

    #[tokio::test]
    async fn delete_failure_is_reported() {
        let client = MockClient::new()
            .with_issues(vec![issue("uuid-1", "ENG-1", "t", None)])
            .with_failures(MockFailures {
                delete_reports_failure: true,
                ..Default::default()
            });
        let service = service(client);

        let err = service.delete("ENG-1").await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::DeletionFailed(_)));
    }

    #[tokio::test]
    async fn remote_errors_pass_through_unclassified() {
        let client = MockClient::new().with_failures(MockFailures {
            api_error: true,
            ..Default::default()
        });
        let service = service(client);

        let err = service.list_teams().await.unwrap_err();
        assert!(matches!(err, LinearBridgeError::Api(_)));
    }

    #[tokio::test]
    async fn list_teams_is_a_passthrough() {
        let service = service(MockClient::new().with_team("t1", "Platform", "PLA"));

        let teams = service.list_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].key, "PLA");
    }
}
