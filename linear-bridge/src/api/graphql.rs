//! GraphQL implementation of the remote directory client
//!
//! One POST per operation: `{query, variables}` against the configured
//! endpoint, the API key in the `Authorization` header. Any `errors` array
//! in the response envelope surfaces as the passthrough API error with the
//! remote messages; a null `data.issue` is the "not found" signal for
//! single-issue lookups.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::types::{Issue, IssueInput, Label, Project, Team, User, WorkflowState};
use super::LinearClient;
use crate::config::Config;
use crate::error::{LinearBridgeError, Result};

const ISSUE_FIELDS: &str = "id identifier title description url priority \
                            state { id name } assignee { id name email }";

/// `LinearClient` implementation over the Linear GraphQL endpoint
pub struct GraphQlClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GraphQlClient {
    /// Create a client from the given configuration
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            endpoint: config.api_url.clone(),
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let body = json!({ "query": query, "variables": variables });
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let envelope: Envelope<T> = response.json().await?;
        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let message = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(LinearBridgeError::Api(message));
            }
        }

        envelope
            .data
            .ok_or_else(|| LinearBridgeError::Api("response contained no data".to_string()))
    }
}

#[async_trait]
impl LinearClient for GraphQlClient {
    async fn teams(&self) -> Result<Vec<Team>> {
        let query = "query { teams { nodes { id name key } } }";
        let data: TeamsData = self.post(query, json!({})).await?;
        Ok(data.teams.nodes)
    }

    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        let query = "query States($id: String!) { \
                     team(id: $id) { states { nodes { id name } } } }";
        let data: TeamScope<StatesData> = self.post(query, json!({ "id": team_id })).await?;
        Ok(data.require(team_id)?.states.nodes)
    }

    async fn team_labels(&self, team_id: &str) -> Result<Vec<Label>> {
        let query = "query Labels($id: String!) { \
                     team(id: $id) { labels { nodes { id name } } } }";
        let data: TeamScope<LabelsData> = self.post(query, json!({ "id": team_id })).await?;
        Ok(data.require(team_id)?.labels.nodes)
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        let query = "query { projects { nodes { id name } } }";
        let data: ProjectsData = self.post(query, json!({})).await?;
        Ok(data.projects.nodes)
    }

    async fn users(&self) -> Result<Vec<User>> {
        let query = "query { users { nodes { id name displayName email } } }";
        let data: UsersData = self.post(query, json!({})).await?;
        Ok(data.users.nodes)
    }

    async fn team_issues(&self, team_id: &str, limit: u32) -> Result<Vec<Issue>> {
        let query = format!(
            "query Issues($id: String!, $first: Int!) {{ \
             team(id: $id) {{ issues(first: $first) {{ nodes {{ {ISSUE_FIELDS} }} }} }} }}"
        );
        let data: TeamScope<IssuesData> = self
            .post(&query, json!({ "id": team_id, "first": limit }))
            .await?;
        Ok(data.require(team_id)?.issues.nodes)
    }

    async fn issue(&self, id: &str) -> Result<Option<Issue>> {
        let query =
            format!("query Issue($id: String!) {{ issue(id: $id) {{ {ISSUE_FIELDS} }} }}");
        let data: IssueData = self.post(&query, json!({ "id": id })).await?;
        Ok(data.issue)
    }

    async fn create_issue(&self, input: IssueInput) -> Result<Option<Issue>> {
        let query = format!(
            "mutation Create($input: IssueCreateInput!) {{ \
             issueCreate(input: $input) {{ success issue {{ {ISSUE_FIELDS} }} }} }}"
        );
        let data: CreatePayload = self
            .post(&query, json!({ "input": serde_json::to_value(&input)? }))
            .await?;
        Ok(data.issue_create.issue)
    }

    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Option<Issue>> {
        let query = format!(
            "mutation Update($id: String!, $input: IssueUpdateInput!) {{ \
             issueUpdate(id: $id, input: $input) {{ success issue {{ {ISSUE_FIELDS} }} }} }}"
        );
        let data: UpdatePayload = self
            .post(
                &query,
                json!({ "id": id, "input": serde_json::to_value(&input)? }),
            )
            .await?;
        Ok(data.issue_update.issue)
    }

    async fn delete_issue(&self, id: &str) -> Result<bool> {
        let query = "mutation Delete($id: String!) { issueDelete(id: $id) { success } }";
        let data: DeletePayload = self.post(query, json!({ "id": id })).await?;
        Ok(data.issue_delete.success)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

#[derive(Deserialize)]
struct TeamsData {
    teams: Connection<Team>,
}

#[derive(Deserialize)]
struct ProjectsData {
    projects: Connection<Project>,
}

#[derive(Deserialize)]
struct UsersData {
    users: Connection<User>,
}

#[derive(Deserialize)]
struct StatesData {
    states: Connection<WorkflowState>,
}

#[derive(Deserialize)]
struct LabelsData {
    labels: Connection<Label>,
}

#[derive(Deserialize)]
struct IssuesData {
    issues: Connection<Issue>,
}

/// Wrapper for queries nested under `team(id:)`
#[derive(Deserialize)]
struct TeamScope<T> {
    team: Option<T>,
}

impl<T> TeamScope<T> {
    fn require(self, team_id: &str) -> Result<T> {
        self.team
            .ok_or_else(|| LinearBridgeError::Api(format!("team {team_id} not found")))
    }
}

#[derive(Deserialize)]
struct IssueData {
    issue: Option<Issue>,
}

#[derive(Deserialize)]
struct MutationResult {
    issue: Option<Issue>,
}

#[derive(Deserialize)]
struct CreatePayload {
    #[serde(rename = "issueCreate")]
    issue_create: MutationResult,
}

#[derive(Deserialize)]
struct UpdatePayload {
    #[serde(rename = "issueUpdate")]
    issue_update: MutationResult,
}

#[derive(Deserialize)]
struct DeleteSuccess {
    success: bool,
}

#[derive(Deserialize)]
struct DeletePayload {
    #[serde(rename = "issueDelete")]
    issue_delete: DeleteSuccess,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_surfaces_remote_errors() {
        let envelope: Envelope<TeamsData> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "rate limited"}, {"message": "try later"}]}"#,
        )
        .unwrap();

        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "rate limited");
    }

    #[test]
    fn envelope_parses_team_connection() {
        let envelope: Envelope<TeamsData> = serde_json::from_str(
            r#"{"data": {"teams": {"nodes": [{"id": "t1", "name": "Platform", "key": "PLA"}]}}}"#,
        )
        .unwrap();

        let teams = envelope.data.unwrap().teams.nodes;
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].key, "PLA");
    }

    #[test]
    fn null_issue_means_not_found() {
        let envelope: Envelope<IssueData> =
            serde_json::from_str(r#"{"data": {"issue": null}}"#).unwrap();
        assert!(envelope.data.unwrap().issue.is_none());
    }

    #[test]
    fn mutation_payload_parses_without_issue() {
        let envelope: Envelope<CreatePayload> =
            serde_json::from_str(r#"{"data": {"issueCreate": {"success": false, "issue": null}}}"#)
                .unwrap();
        let payload = envelope.data.unwrap().issue_create;
        assert!(payload.issue.is_none());
    }
}
