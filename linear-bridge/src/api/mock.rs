//! Mock in-memory implementation of the remote directory client
//!
//! Stores every collection in memory and records mutation inputs so tests
//! can assert on exactly what would have gone over the wire. Failure
//! switches simulate the remote service accepting a mutation but returning
//! no payload, which is how the real service signals a rejected create or
//! delete.
//!
//! # Usage
//!
//! ```ignore
//! let client = MockClient::new()
//!     .with_states("team-1", vec![state("s1", "Todo")])
//!     .with_labels("team-1", vec![label("l1", "Bug")]);
//!
//! let id = resolver::resolve_state(&client, "team-1", "todo").await?;
//! assert_eq!(id.as_deref(), Some("s1"));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{Issue, IssueInput, Label, Project, StateRef, Team, User, WorkflowState};
use super::LinearClient;
use crate::error::{LinearBridgeError, Result};

/// Switches for simulating remote failures
#[derive(Debug, Clone, Default)]
pub struct MockFailures {
    /// Create mutations return no issue payload
    pub create_returns_nothing: bool,
    /// Update mutations return no issue payload
    pub update_returns_nothing: bool,
    /// Delete mutations report non-success
    pub delete_reports_failure: bool,
    /// Every call fails with a passthrough API error
    pub api_error: bool,
}

/// In-memory `LinearClient` for tests
#[derive(Default)]
pub struct MockClient {
    teams: Vec<Team>,
    states: HashMap<String, Vec<WorkflowState>>,
    labels: HashMap<String, Vec<Label>>,
    projects: Vec<Project>,
    users: Vec<User>,
    issues: Vec<Issue>,
    failures: MockFailures,

    /// Inputs passed to `create_issue`, in call order
    pub created: Mutex<Vec<IssueInput>>,
    /// `(id, input)` pairs passed to `update_issue`, in call order
    pub updated: Mutex<Vec<(String, IssueInput)>>,
    /// Ids passed to `delete_issue`, in call order
    pub deleted: Mutex<Vec<String>>,
    next_number: Mutex<u32>,
}

impl MockClient {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a team
    pub fn with_team(mut self, id: &str, name: &str, key: &str) -> Self {
        self.teams.push(Team {
            id: id.to_string(),
            name: name.to_string(),
            key: key.to_string(),
        });
        self
    }

    /// Seed the workflow states of a team
    pub fn with_states(mut self, team_id: &str, states: Vec<WorkflowState>) -> Self {
        self.states.insert(team_id.to_string(), states);
        self
    }

    /// Seed the labels of a team
    pub fn with_labels(mut self, team_id: &str, labels: Vec<Label>) -> Self {
        self.labels.insert(team_id.to_string(), labels);
        self
    }

    /// Seed the project collection
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Seed the user collection
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Seed existing issues
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    /// Configure failure behavior
    pub fn with_failures(mut self, failures: MockFailures) -> Self {
        self.failures = failures;
        self
    }

    fn check_api_error(&self) -> Result<()> {
        if self.failures.api_error {
            return Err(LinearBridgeError::Api("simulated remote failure".to_string()));
        }
        Ok(())
    }

    fn state_name(&self, state_id: &str) -> Option<StateRef> {
        self.states
            .values()
            .flatten()
            .find(|s| s.id == state_id)
            .map(|s| StateRef {
                id: s.id.clone(),
                name: s.name.clone(),
            })
    }

    fn build_issue(&self, number: u32, input: &IssueInput) -> Issue {
        Issue {
            id: format!("issue-uuid-{number}"),
            identifier: format!("ENG-{number}"),
            title: input.title.clone().unwrap_or_default(),
            description: input.description.clone(),
            url: format!("https://linear.app/test/issue/ENG-{number}"),
            priority: input.priority,
            state: input.state_id.as_deref().and_then(|id| self.state_name(id)),
            assignee: None,
        }
    }
}

#[async_trait]
impl LinearClient for MockClient {
    async fn teams(&self) -> Result<Vec<Team>> {
        self.check_api_error()?;
        Ok(self.teams.clone())
    }

    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        self.check_api_error()?;
        Ok(self.states.get(team_id).cloned().unwrap_or_default())
    }

    async fn team_labels(&self, team_id: &str) -> Result<Vec<Label>> {
        self.check_api_error()?;
        Ok(self.labels.get(team_id).cloned().unwrap_or_default())
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.check_api_error()?;
        Ok(self.projects.clone())
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.check_api_error()?;
        Ok(self.users.clone())
    }

    async fn team_issues(&self, _team_id: &str, limit: u32) -> Result<Vec<Issue>> {
        self.check_api_error()?;
        Ok(self.issues.iter().take(limit as usize).cloned().collect())
    }

    async fn issue(&self, id: &str) -> Result<Option<Issue>> {
        self.check_api_error()?;
        Ok(self
            .issues
            .iter()
            .find(|i| i.id == id || i.identifier == id)
            .cloned())
    }

    async fn create_issue(&self, input: IssueInput) -> Result<Option<Issue>> {
        self.check_api_error()?;
        self.created.lock().unwrap().push(input.clone());
        if self.failures.create_returns_nothing {
            return Ok(None);
        }

        let mut next = self.next_number.lock().unwrap();
        *next += 1;
        Ok(Some(self.build_issue(*next, &input)))
    }

    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Option<Issue>> {
        self.check_api_error()?;
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), input.clone()));
        if self.failures.update_returns_nothing {
            return Ok(None);
        }

        if let Some(existing) = self
            .issues
            .iter()
            .find(|i| i.id == id || i.identifier == id)
        {
            let mut updated = existing.clone();
            if let Some(title) = &input.title {
                updated.title = title.clone();
            }
            if let Some(description) = &input.description {
                updated.description = Some(description.clone());
            }
            if let Some(priority) = input.priority {
                updated.priority = Some(priority);
            }
            if let Some(state_id) = &input.state_id {
                updated.state = self.state_name(state_id);
            }
            return Ok(Some(updated));
        }

        let mut next = self.next_number.lock().unwrap();
        *next += 1;
        Ok(Some(self.build_issue(*next, &input)))
    }

    async fn delete_issue(&self, id: &str) -> Result<bool> {
        self.check_api_error()?;
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(!self.failures.delete_reports_failure)
    }
}

/// Shorthand for seeding a workflow state
pub fn state(id: &str, name: &str) -> WorkflowState {
    WorkflowState {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Shorthand for seeding a label
pub fn label(id: &str, name: &str) -> Label {
    Label {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Shorthand for seeding a project
pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Shorthand for seeding a user
pub fn user(id: &str, name: &str, display_name: &str, email: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        display_name: display_name.to_string(),
        email: email.map(str::to_string),
    }
}

/// Shorthand for seeding an issue
pub fn issue(id: &str, identifier: &str, title: &str, state: Option<(&str, &str)>) -> Issue {
    Issue {
        id: id.to_string(),
        identifier: identifier.to_string(),
        title: title.to_string(),
        description: None,
        url: format!("https://linear.app/test/issue/{identifier}"),
        priority: None,
        state: state.map(|(id, name)| StateRef {
            id: id.to_string(),
            name: name.to_string(),
        }),
        assignee: None,
    }
}
