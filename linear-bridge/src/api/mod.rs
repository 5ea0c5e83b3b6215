//! Remote directory client for the Linear API
//!
//! [`LinearClient`] is the seam between the orchestration layer and the
//! remote service: paginated listing of teams, team-scoped workflow states,
//! projects, users, and team-scoped labels, plus create/read/update/delete
//! for issues. Everything above this trait is client-side matching and
//! payload shaping; everything below it is wire plumbing.
//!
//! Two implementations ship with the crate: [`GraphQlClient`] speaks the
//! real GraphQL endpoint, and [`mock::MockClient`] keeps collections in
//! memory for tests.

mod graphql;
pub mod mock;
mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use graphql::GraphQlClient;
pub use types::{Issue, IssueInput, Label, Project, StateRef, Team, User, UserRef, WorkflowState};

/// Client for the remote issue-tracking directory.
///
/// Each method is a single request/response exchange fetching one page of a
/// collection or issuing one mutation. Implementations hold network
/// configuration only, no mutable domain state, so a single instance is safe
/// to reuse across sequential operations.
#[async_trait]
pub trait LinearClient: Send + Sync {
    /// List all teams visible to the credential
    async fn teams(&self) -> Result<Vec<Team>>;

    /// List the workflow states of a team
    async fn team_states(&self, team_id: &str) -> Result<Vec<WorkflowState>>;

    /// List the labels of a team
    async fn team_labels(&self, team_id: &str) -> Result<Vec<Label>>;

    /// List all projects, unscoped
    async fn projects(&self) -> Result<Vec<Project>>;

    /// List all users in the workspace
    async fn users(&self) -> Result<Vec<User>>;

    /// Fetch one page of up to `limit` issues for a team
    async fn team_issues(&self, team_id: &str, limit: u32) -> Result<Vec<Issue>>;

    /// Fetch an issue by opaque id or human identifier (e.g. `ABC-123`).
    ///
    /// Returns `Ok(None)` when the lookup yields nothing.
    async fn issue(&self, id: &str) -> Result<Option<Issue>>;

    /// Create an issue. Returns the created issue payload, or `None` when
    /// the mutation was accepted but no issue came back.
    async fn create_issue(&self, input: IssueInput) -> Result<Option<Issue>>;

    /// Apply a partial update to an issue
    async fn update_issue(&self, id: &str, input: IssueInput) -> Result<Option<Issue>>;

    /// Delete an issue by opaque id. Returns the remote success flag.
    async fn delete_issue(&self, id: &str) -> Result<bool>;
}
