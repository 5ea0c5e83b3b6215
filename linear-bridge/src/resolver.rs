//! Name-to-identifier resolution
//!
//! Humans and agents supply loose names; the remote API wants durable
//! identifiers. Each resolver fetches its candidate collection once and
//! matches client-side. The tie-break rule is explicit and deterministic:
//! iterate the fetched collection in the order the remote returned it and
//! accept the first satisfying element.
//!
//! Resolution trades precision for ergonomics on purpose: there is no
//! "multiple matches" error, an unmatched single-valued lookup simply means
//! the caller omits that field from the mutation, and unmatched label names
//! are dropped one by one with no error signal.

use crate::api::LinearClient;
use crate::error::Result;

/// Resolve a workflow state by case-insensitive exact name match within a
/// team. Returns `None` when no state name matches.
pub async fn resolve_state(
    client: &dyn LinearClient,
    team_id: &str,
    name: &str,
) -> Result<Option<String>> {
    let states = client.team_states(team_id).await?;
    Ok(states
        .into_iter()
        .find(|state| state.name.eq_ignore_ascii_case(name))
        .map(|state| state.id))
}

/// Resolve a project by exact identifier equality or case-insensitive
/// substring containment of the query in the project name, whichever the
/// iteration hits first.
pub async fn resolve_project(client: &dyn LinearClient, query: &str) -> Result<Option<String>> {
    let needle = query.to_lowercase();
    let projects = client.projects().await?;
    Ok(projects
        .into_iter()
        .find(|project| project.id == query || project.name.to_lowercase().contains(&needle))
        .map(|project| project.id))
}

/// Resolve a user by case-insensitive substring containment against email,
/// name, or display name. The first user satisfying any of the three wins.
pub async fn resolve_user(client: &dyn LinearClient, query: &str) -> Result<Option<String>> {
    let needle = query.to_lowercase();
    let users = client.users().await?;
    Ok(users
        .into_iter()
        .find(|user| {
            user.email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&needle))
                || user.name.to_lowercase().contains(&needle)
                || user.display_name.to_lowercase().contains(&needle)
        })
        .map(|user| user.id))
}

/// Resolve label names to identifiers within a team.
///
/// The label collection is fetched once; each requested name is matched by
/// case-insensitive exact equality. Names with no match are dropped, so the
/// result can be shorter than the request.
pub async fn resolve_labels(
    client: &dyn LinearClient,
    team_id: &str,
    names: &[String],
) -> Result<Vec<String>> {
    let labels = client.team_labels(team_id).await?;
    let mut ids = Vec::new();

    for name in names {
        if let Some(label) = labels
            .iter()
            .find(|label| label.name.eq_ignore_ascii_case(name))
        {
            ids.push(label.id.clone());
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{label, project, state, user, MockClient};

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn state_matches_case_insensitively() {
        let client = MockClient::new().with_states(
            "team-1",
            vec![state("s1", "Backlog"), state("s2", "Todo")],
        );

        let id = resolve_state(&client, "team-1", "todo").await.unwrap();
        assert_eq!(id.as_deref(), Some("s2"));
    }

    #[tokio::test]
    async fn state_requires_exact_name() {
        let client = MockClient::new().with_states("team-1", vec![state("s1", "Todo")]);

        let id = resolve_state(&client, "team-1", "tod").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn state_unknown_team_has_no_match() {
        let client = MockClient::new().with_states("team-1", vec![state("s1", "Todo")]);

        let id = resolve_state(&client, "team-2", "Todo").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn project_matches_by_substring() {
        let client = MockClient::new().with_projects(vec![
            project("p1", "Internal Tools"),
            project("p2", "Q3 Roadmap"),
        ]);

        let id = resolve_project(&client, "Roadmap").await.unwrap();
        assert_eq!(id.as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn project_matches_by_exact_id() {
        let client = MockClient::new().with_projects(vec![
            project("p1", "Internal Tools"),
            project("p2", "Q3 Roadmap"),
        ]);

        let id = resolve_project(&client, "p2").await.unwrap();
        assert_eq!(id.as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn project_first_match_wins() {
        let client = MockClient::new().with_projects(vec![
            project("p1", "Roadmap 2025"),
            project("p2", "Roadmap 2026"),
        ]);

        let id = resolve_project(&client, "roadmap").await.unwrap();
        assert_eq!(id.as_deref(), Some("p1"));
    }

    #[tokio::test]
    async fn user_matches_email_name_or_display_name() {
        let client = MockClient::new().with_users(vec![
            user("u1", "bob", "Bob", Some("bob@example.com")),
            user("u2", "asmith", "Alice Smith", Some("alice@example.com")),
        ]);

        let by_email = resolve_user(&client, "alice@").await.unwrap();
        assert_eq!(by_email.as_deref(), Some("u2"));

        let by_name = resolve_user(&client, "asmith").await.unwrap();
        assert_eq!(by_name.as_deref(), Some("u2"));

        let by_display = resolve_user(&client, "alice smith").await.unwrap();
        assert_eq!(by_display.as_deref(), Some("u2"));
    }

    #[tokio::test]
    async fn user_without_email_still_matches_on_name() {
        let client = MockClient::new().with_users(vec![user("u1", "carol", "Carol", None)]);

        let id = resolve_user(&client, "carol").await.unwrap();
        assert_eq!(id.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn user_no_match_is_none() {
        let client = MockClient::new().with_users(vec![user("u1", "carol", "Carol", None)]);

        let id = resolve_user(&client, "dave").await.unwrap();
        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn labels_drop_unmatched_names_silently() {
        let client = MockClient::new().with_labels("team-1", vec![label("l1", "Bug")]);

        let ids = resolve_labels(&client, "team-1", &names(&["Bug", "Nonexistent"]))
            .await
            .unwrap();
        assert_eq!(ids, vec!["l1".to_string()]);
    }

    #[tokio::test]
    async fn labels_match_case_insensitively_and_keep_request_order() {
        let client = MockClient::new().with_labels(
            "team-1",
            vec![label("l1", "Bug"), label("l2", "Feature")],
        );

        let ids = resolve_labels(&client, "team-1", &names(&["feature", "BUG"]))
            .await
            .unwrap();
        assert_eq!(ids, vec!["l2".to_string(), "l1".to_string()]);
    }

    #[tokio::test]
    async fn labels_empty_request_is_empty_result() {
        let client = MockClient::new().with_labels("team-1", vec![label("l1", "Bug")]);

        let ids = resolve_labels(&client, "team-1", &[]).await.unwrap();
        assert!(ids.is_empty());
    }
}
