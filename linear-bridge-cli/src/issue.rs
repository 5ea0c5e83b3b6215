//! Issue command handlers
//!
//! Each handler runs one operation to completion and prints the
//! human-readable output. Formatting favors script- and LLM-friendliness:
//! flat lines, stable field labels, no tables.

use linear_bridge::issues::{CreateIssueParams, IssueService, ListIssuesParams, Priority};

use crate::error::CliResult;

pub async fn run_teams(service: &IssueService) -> CliResult<()> {
    let teams = service.list_teams().await?;

    println!();
    println!("Available teams:");
    println!("================");
    println!();
    for team in teams {
        println!("{} ({})", team.name, team.key);
        println!("  ID: {}", team.id);
        println!();
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_create(
    service: &IssueService,
    title: String,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    project: Option<String>,
    assignee: Option<String>,
    tags: Vec<String>,
) -> CliResult<()> {
    let params = CreateIssueParams {
        title,
        description,
        priority: parse_priority(priority)?,
        status,
        project,
        assignee,
        labels: tags,
    };

    let issue = service.create(params).await?;

    println!();
    println!("✓ Issue created successfully!");
    println!();
    println!("  ID: {}", issue.identifier);
    println!("  Title: {}", issue.title);
    println!("  URL: {}", issue.url);
    if let Some(state) = &issue.state {
        println!("  State: {state}");
    }
    println!();

    Ok(())
}

pub async fn run_list(
    service: &IssueService,
    status: Option<String>,
    limit: u32,
    assignee: Option<String>,
) -> CliResult<()> {
    let params = ListIssuesParams {
        status,
        limit: Some(limit),
        assignee_id: assignee,
    };

    let issues = service.list(params).await?;

    if issues.is_empty() {
        println!();
        println!("No issues found.");
        return Ok(());
    }

    println!();
    println!("Found {} issue(s):", issues.len());
    println!();
    for issue in issues {
        println!("[{}] {}", issue.identifier, issue.title);
        println!("  State: {}", issue.state.as_deref().unwrap_or("N/A"));
        if let Some(assignee) = &issue.assignee {
            println!("  Assignee: {}", assignee.name);
        }
        println!("  URL: {}", issue.url);
        println!();
    }

    Ok(())
}

pub async fn run_get(service: &IssueService, issue_id: &str) -> CliResult<()> {
    let issue = service.get(issue_id).await?;

    println!();
    println!("[{}] {}", issue.identifier, issue.title);
    println!();
    println!("Description: {}", issue.description.as_deref().unwrap_or("N/A"));
    println!("State: {}", issue.state.as_deref().unwrap_or("N/A"));
    match issue.priority {
        Some(priority) => println!("Priority: {priority}"),
        None => println!("Priority: N/A"),
    }
    if let Some(assignee) = &issue.assignee {
        println!(
            "Assignee: {} ({})",
            assignee.name,
            assignee.email.as_deref().unwrap_or("no email")
        );
    }
    println!("URL: {}", issue.url);
    println!();

    Ok(())
}

pub async fn run_delete(service: &IssueService, issue_id: &str) -> CliResult<()> {
    let outcome = service.delete(issue_id).await?;

    println!();
    println!("✓ Issue {} deleted successfully!", outcome.issue_id);
    println!();

    Ok(())
}

/// The clap value parser already restricts the input to the four priority
/// names, so this only re-enters the typed domain.
fn parse_priority(value: Option<String>) -> CliResult<Option<Priority>> {
    value
        .map(|v| v.parse::<Priority>())
        .transpose()
        .map_err(Into::into)
}
