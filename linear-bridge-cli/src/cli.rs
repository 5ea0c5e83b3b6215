use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linear")]
#[command(version)]
#[command(about = "CLI for the Linear API - LLM-friendly, non-interactive")]
#[command(long_about = "
linear is a thin bridge to the Linear issue tracker. It works both as a
non-interactive CLI and as an MCP (Model Context Protocol) server over
stdio.

Loose names are resolved to identifiers automatically: a status like
'todo' matches the team's 'Todo' state, a project query matches by id or
name substring, and an assignee matches by email, name, or display name.

Configuration comes from the environment:
  LINEAR_API_KEY   API credential (required)
  LINEAR_TEAM_ID   default team for create/list/update

Example usage:
  linear teams                          # Find your team IDs
  linear create --title \"Fix login\"    # Create an issue in the default team
  linear list --status Todo             # List issues filtered by state
  linear serve                          # Run as MCP server
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs the bridge as an MCP server over stdio, advertising six tools:
linear_list_teams, linear_create_issue, linear_update_issue,
linear_list_issues, linear_get_issue, and linear_delete_issue.

A failing tool call comes back as a flagged error block; the server
itself keeps running until the transport closes.

Example:
  linear serve
  # Or configure in your MCP client's server settings
")]
    Serve,

    /// List all available teams
    Teams,

    /// Create a new issue in the default team
    Create {
        /// Issue title
        #[arg(long)]
        title: String,

        /// Issue description in markdown
        #[arg(long)]
        description: Option<String>,

        /// Priority: urgent, high, medium, low
        #[arg(long, value_parser = ["urgent", "high", "medium", "low"])]
        priority: Option<String>,

        /// Status/state name (e.g. Todo, In Progress)
        #[arg(long)]
        status: Option<String>,

        /// Project name or ID
        #[arg(long)]
        project: Option<String>,

        /// Assignee username, email, or display name
        #[arg(long)]
        assignee: Option<String>,

        /// Tag/label name (can be used multiple times)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List issues from the default team
    List {
        /// Filter by status/state name
        #[arg(long)]
        status: Option<String>,

        /// Max number of issues to return
        #[arg(long, default_value_t = 50)]
        limit: u32,

        /// Filter by assignee ID
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Get a specific issue
    Get {
        /// Issue ID or identifier (e.g. ABC-123)
        issue_id: String,
    },

    /// Delete an issue
    Delete {
        /// Issue ID or identifier (e.g. ABC-123)
        issue_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&["linear"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn create_requires_title() {
        let result = parse(&["linear", "create"]);
        assert!(result.is_err());
    }

    #[test]
    fn create_accepts_all_options() {
        let cli = parse(&[
            "linear", "create", "--title", "Fix login", "--description", "SSO broken",
            "--priority", "high", "--status", "Todo", "--project", "Roadmap",
            "--assignee", "alice", "--tag", "Bug", "--tag", "Auth",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Create {
                title,
                priority,
                tags,
                ..
            }) => {
                assert_eq!(title, "Fix login");
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(tags, vec!["Bug".to_string(), "Auth".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_rejects_unknown_priority() {
        let result = parse(&["linear", "create", "--title", "X", "--priority", "critical"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_defaults_limit_to_fifty() {
        let cli = parse(&["linear", "list"]).unwrap();
        match cli.command {
            Some(Commands::List { limit, .. }) => assert_eq!(limit, 50),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn get_takes_a_positional_issue_id() {
        let cli = parse(&["linear", "get", "ABC-123"]).unwrap();
        match cli.command {
            Some(Commands::Get { issue_id }) => assert_eq!(issue_id, "ABC-123"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn delete_requires_an_issue_id() {
        assert!(parse(&["linear", "delete"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let result = parse(&["linear", "close"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidSubcommand
        );
    }
}
