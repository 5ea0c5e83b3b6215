//! # Linear Bridge
//!
//! A thin adapter exposing the Linear issue-tracking API through two
//! front-ends: a non-interactive CLI and an MCP (Model Context Protocol)
//! stdio server.
//!
//! The interesting part lives in [`resolver`]: humans and agents supply
//! loose names (a status like `"todo"`, a project like `"Roadmap"`, an
//! assignee fragment like `"alice"`), and the resolver turns them into the
//! durable identifiers the remote API requires by fetching the candidate
//! collection once and matching client-side. Everything else is
//! request/response plumbing over the [`api::LinearClient`] seam.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linear_bridge::api::GraphQlClient;
//! use linear_bridge::issues::{CreateIssueParams, IssueService};
//! use linear_bridge::Config;
//!
//! # async fn run() -> linear_bridge::Result<()> {
//! let config = Config::from_env()?;
//! let client = Arc::new(GraphQlClient::new(&config));
//! let service = IssueService::new(client, config.team_id.clone());
//!
//! let issue = service
//!     .create(CreateIssueParams::new("Fix the login bug"))
//!     .await?;
//! println!("{} {}", issue.identifier, issue.url);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Remote directory client: entity types, the `LinearClient` trait, the
/// GraphQL implementation, and an in-memory mock for tests
pub mod api;

/// Environment-backed configuration
pub mod config;

/// Library error types
pub mod error;

/// Issue operations orchestrated over the remote client
pub mod issues;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Name-to-identifier resolution for statuses, projects, users, and labels
pub mod resolver;

// Re-export core types
pub use config::Config;
pub use error::{LinearBridgeError, Result};
pub use issues::IssueService;

/// Crate version, exposed to the MCP handshake and the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
