use std::process;
use std::sync::Arc;

mod cli;
mod error;
mod exit_codes;
mod issue;

use clap::CommandFactory;
use cli::{Cli, Commands};
use error::handle_cli_result;
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use linear_bridge::api::GraphQlClient;
use linear_bridge::{Config, IssueService};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help
    if cli.command.is_none() {
        Cli::command().print_help().expect("Failed to print help");
        process::exit(EXIT_SUCCESS);
    }

    use tracing::Level;

    // In MCP mode stdout/stdin carry the protocol, so logs must go elsewhere
    use is_terminal::IsTerminal;
    let is_mcp_mode =
        matches!(cli.command, Some(Commands::Serve)) && !std::io::stdin().is_terminal();

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    init_logging(is_mcp_mode, log_level);

    // The credential is a hard startup failure for every command; the team
    // id is checked later, per operation
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_ERROR);
        }
    };

    let client = Arc::new(GraphQlClient::new(&config));
    let service = IssueService::new(client, config.team_id.clone());

    let exit_code = match cli.command {
        Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            run_server(service).await
        }
        Some(Commands::Teams) => handle_cli_result(issue::run_teams(&service).await),
        Some(Commands::Create {
            title,
            description,
            priority,
            status,
            project,
            assignee,
            tags,
        }) => handle_cli_result(
            issue::run_create(
                &service,
                title,
                description,
                priority,
                status,
                project,
                assignee,
                tags,
            )
            .await,
        ),
        Some(Commands::List {
            status,
            limit,
            assignee,
        }) => handle_cli_result(issue::run_list(&service, status, limit, assignee).await),
        Some(Commands::Get { issue_id }) => {
            handle_cli_result(issue::run_get(&service, &issue_id).await)
        }
        Some(Commands::Delete { issue_id }) => {
            handle_cli_result(issue::run_delete(&service, &issue_id).await)
        }
        None => {
            // Handled early above
            unreachable!()
        }
    };

    process::exit(exit_code);
}

fn init_logging(is_mcp_mode: bool, log_level: tracing::Level) {
    if is_mcp_mode {
        use std::fs;
        use std::path::PathBuf;

        let log_dir = if let Some(home) = dirs::home_dir() {
            home.join(".linear-bridge")
        } else {
            PathBuf::from(".linear-bridge")
        };

        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create log directory: {e}");
        }

        let log_filename =
            std::env::var("LINEAR_BRIDGE_LOG_FILE").unwrap_or_else(|_| "mcp.log".to_string());
        let log_file = log_dir.join(log_filename);

        match fs::OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_writer(Arc::new(file))
                    .with_max_level(log_level)
                    .with_ansi(false)
                    .init();
            }
            Err(_) => {
                // Fall back to stderr; the protocol on stdout stays clean
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_max_level(log_level)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
    }
}

async fn run_server(service: IssueService) -> i32 {
    use linear_bridge::mcp::McpServer;
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let server = McpServer::new(service);

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");

        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(_running_service) => {
            tracing::info!("MCP server started successfully");

            ct.cancelled().await;

            tracing::info!("MCP server exited");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_ERROR
        }
    }
}
