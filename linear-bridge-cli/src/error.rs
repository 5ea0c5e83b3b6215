//! Error handling for the Linear CLI
//!
//! Maps every failure onto the exit code contract: message on stderr,
//! exit 1.

use std::error::Error;
use std::fmt;

use linear_bridge::LinearBridgeError;

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// CLI-specific result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error carrying a message and the exit code to use
#[derive(Debug)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Process exit code
    pub exit_code: i32,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<LinearBridgeError> for CliError {
    fn from(error: LinearBridgeError) -> Self {
        // The library error's Display already carries the underlying
        // transport message, so it becomes the printed message directly.
        Self {
            message: error.to_string(),
            exit_code: EXIT_ERROR,
        }
    }
}

/// Convert a `CliResult` into an exit code, printing the error to stderr
/// on failure
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code
        }
    }
}
