//! Unified error handling for the Linear Bridge library
//!
//! Every operation is a single request/response exchange against the remote
//! service, so errors are terminal for the operation in progress and are
//! never retried.

use thiserror::Error;

/// The main error type for the Linear Bridge library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinearBridgeError {
    /// A required configuration value is absent
    #[error("{0} is not set in the environment")]
    NotConfigured(&'static str),

    /// Issue lookup yielded nothing
    #[error("issue {0} not found")]
    NotFound(String),

    /// The create mutation succeeded at the transport level but returned no
    /// issue payload
    #[error("failed to create issue")]
    CreationFailed,

    /// The update mutation returned no issue payload
    #[error("failed to update issue {0}")]
    UpdateFailed(String),

    /// The delete mutation reported non-success
    #[error("failed to delete issue {0}")]
    DeletionFailed(String),

    /// Any other failure reported by the remote API, surfaced with the
    /// underlying message and not classified further
    #[error("Linear API error: {0}")]
    Api(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Linear Bridge operations
pub type Result<T> = std::result::Result<T, LinearBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_names_the_variable() {
        let err = LinearBridgeError::NotConfigured("LINEAR_TEAM_ID");
        assert!(err.to_string().contains("LINEAR_TEAM_ID"));
    }

    #[test]
    fn not_found_names_the_issue() {
        let err = LinearBridgeError::NotFound("ABC-123".to_string());
        assert_eq!(err.to_string(), "issue ABC-123 not found");
    }
}
