//! Environment-backed configuration
//!
//! Two settings matter: the API credential and the ambient default team
//! identifier. The credential is required up front; the team identifier is
//! only required by team-scoped operations (create/list/update), so it loads
//! as an `Option` and the operations layer reports `NotConfigured` when a
//! team-scoped call runs without it.

use std::env;

use crate::error::{LinearBridgeError, Result};

/// Environment variable holding the Linear API credential
pub const API_KEY_VAR: &str = "LINEAR_API_KEY";

/// Environment variable holding the default team identifier
pub const TEAM_ID_VAR: &str = "LINEAR_TEAM_ID";

/// Environment variable overriding the GraphQL endpoint
pub const API_URL_VAR: &str = "LINEAR_API_URL";

const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Immutable configuration for a process launch
#[derive(Debug, Clone)]
pub struct Config {
    /// Static API credential presented on every request
    pub api_key: String,
    /// Ambient default team identifier used by team-scoped operations
    pub team_id: Option<String>,
    /// GraphQL endpoint
    pub api_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails with [`LinearBridgeError::NotConfigured`] when the API
    /// credential is absent. A missing team identifier is not an error here;
    /// it only fails the team-scoped operations that need it.
    pub fn from_env() -> Result<Self> {
        let api_key = load_env_optional(API_KEY_VAR)
            .ok_or(LinearBridgeError::NotConfigured(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            team_id: load_env_optional(TEAM_ID_VAR),
            api_url: load_env_string(API_URL_VAR, DEFAULT_API_URL),
        })
    }

    /// Build a configuration from explicit values, mainly for tests
    pub fn new(api_key: impl Into<String>, team_id: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            team_id,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Load an environment variable with a string default
fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as an `Option`, treating empty values as unset
fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_requires_api_key() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(TEAM_ID_VAR);

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            LinearBridgeError::NotConfigured(API_KEY_VAR)
        ));
    }

    #[test]
    #[serial]
    fn from_env_team_id_is_optional() {
        env::set_var(API_KEY_VAR, "lin_api_test");
        env::remove_var(TEAM_ID_VAR);
        env::remove_var(API_URL_VAR);

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "lin_api_test");
        assert_eq!(config.team_id, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        env::remove_var(API_KEY_VAR);
    }

    #[test]
    #[serial]
    fn from_env_reads_all_values() {
        env::set_var(API_KEY_VAR, "lin_api_test");
        env::set_var(TEAM_ID_VAR, "team-1");
        env::set_var(API_URL_VAR, "http://localhost:8089/graphql");

        let config = Config::from_env().unwrap();
        assert_eq!(config.team_id.as_deref(), Some("team-1"));
        assert_eq!(config.api_url, "http://localhost:8089/graphql");

        env::remove_var(API_KEY_VAR);
        env::remove_var(TEAM_ID_VAR);
        env::remove_var(API_URL_VAR);
    }

    #[test]
    #[serial]
    fn empty_api_key_counts_as_unset() {
        env::set_var(API_KEY_VAR, "");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, LinearBridgeError::NotConfigured(_)));
        env::remove_var(API_KEY_VAR);
    }
}
