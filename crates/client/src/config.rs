//! Client configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the server's public API, e.g. "http://localhost:8111/api"
    pub base_url: String,
    /// Admin session token attached to every request
    pub admin_token: String,
    /// Directory holding fixture files for upload operations
    pub fixtures_dir: PathBuf,
    /// Per-request timeout; on expiry the call fails the enclosing test
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            base_url: env::var("RELAY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8111".to_string()),
            admin_token: env::var("RELAY_ADMIN_TOKEN")
                .map_err(|_| ConfigError::Missing("RELAY_ADMIN_TOKEN"))?,
            fixtures_dir: env::var("RELAY_FIXTURES_DIR")
                .unwrap_or_else(|_| "tests/fixtures".to_string())
                .into(),
            request_timeout: Duration::from_millis(
                env::var("RELAY_REQUEST_TIMEOUT_MS")
                    .unwrap_or_else(|_| "30000".to_string())
                    .parse()
                    .unwrap_or(30000),
            ),
        })
    }

    /// Construct a configuration directly, for tests against a mock server
    pub fn new(base_url: impl Into<String>, admin_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            admin_token: admin_token.into(),
            fixtures_dir: PathBuf::from("tests/fixtures"),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Override the fixtures directory
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn cleanup_config() {
        env::remove_var("RELAY_BASE_URL");
        env::remove_var("RELAY_ADMIN_TOKEN");
        env::remove_var("RELAY_FIXTURES_DIR");
        env::remove_var("RELAY_REQUEST_TIMEOUT_MS");
    }

    // Config tests run serially because they modify shared env vars
    #[test]
    #[serial]
    fn test_from_env_requires_admin_token() {
        cleanup_config();

        let result = ClientConfig::from_env();
        match result {
            Err(ConfigError::Missing("RELAY_ADMIN_TOKEN")) => {}
            other => panic!("Expected Missing error for RELAY_ADMIN_TOKEN, got: {:?}", other),
        }

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup_config();
        env::set_var("RELAY_ADMIN_TOKEN", "test-admin-token");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8111");
        assert_eq!(config.fixtures_dir, PathBuf::from("tests/fixtures"));
        assert_eq!(config.request_timeout, Duration::from_millis(30000));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        cleanup_config();
        env::set_var("RELAY_ADMIN_TOKEN", "test-admin-token");
        env::set_var("RELAY_BASE_URL", "https://relay.example.com/api");
        env::set_var("RELAY_FIXTURES_DIR", "/opt/fixtures");
        env::set_var("RELAY_REQUEST_TIMEOUT_MS", "5000");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://relay.example.com/api");
        assert_eq!(config.admin_token, "test-admin-token");
        assert_eq!(config.fixtures_dir, PathBuf::from("/opt/fixtures"));
        assert_eq!(config.request_timeout, Duration::from_millis(5000));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_falls_back_to_default() {
        cleanup_config();
        env::set_var("RELAY_ADMIN_TOKEN", "test-admin-token");
        env::set_var("RELAY_REQUEST_TIMEOUT_MS", "not-a-number");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(30000));

        cleanup_config();
    }
}
