//! Error types for the admin test client

use std::path::PathBuf;

/// Error type for admin API operations
#[derive(Debug, thiserror::Error)]
pub enum AdminClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Fixture file not found: {0}")]
    MissingFixture(PathBuf),

    #[error("Failed to read fixture {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("License feature '{0}' still missing after uploading the fixture license")]
    FeatureNotLicensed(String),

    #[error("No license installed after uploading the fixture license")]
    LicenseNotInstalled,

    #[error("Feature name must not be empty")]
    EmptyFeatureName,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminClientError {
    pub(crate) fn unexpected(endpoint: &str, status: u16, body: String) -> Self {
        Self::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status,
            body,
        }
    }
}

/// Result type for admin API operations
pub type AdminResult<T> = Result<T, AdminClientError>;
