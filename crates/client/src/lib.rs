//! Relay Admin API Test Client
//!
//! Helpers for test suites that drive the Relay server's administrative REST
//! endpoints: license upload/removal, configuration read/update/reload,
//! analytics retrieval, cache invalidation and brand-image deletion.
//!
//! Each helper issues exactly one HTTP exchange (the "require license"
//! helpers issue up to three) and either returns the parsed payload or fails
//! the calling test with a typed error. There is no retry logic and no local
//! state beyond the ambient admin session token.

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod types;

pub use client::AdminClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{AdminClientError, AdminResult};
pub use types::{
    AdminConfig, AnalyticsRow, BrandImageOutcome, CacheInvalidation, ClientLicense, RawResponse,
};
