//! Payload shapes exchanged with the admin API
//!
//! All of these are transient request/response values owned by the server;
//! the client never mutates server state through them except by sending a
//! whole `AdminConfig` back on update.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// License
// =============================================================================

/// Subset of license fields the server exposes to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientLicense {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    /// Boolean entitlements encoded in the license (e.g. "LDAP")
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

impl ClientLicense {
    /// True when the named feature flag is present and enabled
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }

    /// True when any license is installed on the server
    pub fn is_installed(&self) -> bool {
        self.sku.is_some() || self.features.values().any(|enabled| *enabled)
    }
}

/// Envelope the server wraps license payloads in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LicenseEnvelope {
    pub license: ClientLicense,
}

// =============================================================================
// Config
// =============================================================================

/// The server's full runtime configuration object
///
/// Nested key/value settings; the server is the source of truth. Callers may
/// mutate a fetched copy and send it back wholesale via `update_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminConfig(pub serde_json::Map<String, Value>);

impl AdminConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }
}

/// Envelope the server wraps config payloads in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ConfigEnvelope {
    pub config: AdminConfig,
}

// =============================================================================
// Analytics
// =============================================================================

/// One analytics metric; the server defines the ordering of the sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub name: String,
    pub value: Value,
}

/// Envelope the server wraps analytics payloads in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AnalyticsEnvelope {
    pub analytics: Vec<AnalyticsRow>,
}

// =============================================================================
// Raw outcomes
// =============================================================================

/// Captured status and body for operations whose only contract is
/// "succeeded or acceptably failed"
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Outcome of the idempotent brand-image delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandImageOutcome {
    /// The server deleted an existing image (HTTP 200)
    Deleted,
    /// No image was installed; treated as success (HTTP 404)
    AlreadyAbsent,
}

/// Raw status payload returned by the cache invalidation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheInvalidation(pub Value);
