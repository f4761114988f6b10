//! Admin API test client
//!
//! Translates each helper invocation into exactly one HTTP request against a
//! documented admin endpoint, awaits the response, validates its status, and
//! surfaces either the parsed payload or a typed failure to the caller.

use std::path::PathBuf;

use reqwest::multipart;
use reqwest::{Client, Method, RequestBuilder};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AdminClientError, AdminResult};
use crate::fixtures::{self, LICENSE_FIXTURE};
use crate::types::{
    AdminConfig, AnalyticsEnvelope, AnalyticsRow, BrandImageOutcome, CacheInvalidation,
    ClientLicense, ConfigEnvelope, LicenseEnvelope, RawResponse,
};

/// Client for the Relay server's administrative REST endpoints
///
/// Stateless apart from the ambient admin session token; every operation is
/// an independent request/response exchange.
pub struct AdminClient {
    http: Client,
    base_url: String,
    admin_token: String,
    fixtures_dir: PathBuf,
}

impl AdminClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> AdminResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            admin_token: config.admin_token,
            fixtures_dir: config.fixtures_dir,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.admin_token)
    }

    /// Send a request and validate its status against the documented success set
    async fn exchange(
        &self,
        path: &str,
        builder: RequestBuilder,
        expected: &[u16],
    ) -> AdminResult<RawResponse> {
        debug!(endpoint = path, "issuing admin API request");
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !expected.contains(&status) {
            warn!(endpoint = path, status, "unexpected admin API status");
            return Err(AdminClientError::unexpected(path, status, body));
        }

        Ok(RawResponse { status, body })
    }

    // =========================================================================
    // License
    // =========================================================================

    /// Fetch the client-scoped license snapshot
    pub async fn get_client_license(&self) -> AdminResult<ClientLicense> {
        let response = self
            .exchange(
                "/license/client",
                self.request(Method::GET, "/license/client"),
                &[200],
            )
            .await?;
        let envelope: LicenseEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.license)
    }

    /// Upload a license fixture as a multipart file
    ///
    /// The fixture is resolved and read before any request is sent; a missing
    /// file fails without touching the network.
    pub async fn upload_license(&self, fixture_name: &str) -> AdminResult<RawResponse> {
        let bytes = fixtures::read(&self.fixtures_dir, fixture_name)?;
        let part = multipart::Part::bytes(bytes).file_name(fixture_name.to_string());
        let form = multipart::Form::new().part("license", part);

        self.exchange(
            "/license",
            self.request(Method::POST, "/license").multipart(form),
            &[200],
        )
        .await
    }

    /// Remove the installed license
    pub async fn delete_license(&self) -> AdminResult<RawResponse> {
        self.exchange("/license", self.request(Method::DELETE, "/license"), &[200])
            .await
    }

    /// Ensure some license is installed, uploading the fixture license if not
    ///
    /// Explicit check-then-act with an idempotent guard: when a license is
    /// already present no upload is issued, so back-to-back calls perform at
    /// most one upload in total.
    pub async fn require_license(&self) -> AdminResult<ClientLicense> {
        let license = self.get_client_license().await?;
        if license.is_installed() {
            return Ok(license);
        }

        self.upload_license(LICENSE_FIXTURE).await?;

        let license = self.get_client_license().await?;
        if license.is_installed() {
            Ok(license)
        } else {
            Err(AdminClientError::LicenseNotInstalled)
        }
    }

    /// Ensure the installed license enables a feature, uploading the fixture
    /// license if the flag is absent
    pub async fn require_license_for_feature(&self, feature: &str) -> AdminResult<ClientLicense> {
        if feature.is_empty() {
            return Err(AdminClientError::EmptyFeatureName);
        }

        let license = self.get_client_license().await?;
        if license.has_feature(feature) {
            return Ok(license);
        }

        self.upload_license(LICENSE_FIXTURE).await?;

        let license = self.get_client_license().await?;
        if license.has_feature(feature) {
            Ok(license)
        } else {
            Err(AdminClientError::FeatureNotLicensed(feature.to_string()))
        }
    }

    // =========================================================================
    // Config
    // =========================================================================

    /// Fetch the full server configuration
    pub async fn get_config(&self) -> AdminResult<AdminConfig> {
        let response = self
            .exchange("/config", self.request(Method::GET, "/config"), &[200])
            .await?;
        let envelope: ConfigEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.config)
    }

    /// Replace the server configuration wholesale
    ///
    /// The server echoes the persisted configuration, which may differ from
    /// the submitted one in server-normalized fields.
    pub async fn update_config(&self, config: &AdminConfig) -> AdminResult<AdminConfig> {
        let response = self
            .exchange(
                "/config",
                self.request(Method::PUT, "/config").json(config),
                &[200],
            )
            .await?;
        let envelope: ConfigEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.config)
    }

    /// Ask the server to reload its configuration, then re-fetch it
    pub async fn reload_config(&self) -> AdminResult<AdminConfig> {
        self.exchange(
            "/config/reload",
            self.request(Method::POST, "/config/reload"),
            &[200],
        )
        .await?;

        self.get_config().await
    }

    // =========================================================================
    // Analytics, caches, branding
    // =========================================================================

    /// Fetch the server's analytics metrics (server-defined order)
    pub async fn get_analytics(&self) -> AdminResult<Vec<AnalyticsRow>> {
        let response = self
            .exchange(
                "/analytics/old",
                self.request(Method::GET, "/analytics/old"),
                &[200],
            )
            .await?;
        let envelope: AnalyticsEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.analytics)
    }

    /// Invalidate the server's caches and return its status payload
    pub async fn invalidate_caches(&self) -> AdminResult<CacheInvalidation> {
        let response = self
            .exchange(
                "/caches/invalidate",
                self.request(Method::POST, "/caches/invalidate"),
                &[200],
            )
            .await?;
        Ok(CacheInvalidation(serde_json::from_str(&response.body)?))
    }

    /// Delete the custom brand image; absence counts as success
    pub async fn delete_brand_image(&self) -> AdminResult<BrandImageOutcome> {
        let response = self
            .exchange(
                "/brand/image",
                self.request(Method::DELETE, "/brand/image"),
                &[200, 404],
            )
            .await?;

        Ok(match response.status {
            404 => BrandImageOutcome::AlreadyAbsent,
            _ => BrandImageOutcome::Deleted,
        })
    }
}
