//! HTTP client for the Packagist package API.

use crate::sync::{PackageRegistry, RegistryFuture, UpdateOutcome};
use crate::types::{PackageListResponse, PackageRequest, StatusResponse};
use packagist_sync_config::SyncConfig;
use packagist_sync_core::{Error, Result, VERSION, from_json_slice, to_json};
use reqwest::{
    Client, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const CREATE_PACKAGE_ENDPOINT: &str = "api/create-package";
const UPDATE_PACKAGE_ENDPOINT: &str = "api/update-package";
const LIST_PACKAGES_ENDPOINT: &str = "packages/list.json";

/// HTTP settings for a [`RegistryClient`].
#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    /// Total request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("packagist-sync/{VERSION}"),
        }
    }
}

/// Client for one package on a Packagist-compatible registry.
///
/// Every setting is read from the owned [`SyncConfig`] when a request is
/// built, so missing values surface only in the operation that needs them.
pub struct RegistryClient {
    http: Client,
    config: SyncConfig,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("http", &"reqwest::Client")
            .field("config", &self.config)
            .finish()
    }
}

impl RegistryClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: SyncConfig) -> Result<Self> {
        Self::with_options(config, RegistryClientConfig::default())
    }

    /// Create a client with custom HTTP settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_options(config: SyncConfig, options: RegistryClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            debug!(error = %e, "failed to build HTTP client");
            Error::Transport
        })?;

        Ok(Self { http, config })
    }

    /// The settings this client works with.
    #[must_use]
    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Register the repository as a new package.
    ///
    /// # Errors
    /// Returns a configuration error, before any request, if the repository
    /// URL is not set; otherwise a registry or transport error.
    pub async fn create_package(&self) -> Result<()> {
        let url = self.api_url(CREATE_PACKAGE_ENDPOINT)?;
        let repository_url = self.config.github_repository_url()?;

        info!(repository = repository_url, "creating package");
        let response = self
            .post(url, &PackageRequest::new(repository_url))
            .await?;
        check_status(response).await
    }

    /// Ask the registry to refresh the package.
    ///
    /// A 404 answer is reported as [`UpdateOutcome::NotFound`].
    ///
    /// # Errors
    /// Returns a configuration, registry or transport error.
    pub async fn update_package(&self) -> Result<UpdateOutcome> {
        let url = self.api_url(UPDATE_PACKAGE_ENDPOINT)?;
        let package_name = self.config.package_name()?;
        let package_url = format!("{}/packages/{package_name}", self.base_url());

        info!(package = package_name, "updating package");
        let response = self.post(url, &PackageRequest::new(&package_url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(package = package_name, "registry does not know the package");
            return Ok(UpdateOutcome::NotFound {
                package_name: package_name.to_string(),
            });
        }

        check_status(response).await?;
        Ok(UpdateOutcome::Updated)
    }

    /// Check whether the package is listed under its vendor.
    ///
    /// # Errors
    /// Returns a configuration or transport error.
    pub async fn find_package_by_vendor_name(&self) -> Result<bool> {
        let vendor = self.config.vendor_name()?;
        let mut url = self.endpoint_url(LIST_PACKAGES_ENDPOINT)?;
        url.query_pairs_mut().append_pair("vendor", vendor);

        debug!(vendor, "listing vendor packages");
        let body = read_body(self.get(url).await?).await?;

        let list: PackageListResponse = match from_json_slice(&body) {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "unreadable package list");
                return Ok(false);
            }
        };

        Ok(list.contains(self.config.package_name()?))
    }

    /// `https://` plus the domain, or the domain itself if it has a scheme.
    fn base_url(&self) -> String {
        let domain = self.config.packagist_domain().trim_end_matches('/');
        if domain.contains("://") {
            domain.to_string()
        } else {
            format!("https://{domain}")
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}/{endpoint}", self.base_url());
        Url::parse(&raw).map_err(|e| {
            Error::config(format!(
                "Invalid registry domain '{}': {e}",
                self.config.packagist_domain()
            ))
        })
    }

    fn api_url(&self, endpoint: &str) -> Result<Url> {
        let username = self.config.packagist_username()?;
        let mut url = self.endpoint_url(endpoint)?;
        url.query_pairs_mut()
            .append_pair("username", username)
            .append_pair("apiToken", self.config.api_token()?);
        Ok(url)
    }

    async fn post(&self, url: Url, body: &PackageRequest<'_>) -> Result<Response> {
        let body = to_json(body)?;
        debug!(endpoint = url.path(), "POST request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;

        debug!(status = %response.status(), "POST request completed");
        Ok(response)
    }

    async fn get(&self, url: Url) -> Result<Response> {
        debug!(endpoint = url.path(), "GET request");

        let response = self.http.get(url).send().await.map_err(transport_error)?;

        debug!(status = %response.status(), "GET request completed");
        Ok(response)
    }
}

impl PackageRegistry for RegistryClient {
    fn update_package(&self) -> RegistryFuture<'_, UpdateOutcome> {
        Box::pin(Self::update_package(self))
    }

    fn create_package(&self) -> RegistryFuture<'_, ()> {
        Box::pin(Self::create_package(self))
    }
}

/// The underlying error is logged, never returned.
///
/// The request URL carries the API token, so it is stripped before logging.
fn transport_error(err: reqwest::Error) -> Error {
    let err = err.without_url();
    debug!(
        error = %err,
        timeout = err.is_timeout(),
        connect = err.is_connect(),
        "registry request failed"
    );
    Error::Transport
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    Ok(bytes.to_vec())
}

/// Fail unless the body reports `"status": "success"`.
async fn check_status(response: Response) -> Result<()> {
    let http_status = response.status();
    let body = read_body(response).await?;

    let parsed: StatusResponse = from_json_slice(&body).unwrap_or_default();
    if parsed.is_success() {
        return Ok(());
    }

    let message = parsed.message();
    debug!(status = %http_status, message = ?message, "registry reported failure");
    Err(Error::registry(message))
}
