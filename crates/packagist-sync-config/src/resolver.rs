//! Lazy, memoized resolution of synchronization settings.
//!
//! Explicit values always win. Anything left unset is derived on first use
//! from the other settings or from `composer.json`, and the result is cached
//! for the rest of the run.

use crate::path::normalize_dir;
use once_cell::unsync::OnceCell;
use packagist_sync_core::{
    Error, FsManifestReader, MANIFEST_FILE, Manifest, ManifestReader, Result, vendor_segment,
};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Registry used when no domain is given.
pub const DEFAULT_DOMAIN: &str = "packagist.org";

const API_TOKEN_NOT_FOUND: &str = "API token not found.";
const PACKAGE_NAME_NOT_FOUND: &str = "Package name not found.";
const VENDOR_NAME_NOT_FOUND: &str = "Vendor name not found.";
const REPOSITORY_URL_NOT_FOUND: &str = "Github repository url not found.";

/// Collects explicit settings for a [`SyncConfig`].
///
/// Setters accept anything convertible into `Option<String>`; `None` and
/// empty strings leave the setting to be derived.
#[derive(Debug, Default)]
pub struct SyncConfigBuilder {
    api_token: Option<String>,
    packagist_username: Option<String>,
    package_name: Option<String>,
    vendor_name: Option<String>,
    packagist_domain: Option<String>,
    github_repository_url: Option<String>,
    composer_json_path: Option<String>,
    reader: Option<Box<dyn ManifestReader>>,
}

impl SyncConfigBuilder {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry API token.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<Option<String>>) -> Self {
        self.api_token = set(token);
        self
    }

    /// Set the Packagist username.
    #[must_use]
    pub fn packagist_username(mut self, username: impl Into<Option<String>>) -> Self {
        self.packagist_username = set(username);
        self
    }

    /// Set the package name (`vendor/package`).
    #[must_use]
    pub fn package_name(mut self, name: impl Into<Option<String>>) -> Self {
        self.package_name = set(name);
        self
    }

    /// Set the vendor name.
    #[must_use]
    pub fn vendor_name(mut self, vendor: impl Into<Option<String>>) -> Self {
        self.vendor_name = set(vendor);
        self
    }

    /// Set the registry domain.
    #[must_use]
    pub fn packagist_domain(mut self, domain: impl Into<Option<String>>) -> Self {
        self.packagist_domain = set(domain);
        self
    }

    /// Set the repository URL used when the package has to be created.
    #[must_use]
    pub fn github_repository_url(mut self, url: impl Into<Option<String>>) -> Self {
        self.github_repository_url = set(url);
        self
    }

    /// Set the directory containing `composer.json`.
    #[must_use]
    pub fn composer_json_path(mut self, path: impl Into<Option<String>>) -> Self {
        self.composer_json_path = set(path);
        self
    }

    /// Replace the manifest reader.
    #[must_use]
    pub fn manifest_reader(mut self, reader: impl ManifestReader + 'static) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    /// Finish the configuration.
    ///
    /// Nothing is validated here; each getter reports its own missing value.
    #[must_use]
    pub fn build(self) -> SyncConfig {
        let composer_json_path =
            normalize_dir(self.composer_json_path.as_deref().unwrap_or_default());

        SyncConfig {
            api_token: self.api_token,
            packagist_domain: self
                .packagist_domain
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            github_repository_url: self.github_repository_url,
            composer_json_path,
            explicit_username: self.packagist_username,
            explicit_package_name: self.package_name,
            explicit_vendor_name: self.vendor_name,
            reader: self
                .reader
                .unwrap_or_else(|| Box::new(FsManifestReader)),
            manifest: OnceCell::new(),
            package_name: OnceCell::new(),
            vendor_name: OnceCell::new(),
            packagist_username: OnceCell::new(),
        }
    }
}

fn set(value: impl Into<Option<String>>) -> Option<String> {
    value.into().filter(|v| !v.is_empty())
}

/// Settings for one synchronization run.
///
/// Derived settings are computed at most once; a getter that fails may be
/// retried, a getter that succeeded always returns the cached value.
pub struct SyncConfig {
    api_token: Option<String>,
    packagist_domain: String,
    github_repository_url: Option<String>,
    composer_json_path: String,
    explicit_username: Option<String>,
    explicit_package_name: Option<String>,
    explicit_vendor_name: Option<String>,
    reader: Box<dyn ManifestReader>,
    manifest: OnceCell<Manifest>,
    package_name: OnceCell<String>,
    vendor_name: OnceCell<String>,
    packagist_username: OnceCell<String>,
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("api_token", &"<redacted>")
            .field("packagist_domain", &self.packagist_domain)
            .field("github_repository_url", &self.github_repository_url)
            .field("composer_json_path", &self.composer_json_path)
            .field("package_name", &self.package_name.get())
            .field("vendor_name", &self.vendor_name.get())
            .field("packagist_username", &self.packagist_username.get())
            .field("manifest_loaded", &self.manifest.get().is_some())
            .finish()
    }
}

impl SyncConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::new()
    }

    /// API token passed to the registry.
    pub fn api_token(&self) -> Result<&str> {
        self.api_token
            .as_deref()
            .ok_or_else(|| Error::config(API_TOKEN_NOT_FOUND))
    }

    /// Registry domain.
    #[must_use]
    pub fn packagist_domain(&self) -> &str {
        &self.packagist_domain
    }

    /// Normalized manifest directory, e.g. `/srv/project/`.
    #[must_use]
    pub fn composer_json_path(&self) -> &str {
        &self.composer_json_path
    }

    /// Full path of `composer.json`.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{MANIFEST_FILE}", self.composer_json_path))
    }

    /// The manifest, read on first access.
    pub fn manifest(&self) -> Result<&Manifest> {
        self.manifest
            .get_or_try_init(|| Manifest::load(self.reader.as_ref(), &self.manifest_path()))
    }

    /// Package name: explicit, else the manifest `name`.
    pub fn package_name(&self) -> Result<&str> {
        self.package_name
            .get_or_try_init(|| {
                if let Some(name) = &self.explicit_package_name {
                    return Ok(name.clone());
                }
                let name = self
                    .manifest()?
                    .name()
                    .ok_or_else(|| Error::config(PACKAGE_NAME_NOT_FOUND))?;
                debug!(package = name, "package name taken from manifest");
                Ok(name.to_string())
            })
            .map(String::as_str)
    }

    /// Vendor name: explicit, else the vendor segment of the package name,
    /// else the vendor segment of the manifest `name`.
    pub fn vendor_name(&self) -> Result<&str> {
        self.vendor_name
            .get_or_try_init(|| {
                if let Some(vendor) = &self.explicit_vendor_name {
                    return Ok(vendor.clone());
                }
                let vendor = match self.package_name() {
                    Ok(name) => Some(vendor_segment(name)),
                    Err(Error::Config(_)) => self.manifest()?.name().map(vendor_segment),
                    Err(e) => return Err(e),
                };
                vendor
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .ok_or_else(|| Error::config(VENDOR_NAME_NOT_FOUND))
            })
            .map(String::as_str)
    }

    /// Packagist username: explicit, else the vendor name.
    pub fn packagist_username(&self) -> Result<&str> {
        self.packagist_username
            .get_or_try_init(|| match &self.explicit_username {
                Some(username) => Ok(username.clone()),
                None => self.vendor_name().map(str::to_string),
            })
            .map(String::as_str)
    }

    /// Repository URL. Only required when creating a package.
    pub fn github_repository_url(&self) -> Result<&str> {
        self.github_repository_url
            .as_deref()
            .ok_or_else(|| Error::config(REPOSITORY_URL_NOT_FOUND))
    }
}
