//! Packagist API request and response types.

use serde::{Deserialize, Serialize};
use sonic_rs::{JsonContainerTrait, JsonValueTrait, Value};

/// Literal `status` value of a successful API call.
pub const STATUS_SUCCESS: &str = "success";

/// Body of `create-package` and `update-package` requests.
#[derive(Debug, Clone, Serialize)]
pub struct PackageRequest<'a> {
    /// Repository to register or refresh.
    pub repository: RepositoryRef<'a>,
}

impl<'a> PackageRequest<'a> {
    /// Request for the repository at `url`.
    #[must_use]
    pub const fn new(url: &'a str) -> Self {
        Self {
            repository: RepositoryRef { url },
        }
    }
}

/// Repository reference inside a [`PackageRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRef<'a> {
    /// Repository URL.
    pub url: &'a str,
}

/// Response of `create-package` and `update-package`.
///
/// Both fields are kept loosely typed: `message` is a string on some errors
/// and a list of strings on others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    /// `"success"` on success.
    #[serde(default)]
    pub status: Option<Value>,
    /// Error description.
    #[serde(default)]
    pub message: Option<Value>,
}

impl StatusResponse {
    /// Check whether the call succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_ref().and_then(|v| v.as_str()) == Some(STATUS_SUCCESS)
    }

    /// The error message; the first entry when the registry sends a list.
    ///
    /// Non-string values are rendered as JSON; `null` counts as absent.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let message = self.message.as_ref()?;
        let first = match message.as_array() {
            Some(list) => list.iter().next()?,
            None => message,
        };
        let text = match first.as_str() {
            Some(text) => text.to_string(),
            None if first.is_null() => return None,
            None => sonic_rs::to_string(first).ok()?,
        };
        Some(text).filter(|m| !m.is_empty())
    }
}

/// Response of `packages/list.json?vendor=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageListResponse {
    /// Names of the vendor's packages.
    #[serde(default, rename = "packageNames")]
    pub package_names: Option<Vec<String>>,
}

impl PackageListResponse {
    /// Check whether `name` is listed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.package_names
            .as_deref()
            .is_some_and(|names| names.iter().any(|n| n == name))
    }
}
