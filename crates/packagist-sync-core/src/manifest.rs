//! `composer.json` loading.

use crate::{Error, Result};
use sonic_rs::{JsonValueTrait, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manifest file name.
pub const MANIFEST_FILE: &str = "composer.json";

/// Source of manifest file contents.
pub trait ManifestReader: fmt::Debug {
    /// Read the manifest at `path`.
    ///
    /// # Errors
    /// Returns [`Error::ManifestNotFound`] if there is no file at `path`.
    fn read(&self, path: &Path) -> Result<String>;
}

/// Reads manifests from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestReader;

impl ManifestReader for FsManifestReader {
    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::io(path, e)
            }
        })
    }
}

/// A parsed `composer.json` object.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    data: Value,
}

impl Manifest {
    /// Load the manifest located at `path` through `reader`.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or not a JSON object.
    pub fn load(reader: &dyn ManifestReader, path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading manifest");
        let content = reader.read(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest content read from `path`.
    ///
    /// # Errors
    /// Returns error if `content` is not a JSON object.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let data: Value = sonic_rs::from_str(content).map_err(|e| Error::InvalidManifest {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if !data.is_object() {
            return Err(Error::InvalidManifest {
                path,
                message: "expected a JSON object".to_string(),
            });
        }

        Ok(Self { path, data })
    }

    /// Path the manifest was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a top-level value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The `name` field, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name")
            .and_then(|v| v.as_str())
            .filter(|name| !name.is_empty())
    }
}
