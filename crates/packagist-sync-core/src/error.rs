//! Error types for packagist-sync operations.

use std::path::PathBuf;
use thiserror::Error;

/// Fallback message when a failed registry response carries no message.
pub const STATUS_CHECK_FAILED: &str = "An error occurred while checking the result status.";

/// Message reported for any transport-level failure.
pub const TRANSPORT_FAILED: &str = "An error occurred while communicating with the registry.";

/// Main error type for packagist-sync.
#[derive(Error, Debug)]
pub enum Error {
    /// A required value is missing after resolution.
    #[error("{0}")]
    Config(String),

    /// The manifest file does not exist.
    #[error("composer.json file not found at {}", path.display())]
    ManifestNotFound {
        /// Expected manifest path.
        path: PathBuf,
    },

    /// The manifest exists but could not be used.
    #[error("invalid manifest at {}: {message}", path.display())]
    InvalidManifest {
        /// Manifest path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("io error at {}: {message}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The registry has no package under this name.
    #[error("Could not find a package: {name}")]
    PackageNotFound {
        /// Package name.
        name: String,
    },

    /// The registry answered with a non-success status.
    #[error("{0}")]
    Registry(String),

    /// The registry could not be reached.
    #[error("{}", TRANSPORT_FAILED)]
    Transport,

    /// JSON error.
    #[error("json error: {0}")]
    Json(#[from] sonic_rs::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing value, unreadable or invalid manifest.
    Configuration,
    /// The registry does not know the package.
    PackageNotFound,
    /// The registry rejected the request.
    Registry,
    /// The registry could not be reached.
    Transport,
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a registry error, falling back to the generic status message.
    #[must_use]
    pub fn registry(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => Self::Registry(message),
            _ => Self::Registry(STATUS_CHECK_FAILED.to_string()),
        }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_)
            | Self::ManifestNotFound { .. }
            | Self::InvalidManifest { .. }
            | Self::Io { .. }
            | Self::Json(_) => ErrorKind::Configuration,
            Self::PackageNotFound { .. } => ErrorKind::PackageNotFound,
            Self::Registry(_) => ErrorKind::Registry,
            Self::Transport => ErrorKind::Transport,
        }
    }
}

/// Result type for packagist-sync operations.
pub type Result<T> = std::result::Result<T, Error>;
