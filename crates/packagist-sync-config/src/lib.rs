//! Configuration resolution for packagist-sync.
//!
//! A [`SyncConfig`] is assembled from explicit values (CLI flags, falling back
//! to the [`SyncEnvVar`] variables) and completed lazily from `composer.json`:
//!
//! | Setting | Resolution order |
//! |---|---|
//! | package name | explicit, manifest `name` |
//! | vendor name | explicit, vendor of the package name, vendor of the manifest `name` |
//! | username | explicit, vendor name |
//! | domain | explicit, [`DEFAULT_DOMAIN`] |
//! | repository URL | explicit only |
//!
//! # Example
//!
//! ```no_run
//! use packagist_sync_config::SyncConfig;
//!
//! # fn example() -> packagist_sync_core::Result<()> {
//! let config = SyncConfig::builder()
//!     .api_token("api-token".to_string())
//!     .composer_json_path("/srv/project".to_string())
//!     .build();
//!
//! println!("{} by {}", config.package_name()?, config.packagist_username()?);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod path;
pub mod resolver;

pub use env::{SyncEnvVar, non_empty};
pub use path::normalize_dir;
pub use resolver::{DEFAULT_DOMAIN, SyncConfig, SyncConfigBuilder};
