//! Packagist registry client for packagist-sync.
//!
//! This crate talks to a Packagist-compatible registry on behalf of a single
//! package:
//!
//! - **`update-package`**: refresh an existing package; a 404 answer means the
//!   registry does not know it yet.
//! - **`create-package`**: register the package's repository.
//! - **`packages/list.json`**: check whether the package is listed under its
//!   vendor.
//!
//! [`synchronize`] chains the first two: update, and create on 404.
//!
//! ## Example
//!
//! ```no_run
//! use packagist_sync_config::SyncConfig;
//! use packagist_sync_repository::{RegistryClient, SyncOutcome, synchronize};
//!
//! # async fn example() -> packagist_sync_core::Result<()> {
//! let config = SyncConfig::builder()
//!     .api_token("your-api-token".to_string())
//!     .composer_json_path("/srv/project".to_string())
//!     .github_repository_url("https://github.com/acme/widget".to_string())
//!     .build();
//!
//! let client = RegistryClient::new(config)?;
//! match synchronize(&client).await? {
//!     SyncOutcome::Updated => println!("updated"),
//!     SyncOutcome::Created => println!("created"),
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod sync;
pub mod types;

pub use client::{RegistryClient, RegistryClientConfig};
pub use sync::{
    PackageRegistry, RegistryFuture, SyncEvent, SyncOutcome, UpdateOutcome, synchronize,
    synchronize_with,
};
pub use types::{PackageListResponse, PackageRequest, StatusResponse};
