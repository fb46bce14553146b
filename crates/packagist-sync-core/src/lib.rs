//! Core types and utilities for packagist-sync.
//!
//! This crate holds the pieces shared by the configuration resolver and the
//! registry client:
//!
//! - [`Error`] and [`ErrorKind`], the error taxonomy of a synchronization run
//! - JSON helpers backed by sonic-rs
//! - `composer.json` loading through the [`ManifestReader`] seam
//! - `vendor/package` name helpers

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod json;
pub mod manifest;
pub mod package;

pub use error::{Error, ErrorKind, Result, STATUS_CHECK_FAILED, TRANSPORT_FAILED};
pub use json::{from_json_slice, to_json};
pub use manifest::{FsManifestReader, MANIFEST_FILE, Manifest, ManifestReader};
pub use package::{VENDOR_SEPARATOR, vendor_segment};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
