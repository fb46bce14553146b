//! Package name helpers.

/// Separator between vendor and package in a `vendor/package` name.
pub const VENDOR_SEPARATOR: char = '/';

/// Get the vendor segment of a `vendor/package` name.
///
/// A name without a separator is its own vendor segment.
#[must_use]
pub fn vendor_segment(name: &str) -> &str {
    name.split_once(VENDOR_SEPARATOR)
        .map_or(name, |(vendor, _)| vendor)
}
