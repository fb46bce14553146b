//! Manifest directory normalization.

/// Directory separator used in manifest paths.
pub const SEPARATOR: char = '/';

/// Normalize a directory path to exactly one leading and one trailing separator.
///
/// Every leading and trailing separator is stripped before wrapping, so
/// `foo/bar`, `/foo/bar`, `foo/bar/` and `//foo/bar//` all become `/foo/bar/`.
/// An empty path normalizes to the root, `/`.
#[must_use]
pub fn normalize_dir(path: &str) -> String {
    let trimmed = path.trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return SEPARATOR.to_string();
    }
    format!("{SEPARATOR}{trimmed}{SEPARATOR}")
}
