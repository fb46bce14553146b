//! Environment variables consulted when a CLI flag is not given.

/// Environment variables understood by packagist-sync.
///
/// The `INPUT_*` names follow the GitHub Actions convention for action inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEnvVar {
    /// Packagist username.
    PackagistUsername,
    /// Package name (`vendor/package`).
    PackageName,
    /// Registry domain.
    PackagistDomain,
    /// Repository URL used when creating a package.
    GithubRepositoryUrl,
    /// Manifest directory, relative to the workspace.
    ComposerJsonPath,
    /// Checkout directory on GitHub Actions runners.
    GithubWorkspace,
}

impl SyncEnvVar {
    /// Variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PackagistUsername => "INPUT_PACKAGIST-USERNAME",
            Self::PackageName => "INPUT_PACKAGE-NAME",
            Self::PackagistDomain => "INPUT_PACKAGIST-DOMAIN",
            Self::GithubRepositoryUrl => "INPUT_GITHUB-REPOSITORY-URL",
            Self::ComposerJsonPath => "INPUT_COMPOSER-JSON-PATH",
            Self::GithubWorkspace => "GITHUB_WORKSPACE",
        }
    }

    /// Current value. Empty values count as unset.
    #[must_use]
    pub fn value(self) -> Option<String> {
        non_empty(std::env::var(self.as_str()).ok())
    }
}

impl std::fmt::Display for SyncEnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an empty string as an absent value.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
