//! CLI commands for packagist-sync.

pub mod exists;
pub mod sync;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use packagist_sync_config::{SyncConfigBuilder, SyncEnvVar};
use packagist_sync_repository::RegistryClientConfig;
use std::path::Path;
use std::time::Duration;

/// packagist-sync - keep a Packagist package in step with its repository
#[derive(Parser, Debug)]
#[command(name = "packagist-sync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_ansi: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Update the package on the registry, creating it if it does not exist
    #[command(name = "package:sync", alias = "sync")]
    Sync(sync::SyncArgs),

    /// Check whether the package is listed under its vendor
    #[command(name = "package:exists", alias = "exists")]
    Exists(exists::ExistsArgs),
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct PackageArgs {
    /// Package name as vendor/package [default: name from composer.json]
    #[arg(short = 'p', long, env = SyncEnvVar::PackageName.as_str())]
    pub package_name: Option<String>,

    /// Registry domain, optionally with a scheme [default: packagist.org]
    #[arg(short = 'd', long, env = SyncEnvVar::PackagistDomain.as_str())]
    pub packagist_domain: Option<String>,

    /// Directory holding composer.json, relative to the workspace
    #[arg(short = 'c', long, env = SyncEnvVar::ComposerJsonPath.as_str())]
    pub composer_json_path: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl PackageArgs {
    /// Start a configuration from these options.
    ///
    /// The manifest directory is resolved against `GITHUB_WORKSPACE`, or the
    /// current directory when that is unset.
    pub fn config_builder(&self) -> Result<SyncConfigBuilder> {
        let base = match SyncEnvVar::GithubWorkspace.value() {
            Some(workspace) => workspace,
            None => std::env::current_dir()
                .context("failed to read the current directory")?
                .to_string_lossy()
                .into_owned(),
        };
        let dir = manifest_dir(&base, self.composer_json_path.as_deref());

        Ok(packagist_sync_config::SyncConfig::builder()
            .package_name(self.package_name.clone())
            .packagist_domain(self.packagist_domain.clone())
            .composer_json_path(dir))
    }

    /// HTTP settings from these options.
    pub fn client_options(&self) -> RegistryClientConfig {
        RegistryClientConfig {
            timeout: self.timeout.map(Duration::from_secs),
            ..RegistryClientConfig::default()
        }
    }
}

/// Join the manifest directory onto `base`.
pub fn manifest_dir(base: &str, path: Option<&str>) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => Path::new(base)
            .join(path.trim_start_matches('/'))
            .to_string_lossy()
            .into_owned(),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sync() {
        let cli = Cli::try_parse_from([
            "packagist-sync",
            "-vv",
            "package:sync",
            "secret",
            "-u",
            "alice",
            "-p",
            "acme/widget",
            "-d",
            "repo.example.com",
            "-g",
            "https://github.com/acme/widget",
            "-c",
            "packages/widget",
            "--timeout",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Sync(args) = cli.command else {
            panic!("expected package:sync");
        };
        assert_eq!(args.api_token, "secret");
        assert_eq!(args.packagist_username.as_deref(), Some("alice"));
        assert_eq!(args.package.package_name.as_deref(), Some("acme/widget"));
        assert_eq!(
            args.package.packagist_domain.as_deref(),
            Some("repo.example.com")
        );
        assert_eq!(
            args.github_repository_url.as_deref(),
            Some("https://github.com/acme/widget")
        );
        assert_eq!(
            args.package.composer_json_path.as_deref(),
            Some("packages/widget")
        );
        assert_eq!(
            args.package.client_options().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn sync_alias_and_global_flags() {
        let cli =
            Cli::try_parse_from(["packagist-sync", "sync", "secret", "--quiet", "--no-ansi"])
                .unwrap();
        assert!(cli.quiet);
        assert!(cli.no_ansi);
        assert!(matches!(cli.command, Commands::Sync(_)));
    }

    #[test]
    fn sync_requires_token() {
        assert!(Cli::try_parse_from(["packagist-sync", "package:sync"]).is_err());
    }

    #[test]
    fn parse_exists() {
        let cli = Cli::try_parse_from([
            "packagist-sync",
            "exists",
            "--vendor",
            "acme",
            "-p",
            "acme/widget",
        ])
        .unwrap();
        let Commands::Exists(args) = cli.command else {
            panic!("expected package:exists");
        };
        assert_eq!(args.vendor.as_deref(), Some("acme"));
        assert_eq!(args.package.package_name.as_deref(), Some("acme/widget"));
        assert_eq!(args.package.client_options().timeout, None);
    }

    #[test]
    fn manifest_dir_joins_path() {
        assert_eq!(manifest_dir("/github/workspace", None), "/github/workspace");
        assert_eq!(manifest_dir("/github/workspace", Some("")), "/github/workspace");
        assert_eq!(
            manifest_dir("/github/workspace", Some("packages/widget")),
            "/github/workspace/packages/widget"
        );
        assert_eq!(
            manifest_dir("/github/workspace/", Some("/packages/widget/")),
            "/github/workspace/packages/widget/"
        );
    }

    #[test]
    fn manifest_dir_feeds_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("composer.json"), r#"{"name": "acme/widget"}"#).unwrap();

        let base = dir.path().to_string_lossy().into_owned();
        let config = packagist_sync_config::SyncConfig::builder()
            .composer_json_path(manifest_dir(&base, None))
            .build();

        assert_eq!(config.package_name().unwrap(), "acme/widget");
        assert_eq!(config.vendor_name().unwrap(), "acme");
    }
}
