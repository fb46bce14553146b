//! package:sync command - update the package, creating it when missing.

use super::PackageArgs;
use crate::output;
use anyhow::Result;
use clap::Args;
use packagist_sync_config::SyncEnvVar;
use packagist_sync_core::Error;
use packagist_sync_repository::{RegistryClient, SyncEvent, synchronize_with};
use tracing::info;

/// Arguments for the package:sync command
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Registry API token
    #[arg(value_name = "API_TOKEN")]
    pub api_token: String,

    /// Registry username [default: vendor of the package]
    #[arg(short = 'u', long, env = SyncEnvVar::PackagistUsername.as_str())]
    pub packagist_username: Option<String>,

    /// Repository URL to register when the package is created
    #[arg(short = 'g', long, env = SyncEnvVar::GithubRepositoryUrl.as_str())]
    pub github_repository_url: Option<String>,

    #[command(flatten)]
    pub package: PackageArgs,
}

/// Run the package:sync command
pub async fn run(args: SyncArgs) -> Result<()> {
    let config = args
        .package
        .config_builder()?
        .api_token(args.api_token)
        .packagist_username(args.packagist_username)
        .github_repository_url(args.github_repository_url)
        .build();
    info!(
        domain = config.packagist_domain(),
        manifest = %config.manifest_path().display(),
        "synchronizing package"
    );

    let client = RegistryClient::with_options(config, args.package.client_options())?;
    let outcome = synchronize_with(&client, report).await?;
    info!(?outcome, "synchronization finished");

    output::success("Package synchronization completed successfully.");
    Ok(())
}

fn report(event: SyncEvent<'_>) {
    match event {
        SyncEvent::Updating => output::progress("Trying to update the package..."),
        SyncEvent::NotFound { package_name } => output::error(
            &Error::PackageNotFound {
                name: package_name.to_string(),
            }
            .to_string(),
        ),
        SyncEvent::Creating => output::progress("Creating a new package..."),
    }
}
