//! package:exists command - check the vendor's package list.

use super::PackageArgs;
use crate::output;
use anyhow::Result;
use clap::Args;
use packagist_sync_repository::RegistryClient;
use tracing::info;

/// Arguments for the package:exists command
#[derive(Args, Debug, Clone)]
pub struct ExistsArgs {
    /// Vendor to list [default: vendor of the package]
    #[arg(long)]
    pub vendor: Option<String>,

    #[command(flatten)]
    pub package: PackageArgs,
}

/// Run the package:exists command.
///
/// Returns whether the package is listed.
pub async fn run(args: ExistsArgs) -> Result<bool> {
    let config = args
        .package
        .config_builder()?
        .vendor_name(args.vendor)
        .build();
    let client = RegistryClient::with_options(config, args.package.client_options())?;

    let package_name = client.config().package_name()?.to_string();
    let vendor_name = client.config().vendor_name()?.to_string();
    info!(
        package = %package_name,
        vendor = %vendor_name,
        manifest_dir = client.config().composer_json_path(),
        "checking package list"
    );

    let theme = output::Theme::from_env();
    let listed = client.find_package_by_vendor_name().await?;
    if listed {
        output::success(&format!(
            "Package {} is listed under vendor {vendor_name}.",
            theme.package(&package_name)
        ));
    } else {
        output::info(&format!(
            "Package {} is not listed under vendor {vendor_name}.",
            theme.package(&package_name)
        ));
    }
    Ok(listed)
}
