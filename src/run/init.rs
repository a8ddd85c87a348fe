//! Run initialization.
//!
//! Loading the catalog and building the resolver are the only steps whose
//! failure aborts a run.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::dns::HickoryTxtResolver;
use crate::error_handling::ProcessingStats;
use crate::initialization::{init_extractor, init_resolver};
use crate::scan::{ScanContext, ScanSettings};
use crate::signature::{CatalogOptions, SignatureCatalog};

use super::resources::ScanResources;

/// Loads the signature catalog selected by `--signatures` (built-in bundle
/// by default).
///
/// # Errors
///
/// Returns an error if the templates cannot be read, parsed or compiled, or
/// if they hold no signature.
pub async fn load_catalog(config: &Config) -> Result<SignatureCatalog> {
    let options = CatalogOptions {
        allow_unsupported_rules: config.allow_unsupported_rules,
    };

    let catalog = match &config.signatures {
        Some(path) => SignatureCatalog::load_from_path(path, options)
            .await
            .with_context(|| format!("Failed to load signatures from {}", path.display()))?,
        None => SignatureCatalog::builtin(options).context("Failed to load built-in signatures")?,
    };

    info!(
        "Loaded {} signatures from {}",
        catalog.len(),
        catalog.source()
    );
    Ok(catalog)
}

/// Initializes the catalog, resolver and scan context of a run.
pub async fn init_scan_resources(
    config: &Config,
    cancel: CancellationToken,
) -> Result<ScanResources> {
    let catalog = load_catalog(config).await?;
    let resolver = init_resolver(Duration::from_secs(config.dns_timeout_secs))
        .context("Failed to initialize DNS resolver")?;

    let ctx = ScanContext::new(
        HickoryTxtResolver::new(resolver),
        Arc::new(catalog),
        init_extractor(),
    )
    .with_settings(ScanSettings::from(config))
    .with_cancellation(cancel);

    Ok(ScanResources {
        ctx,
        stats: Arc::new(ProcessingStats::new()),
    })
}
