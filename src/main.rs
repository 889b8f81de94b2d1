//! portal-census — frequency-ranked preservation-assessment reports.
//!
//! Thin binary entry point. All logic lives in the `census-core` crate.

use std::path::Path;

/// Optional JSON configuration looked up in the working directory.
/// Absent file means defaults; there are no command-line flags.
const CONFIG_FILE: &str = "portal-census.json";

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("portal-census starting");

    let config = census_core::CensusConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let summary = census_core::pipeline::run(&config)?;

    tracing::info!(
        "done: {} catalog rows, {} download rows, {} downloads attributed to a file format ({} omitted)",
        summary.file_rows,
        summary.download_rows,
        summary.format_downloads,
        summary.dropped_downloads,
    );

    Ok(())
}
