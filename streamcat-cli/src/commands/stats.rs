use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use streamcat_db::Catalog;

use crate::CliError;

pub(crate) fn run_stats(catalog: &Catalog, db_path: &Path) -> Result<(), CliError> {
    let stats = catalog
        .catalog_stats()
        .map_err(|e| CliError::database(format!("Failed to query catalog stats: {}", e)))?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Services:       {:>8}", stats.services);
    log::info!("  Movies:         {:>8}", stats.movies);
    log::info!("  Series:         {:>8}", stats.series);
    log::info!("  Series links:   {:>8}", stats.series_links);
    log::info!("  Seasons:        {:>8}", stats.seasons);

    Ok(())
}
