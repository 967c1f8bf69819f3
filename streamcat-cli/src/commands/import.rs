use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use streamcat_db::Catalog;

use crate::CliError;

/// Load a YAML seed file (or directory) into the catalog.
pub(crate) fn run_import(catalog: &Catalog, path: &Path) -> Result<(), CliError> {
    let seed = streamcat_catalog::load_seed(path).map_err(|e| CliError::import(e.to_string()))?;
    log::info!(
        "Importing {} service(s) from {}",
        seed.services.len(),
        path.display(),
    );

    let stats = catalog
        .seed(&seed)
        .map_err(|e| CliError::database(format!("Import failed: {}", e)))?;

    log::info!("{}", "Import complete.".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Services:  {:>6} created, {} existing",
        stats.services_created,
        stats.services_existing,
    );
    log::info!("  Movies:    {:>6} created", stats.movies_created);
    log::info!("  Series:    {:>6} linked", stats.series_linked);
    log::info!("  Seasons:   {:>6} created", stats.seasons_created);
    if stats.rejected > 0 {
        log::warn!("{} entries were skipped (see warnings above)", stats.rejected);
    }
    Ok(())
}
