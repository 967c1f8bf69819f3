//! Bulk loading of YAML seed data through the repository operations.

use streamcat_catalog::CatalogSeed;

use crate::error::OperationError;
use crate::repository::Catalog;

/// Statistics from seeding the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub services_created: usize,
    pub services_existing: usize,
    pub movies_created: usize,
    pub series_linked: usize,
    pub seasons_created: usize,
    /// Entries rejected as duplicates, unknown references, or bad values.
    pub rejected: usize,
}

impl Catalog {
    /// Load a seed through the same checks as interactive edits.
    ///
    /// Safe to run repeatedly: services that already exist are reused, and
    /// rejected entries are logged and counted rather than aborting the
    /// load. Only storage faults stop it. Each entry commits on its own.
    pub fn seed(&self, seed: &CatalogSeed) -> Result<SeedStats, OperationError> {
        let mut stats = SeedStats::default();

        for service in &seed.services {
            match self.add_service(&service.name, service.price) {
                Ok(_) => stats.services_created += 1,
                Err(OperationError::Duplicate { .. }) => stats.services_existing += 1,
                Err(e) => {
                    reject(&mut stats, e)?;
                    continue;
                }
            }

            for movie in &service.movies {
                match self.add_movie(&service.name, movie) {
                    Ok(_) => stats.movies_created += 1,
                    Err(e) => reject(&mut stats, e)?,
                }
            }

            for series in &service.series {
                match self.add_series(&service.name, &series.name, &series.genre, series.rating) {
                    Ok(_) => stats.series_linked += 1,
                    Err(e) => reject(&mut stats, e)?,
                }
                for season in &series.seasons {
                    match self.add_season(
                        &service.name,
                        &series.name,
                        season.number,
                        season.year,
                        season.episodes,
                    ) {
                        Ok(_) => stats.seasons_created += 1,
                        Err(e) => reject(&mut stats, e)?,
                    }
                }
            }
        }

        Ok(stats)
    }
}

fn reject(stats: &mut SeedStats, err: OperationError) -> Result<(), OperationError> {
    if err.is_storage_fault() {
        return Err(err);
    }
    log::warn!("Skipping seed entry: {}", err);
    stats.rejected += 1;
    Ok(())
}
