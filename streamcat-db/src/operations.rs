//! Mutating operations for every catalog entity.
//!
//! Each operation re-checks existence and uniqueness before writing and
//! commits before returning. Operations touching more than one row run in a
//! single transaction, so a rejected call leaves no partial writes.

use rusqlite::params;
use streamcat_catalog::validate;
use streamcat_catalog::{EntityKind, NewMovie};

use crate::error::{link_label, OperationError};
use crate::repository::{optional, Catalog};

/// Rows removed along with a service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRemoval {
    pub movies: usize,
    pub seasons: usize,
    pub series_links: usize,
    /// Series deleted because this service was their last availability.
    pub series: usize,
}

/// Rows removed along with a series availability link.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRemoval {
    pub seasons: usize,
    /// Whether the series itself was deleted (no other service carries it).
    pub series_deleted: bool,
}

const DELETE_ORPHANED_SERIES: &str =
    "DELETE FROM series WHERE id NOT IN (SELECT series_id FROM series_availability)";

impl Catalog {
    // ── Service Operations ──────────────────────────────────────────────

    /// Insert a new service. Returns the generated ID.
    pub fn add_service(&self, name: &str, price: i64) -> Result<i64, OperationError> {
        validate::check_name("service name", name)?;
        validate::check_price(price)?;
        if self.service_exists(name)? {
            return Err(OperationError::duplicate(EntityKind::Service, name));
        }

        self.conn
            .execute(
                "INSERT INTO services (name, price) VALUES (?1, ?2)",
                params![name, price],
            )
            .map_err(|e| OperationError::from_write(e, EntityKind::Service, name))?;
        let id = self.conn.last_insert_rowid();
        log::debug!("Added service '{}' (id {})", name, id);
        Ok(id)
    }

    /// Remove a service and everything hosted on it.
    ///
    /// Movies, seasons, and availability links of the service are deleted,
    /// then any series no other service carries.
    pub fn remove_service(&self, name: &str) -> Result<ServiceRemoval, OperationError> {
        let service_id = self.require_service(name)?;

        let tx = self.conn.unchecked_transaction()?;
        let mut removal = ServiceRemoval {
            movies: tx.execute("DELETE FROM movies WHERE service_id = ?1", [service_id])?,
            seasons: tx.execute("DELETE FROM seasons WHERE service_id = ?1", [service_id])?,
            series_links: tx.execute(
                "DELETE FROM series_availability WHERE service_id = ?1",
                [service_id],
            )?,
            series: 0,
        };
        tx.execute("DELETE FROM services WHERE id = ?1", [service_id])?;
        removal.series = tx.execute(DELETE_ORPHANED_SERIES, [])?;
        tx.commit()?;

        log::debug!("Removed service '{}': {:?}", name, removal);
        Ok(removal)
    }

    // ── Movie Operations ────────────────────────────────────────────────

    /// Add a movie to a service. Returns the generated ID.
    ///
    /// The (name, year) pair must be free across the whole catalog.
    pub fn add_movie(&self, service_name: &str, movie: &NewMovie) -> Result<i64, OperationError> {
        let service_id = self.require_service(service_name)?;
        movie.validate()?;
        if !self.movie_name_year_is_free(&movie.name, movie.year)? {
            return Err(OperationError::duplicate(
                EntityKind::Movie,
                movie_label(&movie.name, movie.year),
            ));
        }

        self.conn
            .execute(
                "INSERT INTO movies (service_id, name, year, genre, rating, runtime)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    service_id,
                    movie.name,
                    movie.year,
                    movie.genre,
                    movie.rating,
                    movie.runtime,
                ],
            )
            .map_err(|e| {
                OperationError::from_write(
                    e,
                    EntityKind::Movie,
                    &movie_label(&movie.name, movie.year),
                )
            })?;
        let id = self.conn.last_insert_rowid();
        log::debug!("Added movie '{}' to '{}' (id {})", movie.name, service_name, id);
        Ok(id)
    }

    /// Remove every movie with this name from the given service.
    /// Returns how many rows were deleted.
    pub fn remove_movie(&self, service_name: &str, movie_name: &str) -> Result<usize, OperationError> {
        if movie_name.trim().is_empty() {
            return Err(OperationError::not_found(EntityKind::Movie, movie_name));
        }
        let service_id = self.require_service(service_name)?;

        let removed = self.conn.execute(
            "DELETE FROM movies WHERE service_id = ?1 AND name = ?2",
            params![service_id, movie_name],
        )?;
        if removed == 0 {
            return Err(OperationError::not_found(EntityKind::Movie, movie_name));
        }
        log::debug!("Removed {} movie(s) '{}' from '{}'", removed, movie_name, service_name);
        Ok(removed)
    }

    /// Set (or clear, with `None`) the rating of a movie on a service.
    /// Returns how many rows were updated.
    pub fn edit_movie_rating(
        &self,
        service_name: &str,
        movie_name: &str,
        rating: Option<i64>,
    ) -> Result<usize, OperationError> {
        if movie_name.trim().is_empty() {
            return Err(OperationError::not_found(EntityKind::Movie, movie_name));
        }
        let service_id = self.require_service(service_name)?;
        validate::check_rating(rating)?;

        let updated = self
            .conn
            .execute(
                "UPDATE movies SET rating = ?3 WHERE service_id = ?1 AND name = ?2",
                params![service_id, movie_name, rating],
            )
            .map_err(|e| OperationError::from_write(e, EntityKind::Movie, movie_name))?;
        if updated == 0 {
            return Err(OperationError::not_found(EntityKind::Movie, movie_name));
        }
        Ok(updated)
    }

    // ── Series Operations ───────────────────────────────────────────────

    /// Make a series available on a service, creating the series first if
    /// the catalog has never seen it. Returns the series ID.
    ///
    /// `genre` and `rating` only apply when the series is created. Linking a
    /// series the service already carries is rejected as a duplicate.
    pub fn add_series(
        &self,
        service_name: &str,
        series_name: &str,
        genre: &str,
        rating: Option<i64>,
    ) -> Result<i64, OperationError> {
        let service_id = self.require_service(service_name)?;
        validate::check_name("series name", series_name)?;
        validate::check_name("genre", genre)?;
        validate::check_rating(rating)?;

        let tx = self.conn.unchecked_transaction()?;
        let existing = optional(tx.query_row(
            "SELECT id FROM series WHERE name = ?1",
            params![series_name],
            |row| row.get::<_, i64>(0),
        ))?;
        let series_id = match existing {
            Some(id) => id,
            None => {
                tx.execute(
                    "INSERT INTO series (name, genre, rating) VALUES (?1, ?2, ?3)",
                    params![series_name, genre, rating],
                )
                .map_err(|e| OperationError::from_write(e, EntityKind::Series, series_name))?;
                tx.last_insert_rowid()
            }
        };
        let linked = tx.execute(
            "INSERT OR IGNORE INTO series_availability (series_id, service_id) VALUES (?1, ?2)",
            params![series_id, service_id],
        )?;
        tx.commit()?;

        if linked == 0 {
            return Err(OperationError::duplicate(
                EntityKind::SeriesAvailability,
                link_label(series_name, service_name),
            ));
        }
        log::debug!("Linked series '{}' to '{}'", series_name, service_name);
        Ok(series_id)
    }

    /// Take a series off a service, with its seasons there. The series
    /// itself is deleted once no service carries it.
    pub fn remove_series(
        &self,
        service_name: &str,
        series_name: &str,
    ) -> Result<SeriesRemoval, OperationError> {
        let service_id = self.require_service(service_name)?;
        let not_linked = || {
            OperationError::not_found(
                EntityKind::SeriesAvailability,
                link_label(series_name, service_name),
            )
        };
        let series_id = self.series_id(series_name)?.ok_or_else(not_linked)?;
        if !self.link_exists(series_id, service_id)? {
            return Err(not_linked());
        }

        let tx = self.conn.unchecked_transaction()?;
        let seasons = tx.execute(
            "DELETE FROM seasons WHERE series_id = ?1 AND service_id = ?2",
            params![series_id, service_id],
        )?;
        tx.execute(
            "DELETE FROM series_availability WHERE series_id = ?1 AND service_id = ?2",
            params![series_id, service_id],
        )?;
        let remaining: i64 = tx.query_row(
            "SELECT COUNT(*) FROM series_availability WHERE series_id = ?1",
            [series_id],
            |row| row.get(0),
        )?;
        let series_deleted = remaining == 0;
        if series_deleted {
            tx.execute("DELETE FROM series WHERE id = ?1", [series_id])?;
        }
        tx.commit()?;

        log::debug!(
            "Removed series '{}' from '{}' ({} season(s), series deleted: {})",
            series_name,
            service_name,
            seasons,
            series_deleted,
        );
        Ok(SeriesRemoval {
            seasons,
            series_deleted,
        })
    }

    /// Set (or clear) a series' catalog-wide rating.
    pub fn edit_series_rating(&self, series_name: &str, rating: Option<i64>) -> Result<(), OperationError> {
        validate::check_rating(rating)?;
        let updated = self
            .conn
            .execute(
                "UPDATE series SET rating = ?2 WHERE name = ?1",
                params![series_name, rating],
            )
            .map_err(|e| OperationError::from_write(e, EntityKind::Series, series_name))?;
        if updated == 0 {
            return Err(OperationError::not_found(EntityKind::Series, series_name));
        }
        Ok(())
    }

    // ── Season Operations ───────────────────────────────────────────────

    /// Add a season of a series on a service. Returns the generated ID.
    ///
    /// The series must already be available on the service, and the season
    /// number must not be taken for this series on any service.
    pub fn add_season(
        &self,
        service_name: &str,
        series_name: &str,
        season_number: i64,
        year: i64,
        episode_count: i64,
    ) -> Result<i64, OperationError> {
        let service_id = self.require_service(service_name)?;
        validate::check_season_number(season_number)?;
        validate::check_episode_count(episode_count)?;

        let holder = optional(self.conn.query_row(
            "SELECT sv.name FROM seasons s
             JOIN series se ON se.id = s.series_id
             JOIN services sv ON sv.id = s.service_id
             WHERE se.name = ?1 AND s.season_number = ?2",
            params![series_name, season_number],
            |row| row.get::<_, String>(0),
        ))?;
        if let Some(service) = holder {
            return Err(OperationError::DuplicateSeason {
                series: series_name.to_string(),
                season_number,
                service,
            });
        }

        let not_linked = || {
            OperationError::not_found(
                EntityKind::SeriesAvailability,
                link_label(series_name, service_name),
            )
        };
        let series_id = self.series_id(series_name)?.ok_or_else(not_linked)?;
        if !self.link_exists(series_id, service_id)? {
            return Err(not_linked());
        }

        self.conn
            .execute(
                "INSERT INTO seasons (series_id, service_id, season_number, year, episode_count)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![series_id, service_id, season_number, year, episode_count],
            )
            .map_err(|e| {
                OperationError::from_write(
                    e,
                    EntityKind::Season,
                    &season_label(series_name, season_number),
                )
            })?;
        let id = self.conn.last_insert_rowid();
        log::debug!(
            "Added {} to '{}' (id {})",
            season_label(series_name, season_number),
            service_name,
            id,
        );
        Ok(id)
    }

    /// Remove a season, wherever it is offered.
    pub fn remove_season(&self, series_name: &str, season_number: i64) -> Result<(), OperationError> {
        let removed = self.conn.execute(
            "DELETE FROM seasons
             WHERE season_number = ?2
               AND series_id = (SELECT id FROM series WHERE name = ?1)",
            params![series_name, season_number],
        )?;
        if removed == 0 {
            return Err(OperationError::not_found(
                EntityKind::Season,
                season_label(series_name, season_number),
            ));
        }
        log::debug!("Removed {}", season_label(series_name, season_number));
        Ok(())
    }
}

fn movie_label(name: &str, year: i64) -> String {
    format!("{} ({})", name, year)
}

fn season_label(series_name: &str, season_number: i64) -> String {
    format!("{} season {}", series_name, season_number)
}
