//! Read queries for the catalog database.
//!
//! Provides existence checks, per-service listings, and summary counts.

use rusqlite::{params, Row};
use streamcat_catalog::types::*;

use crate::error::OperationError;
use crate::repository::{optional, Catalog};

impl Catalog {
    // ── Services ────────────────────────────────────────────────────────

    /// List all services in insertion order.
    pub fn list_services(&self) -> Result<Vec<Service>, OperationError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price FROM services ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Service {
                id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Movies ──────────────────────────────────────────────────────────

    /// List all movies hosted by a service, in insertion order.
    pub fn list_movies(&self, service_name: &str) -> Result<Vec<Movie>, OperationError> {
        let service_id = self.require_service(service_name)?;
        let mut stmt = self.conn.prepare(
            "SELECT id, service_id, name, year, genre, rating, runtime
             FROM movies WHERE service_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![service_id], row_to_movie)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Whether the named service hosts a movie with this name.
    /// False when the service itself does not exist.
    pub fn movie_exists_in_service(
        &self,
        service_name: &str,
        movie_name: &str,
    ) -> Result<bool, OperationError> {
        let Some(service_id) = self.service_id(service_name)? else {
            return Ok(false);
        };
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM movies WHERE service_id = ?1 AND name = ?2)",
            params![service_id, movie_name],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// True only if no movie anywhere in the catalog has this name and year.
    pub fn movie_name_year_is_free(&self, name: &str, year: i64) -> Result<bool, OperationError> {
        let taken: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM movies WHERE name = ?1 AND year = ?2)",
            params![name, year],
            |row| row.get(0),
        )?;
        Ok(!taken)
    }

    // ── Series ──────────────────────────────────────────────────────────

    /// Seasons a service offers, ordered by series name then season number.
    pub fn list_series_for_service(
        &self,
        service_name: &str,
    ) -> Result<Vec<SeasonRow>, OperationError> {
        let service_id = self.require_service(service_name)?;
        let mut stmt = self.conn.prepare(
            "SELECT se.name, s.season_number, s.year, s.episode_count
             FROM seasons s
             JOIN series se ON se.id = s.series_id
             WHERE s.service_id = ?1
             ORDER BY se.name, s.season_number",
        )?;
        let rows = stmt.query_map(params![service_id], |row| {
            Ok(SeasonRow {
                series_name: row.get(0)?,
                season_number: row.get(1)?,
                year: row.get(2)?,
                episode_count: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Series a service carries, with or without seasons.
    pub fn series_on_service(&self, service_name: &str) -> Result<Vec<Series>, OperationError> {
        let service_id = self.require_service(service_name)?;
        let mut stmt = self.conn.prepare(
            "SELECT se.id, se.name, se.genre, se.rating
             FROM series se
             JOIN series_availability a ON a.series_id = se.id
             WHERE a.service_id = ?1
             ORDER BY se.name",
        )?;
        let rows = stmt.query_map(params![service_id], row_to_series)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Names of the services carrying a series. Empty if the series is unknown.
    pub fn services_for_series(&self, series_name: &str) -> Result<Vec<String>, OperationError> {
        let mut stmt = self.conn.prepare(
            "SELECT sv.name
             FROM series_availability a
             JOIN series se ON se.id = a.series_id
             JOIN services sv ON sv.id = a.service_id
             WHERE se.name = ?1
             ORDER BY sv.id",
        )?;
        let rows = stmt.query_map(params![series_name], |row| row.get::<_, String>(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Look up a series by name.
    pub fn find_series(&self, series_name: &str) -> Result<Option<Series>, OperationError> {
        optional(self.conn.query_row(
            "SELECT id, name, genre, rating FROM series WHERE name = ?1",
            params![series_name],
            row_to_series,
        ))
    }

    /// Every season of a series across all services.
    pub fn seasons_of_series(&self, series_name: &str) -> Result<Vec<Season>, OperationError> {
        let mut stmt = self.conn.prepare(
            "SELECT se.name, s.season_number, s.year, s.episode_count, sv.name
             FROM seasons s
             JOIN series se ON se.id = s.series_id
             JOIN services sv ON sv.id = s.service_id
             WHERE se.name = ?1
             ORDER BY s.season_number",
        )?;
        let rows = stmt.query_map(params![series_name], |row| {
            Ok(Season {
                series_name: row.get(0)?,
                season_number: row.get(1)?,
                year: row.get(2)?,
                episode_count: row.get(3)?,
                service_name: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Statistics ──────────────────────────────────────────────────────

    /// Row counts for every relation.
    pub fn catalog_stats(&self) -> Result<CatalogStats, OperationError> {
        let count = |table: &str| -> Result<i64, OperationError> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
            Ok(n)
        };

        Ok(CatalogStats {
            services: count("services")?,
            movies: count("movies")?,
            series: count("series")?,
            series_links: count("series_availability")?,
            seasons: count("seasons")?,
        })
    }
}

/// Catalog-wide row counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub services: i64,
    pub movies: i64,
    pub series: i64,
    pub series_links: i64,
    pub seasons: i64,
}

fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get(0)?,
        service_id: row.get(1)?,
        name: row.get(2)?,
        year: row.get(3)?,
        genre: row.get(4)?,
        rating: row.get(5)?,
        runtime: row.get(6)?,
    })
}

fn row_to_series(row: &Row<'_>) -> rusqlite::Result<Series> {
    Ok(Series {
        id: row.get(0)?,
        name: row.get(1)?,
        genre: row.get(2)?,
        rating: row.get(3)?,
    })
}
