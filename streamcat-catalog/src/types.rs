//! Data model types for the streaming catalog.
//!
//! These types represent the persistent catalog schema: services, the movies
//! they host, series and where they are available, and per-service seasons.
//! Integer fields are `i64` so out-of-range input can be represented and
//! rejected by [`crate::validate`] instead of failing to parse.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationError};

// ── Service ─────────────────────────────────────────────────────────────────

/// A streaming platform. `name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie hosted by exactly one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub service_id: i64,
    pub name: String,
    pub year: i64,
    pub genre: String,
    pub rating: Option<i64>,
    /// Runtime in minutes.
    pub runtime: i64,
}

/// Field values for a movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub year: i64,
    pub genre: String,
    #[serde(default)]
    pub rating: Option<i64>,
    pub runtime: i64,
}

impl NewMovie {
    pub fn new(
        name: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        rating: Option<i64>,
        runtime: i64,
    ) -> Self {
        Self {
            name: name.into(),
            year,
            genre: genre.into(),
            rating,
            runtime,
        }
    }

    /// Check every field against the catalog's value ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::check_name("movie name", &self.name)?;
        validate::check_year(self.year)?;
        validate::check_name("genre", &self.genre)?;
        validate::check_rating(self.rating)?;
        validate::check_runtime(self.runtime)?;
        Ok(())
    }
}

// ── Series ──────────────────────────────────────────────────────────────────

/// A TV series. Catalog-wide, independent of any one service; it lives as
/// long as at least one [`SeriesAvailability`] references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub rating: Option<i64>,
}

/// Records that a service carries a series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesAvailability {
    pub series_name: String,
    pub service_name: String,
}

// ── Season ──────────────────────────────────────────────────────────────────

/// A numbered season of a series, offered by one service.
///
/// `(series_name, season_number)` is unique catalog-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub series_name: String,
    pub season_number: i64,
    pub year: i64,
    pub episode_count: i64,
    pub service_name: String,
}

/// Projection returned when listing the seasons a service offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRow {
    pub series_name: String,
    pub season_number: i64,
    pub year: i64,
    pub episode_count: i64,
}

// ── Entity kinds ────────────────────────────────────────────────────────────

/// Which relation an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Service,
    Movie,
    Series,
    SeriesAvailability,
    Season,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Movie => "movie",
            Self::Series => "series",
            Self::SeriesAvailability => "series availability",
            Self::Season => "season",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
