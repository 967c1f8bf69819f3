//! Value-range rules shared by the repository and the seed loader.
//!
//! The database enforces the same ranges with CHECK constraints; checking
//! here first lets callers get a precise field name in the error.

use thiserror::Error;

/// Earliest accepted movie release year.
pub const MIN_YEAR: i64 = 1888;
/// Latest accepted movie release year.
pub const MAX_YEAR: i64 = 2025;
pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;
/// Upper bound for a movie runtime, in minutes.
pub const MAX_RUNTIME: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
    /// A constraint reported by the store rather than by these checks.
    #[error("{0}")]
    Store(String),
}

pub fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn check_rating(rating: Option<i64>) -> Result<(), ValidationError> {
    match rating {
        Some(value) => check_range("rating", value, MIN_RATING, MAX_RATING),
        None => Ok(()),
    }
}

pub fn check_year(year: i64) -> Result<(), ValidationError> {
    check_range("year", year, MIN_YEAR, MAX_YEAR)
}

pub fn check_runtime(runtime: i64) -> Result<(), ValidationError> {
    check_range("runtime", runtime, 0, MAX_RUNTIME)
}

pub fn check_price(price: i64) -> Result<(), ValidationError> {
    check_non_negative("price", price)
}

pub fn check_season_number(number: i64) -> Result<(), ValidationError> {
    check_non_negative("season number", number)
}

pub fn check_episode_count(count: i64) -> Result<(), ValidationError> {
    check_non_negative("episode count", count)
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}
