//! Outcome taxonomy for repository operations.

use rusqlite::ErrorCode;
use streamcat_catalog::{EntityKind, ValidationError};
use thiserror::Error;

use crate::schema::SchemaError;

/// Why a repository operation did not complete.
///
/// Every variant except [`OperationError::Sqlite`] and
/// [`OperationError::Schema`] is an expected business outcome that leaves the
/// store untouched; the caller reports it and carries on.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("{entity} '{name}' not found")]
    NotFound { entity: EntityKind, name: String },
    #[error("{entity} '{name}' already exists")]
    Duplicate { entity: EntityKind, name: String },
    #[error("{series} season {season_number} already exists on {service}")]
    DuplicateSeason {
        series: String,
        season_number: i64,
        service: String,
    },
    #[error("Invalid value: {0}")]
    ConstraintViolation(#[from] ValidationError),
}

impl OperationError {
    pub fn not_found(entity: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            name: name.into(),
        }
    }

    pub fn duplicate(entity: EntityKind, name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            name: name.into(),
        }
    }

    /// True when the store itself failed. These end the session; all other
    /// variants are recoverable.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Sqlite(_) | Self::Schema(_))
    }

    /// Classify a failed write. Constraint failures the pre-checks did not
    /// catch become business outcomes; anything else is a storage fault.
    pub(crate) fn from_write(err: rusqlite::Error, entity: EntityKind, name: &str) -> Self {
        if let rusqlite::Error::SqliteFailure(ref failure, ref message) = err {
            if failure.code == ErrorCode::ConstraintViolation {
                return match failure.extended_code {
                    rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                    | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                        Self::duplicate(entity, name)
                    }
                    rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Self::not_found(entity, name),
                    _ => Self::ConstraintViolation(ValidationError::Store(
                        message
                            .clone()
                            .unwrap_or_else(|| "constraint failed".to_string()),
                    )),
                };
            }
        }
        Self::Sqlite(err)
    }
}

/// Label for a (series, service) availability link in outcomes.
pub(crate) fn link_label(series_name: &str, service_name: &str) -> String {
    format!("{} on {}", series_name, service_name)
}
