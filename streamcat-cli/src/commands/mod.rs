pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod movie;
pub(crate) mod season;
pub(crate) mod series;
pub(crate) mod service;
pub(crate) mod stats;

use std::path::Path;

use streamcat_db::{Catalog, OperationError};

use crate::CliError;

/// Open (creating if needed) the catalog database, including its directory.
pub(crate) fn open_catalog(path: &Path) -> Result<Catalog, CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Catalog::open(path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database {}: {}",
            path.display(),
            e
        ))
    })
}

/// Report a rejected operation as a warning and yield `None`. Storage
/// faults are returned as errors and end the session.
pub(crate) fn outcome<T>(result: Result<T, OperationError>) -> Result<Option<T>, CliError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_storage_fault() => Err(CliError::database(e.to_string())),
        Err(e) => {
            log::warn!("{}", e);
            Ok(None)
        }
    }
}

/// Render an optional 0-5 rating.
pub(crate) fn format_rating(rating: Option<i64>) -> String {
    match rating {
        Some(r) => format!("{}/5", r),
        None => "unrated".to_string(),
    }
}
