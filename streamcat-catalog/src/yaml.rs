//! YAML loading for catalog seed files.
//!
//! A seed file lists services with the movies and series they carry. A seed
//! path may be a single file or a directory of `.yaml`/`.yml` files, which
//! are merged in file-name order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::NewMovie;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Seed path not found: {0}")]
    NotFound(String),
}

/// Top-level document of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub services: Vec<ServiceSeed>,
}

/// A service together with everything it hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSeed {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub movies: Vec<NewMovie>,
    #[serde(default)]
    pub series: Vec<SeriesSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSeed {
    pub name: String,
    pub genre: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub seasons: Vec<SeasonSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSeed {
    pub number: i64,
    pub year: i64,
    pub episodes: i64,
}

impl CatalogSeed {
    /// Append another seed's services after this one's.
    pub fn merge(&mut self, other: CatalogSeed) {
        self.services.extend(other.services);
    }
}

/// Parse a seed document from a string. `origin` is only used in errors.
pub fn parse_seed(contents: &str, origin: &str) -> Result<CatalogSeed, YamlError> {
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    })
}

/// Load a seed from a file, or from every YAML file in a directory.
pub fn load_seed(path: &Path) -> Result<CatalogSeed, YamlError> {
    if !path.exists() {
        return Err(YamlError::NotFound(path.display().to_string()));
    }
    if path.is_dir() {
        return load_seed_dir(path);
    }
    load_seed_file(path)
}

fn load_seed_file(path: &Path) -> Result<CatalogSeed, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&contents, &path.display().to_string())
}

fn load_seed_dir(dir: &Path) -> Result<CatalogSeed, YamlError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut seed = CatalogSeed::default();
    for entry in entries {
        seed.merge(load_seed_file(&entry.path())?);
    }
    Ok(seed)
}
