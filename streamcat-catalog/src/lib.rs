//! Streaming catalog data model types, value validation, and YAML seed files.
//!
//! This crate defines the persistent data model without any database
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `streamcat-db` for persistence.

pub mod types;
pub mod validate;
pub mod yaml;

pub use types::*;
pub use validate::ValidationError;
pub use yaml::{load_seed, parse_seed, CatalogSeed, SeasonSeed, SeriesSeed, ServiceSeed, YamlError};
