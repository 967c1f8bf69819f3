//! SQLite persistence layer for the streaming catalog.
//!
//! Provides schema creation and the [`Catalog`] repository, whose CRUD and
//! validation operations guard every write against referential and
//! value-range errors. Backed by SQLite (via rusqlite with bundled feature).

pub mod error;
pub mod operations;
pub mod queries;
pub mod repository;
pub mod schema;
pub mod seed;

pub use error::OperationError;
pub use operations::{SeriesRemoval, ServiceRemoval};
pub use queries::CatalogStats;
pub use repository::Catalog;
pub use schema::{create_schema, open_database, open_memory, SchemaError};
pub use seed::SeedStats;
