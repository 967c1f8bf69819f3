//! The catalog repository: one owned SQLite connection plus the lookups
//! every other operation is gated on.

use std::path::Path;

use rusqlite::{params, Connection};
use streamcat_catalog::EntityKind;

use crate::error::OperationError;
use crate::schema::{self, SchemaError};

/// Repository over a single catalog database.
///
/// Owns its connection for its whole lifetime; dropping the `Catalog` (or
/// calling [`Catalog::close`]) releases it. Mutating operations live in
/// [`crate::operations`], read queries in [`crate::queries`].
#[derive(Debug)]
pub struct Catalog {
    pub(crate) conn: Connection,
}

impl Catalog {
    /// Open or create the catalog database file at `path`.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    /// Open a fresh in-memory catalog.
    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }

    /// Wrap an existing connection, enabling foreign keys and creating the
    /// schema if needed.
    pub fn new(conn: Connection) -> Result<Self, SchemaError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        schema::create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection for ad-hoc reads.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), SchemaError> {
        self.conn.close().map_err(|(_, e)| SchemaError::Sqlite(e))
    }

    // ── Lookups ─────────────────────────────────────────────────────────

    /// Resolve a service name to its id.
    pub fn service_id(&self, name: &str) -> Result<Option<i64>, OperationError> {
        optional(self.conn.query_row(
            "SELECT id FROM services WHERE name = ?1",
            params![name],
            |row| row.get(0),
        ))
    }

    /// Whether a service with this name exists.
    pub fn service_exists(&self, name: &str) -> Result<bool, OperationError> {
        Ok(self.service_id(name)?.is_some())
    }

    /// Resolve a series name to its id.
    pub fn series_id(&self, name: &str) -> Result<Option<i64>, OperationError> {
        optional(self.conn.query_row(
            "SELECT id FROM series WHERE name = ?1",
            params![name],
            |row| row.get(0),
        ))
    }

    /// Resolve a service name, turning absence into `NotFound`.
    pub(crate) fn require_service(&self, name: &str) -> Result<i64, OperationError> {
        self.service_id(name)?
            .ok_or_else(|| OperationError::not_found(EntityKind::Service, name))
    }

    pub(crate) fn link_exists(&self, series_id: i64, service_id: i64) -> Result<bool, OperationError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM series_availability WHERE series_id = ?1 AND service_id = ?2)",
            params![series_id, service_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

/// Map "no rows" to `None`, keeping every other error.
pub(crate) fn optional<T>(result: rusqlite::Result<T>) -> Result<Option<T>, OperationError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
