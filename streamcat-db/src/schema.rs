//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Names of every relation the schema creates, in dependency order.
pub const TABLES: [&str; 5] = [
    "services",
    "movies",
    "series",
    "series_availability",
    "seasons",
];

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    log::debug!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Streaming platforms
CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
    price INTEGER NOT NULL CHECK (price >= 0)
);

-- Movies belong to exactly one service
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    service_id INTEGER NOT NULL REFERENCES services(id) ON DELETE CASCADE,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    year INTEGER NOT NULL CHECK (year BETWEEN 1888 AND 2025),
    genre TEXT NOT NULL CHECK (length(trim(genre)) > 0),
    rating INTEGER CHECK (rating BETWEEN 0 AND 5),
    runtime INTEGER NOT NULL CHECK (runtime BETWEEN 0 AND 10000),
    UNIQUE (name, year)
);
CREATE INDEX IF NOT EXISTS idx_movies_service_name ON movies(service_id, name);

-- Catalog-wide series
CREATE TABLE IF NOT EXISTS series (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
    genre TEXT NOT NULL CHECK (length(trim(genre)) > 0),
    rating INTEGER CHECK (rating BETWEEN 0 AND 5)
);

-- Which services carry which series
CREATE TABLE IF NOT EXISTS series_availability (
    series_id INTEGER NOT NULL REFERENCES series(id) ON DELETE CASCADE,
    service_id INTEGER NOT NULL REFERENCES services(id) ON DELETE CASCADE,
    PRIMARY KEY (series_id, service_id)
);
CREATE INDEX IF NOT EXISTS idx_availability_service ON series_availability(service_id);

-- Seasons hang off an availability link; numbers are unique per series
CREATE TABLE IF NOT EXISTS seasons (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    series_id INTEGER NOT NULL,
    service_id INTEGER NOT NULL,
    season_number INTEGER NOT NULL CHECK (season_number >= 0),
    year INTEGER NOT NULL,
    episode_count INTEGER NOT NULL CHECK (episode_count >= 0),
    UNIQUE (series_id, season_number),
    FOREIGN KEY (series_id, service_id)
        REFERENCES series_availability(series_id, service_id) ON DELETE CASCADE
);
CREATE INDEX IF NOT EXISTS idx_seasons_service ON seasons(service_id);
"#;
