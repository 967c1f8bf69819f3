//! Application settings: where the catalog database lives.
//!
//! The settings file is `~/.config/streamcat/settings.toml`; the database
//! defaults to `<data dir>/streamcat/catalog.db`.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("streamcat").join("settings.toml")
}

/// Database location used when nothing else is configured.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("streamcat").join("catalog.db")
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. [`default_db_path`]
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_db_path() {
        return p;
    }
    default_db_path()
}

/// Read `database.path` from `settings.toml`, if set.
pub(crate) fn load_db_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub(crate) fn save_db_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
