use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::ConfigAction;
use crate::settings;
use crate::CliError;

pub(crate) fn run_config(action: ConfigAction, cli_db: Option<PathBuf>) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => run_config_show(cli_db),
        ConfigAction::SetDb { path } => run_config_set_db(path)?,
        ConfigAction::Path => log::info!("{}", settings::settings_path().display()),
    }
    Ok(())
}

/// Show the settings file and where the database resolves to.
fn run_config_show(cli_db: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "streamcat Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if cli_db.is_some() {
        "--db flag"
    } else if settings::load_db_path().is_some() {
        "settings file"
    } else {
        "default"
    };
    let db_path = settings::resolve_db_path(cli_db);
    log::info!(
        "  Database:      {} ({})",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        source,
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

fn run_config_set_db(path: Option<PathBuf>) -> Result<(), CliError> {
    let absolute = match path {
        Some(p) if p.is_relative() => Some(std::env::current_dir()?.join(p)),
        other => other,
    };
    settings::save_db_path(absolute.as_deref())
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    match absolute {
        Some(p) => log::info!("Database path set to {}", p.display()),
        None => log::info!(
            "Database path cleared; using {}",
            settings::default_db_path().display()
        ),
    }
    Ok(())
}
