//! streamcat CLI
//!
//! Command-line interface for managing a catalog of streaming services and
//! the movies, series, and seasons they offer.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: could not open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config { action } = cli.command {
        return commands::config::run_config(action, cli.db);
    }

    let db_path = settings::resolve_db_path(cli.db);
    log::debug!("Using catalog database {}", db_path.display());
    let catalog = commands::open_catalog(&db_path)?;

    match cli.command {
        Commands::Service { action } => commands::service::run_service(&catalog, action)?,
        Commands::Movie { action } => commands::movie::run_movie(&catalog, action)?,
        Commands::Series { action } => commands::series::run_series(&catalog, action)?,
        Commands::Season { action } => commands::season::run_season(&catalog, action)?,
        Commands::Import { path } => commands::import::run_import(&catalog, &path)?,
        Commands::Stats => commands::stats::run_stats(&catalog, &db_path)?,
        Commands::Config { .. } => unreachable!("handled before opening the database"),
    }

    catalog
        .close()
        .map_err(|e| CliError::database(format!("Failed to close catalog database: {}", e)))
}
