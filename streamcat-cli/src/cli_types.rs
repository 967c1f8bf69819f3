//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "streamcat")]
#[command(about = "Manage a catalog of streaming services, movies, and series", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the configured or per-user location)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Manage streaming services
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Manage the movies a service hosts
    Movie {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Manage series and which services carry them
    Series {
        #[command(subcommand)]
        action: SeriesAction,
    },

    /// Manage seasons of a series on a service
    Season {
        #[command(subcommand)]
        action: SeasonAction,
    },

    /// Load services, movies, and series from a YAML file or directory
    Import {
        /// Seed file, or a directory of .yaml/.yml files
        path: PathBuf,
    },

    /// Show row counts for the catalog database
    Stats,

    /// Manage streamcat settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ServiceAction {
    /// Add a new service
    #[command(allow_negative_numbers = true)]
    Add {
        name: String,
        /// Monthly price (whole currency units)
        price: i64,
    },

    /// Remove a service with all its movies, seasons, and series links
    Remove { name: String },

    /// List all services
    List,
}

#[derive(Subcommand)]
pub(crate) enum MovieAction {
    /// Add a movie to a service
    #[command(allow_negative_numbers = true)]
    Add {
        service: String,
        name: String,

        /// Release year (1888-2025)
        #[arg(long)]
        year: i64,

        #[arg(long)]
        genre: String,

        /// Rating (0-5)
        #[arg(long)]
        rating: Option<i64>,

        /// Runtime in minutes (0-10000)
        #[arg(long)]
        runtime: i64,
    },

    /// Remove a movie from a service
    Remove { service: String, name: String },

    /// Set a movie's rating on a service (omit the rating to clear it)
    #[command(allow_negative_numbers = true)]
    Rate {
        service: String,
        name: String,
        rating: Option<i64>,
    },

    /// List all movies for a service
    List { service: String },
}

#[derive(Subcommand)]
pub(crate) enum SeriesAction {
    /// Make a series available on a service, creating it if needed
    #[command(allow_negative_numbers = true)]
    Add {
        service: String,
        name: String,

        #[arg(long)]
        genre: String,

        /// Rating (0-5)
        #[arg(long)]
        rating: Option<i64>,
    },

    /// Take a series off a service (deleted once no service carries it)
    Remove { service: String, name: String },

    /// Set a series' rating (omit the rating to clear it)
    #[command(allow_negative_numbers = true)]
    Rate { name: String, rating: Option<i64> },

    /// List the series and seasons a service offers
    List { service: String },

    /// Show which services carry a series and where each season is
    Where { name: String },
}

#[derive(Subcommand)]
pub(crate) enum SeasonAction {
    /// Add a season of a series to a service
    #[command(allow_negative_numbers = true)]
    Add {
        service: String,
        series: String,
        number: i64,

        #[arg(long)]
        year: i64,

        /// Number of episodes
        #[arg(long)]
        episodes: i64,
    },

    /// Remove a season of a series
    Remove { series: String, number: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Save the default database path (omit to clear)
    SetDb { path: Option<PathBuf> },

    /// Print the settings file path
    Path,
}
