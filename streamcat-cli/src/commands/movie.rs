use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use streamcat_catalog::NewMovie;
use streamcat_db::Catalog;

use crate::cli_types::MovieAction;
use crate::CliError;

use super::{format_rating, outcome};

pub(crate) fn run_movie(catalog: &Catalog, action: MovieAction) -> Result<(), CliError> {
    match action {
        MovieAction::Add {
            service,
            name,
            year,
            genre,
            rating,
            runtime,
        } => {
            let movie = NewMovie::new(name, year, genre, rating, runtime);
            if outcome(catalog.add_movie(&service, &movie))?.is_some() {
                log::info!(
                    "Movie '{}' added to service '{}'.",
                    movie.name.if_supports_color(Stdout, |t| t.bold()),
                    service,
                );
            }
        }
        MovieAction::Remove { service, name } => {
            if outcome(catalog.remove_movie(&service, &name))?.is_some() {
                log::info!("Movie '{}' was removed from '{}'.", name, service);
            }
        }
        MovieAction::Rate {
            service,
            name,
            rating,
        } => {
            if outcome(catalog.edit_movie_rating(&service, &name, rating))?.is_some() {
                log::info!("Movie '{}' is now {}.", name, format_rating(rating));
            }
        }
        MovieAction::List { service } => run_movie_list(catalog, &service)?,
    }
    Ok(())
}

fn run_movie_list(catalog: &Catalog, service: &str) -> Result<(), CliError> {
    let Some(movies) = outcome(catalog.list_movies(service))? else {
        return Ok(());
    };
    if movies.is_empty() {
        log::info!("No movies found for service '{}'.", service);
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Movies on {}", service).if_supports_color(Stdout, |t| t.bold()),
    );
    for movie in &movies {
        log::info!(
            "  {} ({}) {} | {} | {} min",
            movie.name.if_supports_color(Stdout, |t| t.cyan()),
            movie.year,
            movie.genre,
            format_rating(movie.rating),
            movie.runtime,
        );
    }
    Ok(())
}
