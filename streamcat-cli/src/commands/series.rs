use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use streamcat_db::Catalog;

use crate::cli_types::SeriesAction;
use crate::CliError;

use super::{format_rating, outcome};

pub(crate) fn run_series(catalog: &Catalog, action: SeriesAction) -> Result<(), CliError> {
    match action {
        SeriesAction::Add {
            service,
            name,
            genre,
            rating,
        } => {
            if outcome(catalog.add_series(&service, &name, &genre, rating))?.is_some() {
                log::info!(
                    "{} was successfully added to {}.",
                    name.if_supports_color(Stdout, |t| t.bold()),
                    service,
                );
            }
        }
        SeriesAction::Remove { service, name } => {
            if let Some(removal) = outcome(catalog.remove_series(&service, &name))? {
                log::info!(
                    "{} was removed from {} ({} season(s)).",
                    name.if_supports_color(Stdout, |t| t.bold()),
                    service,
                    removal.seasons,
                );
                if removal.series_deleted {
                    log::info!("  No other service carries it; removed from the catalog.");
                }
            }
        }
        SeriesAction::Rate { name, rating } => {
            if outcome(catalog.edit_series_rating(&name, rating))?.is_some() {
                log::info!("Rating for {} was set to {}.", name, format_rating(rating));
            }
        }
        SeriesAction::List { service } => run_series_list(catalog, &service)?,
        SeriesAction::Where { name } => run_series_where(catalog, &name)?,
    }
    Ok(())
}

fn run_series_list(catalog: &Catalog, service: &str) -> Result<(), CliError> {
    let Some(series) = outcome(catalog.series_on_service(service))? else {
        return Ok(());
    };
    if series.is_empty() {
        log::info!("{} has no series available.", service);
        return Ok(());
    }
    let Some(seasons) = outcome(catalog.list_series_for_service(service))? else {
        return Ok(());
    };

    log::info!(
        "{}",
        format!("Series on {}", service).if_supports_color(Stdout, |t| t.bold()),
    );
    for show in &series {
        log::info!(
            "  {} | {} | {}",
            show.name.if_supports_color(Stdout, |t| t.cyan()),
            show.genre,
            format_rating(show.rating),
        );
        for season in seasons.iter().filter(|s| s.series_name == show.name) {
            log::info!(
                "    Season {:>2}: {} ({} episodes)",
                season.season_number,
                season.year,
                season.episode_count,
            );
        }
    }
    Ok(())
}

fn run_series_where(catalog: &Catalog, name: &str) -> Result<(), CliError> {
    let Some(found) = outcome(catalog.find_series(name))? else {
        return Ok(());
    };
    let Some(show) = found else {
        log::warn!("Series '{}' was not found.", name);
        return Ok(());
    };
    let Some(services) = outcome(catalog.services_for_series(name))? else {
        return Ok(());
    };
    let Some(seasons) = outcome(catalog.seasons_of_series(name))? else {
        return Ok(());
    };

    log::info!(
        "{} | {} | {}",
        show.name.if_supports_color(Stdout, |t| t.bold()),
        show.genre,
        format_rating(show.rating),
    );
    log::info!("  Available on: {}", services.join(", "));
    for season in &seasons {
        log::info!(
            "  Season {:>2}: {} ({} episodes) on {}",
            season.season_number,
            season.year,
            season.episode_count,
            season.service_name.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
