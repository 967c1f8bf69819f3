use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use streamcat_db::Catalog;

use crate::cli_types::ServiceAction;
use crate::CliError;

use super::outcome;

pub(crate) fn run_service(catalog: &Catalog, action: ServiceAction) -> Result<(), CliError> {
    match action {
        ServiceAction::Add { name, price } => {
            if outcome(catalog.add_service(&name, price))?.is_some() {
                log::info!(
                    "Service '{}' added to database.",
                    name.if_supports_color(Stdout, |t| t.bold()),
                );
            }
        }
        ServiceAction::Remove { name } => {
            if let Some(removal) = outcome(catalog.remove_service(&name))? {
                log::info!(
                    "Service '{}' was removed from the database.",
                    name.if_supports_color(Stdout, |t| t.bold()),
                );
                if removal.movies + removal.series_links > 0 {
                    log::info!(
                        "  Also removed {} movie(s), {} season(s), {} series link(s), {} series.",
                        removal.movies,
                        removal.seasons,
                        removal.series_links,
                        removal.series,
                    );
                }
            }
        }
        ServiceAction::List => run_service_list(catalog)?,
    }
    Ok(())
}

fn run_service_list(catalog: &Catalog) -> Result<(), CliError> {
    let Some(services) = outcome(catalog.list_services())? else {
        return Ok(());
    };
    if services.is_empty() {
        log::info!("No services available.");
        return Ok(());
    }

    log::info!("{}", "Services".if_supports_color(Stdout, |t| t.bold()));
    for service in &services {
        log::info!(
            "  {:<24} {:>6}",
            service.name.if_supports_color(Stdout, |t| t.cyan()),
            service.price,
        );
    }
    Ok(())
}
