use streamcat_db::Catalog;

use crate::cli_types::SeasonAction;
use crate::CliError;

use super::outcome;

pub(crate) fn run_season(catalog: &Catalog, action: SeasonAction) -> Result<(), CliError> {
    match action {
        SeasonAction::Add {
            service,
            series,
            number,
            year,
            episodes,
        } => {
            if outcome(catalog.add_season(&service, &series, number, year, episodes))?.is_some() {
                log::info!(
                    "{} season {} was successfully added to {}.",
                    series,
                    number,
                    service,
                );
            }
        }
        SeasonAction::Remove { series, number } => {
            if outcome(catalog.remove_season(&series, number))?.is_some() {
                log::info!("Season {} of {} was successfully removed.", number, series);
            }
        }
    }
    Ok(())
}
