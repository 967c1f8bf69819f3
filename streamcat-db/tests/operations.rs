use streamcat_catalog::{EntityKind, NewMovie, ValidationError};
use streamcat_db::{Catalog, OperationError, SeriesRemoval};

fn inception() -> NewMovie {
    NewMovie::new("Inception", 2010, "Sci-Fi", Some(5), 148)
}

fn setup() -> Catalog {
    let catalog = Catalog::open_memory().unwrap();
    catalog.add_service("Netflix", 15).unwrap();
    catalog.add_service("Hulu", 8).unwrap();
    catalog
}

fn movie_count(catalog: &Catalog) -> i64 {
    catalog.catalog_stats().unwrap().movies
}

// ── Services ────────────────────────────────────────────────────────────────

#[test]
fn add_service_then_list() {
    let catalog = Catalog::open_memory().unwrap();
    catalog.add_service("Netflix", 15).unwrap();

    let services = catalog.list_services().unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "Netflix");
    assert_eq!(services[0].price, 15);
}

#[test]
fn duplicate_service_rejected() {
    let catalog = setup();
    let err = catalog.add_service("Netflix", 20).unwrap_err();
    assert!(matches!(
        err,
        OperationError::Duplicate {
            entity: EntityKind::Service,
            ..
        }
    ));

    let netflix: Vec<_> = catalog
        .list_services()
        .unwrap()
        .into_iter()
        .filter(|s| s.name == "Netflix")
        .collect();
    assert_eq!(netflix.len(), 1);
    assert_eq!(netflix[0].price, 15);
}

#[test]
fn service_values_validated() {
    let catalog = Catalog::open_memory().unwrap();
    assert!(matches!(
        catalog.add_service("Cheap", -1),
        Err(OperationError::ConstraintViolation(ValidationError::Negative { .. }))
    ));
    assert!(matches!(
        catalog.add_service("", 1),
        Err(OperationError::ConstraintViolation(ValidationError::Empty { .. }))
    ));
    assert!(catalog.list_services().unwrap().is_empty());
}

#[test]
fn remove_missing_service() {
    let catalog = setup();
    let err = catalog.remove_service("Disney+").unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
    assert!(!err.is_storage_fault());
}

#[test]
fn remove_service_cascades() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();
    catalog.add_series("Netflix", "Show", "Drama", Some(4)).unwrap();
    catalog.add_series("Netflix", "Solo", "Comedy", None).unwrap();
    catalog.add_series("Hulu", "Show", "Drama", Some(4)).unwrap();
    catalog.add_season("Netflix", "Show", 1, 2020, 10).unwrap();
    catalog.add_season("Hulu", "Show", 2, 2021, 8).unwrap();

    let removal = catalog.remove_service("Netflix").unwrap();
    assert_eq!(removal.movies, 1);
    assert_eq!(removal.seasons, 1);
    assert_eq!(removal.series_links, 2);
    assert_eq!(removal.series, 1);

    assert!(!catalog.service_exists("Netflix").unwrap());
    assert!(catalog.find_series("Solo").unwrap().is_none());
    assert!(catalog.find_series("Show").unwrap().is_some());
    assert_eq!(catalog.services_for_series("Show").unwrap(), vec!["Hulu"]);

    let stats = catalog.catalog_stats().unwrap();
    assert_eq!(stats.movies, 0);
    assert_eq!(stats.seasons, 1);
}

// ── Movies ──────────────────────────────────────────────────────────────────

#[test]
fn add_movie_round_trip() {
    let catalog = setup();
    let id = catalog.add_movie("Netflix", &inception()).unwrap();

    let movies = catalog.list_movies("Netflix").unwrap();
    assert_eq!(movies.len(), 1);
    let m = &movies[0];
    assert_eq!(m.id, id);
    assert_eq!(m.name, "Inception");
    assert_eq!(m.year, 2010);
    assert_eq!(m.genre, "Sci-Fi");
    assert_eq!(m.rating, Some(5));
    assert_eq!(m.runtime, 148);
    assert_eq!(Some(m.service_id), catalog.service_id("Netflix").unwrap());
}

#[test]
fn add_movie_unknown_service() {
    let catalog = setup();
    let err = catalog.add_movie("Disney+", &inception()).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::Service,
            ..
        }
    ));
}

#[test]
fn same_name_and_year_is_duplicate_on_any_service() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();
    assert!(!catalog.movie_name_year_is_free("Inception", 2010).unwrap());

    let err = catalog.add_movie("Hulu", &inception()).unwrap_err();
    assert!(matches!(
        err,
        OperationError::Duplicate {
            entity: EntityKind::Movie,
            ..
        }
    ));

    // A different year is a different movie
    let remake = NewMovie::new("Inception", 2024, "Sci-Fi", None, 150);
    catalog.add_movie("Hulu", &remake).unwrap();
    assert_eq!(movie_count(&catalog), 2);
}

#[test]
fn out_of_range_movies_leave_store_unchanged() {
    let catalog = setup();
    let bad = [
        NewMovie::new("Old", 1887, "Drama", None, 90),
        NewMovie::new("Future", 2026, "Drama", None, 90),
        NewMovie::new("Loved", 2000, "Drama", Some(6), 90),
        NewMovie::new("Hated", 2000, "Drama", Some(-1), 90),
        NewMovie::new("Long", 2000, "Drama", None, 10_001),
        NewMovie::new("Short", 2000, "Drama", None, -1),
    ];
    for movie in &bad {
        let err = catalog.add_movie("Netflix", movie).unwrap_err();
        assert!(
            matches!(err, OperationError::ConstraintViolation(_)),
            "{} should be rejected, got {:?}",
            movie.name,
            err
        );
    }
    assert_eq!(movie_count(&catalog), 0);
}

#[test]
fn boundary_values_accepted() {
    let catalog = setup();
    catalog
        .add_movie("Netflix", &NewMovie::new("First", 1888, "Silent", Some(0), 0))
        .unwrap();
    catalog
        .add_movie("Netflix", &NewMovie::new("Last", 2025, "Epic", Some(5), 10_000))
        .unwrap();
    assert_eq!(movie_count(&catalog), 2);
}

#[test]
fn remove_movie_is_scoped_to_service() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();
    catalog
        .add_movie("Hulu", &NewMovie::new("Inception", 2024, "Sci-Fi", None, 150))
        .unwrap();

    assert_eq!(catalog.remove_movie("Netflix", "Inception").unwrap(), 1);
    assert!(catalog.list_movies("Netflix").unwrap().is_empty());
    assert_eq!(catalog.list_movies("Hulu").unwrap().len(), 1);

    let err = catalog.remove_movie("Netflix", "Inception").unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
}

#[test]
fn remove_movie_with_empty_name() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();
    let err = catalog.remove_movie("Netflix", "").unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::Movie,
            ..
        }
    ));
    assert_eq!(movie_count(&catalog), 1);
}

#[test]
fn edit_rating_is_scoped_to_service() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();
    catalog
        .add_movie("Hulu", &NewMovie::new("Inception", 2024, "Sci-Fi", Some(2), 150))
        .unwrap();

    catalog.edit_movie_rating("Netflix", "Inception", Some(3)).unwrap();
    assert_eq!(catalog.list_movies("Netflix").unwrap()[0].rating, Some(3));
    assert_eq!(catalog.list_movies("Hulu").unwrap()[0].rating, Some(2));

    catalog.edit_movie_rating("Hulu", "Inception", None).unwrap();
    assert_eq!(catalog.list_movies("Hulu").unwrap()[0].rating, None);
}

#[test]
fn edit_rating_rejections() {
    let catalog = setup();
    catalog.add_movie("Netflix", &inception()).unwrap();

    assert!(matches!(
        catalog.edit_movie_rating("Netflix", "Inception", Some(9)),
        Err(OperationError::ConstraintViolation(_))
    ));
    assert!(matches!(
        catalog.edit_movie_rating("Hulu", "Inception", Some(1)),
        Err(OperationError::NotFound { .. })
    ));
    assert_eq!(catalog.list_movies("Netflix").unwrap()[0].rating, Some(5));
}

// ── Series ──────────────────────────────────────────────────────────────────

#[test]
fn series_shared_between_services() {
    let catalog = setup();
    let first = catalog.add_series("Netflix", "Show", "Drama", Some(4)).unwrap();
    let second = catalog.add_series("Hulu", "Show", "Drama", Some(4)).unwrap();
    assert_eq!(first, second);

    let stats = catalog.catalog_stats().unwrap();
    assert_eq!(stats.series, 1);
    assert_eq!(stats.series_links, 2);
    assert_eq!(
        catalog.services_for_series("Show").unwrap(),
        vec!["Netflix", "Hulu"]
    );
}

#[test]
fn relinking_series_is_duplicate() {
    let catalog = setup();
    catalog.add_series("Netflix", "Show", "Drama", Some(4)).unwrap();
    let err = catalog
        .add_series("Netflix", "Show", "Drama", Some(4))
        .unwrap_err();
    assert!(matches!(
        err,
        OperationError::Duplicate {
            entity: EntityKind::SeriesAvailability,
            ..
        }
    ));
    assert_eq!(catalog.catalog_stats().unwrap().series_links, 1);
}

#[test]
fn add_series_unknown_service() {
    let catalog = setup();
    let err = catalog.add_series("Disney+", "Show", "Drama", None).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::Service,
            ..
        }
    ));
    assert!(catalog.find_series("Show").unwrap().is_none());
}

#[test]
fn remove_series_reference_counted() {
    let catalog = setup();
    catalog.add_series("Netflix", "Show", "Drama", Some(4)).unwrap();
    catalog.add_series("Hulu", "Show", "Drama", Some(4)).unwrap();
    catalog.add_season("Netflix", "Show", 1, 2020, 10).unwrap();
    catalog.add_season("Hulu", "Show", 2, 2021, 8).unwrap();

    let removal = catalog.remove_series("Netflix", "Show").unwrap();
    assert_eq!(
        removal,
        SeriesRemoval {
            seasons: 1,
            series_deleted: false,
        }
    );
    assert!(catalog.find_series("Show").unwrap().is_some());
    assert!(catalog.list_series_for_service("Netflix").unwrap().is_empty());
    assert_eq!(catalog.list_series_for_service("Hulu").unwrap().len(), 1);

    let removal = catalog.remove_series("Hulu", "Show").unwrap();
    assert!(removal.series_deleted);
    assert!(catalog.find_series("Show").unwrap().is_none());
    let stats = catalog.catalog_stats().unwrap();
    assert_eq!(stats.series, 0);
    assert_eq!(stats.series_links, 0);
    assert_eq!(stats.seasons, 0);
}

#[test]
fn remove_series_not_on_service() {
    let catalog = setup();
    catalog.add_series("Hulu", "Show", "Drama", None).unwrap();

    let err = catalog.remove_series("Netflix", "Show").unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::SeriesAvailability,
            ..
        }
    ));
    assert!(catalog.find_series("Show").unwrap().is_some());

    assert!(matches!(
        catalog.remove_series("Netflix", "Nothing"),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn edit_series_rating() {
    let catalog = setup();
    catalog.add_series("Netflix", "Show", "Drama", None).unwrap();
    catalog.edit_series_rating("Show", Some(2)).unwrap();
    assert_eq!(catalog.find_series("Show").unwrap().unwrap().rating, Some(2));

    assert!(matches!(
        catalog.edit_series_rating("Show", Some(7)),
        Err(OperationError::ConstraintViolation(_))
    ));
    assert!(matches!(
        catalog.edit_series_rating("Missing", Some(1)),
        Err(OperationError::NotFound { .. })
    ));
}

// ── Seasons ─────────────────────────────────────────────────────────────────

#[test]
fn season_numbers_unique_across_services() {
    let catalog = setup();
    catalog.add_series("Netflix", "Show", "Drama", Some(4)).unwrap();
    catalog.add_series("Hulu", "Show", "Drama", Some(4)).unwrap();
    catalog.add_season("Netflix", "Show", 1, 2020, 10).unwrap();

    let err = catalog.add_season("Hulu", "Show", 1, 2021, 8).unwrap_err();
    match err {
        OperationError::DuplicateSeason {
            series,
            season_number,
            service,
        } => {
            assert_eq!(series, "Show");
            assert_eq!(season_number, 1);
            assert_eq!(service, "Netflix");
        }
        other => panic!("expected duplicate season, got {other:?}"),
    }
    assert_eq!(catalog.catalog_stats().unwrap().seasons, 1);
}

#[test]
fn season_requires_series_on_service() {
    let catalog = setup();
    catalog.add_series("Hulu", "Show", "Drama", None).unwrap();

    let err = catalog.add_season("Netflix", "Show", 1, 2020, 10).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::SeriesAvailability,
            ..
        }
    ));
    assert!(matches!(
        catalog.add_season("Disney+", "Show", 1, 2020, 10),
        Err(OperationError::NotFound {
            entity: EntityKind::Service,
            ..
        })
    ));
    assert!(matches!(
        catalog.add_season("Hulu", "Show", 1, 2020, -2),
        Err(OperationError::ConstraintViolation(_))
    ));
}

#[test]
fn remove_season() {
    let catalog = setup();
    catalog.add_series("Netflix", "Show", "Drama", None).unwrap();
    catalog.add_season("Netflix", "Show", 1, 2020, 10).unwrap();

    catalog.remove_season("Show", 1).unwrap();
    assert!(catalog.list_series_for_service("Netflix").unwrap().is_empty());
    // The availability link survives its seasons
    assert_eq!(catalog.services_for_series("Show").unwrap(), vec!["Netflix"]);

    let err = catalog.remove_season("Show", 1).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            entity: EntityKind::Season,
            ..
        }
    ));
}
