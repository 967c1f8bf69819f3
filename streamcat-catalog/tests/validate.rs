use streamcat_catalog::validate::*;
use streamcat_catalog::NewMovie;

#[test]
fn year_window_is_inclusive() {
    assert!(check_year(1888).is_ok());
    assert!(check_year(2025).is_ok());
    assert_eq!(
        check_year(1887),
        Err(ValidationError::OutOfRange {
            field: "year",
            value: 1887,
            min: 1888,
            max: 2025,
        })
    );
    assert!(check_year(2026).is_err());
}

#[test]
fn rating_is_optional_but_bounded() {
    assert!(check_rating(None).is_ok());
    assert!(check_rating(Some(0)).is_ok());
    assert!(check_rating(Some(5)).is_ok());
    assert!(check_rating(Some(6)).is_err());
    assert!(check_rating(Some(-1)).is_err());
}

#[test]
fn runtime_bounds() {
    assert!(check_runtime(0).is_ok());
    assert!(check_runtime(10_000).is_ok());
    assert!(check_runtime(10_001).is_err());
    assert!(check_runtime(-5).is_err());
}

#[test]
fn negative_counts_rejected() {
    assert!(check_price(0).is_ok());
    assert_eq!(
        check_price(-1),
        Err(ValidationError::Negative {
            field: "price",
            value: -1,
        })
    );
    assert!(check_season_number(-1).is_err());
    assert!(check_episode_count(-3).is_err());
}

#[test]
fn blank_names_rejected() {
    assert_eq!(
        check_name("service name", "   "),
        Err(ValidationError::Empty {
            field: "service name",
        })
    );
    assert!(check_name("service name", "Netflix").is_ok());
}

#[test]
fn new_movie_validation_reports_first_bad_field() {
    let ok = NewMovie::new("Inception", 2010, "Sci-Fi", Some(5), 148);
    assert!(ok.validate().is_ok());

    let bad_genre = NewMovie::new("Inception", 2010, "", Some(5), 148);
    assert_eq!(
        bad_genre.validate(),
        Err(ValidationError::Empty { field: "genre" })
    );

    let bad_runtime = NewMovie::new("Inception", 2010, "Sci-Fi", None, 20_000);
    let err = bad_runtime.validate().unwrap_err();
    assert_eq!(err.to_string(), "runtime must be between 0 and 10000, got 20000");
}
