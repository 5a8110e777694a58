//! Summary-table tests over a cleaned catalog

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;

use catalog_cleaner::config::RepairConfig;
use catalog_cleaner::error::CleanError;
use catalog_cleaner::report::{count_by_column, counts_by_year_added, top_countries};
use catalog_cleaner::{clean_catalog, schema};

const TYPE: usize = 1;
const COUNTRY: usize = 5;
const DATE_ADDED: usize = 6;
const DURATION: usize = 9;

fn movie_row(show_id: &'static str) -> [&'static str; 12] {
    [
        show_id,
        "Movie",
        "A Quiet Title",
        "Jane Doe",
        "Actor One",
        "United States",
        "September 25, 2021",
        "2020",
        "PG-13",
        "90 min",
        "Dramas",
        "Words.",
    ]
}

fn raw_batch(rows: &[[&str; 12]]) -> RecordBatch {
    let columns: Vec<ArrayRef> = (0..12)
        .map(|col| {
            Arc::new(StringArray::from(
                rows.iter().map(|row| row[col]).collect::<Vec<_>>(),
            )) as ArrayRef
        })
        .collect();
    RecordBatch::try_new(Arc::new(schema::raw_schema()), columns).unwrap()
}

fn sample_cleaned() -> RecordBatch {
    let mut show = movie_row("s2");
    show[TYPE] = "TV Show";
    show[DURATION] = "2 Seasons";
    show[COUNTRY] = "United States, India";
    show[DATE_ADDED] = "July 4, 2019";
    let mut second_movie = movie_row("s3");
    second_movie[COUNTRY] = "India";
    let mut no_country = movie_row("s4");
    no_country[COUNTRY] = "";
    no_country[DATE_ADDED] = "";

    let raw = raw_batch(&[movie_row("s1"), show, second_movie, no_country]);
    clean_catalog(&raw, &RepairConfig::reference()).unwrap()
}

/// Counts come back descending, ties broken by value
#[test]
fn counts_by_type_are_ordered() {
    let cleaned = sample_cleaned();
    let counts = count_by_column(&cleaned, "type").unwrap();
    assert_eq!(
        counts,
        vec![("Movie".to_string(), 3), ("TV Show".to_string(), 1)]
    );
}

/// Country lists explode at query time; co-productions count once per country
#[test]
fn top_countries_explode_comma_lists() {
    let cleaned = sample_cleaned();
    let top = top_countries(&cleaned, 10).unwrap();
    assert_eq!(
        top,
        vec![
            ("United States".to_string(), 3),
            ("India".to_string(), 2),
        ]
    );

    // Truncation respects the requested size
    let top_one = top_countries(&cleaned, 1).unwrap();
    assert_eq!(top_one, vec![("United States".to_string(), 3)]);
}

/// Year counts are ascending and skip entries never dated
#[test]
fn year_added_counts_skip_null_dates() {
    let cleaned = sample_cleaned();
    let by_year = counts_by_year_added(&cleaned).unwrap();
    assert_eq!(by_year, vec![(2019, 1), (2021, 2)]);
}

/// Asking for an absent column is a schema error, not a panic
#[test]
fn unknown_columns_are_schema_errors() {
    let cleaned = sample_cleaned();
    let err = count_by_column(&cleaned, "studio").unwrap_err();
    assert!(matches!(err, CleanError::SchemaError(_)));
}
