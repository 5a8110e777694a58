//! The cleaning pipeline
//!
//! Each stage is a pure function from one table value to the next; the
//! pipeline is their fixed composition, ending in an invariant check on the
//! finished table. No stage adds or removes rows.

pub mod columns;
pub mod dates;
pub mod duration;
pub mod missing;
pub mod rating;

use std::collections::HashSet;

use arrow::array::Array;
use arrow::record_batch::RecordBatch;

use crate::config::RepairConfig;
use crate::error::{CleanError, Result};
use crate::schema::CLEAN_COLUMNS;
use crate::utils::arrow_utils::{get_int32_column, get_string_column, string_value};

/// Run the full cleaning pipeline over a raw catalog table
///
/// Stage order is fixed: schema normalization, missing-value normalization
/// and domain checks, date normalization, the three rating repairs, then the
/// duration split. Any stage failure aborts the run; no partial output is
/// produced.
pub fn clean_catalog(batch: &RecordBatch, repairs: &RepairConfig) -> Result<RecordBatch> {
    log::info!("Cleaning catalog table with {} rows", batch.num_rows());

    let batch = columns::normalize_schema(batch)?;
    let batch = missing::blank_to_null(&batch)?;
    missing::check_type_domain(&batch)?;
    let batch = missing::type_release_year(&batch)?;
    let batch = dates::parse_date_added(&batch)?;
    let batch = rating::repair_swapped_durations(&batch, &repairs.duration_swap)?;
    let batch = rating::normalize_rating_synonyms(&batch)?;
    let batch = rating::fill_missing_ratings(&batch, &repairs.rating_fills)?;
    let batch = duration::split_duration(&batch)?;

    validate_cleaned(&batch)?;
    log::info!(
        "Cleaned catalog table: {} rows, {} columns",
        batch.num_rows(),
        batch.num_columns()
    );
    Ok(batch)
}

/// Re-check the invariants the pipeline promises on its output
///
/// Checked: the output column layout, `show_id` uniqueness and presence,
/// rating-domain closure, and duration-split exclusivity against the content
/// type. Downstream aggregation assumes all of these hold for every row.
pub fn validate_cleaned(batch: &RecordBatch) -> Result<()> {
    // Column layout
    let schema = batch.schema();
    let found: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    if found != CLEAN_COLUMNS {
        return Err(CleanError::SchemaError(format!(
            "Cleaned table has unexpected columns: expected {CLEAN_COLUMNS:?}, found {found:?}"
        )));
    }

    // show_id present and unique
    let show_ids = get_string_column(batch, "show_id")?;
    let mut seen = HashSet::with_capacity(show_ids.len());
    for i in 0..show_ids.len() {
        match string_value(show_ids, i) {
            None => {
                return Err(CleanError::DomainError {
                    column: "show_id".to_string(),
                    message: format!("row {i} has a null identifier"),
                });
            }
            Some(show_id) => {
                if !seen.insert(show_id) {
                    return Err(CleanError::DomainError {
                        column: "show_id".to_string(),
                        message: format!("duplicate identifier {show_id}"),
                    });
                }
            }
        }
    }

    // Rating-domain closure
    let ratings = get_string_column(batch, "rating")?;
    for i in 0..ratings.len() {
        let show_id = string_value(show_ids, i).unwrap_or("<null>");
        match string_value(ratings, i) {
            None => return Err(CleanError::UnmappedNullError(show_id.to_string())),
            Some(rating) if rating.contains("min") => {
                return Err(CleanError::DomainError {
                    column: "rating".to_string(),
                    message: format!("{show_id} still holds a duration value {rating:?}"),
                });
            }
            Some("UR") => {
                return Err(CleanError::DomainError {
                    column: "rating".to_string(),
                    message: format!("{show_id} still holds the deprecated unrated code"),
                });
            }
            Some(_) => {}
        }
    }

    // Duration-split exclusivity, matching the content type
    let types = get_string_column(batch, "type")?;
    let season_totals = get_int32_column(batch, "season_total")?;
    let movie_lengths = get_int32_column(batch, "movie_length")?;
    for i in 0..batch.num_rows() {
        let show_id = string_value(show_ids, i).unwrap_or("<null>");
        let is_movie = string_value(types, i) == Some("Movie");
        let has_length = !movie_lengths.is_null(i);
        let has_seasons = !season_totals.is_null(i);

        if has_length == has_seasons {
            return Err(CleanError::DomainError {
                column: "duration".to_string(),
                message: format!(
                    "{show_id} has {} of movie_length/season_total populated",
                    if has_length { "both" } else { "neither" }
                ),
            });
        }
        if is_movie != has_length {
            return Err(CleanError::DomainError {
                column: "duration".to_string(),
                message: format!("{show_id} has a duration column that contradicts its type"),
            });
        }
    }

    Ok(())
}
