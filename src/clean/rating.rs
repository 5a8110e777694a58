//! Rating repair: swapped durations, synonym codes, reference fills
//!
//! Three ordered sub-repairs. The stage encodes no catalog facts of its own:
//! which rows carry the swap defect, what rating replaces a swapped value,
//! and what value fills a missing rating all come from [`RepairConfig`]
//! (see the `config` module).
//!
//! [`RepairConfig`]: crate::config::RepairConfig

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;

use crate::config::DurationSwapRepair;
use crate::error::{CleanError, Result};
use crate::utils::arrow_utils::{get_column_index, get_string_column, string_value};

/// Deprecated unrated code
const UNRATED_SYNONYM: &str = "UR";
/// Canonical not-rated code
const NOT_RATED: &str = "NR";
/// Substring that betrays a duration value in the rating column
const MINUTES_MARKER: &str = "min";

/// Rebuild the batch with one string column replaced
fn with_string_column(
    batch: &RecordBatch,
    column: &str,
    values: Vec<Option<&str>>,
) -> Result<RecordBatch> {
    let idx = get_column_index(batch, column)?;
    let mut columns = batch.columns().to_vec();
    columns[idx] = Arc::new(StringArray::from(values)) as ArrayRef;
    Ok(RecordBatch::try_new(batch.schema(), columns)?)
}

/// Move mis-recorded duration values out of the rating column
///
/// A rating containing "min" is a duration entered in the wrong column; for
/// exactly those rows `duration` is null. Each detected row must appear in
/// the configured identifier list (an unreviewed instance of the defect is a
/// hard error, not something to repair on faith), and its duration must in
/// fact be null. The rating value moves to `duration` and the configured
/// replacement rating takes its place.
pub fn repair_swapped_durations(
    batch: &RecordBatch,
    repair: &DurationSwapRepair,
) -> Result<RecordBatch> {
    let show_ids = get_string_column(batch, "show_id")?;
    let ratings = get_string_column(batch, "rating")?;
    let durations = get_string_column(batch, "duration")?;

    let known: HashSet<&str> = repair.show_ids.iter().map(String::as_str).collect();

    let mut new_ratings = Vec::with_capacity(ratings.len());
    let mut new_durations = Vec::with_capacity(durations.len());
    let mut repaired = 0usize;
    for i in 0..batch.num_rows() {
        let rating = string_value(ratings, i);
        let duration = string_value(durations, i);

        if rating.is_some_and(|r| r.contains(MINUTES_MARKER)) {
            let show_id = string_value(show_ids, i).unwrap_or("<null>");
            if !known.contains(show_id) {
                return Err(CleanError::DomainError {
                    column: "rating".to_string(),
                    message: format!(
                        "{show_id} holds a duration ({:?}) but is not listed for the swap repair",
                        rating.unwrap_or_default()
                    ),
                });
            }
            if duration.is_some() {
                return Err(CleanError::DomainError {
                    column: "duration".to_string(),
                    message: format!(
                        "{show_id} already has a duration ({:?}); refusing to overwrite it",
                        duration.unwrap_or_default()
                    ),
                });
            }
            new_durations.push(rating);
            new_ratings.push(Some(repair.replacement_rating.as_str()));
            repaired += 1;
        } else {
            new_ratings.push(rating);
            new_durations.push(duration);
        }
    }

    if repaired > 0 {
        log::info!("Moved {repaired} swapped duration value(s) out of the rating column");
    }

    let batch = with_string_column(batch, "rating", new_ratings)?;
    with_string_column(&batch, "duration", new_durations)
}

/// Rewrite the deprecated "UR" rating code to the canonical "NR"
///
/// Exact, case-sensitive match; no other value is altered.
pub fn normalize_rating_synonyms(batch: &RecordBatch) -> Result<RecordBatch> {
    let ratings = get_string_column(batch, "rating")?;

    let mut rewritten = 0usize;
    let values = (0..ratings.len())
        .map(|i| match string_value(ratings, i) {
            Some(UNRATED_SYNONYM) => {
                rewritten += 1;
                Some(NOT_RATED)
            }
            other => other,
        })
        .collect::<Vec<_>>();

    if rewritten > 0 {
        log::info!("Normalized {rewritten} deprecated unrated code(s) to {NOT_RATED}");
    }

    with_string_column(batch, "rating", values)
}

/// Fill remaining null ratings from the reference mapping
///
/// A null rating whose identifier is absent from the mapping stops the run:
/// shipping an uncorrected row silently is worse than failing.
pub fn fill_missing_ratings(
    batch: &RecordBatch,
    fills: &HashMap<String, String>,
) -> Result<RecordBatch> {
    let show_ids = get_string_column(batch, "show_id")?;
    let ratings = get_string_column(batch, "rating")?;

    let mut filled = 0usize;
    let mut values = Vec::with_capacity(ratings.len());
    for i in 0..ratings.len() {
        match string_value(ratings, i) {
            Some(rating) => values.push(Some(rating)),
            None => {
                let show_id = string_value(show_ids, i).unwrap_or("<null>");
                match fills.get(show_id) {
                    Some(rating) => {
                        values.push(Some(rating.as_str()));
                        filled += 1;
                    }
                    None => return Err(CleanError::UnmappedNullError(show_id.to_string())),
                }
            }
        }
    }

    if filled > 0 {
        log::info!("Filled {filled} null rating(s) from the reference mapping");
    }

    with_string_column(batch, "rating", values)
}
