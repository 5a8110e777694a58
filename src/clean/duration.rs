//! Duration splitting into typed per-content-type columns
//!
//! The raw `duration` column is overloaded: "<N> min" for movies,
//! "<N> Season(s)" for shows. This stage splits it into two mutually
//! exclusive integer columns and drops the overloaded text column.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{CleanError, Result};
use crate::utils::arrow_utils::{get_column_index, get_string_column, string_value};

/// Overloaded input column
pub const DURATION: &str = "duration";
/// Output column: running time in minutes, movies only
pub const MOVIE_LENGTH: &str = "movie_length";
/// Output column: season count, shows only
pub const SEASON_TOTAL: &str = "season_total";

/// First base-10 integer token of a duration string
pub(crate) fn leading_integer(value: &str) -> Option<i32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Split `duration` into `season_total` and `movie_length`
///
/// Exactly one of the two output columns is populated per row. A null
/// duration, a string matching neither shape, or a shape without a leading
/// integer stops the run; after the rating repair none of these should
/// remain.
pub fn split_duration(batch: &RecordBatch) -> Result<RecordBatch> {
    let duration_idx = get_column_index(batch, DURATION)?;
    let show_ids = get_string_column(batch, "show_id")?;
    let durations = get_string_column(batch, DURATION)?;

    let mut season_totals = Vec::with_capacity(durations.len());
    let mut movie_lengths = Vec::with_capacity(durations.len());
    for i in 0..durations.len() {
        let show_id = string_value(show_ids, i).unwrap_or("<null>");
        let Some(raw) = string_value(durations, i) else {
            return Err(CleanError::UnparseableDurationError {
                show_id: show_id.to_string(),
                value: "<null>".to_string(),
            });
        };

        let count = leading_integer(raw);
        let is_seasons = raw.contains("Season");
        let is_minutes = raw.contains("min");
        match count {
            Some(seasons) if is_seasons => {
                season_totals.push(Some(seasons));
                movie_lengths.push(None);
            }
            Some(minutes) if is_minutes => {
                movie_lengths.push(Some(minutes));
                season_totals.push(None);
            }
            _ => {
                return Err(CleanError::UnparseableDurationError {
                    show_id: show_id.to_string(),
                    value: raw.to_string(),
                });
            }
        }
    }

    let schema = batch.schema();
    let mut fields = schema.fields().to_vec();
    fields.remove(duration_idx);
    fields.push(Arc::new(Field::new(SEASON_TOTAL, DataType::Int32, true)));
    fields.push(Arc::new(Field::new(MOVIE_LENGTH, DataType::Int32, true)));
    let mut columns = batch.columns().to_vec();
    columns.remove(duration_idx);
    columns.push(Arc::new(Int32Array::from(season_totals)) as ArrayRef);
    columns.push(Arc::new(Int32Array::from(movie_lengths)) as ArrayRef);

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_leading_integers() {
        assert_eq!(leading_integer("74 min"), Some(74));
        assert_eq!(leading_integer("3 Seasons"), Some(3));
        assert_eq!(leading_integer("1 Season"), Some(1));
        assert_eq!(leading_integer("  101 min"), Some(101));
    }

    #[test]
    fn rejects_strings_without_a_leading_integer() {
        assert_eq!(leading_integer("min"), None);
        assert_eq!(leading_integer("ninety min"), None);
        assert_eq!(leading_integer(""), None);
    }
}
