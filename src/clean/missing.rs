//! Missing-value normalization and domain validation
//!
//! The export writes absent data as empty strings. This stage reinterprets
//! those cells as nulls across every text column, asserts the `type` column
//! holds only the two known content types, and types the release year as a
//! proper integer column.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::error::{CleanError, Result};
use crate::utils::arrow_utils::{get_column_index, get_string_column, string_value};

/// Values the `type` column is allowed to hold
pub const CONTENT_TYPES: [&str; 2] = ["Movie", "TV Show"];

/// Reinterpret empty-string cells as nulls in every text column
///
/// Nothing but the exact empty string is touched; whitespace-only values are
/// data, not absence.
pub fn blank_to_null(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut columns = Vec::with_capacity(batch.num_columns());
    for column in batch.columns() {
        if let Some(strings) = column.as_any().downcast_ref::<StringArray>() {
            let values = (0..strings.len())
                .map(|i| string_value(strings, i).filter(|v| !v.is_empty()))
                .collect::<Vec<_>>();
            columns.push(Arc::new(StringArray::from(values)) as ArrayRef);
        } else {
            columns.push(column.clone());
        }
    }

    Ok(RecordBatch::try_new(batch.schema(), columns)?)
}

/// Assert the `type` column holds only the two expected content types
///
/// A third value (or a null) means the dataset is not the one this pipeline
/// understands; the whole run stops rather than guessing.
pub fn check_type_domain(batch: &RecordBatch) -> Result<()> {
    let show_ids = get_string_column(batch, "show_id")?;
    let types = get_string_column(batch, "type")?;

    let offending = (0..types.len())
        .filter_map(|i| match string_value(types, i) {
            Some(value) if CONTENT_TYPES.contains(&value) => None,
            other => Some(format!(
                "{}: {:?}",
                string_value(show_ids, i).unwrap_or("<null>"),
                other.unwrap_or("<null>")
            )),
        })
        .collect::<Vec<_>>();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(CleanError::DomainError {
            column: "type".to_string(),
            message: format!("unexpected content type for {}", offending.iter().join(", ")),
        })
    }
}

/// Type `release_year` as a non-null integer column
pub fn type_release_year(batch: &RecordBatch) -> Result<RecordBatch> {
    let year_idx = get_column_index(batch, "release_year")?;
    let show_ids = get_string_column(batch, "show_id")?;
    let years = get_string_column(batch, "release_year")?;

    let mut values = Vec::with_capacity(years.len());
    let mut offending = Vec::new();
    for i in 0..years.len() {
        match string_value(years, i).and_then(|v| v.trim().parse::<i32>().ok()) {
            Some(year) => values.push(year),
            None => offending.push(format!(
                "{}: {:?}",
                string_value(show_ids, i).unwrap_or("<null>"),
                string_value(years, i).unwrap_or("<null>")
            )),
        }
    }

    if !offending.is_empty() {
        return Err(CleanError::DomainError {
            column: "release_year".to_string(),
            message: format!("not an integer year for {}", offending.iter().join(", ")),
        });
    }

    let schema = batch.schema();
    let mut fields = schema.fields().to_vec();
    fields[year_idx] = Arc::new(Field::new("release_year", DataType::Int32, false));
    let mut columns = batch.columns().to_vec();
    columns[year_idx] = Arc::new(Int32Array::from(values)) as ArrayRef;

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
