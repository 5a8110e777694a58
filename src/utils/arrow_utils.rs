//! Arrow utility functions for column access and value extraction
//!
//! This module provides utility functions for working with the Arrow arrays
//! the pipeline's tables are made of, with a focus on resolving columns by
//! name and extracting individual values while handling nulls.

use arrow::array::{Array, Date32Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{CleanError, Result};

/// Get the column index by name from a record batch
///
/// # Arguments
/// * `batch` - The record batch
/// * `column_name` - The name of the column to find
///
/// # Errors
/// Returns an error if the column does not exist
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| CleanError::SchemaError(format!("Column not found: {column_name}")))
}

/// Type-safe extraction of a `StringArray` from a column
///
/// # Errors
/// Returns an error if the column does not exist or is not a `StringArray`
pub fn get_string_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a StringArray> {
    let idx = get_column_index(batch, column_name)?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            CleanError::SchemaError(format!("Column '{column_name}' is not a string array"))
        })
}

/// Type-safe extraction of a `Date32Array` from a column
///
/// # Errors
/// Returns an error if the column does not exist or is not a `Date32Array`
pub fn get_date32_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a Date32Array> {
    let idx = get_column_index(batch, column_name)?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<Date32Array>()
        .ok_or_else(|| {
            CleanError::SchemaError(format!("Column '{column_name}' is not a Date32 array"))
        })
}

/// Type-safe extraction of an `Int32Array` from a column
///
/// # Errors
/// Returns an error if the column does not exist or is not an `Int32Array`
pub fn get_int32_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a Int32Array> {
    let idx = get_column_index(batch, column_name)?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<Int32Array>()
        .ok_or_else(|| {
            CleanError::SchemaError(format!("Column '{column_name}' is not an Int32 array"))
        })
}

/// Extract a string value from an array at the specified index, handling nulls
#[must_use]
pub fn string_value<'a>(array: &'a StringArray, index: usize) -> Option<&'a str> {
    if array.is_null(index) {
        None
    } else {
        Some(array.value(index))
    }
}
