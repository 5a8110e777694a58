//! Schema normalization for the raw export
//!
//! Drops the free-text description column (no use in the analyses
//! downstream) and renames the genre-list column to its canonical name.

use std::sync::Arc;

use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::utils::arrow_utils::get_column_index;

/// Source name of the genre-list column
const LISTED_IN: &str = "listed_in";
/// Canonical name of the genre-list column
const GENRE: &str = "genre";
/// Free-text column dropped from the table
const DESCRIPTION: &str = "description";

/// Drop `description` and rename `listed_in` to `genre`
///
/// Column order is otherwise preserved.
pub fn normalize_schema(batch: &RecordBatch) -> Result<RecordBatch> {
    let description_idx = get_column_index(batch, DESCRIPTION)?;
    let listed_in_idx = get_column_index(batch, LISTED_IN)?;

    let schema = batch.schema();
    let mut fields = Vec::with_capacity(schema.fields().len() - 1);
    let mut columns = Vec::with_capacity(batch.num_columns() - 1);
    for (idx, field) in schema.fields().iter().enumerate() {
        if idx == description_idx {
            continue;
        }
        if idx == listed_in_idx {
            fields.push(Arc::new(Field::new(
                GENRE,
                field.data_type().clone(),
                field.is_nullable(),
            )));
        } else {
            fields.push(field.clone());
        }
        columns.push(batch.column(idx).clone());
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}
