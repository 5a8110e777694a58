//! Column-layout definitions for the raw and cleaned catalog tables.

use arrow::datatypes::{DataType, Field, Schema};

use crate::error::{CleanError, Result};

/// Column names of the raw export, in file order
pub const RAW_COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

/// Column names of the cleaned table, in output order
pub const CLEAN_COLUMNS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "release_year",
    "rating",
    "genre",
    "date_added_as_date",
    "season_total",
    "movie_length",
];

/// Schema the loader reads with: every raw column as nullable text
///
/// Cell typing is the pipeline's job, not the reader's, so the raw table
/// carries no inferred types.
#[must_use]
pub fn raw_schema() -> Schema {
    Schema::new(
        RAW_COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    )
}

/// Validate that a file header matches the expected raw columns, in order
pub fn validate_header(file_schema: &Schema) -> Result<()> {
    let found: Vec<&str> = file_schema
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();

    if found != RAW_COLUMNS {
        return Err(CleanError::LoadError(format!(
            "Header does not match the expected catalog schema: expected {RAW_COLUMNS:?}, found {found:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_schema_is_all_nullable_text() {
        let schema = raw_schema();
        assert_eq!(schema.fields().len(), 12);
        for field in schema.fields() {
            assert_eq!(field.data_type(), &DataType::Utf8);
            assert!(field.is_nullable());
        }
    }

    #[test]
    fn header_validation_rejects_reordered_columns() {
        let mut names: Vec<&str> = RAW_COLUMNS.to_vec();
        names.swap(0, 1);
        let schema = Schema::new(
            names
                .iter()
                .map(|name| Field::new(*name, DataType::Utf8, true))
                .collect::<Vec<_>>(),
        );
        assert!(matches!(
            validate_header(&schema),
            Err(CleanError::LoadError(_))
        ));
    }
}
