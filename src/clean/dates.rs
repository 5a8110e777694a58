//! Date normalization for the `date_added` column
//!
//! The export records the addition date as free text in one fixed shape,
//! "Month D, Year". Every non-null value is parsed per that shape and the
//! text column is replaced by a typed date column. A value that does not
//! parse aborts the stage: the dataset is supposed to be homogeneous, and a
//! deviation is a data-quality problem to fix upstream, not to coerce here.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Date32Array};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use itertools::Itertools;

use crate::error::{CleanError, Result};
use crate::utils::arrow_utils::{get_column_index, get_string_column, string_value};

/// Input column holding the free-text addition date
pub const DATE_ADDED: &str = "date_added";
/// Output column holding the typed addition date
pub const DATE_ADDED_AS_DATE: &str = "date_added_as_date";

/// The one date shape the export uses: month name, day, year
const DATE_FORMAT: &str = "%B %e, %Y";

/// Parse one `date_added` value, trimming surrounding whitespace
pub(crate) fn parse_date_added_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Replace the text `date_added` column with a typed `date_added_as_date`
///
/// The new column is null exactly where the input was null and is appended
/// at the end of the schema; the text column is removed.
pub fn parse_date_added(batch: &RecordBatch) -> Result<RecordBatch> {
    let date_idx = get_column_index(batch, DATE_ADDED)?;
    let show_ids = get_string_column(batch, "show_id")?;
    let dates = get_string_column(batch, DATE_ADDED)?;

    let mut days = Vec::with_capacity(dates.len());
    let mut offending = Vec::new();
    for i in 0..dates.len() {
        match string_value(dates, i) {
            None => days.push(None),
            Some(raw) => match parse_date_added_value(raw) {
                Some(date) => days.push(Some(Date32Type::from_naive_date(date))),
                None => {
                    days.push(None);
                    offending.push(format!(
                        "{}: {raw:?}",
                        string_value(show_ids, i).unwrap_or("<null>")
                    ));
                }
            },
        }
    }

    if !offending.is_empty() {
        return Err(CleanError::FormatError {
            column: DATE_ADDED.to_string(),
            message: format!(
                "{} value(s) do not match \"Month D, Year\": {}",
                offending.len(),
                offending.iter().join(", ")
            ),
        });
    }

    // Drop the text column and append the typed one
    let schema = batch.schema();
    let mut fields = schema.fields().to_vec();
    fields.remove(date_idx);
    fields.push(Arc::new(Field::new(
        DATE_ADDED_AS_DATE,
        DataType::Date32,
        true,
    )));
    let mut columns = batch.columns().to_vec();
    columns.remove(date_idx);
    columns.push(Arc::new(Date32Array::from(days)) as ArrayRef);

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_day_year() {
        assert_eq!(
            parse_date_added_value("September 25, 2021"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
        assert_eq!(
            parse_date_added_value("July 4, 2019"),
            NaiveDate::from_ymd_opt(2019, 7, 4)
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_date_added_value(" January 1, 2020 "),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_date_added_value("13/02/2021"), None);
        assert_eq!(parse_date_added_value("2021-02-13"), None);
        assert_eq!(parse_date_added_value("sometime in March"), None);
    }
}
