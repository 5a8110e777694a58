//! Summary tables over the cleaned catalog
//!
//! Grouped counts for the charting collaborator. List-valued columns stay
//! comma-separated at rest in the cleaned table; explosion into individual
//! entries happens here, at query time.

use std::collections::HashMap;

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use chrono::Datelike;
use itertools::Itertools;

use crate::error::Result;
use crate::utils::arrow_utils::{get_date32_column, get_string_column, string_value};

/// Count occurrences of each distinct non-null value in a text column
///
/// Sorted by descending count; ties break by value so the output is stable.
pub fn count_by_column(batch: &RecordBatch, column: &str) -> Result<Vec<(String, u64)>> {
    let values = get_string_column(batch, column)?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    for i in 0..values.len() {
        if let Some(value) = string_value(values, i) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }

    Ok(sorted_desc(counts))
}

/// Count entries by the year they were added to the catalog
///
/// Entries with a null addition date are skipped; ascending by year.
pub fn counts_by_year_added(batch: &RecordBatch) -> Result<Vec<(i32, u64)>> {
    let dates = get_date32_column(batch, "date_added_as_date")?;

    let mut counts: HashMap<i32, u64> = HashMap::new();
    for i in 0..dates.len() {
        if dates.is_null(i) {
            continue;
        }
        if let Some(date) = dates.value_as_date(i) {
            *counts.entry(date.year()).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .sorted_by_key(|(year, _)| *year)
        .collect())
}

/// Top production countries after comma-list explosion
///
/// Each row's country list is split on commas, entries trimmed and empties
/// skipped, so a co-production counts once per listed country.
pub fn top_countries(batch: &RecordBatch, n: usize) -> Result<Vec<(String, u64)>> {
    let countries = get_string_column(batch, "country")?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    for i in 0..countries.len() {
        let Some(list) = string_value(countries, i) else {
            continue;
        };
        for entry in list.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            *counts.entry(entry.to_string()).or_insert(0) += 1;
        }
    }

    let mut top = sorted_desc(counts);
    top.truncate(n);
    Ok(top)
}

fn sorted_desc(counts: HashMap<String, u64>) -> Vec<(String, u64)> {
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}
