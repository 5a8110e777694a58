//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use arrow::record_batch::RecordBatch;

/// Print summary information about a loaded table
pub fn print_batch_summary(batch: &RecordBatch, elapsed: std::time::Duration) {
    println!(
        "Read {} rows x {} columns in {:?}",
        batch.num_rows(),
        batch.num_columns(),
        elapsed
    );
}

/// Print detailed schema information for a table
pub fn print_schema_info(batch: &RecordBatch) {
    println!("Schema:");
    for field in batch.schema().fields() {
        println!("  - {} ({})", field.name(), field.data_type());
    }
}

/// Print a count table produced by the reporter
pub fn print_count_table<T: std::fmt::Display>(title: &str, rows: &[(T, u64)]) {
    println!("{title}:");
    for (value, count) in rows {
        println!("  {value:<28} {count}");
    }
}
