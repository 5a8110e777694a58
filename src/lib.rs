//! A Rust library for cleaning a streaming-media catalog export with schema
//! validation, dataset-specific repairs, and summary reporting.

pub mod clean;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
// Core types
pub use config::{DurationSwapRepair, RepairConfig};
pub use error::{CleanError, Result};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Pipeline entry points
pub use clean::{clean_catalog, validate_cleaned};
pub use loader::read_catalog_csv;
pub use writer::write_catalog_csv;

// Summary tables
pub use report::{count_by_column, counts_by_year_added, top_countries};
