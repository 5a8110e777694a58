//! Catalog CSV loading utilities

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::error::util::safe_open_file;
use crate::error::{CleanError, Result};
use crate::schema;

/// Read a raw catalog export into a single all-text record batch
///
/// The header row is validated against the expected 12-column layout before
/// any data is read, so pointing the pipeline at the wrong file fails
/// immediately. Cell values stay untyped text; empty cells stay empty strings
/// until the missing-value stage decides what absence means. Quoted fields
/// with embedded commas are handled by the reader.
pub fn read_catalog_csv(path: &Path) -> Result<RecordBatch> {
    let mut file = safe_open_file(path, "reading catalog export")?;

    // Sniff the header first so a wrong file fails before any rows are read
    let format = Format::default().with_header(true);
    let (file_schema, _) = format.infer_schema(&mut file, Some(1)).map_err(|e| {
        CleanError::LoadError(format!("Failed to read header of {}: {e}", path.display()))
    })?;
    schema::validate_header(&file_schema)?;
    file.rewind()?;

    // Read everything as nullable text; typing is the pipeline's job
    let raw_schema = Arc::new(schema::raw_schema());
    let reader = ReaderBuilder::new(raw_schema.clone())
        .with_format(format)
        .build(file)?;

    let mut batches = Vec::new();
    for batch_result in reader {
        let batch = batch_result.map_err(|e| {
            CleanError::LoadError(format!("Failed to read rows from {}: {e}", path.display()))
        })?;
        batches.push(batch);
    }

    let batch = concat_batches(&raw_schema, &batches)?;
    log::info!("Loaded {} rows from {}", batch.num_rows(), path.display());
    Ok(batch)
}
