//! Cleaned-table CSV output

use std::path::Path;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::error::util::safe_create_file;

/// Write a cleaned table as a CSV file with a header row
///
/// Date columns serialize as `YYYY-MM-DD`; null cells serialize as empty
/// fields.
pub fn write_catalog_csv(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = safe_create_file(path, "writing cleaned catalog")?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;

    log::info!("Wrote {} rows to {}", batch.num_rows(), path.display());
    Ok(())
}
