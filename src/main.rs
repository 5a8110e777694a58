use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::info;

use catalog_cleaner::config::RepairConfig;
use catalog_cleaner::utils::console;
use catalog_cleaner::{clean_catalog, read_catalog_csv, report, write_catalog_csv};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: catalog-cleaner <input.csv> <output.csv> [repairs.json]");
    };
    let input = PathBuf::from(input);
    let output = PathBuf::from(output);

    // Repair values ship with the crate; a JSON file overrides them
    let repairs = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            RepairConfig::from_json_file(&path).with_context(|| {
                format!("Failed to load repair configuration from {}", path.display())
            })?
        }
        None => RepairConfig::reference(),
    };

    info!("Loading catalog export from: {}", input.display());
    let start = Instant::now();
    let raw = read_catalog_csv(&input).context("Failed to load the catalog export")?;
    console::print_batch_summary(&raw, start.elapsed());
    console::print_schema_info(&raw);

    let start = Instant::now();
    let cleaned = clean_catalog(&raw, &repairs).context("Cleaning pipeline failed")?;
    info!("Cleaned {} rows in {:?}", cleaned.num_rows(), start.elapsed());

    // Summary tables for the charts downstream
    console::print_count_table("Entries by type", &report::count_by_column(&cleaned, "type")?);
    console::print_count_table(
        "Entries by rating",
        &report::count_by_column(&cleaned, "rating")?,
    );
    console::print_count_table("Top 10 countries", &report::top_countries(&cleaned, 10)?);
    console::print_count_table(
        "Entries by year added",
        &report::counts_by_year_added(&cleaned)?,
    );

    write_catalog_csv(&cleaned, &output).context("Failed to write the cleaned catalog")?;
    info!("Cleaned catalog written to: {}", output.display());

    Ok(())
}
