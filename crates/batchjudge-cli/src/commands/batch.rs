//! Batch command: scan song folders into the batch CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::{BatchScanner, Config, write_batch_csv};

use crate::cli_utils;

pub fn run(path: Option<PathBuf>, config: &Config) -> Result<()> {
    let batch_dir = cli_utils::path_or_prompt(path, "Batch folder")?;

    let scanner = BatchScanner::new(config.batch.fields.clone());
    let report = scanner
        .scan(&batch_dir)
        .with_context(|| format!("Failed to read batch folder {:?}", batch_dir))?;
    cli_utils::print_failures(&report);

    let csv = write_batch_csv(&batch_dir, &report.items, scanner.fields())
        .context("Failed to write batch CSV")?;
    println!("Wrote {} song(s) to {}", report.len(), csv.display());
    Ok(())
}
