//! Steppers command: add stepartists to submitted judge notes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::{BatchCsv, write_steppers};

use crate::cli_utils;

pub fn run(csv: Option<PathBuf>) -> Result<()> {
    let csv_path = cli_utils::path_or_prompt(csv, "Batch CSV file")?;
    let csv = BatchCsv::load(&csv_path)
        .with_context(|| format!("Failed to read batch CSV {:?}", csv_path))?;

    let report = write_steppers(&csv)
        .with_context(|| format!("Failed to add stepartists from {:?}", csv_path))?;
    cli_utils::print_failures(&report);

    if report.is_empty() {
        println!("No judge notes files found in {}", csv.dir().display());
    }
    for path in &report.items {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
