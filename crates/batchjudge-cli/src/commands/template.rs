//! Template command: judge notes template from a batch CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::{BatchCsv, Config, write_template};

use crate::cli_utils;

pub fn run(csv: Option<PathBuf>, config: &Config) -> Result<()> {
    let csv_path = cli_utils::path_or_prompt(csv, "Batch CSV file")?;
    let csv = BatchCsv::load(&csv_path)
        .with_context(|| format!("Failed to read batch CSV {:?}", csv_path))?;

    let template = write_template(&csv, &config.template).context("Failed to write template")?;
    println!("Wrote template for {} song(s) to {}", csv.rows.len(), template.display());
    Ok(())
}
