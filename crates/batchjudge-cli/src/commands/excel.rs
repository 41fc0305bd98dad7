//! Excel command: spreadsheet CSV of a set's judgments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::SetJudgments;

use crate::cli_utils;

pub fn run(set_dir: Option<PathBuf>) -> Result<()> {
    let set_dir = cli_utils::path_or_prompt(set_dir, "Set folder with judge notes")?;
    let (judgments, report) = SetJudgments::load(&set_dir)
        .with_context(|| format!("Failed to read set folder {:?}", set_dir))?;
    cli_utils::print_failures(&report);

    let path = judgments
        .write(&set_dir)
        .context("Failed to write judgments CSV")?;
    println!(
        "Wrote {} song(s) from {} judge(s) to {}",
        judgments.songs.len(),
        judgments.judges.len(),
        path.display()
    );
    Ok(())
}
