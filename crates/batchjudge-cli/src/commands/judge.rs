//! Judge command: statistics of one judge's notes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::judge::format_summary_console;
use batchjudge_core::{JudgeNotes, JudgeSummary, write_report_files};

use crate::cli_utils;

pub fn run(notes: Option<PathBuf>, json: bool) -> Result<()> {
    let path = cli_utils::path_or_prompt(notes, "Judge notes file")?;
    let notes = JudgeNotes::load(&path)
        .with_context(|| format!("Failed to read judge notes {:?}", path))?;

    let summary = JudgeSummary::new(&notes);
    let files = write_report_files(&notes.judge, &summary.stats, notes.dir())
        .context("Failed to write report files")?;

    if json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", format_summary_console(&summary));
        cli_utils::print_failures(&notes.ratings);
        eprintln!("Wrote {}", files.ratings_to_songs.display());
        eprintln!("Wrote {}", files.ratings_raw.display());
    }
    Ok(())
}
