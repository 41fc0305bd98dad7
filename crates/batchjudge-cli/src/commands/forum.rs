//! Forum command: one post from every set's judge notes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use batchjudge_core::write_forum_post;

use crate::cli_utils;

pub fn run(notes_dir: Option<PathBuf>) -> Result<()> {
    let notes_dir = cli_utils::path_or_prompt(notes_dir, "Folder with set folders")?;
    let (path, report) = write_forum_post(&notes_dir)
        .with_context(|| format!("Failed to build forum post from {:?}", notes_dir))?;
    cli_utils::print_failures(&report);

    println!("Wrote {}", path.display());
    Ok(())
}
