//! Stepartist insertion into submitted judge notes.
//!
//! Judges rate songs from the template, which has no stepartists. Once notes
//! are in, the n-th rating line of every notes file gets the n-th stepartist of
//! the batch CSV appended.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::batch::BatchCsv;
use crate::error::Result;
use crate::judge::{NOTES_MARKER, file_name_of};
use crate::rating::is_rating_line;
use crate::report::Report;

const STEPPERS_SUFFIX: &str = "_steppers";

/// Append ` (<stepper>)` to rating lines ending with `}`.
///
/// Rating lines are counted in order whether or not they get a stepartist, so
/// the n-th rating line always pairs with the n-th CSV row.
pub fn add_step_artists(content: &str, step_artists: &[String]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut index = 0;

    for line in content.lines() {
        if !is_rating_line(line) {
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let line = line.trim();
        out.push_str(line);
        if line.ends_with('}') {
            match step_artists.get(index) {
                Some(stepper) => {
                    out.push_str(" (");
                    out.push_str(stepper);
                    out.push(')');
                }
                None => warn!("No stepartist left for rating line {}: '{}'", index + 1, line),
            }
        }
        out.push('\n');
        index += 1;
    }
    out
}

/// `<stem>_steppers.txt` next to `notes_path`.
pub fn steppers_path(notes_path: &Path) -> PathBuf {
    let stem = notes_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    notes_path.with_file_name(format!("{}{}.txt", stem, STEPPERS_SUFFIX))
}

/// Judge notes files in `dir` that have no stepartists yet, sorted.
pub fn notes_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let name = file_name_of(path);
            path.is_file()
                && name.ends_with(".txt")
                && name.contains(NOTES_MARKER)
                && !name.ends_with(&format!("{}.txt", STEPPERS_SUFFIX))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Write a `_steppers.txt` copy of every judge notes file next to the CSV.
pub fn write_steppers(csv: &BatchCsv) -> Result<Report<PathBuf>> {
    let step_artists = csv.step_artists()?;
    let mut report = Report::new();

    for notes in notes_files(csv.dir())? {
        let result = fs::read_to_string(&notes).and_then(|content| {
            let out = steppers_path(&notes);
            fs::write(&out, add_step_artists(&content, &step_artists))?;
            Ok(out)
        });
        match result {
            Ok(out) => {
                info!("Wrote {:?}", out);
                report.push(out);
            }
            Err(e) => report.fail(file_name_of(&notes), e.into()),
        }
    }
    Ok(report)
}
