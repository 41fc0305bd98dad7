use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::RatingStats;
use crate::error::{Error, Result};
use crate::rating::{ParsedLine, RatingRecord, parse_line};
use crate::report::Report;

/// File name marker of submitted judge notes: `<Judge>_Notes_<Batch>.txt`.
pub const NOTES_MARKER: &str = "_Notes";

/// File name marker of notes prepared for the forum post: `<Judge>_Format.txt`.
pub const FORMAT_MARKER: &str = "_Format";

/// Extract the judge name in front of `marker` in a notes file name.
///
/// `DossarLX ODI_Notes_MayBatch.txt` with [`NOTES_MARKER`] gives `DossarLX ODI`.
pub fn judge_name_from_file(file_name: &str, marker: &str) -> Result<String> {
    match file_name.rfind(marker) {
        Some(index) if index > 0 => Ok(file_name[..index].to_string()),
        _ => Err(Error::JudgeFileName(file_name.to_string())),
    }
}

/// Parse every rating line of a notes file.
///
/// Free-text lines are skipped; unparsed rating lines become failures.
pub fn parse_notes(content: &str) -> Report<RatingRecord> {
    let mut report = Report::new();
    for (index, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(ParsedLine::Rating(record)) => report.push(record),
            Ok(ParsedLine::Content(_)) => {}
            Err(e) => report.fail(format!("line {}", index + 1), e),
        }
    }
    report
}

/// Score of each rating line in order, `None` for unparsed ones.
pub fn score_column(content: &str) -> Vec<Option<String>> {
    content
        .lines()
        .filter(|line| line.starts_with('['))
        .map(|line| match parse_line(line) {
            Ok(ParsedLine::Rating(record)) => Some(record.score().to_string()),
            _ => {
                warn!("No score in rating line '{}'", line);
                None
            }
        })
        .collect()
}

/// A judge's notes file and the ratings parsed from it.
#[derive(Debug)]
pub struct JudgeNotes {
    pub path: PathBuf,
    pub judge: String,
    pub ratings: Report<RatingRecord>,
}

impl JudgeNotes {
    /// Read and parse a judge notes file.
    ///
    /// A file name without `_Notes` falls back to the file stem as judge name.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Parsing judge notes file {:?}", path);

        let file_name = file_name_of(path);
        let judge = match judge_name_from_file(&file_name, NOTES_MARKER) {
            Ok(judge) => judge,
            Err(e) => {
                warn!("{}", e);
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or(file_name)
            }
        };
        debug!("Judge is '{}'", judge);

        let content = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            judge,
            ratings: parse_notes(&content),
        })
    }

    pub fn stats(&self) -> RatingStats {
        RatingStats::from_records(&self.ratings.items)
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
