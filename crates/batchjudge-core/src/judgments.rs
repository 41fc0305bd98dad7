//! Spreadsheet-ready CSV of every judge's ratings for one set.
//!
//! ```text
//! Song,Stepartist,Set,Tyler,Nick,supp
//! Moonearth,Tyler,12,7.5,8,
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::judge::{NOTES_MARKER, file_name_of, judge_name_from_file, score_column};
use crate::rating::{SongInfo, is_rating_line, split_bracket};
use crate::report::Report;
use crate::steppers::{notes_files, steppers_path};

static SET_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("SET_NUMBER regex is valid"));

const DEFAULT_SET_NUMBER: &str = "0";

/// Trailing number of a set directory name, `"0"` when there is none.
pub fn set_number(set_name: &str) -> String {
    SET_NUMBER
        .captures(set_name.trim())
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_SET_NUMBER.to_string())
}

/// A song row of the judgments table.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSong {
    /// Index among the rating lines of a notes file, the key into every
    /// judge's score column.
    pub line: usize,
    pub song: SongInfo,
}

/// Songs of rating lines carrying both `{artist}` and `(stepartist)`, in order.
///
/// Rating lines without a stepartist are skipped but still counted, so
/// `line` stays aligned with [`score_column`].
pub fn song_order(content: &str) -> Vec<SetSong> {
    content
        .lines()
        .filter(|line| is_rating_line(line))
        .enumerate()
        .filter_map(|(line, text)| {
            let song = split_bracket(text.trim_end())
                .and_then(|(_, remainder)| SongInfo::parse(remainder))
                .filter(SongInfo::has_step_artist);
            if song.is_none() {
                warn!("No song with stepartist in rating line {}: '{}'", line + 1, text);
            }
            song.map(|song| SetSong { line, song })
        })
        .collect()
}

/// Judge notes files of a set, preferring the `_steppers.txt` copy.
fn set_notes_files(set_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(set_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let name = file_name_of(path);
            path.is_file() && name.ends_with(".txt") && name.contains(NOTES_MARKER)
        })
        .collect();
    files.sort();

    let originals = notes_files(set_dir)?;
    files.retain(|path| !originals.contains(path) || !steppers_path(path).is_file());
    Ok(files)
}

#[derive(Debug, Clone, PartialEq)]
pub struct JudgeColumn {
    pub judge: String,
    pub scores: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct SetJudgments {
    pub set_name: String,
    pub set_number: String,
    pub songs: Vec<SetSong>,
    pub judges: Vec<JudgeColumn>,
}

impl SetJudgments {
    /// Read every judge notes file of `set_dir`.
    ///
    /// Files without a readable judge name are recorded in the returned
    /// report and left out of the table.
    pub fn load(set_dir: &Path) -> Result<(Self, Report<PathBuf>)> {
        let set_name = file_name_of(set_dir).trim().to_string();
        let set_number = set_number(&set_name);
        info!("Collecting judgments of '{}' (set {})", set_name, set_number);

        let mut report = Report::new();
        let mut songs = Vec::new();
        let mut judges: Vec<JudgeColumn> = Vec::new();

        for path in set_notes_files(set_dir)? {
            let judge = match judge_name_from_file(&file_name_of(&path), NOTES_MARKER) {
                Ok(judge) => judge,
                Err(e) => {
                    report.fail(file_name_of(&path), e);
                    continue;
                }
            };
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    report.fail(file_name_of(&path), e.into());
                    continue;
                }
            };

            if judges.is_empty() {
                songs = song_order(&content);
                debug!("{} song(s) in the order of {:?}", songs.len(), path);
            }
            let scores = score_column(&content);
            if let Some(first) = judges.first() {
                if scores.len() != first.scores.len() {
                    warn!(
                        "{} has {} rating line(s), {} has {}",
                        judge,
                        scores.len(),
                        first.judge,
                        first.scores.len()
                    );
                }
            }
            judges.push(JudgeColumn { judge, scores });
            report.push(path);
        }

        if judges.is_empty() {
            warn!("No judge notes found in {:?}", set_dir);
        }

        Ok((
            Self {
                set_name,
                set_number,
                songs,
                judges,
            },
            report,
        ))
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("Song,Stepartist,Set");
        for column in &self.judges {
            out.push(',');
            out.push_str(&column.judge);
        }
        out.push_str(",supp\n");

        for SetSong { line, song } in &self.songs {
            out.push_str(&song.title.replace(',', ""));
            out.push(',');
            out.push_str(&song.step_artist.replace(',', ""));
            out.push(',');
            out.push_str(&self.set_number);
            for column in &self.judges {
                out.push(',');
                match column.scores.get(*line) {
                    Some(Some(score)) => out.push_str(score),
                    _ => warn!("{} has no rating for '{}'", column.judge, song.title),
                }
            }
            out.push_str(",\n");
        }
        out
    }

    pub fn csv_file_name(&self) -> String {
        format!("judgments_{}.csv", self.set_name)
    }

    /// Write `judgments_<set>.csv` into `dir`.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.csv_file_name());
        fs::write(&path, self.to_csv())?;
        info!("Wrote {:?}", path);
        Ok(path)
    }
}
