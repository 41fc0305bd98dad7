//! Forum post combining the judge notes of several sets.
//!
//! The notes directory holds one `set<N>` folder per set, each with one
//! `<Judge>_Format.txt` file per judge. The post starts with an outline of the
//! sets and their judges, followed by every judge's notes with rating lines in
//! bold.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::judge::{FORMAT_MARKER, file_name_of, judge_name_from_file};
use crate::judgments::set_number;
use crate::report::Report;

static SONG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[.*\].*\{.*\}\s*\(.*\)$").expect("SONG_LINE regex is valid")
});

pub const FORUM_POST_FILE: &str = "forum_post.txt";
const DEFAULT_JUDGE: &str = "Judge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeFile {
    pub judge: String,
    pub path: PathBuf,
}

impl JudgeFile {
    fn new(path: PathBuf) -> Self {
        let judge = judge_name_from_file(&file_name_of(&path), FORMAT_MARKER).unwrap_or_else(|e| {
            warn!("{}, using '{}'", e, DEFAULT_JUDGE);
            DEFAULT_JUDGE.to_string()
        });
        Self { judge, path }
    }
}

/// A set folder and its judges' notes files.
#[derive(Debug, Clone)]
pub struct SetNotes {
    pub name: String,
    pub number: String,
    pub judges: Vec<JudgeFile>,
}

fn sorted_entries(dir: &Path, want_dirs: bool) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() == want_dirs)
        .collect();
    paths.sort();
    Ok(paths)
}

/// Every set folder of `notes_dir` with its judge files, ordered by set
/// number and then by folder name.
pub fn collect_sets(notes_dir: &Path) -> Result<Vec<SetNotes>> {
    let mut sets = Vec::new();
    for dir in sorted_entries(notes_dir, true)? {
        let name = file_name_of(&dir);
        let judges: Vec<JudgeFile> = sorted_entries(&dir, false)?
            .into_iter()
            .map(JudgeFile::new)
            .collect();
        debug!("Set '{}' has {} judge file(s)", name, judges.len());
        sets.push(SetNotes {
            number: set_number(&name),
            name,
            judges,
        });
    }
    sets.sort_by(|a, b| {
        set_order(&a.number)
            .cmp(&set_order(&b.number))
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(sets)
}

fn set_order(number: &str) -> u64 {
    number.parse().unwrap_or(u64::MAX)
}

fn judge_letter(index: usize) -> char {
    char::from(b'a' + (index % 26) as u8)
}

/// Bold a line shaped like `[rating] Title {Artist} (Stepartist)`.
pub fn format_notes_line(line: &str) -> String {
    let line = line.trim();
    if SONG_LINE.is_match(line) {
        format!("[b]{}[/b]", line)
    } else {
        line.to_string()
    }
}

/// Numbered list of sets with their judges lettered below.
pub fn format_outline(sets: &[SetNotes]) -> String {
    let mut out = String::new();
    for (set_index, set) in sets.iter().enumerate() {
        let _ = writeln!(out, "[b][size=4]{}.) SET {}[/size][/b]", set_index + 1, set.number);
        for (judge_index, judge) in set.judges.iter().enumerate() {
            let _ = writeln!(out, "[b]{}.) {}[/b]", judge_letter(judge_index), judge.judge);
        }
    }
    out
}

/// Assemble the whole post. Unreadable judge files keep their heading and are
/// recorded as failures.
pub fn format_post(sets: &[SetNotes]) -> (String, Report<PathBuf>) {
    let mut report = Report::new();
    let mut out = format_outline(sets);
    out.push('\n');

    for (set_index, set) in sets.iter().enumerate() {
        if set_index > 0 {
            out.push_str("\n\n");
        }
        let _ = write!(out, "[b][size=7]SET {}[/size][/b]", set.number);

        for judge in &set.judges {
            let _ = write!(out, "\n\n[b][size=4]=== JUDGE: {} ===[/size][/b]\n", judge.judge);
            match fs::read_to_string(&judge.path) {
                Ok(content) => {
                    for line in content.lines() {
                        out.push('\n');
                        out.push_str(&format_notes_line(line));
                    }
                    report.push(judge.path.clone());
                }
                Err(e) => report.fail(file_name_of(&judge.path), e.into()),
            }
        }
    }
    out.push('\n');
    (out, report)
}

/// Write `forum_post.txt` into `notes_dir`.
pub fn write_forum_post(notes_dir: &Path) -> Result<(PathBuf, Report<PathBuf>)> {
    let sets = collect_sets(notes_dir)?;
    if sets.is_empty() {
        warn!("No set folders in {:?}", notes_dir);
    }

    let (post, report) = format_post(&sets);
    let path = notes_dir.join(FORUM_POST_FILE);
    fs::write(&path, post)?;
    info!("Wrote {:?} with {} set(s)", path, sets.len());
    Ok((path, report))
}
