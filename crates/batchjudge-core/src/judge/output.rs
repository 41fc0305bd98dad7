//! Judge statistics output: legacy text files, console and JSON.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::info;

use super::{JudgeNotes, RatingStats, ScoreGroup, format_rounded};
use crate::error::Result;

fn write_groups(out: &mut String, groups: &[ScoreGroup]) {
    for group in groups {
        out.push_str(&group.label);
        for song in &group.songs {
            let _ = write!(out, "\n--> {}", song);
        }
        out.push_str("\n\n");
    }
}

/// Body of `ratingsToSongs_<judge>.txt`: every score followed by its songs.
pub fn format_ratings_to_songs(stats: &RatingStats) -> String {
    let mut out = String::new();
    write_groups(&mut out, &stats.judged);
    write_groups(&mut out, &stats.special);
    out
}

/// Body of `ratingsRaw_<judge>.txt`: song count per score and the totals.
pub fn format_ratings_raw(stats: &RatingStats) -> String {
    let mut out = String::new();
    for (label, count) in stats.raw_counts() {
        let _ = writeln!(out, "{}:{}", label, count);
    }
    let _ = writeln!(out, "TOTAL:{}", format_rounded(stats.total, 1));
    let _ = writeln!(out, "JUDGEDFILES:{}", stats.judged_files);
    let _ = writeln!(out, "SPECIALFILES:{}", stats.special_files);
    let _ = writeln!(out, "TOTALFILES:{}", stats.total_files());
    let _ = writeln!(
        out,
        "AVERAGE:{}",
        format_rounded(stats.average.unwrap_or(0.0), 2)
    );
    out
}

/// Paths of the two legacy report files.
#[derive(Debug, Clone)]
pub struct ReportFiles {
    pub ratings_to_songs: PathBuf,
    pub ratings_raw: PathBuf,
}

/// Write `ratingsToSongs_<judge>.txt` and `ratingsRaw_<judge>.txt` into `dir`.
pub fn write_report_files(judge: &str, stats: &RatingStats, dir: &Path) -> Result<ReportFiles> {
    let files = ReportFiles {
        ratings_to_songs: dir.join(format!("ratingsToSongs_{}.txt", judge)),
        ratings_raw: dir.join(format!("ratingsRaw_{}.txt", judge)),
    };

    fs::write(&files.ratings_to_songs, format_ratings_to_songs(stats))?;
    info!("Wrote {:?}", files.ratings_to_songs);
    fs::write(&files.ratings_raw, format_ratings_raw(stats))?;
    info!("Wrote {:?}", files.ratings_raw);

    Ok(files)
}

#[derive(Debug, Serialize)]
pub struct JudgeSummary<'a> {
    pub judge: &'a str,
    pub path: &'a Path,
    #[serde(flatten)]
    pub stats: RatingStats,
    pub total_files: usize,
    pub unparsed_lines: Vec<String>,
}

impl<'a> JudgeSummary<'a> {
    pub fn new(notes: &'a JudgeNotes) -> Self {
        let stats = notes.stats();
        Self {
            judge: &notes.judge,
            path: &notes.path,
            total_files: stats.total_files(),
            stats,
            unparsed_lines: notes
                .ratings
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.subject, f.error))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Colored console summary of a judge's ratings.
pub fn format_summary_console(summary: &JudgeSummary<'_>) -> String {
    let stats = &summary.stats;
    let mut output = String::new();
    let border = "━".repeat(40);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  JUDGE : {}", summary.judge.bold());
    let _ = writeln!(output, "{}", border.dimmed());
    for group in &stats.judged {
        let _ = writeln!(
            output,
            "  {:<10} {}",
            group.label.cyan(),
            group.songs.len()
        );
    }
    for group in &stats.special {
        let _ = writeln!(
            output,
            "  {:<10} {}",
            group.label.yellow(),
            group.songs.len()
        );
    }
    let _ = writeln!(output, "  TOTAL   : {}", format_rounded(stats.total, 1));
    let _ = writeln!(
        output,
        "  FILES   : {} judged / {} special / {} total",
        stats.judged_files,
        stats.special_files,
        stats.total_files()
    );
    match stats.average {
        Some(average) => {
            let _ = writeln!(output, "  AVERAGE : {}", format_rounded(average, 2).green());
        }
        None => {
            let _ = writeln!(output, "  AVERAGE : -");
        }
    }
    if !summary.unparsed_lines.is_empty() {
        let _ = writeln!(
            output,
            "  {} unparsed rating line(s)",
            summary.unparsed_lines.len().red()
        );
    }
    let _ = write!(output, "{}", border.dimmed());
    output
}
