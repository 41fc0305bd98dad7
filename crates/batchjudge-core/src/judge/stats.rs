use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::rating::{RatingRecord, SongInfo};

/// Songs that received the same score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGroup {
    pub score: String,
    /// `[7.5/10]` for numeric-equivalent scores, `[PASS]` for the rest.
    pub label: String,
    pub songs: Vec<SongInfo>,
}

/// Sum of every numeric-equivalent score.
pub fn rating_sum<'a>(records: impl IntoIterator<Item = &'a RatingRecord>) -> f64 {
    records.into_iter().filter_map(|r| r.numeric_value()).sum()
}

/// Average of every numeric-equivalent score.
///
/// `PASS`, `*`, `#`, `<` and `$` ratings are left out. Fails with
/// [`Error::EmptyAggregation`] when nothing is left to average.
pub fn average<'a>(records: impl IntoIterator<Item = &'a RatingRecord>) -> Result<f64> {
    let (sum, count) = records
        .into_iter()
        .filter_map(|r| r.numeric_value())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(Error::EmptyAggregation);
    }
    let average = sum / count as f64;
    debug!("{} / {} = {}", sum, count, average);
    Ok(average)
}

/// Partition records by score, keeping first-seen order.
pub fn group_by_score<'a>(records: impl IntoIterator<Item = &'a RatingRecord>) -> Vec<ScoreGroup> {
    let mut groups: Vec<ScoreGroup> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g.score == record.score()) {
            Some(group) => group.songs.push(record.song().clone()),
            None => groups.push(ScoreGroup {
                score: record.score().to_string(),
                label: record.display_score(),
                songs: vec![record.song().clone()],
            }),
        }
    }
    groups
}

/// Per-judge statistics over a list of ratings.
#[derive(Debug, Clone, Serialize)]
pub struct RatingStats {
    /// Numeric-equivalent groups, lowest score first.
    pub judged: Vec<ScoreGroup>,
    /// Other special groups, ordered by token.
    pub special: Vec<ScoreGroup>,
    pub total: f64,
    pub judged_files: usize,
    pub special_files: usize,
    pub average: Option<f64>,
}

impl RatingStats {
    pub fn from_records(records: &[RatingRecord]) -> Self {
        let (judged, special): (Vec<&RatingRecord>, Vec<&RatingRecord>) =
            records.iter().partition(|r| r.is_numeric_equivalent());

        let mut judged_groups = group_by_score(judged.iter().copied());
        judged_groups.sort_by(|a, b| score_value(&a.score).total_cmp(&score_value(&b.score)));

        let mut special_groups = group_by_score(special.iter().copied());
        special_groups.sort_by_key(|g| g.score.to_lowercase());

        let average = match average(judged.iter().copied()) {
            Ok(average) => Some(average),
            Err(e) => {
                tracing::warn!("No average: {}", e);
                None
            }
        };

        Self {
            judged: judged_groups,
            special: special_groups,
            total: rating_sum(judged.iter().copied()),
            judged_files: judged.len(),
            special_files: special.len(),
            average,
        }
    }

    pub fn total_files(&self) -> usize {
        self.judged_files + self.special_files
    }

    /// `(label, song count)` for every group, judged groups first.
    pub fn raw_counts(&self) -> Vec<(&str, usize)> {
        self.judged
            .iter()
            .chain(&self.special)
            .map(|g| (g.label.as_str(), g.songs.len()))
            .collect()
    }
}

fn score_value(score: &str) -> f64 {
    score.parse().unwrap_or(f64::MAX)
}

/// Round like the legacy reports: `8` → `8.0`, `7.254` → `7.25`.
pub fn format_rounded(value: f64, places: i32) -> String {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    let text = rounded.to_string();
    if text.contains('.') || !rounded.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
