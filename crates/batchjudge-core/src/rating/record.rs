use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::SpecialRating;

static SONG_WITH_STEPARTIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\{(.*)\}\s*\((.*)\)$").expect("SONG_WITH_STEPARTIST regex is valid")
});

static SONG_WITHOUT_STEPARTIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\{(.*)\}$").expect("SONG_WITHOUT_STEPARTIST regex is valid")
});

/// Title, artist and stepartist of one judged song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub step_artist: String,
}

impl SongInfo {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        step_artist: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            artist: artist.into().trim().to_string(),
            step_artist: step_artist.into().trim().to_string(),
        }
    }

    /// Parse `Title {Artist} (Stepartist)` or `Title {Artist}`.
    ///
    /// Returns `None` when the text has no `{artist}` part.
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(caps) = SONG_WITH_STEPARTIST.captures(text) {
            return Some(Self::new(&caps[1], &caps[2], &caps[3]));
        }
        SONG_WITHOUT_STEPARTIST
            .captures(text)
            .map(|caps| Self::new(&caps[1], &caps[2], ""))
    }

    pub fn has_step_artist(&self) -> bool {
        !self.step_artist.is_empty()
    }
}

impl fmt::Display for SongInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}}}", self.title, self.artist)?;
        if self.has_step_artist() {
            write!(f, " ({})", self.step_artist)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    Numeric,
    Special,
}

/// One parsed rating line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRecord {
    #[serde(flatten)]
    song: SongInfo,
    score: String,
    kind: ScoreKind,
    special: Option<SpecialRating>,
}

impl RatingRecord {
    pub fn numeric(song: SongInfo, score: impl Into<String>) -> Self {
        Self {
            song,
            score: score.into(),
            kind: ScoreKind::Numeric,
            special: None,
        }
    }

    /// Build a special rating; `++`, `--` and `!` take their normalized score.
    pub fn special(song: SongInfo, symbol: SpecialRating) -> Self {
        let score = symbol.normalized_score().unwrap_or(symbol.token());
        Self {
            song,
            score: score.to_string(),
            kind: ScoreKind::Special,
            special: Some(symbol),
        }
    }

    pub fn song(&self) -> &SongInfo {
        &self.song
    }

    pub fn title(&self) -> &str {
        &self.song.title
    }

    pub fn artist(&self) -> &str {
        &self.song.artist
    }

    pub fn step_artist(&self) -> &str {
        &self.song.step_artist
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn kind(&self) -> ScoreKind {
        self.kind
    }

    /// Original symbol of a special rating.
    pub fn special_symbol(&self) -> Option<SpecialRating> {
        self.special
    }

    /// Whether this record takes part in sums and averages.
    pub fn is_numeric_equivalent(&self) -> bool {
        match self.special {
            Some(symbol) => symbol.is_numeric_equivalent(),
            None => true,
        }
    }

    pub fn numeric_value(&self) -> Option<f64> {
        if self.is_numeric_equivalent() {
            self.score.parse().ok()
        } else {
            None
        }
    }

    /// `[7.5/10]` for numeric scores, `[PASS]` for the other specials.
    pub fn display_score(&self) -> String {
        if self.is_numeric_equivalent() {
            format!("[{}/10]", self.score)
        } else {
            format!("[{}]", self.score)
        }
    }
}
