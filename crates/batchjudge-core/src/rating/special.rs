use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Non-numeric rating tokens a judge can put in place of `x/10`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum SpecialRating {
    #[strum(serialize = "PASS")]
    #[serde(rename = "PASS")]
    Pass,
    /// Guaranteed 10/10.
    #[strum(serialize = "++")]
    #[serde(rename = "++")]
    TopMark,
    /// Guaranteed 0/10.
    #[strum(serialize = "--")]
    #[serde(rename = "--")]
    BottomMark,
    /// Also a guaranteed 0/10.
    #[strum(serialize = "!")]
    #[serde(rename = "!")]
    Bang,
    /// Conditional queue flag.
    #[strum(serialize = "*")]
    #[serde(rename = "*")]
    ConditionalQueue,
    /// The judge made the file.
    #[strum(serialize = "#")]
    #[serde(rename = "#")]
    JudgeAuthored,
    /// A better file is already queued.
    #[strum(serialize = "<")]
    #[serde(rename = "<")]
    BetterInQueue,
    /// Better than the queued file.
    #[strum(serialize = "$")]
    #[serde(rename = "$")]
    BetterThanQueued,
}

impl SpecialRating {
    pub fn token(&self) -> &'static str {
        self.into()
    }

    /// Numeric score this token stands for in averages, if any.
    pub fn normalized_score(&self) -> Option<&'static str> {
        match self {
            Self::TopMark => Some("10"),
            Self::BottomMark | Self::Bang => Some("0"),
            _ => None,
        }
    }

    pub fn is_numeric_equivalent(&self) -> bool {
        self.normalized_score().is_some()
    }

    /// Classify the content between the brackets of a rating line.
    ///
    /// `PASS` may appear anywhere; every other token must lead the content.
    pub fn from_bracket_content(content: &str) -> Option<Self> {
        if content.contains(Self::Pass.token()) {
            return Some(Self::Pass);
        }
        Self::iter()
            .filter(|s| *s != Self::Pass)
            .find(|s| content.starts_with(s.token()))
    }
}

impl std::fmt::Display for SpecialRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
