use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::Error;

/// Chart header tag collected into the batch CSV.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(try_from = "String", into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum ChartField {
    #[strum(serialize = "TITLE")]
    Title,
    #[strum(serialize = "SUBTITLE")]
    Subtitle,
    #[strum(serialize = "ARTIST")]
    Artist,
    #[strum(serialize = "STEPARTIST")]
    StepArtist,
    #[strum(serialize = "GENRE")]
    Genre,
    #[strum(serialize = "CREDIT")]
    Credit,
}

impl ChartField {
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Value of `#TAG:value;` if `line` carries this field.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix('#')?
            .strip_prefix(self.tag())?
            .strip_prefix(':')?
            .strip_suffix(';')
    }

    pub fn default_fields() -> Vec<Self> {
        vec![Self::Title, Self::Artist, Self::StepArtist]
    }
}

impl TryFrom<String> for ChartField {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|_| Error::UnknownField(value))
    }
}

impl std::fmt::Display for ChartField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
