use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

static BRACKET_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\[(.*)\]$").expect("BRACKET_SUFFIX regex is valid"));
static PAREN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\((.*)\)$").expect("PAREN_SUFFIX regex is valid"));
static BRACE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\{(.*)\}$").expect("BRACE_SUFFIX regex is valid"));

/// Song title and stepartist encoded in a song folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderName {
    pub title: String,
    pub step_artist: String,
}

impl FolderName {
    /// Parse `Title [Stepper]`, `Title (Stepper)` or `Title {Stepper}`.
    ///
    /// The last bracket pair closing the name holds the stepartist.
    pub fn parse(folder: &str) -> Result<Self> {
        debug!("Parsing song folder '{}'", folder);
        let caps = [&*BRACKET_SUFFIX, &*PAREN_SUFFIX, &*BRACE_SUFFIX]
            .into_iter()
            .find_map(|re| re.captures(folder))
            .ok_or_else(|| Error::FolderName(folder.to_string()))?;

        Ok(Self {
            title: caps[1].trim().to_string(),
            step_artist: caps[2].trim().to_string(),
        })
    }
}
