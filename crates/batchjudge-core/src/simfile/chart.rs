use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::SHIFT_JIS;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, warn};

use super::ChartField;
use crate::error::{Error, Result};

/// Step chart file formats, in lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ChartFormat {
    Sm,
    Dwi,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Dwi => "dwi",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::iter().find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }
}

/// Find the chart of a song folder: the first `.sm` file, else the first `.dwi`.
pub fn find_chart(song_dir: &Path) -> Result<(PathBuf, ChartFormat)> {
    let mut files: Vec<PathBuf> = fs::read_dir(song_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    ChartFormat::iter()
        .find_map(|format| {
            files
                .iter()
                .find(|path| ChartFormat::from_path(path) == Some(format))
                .map(|path| (path.clone(), format))
        })
        .ok_or_else(|| Error::ChartNotFound(song_dir.to_path_buf()))
}

/// Decode chart bytes as UTF-8, falling back to Shift-JIS.
pub fn decode_chart(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
            if had_errors {
                debug!("Shift-JIS decoding had errors");
            }
            decoded.into_owned()
        }
    }
}

/// Collect `fields` from the `#TAG:value;` header of a chart.
///
/// Scanning stops at the first line that does not start with `#`.
pub fn read_header(content: &str, fields: &[ChartField]) -> BTreeMap<ChartField, String> {
    let mut values = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim_end();
        if !line.starts_with('#') {
            break;
        }
        for field in fields {
            if let Some(value) = field.extract(line) {
                values.insert(*field, value.to_string());
            }
        }
    }
    values
}

/// A chart file and the header fields read from it.
#[derive(Debug, Clone)]
pub struct ChartFile {
    pub path: PathBuf,
    pub format: ChartFormat,
    pub fields: BTreeMap<ChartField, String>,
}

impl ChartFile {
    /// Locate and read the chart of `song_dir`.
    ///
    /// An unreadable chart yields empty fields and a warning.
    pub fn load(song_dir: &Path, fields: &[ChartField]) -> Result<Self> {
        let (path, format) = find_chart(song_dir)?;
        debug!("Parsing chart file {:?}", path);

        let fields = match fs::read(&path) {
            Ok(bytes) => read_header(&decode_chart(&bytes), fields),
            Err(e) => {
                warn!("Could not read chart {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Ok(Self {
            path,
            format,
            fields,
        })
    }
}
