//! The batch CSV file.
//!
//! Legacy line format, no quoting:
//!
//! ```text
//! [FOLDER],[ARTIST],[STEPARTIST],[TITLE]
//! Moonearth (Tyler),DJ Sharpnel,Tyler,Moonearth
//! ```
//!
//! Commas inside values are deleted when writing.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::SongEntry;
use crate::error::{Error, Result};
use crate::simfile::ChartField;

const FOLDER_COLUMN: &str = "FOLDER";

fn strip_commas(value: &str) -> String {
    value.replace(',', "")
}

/// CSV path of a batch folder: `<batch>/<batch name>.csv`.
pub fn batch_csv_path(batch_dir: &Path) -> PathBuf {
    let name = batch_dir
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "batch".to_string());
    batch_dir.join(format!("{}.csv", name))
}

/// Render entries as batch CSV text. `fields` keep their given order.
pub fn format_batch_csv(entries: &[SongEntry], fields: &[ChartField]) -> String {
    let mut out = format!("[{}]", FOLDER_COLUMN);
    for field in fields {
        let _ = write!(out, ",[{}]", field.tag());
    }
    out.push('\n');

    let mut rows: Vec<&SongEntry> = entries.iter().collect();
    rows.sort_by_key(|entry| entry.folder.to_lowercase());

    for entry in rows {
        out.push_str(&strip_commas(&entry.folder));
        for field in fields {
            let value = entry.get(*field);
            if value.is_empty() {
                warn!("{} has no {}", entry.folder, field);
            }
            out.push(',');
            out.push_str(&strip_commas(value));
        }
        out.push('\n');
    }
    out
}

/// Write `<batch name>.csv` into `batch_dir`.
pub fn write_batch_csv(
    batch_dir: &Path,
    entries: &[SongEntry],
    fields: &[ChartField],
) -> Result<PathBuf> {
    let path = batch_csv_path(batch_dir);
    fs::write(&path, format_batch_csv(entries, fields))?;
    info!("Wrote {} song(s) to {:?}", entries.len(), path);
    Ok(path)
}

/// Column indices of a batch CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchColumns {
    pub folder: usize,
    pub title: Option<usize>,
    pub artist: Option<usize>,
    pub step_artist: Option<usize>,
}

impl BatchColumns {
    pub fn from_header(header: &str) -> Result<Self> {
        let names: Vec<String> = header
            .split(',')
            .map(|cell| cell.trim().trim_start_matches('[').trim_end_matches(']').to_string())
            .collect();
        let position = |tag: &str| names.iter().position(|name| name.eq_ignore_ascii_case(tag));

        Ok(Self {
            folder: position(FOLDER_COLUMN)
                .ok_or_else(|| Error::CsvColumnMissing(FOLDER_COLUMN.to_string()))?,
            title: position(ChartField::Title.tag()),
            artist: position(ChartField::Artist.tag()),
            step_artist: position(ChartField::StepArtist.tag()),
        })
    }
}

/// One data row of a batch CSV. Missing columns read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRow {
    pub folder: String,
    pub title: String,
    pub artist: String,
    pub step_artist: String,
}

#[derive(Debug, Clone)]
pub struct BatchCsv {
    pub path: PathBuf,
    pub columns: BatchColumns,
    pub rows: Vec<BatchRow>,
}

impl BatchCsv {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading batch CSV {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| Error::CsvHeaderMissing(path.to_path_buf()))?;
        let columns = BatchColumns::from_header(header)?;

        let rows = lines
            .map(|line| {
                let cells: Vec<&str> = line.split(',').collect();
                let cell = |index: Option<usize>| {
                    index
                        .and_then(|i| cells.get(i))
                        .map(|value| value.trim().to_string())
                        .unwrap_or_default()
                };
                BatchRow {
                    folder: cell(Some(columns.folder)),
                    title: cell(columns.title),
                    artist: cell(columns.artist),
                    step_artist: cell(columns.step_artist),
                }
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            columns,
            rows,
        })
    }

    /// Base name of the batch, the CSV file stem.
    pub fn batch_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Stepartists in row order.
    pub fn step_artists(&self) -> Result<Vec<String>> {
        if self.columns.step_artist.is_none() {
            return Err(Error::CsvColumnMissing(ChartField::StepArtist.tag().to_string()));
        }
        Ok(self.rows.iter().map(|row| row.step_artist.clone()).collect())
    }
}
