use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::report::Report;
use crate::simfile::{ChartField, ChartFile, FolderName};

/// Metadata of one song folder in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub folder: String,
    pub fields: BTreeMap<ChartField, String>,
}

impl SongEntry {
    /// Value of `field`, empty when the chart did not carry it.
    pub fn get(&self, field: ChartField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }
}

/// Scans a batch folder for song folders and their chart metadata.
#[derive(Debug, Clone)]
pub struct BatchScanner {
    fields: Vec<ChartField>,
}

impl Default for BatchScanner {
    fn default() -> Self {
        Self::new(ChartField::default_fields())
    }
}

impl BatchScanner {
    pub fn new(mut fields: Vec<ChartField>) -> Self {
        fields.sort_by_key(|field| field.tag().to_ascii_lowercase());
        fields.dedup();
        Self { fields }
    }

    /// Collected fields, sorted case-insensitively by tag.
    pub fn fields(&self) -> &[ChartField] {
        &self.fields
    }

    /// Read every song folder of `batch_dir`.
    ///
    /// Files are ignored. Folders without a stepartist suffix or without a
    /// chart are recorded as failures.
    pub fn scan(&self, batch_dir: &Path) -> Result<Report<SongEntry>> {
        info!("Scanning batch folder {:?}", batch_dir);

        let mut folders: Vec<PathBuf> = fs::read_dir(batch_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        folders.sort_by_key(|path| folder_name(path).to_lowercase());

        let mut report = Report::new();
        for path in folders {
            let folder = folder_name(&path);
            let entry = self.scan_song(&path, &folder);
            report.record(folder, entry);
        }

        info!(
            "Found {} song(s), skipped {} folder(s)",
            report.len(),
            report.failures.len()
        );
        Ok(report)
    }

    fn scan_song(&self, path: &Path, folder: &str) -> Result<SongEntry> {
        let name = FolderName::parse(folder)?;
        let chart = ChartFile::load(path, &self.fields)?;
        debug!("{} -> {:?}", folder, chart.fields);

        let fields = self
            .fields
            .iter()
            .map(|field| {
                let value = match field {
                    ChartField::Title => name.title.clone(),
                    ChartField::StepArtist => name.step_artist.clone(),
                    _ => chart.fields.get(field).cloned().unwrap_or_default(),
                };
                (*field, value)
            })
            .collect();

        Ok(SongEntry {
            folder: folder.to_string(),
            fields,
        })
    }
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
