//! Judge notes template generated from the batch CSV.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::batch::{BatchCsv, BatchRow};
use crate::config::TemplateConfig;
use crate::error::Result;

fn template_line(row: &BatchRow, config: &TemplateConfig) -> String {
    let title = if row.title.is_empty() {
        &row.folder
    } else {
        &row.title
    };
    let artist = if row.artist.is_empty() {
        warn!("No artist for {}, using '{}'", row.folder, config.unknown_artist);
        &config.unknown_artist
    } else {
        &row.artist
    };

    let mut line = format!("[/10] {} {{{}}}", title, artist);
    if config.include_stepartist && !row.step_artist.is_empty() {
        line.push_str(&format!(" ({})", row.step_artist));
    }
    line
}

/// Template text: one `[/10] Title {Artist}` entry per row, followed by two
/// comment stubs and a blank line.
pub fn format_template(csv: &BatchCsv, config: &TemplateConfig) -> String {
    csv.rows
        .iter()
        .map(|row| format!("{}\n-\n-\n\n", template_line(row, config)))
        .collect()
}

pub fn template_path(csv: &BatchCsv) -> PathBuf {
    csv.dir().join(format!("template_{}.txt", csv.batch_name()))
}

/// Write `template_<batch>.txt` next to the CSV.
pub fn write_template(csv: &BatchCsv, config: &TemplateConfig) -> Result<PathBuf> {
    let path = template_path(csv);
    fs::write(&path, format_template(csv, config))?;
    info!("Wrote template for {} song(s) to {:?}", csv.rows.len(), path);
    Ok(path)
}

/// Read `csv_path` and write its template.
pub fn generate_template(csv_path: &Path, config: &TemplateConfig) -> Result<PathBuf> {
    let csv = BatchCsv::load(csv_path)?;
    write_template(&csv, config)
}
