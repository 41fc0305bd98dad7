//! Common CLI utility functions shared across commands.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use batchjudge_core::config::DEFAULT_CONFIG_FILE;
use batchjudge_core::{Config, Report};
use tracing::warn;

/// Use `path` if given, otherwise ask for one on stdin.
pub fn path_or_prompt(path: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => prompt_path(prompt),
    }
}

/// Read a path from stdin. Surrounding whitespace and quotes are removed.
pub fn prompt_path(prompt: &str) -> Result<PathBuf> {
    eprint!("{}: ", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read path from stdin")?;

    let path = line.trim().trim_matches(|c| c == '"' || c == '\'');
    if path.is_empty() {
        bail!("No path given");
    }
    Ok(PathBuf::from(path))
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if !path.exists() {
        warn!("Config file {:?} not found, using defaults", path);
        return Ok(Config::default());
    }
    Config::load(path).with_context(|| format!("Failed to load config {:?}", path))
}

/// Print skipped items of a report to stderr.
pub fn print_failures<T>(report: &Report<T>) {
    if report.is_clean() {
        return;
    }
    eprintln!("Skipped {}:", report.failures.len());
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.subject, failure.error);
    }
}
