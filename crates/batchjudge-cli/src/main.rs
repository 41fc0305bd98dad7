mod cli;
mod cli_utils;
mod commands;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // RUST_LOG overrides the default filter
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("batchjudge=info,batchjudge_core=info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = cli_utils::load_config(args.config.as_deref())?;

    match args.command {
        Command::Batch { path } => commands::batch::run(path, &config),
        Command::Template { csv } => commands::template::run(csv, &config),
        Command::Steppers { csv } => commands::steppers::run(csv),
        Command::Judge { notes, json } => commands::judge::run(notes, json),
        Command::Excel { set_dir } => commands::excel::run(set_dir),
        Command::Forum { notes_dir } => commands::forum::run(notes_dir),
    }
}
