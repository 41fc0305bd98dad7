//! CLI argument definitions for batchjudge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "batchjudge")]
#[command(about = "Chart batch judging toolkit", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = "BATCHJUDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a batch folder and write <batch>.csv
    Batch {
        /// Batch folder with one sub-folder per song (prompted if omitted)
        path: Option<PathBuf>,
    },
    /// Write a judge notes template from a batch CSV
    Template {
        /// Batch CSV file (prompted if omitted)
        csv: Option<PathBuf>,
    },
    /// Append stepartists to the judge notes next to a batch CSV
    Steppers {
        /// Batch CSV file (prompted if omitted)
        csv: Option<PathBuf>,
    },
    /// Summarize one judge's ratings and write the report files
    Judge {
        /// Judge notes file (prompted if omitted)
        notes: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write judgments_<set>.csv for a set folder
    Excel {
        /// Set folder with the judges' notes (prompted if omitted)
        set_dir: Option<PathBuf>,
    },
    /// Combine the notes of every set into forum_post.txt
    Forum {
        /// Folder with one sub-folder per set (prompted if omitted)
        notes_dir: Option<PathBuf>,
    },
}
