//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without touching any batch folders.

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "batchjudge")]
struct Args {
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Batch {
        path: Option<PathBuf>,
    },
    Template {
        csv: Option<PathBuf>,
    },
    Steppers {
        csv: Option<PathBuf>,
    },
    Judge {
        notes: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    Excel {
        set_dir: Option<PathBuf>,
    },
    Forum {
        notes_dir: Option<PathBuf>,
    },
}

#[test]
fn test_parse_requires_command() {
    assert!(Args::try_parse_from(["batchjudge"]).is_err());
}

#[test]
fn test_parse_batch_with_path() {
    let args = Args::try_parse_from(["batchjudge", "batch", "/batches/MayBatch"]).unwrap();
    match args.command {
        Command::Batch { path } => assert_eq!(path, Some(PathBuf::from("/batches/MayBatch"))),
        _ => panic!("Expected Batch command"),
    }
    assert!(args.config.is_none());
    assert!(args.log_file.is_none());
}

#[test]
fn test_parse_batch_without_path() {
    let args = Args::try_parse_from(["batchjudge", "batch"]).unwrap();
    match args.command {
        Command::Batch { path } => assert!(path.is_none()),
        _ => panic!("Expected Batch command"),
    }
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "batchjudge",
        "--config",
        "judging.toml",
        "--log-file",
        "run.log",
        "template",
        "MayBatch.csv",
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("judging.toml")));
    assert_eq!(args.log_file, Some(PathBuf::from("run.log")));
    match args.command {
        Command::Template { csv } => assert_eq!(csv, Some(PathBuf::from("MayBatch.csv"))),
        _ => panic!("Expected Template command"),
    }
}

#[test]
fn test_parse_judge_json() {
    let args = Args::try_parse_from(["batchjudge", "judge", "--json", "Tyler_Notes.txt"]).unwrap();
    match args.command {
        Command::Judge { notes, json } => {
            assert!(json);
            assert_eq!(notes, Some(PathBuf::from("Tyler_Notes.txt")));
        }
        _ => panic!("Expected Judge command"),
    }

    let args = Args::try_parse_from(["batchjudge", "judge"]).unwrap();
    match args.command {
        Command::Judge { notes, json } => {
            assert!(!json);
            assert!(notes.is_none());
        }
        _ => panic!("Expected Judge command"),
    }
}

#[test]
fn test_parse_set_commands() {
    let args = Args::try_parse_from(["batchjudge", "steppers", "set1/MayBatch.csv"]).unwrap();
    assert!(matches!(args.command, Command::Steppers { csv: Some(_) }));

    let args = Args::try_parse_from(["batchjudge", "excel", "set12"]).unwrap();
    match args.command {
        Command::Excel { set_dir } => assert_eq!(set_dir, Some(PathBuf::from("set12"))),
        _ => panic!("Expected Excel command"),
    }

    let args = Args::try_parse_from(["batchjudge", "forum"]).unwrap();
    assert!(matches!(args.command, Command::Forum { notes_dir: None }));
}

#[test]
fn test_parse_unknown_command() {
    assert!(Args::try_parse_from(["batchjudge", "upload"]).is_err());
}
