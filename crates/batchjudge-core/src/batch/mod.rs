//! Batch folder scanning and the batch CSV.
//!
//! This module contains:
//! - `BatchScanner`, `SongEntry` - song folders and their chart metadata
//! - `BatchCsv`, `BatchColumns` - reading and writing `<batch>.csv`

mod csv;
mod scanner;

pub use csv::*;
pub use scanner::*;
