//! Judge notes analysis.
//!
//! This module contains:
//! - `JudgeNotes` - a judge's notes file and its parsed ratings
//! - `RatingStats`, `ScoreGroup` - sums, averages and per-score grouping
//! - Report formatting (legacy text files, console, JSON)

mod notes;
mod output;
mod stats;

pub use notes::*;
pub use output::*;
pub use stats::*;
