pub mod batch;
pub mod config;
pub mod error;
pub mod forum;
pub mod judge;
pub mod judgments;
pub mod rating;
pub mod report;
pub mod simfile;
pub mod steppers;
pub mod template;

pub use batch::{BatchColumns, BatchCsv, BatchRow, BatchScanner, SongEntry, write_batch_csv};
pub use config::Config;
pub use error::{Error, Result};
pub use forum::write_forum_post;
pub use judge::{JudgeNotes, JudgeSummary, RatingStats, ScoreGroup, write_report_files};
pub use judgments::{SetJudgments, SetSong};
pub use rating::{ParsedLine, RatingRecord, ScoreKind, SongInfo, SpecialRating, parse_line};
pub use report::{Failure, Report};
pub use simfile::{ChartField, ChartFile, ChartFormat, FolderName};
pub use steppers::write_steppers;
pub use template::{generate_template, write_template};
