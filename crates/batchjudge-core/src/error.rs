use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unparsed rating line: {0}")]
    UnparsedRating(String),

    #[error("Score {score} is outside 0-10: {line}")]
    ScoreOutOfRange { score: String, line: String },

    #[error("Judge name not found in file name: {0}")]
    JudgeFileName(String),

    #[error("Stepartist suffix not found in folder name: {0}")]
    FolderName(String),

    #[error("No .sm or .dwi chart in {0}")]
    ChartNotFound(PathBuf),

    #[error("Cannot aggregate an empty rating list")]
    EmptyAggregation,

    #[error("CSV header not found in {0}")]
    CsvHeaderMissing(PathBuf),

    #[error("CSV column missing: {0}")]
    CsvColumnMissing(String),

    #[error("Unknown chart field: {0}")]
    UnknownField(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
