use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("No input reports given")]
    NoInputs,

    #[error(
        "Line count mismatch: {} has {found} lines, expected {expected} (from {})",
        path.display(),
        reference.display()
    )]
    LineCountMismatch {
        path: PathBuf,
        reference: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("{} has no line {line}", path.display())]
    MissingLine { line: usize, path: PathBuf },

    #[error("Line {line}: could not convert '{value}' to a number")]
    InvalidNumber { line: usize, value: String },

    #[error("Line {line}: fields of {} do not line up with the first report", path.display())]
    ShapeMismatch { line: usize, path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}
