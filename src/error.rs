use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the fallible cores of the table stages.
///
/// The public stage functions never return these; they log them and fall
/// back to a benign value instead.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No columns to parse from {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("record on line {line} has {found} fields, header has {expected}")]
    RaggedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
