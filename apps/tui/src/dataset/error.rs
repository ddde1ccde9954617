use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the insolation table.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file is missing or unreadable
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more required headers are absent
    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A required cell did not parse
    #[error("invalid record on line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// The CSV reader itself failed (bad UTF-8, ragged rows, ...)
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Coarse classification used when reporting a startup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Format => write!(f, "format error"),
        }
    }
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Csv(err) if err.is_io_error() => ErrorKind::Io,
            Self::MissingColumns(_) | Self::InvalidRow { .. } | Self::Csv(_) => ErrorKind::Format,
        }
    }
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_separates_unreadable_from_malformed() {
        let missing = DatasetError::Io {
            path: PathBuf::from("absent.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let columns = DatasetError::MissingColumns(vec!["Year".to_string()]);

        assert_eq!(missing.kind().to_string(), "I/O error");
        assert_eq!(columns.kind().to_string(), "format error");
    }
}
