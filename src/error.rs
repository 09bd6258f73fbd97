//! Error types for the ingestion run.
//!
//! Only [`IngestError::SourceRead`] is recovered (the file is skipped and
//! recorded in the run summary); every other variant aborts the run.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    /// A source file could not be read or is not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input root is missing or cannot be walked.
    #[error("cannot discover files under {}: {message}", .root.display())]
    Discovery { root: PathBuf, message: String },

    /// The corpus could not be serialized.
    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output directory or artifact could not be written.
    #[error("failed to write corpus to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Whether the run can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, IngestError::SourceRead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_read_errors_are_recoverable() {
        let read = IngestError::SourceRead {
            path: PathBuf::from("a.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        let write = IngestError::Persistence {
            path: PathBuf::from("out.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(read.is_recoverable());
        assert!(!write.is_recoverable());
        assert_eq!(read.to_string(), "failed to read a.md: bad utf-8");
    }
}
