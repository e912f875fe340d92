//! Dump error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wallet_shared::AppError;

use crate::ledger::LedgerError;

/// Errors raised while writing or reading a dump.
#[derive(Debug, Error)]
pub enum DumpError {
    /// File system operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A record could not be parsed.
    #[error("malformed record {record} in {}: {reason}", path.display())]
    MalformedRecord {
        /// File the record came from.
        path: PathBuf,
        /// 1-based record number (line number for directory dumps).
        record: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Paged export was asked for zero records per file.
    #[error("records per file must be greater than zero")]
    InvalidRecordsPerFile,

    /// Parsed records violate ledger invariants.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl DumpError {
    /// Returns a mapper that wraps an I/O error with the path it concerns.
    pub(crate) fn io(path: &Path) -> impl Fn(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true if the error is a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl From<DumpError> for AppError {
    fn from(err: DumpError) -> Self {
        match err {
            DumpError::Ledger(inner) => inner.into(),
            DumpError::Io { .. } => Self::Storage(err.to_string()),
            DumpError::MalformedRecord { .. } | DumpError::InvalidRecordsPerFile => {
                Self::Validation(err.to_string())
            }
        }
    }
}
