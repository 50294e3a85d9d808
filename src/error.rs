use std::path::PathBuf;

use thiserror::Error;

use crate::book::BookId;

/// A field value was rejected while building or loading a book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author name cannot consist only of digits: {0:?}")]
    NumericAuthor(String),
    #[error("unknown status {0:?}: expected `available` or `checked_out`")]
    UnknownStatus(String),
    #[error("book record has no id")]
    MissingId,
    #[error("book record {0} has no status")]
    MissingStatus(BookId),
    #[error("book id must be a positive integer")]
    ZeroId,
    #[error("duplicate book id {0}")]
    DuplicateId(BookId),
    #[error("book id {id} is not below next_id {next_id}")]
    IdNotBelowNextId { id: BookId, next_id: u64 },
}

/// Error type for catalog operations and persistence.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The persistence resource does not exist.
    #[error("catalog file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// Internal consistency is broken. Not meant to be handled routinely.
    #[error("catalog invariant violated: {0}")]
    Invariant(String),
    /// A delimited-line file could not be parsed.
    #[error("malformed catalog data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CatalogError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Returns true when the error means "nothing saved there yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
