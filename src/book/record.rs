//! BookRecord - the flat key-value shape a book is persisted as.

use serde::{Deserialize, Serialize};

use super::{Book, BookId, NewBook, Status};
use crate::error::ValidationError;

/// Flat `{id, title, author, year, status}` map.
///
/// `id` and `status` are optional in the shape so that a record written for
/// a detached book still decodes; converting it into a [`Book`] then fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: Option<String>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        BookRecord {
            id: Some(book.id()),
            title: book.title().to_string(),
            author: book.author().to_string(),
            year: book.year(),
            status: Some(book.status().as_str().to_string()),
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    /// Runs the same checks as [`NewBook::new`], then attaches id and status.
    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let new_book = NewBook::new(record.title, record.author, record.year)?;
        let id = record.id.ok_or(ValidationError::MissingId)?;
        if id.get() == 0 {
            return Err(ValidationError::ZeroId);
        }
        let status: Status = record
            .status
            .ok_or(ValidationError::MissingStatus(id))?
            .parse()?;

        Ok(new_book.catalogue(id, status))
    }
}
