use std::fmt;

use icu_properties::props::NumericType;
use icu_properties::CodePointMapData;

use super::{BookId, Status};
use crate::error::ValidationError;

/// A validated book that has not been admitted into a catalog yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: String,
    author: String,
    year: i64,
}

impl NewBook {
    /// Validate the fields of a book.
    ///
    /// The title is not checked for content. The author is rejected when it
    /// is made up entirely of digits. Any year is accepted, including zero
    /// and negative values.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Result<Self, ValidationError> {
        let author = author.into();
        validate_author(&author)?;

        Ok(NewBook {
            title: title.into(),
            author,
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Attach an id and status. Only the catalog and record decoding do this.
    pub(crate) fn catalogue(self, id: BookId, status: Status) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            status,
        }
    }
}

fn validate_author(author: &str) -> Result<(), ValidationError> {
    if !author.is_empty() && author.chars().all(is_digit) {
        return Err(ValidationError::NumericAuthor(author.to_string()));
    }
    Ok(())
}

/// Decimal digits in any script plus characters like superscripts whose
/// Unicode Numeric_Type is Digit. Fractions, roman numerals and other
/// numbers that are not digits do not count.
fn is_digit(c: char) -> bool {
    let numeric_type = CodePointMapData::<NumericType>::new().get(c);
    numeric_type == NumericType::Decimal || numeric_type == NumericType::Digit
}

/// A book that belongs to a catalog. Always has an id and a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year: i64,
    status: Status,
}

impl Book {
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Flip the status and return the new one.
    pub(crate) fn toggle_status(&mut self) -> Status {
        self.status = self.status.toggled();
        self.status
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
