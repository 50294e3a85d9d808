//! Books - validated catalog records.
//!
//! A book goes through two phases. A [`NewBook`] carries validated title,
//! author and year but is not yet part of any catalog. Once admitted, it
//! becomes a [`Book`] with a [`BookId`] and a [`Status`]. The catalog is
//! the only place that turns one into the other, so a book without an id
//! or status can never end up inside a catalog.
//!
//! ## Example
//!
//! ```
//! use book_catalog::{NewBook, ValidationError};
//!
//! assert!(NewBook::new("Dorian Gray", "O. Wilde", 1890).is_ok());
//! assert_eq!(
//!     NewBook::new("Dorian Gray", "1234", 1890),
//!     Err(ValidationError::NumericAuthor("1234".into()))
//! );
//! ```

mod book;
mod record;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub use book::{Book, NewBook};
pub use record::BookRecord;

/// Identifier assigned to a book when the catalog admits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub const fn new(value: u64) -> Self {
        BookId(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        BookId(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability of a catalogued book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    CheckedOut,
}

impl Status {
    /// Labels written by the earlier Russian-language tool. Accepted on load.
    const LEGACY_AVAILABLE: &'static str = "в наличии";
    const LEGACY_CHECKED_OUT: &'static str = "выдана";

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked_out",
        }
    }

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            Status::Available => Status::CheckedOut,
            Status::CheckedOut => Status::Available,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" | Self::LEGACY_AVAILABLE => Ok(Status::Available),
            "checked_out" | Self::LEGACY_CHECKED_OUT => Ok(Status::CheckedOut),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}
