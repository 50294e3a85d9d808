//! Catalog - the ordered collection of books plus the id allocator.
//!
//! ## Example
//!
//! ```
//! use book_catalog::{BookId, Catalog, Query, Status};
//!
//! let mut catalog = Catalog::new();
//! catalog.add("Dune", "Frank Herbert", 1965)?;
//! let id = catalog.add("Foundation", "Isaac Asimov", 1951)?.id();
//!
//! assert!(catalog.remove(BookId::new(1)));
//! assert_eq!(catalog.find(&Query::new().author("Isaac Asimov")).len(), 1);
//! assert!(catalog.toggle_status(id));
//! assert_eq!(catalog.get(id).unwrap().status(), Status::CheckedOut);
//! # Ok::<(), book_catalog::CatalogError>(())
//! ```

mod catalog;
mod listing;
mod storage;

use crate::book::Book;

pub use catalog::Catalog;
pub use listing::{Listing, EMPTY_CATALOG};

/// Search criteria for [`Catalog::find`].
///
/// Every criterion that is set must match exactly. A query with nothing set
/// matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.title.as_deref().map_or(true, |t| book.title() == t)
            && self.author.as_deref().map_or(true, |a| book.author() == a)
            && self.year.map_or(true, |y| book.year() == y)
    }
}
