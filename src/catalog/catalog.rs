use std::collections::HashSet;

use tracing::debug;

use super::{Listing, Query};
use crate::book::{Book, BookId, BookRecord, NewBook, Status};
use crate::codec::{Format, Snapshot};
use crate::error::{CatalogError, ValidationError};

/// Ordered collection of books and the allocator for their ids.
///
/// Ids start at 1 and are never reused, even after the book that held one
/// is removed. Insertion order is kept and is the order of `find` and
/// `display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// The id the next admitted book will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// Validate and admit a new book. It gets the next id and starts out available.
    ///
    /// On error nothing changes: the book is not added and no id is consumed.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Result<&Book, CatalogError> {
        let new_book = NewBook::new(title, author, year)?;
        self.admit(new_book)
    }

    /// Admit an already validated book.
    pub fn admit(&mut self, new_book: NewBook) -> Result<&Book, CatalogError> {
        let id = BookId::new(self.next_id);
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| CatalogError::Invariant("book id space exhausted".into()))?;

        let index = self.books.len();
        self.books.push(new_book.catalogue(id, Status::Available));
        self.next_id = next_id;
        debug!(id = id.get(), "book added");

        Ok(&self.books[index])
    }

    /// Remove the book with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: BookId) -> bool {
        match self.books.iter().position(|book| book.id() == id) {
            Some(index) => {
                self.books.remove(index);
                debug!(id = id.get(), "book removed");
                true
            }
            None => false,
        }
    }

    /// Books matching every criterion set on `query`, in catalog order.
    pub fn find(&self, query: &Query) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    /// Flip the book between available and checked out.
    /// Returns false, changing nothing, when no book has `id`.
    pub fn toggle_status(&mut self, id: BookId) -> bool {
        match self.books.iter_mut().find(|book| book.id() == id) {
            Some(book) => {
                let status = book.toggle_status();
                debug!(id = id.get(), %status, "book status changed");
                true
            }
            None => false,
        }
    }

    /// One rendered line per book, or a single [`EMPTY_CATALOG`](super::EMPTY_CATALOG) line.
    pub fn display(&self) -> Listing<'_> {
        Listing::new(&self.books)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            next_id: self.next_id,
            books: self.books.iter().map(BookRecord::from).collect(),
        }
    }

    pub fn serialize(&self, format: Format) -> Result<String, CatalogError> {
        format.codec().encode(&self.snapshot())
    }

    /// Replace the whole catalog with the decoded content.
    ///
    /// The input is decoded and validated completely before anything is
    /// swapped in; on error the catalog is left as it was.
    pub fn deserialize(&mut self, format: Format, input: &str) -> Result<(), CatalogError> {
        let loaded = Catalog::try_from(format.codec().decode(input)?)?;
        debug!(books = loaded.len(), next_id = loaded.next_id, %format, "catalog replaced");
        *self = loaded;
        Ok(())
    }
}

impl TryFrom<Snapshot> for Catalog {
    type Error = CatalogError;

    /// Validates every record like fresh input, then checks that ids are
    /// unique and below `next_id`.
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let next_id = snapshot.next_id;
        let mut seen = HashSet::with_capacity(snapshot.books.len());
        let mut books = Vec::with_capacity(snapshot.books.len());

        for record in snapshot.books {
            let book = Book::try_from(record)?;
            if book.id().get() >= next_id {
                return Err(ValidationError::IdNotBelowNextId {
                    id: book.id(),
                    next_id,
                }
                .into());
            }
            if !seen.insert(book.id()) {
                return Err(ValidationError::DuplicateId(book.id()).into());
            }
            books.push(book);
        }

        Ok(Catalog {
            books,
            next_id: next_id.max(1),
        })
    }
}
