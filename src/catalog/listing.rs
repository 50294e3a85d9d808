use std::iter::Enumerate;
use std::slice;

use crate::book::Book;

/// The single line a [`Listing`] yields for a catalog with no books.
pub const EMPTY_CATALOG: &str = "The catalog has no books yet.";

/// Lazily renders a catalog, one numbered line per book in catalog order.
///
/// An empty catalog yields exactly one line, [`EMPTY_CATALOG`].
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    books: Enumerate<slice::Iter<'a, Book>>,
    empty: bool,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(books: &'a [Book]) -> Self {
        Listing {
            empty: books.is_empty(),
            books: books.iter().enumerate(),
        }
    }
}

impl Iterator for Listing<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty {
            self.empty = false;
            return Some(EMPTY_CATALOG.to_string());
        }
        self.books
            .next()
            .map(|(idx, book)| format!("{}. {}", idx + 1, book))
    }
}
