#![allow(dead_code)]

use book_catalog::{Book, Catalog};

/// The three-book catalog most tests start from: ids 1..=3, all available.
pub fn shelf() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add("Dune", "Frank Herbert", 1965).unwrap();
    catalog.add("Foundation", "Isaac Asimov", 1951).unwrap();
    catalog.add("I, Robot", "Isaac Asimov", 1950).unwrap();
    catalog
}

pub fn ids(books: &[&Book]) -> Vec<u64> {
    books.iter().map(|book| book.id().get()).collect()
}
