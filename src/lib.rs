//! An in-memory book catalog.
//!
//! Books are validated on the way in, get a never-reused id when the
//! catalog admits them, and flip between available and checked out. A
//! catalog can be saved to and loaded from two interchangeable formats,
//! JSON and a pipe-delimited line format.

mod book;
mod catalog;
mod codec;
mod error;

pub use book::{Book, BookId, BookRecord, NewBook, Status};
pub use catalog::{Catalog, Listing, Query, EMPTY_CATALOG};
pub use codec::{Codec, Format, JsonCodec, Snapshot, TextCodec};
pub use error::{CatalogError, ValidationError};
