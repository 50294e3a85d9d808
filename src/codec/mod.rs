//! Codecs - the two on-disk forms of a catalog.
//!
//! Both carry the same content: the next id to hand out and the ordered
//! list of book records.
//!
//! - [`JsonCodec`]: `{"next_id": 3, "books": [{"id": 1, ...}, ...]}`
//! - [`TextCodec`]: a bare `next_id` line, then one `id|title|author|year|status`
//!   line per book. Pipes inside fields are not escaped, so a title or author
//!   containing `|` is written as-is and will not load back.

mod json;
mod text;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::book::BookRecord;
use crate::error::CatalogError;

pub use json::JsonCodec;
pub use text::TextCodec;

/// Everything a codec persists for one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub next_id: u64,
    pub books: Vec<BookRecord>,
}

/// Encodes and decodes a [`Snapshot`] for one on-disk format.
pub trait Codec {
    fn format(&self) -> Format;

    fn encode(&self, snapshot: &Snapshot) -> Result<String, CatalogError>;

    /// Decode the whole input. Any bad line or field fails the entire call.
    fn decode(&self, input: &str) -> Result<Snapshot, CatalogError>;
}

/// Selects a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Text,
}

impl Format {
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Format::Json => &JsonCodec,
            Format::Text => &TextCodec,
        }
    }

    /// File extension used when saving by name, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Text => "txt",
        }
    }

    /// Guess the format from a path's extension. `.txt` is text, anything else json.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Format::Text,
            _ => Format::Json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Text => f.write_str("text"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "text" | "txt" => Ok(Format::Text),
            other => Err(format!("unknown format {other:?}: expected `json` or `text`")),
        }
    }
}
