//! File persistence for a [`Catalog`].

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::Catalog;
use crate::codec::Format;
use crate::error::CatalogError;

impl Catalog {
    /// Write the catalog to `path` in `format`, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>, format: Format) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let encoded = self.serialize(format)?;

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(encoded.as_bytes())?;
        writer.flush()?;

        debug!(path = %path.display(), %format, books = self.len(), "catalog saved");
        Ok(())
    }

    /// Replace the catalog with the content of `path`.
    ///
    /// A missing file is [`CatalogError::NotFound`]. Any decode or validation
    /// failure leaves the catalog untouched.
    pub fn load_from(&mut self, path: impl AsRef<Path>, format: Format) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound {
                path: path.to_path_buf(),
            },
            _ => CatalogError::Io(err),
        })?;

        self.deserialize(format, &input)?;
        debug!(path = %path.display(), %format, books = self.len(), "catalog loaded");
        Ok(())
    }

    /// Load `path` into a fresh catalog.
    pub fn open(path: impl AsRef<Path>, format: Format) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        catalog.load_from(path, format)?;
        Ok(catalog)
    }
}
