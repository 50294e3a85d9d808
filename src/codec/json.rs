use super::{Codec, Format, Snapshot};
use crate::error::CatalogError;

/// Structured form: pretty-printed JSON with `next_id` and `books`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, snapshot: &Snapshot) -> Result<String, CatalogError> {
        let mut out = serde_json::to_string_pretty(snapshot)?;
        out.push('\n');
        Ok(out)
    }

    fn decode(&self, input: &str) -> Result<Snapshot, CatalogError> {
        Ok(serde_json::from_str(input)?)
    }
}
