use tracing::warn;

use super::{Codec, Format, Snapshot};
use crate::book::{BookId, BookRecord};
use crate::error::CatalogError;

const DELIMITER: char = '|';
const FIELDS: usize = 5;

/// Delimited-line form: `next_id` on the first line, then `id|title|author|year|status`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn encode(&self, snapshot: &Snapshot) -> Result<String, CatalogError> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", snapshot.next_id));

        for record in &snapshot.books {
            let id = record.id.ok_or_else(|| {
                CatalogError::Invariant(format!("record {:?} has no id", record.title))
            })?;
            let status = record.status.as_deref().ok_or_else(|| {
                CatalogError::Invariant(format!("record {} has no status", id))
            })?;

            if breaks_line(&record.title) || breaks_line(&record.author) {
                warn!(
                    id = id.get(),
                    "title or author contains a delimiter or line break; this line will not load back"
                );
            }

            out.push_str(&format!(
                "{}|{}|{}|{}|{}\n",
                id, record.title, record.author, record.year, status
            ));
        }

        Ok(out)
    }

    fn decode(&self, input: &str) -> Result<Snapshot, CatalogError> {
        let mut lines = input.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let (_, header) = lines
            .next()
            .ok_or_else(|| CatalogError::malformed(1, "missing next_id line"))?;
        let next_id = header
            .trim()
            .parse::<u64>()
            .map_err(|e| CatalogError::malformed(1, format!("invalid next_id {header:?}: {e}")))?;

        let books = lines
            .map(|(line_no, line)| parse_record(line_no, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Snapshot { next_id, books })
    }
}

fn breaks_line(field: &str) -> bool {
    field.contains(DELIMITER) || field.contains('\n') || field.contains('\r')
}

fn parse_record(line_no: usize, line: &str) -> Result<BookRecord, CatalogError> {
    // Trailing whitespace after the status is not part of it.
    let fields: Vec<&str> = line.trim_end().split(DELIMITER).collect();
    let &[id, title, author, year, status] = fields.as_slice() else {
        return Err(CatalogError::malformed(
            line_no,
            format!("expected {FIELDS} fields, found {}", fields.len()),
        ));
    };

    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|e| CatalogError::malformed(line_no, format!("invalid id {id:?}: {e}")))?;
    let year = year
        .trim()
        .parse::<i64>()
        .map_err(|e| CatalogError::malformed(line_no, format!("invalid year {year:?}: {e}")))?;

    Ok(BookRecord {
        id: Some(BookId::new(id)),
        title: title.to_string(),
        author: author.to_string(),
        year,
        status: Some(status.to_string()),
    })
}
