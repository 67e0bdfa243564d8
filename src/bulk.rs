use crate::catalog::{Catalog, ITEM_COUNT};
use crate::error::{Error, Result};
use crate::report::Report;
use crate::scoring::Category;
use crate::store::AnswerStore;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::io::Read;
use tracing::warn;

/// Ergebnis einer Zeile der Sammelauswertung
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkScore {
    pub respondent: String,
    pub total: u32,
    pub category: Category,
}

impl BulkScore {
    pub fn evaluate(catalog: &Catalog, respondent: String, store: &AnswerStore) -> Result<Self> {
        let report = Report::new(catalog, store)?;
        Ok(BulkScore {
            respondent,
            total: report.total,
            category: report.category,
        })
    }
}

/// Kopfzeile plus eine Zeile je Person: `respondent,item1,...,item12`.
/// Leere Felder gelten als unbeantwortet.
pub fn read_bulk<R: Read>(reader: R) -> impl Iterator<Item = Result<(String, AnswerStore)>> {
    read_bulk_delimited(reader, b',')
}

pub fn read_bulk_delimited<R: Read>(
    reader: R,
    delimiter: u8,
) -> impl Iterator<Item = Result<(String, AnswerStore)>> {
    ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .enumerate()
        .map(|(index, record)| {
            let row = index + 1;
            let parsed = record.map_err(Error::from).and_then(|record| parse_row(row, &record));
            if let Err(ref err) = parsed {
                warn!(row, error = %err, "skipping row");
            }
            parsed
        })
}

fn parse_row(row: usize, record: &StringRecord) -> Result<(String, AnswerStore)> {
    if record.len() != ITEM_COUNT + 1 {
        return Err(Error::FieldCount {
            row,
            expected: ITEM_COUNT + 1,
            found: record.len(),
        });
    }
    let mut fields = record.iter();
    let respondent = fields.next().unwrap_or_default().to_string();
    let mut store = AnswerStore::default();
    for (id, value) in (1..).zip(fields) {
        if value.is_empty() {
            continue;
        }
        let raw = value
            .parse::<u8>()
            .map_err(|_| Error::Unparsable(value.to_string()))?;
        store.insert(id, raw)?;
    }
    Ok((respondent, store))
}
