use super::normalizer::normalize_name;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct FieldRecord {
    pub(crate) line: u64,
    pub(crate) raw_name: String,
    pub(crate) normalized_name: String,
    pub(crate) raw_value: String,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<FieldRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: FieldRow = record.deserialize(Some(&headers))?;
        if row.field.is_empty() {
            continue;
        }

        records.push(FieldRecord {
            line,
            normalized_name: normalize_name(&row.field),
            raw_name: row.field,
            raw_value: row.value,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct FieldRow {
    #[serde(alias = "Field", alias = "name", alias = "Name")]
    field: String,
    #[serde(alias = "Value", alias = "count", alias = "Count")]
    value: String,
}
