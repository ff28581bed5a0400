//! Collects [`RawInputs`] from files and request payloads.
//!
//! The scoring core trusts whatever it is given; this layer is where
//! negative or non-numeric counters are turned away.

mod mapping;
mod normalizer;
mod parser;

pub use mapping::InputField;

use crate::scoring::RawInputs;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read metrics file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid metrics CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown metric field '{name}'")]
    UnknownField { line: u64, name: String },
    #[error("line {line}: '{field}' is listed more than once")]
    DuplicateField { line: u64, field: &'static str },
    #[error("{field} must be a number, got '{value}'")]
    InvalidValue { field: &'static str, value: String },
    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },
}

/// Reads `field,value` rows into a fresh [`RawInputs`].
///
/// Fields that are not listed keep the values of [`RawInputs::default`].
pub struct RawInputsImporter;

impl RawInputsImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RawInputs, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RawInputs, IntakeError> {
        let mut inputs = RawInputs::default();
        let mut seen: HashSet<InputField> = HashSet::new();

        for record in parser::parse_records(reader)? {
            let field = mapping::field_for_normalized(&record.normalized_name).ok_or_else(|| {
                IntakeError::UnknownField {
                    line: record.line,
                    name: record.raw_name.clone(),
                }
            })?;

            if !seen.insert(field) {
                return Err(IntakeError::DuplicateField {
                    line: record.line,
                    field: field.key(),
                });
            }

            let value = parse_counter(field.key(), &record.raw_value)?;
            field.apply(&mut inputs, value);
        }

        debug!(fields = seen.len(), "metrics file imported");
        Ok(inputs)
    }
}

/// Checks that every counter is a finite, non-negative number.
pub fn validate_inputs(inputs: &RawInputs) -> Result<(), IntakeError> {
    for (field, value) in inputs.fields() {
        check_counter(field, value)?;
    }
    Ok(())
}

fn parse_counter(field: &'static str, raw: &str) -> Result<f64, IntakeError> {
    let invalid = || IntakeError::InvalidValue {
        field,
        value: raw.to_string(),
    };
    let value = strip_thousands(raw.trim())
        .ok_or_else(invalid)?
        .parse::<f64>()
        .map_err(|_| invalid())?;
    check_counter(field, value)?;
    Ok(value)
}

/// Removes `,` grouping from values like `12,500.5`. Commas anywhere else
/// (`1,5`, `12,50`) are ambiguous and rejected.
fn strip_thousands(value: &str) -> Option<String> {
    if !value.contains(',') {
        return Some(value.to_string());
    }

    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };
    if fraction.is_some_and(|fraction| fraction.contains(',')) {
        return None;
    }

    let digits = integer.strip_prefix(['-', '+']).unwrap_or(integer);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !lead.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !groups.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    Some(value.replace(',', ""))
}

fn check_counter(field: &'static str, value: f64) -> Result<(), IntakeError> {
    if !value.is_finite() {
        return Err(IntakeError::InvalidValue {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(IntakeError::NegativeValue { field, value });
    }
    Ok(())
}
