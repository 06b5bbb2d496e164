//! CSV batch input for the tax calculator.
//!
//! ## CSV Format
//!
//! One taxpayer per row. Headers are matched by name, so column order does
//! not matter; whitespace around cells is trimmed.
//!
//! | Column         | Type    | Notes                            |
//! |----------------|---------|----------------------------------|
//! | `sex`          | string  | `m` or `f`, any case             |
//! | `age`          | integer | completed years, e.g. `35`       |
//! | `gross_income` | decimal | annual rupees, e.g. `800000.00`  |
//!
//! Every row is passed to the calculator as-is, so a missing or extra column
//! is reported per row with the calculator's own validation message. A header
//! that repeats a column name is rejected for the whole file.
//!
//! ```csv
//! sex,age,gross_income
//! m,35,800000
//! f,67,800000
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use itax_core::{InputRecord, TaxCalculator, ValidationError};
use tracing::debug;

/// Errors that can occur while reading batch input.
#[derive(Debug, thiserror::Error)]
pub enum BatchLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The CSV itself is malformed (ragged rows, bad quoting, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The header names the same column more than once.
    #[error("duplicate column '{0}' in CSV header")]
    DuplicateColumn(String),
}

/// The outcome for one CSV row.
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based row number, header excluded.
    pub row: usize,
    pub outcome: Result<TaxCalculator, ValidationError>,
}

/// Parse CSV text into raw input records, in file order.
///
/// # Errors
///
/// * [`BatchLoadError::Parse`] if the CSV is structurally invalid.
/// * [`BatchLoadError::DuplicateColumn`] if a header name repeats, since the
///   repeated cells would collapse into a single record key.
pub fn load_from_str(input: &str) -> Result<Vec<InputRecord>, BatchLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reject_duplicate_columns(reader.headers()?)?;

    let records = reader
        .deserialize::<InputRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = records.len(), "parsed batch input");

    Ok(records)
}

fn reject_duplicate_columns(headers: &csv::StringRecord) -> Result<(), BatchLoadError> {
    let mut seen = BTreeSet::new();
    for name in headers {
        if !seen.insert(name) {
            return Err(BatchLoadError::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<InputRecord>, BatchLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BatchLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

/// Validates every record and computes tax for the ones that pass.
pub fn evaluate(records: &[InputRecord]) -> Vec<BatchEntry> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let outcome = TaxCalculator::from_record(Some(record)).map(|mut calculator| {
                calculator.compute_tax();
                calculator
            });
            BatchEntry {
                row: idx + 1,
                outcome,
            }
        })
        .collect()
}
