use std::fs::File;
use std::path::Path;

use log::{error, info, warn};

use super::model::{Row, Table, Value};
use crate::error::{Result, TableError};

/// Field contents a pandas-style reader treats as missing.
const NA_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "<NA>",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV table, logging the outcome.
///
/// Returns `None` when the file does not exist or cannot be parsed; the
/// reason is logged rather than returned.
pub fn load_csv_file(path: &Path) -> Option<Table> {
    match try_load_csv(path) {
        Ok(table) => {
            info!("Data successfully loaded from {}", path.display());
            Some(table)
        }
        Err(err @ TableError::NotFound(_)) => {
            warn!("{err}");
            None
        }
        Err(err) => {
            error!("Error loading data: {err}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per line.
/// Short records are padded with `Null`; long records are rejected. A file
/// with no header at all is an error.
pub fn try_load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(TableError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.is_empty() {
        return Err(TableError::EmptyFile(path.to_path_buf()));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if record.len() > columns.len() {
            return Err(TableError::RaggedRecord {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: columns.len(),
                found: record.len(),
            });
        }
        rows.push(Row::new(record.iter().map(guess_value_type).collect()));
    }

    Ok(Table::new(columns, rows))
}

/// Infer a cell's type from its text.
pub fn guess_value_type(s: &str) -> Value {
    let trimmed = s.trim();
    if NA_TOKENS.contains(&trimmed) {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }
    match trimmed {
        "true" | "True" | "TRUE" => Value::Bool(true),
        "false" | "False" | "FALSE" => Value::Bool(false),
        _ => Value::String(s.to_string()),
    }
}
