use log::{debug, error, info};

use super::model::{Row, Table, Value};
use crate::error::{Result, TableError};

pub const DEFAULT_START_YEAR: f64 = 2013.0;
pub const DEFAULT_END_YEAR: f64 = 2019.0;
pub const DEFAULT_YEAR_COLUMN: &str = "year";

// ---------------------------------------------------------------------------
// Filter predicate: inclusive bounds on one numeric column
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` bounds applied to the named year column.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRange {
    pub start: f64,
    pub end: f64,
    pub column: String,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
            column: DEFAULT_YEAR_COLUMN.to_string(),
        }
    }
}

impl YearRange {
    pub fn new(start: f64, end: f64, column: impl Into<String>) -> Self {
        Self {
            start,
            end,
            column: column.into(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Coerce a cell to a number the way a lenient numeric conversion would.
///
/// * `Integer` / `Float` → themselves (NaN counts as missing)
/// * numeric text → the parsed number
/// * `Bool` → 1 / 0
/// * anything else → `None`
pub fn coerce_numeric(value: &Value) -> Option<Value> {
    let coerced = match value {
        Value::Integer(i) => Value::Integer(*i),
        Value::Float(f) => Value::Float(*f),
        Value::Bool(b) => Value::Integer(i64::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Value::Integer(i)
            } else {
                Value::Float(s.parse::<f64>().ok()?)
            }
        }
        Value::Null => return None,
    };
    match coerced {
        Value::Float(f) if f.is_nan() => None,
        other => Some(other),
    }
}

/// Keep rows whose year column lies within `[start, end]`, logging counts.
///
/// If filtering fails (e.g. the column does not exist) the error is logged
/// and an unmodified copy of `data` is returned.
pub fn filter_data_by_year_range(data: &Table, start: f64, end: f64, year_column: &str) -> Table {
    let range = YearRange::new(start, end, year_column);
    match try_filter_by_year_range(data, &range) {
        Ok(filtered) => filtered,
        Err(err) => {
            error!("Error filtering data by year: {err}");
            data.clone()
        }
    }
}

/// Fallible core of [`filter_data_by_year_range`].
///
/// Rows whose year does not coerce to a number are dropped before the bounds
/// check. Surviving rows carry the coerced numeric value in the year cell.
pub fn try_filter_by_year_range(data: &Table, range: &YearRange) -> Result<Table> {
    let col = data
        .column_index(&range.column)
        .ok_or_else(|| TableError::MissingColumn(range.column.clone()))?;

    let valid: Vec<(f64, Row)> = data
        .rows
        .iter()
        .filter_map(|row| {
            let year = coerce_numeric(&row.cells[col])?;
            let numeric = year.as_f64()?;
            let mut row = row.clone();
            row.cells[col] = year;
            Some((numeric, row))
        })
        .collect();
    let valid_count = valid.len();

    let rows: Vec<Row> = valid
        .into_iter()
        .filter(|(year, _)| range.contains(*year))
        .map(|(_, row)| row)
        .collect();

    debug!(
        "{} of {} rows had a numeric '{}' value",
        valid_count,
        data.len(),
        range.column
    );
    info!("Filtered data from {} to {} entries", valid_count, rows.len());

    Ok(Table {
        columns: data.columns.clone(),
        rows,
    })
}
