use std::path::Path;

use log::{error, info};

use super::model::Table;
use crate::error::{Result, TableError};

/// Write `table` to `path` as CSV, logging the outcome. Failures are logged
/// and swallowed; the return value says whether the file was written.
pub fn save_csv_file(table: &Table, path: &Path) -> bool {
    match try_save_csv(table, path) {
        Ok(()) => {
            info!("Data successfully saved to {}", path.display());
            true
        }
        Err(err) => {
            error!("Error saving data: {err}");
            false
        }
    }
}

/// Header row followed by one record per row. No index column is written.
pub fn try_save_csv(table: &Table, path: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(&table.columns).map_err(csv_err)?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|v| v.to_string()))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
