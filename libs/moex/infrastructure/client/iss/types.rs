//! ISS response types
//!
//! ISS returns every block as a table: an ordered list of column names and
//! a list of positional rows aligned to them.

use serde::Deserialize;
use serde_json::Value;

use super::client::{MarketDataError, Result};

/// Top-level ISS document; only the `marketdata` block is used
#[derive(Debug, Clone, Deserialize)]
pub struct IssResponse {
    pub marketdata: IssTable,
}

/// A single ISS block in its tabular form
#[derive(Debug, Clone, Deserialize)]
pub struct IssTable {
    pub columns: Vec<String>,
    pub data: Vec<Vec<Value>>,
}

impl IssTable {
    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Numeric value of `column` in the first row
    ///
    /// Fails when the table is empty, the column is absent, or the cell is
    /// null / non-numeric (ISS sends nulls outside trading hours).
    pub fn first_row_number(&self, column: &str) -> Result<f64> {
        let row = self.data.first().ok_or(MarketDataError::EmptyTable)?;
        let idx = self
            .column_index(column)
            .ok_or_else(|| MarketDataError::MissingColumn(column.to_string()))?;

        row.get(idx)
            .and_then(Value::as_f64)
            .ok_or_else(|| MarketDataError::InvalidValue {
                column: column.to_string(),
                value: row.get(idx).cloned().unwrap_or(Value::Null).to_string(),
            })
    }
}
