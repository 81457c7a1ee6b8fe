//! Raw tabular data as loaded from a delimited file.
//!
//! A [`Table`] keeps every cell as text so that schema and null checks can
//! run before any typed parsing happens.

use serde::{Deserialize, Serialize};

/// A loaded table: a header row plus data rows of optional cells.
///
/// A `None` cell is a null (the source cell was empty or whitespace only).
///
/// # Example
///
/// ```
/// use payroll_report::models::Table;
///
/// let table = Table::new(
///     "employees",
///     vec!["employee_id".to_string(), "hours_worked".to_string()],
///     vec![
///         vec![Some("E1".to_string()), Some("8".to_string())],
///         vec![Some("E2".to_string()), None],
///     ],
/// );
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.null_count(), 1);
/// assert_eq!(table.cell(0, 0), Some("E1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Creates a table from its logical name, headers and rows.
    pub fn new(
        name: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Returns the logical name used in diagnostics (e.g. "orders").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of a column by header name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Returns the required columns that are absent, in required order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|column| self.column_index(column).is_none())
            .map(|column| column.to_string())
            .collect()
    }

    /// Counts null cells across every row and column.
    pub fn null_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_none()).count())
            .sum()
    }

    /// Returns the text of a cell, or `None` if it is null or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}
