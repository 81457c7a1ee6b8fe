//! Input file loading.
//!
//! Both sources are checked for existence before either is read, so a run
//! with a missing file fails without touching the other one.

use std::path::Path;

use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::models::Table;

/// Logical name of the employee hours table.
pub const EMPLOYEES_TABLE: &str = "employees";

/// Logical name of the customer orders table.
pub const ORDERS_TABLE: &str = "orders";

/// Loads the employees and orders tables.
///
/// # Returns
///
/// Returns `(employees, orders)` on success, or:
/// - `MissingInput` listing every path that does not exist
/// - `Csv` if a file exists but cannot be read as CSV
///
/// # Example
///
/// ```no_run
/// use payroll_report::input::load_inputs;
///
/// let (employees, orders) = load_inputs("employees.csv", "orders.csv")?;
/// println!("{} employee rows, {} order rows", employees.len(), orders.len());
/// # Ok::<(), payroll_report::error::PipelineError>(())
/// ```
pub fn load_inputs<E, O>(employees_path: E, orders_path: O) -> PipelineResult<(Table, Table)>
where
    E: AsRef<Path>,
    O: AsRef<Path>,
{
    let employees_path = employees_path.as_ref();
    let orders_path = orders_path.as_ref();

    let missing: Vec<String> = [employees_path, orders_path]
        .iter()
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();

    if !missing.is_empty() {
        return Err(PipelineError::MissingInput { paths: missing });
    }

    let employees = load_table(EMPLOYEES_TABLE, employees_path)?;
    let orders = load_table(ORDERS_TABLE, orders_path)?;

    Ok((employees, orders))
}

/// Reads one CSV file into a [`Table`].
///
/// The first record is the header row. Cells are trimmed; an empty cell
/// becomes a null. Rows whose length differs from the header are rejected.
pub fn load_table(name: &str, path: &Path) -> PipelineResult<Table> {
    let path_str = path.display().to_string();
    let csv_error = |e: csv::Error| PipelineError::Csv {
        path: path_str.clone(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    debug!(
        table = name,
        path = %path_str,
        columns = headers.len(),
        rows = rows.len(),
        "Loaded table"
    );

    Ok(Table::new(name, headers, rows))
}
