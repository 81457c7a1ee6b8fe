//! Conversion of raw tables into typed records.
//!
//! Columns are looked up by header name, so their order in the source file
//! does not matter. A null cell becomes `None`; a non-null cell that does
//! not parse is a fatal [`PipelineError::Parse`].

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{EmployeeRecord, OrderRecord, Table};

/// Date format accepted in the `date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the employees table into [`EmployeeRecord`]s.
///
/// The table must already have passed the schema check; a missing column
/// here is reported as a `Schema` error as well.
///
/// # Example
///
/// ```
/// use payroll_report::input::parse_employee_records;
/// use payroll_report::models::Table;
/// use rust_decimal::Decimal;
///
/// let headers = ["employee_id", "name", "date", "hours_worked", "job"]
///     .iter()
///     .map(|h| h.to_string())
///     .collect();
/// let row = ["E1", "Alice", "2024-03-04", "9.5", "Install"]
///     .iter()
///     .map(|c| Some(c.to_string()))
///     .collect();
/// let table = Table::new("employees", headers, vec![row]);
///
/// let records = parse_employee_records(&table).unwrap();
/// assert_eq!(records[0].hours_worked, Some(Decimal::new(95, 1)));
/// ```
pub fn parse_employee_records(table: &Table) -> PipelineResult<Vec<EmployeeRecord>> {
    let columns = ColumnLookup::new(table);
    let employee_id = columns.index("employee_id")?;
    let name = columns.index("name")?;
    let date = columns.index("date")?;
    let hours_worked = columns.index("hours_worked")?;
    let job = columns.index("job")?;

    (0..table.len())
        .map(|row| {
            Ok(EmployeeRecord {
                employee_id: columns.text(row, employee_id),
                name: columns.text(row, name),
                date: columns.date(row, date)?,
                hours_worked: columns.decimal(row, hours_worked)?,
                job: columns.text(row, job),
            })
        })
        .collect()
}

/// Parses the orders table into [`OrderRecord`]s.
pub fn parse_order_records(table: &Table) -> PipelineResult<Vec<OrderRecord>> {
    let columns = ColumnLookup::new(table);
    let order_id = columns.index("order_id")?;
    let date = columns.index("date")?;
    let customer = columns.index("customer")?;
    let employee_id = columns.index("employee_id")?;
    let job = columns.index("job")?;
    let amount_billed = columns.index("amount_billed")?;

    (0..table.len())
        .map(|row| {
            Ok(OrderRecord {
                order_id: columns.text(row, order_id),
                date: columns.date(row, date)?,
                customer: columns.text(row, customer),
                employee_id: columns.text(row, employee_id),
                job: columns.text(row, job),
                amount_billed: columns.decimal(row, amount_billed)?,
            })
        })
        .collect()
}

/// Parses a decimal cell, accepting plain and scientific notation.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Typed cell access for one table, with errors that name the location.
struct ColumnLookup<'a> {
    table: &'a Table,
}

impl<'a> ColumnLookup<'a> {
    fn new(table: &'a Table) -> Self {
        Self { table }
    }

    fn index(&self, column: &'static str) -> PipelineResult<(usize, &'static str)> {
        self.table
            .column_index(column)
            .map(|i| (i, column))
            .ok_or_else(|| PipelineError::Schema {
                table: self.table.name().to_string(),
                missing: vec![column.to_string()],
            })
    }

    fn text(&self, row: usize, (index, _): (usize, &'static str)) -> Option<String> {
        self.table.cell(row, index).map(str::to_string)
    }

    fn decimal(
        &self,
        row: usize,
        (index, column): (usize, &'static str),
    ) -> PipelineResult<Option<Decimal>> {
        match self.table.cell(row, index) {
            None => Ok(None),
            Some(value) => parse_decimal(value)
                .map(Some)
                .ok_or_else(|| self.parse_error(row, column, value)),
        }
    }

    fn date(
        &self,
        row: usize,
        (index, column): (usize, &'static str),
    ) -> PipelineResult<Option<NaiveDate>> {
        match self.table.cell(row, index) {
            None => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Some)
                .map_err(|_| self.parse_error(row, column, value)),
        }
    }

    fn parse_error(&self, row: usize, column: &str, value: &str) -> PipelineError {
        PipelineError::Parse {
            table: self.table.name().to_string(),
            row: row + 1,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table(name: &str, headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            name,
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|c| {
                            if c.is_empty() {
                                None
                            } else {
                                Some(c.to_string())
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }

    const EMPLOYEE_HEADERS: &[&str] = &["employee_id", "name", "date", "hours_worked", "job"];
    const ORDER_HEADERS: &[&str] = &[
        "order_id",
        "date",
        "customer",
        "employee_id",
        "job",
        "amount_billed",
    ];

    #[test]
    fn test_parse_employee_records() {
        let t = table(
            "employees",
            EMPLOYEE_HEADERS,
            &[
                &["E1", "Alice", "2024-03-04", "10", "Install"],
                &["E2", "Bob", "2024-03-04", "8.0", "Repair"],
            ],
        );

        let records = parse_employee_records(&t).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id.as_deref(), Some("E1"));
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(records[0].hours_worked, Some(dec("10")));
        assert_eq!(records[1].hours_worked, Some(dec("8.0")));
        assert_eq!(records[1].job.as_deref(), Some("Repair"));
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let t = table(
            "employees",
            &["job", "hours_worked", "date", "name", "employee_id"],
            &[&["Install", "7.25", "2024-03-04", "Alice", "E1"]],
        );

        let records = parse_employee_records(&t).unwrap();
        assert_eq!(records[0].employee_id.as_deref(), Some("E1"));
        assert_eq!(records[0].hours_worked, Some(dec("7.25")));
    }

    #[test]
    fn test_null_cells_become_none() {
        let t = table(
            "employees",
            EMPLOYEE_HEADERS,
            &[&["E1", "", "", "", "Install"]],
        );

        let records = parse_employee_records(&t).unwrap();
        assert_eq!(records[0].name, None);
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].hours_worked, None);
    }

    #[test]
    fn test_non_numeric_hours_is_parse_error() {
        let t = table(
            "employees",
            EMPLOYEE_HEADERS,
            &[
                &["E1", "Alice", "2024-03-04", "8", "Install"],
                &["E2", "Bob", "2024-03-04", "eight", "Install"],
            ],
        );

        match parse_employee_records(&t) {
            Err(PipelineError::Parse {
                table,
                row,
                column,
                value,
            }) => {
                assert_eq!(table, "employees");
                assert_eq!(row, 2);
                assert_eq!(column, "hours_worked");
                assert_eq!(value, "eight");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let t = table(
            "orders",
            ORDER_HEADERS,
            &[&["O1", "04/03/2024", "Acme", "E1", "Install", "100"]],
        );

        match parse_order_records(&t) {
            Err(PipelineError::Parse { column, .. }) => assert_eq!(column, "date"),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_order_records() {
        let t = table(
            "orders",
            ORDER_HEADERS,
            &[
                &["O1", "2024-03-04", "Acme", "E1", "Install", "100"],
                &["O2", "2024-03-05", "Beta", "E1", "Repair", "49.99"],
            ],
        );

        let records = parse_order_records(&t).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].customer.as_deref(), Some("Beta"));
        assert_eq!(records[1].amount_billed, Some(dec("49.99")));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let t = table("orders", &["order_id"], &[&["O1"]]);

        match parse_order_records(&t) {
            Err(PipelineError::Schema { table, missing }) => {
                assert_eq!(table, "orders");
                assert_eq!(missing, vec!["date"]);
            }
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_decimal_accepts_scientific_notation() {
        assert_eq!(parse_decimal("1e2"), Some(dec("100")));
        assert_eq!(parse_decimal("12.5"), Some(dec("12.5")));
        assert_eq!(parse_decimal("abc"), None);
    }
}
