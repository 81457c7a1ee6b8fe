//! Schema and data-quality checks on loaded tables.
//!
//! A missing required column is fatal. Null cells and implausibly long
//! work-days are advisory: they are logged and returned in a
//! [`ValidationReport`], and the run continues.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ValidationRules;
use crate::error::{PipelineError, PipelineResult};
use crate::models::{EMPLOYEE_COLUMNS, ORDER_COLUMNS, Table};

use super::parse::parse_decimal;

/// A non-fatal finding about the input data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// The table contains at least one null cell.
    NullValues {
        /// The logical table name.
        table: String,
        /// Number of null cells in the table.
        cells: usize,
    },
    /// One or more records log more hours than the daily maximum.
    HoursExceedThreshold {
        /// The logical table name.
        table: String,
        /// Number of offending records.
        records: usize,
        /// The configured maximum.
        threshold: Decimal,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::NullValues { table, cells } => {
                write!(f, "Null values detected in {} ({} cell(s)).", table, cells)
            }
            ValidationWarning::HoursExceedThreshold {
                table,
                records,
                threshold,
            } => write!(
                f,
                "{} record(s) in {} logged over {} hours in a day. Check your data.",
                records,
                table,
                threshold.normalize()
            ),
        }
    }
}

/// The advisory findings of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every warning raised, in check order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Returns true if no warning was raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Fails with `Schema` if any required column is absent from the table.
///
/// # Example
///
/// ```
/// use payroll_report::input::check_schema;
/// use payroll_report::models::Table;
///
/// let table = Table::new("orders", vec!["order_id".to_string()], vec![]);
/// let err = check_schema(&table, &["order_id", "customer"]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Table 'orders' is missing required column(s): customer"
/// );
/// ```
pub fn check_schema(table: &Table, required: &[&str]) -> PipelineResult<()> {
    let missing = table.missing_columns(required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Schema {
            table: table.name().to_string(),
            missing,
        })
    }
}

/// Validates both input tables.
///
/// Checks the schema of the employees table, then the orders table, and
/// stops on the first failure. Then runs the advisory checks:
/// - a null-value warning per table that contains null cells
/// - an hours warning if any employee record exceeds `max_daily_hours`
///   (equality does not warn)
pub fn validate_inputs(
    employees: &Table,
    orders: &Table,
    rules: &ValidationRules,
) -> PipelineResult<ValidationReport> {
    check_schema(employees, &EMPLOYEE_COLUMNS)?;
    check_schema(orders, &ORDER_COLUMNS)?;

    let mut report = ValidationReport::default();

    for table in [employees, orders] {
        if let Some(warning) = check_nulls(table) {
            report.warnings.push(warning);
        }
    }

    if let Some(warning) = check_daily_hours(employees, rules.max_daily_hours) {
        report.warnings.push(warning);
    }

    for warning in &report.warnings {
        warn!(warning = %warning, "Input validation warning");
    }

    Ok(report)
}

fn check_nulls(table: &Table) -> Option<ValidationWarning> {
    let cells = table.null_count();
    (cells > 0).then(|| ValidationWarning::NullValues {
        table: table.name().to_string(),
        cells,
    })
}

/// Cells that do not parse are skipped here; typed parsing rejects them.
fn check_daily_hours(employees: &Table, threshold: Decimal) -> Option<ValidationWarning> {
    let column = employees.column_index("hours_worked")?;

    let records = (0..employees.len())
        .filter_map(|row| employees.cell(row, column).and_then(parse_decimal))
        .filter(|hours| *hours > threshold)
        .count();

    (records > 0).then(|| ValidationWarning::HoursExceedThreshold {
        table: employees.name().to_string(),
        records,
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employees(rows: &[[&str; 5]]) -> Table {
        Table::new(
            "employees",
            EMPLOYEE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|c| (!c.is_empty()).then(|| c.to_string()))
                        .collect()
                })
                .collect(),
        )
    }

    fn orders() -> Table {
        Table::new(
            "orders",
            ORDER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                ["O1", "2024-03-04", "Acme", "E1", "Install", "100"]
                    .iter()
                    .map(|c| Some(c.to_string()))
                    .collect(),
            ],
        )
    }

    #[test]
    fn test_clean_inputs_produce_no_warnings() {
        let e = employees(&[["E1", "Alice", "2024-03-04", "8", "Install"]]);
        let report = validate_inputs(&e, &orders(), &ValidationRules::default()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_employee_column_is_fatal() {
        let e = Table::new(
            "employees",
            vec!["employee_id".to_string(), "name".to_string()],
            vec![],
        );

        match validate_inputs(&e, &orders(), &ValidationRules::default()) {
            Err(PipelineError::Schema { table, missing }) => {
                assert_eq!(table, "employees");
                assert_eq!(missing, vec!["date", "hours_worked", "job"]);
            }
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_order_column_is_fatal() {
        let e = employees(&[["E1", "Alice", "2024-03-04", "8", "Install"]]);
        let o = Table::new(
            "orders",
            ["order_id", "date", "customer", "employee_id", "job"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            vec![],
        );

        match validate_inputs(&e, &o, &ValidationRules::default()) {
            Err(PipelineError::Schema { table, missing }) => {
                assert_eq!(table, "orders");
                assert_eq!(missing, vec!["amount_billed"]);
            }
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_cells_warn_but_do_not_fail() {
        let e = employees(&[
            ["E1", "", "2024-03-04", "8", "Install"],
            ["E2", "Bob", "2024-03-04", "", ""],
        ]);

        let report = validate_inputs(&e, &orders(), &ValidationRules::default()).unwrap();
        assert_eq!(
            report.warnings,
            vec![ValidationWarning::NullValues {
                table: "employees".to_string(),
                cells: 3,
            }]
        );
    }

    #[test]
    fn test_hours_over_threshold_warn() {
        let e = employees(&[
            ["E1", "Alice", "2024-03-04", "16.5", "Install"],
            ["E2", "Bob", "2024-03-04", "17", "Install"],
            ["E3", "Carol", "2024-03-04", "8", "Install"],
        ]);

        let report = validate_inputs(&e, &orders(), &ValidationRules::default()).unwrap();
        assert_eq!(
            report.warnings,
            vec![ValidationWarning::HoursExceedThreshold {
                table: "employees".to_string(),
                records: 2,
                threshold: dec("16"),
            }]
        );
    }

    #[test]
    fn test_hours_equal_to_threshold_do_not_warn() {
        let e = employees(&[["E1", "Alice", "2024-03-04", "16", "Install"]]);
        let report = validate_inputs(&e, &orders(), &ValidationRules::default()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_configured_threshold_is_used() {
        let e = employees(&[["E1", "Alice", "2024-03-04", "13", "Install"]]);
        let rules = ValidationRules {
            max_daily_hours: dec("12"),
        };

        let report = validate_inputs(&e, &orders(), &rules).unwrap();
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unparseable_hours_ignored_by_advisory_check() {
        let e = employees(&[["E1", "Alice", "2024-03-04", "lots", "Install"]]);
        let report = validate_inputs(&e, &orders(), &ValidationRules::default()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_warning_display() {
        let warning = ValidationWarning::HoursExceedThreshold {
            table: "employees".to_string(),
            records: 1,
            threshold: dec("16.0"),
        };
        assert_eq!(
            warning.to_string(),
            "1 record(s) in employees logged over 16 hours in a day. Check your data."
        );

        let warning = ValidationWarning::NullValues {
            table: "orders".to_string(),
            cells: 2,
        };
        assert_eq!(
            warning.to_string(),
            "Null values detected in orders (2 cell(s))."
        );
    }
}
