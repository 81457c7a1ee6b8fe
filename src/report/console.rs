//! Plain-text tables for the console report.

use std::fmt;
use std::io::{self, Write};

use crate::models::{BillingSummary, EmployeeSummary, PayrollSummary};

/// A titled table ready to print.
///
/// Numeric columns are right-aligned, text columns left-aligned, and every
/// column is padded to its widest cell.
///
/// # Example
///
/// ```
/// use payroll_report::report::ReportTable;
///
/// let table = ReportTable::new("Totals", &["name", "pay"], &[false, true])
///     .with_row(vec!["Alice".to_string(), "220".to_string()])
///     .with_row(vec!["Bob".to_string(), "80".to_string()]);
///
/// let text = table.to_string();
/// assert!(text.contains("Alice  220"));
/// assert!(text.contains("Bob     80"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    title: String,
    headers: Vec<String>,
    numeric: Vec<bool>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Creates an empty table. `numeric` flags right-aligned columns.
    pub fn new(title: &str, headers: &[&str], numeric: &[bool]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            numeric: numeric.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn with_row(mut self, row: Vec<String>) -> Self {
        self.rows.push(row);
        self
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_line(
        &self,
        f: &mut fmt::Formatter<'_>,
        cells: &[String],
        widths: &[usize],
    ) -> fmt::Result {
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = cells.get(col).map(String::as_str).unwrap_or("");
                if self.numeric.get(col).copied().unwrap_or(false) {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect();
        writeln!(f, "{}", line.join("  ").trim_end())
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        writeln!(f, "{}:", self.title)?;
        self.write_line(f, &self.headers, &widths)?;
        if self.rows.is_empty() {
            return writeln!(f, "(no rows)");
        }
        for row in &self.rows {
            self.write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Builds the payroll summary table.
pub fn payroll_table(rows: &[PayrollSummary]) -> ReportTable {
    rows.iter().fold(
        ReportTable::new(
            "Payroll Summary",
            &["employee_id", "name", "hours_worked", "pay"],
            &[false, false, true, true],
        ),
        |table, row| {
            table.with_row(vec![
                row.employee_id.clone(),
                row.name.clone(),
                row.hours_worked.to_string(),
                row.pay.to_string(),
            ])
        },
    )
}

/// Builds the order billing summary table.
pub fn billing_table(rows: &[BillingSummary]) -> ReportTable {
    rows.iter().fold(
        ReportTable::new(
            "Order Billing Summary",
            &["employee_id", "customer", "amount_billed"],
            &[false, false, true],
        ),
        |table, row| {
            table.with_row(vec![
                row.employee_id.clone(),
                row.customer.clone(),
                row.amount_billed.to_string(),
            ])
        },
    )
}

/// Builds the employee summary table. Missing billing renders as empty cells.
pub fn employee_summary_table(rows: &[EmployeeSummary]) -> ReportTable {
    rows.iter().fold(
        ReportTable::new(
            "Employee Summary",
            &[
                "employee_id",
                "name",
                "hours_worked",
                "pay",
                "customer",
                "amount_billed",
            ],
            &[false, false, true, true, false, true],
        ),
        |table, row| {
            table.with_row(vec![
                row.employee_id.clone(),
                row.name.clone(),
                row.hours_worked.to_string(),
                row.pay.to_string(),
                row.customer.clone().unwrap_or_default(),
                row.amount_billed.map(|a| a.to_string()).unwrap_or_default(),
            ])
        },
    )
}

/// Writes the three summary tables, separated by blank lines.
pub fn print_reports<W: Write>(
    out: &mut W,
    payroll: &[PayrollSummary],
    billing: &[BillingSummary],
    summary: &[EmployeeSummary],
) -> io::Result<()> {
    for table in [
        payroll_table(payroll),
        billing_table(billing),
        employee_summary_table(summary),
    ] {
        writeln!(out)?;
        write!(out, "{}", table)?;
    }
    Ok(())
}
