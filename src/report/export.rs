//! File exports of the summary tables.
//!
//! CSV files are written with the `csv` crate straight from the summary
//! types' serde representation; the spreadsheet uses `rust_xlsxwriter`.
//! Null values are written as empty cells in both formats.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use tracing::info;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{EmployeeSummary, PayrollSummary};

/// File name of the payroll summary CSV.
pub const PAYROLL_SUMMARY_CSV: &str = "payroll_summary.csv";

/// File name of the employee summary CSV.
pub const EMPLOYEE_SUMMARY_CSV: &str = "employee_summary.csv";

/// File name of the employee summary spreadsheet.
pub const EMPLOYEE_SUMMARY_XLSX: &str = "employee_summary.xlsx";

/// Column headers of the payroll summary outputs.
pub const PAYROLL_SUMMARY_HEADERS: [&str; 4] = ["employee_id", "name", "hours_worked", "pay"];

/// Column headers of the employee summary outputs.
pub const EMPLOYEE_SUMMARY_HEADERS: [&str; 6] = [
    "employee_id",
    "name",
    "hours_worked",
    "pay",
    "customer",
    "amount_billed",
];

/// Writes the payroll summary as CSV.
pub fn write_payroll_csv(path: &Path, rows: &[PayrollSummary]) -> PipelineResult<()> {
    write_csv(path, &PAYROLL_SUMMARY_HEADERS, rows)
}

/// Writes the employee summary as CSV.
pub fn write_employee_summary_csv(path: &Path, rows: &[EmployeeSummary]) -> PipelineResult<()> {
    write_csv(path, &EMPLOYEE_SUMMARY_HEADERS, rows)
}

/// Writes rows under an explicit header line.
///
/// The header is written even when there are no rows.
fn write_csv<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> PipelineResult<()> {
    let path_str = path.display().to_string();
    let csv_error = |e: csv::Error| PipelineError::Csv {
        path: path_str.clone(),
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| PipelineError::Csv {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    info!(path = %path_str, rows = rows.len(), "Wrote CSV report");
    Ok(())
}

/// Writes the employee summary as a single-sheet XLSX workbook.
///
/// Hours, pay and amounts are written as numbers so they stay usable in
/// formulas; identifiers and names as text.
pub fn write_employee_summary_xlsx(path: &Path, rows: &[EmployeeSummary]) -> PipelineResult<()> {
    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| PipelineError::Export {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!(path = %path.display(), rows = rows.len(), "Wrote XLSX report");
    Ok(())
}

fn build_workbook(rows: &[EmployeeSummary]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Employee Summary")?;

    for (col, header) in EMPLOYEE_SUMMARY_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, row.employee_id.as_str())?;
        worksheet.write_string(r, 1, row.name.as_str())?;
        worksheet.write_number(r, 2, to_f64(row.hours_worked))?;
        worksheet.write_number(r, 3, to_f64(row.pay))?;
        if let Some(customer) = &row.customer {
            worksheet.write_string(r, 4, customer.as_str())?;
        }
        if let Some(amount) = row.amount_billed {
            worksheet.write_number(r, 5, to_f64(amount))?;
        }
    }

    Ok(workbook)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
