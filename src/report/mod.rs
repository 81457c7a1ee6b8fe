//! Report output: console tables, file exports and the pay chart.

mod chart;
mod console;
mod export;

pub use chart::{CHART_SIZE, PAY_CHART_PNG, render_pay_chart};
pub use console::{
    ReportTable, billing_table, employee_summary_table, payroll_table, print_reports,
};
pub use export::{
    EMPLOYEE_SUMMARY_CSV, EMPLOYEE_SUMMARY_HEADERS, EMPLOYEE_SUMMARY_XLSX, PAYROLL_SUMMARY_CSV,
    PAYROLL_SUMMARY_HEADERS, write_employee_summary_csv, write_employee_summary_xlsx,
    write_payroll_csv,
};
