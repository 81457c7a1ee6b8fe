//! Core data models for the payroll report pipeline.
//!
//! This module contains the raw table, the typed input records and the
//! summary rows used throughout the pipeline.

mod records;
mod summary;
mod table;

pub use records::{EMPLOYEE_COLUMNS, EmployeeRecord, ORDER_COLUMNS, OrderRecord};
pub use summary::{BillingSummary, EmployeeSummary, PayrollSummary};
pub use table::Table;
