//! Input loading, validation and typed parsing.
//!
//! The three steps run in order: [`load_inputs`] reads both CSV files into
//! raw tables, [`validate_inputs`] checks their schema and data quality,
//! and the `parse_*` functions turn rows into typed records.

mod loader;
mod parse;
mod validator;

pub use loader::{EMPLOYEES_TABLE, ORDERS_TABLE, load_inputs, load_table};
pub use parse::{DATE_FORMAT, parse_decimal, parse_employee_records, parse_order_records};
pub use validator::{ValidationReport, ValidationWarning, check_schema, validate_inputs};
