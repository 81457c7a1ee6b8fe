//! Typed input records.
//!
//! This module defines [`EmployeeRecord`] and [`OrderRecord`], the typed
//! forms of a single row of each input table. Every field is optional
//! because null cells are reported as warnings rather than rejected.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Columns the employees table must contain.
pub const EMPLOYEE_COLUMNS: [&str; 5] = ["employee_id", "name", "date", "hours_worked", "job"];

/// Columns the orders table must contain.
pub const ORDER_COLUMNS: [&str; 6] = [
    "order_id",
    "date",
    "customer",
    "employee_id",
    "job",
    "amount_billed",
];

/// Hours logged by one employee on one work-day.
///
/// # Example
///
/// ```
/// use payroll_report::models::EmployeeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     employee_id: Some("E1".to_string()),
///     name: Some("Alice".to_string()),
///     date: NaiveDate::from_ymd_opt(2024, 3, 4),
///     hours_worked: Some(Decimal::new(10, 0)),
///     job: Some("Install".to_string()),
/// };
/// assert_eq!(record.payroll_key(), Some(("E1", "Alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identifier of the employee.
    pub employee_id: Option<String>,
    /// Display name of the employee.
    pub name: Option<String>,
    /// The work-day.
    pub date: Option<NaiveDate>,
    /// Hours worked on that day.
    pub hours_worked: Option<Decimal>,
    /// The job worked on.
    pub job: Option<String>,
}

impl EmployeeRecord {
    /// Returns the `(employee_id, name)` grouping key, or `None` if either
    /// part is null.
    pub fn payroll_key(&self) -> Option<(&str, &str)> {
        Some((self.employee_id.as_deref()?, self.name.as_deref()?))
    }
}

/// One customer order attributed to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Identifier of the order.
    pub order_id: Option<String>,
    /// The order date.
    pub date: Option<NaiveDate>,
    /// The customer billed.
    pub customer: Option<String>,
    /// The employee who performed the work.
    pub employee_id: Option<String>,
    /// The job performed.
    pub job: Option<String>,
    /// The amount billed to the customer.
    pub amount_billed: Option<Decimal>,
}

impl OrderRecord {
    /// Returns the `(employee_id, customer)` grouping key, or `None` if
    /// either part is null.
    pub fn billing_key(&self) -> Option<(&str, &str)> {
        Some((self.employee_id.as_deref()?, self.customer.as_deref()?))
    }
}
