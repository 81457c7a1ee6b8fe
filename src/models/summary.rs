//! Summary rows produced by aggregation and joining.
//!
//! Field names double as output column names: these types serialize
//! directly into `payroll_summary.csv` and `employee_summary.csv`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total hours and pay for one `(employee_id, name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub name: String,
    /// Sum of hours worked.
    pub hours_worked: Decimal,
    /// Sum of calculated pay.
    pub pay: Decimal,
}

/// Total billed for one `(employee_id, customer)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The customer billed.
    pub customer: String,
    /// Sum of amounts billed.
    pub amount_billed: Decimal,
}

/// One row of the payroll-to-billing left join.
///
/// `customer` and `amount_billed` are `None` when the employee has no
/// billing rows.
///
/// # Example
///
/// ```
/// use payroll_report::models::EmployeeSummary;
/// use rust_decimal::Decimal;
///
/// let row = EmployeeSummary {
///     employee_id: "E3".to_string(),
///     name: "Carol".to_string(),
///     hours_worked: Decimal::new(6, 0),
///     pay: Decimal::new(120, 0),
///     customer: None,
///     amount_billed: None,
/// };
/// assert!(!row.has_billing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub name: String,
    /// Sum of hours worked.
    pub hours_worked: Decimal,
    /// Sum of calculated pay.
    pub pay: Decimal,
    /// The customer billed, if any.
    pub customer: Option<String>,
    /// Total billed to that customer, if any.
    pub amount_billed: Option<Decimal>,
}

impl EmployeeSummary {
    /// Returns true if this row carries a matched billing row.
    pub fn has_billing(&self) -> bool {
        self.customer.is_some()
    }
}
