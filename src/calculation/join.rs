//! Left join of payroll totals onto billing totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{BillingSummary, EmployeeSummary, PayrollSummary};

/// Joins payroll rows to billing rows on `employee_id`.
///
/// Every payroll row appears in the output. A payroll row with several
/// matching billing rows (one per customer) fans out to one output row per
/// match, each repeating the same payroll totals. A payroll row with no
/// match yields one row with `customer` and `amount_billed` set to `None`.
///
/// Output order follows the payroll rows, then the billing rows within
/// each employee.
///
/// # Example
///
/// ```
/// use payroll_report::calculation::left_join;
/// use payroll_report::models::{BillingSummary, PayrollSummary};
/// use rust_decimal::Decimal;
///
/// let payroll = vec![PayrollSummary {
///     employee_id: "E1".to_string(),
///     name: "Alice".to_string(),
///     hours_worked: Decimal::new(10, 0),
///     pay: Decimal::new(220, 0),
/// }];
/// let billing = vec![
///     BillingSummary {
///         employee_id: "E1".to_string(),
///         customer: "Acme".to_string(),
///         amount_billed: Decimal::new(100, 0),
///     },
///     BillingSummary {
///         employee_id: "E1".to_string(),
///         customer: "Beta".to_string(),
///         amount_billed: Decimal::new(50, 0),
///     },
/// ];
///
/// let joined = left_join(&payroll, &billing);
/// assert_eq!(joined.len(), 2);
/// assert_eq!(joined[0].pay, joined[1].pay);
/// assert_eq!(joined[1].customer.as_deref(), Some("Beta"));
/// ```
pub fn left_join(payroll: &[PayrollSummary], billing: &[BillingSummary]) -> Vec<EmployeeSummary> {
    let mut by_employee: HashMap<&str, Vec<&BillingSummary>> = HashMap::new();
    for row in billing {
        by_employee
            .entry(row.employee_id.as_str())
            .or_default()
            .push(row);
    }

    let mut joined = Vec::with_capacity(payroll.len().max(billing.len()));
    for pay_row in payroll {
        match by_employee.get(pay_row.employee_id.as_str()) {
            Some(matches) => {
                for bill_row in matches {
                    joined.push(summary_row(
                        pay_row,
                        Some(bill_row.customer.clone()),
                        Some(bill_row.amount_billed),
                    ));
                }
            }
            None => joined.push(summary_row(pay_row, None, None)),
        }
    }

    joined
}

fn summary_row(
    pay_row: &PayrollSummary,
    customer: Option<String>,
    amount_billed: Option<Decimal>,
) -> EmployeeSummary {
    EmployeeSummary {
        employee_id: pay_row.employee_id.clone(),
        name: pay_row.name.clone(),
        hours_worked: pay_row.hours_worked,
        pay: pay_row.pay,
        customer,
        amount_billed,
    }
}
