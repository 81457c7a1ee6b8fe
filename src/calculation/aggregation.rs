//! Group-and-sum reductions over priced employee records and orders.
//!
//! Both reductions are stable: output rows appear in the order their group
//! was first seen in the input. Records whose grouping key has a null part
//! are left out of the reduction and counted as skipped.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PipelineError, PipelineResult};
use crate::input::{EMPLOYEES_TABLE, ORDERS_TABLE};
use crate::models::{BillingSummary, OrderRecord, PayrollSummary};

use super::pay::PricedRecord;

/// Counters describing one reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregationStats {
    /// Records offered to the reduction.
    pub input_records: usize,
    /// Distinct groups produced.
    pub groups: usize,
    /// Records left out because part of their key was null.
    pub skipped_records: usize,
}

/// Payroll totals per `(employee_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollAggregation {
    /// One row per group, in first-appearance order.
    pub rows: Vec<PayrollSummary>,
    /// Reduction counters.
    pub stats: AggregationStats,
}

/// Billing totals per `(employee_id, customer)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAggregation {
    /// One row per group, in first-appearance order.
    pub rows: Vec<BillingSummary>,
    /// Reduction counters.
    pub stats: AggregationStats,
}

/// Sums hours and pay per `(employee_id, name)`.
///
/// A null `hours_worked` contributes zero to both sums. A sum that exceeds
/// the `Decimal` range is an `Overflow` error naming the record that
/// pushed it over.
///
/// # Example
///
/// ```
/// use payroll_report::calculation::{price_records, summarize_payroll};
/// use payroll_report::config::PayRules;
/// use payroll_report::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let day = |hours| EmployeeRecord {
///     employee_id: Some("E1".to_string()),
///     name: Some("Alice".to_string()),
///     date: None,
///     hours_worked: Some(Decimal::new(hours, 0)),
///     job: None,
/// };
/// let priced = price_records(&[day(10), day(8)], &PayRules::default())?;
/// let payroll = summarize_payroll(&priced)?;
///
/// assert_eq!(payroll.rows.len(), 1);
/// assert_eq!(payroll.rows[0].hours_worked, Decimal::new(18, 0));
/// assert_eq!(payroll.rows[0].pay, Decimal::new(380, 0));
/// # Ok::<(), payroll_report::error::PipelineError>(())
/// ```
pub fn summarize_payroll(priced: &[PricedRecord]) -> PipelineResult<PayrollAggregation> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<PayrollSummary> = Vec::new();
    let mut skipped_records = 0;

    for (i, item) in priced.iter().enumerate() {
        let Some((employee_id, name)) = item.record.payroll_key() else {
            skipped_records += 1;
            continue;
        };

        let slot = *index.entry((employee_id, name)).or_insert_with(|| {
            rows.push(PayrollSummary {
                employee_id: employee_id.to_string(),
                name: name.to_string(),
                hours_worked: Decimal::ZERO,
                pay: Decimal::ZERO,
            });
            rows.len() - 1
        });

        let row = &mut rows[slot];
        row.hours_worked = checked_sum(
            row.hours_worked,
            item.record.hours_worked.unwrap_or_default(),
            EMPLOYEES_TABLE,
            i,
            "hours_worked",
        )?;
        row.pay = checked_sum(row.pay, item.breakdown.pay, EMPLOYEES_TABLE, i, "pay")?;
    }

    for row in &mut rows {
        row.hours_worked = row.hours_worked.normalize();
        row.pay = row.pay.normalize();
    }

    let stats = AggregationStats {
        input_records: priced.len(),
        groups: rows.len(),
        skipped_records,
    };
    if skipped_records > 0 {
        warn!(
            skipped = skipped_records,
            "Employee records with a null employee_id or name were left out of the payroll summary"
        );
    }

    Ok(PayrollAggregation { rows, stats })
}

/// Sums `amount_billed` per `(employee_id, customer)`.
///
/// A null `amount_billed` contributes zero.
pub fn summarize_billing(orders: &[OrderRecord]) -> PipelineResult<BillingAggregation> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut rows: Vec<BillingSummary> = Vec::new();
    let mut skipped_records = 0;

    for (i, order) in orders.iter().enumerate() {
        let Some((employee_id, customer)) = order.billing_key() else {
            skipped_records += 1;
            continue;
        };

        let slot = *index.entry((employee_id, customer)).or_insert_with(|| {
            rows.push(BillingSummary {
                employee_id: employee_id.to_string(),
                customer: customer.to_string(),
                amount_billed: Decimal::ZERO,
            });
            rows.len() - 1
        });

        rows[slot].amount_billed = checked_sum(
            rows[slot].amount_billed,
            order.amount_billed.unwrap_or_default(),
            ORDERS_TABLE,
            i,
            "amount_billed",
        )?;
    }

    for row in &mut rows {
        row.amount_billed = row.amount_billed.normalize();
    }

    let stats = AggregationStats {
        input_records: orders.len(),
        groups: rows.len(),
        skipped_records,
    };
    if skipped_records > 0 {
        warn!(
            skipped = skipped_records,
            "Orders with a null employee_id or customer were left out of the billing summary"
        );
    }

    Ok(BillingAggregation { rows, stats })
}

fn checked_sum(
    total: Decimal,
    value: Decimal,
    table: &str,
    index: usize,
    column: &str,
) -> PipelineResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| PipelineError::Overflow {
            table: table.to_string(),
            row: index + 1,
            column: column.to_string(),
        })
}
