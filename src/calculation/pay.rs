//! Per-record pay calculation.
//!
//! This module splits the hours of one employee-day into ordinary and
//! overtime portions and prices them.
//!
//! ## Rate Structure
//!
//! - Hours up to and including the threshold (8 by default) are paid at
//!   the base rate.
//! - Hours beyond the threshold are paid at base rate × overtime multiplier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayRules;
use crate::error::{PipelineError, PipelineResult};
use crate::input::EMPLOYEES_TABLE;
use crate::models::EmployeeRecord;

/// The priced hours of one record.
///
/// `pay` is always `ordinary_pay + overtime_pay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the base rate.
    pub ordinary_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// `ordinary_hours × base_pay`.
    pub ordinary_pay: Decimal,
    /// `overtime_hours × base_pay × ot_multiplier`.
    pub overtime_pay: Decimal,
    /// Total pay for the record.
    pub pay: Decimal,
}

/// An employee record together with its calculated pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedRecord {
    /// The source record.
    pub record: EmployeeRecord,
    /// Its pay breakdown (all zero when hours are null).
    pub breakdown: PayBreakdown,
}

/// Splits worked hours into `(ordinary, overtime)` around a threshold.
///
/// Hours equal to the threshold are entirely ordinary. Hours below zero
/// are passed through as ordinary hours unchanged.
///
/// # Examples
///
/// ```
/// use payroll_report::calculation::split_overtime;
/// use rust_decimal::Decimal;
///
/// let threshold = Decimal::new(8, 0);
/// assert_eq!(
///     split_overtime(Decimal::new(10, 0), threshold),
///     (Decimal::new(8, 0), Decimal::new(2, 0))
/// );
/// assert_eq!(
///     split_overtime(Decimal::new(8, 0), threshold),
///     (Decimal::new(8, 0), Decimal::ZERO)
/// );
/// ```
pub fn split_overtime(hours: Decimal, threshold: Decimal) -> (Decimal, Decimal) {
    if hours > threshold {
        (threshold, hours - threshold)
    } else {
        (hours, Decimal::ZERO)
    }
}

/// Calculates the pay for one employee-day.
///
/// - `hours ≤ threshold`: `pay = hours × base_pay`
/// - `hours > threshold`: `pay = threshold × base_pay + (hours − threshold) × base_pay × ot_multiplier`
///
/// Returns `None` if any product or sum exceeds the `Decimal` range.
///
/// # Examples
///
/// ## Overtime shift
///
/// ```
/// use payroll_report::calculation::calculate_pay;
/// use payroll_report::config::PayRules;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pay(Decimal::new(10, 0), &PayRules::default()).unwrap();
///
/// assert_eq!(result.ordinary_pay, Decimal::new(160, 0));
/// assert_eq!(result.overtime_pay, Decimal::new(60, 0));
/// assert_eq!(result.pay, Decimal::new(220, 0));
/// ```
///
/// ## Exactly at the threshold
///
/// ```
/// use payroll_report::calculation::calculate_pay;
/// use payroll_report::config::PayRules;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pay(Decimal::new(8, 0), &PayRules::default()).unwrap();
///
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// assert_eq!(result.pay, Decimal::new(160, 0));
/// ```
pub fn calculate_pay(hours: Decimal, rules: &PayRules) -> Option<PayBreakdown> {
    let (ordinary_hours, overtime_hours) = split_overtime(hours, rules.overtime_threshold_hours);

    let ordinary_pay = ordinary_hours.checked_mul(rules.base_pay)?;
    let overtime_pay = overtime_hours
        .checked_mul(rules.base_pay)?
        .checked_mul(rules.ot_multiplier)?;

    Some(PayBreakdown {
        ordinary_hours,
        overtime_hours,
        ordinary_pay,
        overtime_pay,
        pay: ordinary_pay.checked_add(overtime_pay)?,
    })
}

/// Prices every record, preserving input order.
///
/// A record with null hours gets an all-zero breakdown.
///
/// # Returns
///
/// Returns `Overflow` naming the first record whose pay exceeds the
/// `Decimal` range.
pub fn price_records(
    records: &[EmployeeRecord],
    rules: &PayRules,
) -> PipelineResult<Vec<PricedRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let breakdown = match record.hours_worked {
                Some(hours) => {
                    calculate_pay(hours, rules).ok_or_else(|| PipelineError::Overflow {
                        table: EMPLOYEES_TABLE.to_string(),
                        row: i + 1,
                        column: "pay".to_string(),
                    })?
                }
                None => PayBreakdown::default(),
            };
            Ok(PricedRecord {
                record: record.clone(),
                breakdown,
            })
        })
        .collect()
}
