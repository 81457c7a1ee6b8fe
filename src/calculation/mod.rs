//! Calculation logic for the payroll report pipeline.
//!
//! This module contains the per-record pay rule with its overtime split,
//! the stable group-and-sum reductions that build the payroll and billing
//! summaries, and the left join that combines them.

mod aggregation;
mod join;
mod pay;

pub use aggregation::{
    AggregationStats, BillingAggregation, PayrollAggregation, summarize_billing, summarize_payroll,
};
pub use join::left_join;
pub use pay::{PayBreakdown, PricedRecord, calculate_pay, price_records, split_overtime};
