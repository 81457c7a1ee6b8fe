//! Payroll and billing report generator.
//!
//! This crate reads employee hours and customer orders from CSV files,
//! prices each work-day with a base-rate-plus-overtime rule, summarizes pay
//! per employee and billing per employee and customer, left-joins the two
//! summaries and writes the results as console tables, CSV and XLSX files
//! and a PNG bar chart.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod report;
