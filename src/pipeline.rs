//! The end-to-end report run.
//!
//! [`run`] loads, validates and parses both inputs, prices and aggregates
//! the records, joins the summaries, prints the console report and writes
//! every artifact. All fatal checks happen before the first file is
//! written, so a failed run leaves the output directory untouched.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    BillingAggregation, PayrollAggregation, left_join, price_records, summarize_billing,
    summarize_payroll,
};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::input::{
    ValidationWarning, load_inputs, parse_employee_records, parse_order_records, validate_inputs,
};
use crate::models::{EmployeeSummary, PayrollSummary};
use crate::report::{
    EMPLOYEE_SUMMARY_CSV, EMPLOYEE_SUMMARY_XLSX, PAY_CHART_PNG, PAYROLL_SUMMARY_CSV,
    print_reports, render_pay_chart, write_employee_summary_csv, write_employee_summary_xlsx,
    write_payroll_csv,
};

/// Everything one successful run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Identifier of the run, also attached to its log lines.
    pub run_id: Uuid,
    /// Advisory findings from validation.
    pub warnings: Vec<ValidationWarning>,
    /// Payroll totals per employee.
    pub payroll: PayrollAggregation,
    /// Billing totals per employee and customer.
    pub billing: BillingAggregation,
    /// The payroll-to-billing left join.
    pub employee_summary: Vec<EmployeeSummary>,
    /// Paths of the files written, in write order.
    pub artifacts: Vec<PathBuf>,
}

/// Runs the pipeline, printing the console report to stdout.
///
/// # Example
///
/// ```no_run
/// use payroll_report::config::PipelineConfig;
/// use payroll_report::pipeline;
///
/// let outcome = pipeline::run(&PipelineConfig::default())?;
/// println!("{} employee summary rows", outcome.employee_summary.len());
/// # Ok::<(), payroll_report::error::PipelineError>(())
/// ```
pub fn run(config: &PipelineConfig) -> PipelineResult<PipelineOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Runs the pipeline, printing the console report to `out`.
pub fn run_with_output<W: Write>(
    config: &PipelineConfig,
    out: &mut W,
) -> PipelineResult<PipelineOutcome> {
    config.validate()?;

    let run_id = Uuid::new_v4();
    let started = Instant::now();
    info!(
        run_id = %run_id,
        employees = %config.inputs.employees.display(),
        orders = %config.inputs.orders.display(),
        base_pay = %config.pay.base_pay,
        ot_multiplier = %config.pay.ot_multiplier,
        "Starting payroll report run"
    );

    let (employees_table, orders_table) =
        load_inputs(&config.inputs.employees, &config.inputs.orders)?;
    let validation = validate_inputs(&employees_table, &orders_table, &config.validation)?;
    let employees = parse_employee_records(&employees_table)?;
    let orders = parse_order_records(&orders_table)?;
    debug!(
        run_id = %run_id,
        employee_records = employees.len(),
        order_records = orders.len(),
        warnings = validation.warnings.len(),
        "Inputs loaded"
    );

    let priced = price_records(&employees, &config.pay)?;
    let payroll = summarize_payroll(&priced)?;
    let billing = summarize_billing(&orders)?;
    let employee_summary = left_join(&payroll.rows, &billing.rows);
    debug!(
        run_id = %run_id,
        payroll_rows = payroll.rows.len(),
        billing_rows = billing.rows.len(),
        summary_rows = employee_summary.len(),
        "Summaries computed"
    );

    print_reports(out, &payroll.rows, &billing.rows, &employee_summary)
        .map_err(console_error)?;

    let artifacts = write_artifacts(config, &payroll.rows, &employee_summary, out)?;

    info!(
        run_id = %run_id,
        artifacts = artifacts.len(),
        duration_us = started.elapsed().as_micros() as u64,
        "Payroll report run completed"
    );

    Ok(PipelineOutcome {
        run_id,
        warnings: validation.warnings,
        payroll,
        billing,
        employee_summary,
        artifacts,
    })
}

fn write_artifacts<W: Write>(
    config: &PipelineConfig,
    payroll: &[PayrollSummary],
    employee_summary: &[EmployeeSummary],
    out: &mut W,
) -> PipelineResult<Vec<PathBuf>> {
    let dir = &config.output_dir;
    fs::create_dir_all(dir).map_err(|e| PipelineError::Export {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let payroll_csv = dir.join(PAYROLL_SUMMARY_CSV);
    let summary_csv = dir.join(EMPLOYEE_SUMMARY_CSV);
    let summary_xlsx = dir.join(EMPLOYEE_SUMMARY_XLSX);

    write_payroll_csv(&payroll_csv, payroll)?;
    write_employee_summary_csv(&summary_csv, employee_summary)?;
    write_employee_summary_xlsx(&summary_xlsx, employee_summary)?;
    writeln!(
        out,
        "\nReports exported: {}, {}, {}",
        PAYROLL_SUMMARY_CSV, EMPLOYEE_SUMMARY_CSV, EMPLOYEE_SUMMARY_XLSX
    )
    .map_err(console_error)?;

    let mut artifacts = vec![payroll_csv, summary_csv, summary_xlsx];

    if config.chart.enabled {
        let chart = dir.join(PAY_CHART_PNG);
        render_pay_chart(payroll, &chart, &config.chart)?;
        writeln!(out, "Pay chart saved as {}", PAY_CHART_PNG).map_err(console_error)?;
        artifacts.push(chart);
    }

    Ok(artifacts)
}

fn console_error(e: io::Error) -> PipelineError {
    PipelineError::Export {
        path: "<console>".to_string(),
        message: e.to_string(),
    }
}
