use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use payroll_report::config::{ConfigLoader, ConfigOverrides, PipelineConfig};
use payroll_report::error::PipelineResult;
use payroll_report::pipeline;

/// Summarize employee pay and customer billing from CSV inputs
#[derive(Parser, Debug)]
#[command(name = "payroll-report", version)]
#[command(about = "Compute payroll and billing summaries from employee hours and orders", long_about = None)]
struct Cli {
    /// Employee hours CSV (default: employees.csv)
    #[arg(long, value_name = "PATH")]
    employees: Option<PathBuf>,

    /// Customer orders CSV (default: orders.csv)
    #[arg(long, value_name = "PATH")]
    orders: Option<PathBuf>,

    /// Hourly base pay (default: 20)
    #[arg(long = "base-pay", visible_alias = "base_pay", value_name = "AMOUNT")]
    base_pay: Option<Decimal>,

    /// Overtime multiplier applied past 8 hours (default: 1.5)
    #[arg(long = "ot-multiplier", visible_alias = "ot_multiplier", value_name = "FACTOR")]
    ot_multiplier: Option<Decimal>,

    /// Directory for report files (default: current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// YAML configuration file; command-line flags take precedence
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip rendering pay_by_employee.png
    #[arg(long)]
    no_chart: bool,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            employees: self.employees.clone(),
            orders: self.orders.clone(),
            output_dir: self.output_dir.clone(),
            base_pay: self.base_pay,
            ot_multiplier: self.ot_multiplier,
            no_chart: self.no_chart,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG, when set, takes precedence over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("payroll-report started with verbosity level: {}", cli.verbose);

    match build_config(&cli).and_then(|config| pipeline::run(&config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> PipelineResult<PipelineConfig> {
    let base = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => PipelineConfig::default(),
    };
    Ok(cli.overrides().apply(base))
}
