//! Configuration loading and management for the payroll report pipeline.
//!
//! This module provides the run configuration (input paths, output
//! directory, pay rules, validation thresholds, chart settings), a loader
//! for YAML configuration files and the command-line override layer.
//!
//! # Example
//!
//! ```no_run
//! use payroll_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap().into_config();
//! println!("Overtime multiplier: {}", config.pay.ot_multiplier);
//! ```

mod loader;
mod overrides;
mod types;

pub use loader::ConfigLoader;
pub use overrides::ConfigOverrides;
pub use types::{
    ChartOptions, DEFAULT_BASE_PAY, DEFAULT_MAX_DAILY_HOURS, DEFAULT_OT_MULTIPLIER,
    DEFAULT_OVERTIME_THRESHOLD_HOURS, InputPaths, PayRules, PipelineConfig, ValidationRules,
};
