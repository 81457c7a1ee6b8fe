//! Configuration types for a pipeline run.
//!
//! This module contains the strongly-typed configuration structures that
//! drive the pipeline. They deserialize from an optional YAML file and can
//! be overridden field by field from the command line.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{PipelineError, PipelineResult};

/// Default hourly base pay.
pub const DEFAULT_BASE_PAY: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Default overtime multiplier (150%).
pub const DEFAULT_OT_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default number of hours per record paid at the base rate.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default upper bound on hours in a single employee-day before a warning.
pub const DEFAULT_MAX_DAILY_HOURS: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    /// The employee hours file.
    pub employees: PathBuf,
    /// The customer orders file.
    pub orders: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            employees: PathBuf::from("employees.csv"),
            orders: PathBuf::from("orders.csv"),
        }
    }
}

/// The rate rules used to price one employee-day record.
///
/// # Example
///
/// ```
/// use payroll_report::config::PayRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// assert_eq!(rules.base_pay, Decimal::new(20, 0));
/// assert_eq!(rules.ot_multiplier, Decimal::new(15, 1));
/// assert_eq!(rules.overtime_threshold_hours, Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayRules {
    /// Hourly base pay.
    pub base_pay: Decimal,
    /// Multiplier applied to the base pay for overtime hours.
    pub ot_multiplier: Decimal,
    /// Hours per record paid at the base rate before overtime applies.
    pub overtime_threshold_hours: Decimal,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            base_pay: DEFAULT_BASE_PAY,
            ot_multiplier: DEFAULT_OT_MULTIPLIER,
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
        }
    }
}

/// Thresholds for the advisory data checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Records with more hours than this produce a warning.
    pub max_daily_hours: Decimal,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
        }
    }
}

/// Settings for the pay chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Whether to render `pay_by_employee.png` at all.
    pub enabled: bool,
    /// TrueType fonts to try, in order, for titles and labels.
    pub font_paths: Vec<PathBuf>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            font_paths: [
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/Library/Fonts/Arial.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

/// The complete configuration of one pipeline run.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration that reads `employees.csv` and `orders.csv` from the
/// working directory and writes reports next to them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input file locations.
    pub inputs: InputPaths,
    /// Directory the report artifacts are written into.
    pub output_dir: PathBuf,
    /// Pay calculation rules.
    pub pay: PayRules,
    /// Advisory check thresholds.
    pub validation: ValidationRules,
    /// Chart settings.
    pub chart: ChartOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inputs: InputPaths::default(),
            output_dir: PathBuf::from("."),
            pay: PayRules::default(),
            validation: ValidationRules::default(),
            chart: ChartOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Rejects settings that cannot produce meaningful figures.
    pub fn validate(&self) -> PipelineResult<()> {
        let non_negative = [
            ("base_pay", self.pay.base_pay),
            ("ot_multiplier", self.pay.ot_multiplier),
            (
                "overtime_threshold_hours",
                self.pay.overtime_threshold_hours,
            ),
            ("max_daily_hours", self.validation.max_daily_hours),
        ];

        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(PipelineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.inputs.employees, PathBuf::from("employees.csv"));
        assert_eq!(config.inputs.orders, PathBuf::from("orders.csv"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.pay.base_pay, dec("20"));
        assert_eq!(config.pay.ot_multiplier, dec("1.5"));
        assert_eq!(config.pay.overtime_threshold_hours, dec("8"));
        assert_eq!(config.validation.max_daily_hours, dec("16"));
        assert!(config.chart.enabled);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_base_pay_rejected() {
        let mut config = PipelineConfig::default();
        config.pay.base_pay = dec("-1");

        match config.validate() {
            Err(PipelineError::InvalidConfig { field, .. }) => assert_eq!(field, "base_pay"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_multiplier_allowed() {
        let mut config = PipelineConfig::default();
        config.pay.ot_multiplier = Decimal::ZERO;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_max_daily_hours_rejected() {
        let mut config = PipelineConfig::default();
        config.validation.max_daily_hours = dec("-0.5");
        assert!(config.validate().is_err());
    }
}
