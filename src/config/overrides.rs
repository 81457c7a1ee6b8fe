//! Command-line overrides layered on top of a loaded configuration.

use std::path::PathBuf;

use rust_decimal::Decimal;

use super::types::PipelineConfig;

/// Settings given explicitly on the command line.
///
/// `None` (or `false` for `no_chart`) leaves the underlying setting alone,
/// so the effective precedence is flag, then file, then built-in default.
///
/// # Example
///
/// ```
/// use payroll_report::config::{ConfigOverrides, PipelineConfig};
/// use rust_decimal::Decimal;
///
/// let overrides = ConfigOverrides {
///     base_pay: Some(Decimal::new(25, 0)),
///     ..ConfigOverrides::default()
/// };
/// let config = overrides.apply(PipelineConfig::default());
/// assert_eq!(config.pay.base_pay, Decimal::new(25, 0));
/// assert_eq!(config.pay.ot_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replacement employees file.
    pub employees: Option<PathBuf>,
    /// Replacement orders file.
    pub orders: Option<PathBuf>,
    /// Replacement output directory.
    pub output_dir: Option<PathBuf>,
    /// Replacement base pay.
    pub base_pay: Option<Decimal>,
    /// Replacement overtime multiplier.
    pub ot_multiplier: Option<Decimal>,
    /// Disables the chart when set.
    pub no_chart: bool,
}

impl ConfigOverrides {
    /// Applies every explicit setting to `config`.
    pub fn apply(self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(employees) = self.employees {
            config.inputs.employees = employees;
        }
        if let Some(orders) = self.orders {
            config.inputs.orders = orders;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(base_pay) = self.base_pay {
            config.pay.base_pay = base_pay;
        }
        if let Some(ot_multiplier) = self.ot_multiplier {
            config.pay.ot_multiplier = ot_multiplier;
        }
        if self.no_chart {
            config.chart.enabled = false;
        }
        config
    }
}
