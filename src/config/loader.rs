//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a pipeline
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

use super::types::PipelineConfig;

/// Loads and provides access to a pipeline configuration file.
///
/// Every section of the file is optional; omitted settings keep their
/// defaults.
///
/// # File Format
///
/// ```text
/// inputs:
///   employees: data/employees.csv
///   orders: data/orders.csv
/// output_dir: reports
/// pay:
///   base_pay: "22.50"
///   ot_multiplier: "1.5"
///   overtime_threshold_hours: "8"
/// validation:
///   max_daily_hours: "16"
/// chart:
///   enabled: true
///   font_paths:
///     - /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./payroll.yaml").unwrap();
/// println!("Base pay: {}", loader.config().pay.base_pay);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PipelineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for [`PipelineConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PipelineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|message| PipelineError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    fn from_yaml_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self {
                config: PipelineConfig::default(),
            });
        }

        let config: PipelineConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PipelineConfig {
        self.config
    }
}
