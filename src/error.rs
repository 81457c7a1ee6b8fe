//! Error types for the payroll report pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every fatal condition that stops a pipeline run. Advisory findings
//! are not errors; see [`crate::input::ValidationWarning`].

use thiserror::Error;

/// The main error type for the payroll report pipeline.
///
/// Every fatal condition maps onto one variant. A run that hits any of them
/// stops and the binary exits non-zero.
///
/// # Example
///
/// ```
/// use payroll_report::error::PipelineError;
///
/// let error = PipelineError::MissingInput {
///     paths: vec!["employees.csv".to_string(), "orders.csv".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing file(s): employees.csv, orders.csv.");
/// ```
#[derive(Debug, Error)]
pub enum PipelineError {
    /// One or both input files do not exist.
    #[error("Missing file(s): {}.", .paths.join(", "))]
    MissingInput {
        /// Every path that was not found, in the order they were checked.
        paths: Vec<String>,
    },

    /// A loaded table lacks one or more required columns.
    #[error("Table '{table}' is missing required column(s): {}", .missing.join(", "))]
    Schema {
        /// The logical name of the table (e.g. "employees").
        table: String,
        /// The missing column names, in required order.
        missing: Vec<String>,
    },

    /// A cell could not be converted to the type its column requires.
    #[error("Table '{table}' row {row}, column '{column}': cannot parse '{value}'")]
    Parse {
        /// The logical name of the table.
        table: String,
        /// The 1-based data row (header excluded).
        row: usize,
        /// The column name.
        column: String,
        /// The offending cell text.
        value: String,
    },

    /// A calculation on a record's values exceeded the decimal range.
    #[error("Table '{table}' row {row}, column '{column}': value out of range")]
    Overflow {
        /// The logical name of the table the record came from.
        table: String,
        /// The 1-based data row of the record.
        row: usize,
        /// The column being computed or summed.
        column: String,
    },

    /// A CSV file could not be read or written.
    #[error("CSV error for '{path}': {message}")]
    Csv {
        /// The file being read or written.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending setting.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A report artifact could not be written.
    #[error("Failed to export '{path}': {message}")]
    Export {
        /// The artifact path.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// The pay chart could not be rendered.
    #[error("Failed to render chart '{path}': {message}")]
    Chart {
        /// The image path.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PipelineError.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_lists_every_path() {
        let error = PipelineError::MissingInput {
            paths: vec!["orders.csv".to_string()],
        };
        assert_eq!(error.to_string(), "Missing file(s): orders.csv.");
    }

    #[test]
    fn test_schema_error_names_table_and_columns() {
        let error = PipelineError::Schema {
            table: "employees".to_string(),
            missing: vec!["hours_worked".to_string(), "job".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Table 'employees' is missing required column(s): hours_worked, job"
        );
    }

    #[test]
    fn test_parse_error_displays_location() {
        let error = PipelineError::Parse {
            table: "employees".to_string(),
            row: 3,
            column: "hours_worked".to_string(),
            value: "eight".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table 'employees' row 3, column 'hours_worked': cannot parse 'eight'"
        );
    }

    #[test]
    fn test_overflow_error_displays_location() {
        let error = PipelineError::Overflow {
            table: "employees".to_string(),
            row: 1,
            column: "pay".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table 'employees' row 1, column 'pay': value out of range"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PipelineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field() {
        let error = PipelineError::InvalidConfig {
            field: "base_pay".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'base_pay': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PipelineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing() -> PipelineResult<()> {
            Err(PipelineError::MissingInput {
                paths: vec!["employees.csv".to_string()],
            })
        }

        fn propagates_error() -> PipelineResult<()> {
            returns_missing()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
