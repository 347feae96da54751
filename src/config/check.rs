//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for batch cycle detection over a
/// complete edge list.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Edge list files to read (stdin when empty)
    pub inputs: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Print a topological order when the graph is acyclic
    pub topo: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    inputs: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    topo: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            inputs: None,
            format: None,
            error_on_cycles: None,
            topo: None,
            max_cycles: None,
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_topo(mut self, topo: bool) -> Self {
        self.topo = Some(topo);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::UntangleError> {
        Ok(CheckConfig {
            inputs: self.inputs.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: inputs".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
            topo: self.topo.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: topo".to_string(),
                }
            })?,
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_with_all_fields() {
        let config = CheckConfig::builder()
            .with_inputs(vec![PathBuf::from("deps.txt")])
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(true)
            .with_topo(false)
            .with_max_cycles(Some(5))
            .build()
            .unwrap();

        assert_eq!(config.inputs, vec![PathBuf::from("deps.txt")]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.error_on_cycles);
        assert!(!config.topo);
        assert_eq!(config.max_cycles, Some(5));
    }

    #[test]
    fn test_builder_missing_field_fails() {
        let result = CheckConfig::builder()
            .with_inputs(vec![])
            .with_format(OutputFormat::Human)
            .build();

        match result {
            Err(crate::error::UntangleError::ConfigurationError { message }) => {
                assert!(message.contains("error_on_cycles"));
            }
            _ => panic!("expected ConfigurationError"),
        }
    }
}
