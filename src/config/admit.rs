//! Admit command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the admit command
///
/// This struct contains all options for incremental edge admission over an
/// ordered edge list.
#[derive(Debug, Clone)]
pub struct AdmitConfig {
    /// Edge list files to read (stdin when empty)
    pub inputs: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any edge was rejected
    pub error_on_cycles: bool,
    /// Stop at the first rejection instead of collecting all of them
    pub fail_fast: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl AdmitConfig {
    pub fn builder() -> AdmitConfigBuilder {
        AdmitConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AdmitConfigBuilder {
    inputs: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    fail_fast: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl AdmitConfigBuilder {
    pub fn new() -> Self {
        Self {
            inputs: None,
            format: None,
            error_on_cycles: None,
            fail_fast: None,
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

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for AdmitConfigBuilder {
    type Config = AdmitConfig;

    fn build(self) -> Result<Self::Config, crate::error::UntangleError> {
        Ok(AdmitConfig {
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
            fail_fast: self.fail_fast.ok_or_else(|| {
                crate::error::UntangleError::ConfigurationError {
                    message: "Missing required field: fail_fast".to_string(),
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
