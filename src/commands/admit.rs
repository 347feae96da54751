//! Admit command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::AdmitConfig;
use crate::error::UntangleError;

impl FromCommand for AdmitConfig {
    fn from_command(command: Commands) -> Result<Self, UntangleError> {
        match command {
            Commands::Admit {
                common,
                format,
                cycle_display,
                error_on_cycles,
                fail_fast,
            } => AdmitConfig::builder()
                .with_inputs(common.inputs)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_fail_fast(fail_fast)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(UntangleError::ConfigurationError {
                message: "Invalid command type for AdmitConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(AdmitConfig);

/// Execute the admit command for incremental edge admission
pub fn execute_admit_command(command: Commands) -> Result<()> {
    let config = AdmitConfig::from_command(command)
        .wrap_err("Failed to parse admit command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::admit::AdmitExecutor;
    AdmitExecutor::execute(config)
}
