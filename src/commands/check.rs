//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::UntangleError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, UntangleError> {
        match command {
            Commands::Check {
                common,
                format,
                cycle_display,
                error_on_cycles,
                topo,
            } => CheckConfig::builder()
                .with_inputs(common.inputs)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_topo(topo)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(UntangleError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for batch cycle detection
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use clap::Parser;

    #[test]
    fn test_config_from_check_command() {
        let cli = Cli::try_parse_from([
            "untangle",
            "check",
            "deps.txt",
            "--topo",
            "--format",
            "json",
        ])
        .unwrap();

        let config = CheckConfig::from_command(cli.command).unwrap();
        assert_eq!(config.inputs.len(), 1);
        assert!(config.topo);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_rejects_wrong_command() {
        let cli = Cli::try_parse_from(["untangle", "admit"]).unwrap();
        assert!(CheckConfig::from_command(cli.command).is_err());
    }
}
