//! Command implementations for the untangle CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: batch cycle detection over the whole graph
//! - admit: incremental edge admission with per-edge rejection

pub mod admit;
pub mod check;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Admit { .. } => admit::execute_admit_command(command),
    }
}
