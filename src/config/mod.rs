//! # Configuration Module
//!
//! This module provides configuration structures for the untangle commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command (batch cycle
//!   detection)
//! - **AdmitConfig**: Configuration for the `admit` command (incremental
//!   edge admission)
//!
//! ## Example
//!
//! ```
//! use untangle::cli::OutputFormat;
//! use untangle::common::ConfigBuilder;
//! use untangle::config::CheckConfig;
//!
//! let config = CheckConfig::builder()
//!     .with_inputs(vec!["deps.txt".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_topo(false)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//! assert!(config.error_on_cycles);
//! ```

pub mod admit;
pub mod check;

pub use admit::AdmitConfig;
pub use check::CheckConfig;
