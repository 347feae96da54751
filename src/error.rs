use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid edge syntax in '{file}'")]
#[diagnostic(
    code(untangle::edge_parse_error),
    help("Expected one edge per line, written as 'source -> target'")
)]
pub struct EdgeParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("cannot parse this line as an edge")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum UntangleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(untangle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    EdgeParseError(Box<EdgeParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(untangle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(untangle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(code(untangle::io_error), help("Check file permissions and disk space"))]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(untangle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
