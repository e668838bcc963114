/// Error types
/// Backend failures are rendered into result text at the bridge,
/// evaluator failures into a calculator log line.

use std::path::PathBuf;
use thiserror::Error;

/// Failures inside the backend runtime (config store, filesystem, console)
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("path is outside the shell root: {}", .0.display())]
    OutsideRoot(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("home directory is not set")]
    NoHomeDirectory,
}

/// Calculator failures; both halt evaluation immediately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Error: division by zero")]
    DivisionByZero,

    #[error("Error: unsupported operation")]
    UnsupportedOperator,
}

pub type ShellResult<T> = Result<T, ShellError>;
