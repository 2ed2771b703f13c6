use fibext_core::FibError;
use thiserror::Error;

/// Errors that can occur while evaluating a command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error(transparent)]
    Fib(#[from] FibError),

    #[error("refusing recursive fibonacci({n}): index exceeds --max-recursive-index {limit}")]
    RecursionLimit { n: u64, limit: u64 },

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
