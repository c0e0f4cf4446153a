use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failures of a benchmark run.
///
/// Contract violations, like an inverted quicksort range, are not represented here. They panic at
/// the call site with a [`ContractViolation`] payload.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A sort invocation failed during one trial. Logged, the campaign moves on to the next trial.
    #[error("{algorithm} failed in trial {trial} on {size} elements: {message}")]
    AlgorithmFailure {
        algorithm: String,
        size: usize,
        trial: usize,
        message: String,
    },

    /// A report could not be appended. Logged, the summary is lost.
    #[error("failed to append report to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}

/// Panic payload raised when a caller breaks a precondition of a sort routine or the generator.
///
/// The trial loop lets this payload unwind through it and halt the run, every other panic is
/// recorded as a failed trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    pub message: String,
}

impl ContractViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contract violation: {}", self.message)
    }
}

impl std::error::Error for ContractViolation {}
