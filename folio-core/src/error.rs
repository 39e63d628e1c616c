//! Error types for the search engine.

use thiserror::Error;

/// Errors that can occur while loading instances or running the search.
#[derive(Error, Debug)]
pub enum SolveError {
    /// Instance validation failed
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// Instance file could not be parsed
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the instance file.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },

    /// The relaxation oracle reported something other than optimal/infeasible
    /// (numerical failure, unboundedness, iteration limit). Never folded into
    /// node infeasibility.
    #[error("Relaxation oracle failed: {0}")]
    Oracle(String),

    /// Underlying I/O failure while reading or writing instance files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type SolveResult<T> = Result<T, SolveError>;
