//! Error types
//!
//! Infrastructure errors only: terminal setup, logging, I/O. Form
//! validation is not an error condition; it produces
//! [`crate::profile::validate::ValidationErrors`] values that are rendered
//! inline and never propagated.

use thiserror::Error;

/// Coarse error category, used for log fields and exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Io,
    Terminal,
    Logging,
}

/// Top-level error type for crabfolio infrastructure failures.
#[derive(Debug, Error)]
pub enum CrabfolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl CrabfolioError {
    /// The category this error belongs to.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::Io,
            Self::Terminal(_) => ErrorCode::Terminal,
            Self::Logging(_) => ErrorCode::Logging,
        }
    }
}

/// Convenience alias for results carrying [`CrabfolioError`].
pub type Result<T> = std::result::Result<T, CrabfolioError>;
