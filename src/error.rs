//! Unified application error type.

use crate::port::PortError;
use thiserror::Error;

/// Top-level error for the terminal. Everything funnels into one of these so
/// `main` can print a single diagnostic before pausing for a key press.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Port(#[from] PortError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
