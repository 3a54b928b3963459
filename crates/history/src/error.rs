//! Error types raised by history repositories.

use thiserror::Error;

/// Errors surfaced by history repositories.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, HistoryError>;
