//! Error types for the session driver.

use thiserror::Error;

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Unrecognized player command.
    #[error("unknown command: {0} (type 'help' for the command list)")]
    UnknownCommand(String),

    /// Core game logic error.
    #[error("{0}")]
    Core(#[from] mq_core::CoreError),

    /// Storage error.
    #[error("{0}")]
    Store(#[from] mq_store::StoreError),
}
