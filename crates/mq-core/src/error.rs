//! Error types for the core game logic.

use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in the core game logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The question file could not be read.
    #[error("question file not found or unreadable: {path}")]
    DataSource {
        /// Path of the question file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The question file could not be parsed.
    #[error("malformed question file: {path}: {source}")]
    InvalidQuestionFile {
        /// Path of the question file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A question record carried an empty answer field.
    #[error("question \"{0}\" has an empty answer field")]
    MissingAnswer(String),

    /// An answer code outside 'a'..='d' entered the system.
    #[error("invalid answer code: '{0}'")]
    InvalidAnswerCode(char),

    /// A round number outside 1..=12.
    #[error("round {0} is out of range (1-12)")]
    RoundOutOfRange(u32),

    /// An operation that requires a live round was called after game end.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// An operation that requires a current question found none.
    #[error("no current question")]
    NoQuestion,
}
