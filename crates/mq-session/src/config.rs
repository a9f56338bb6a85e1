//! Configuration for a session.

use std::path::PathBuf;

use mq_core::ROUND_SECONDS;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path of the question file.
    pub questions: PathBuf,
    /// Directory holding the snapshot and leaderboard files.
    pub data_dir: PathBuf,
    /// RNG seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Seconds on the clock per round.
    pub round_seconds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from("questions.json"),
            data_dir: PathBuf::from("."),
            seed: None,
            round_seconds: ROUND_SECONDS,
        }
    }
}

impl SessionConfig {
    /// Set the question file path.
    pub fn with_questions(mut self, path: impl Into<PathBuf>) -> Self {
        self.questions = path.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-round clock (minimum 1 second).
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds.max(1);
        self
    }
}
