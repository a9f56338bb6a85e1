//! Persisting the leaderboard.

use std::path::{Path, PathBuf};

use mq_core::Leaderboard;

use crate::error::StoreResult;
use crate::snapshot::{read_json, remove_if_present, write_json};

/// File-backed storage for the leaderboard.
///
/// Kept separate from the game snapshot: clearing one never touches the
/// other.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// A store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the leaderboard, replacing any previous file.
    pub fn save(&self, board: &Leaderboard) -> StoreResult<()> {
        write_json(&self.path, board)
    }

    /// Load the stored leaderboard.
    ///
    /// An absent file is an empty leaderboard, not an error.
    pub fn load(&self) -> StoreResult<Leaderboard> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Delete the stored leaderboard. Idempotent.
    pub fn clear(&self) -> StoreResult<()> {
        remove_if_present(&self.path)
    }
}
