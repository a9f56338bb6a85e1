//! Saving and restoring the in-flight game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mq_core::{GameState, LifelineLedger, Question};

use crate::error::{StoreError, StoreResult};

/// A point-in-time copy of the fields needed to resume a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Round the player was on.
    pub round: u32,
    /// The question being asked, if one was set.
    pub question: Option<Question>,
    /// Which lifelines had been spent.
    pub lifelines: LifelineLedger,
    /// Seconds that were left on the clock.
    pub time_left: u32,
}

impl From<&GameState> for SavedGame {
    fn from(game: &GameState) -> Self {
        Self {
            round: game.round(),
            question: game.question().cloned(),
            lifelines: *game.lifelines(),
            time_left: game.time_left(),
        }
    }
}

impl SavedGame {
    /// Reconstruct a live game state from this snapshot.
    pub fn into_game(self) -> GameState {
        GameState::restore(self.round, self.question, self.lifelines, self.time_left)
    }
}

/// File-backed storage for at most one [`SavedGame`].
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// A store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot, replacing any previous one.
    ///
    /// The JSON is written to a sibling temp file first and renamed into
    /// place, so a failed write cannot corrupt an existing snapshot.
    pub fn save(&self, saved: &SavedGame) -> StoreResult<()> {
        write_json(&self.path, saved)
    }

    /// Read back the most recent snapshot.
    ///
    /// `None` when no snapshot exists. A present-but-unparsable file is
    /// a [`StoreError::Corrupt`]; the caller discards it and starts
    /// fresh.
    pub fn load(&self) -> StoreResult<Option<SavedGame>> {
        read_json(&self.path)
    }

    /// Delete the snapshot. Deleting a missing snapshot is a no-op.
    pub fn clear(&self) -> StoreResult<()> {
        remove_if_present(&self.path)
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(StoreError::Encode)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> StoreResult<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let value = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

pub(crate) fn remove_if_present(path: &Path) -> StoreResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
