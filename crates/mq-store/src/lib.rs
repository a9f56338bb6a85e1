//! Durable storage for Milliomos: the in-flight game snapshot and the
//! leaderboard.
//!
//! Both stores write plain JSON files. Writes go through a sibling temp
//! file followed by a rename, so an interrupted save leaves the previous
//! file intact. An absent file is a normal condition (no resumable game,
//! empty leaderboard); an unreadable one is a [`StoreError::Corrupt`]
//! that callers recover from by discarding the file.

pub mod error;
pub mod scores;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use scores::ScoreStore;
pub use snapshot::{SavedGame, SnapshotStore};

/// Default file name of the game snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "gamestate.json";

/// Default file name of the leaderboard inside the data directory.
pub const SCORES_FILE: &str = "leaderboard.json";
