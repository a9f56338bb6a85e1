//! Interactive session driver for Milliomos.
//!
//! `Session` owns the game state, the question bank, the leaderboard, and
//! both stores, and turns lines of player input into display text. The
//! countdown timer is driven externally: whatever owns the session calls
//! [`Session::tick`] once per second while a round is live.

pub mod config;
pub mod countdown;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use countdown::{Countdown, Tick};
pub use error::{SessionError, SessionResult};
pub use session::{Mode, Session};
