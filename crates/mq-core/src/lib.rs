//! Core game logic for Milliomos, a "Who Wants to Be a Millionaire" style
//! quiz.
//!
//! Provides the question bank, the twelve-round prize ladder, the game
//! state machine, the three single-use lifelines, and the top-10
//! leaderboard. No I/O beyond loading the question file; persistence and
//! presentation live in separate crates.

pub mod bank;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod lifeline;
pub mod prize;
pub mod question;

pub use bank::QuestionBank;
pub use error::{CoreError, CoreResult};
pub use game::{Answer, GameState, LifelineLedger};
pub use leaderboard::{Highscore, Leaderboard};
pub use lifeline::{Lifeline, VoteSpread};
pub use prize::{FINAL_ROUND, Prize, ROUND_SECONDS, prize_for};
pub use question::{AnswerCode, Question};
