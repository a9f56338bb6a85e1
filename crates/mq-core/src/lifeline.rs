//! The three single-use lifelines.
//!
//! Each lifeline is a pure function over the data it needs (the correct
//! answer, the round, the bank) and returns a description of its effect;
//! whether the lifeline may still be used is tracked by
//! [`crate::game::LifelineLedger`], and enforcing one-use-per-game is the
//! caller's job.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::question::{AnswerCode, Question};

/// One of the three lifelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifeline {
    /// Eliminate two wrong options.
    FiftyFifty,
    /// Swap the current question for a fresh one of the same difficulty.
    NewQuestion,
    /// Ask the (simulated) audience for a vote.
    CrowdVote,
}

impl std::fmt::Display for Lifeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FiftyFifty => "50:50",
            Self::NewQuestion => "new question",
            Self::CrowdVote => "audience vote",
        };
        write!(f, "{name}")
    }
}

/// Pick two of the three wrong options to eliminate, uniformly without
/// replacement. The correct option is never eliminated.
pub fn fifty_fifty(correct: AnswerCode, rng: &mut impl Rng) -> [AnswerCode; 2] {
    let mut wrong: Vec<AnswerCode> = AnswerCode::ALL
        .into_iter()
        .filter(|c| *c != correct)
        .collect();
    let first = wrong.remove(rng.random_range(0..wrong.len()));
    let second = wrong.remove(rng.random_range(0..wrong.len()));
    [first, second]
}

/// Draw a replacement question at the given difficulty.
///
/// `None` means the pool has nothing left to offer and the swap is a
/// no-op. The lifeline is still spent either way; callers mark the
/// ledger before looking at the result.
pub fn swap_question(
    difficulty: u32,
    bank: &QuestionBank,
    rng: &mut impl Rng,
) -> Option<Question> {
    bank.question_for(difficulty, rng)
}

/// A simulated audience vote: percentage per option, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSpread([u32; 4]);

impl VoteSpread {
    /// The percentage voted for a given option.
    pub fn percent(&self, code: AnswerCode) -> u32 {
        self.0[code.index()]
    }

    /// All four percentages, indexed by [`AnswerCode::index`].
    pub fn as_array(&self) -> [u32; 4] {
        self.0
    }
}

impl std::fmt::Display for VoteSpread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = AnswerCode::ALL
            .iter()
            .map(|c| format!("{c}: {}%", self.percent(*c)))
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}

/// Simulate the audience vote for a question with the given correct
/// answer.
///
/// The correct option draws uniformly from 40..=70 percent. The remainder
/// is split over the wrong options: the first two draw uniformly from
/// whatever is still unassigned, the last takes the rest, so the spread
/// always sums to exactly 100.
pub fn crowd_vote(correct: AnswerCode, rng: &mut impl Rng) -> VoteSpread {
    let mut votes = [0u32; 4];
    let correct_share = rng.random_range(40..=70);
    votes[correct.index()] = correct_share;

    let wrong: Vec<AnswerCode> = AnswerCode::ALL
        .into_iter()
        .filter(|c| *c != correct)
        .collect();
    let mut remaining = 100 - correct_share;
    for code in &wrong[..2] {
        let share = rng.random_range(0..=remaining);
        votes[code.index()] = share;
        remaining -= share;
    }
    votes[wrong[2].index()] = remaining;

    VoteSpread(votes)
}
