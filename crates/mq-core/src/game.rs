//! The round-by-round game state machine.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::error::{CoreError, CoreResult};
use crate::lifeline::Lifeline;
use crate::prize::{FINAL_ROUND, Prize, ROUND_SECONDS, prize_for};
use crate::question::{AnswerCode, Question};

/// The verdict on a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// The selected option matches the correct answer.
    Correct,
    /// The selected option does not.
    Incorrect,
}

/// Which lifelines have been spent this game.
///
/// Each flag goes false to true at most once per game and only a full
/// reset clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifelineLedger {
    /// The 50:50 lifeline has been used.
    pub fifty_fifty: bool,
    /// The new-question lifeline has been used.
    pub new_question: bool,
    /// The audience-vote lifeline has been used.
    pub crowd_vote: bool,
}

impl LifelineLedger {
    /// Whether a lifeline has already been spent.
    pub fn is_used(&self, lifeline: Lifeline) -> bool {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty,
            Lifeline::NewQuestion => self.new_question,
            Lifeline::CrowdVote => self.crowd_vote,
        }
    }

    /// Spend a lifeline. Idempotent.
    pub fn mark_used(&mut self, lifeline: Lifeline) {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty = true,
            Lifeline::NewQuestion => self.new_question = true,
            Lifeline::CrowdVote => self.crowd_vote = true,
        }
    }
}

/// The live state of a single game.
///
/// Exactly one instance exists per session. The round number only moves
/// forward; a new game replaces the whole value.
#[derive(Debug, Clone)]
pub struct GameState {
    round: u32,
    question: Option<Question>,
    lifelines: LifelineLedger,
    time_left: u32,
    ended: bool,
}

impl GameState {
    /// Start a fresh game: round 1, lifelines unspent, full clock, and a
    /// difficulty-1 question drawn from the bank.
    ///
    /// An exhausted pool leaves the current question unset; callers must
    /// treat that as "no question available" via [`Self::is_exhausted`].
    pub fn begin(bank: &QuestionBank, rng: &mut impl Rng) -> Self {
        Self {
            round: 1,
            question: bank.question_for(1, rng),
            lifelines: LifelineLedger::default(),
            time_left: ROUND_SECONDS,
            ended: false,
        }
    }

    /// Rebuild a state from persisted fields. Used by the snapshot store.
    pub fn restore(
        round: u32,
        question: Option<Question>,
        lifelines: LifelineLedger,
        time_left: u32,
    ) -> Self {
        Self {
            round,
            question,
            lifelines,
            time_left,
            ended: false,
        }
    }

    /// The current round number, 1..=12.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The question being asked, if one could be drawn.
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// The lifeline ledger.
    pub fn lifelines(&self) -> &LifelineLedger {
        &self.lifelines
    }

    /// Spend a lifeline.
    pub fn mark_lifeline_used(&mut self, lifeline: Lifeline) {
        self.lifelines.mark_used(lifeline);
    }

    /// Seconds remaining on the clock.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Set the clock, mirroring timer ticks into the state so snapshots
    /// capture the remaining time.
    pub fn set_time_left(&mut self, seconds: u32) {
        self.time_left = seconds;
    }

    /// Whether the game has been finalized (won or lost).
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Finalize the game. Terminal; only a new game leaves this state.
    pub fn end(&mut self) {
        self.ended = true;
    }

    /// Replace the current question (new-question lifeline).
    pub fn set_question(&mut self, question: Question) {
        self.question = Some(question);
    }

    /// Whether no further round can be played: the final round has been
    /// reached or no question could be drawn.
    pub fn is_exhausted(&self) -> bool {
        self.round >= FINAL_ROUND || self.question.is_none()
    }

    /// Move to the next round: round + 1, clock reset, fresh question.
    ///
    /// Calling this at round 12 or after the game ended is a caller
    /// error; the win condition must be checked first.
    pub fn advance_round(&mut self, bank: &QuestionBank, rng: &mut impl Rng) -> CoreResult<()> {
        if self.ended {
            return Err(CoreError::GameAlreadyOver);
        }
        if self.round >= FINAL_ROUND {
            return Err(CoreError::RoundOutOfRange(self.round + 1));
        }
        self.round += 1;
        self.time_left = ROUND_SECONDS;
        self.question = bank.question_for(self.round, rng);
        Ok(())
    }

    /// Judge a selected option against the current question.
    ///
    /// Pure with respect to the game state; the caller decides whether to
    /// advance, win, or lose on the verdict.
    pub fn check_answer(&self, selected: AnswerCode) -> CoreResult<Answer> {
        let question = self.question.as_ref().ok_or(CoreError::NoQuestion)?;
        if selected == question.answer {
            Ok(Answer::Correct)
        } else {
            Ok(Answer::Incorrect)
        }
    }

    /// The prize already secured if the game is lost right now.
    ///
    /// `None` at round 1 (nothing cleared yet); the previous round's
    /// prize from round 2 on.
    pub fn secured_prize(&self) -> Option<Prize> {
        if self.round <= 1 {
            None
        } else {
            prize_for(self.round - 1).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn question(difficulty: u32, answer: AnswerCode) -> Question {
        Question {
            difficulty,
            text: format!("Question at level {difficulty}?"),
            options: ["w".into(), "x".into(), "y".into(), "z".into()],
            answer,
        }
    }

    fn full_bank() -> QuestionBank {
        QuestionBank::from_questions((1..=12).map(|d| question(d, AnswerCode::A)).collect())
    }

    #[test]
    fn begin_sets_fresh_defaults() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let game = GameState::begin(&bank, &mut rng);
        assert_eq!(game.round(), 1);
        assert_eq!(game.time_left(), ROUND_SECONDS);
        assert!(!game.is_ended());
        assert!(!game.lifelines().is_used(Lifeline::FiftyFifty));
        assert_eq!(game.question().unwrap().difficulty, 1);
    }

    #[test]
    fn begin_with_empty_pool_has_no_question() {
        let bank = QuestionBank::from_questions(Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        let game = GameState::begin(&bank, &mut rng);
        assert!(game.question().is_none());
        assert!(game.is_exhausted());
    }

    #[test]
    fn advancing_n_rounds_lands_on_one_plus_n() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::begin(&bank, &mut rng);
        for n in 1..=11 {
            game.advance_round(&bank, &mut rng).unwrap();
            assert_eq!(game.round(), 1 + n);
            assert_eq!(game.question().unwrap().difficulty, game.round());
            assert_eq!(game.time_left(), ROUND_SECONDS);
        }
    }

    #[test]
    fn round_twelve_is_the_last_reachable() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::begin(&bank, &mut rng);
        for _ in 0..11 {
            game.advance_round(&bank, &mut rng).unwrap();
        }
        assert_eq!(game.round(), 12);
        assert!(game.is_exhausted());
        assert!(matches!(
            game.advance_round(&bank, &mut rng).unwrap_err(),
            CoreError::RoundOutOfRange(13)
        ));
    }

    #[test]
    fn advance_after_end_is_rejected() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::begin(&bank, &mut rng);
        game.end();
        assert!(matches!(
            game.advance_round(&bank, &mut rng).unwrap_err(),
            CoreError::GameAlreadyOver
        ));
    }

    #[test]
    fn check_answer_is_pure() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let game = GameState::begin(&bank, &mut rng);
        assert_eq!(game.check_answer(AnswerCode::A).unwrap(), Answer::Correct);
        assert_eq!(
            game.check_answer(AnswerCode::B).unwrap(),
            Answer::Incorrect
        );
        // Judging twice changes nothing.
        assert_eq!(game.check_answer(AnswerCode::A).unwrap(), Answer::Correct);
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn check_answer_without_question_fails() {
        let bank = QuestionBank::from_questions(Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        let game = GameState::begin(&bank, &mut rng);
        assert!(matches!(
            game.check_answer(AnswerCode::A).unwrap_err(),
            CoreError::NoQuestion
        ));
    }

    #[test]
    fn lifeline_ledger_marks_once() {
        let mut ledger = LifelineLedger::default();
        assert!(!ledger.is_used(Lifeline::CrowdVote));
        ledger.mark_used(Lifeline::CrowdVote);
        assert!(ledger.is_used(Lifeline::CrowdVote));
        // Marking again is harmless.
        ledger.mark_used(Lifeline::CrowdVote);
        assert!(ledger.is_used(Lifeline::CrowdVote));
        assert!(!ledger.is_used(Lifeline::FiftyFifty));
        assert!(!ledger.is_used(Lifeline::NewQuestion));
    }

    #[test]
    fn secured_prize_policy() {
        let bank = full_bank();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::begin(&bank, &mut rng);
        // Round 1 loss secures nothing.
        assert!(game.secured_prize().is_none());
        game.advance_round(&bank, &mut rng).unwrap();
        // Round 2 loss secures round 1's prize.
        assert_eq!(game.secured_prize().unwrap().to_string(), "1.000 Ft");
        for _ in 0..10 {
            game.advance_round(&bank, &mut rng).unwrap();
        }
        // Round 12 loss secures round 11's prize.
        assert_eq!(game.secured_prize().unwrap().to_string(), "5.000.000 Ft");
    }

    #[test]
    fn restore_rebuilds_fields() {
        let mut ledger = LifelineLedger::default();
        ledger.mark_used(Lifeline::FiftyFifty);
        let game = GameState::restore(7, Some(question(7, AnswerCode::C)), ledger, 12);
        assert_eq!(game.round(), 7);
        assert_eq!(game.time_left(), 12);
        assert!(game.lifelines().is_used(Lifeline::FiftyFifty));
        assert!(!game.is_ended());
        assert_eq!(game.question().unwrap().answer, AnswerCode::C);
    }
}
