//! The interactive game session.
//!
//! `Session` is the single owner of all mutable game state. It maps each
//! line of player input to a textual response, drives round progression
//! and the lifelines, and orchestrates save/resume against the stores.

use rand::SeedableRng;
use rand::rngs::StdRng;

use mq_core::{
    Answer, AnswerCode, FINAL_ROUND, GameState, Leaderboard, Lifeline, Prize, QuestionBank,
    lifeline, prize_for,
};
use mq_store::{SavedGame, ScoreStore, SnapshotStore};

use crate::config::SessionConfig;
use crate::countdown::{Countdown, Tick};
use crate::error::{SessionError, SessionResult};

/// What the session is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A round is live; input is answers and commands.
    InRound,
    /// The game ended with a prize; the next line is the player's name.
    AwaitingName {
        /// The prize being recorded.
        prize: Prize,
    },
    /// The game is over; only `new`, `scores`, and `quit` do anything.
    Over,
}

/// An interactive Milliomos session.
pub struct Session {
    bank: QuestionBank,
    game: GameState,
    board: Leaderboard,
    snapshots: SnapshotStore,
    scores: ScoreStore,
    rng: StdRng,
    countdown: Countdown,
    mode: Mode,
    eliminated: Vec<AnswerCode>,
    round_seconds: u32,
    resumed: bool,
}

impl Session {
    /// Start a session: load the question bank (fatal on failure), the
    /// leaderboard (absent or corrupt loads as empty), and resume from a
    /// snapshot when one exists.
    ///
    /// A corrupt snapshot is discarded and a fresh game begins; resume
    /// problems never surface as hard failures.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let bank = QuestionBank::load(&config.questions)?;
        let snapshots = SnapshotStore::new(config.data_dir.join(mq_store::SNAPSHOT_FILE));
        let scores = ScoreStore::new(config.data_dir.join(mq_store::SCORES_FILE));
        let board = scores.load().unwrap_or_default();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (mut game, resumed) = match snapshots.load() {
            Ok(Some(saved)) => (saved.into_game(), true),
            Ok(None) => (GameState::begin(&bank, &mut rng), false),
            // Corrupt or unreadable snapshot: discard it and start
            // fresh, never a hard failure.
            Err(_) => {
                let _ = snapshots.clear();
                (GameState::begin(&bank, &mut rng), false)
            }
        };
        if !resumed {
            game.set_time_left(config.round_seconds);
        }

        let mut countdown = Countdown::new();
        countdown.start(game.time_left());

        Ok(Self {
            bank,
            game,
            board,
            snapshots,
            scores,
            rng,
            countdown,
            mode: Mode::InRound,
            eliminated: Vec::new(),
            round_seconds: config.round_seconds,
            resumed,
        })
    }

    /// Whether this session resumed a saved game.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    /// What the session is waiting for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The game state (round, flags, clock).
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The in-memory leaderboard.
    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Seconds left on the round clock.
    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Whether the round clock is running.
    pub fn clock_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Advance the round clock by one second.
    ///
    /// Returns display text when something happened that the player must
    /// see; expiry loses the round exactly as a wrong answer would.
    pub fn tick(&mut self) -> Option<String> {
        match self.countdown.tick() {
            Tick::Idle => None,
            Tick::Running(left) => {
                self.game.set_time_left(left);
                None
            }
            Tick::Expired => {
                self.game.set_time_left(0);
                Some(format!("Time is up!\n{}", self.lose()))
            }
        }
    }

    /// Process one line of player input and return the text to display.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();

        if let Mode::AwaitingName { prize } = self.mode {
            return Ok(self.record_score(trimmed, prize));
        }

        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "a" | "b" | "c" | "d" => {
                let code = AnswerCode::from_char(lower.chars().next().unwrap_or('a'))?;
                Ok(self.answer(code))
            }
            "fifty" | "5050" | "50:50" => Ok(self.use_fifty_fifty()),
            "swap" => Ok(self.use_new_question()),
            "vote" => Ok(self.use_crowd_vote()),
            "status" => Ok(self.status()),
            "scores" => Ok(self.show_scores()),
            "save" => Ok(self.save_game()),
            "new" | "restart" => Ok(self.reset()),
            "help" => Ok(Self::help_text().to_string()),
            "quit" | "q" => Ok(self.quit()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    /// The current question rendered for display, eliminated options
    /// omitted.
    pub fn question_view(&self) -> String {
        let Some(question) = self.game.question() else {
            return "No question is available at this difficulty.".to_string();
        };
        let stake = prize_for(self.game.round())
            .map(|p| p.to_string())
            .unwrap_or_default();
        let mut out = format!(
            "Round {} of {FINAL_ROUND}, playing for {stake}\n\n{}\n",
            self.game.round(),
            question.text
        );
        for code in AnswerCode::ALL {
            if self.eliminated.contains(&code) {
                continue;
            }
            out.push_str(&format!("  {code}) {}\n", question.option(code)));
        }
        out.trim_end().to_string()
    }

    fn answer(&mut self, code: AnswerCode) -> String {
        if self.mode != Mode::InRound || self.game.is_ended() {
            return "The game is over. Type 'new' to play again.".to_string();
        }
        if self.eliminated.contains(&code) {
            return format!("Option {code} was eliminated by the 50:50.");
        }
        let verdict = match self.game.check_answer(code) {
            Ok(v) => v,
            Err(_) => return "No question to answer. Type 'new' to start over.".to_string(),
        };
        match verdict {
            Answer::Correct if self.game.round() >= FINAL_ROUND => self.win(),
            Answer::Correct => self.next_round(),
            Answer::Incorrect => {
                let correct = self
                    .game
                    .question()
                    .map(|q| q.answer.to_string())
                    .unwrap_or_default();
                format!("Wrong! The correct answer was {correct}.\n{}", self.lose())
            }
        }
    }

    fn next_round(&mut self) -> String {
        let cleared = self.game.round();
        if self.game.advance_round(&self.bank, &mut self.rng).is_err() {
            // Unreachable given the checks in answer(), kept as a guard.
            return self.win();
        }
        self.eliminated.clear();

        if self.game.question().is_none() {
            // The pool has no questions at the new difficulty. End the
            // game gracefully with everything secured so far.
            self.countdown.stop();
            self.game.end();
            self.clear_snapshot_quietly();
            let prize = match prize_for(cleared) {
                Ok(p) => p,
                Err(_) => return self.finish_without_score("The question pool is exhausted."),
            };
            self.mode = Mode::AwaitingName { prize };
            return format!(
                "Correct! But the question pool is exhausted at difficulty {}.\n\
                 You take home {prize}. Enter your name:",
                self.game.round()
            );
        }

        self.game.set_time_left(self.round_seconds);
        self.countdown.start(self.round_seconds);
        let secured = prize_for(cleared)
            .map(|p| p.to_string())
            .unwrap_or_default();
        format!("Correct! {secured} secured.\n\n{}", self.question_view())
    }

    fn win(&mut self) -> String {
        self.countdown.stop();
        self.game.end();
        self.clear_snapshot_quietly();
        let prize = match prize_for(FINAL_ROUND) {
            Ok(p) => p,
            Err(_) => return self.finish_without_score("You won!"),
        };
        self.mode = Mode::AwaitingName { prize };
        format!("Correct! You have won the grand prize: {prize}!\nEnter your name:")
    }

    fn lose(&mut self) -> String {
        self.countdown.stop();
        self.game.end();
        self.clear_snapshot_quietly();
        match self.game.secured_prize() {
            // A round-1 loss secures nothing and records no entry.
            None => self.finish_without_score("You leave with nothing."),
            Some(prize) => {
                self.mode = Mode::AwaitingName { prize };
                format!("You take home {prize}. Enter your name:")
            }
        }
    }

    fn finish_without_score(&mut self, message: &str) -> String {
        self.mode = Mode::Over;
        format!("{message}\nType 'new' to play again or 'quit' to exit.")
    }

    fn record_score(&mut self, name: &str, prize: Prize) -> String {
        // Empty or cancelled input falls back to the canonical name.
        let name = if name.is_empty() { "Anonymous" } else { name };
        self.board.insert(name, prize);
        self.mode = Mode::Over;

        let mut out = format!("Recorded: {name} with {prize}\n\n{}", self.show_scores());
        if let Err(e) = self.scores.save(&self.board) {
            out.push_str(&format!("\nwarning: could not save the leaderboard: {e}"));
        }
        out.push_str("\n\nType 'new' to play again or 'quit' to exit.");
        out
    }

    fn use_fifty_fifty(&mut self) -> String {
        if let Some(msg) = self.lifeline_gate(Lifeline::FiftyFifty) {
            return msg;
        }
        let Some(correct) = self.game.question().map(|q| q.answer) else {
            return "No question to use a lifeline on.".to_string();
        };
        self.game.mark_lifeline_used(Lifeline::FiftyFifty);
        let gone = lifeline::fifty_fifty(correct, &mut self.rng);
        self.eliminated.extend_from_slice(&gone);
        format!(
            "50:50: options {} and {} are eliminated.\n\n{}",
            gone[0],
            gone[1],
            self.question_view()
        )
    }

    fn use_new_question(&mut self) -> String {
        if let Some(msg) = self.lifeline_gate(Lifeline::NewQuestion) {
            return msg;
        }
        // The lifeline is spent whether or not a replacement exists.
        self.game.mark_lifeline_used(Lifeline::NewQuestion);
        match lifeline::swap_question(self.game.round(), &self.bank, &mut self.rng) {
            Some(question) => {
                self.game.set_question(question);
                self.eliminated.clear();
                format!("Here is your new question.\n\n{}", self.question_view())
            }
            None => "No replacement question is available; the lifeline is spent.".to_string(),
        }
    }

    fn use_crowd_vote(&mut self) -> String {
        if let Some(msg) = self.lifeline_gate(Lifeline::CrowdVote) {
            return msg;
        }
        let Some(correct) = self.game.question().map(|q| q.answer) else {
            return "No question to use a lifeline on.".to_string();
        };
        self.game.mark_lifeline_used(Lifeline::CrowdVote);
        let spread = lifeline::crowd_vote(correct, &mut self.rng);
        format!("The audience has voted:\n  {spread}")
    }

    fn lifeline_gate(&self, which: Lifeline) -> Option<String> {
        if self.mode != Mode::InRound || self.game.is_ended() {
            return Some("The game is over. Type 'new' to play again.".to_string());
        }
        if self.game.lifelines().is_used(which) {
            return Some(format!("The {which} lifeline has already been used."));
        }
        None
    }

    fn status(&self) -> String {
        let ledger = self.game.lifelines();
        let mark = |used: bool| if used { "spent" } else { "available" };
        let stake = prize_for(self.game.round())
            .map(|p| p.to_string())
            .unwrap_or_default();
        format!(
            "Round: {}/{FINAL_ROUND} (playing for {stake})\n\
             Time left: {}s\n\
             50:50: {}  |  new question: {}  |  audience vote: {}",
            self.game.round(),
            self.game.time_left(),
            mark(ledger.fifty_fifty),
            mark(ledger.new_question),
            mark(ledger.crowd_vote),
        )
    }

    fn show_scores(&self) -> String {
        if self.board.is_empty() {
            "No scores yet.".to_string()
        } else {
            format!("Leaderboard:\n{}", self.board.render())
        }
    }

    fn save_game(&mut self) -> String {
        if self.mode != Mode::InRound || self.game.is_ended() {
            return "Nothing to save; the game is over.".to_string();
        }
        self.game.set_time_left(self.countdown.remaining());
        match self.snapshots.save(&SavedGame::from(&self.game)) {
            Ok(()) => "Game saved.".to_string(),
            // The session keeps running un-persisted.
            Err(e) => format!("warning: could not save the game: {e}"),
        }
    }

    /// Start over: drop any snapshot, then begin a fresh game.
    fn reset(&mut self) -> String {
        self.clear_snapshot_quietly();
        self.game = GameState::begin(&self.bank, &mut self.rng);
        self.game.set_time_left(self.round_seconds);
        self.eliminated.clear();
        self.countdown.start(self.round_seconds);
        self.mode = Mode::InRound;
        format!("New game!\n\n{}", self.question_view())
    }

    fn quit(&mut self) -> String {
        self.countdown.stop();
        if self.mode == Mode::InRound && !self.game.is_ended() {
            let note = self.save_game();
            format!("{note}\nGoodbye!")
        } else {
            "Goodbye!".to_string()
        }
    }

    fn clear_snapshot_quietly(&self) {
        // A leftover snapshot is merely stale; failure to delete it is
        // not worth interrupting the game for.
        let _ = self.snapshots.clear();
    }

    fn help_text() -> &'static str {
        "\
Commands:
  a / b / c / d   Answer the current question
  fifty           Use the 50:50 lifeline
  swap            Use the new-question lifeline
  vote            Use the audience-vote lifeline
  status          Show round, clock, and lifelines
  scores          Show the leaderboard
  save            Save the game to resume later
  new             Start a new game
  quit            Save and exit"
    }
}
