//! The top-10 leaderboard of finished games.

use serde::{Deserialize, Serialize};

use crate::prize::Prize;

/// Number of entries the leaderboard keeps.
pub const CAPACITY: usize = 10;

/// One finished game: who played and what they took home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highscore {
    /// Player name ("Anonymous" when none was given).
    pub name: String,
    /// The prize secured.
    pub prize: Prize,
}

impl std::fmt::Display for Highscore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.prize)
    }
}

/// An ordered top-10 ranking by prize, descending.
///
/// Equal prizes keep insertion order. The size never exceeds
/// [`CAPACITY`]; inserting into a full board drops the weakest entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<Highscore>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game.
    ///
    /// Appends, re-sorts descending by prize (stable, so ties keep their
    /// relative insertion order), then truncates to capacity.
    pub fn insert(&mut self, name: impl Into<String>, prize: Prize) {
        self.entries.push(Highscore {
            name: name.into(),
            prize,
        });
        self.entries.sort_by(|a, b| b.prize.cmp(&a.prize));
        self.entries.truncate(CAPACITY);
    }

    /// The first `min(n, len)` entries, best first.
    pub fn top(&self, n: usize) -> &[Highscore] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// All entries, best first.
    pub fn entries(&self) -> &[Highscore] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render as numbered lines, `"1. name prize"` per entry.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {entry}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::prize_for;

    #[test]
    fn insert_keeps_descending_order() {
        let mut board = Leaderboard::new();
        board.insert("low", Prize(1_000));
        board.insert("high", Prize(1_000_000));
        board.insert("mid", Prize(50_000));
        let prizes: Vec<u64> = board.entries().iter().map(|h| h.prize.amount()).collect();
        assert_eq!(prizes, vec![1_000_000, 50_000, 1_000]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.insert("first", Prize(5_000));
        board.insert("second", Prize(5_000));
        board.insert("third", Prize(5_000));
        let names: Vec<&str> = board.entries().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn fifteen_increasing_inserts_keep_ten_best() {
        let mut board = Leaderboard::new();
        for i in 1..=15u64 {
            board.insert(format!("p{i}"), Prize(i * 1_000));
            assert!(board.len() <= CAPACITY);
            // Descending after every insert.
            let prizes: Vec<u64> = board.entries().iter().map(|h| h.prize.amount()).collect();
            let mut sorted = prizes.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(prizes, sorted);
        }
        assert_eq!(board.len(), CAPACITY);
        // The 10 highest survive, not the 10 first inserted.
        assert_eq!(board.entries()[0].prize.amount(), 15_000);
        assert_eq!(board.entries()[9].prize.amount(), 6_000);
    }

    #[test]
    fn weak_insert_into_full_board_is_dropped() {
        let mut board = Leaderboard::new();
        for i in 1..=10u64 {
            board.insert(format!("p{i}"), Prize(i * 10_000));
        }
        board.insert("straggler", Prize(1));
        assert_eq!(board.len(), CAPACITY);
        assert!(board.entries().iter().all(|h| h.name != "straggler"));
    }

    #[test]
    fn top_clamps_to_len() {
        let mut board = Leaderboard::new();
        board.insert("only", Prize(1_000));
        assert_eq!(board.top(5).len(), 1);
        assert_eq!(board.top(0).len(), 0);
    }

    #[test]
    fn render_numbers_entries() {
        let mut board = Leaderboard::new();
        board.insert("Anna", prize_for(12).unwrap());
        board.insert("Bela", prize_for(3).unwrap());
        assert_eq!(board.render(), "1. Anna 10.000.000 Ft\n2. Bela 10.000 Ft");
    }

    #[test]
    fn clear_empties_the_board() {
        let mut board = Leaderboard::new();
        board.insert("x", Prize(1));
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.render(), "");
    }
}
