//! The twelve-step prize ladder.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The last round of a game; winning it wins the top prize.
pub const FINAL_ROUND: u32 = 12;

/// Seconds on the clock at the start of every round.
pub const ROUND_SECONDS: u32 = 30;

/// Prize amounts in forints, indexed by round - 1.
const LADDER: [u64; FINAL_ROUND as usize] = [
    1_000, 5_000, 10_000, 20_000, 50_000, 100_000, 250_000, 500_000, 1_000_000, 2_000_000,
    5_000_000, 10_000_000,
];

/// A prize amount in forints.
///
/// Displays in the traditional show format with dot-separated thousands,
/// e.g. `"10.000.000 Ft"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Prize(pub u64);

impl Prize {
    /// The amount in forints.
    pub fn amount(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Prize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        write!(f, "{out} Ft")
    }
}

/// The prize secured by clearing the given round.
///
/// Rounds outside 1..=12 are a caller error.
pub fn prize_for(round: u32) -> CoreResult<Prize> {
    if round == 0 || round > FINAL_ROUND {
        return Err(CoreError::RoundOutOfRange(round));
    }
    Ok(Prize(LADDER[(round - 1) as usize]))
}
