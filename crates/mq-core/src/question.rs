//! Question records and answer codes.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the four answer options of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerCode {
    /// Option A.
    A,
    /// Option B.
    B,
    /// Option C.
    C,
    /// Option D.
    D,
}

impl AnswerCode {
    /// All four codes in display order.
    pub const ALL: [AnswerCode; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Parse a code from a character, case-insensitively.
    ///
    /// Anything outside `a`..=`d` is rejected; this is the single gate
    /// through which answer codes enter the system, both from the
    /// question file and from player input.
    pub fn from_char(c: char) -> CoreResult<Self> {
        match c.to_ascii_lowercase() {
            'a' => Ok(Self::A),
            'b' => Ok(Self::B),
            'c' => Ok(Self::C),
            'd' => Ok(Self::D),
            other => Err(CoreError::InvalidAnswerCode(other)),
        }
    }

    /// Position of this code in option arrays (A=0 .. D=3).
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl std::fmt::Display for AnswerCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        };
        write!(f, "{letter}")
    }
}

/// An immutable quiz question.
///
/// Built once at load time by the question bank and shared read-only from
/// then on; the snapshot store serializes it as part of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Difficulty level, matching the round number it is asked in.
    pub difficulty: u32,
    /// The question text.
    pub text: String,
    /// The four option texts, indexed by [`AnswerCode::index`].
    pub options: [String; 4],
    /// The correct option.
    pub answer: AnswerCode,
}

impl Question {
    /// The option text for a given code.
    pub fn option(&self, code: AnswerCode) -> &str {
        &self.options[code.index()]
    }
}
