//! Loading and drawing from the question pool.
//!
//! The external question file is a JSON array of records with fields
//! `question`, `a`..`d` (optional, defaulting to empty for formats with
//! fewer than four options), `answer` (first character is the option
//! code), and `difficulty`.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::question::{AnswerCode, Question};

/// A raw record as it appears in the question file.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    #[serde(default)]
    a: String,
    #[serde(default)]
    b: String,
    #[serde(default)]
    c: String,
    #[serde(default)]
    d: String,
    answer: String,
    difficulty: u32,
}

impl QuestionRecord {
    fn into_question(self) -> CoreResult<Question> {
        let code = self
            .answer
            .chars()
            .next()
            .ok_or_else(|| CoreError::MissingAnswer(self.question.clone()))?;
        Ok(Question {
            difficulty: self.difficulty,
            text: self.question,
            options: [self.a, self.b, self.c, self.d],
            answer: AnswerCode::from_char(code)?,
        })
    }
}

/// The pool of questions, grouped by difficulty on demand.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load a question bank from a JSON file.
    ///
    /// Fails if the file is missing, unparsable, or contains a record
    /// with a missing or out-of-domain answer code. A game cannot begin
    /// without a valid pool, so there is no partial-load fallback.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::DataSource {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<QuestionRecord> =
            serde_json::from_str(&content).map_err(|source| CoreError::InvalidQuestionFile {
                path: path.to_path_buf(),
                source,
            })?;
        let questions = records
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self { questions })
    }

    /// Build a bank from already-validated questions (used by tests).
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Draw one question of the given difficulty uniformly at random.
    ///
    /// Returns `None` when the difficulty has no questions. Draws are
    /// independent; repeated calls may return the same question.
    pub fn question_for(&self, difficulty: u32, rng: &mut impl Rng) -> Option<Question> {
        let matches: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect();
        if matches.is_empty() {
            return None;
        }
        Some(matches[rng.random_range(0..matches.len())].clone())
    }

    /// Number of questions in the pool.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Difficulties in 1..=12 that have no questions in the pool.
    ///
    /// A non-empty result means a full game cannot be completed; the CLI
    /// `check` command reports these.
    pub fn missing_difficulties(&self) -> Vec<u32> {
        (1..=crate::prize::FINAL_ROUND)
            .filter(|d| !self.questions.iter().any(|q| q.difficulty == *d))
            .collect()
    }
}
