//! Question bank: ordered, immutable, validated at load
//!
//! The bank is read-only for the life of the process. Structural problems in
//! the source table (no options, blank prompt, duplicate id) fail loading
//! with the offending question id instead of surfacing later as a lookup
//! failure mid-quiz.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Embedded production question table
const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// One selectable answer: display text plus the trait symbol it scores as
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Display text
    pub label: String,
    /// Trait tag consumed only by the resolver
    #[serde(rename = "trait")]
    pub trait_value: String,
}

/// A single quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique, stable identifier
    pub id: u32,
    /// Display prompt
    pub prompt: String,
    /// Options in display order (order carries no scoring weight)
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

/// The ordered, immutable question list
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the embedded question table
    pub fn load() -> Result<Self, QuizError> {
        let bank = Self::from_json(QUESTIONS_JSON)?;
        log::info!("Loaded {} questions", bank.count());
        Ok(bank)
    }

    /// Parse and validate a bank from a JSON array of questions
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Validate an already-parsed question list
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut seen = std::collections::HashSet::new();
        for question in &questions {
            let malformed = |reason: &str| QuizError::MalformedQuestion {
                id: question.id,
                reason: reason.to_string(),
            };
            if !seen.insert(question.id) {
                return Err(malformed("duplicate id"));
            }
            if question.prompt.trim().is_empty() {
                return Err(malformed("empty prompt"));
            }
            if question.options.is_empty() {
                return Err(malformed("no options"));
            }
            if question.options.iter().any(|o| o.trait_value.trim().is_empty()) {
                return Err(malformed("option with blank trait tag"));
            }
        }
        Ok(Self { questions })
    }

    /// Number of questions in the bank
    #[inline]
    pub fn count(&self) -> usize {
        self.questions.len()
    }

    /// Question at `index`, failing with `OutOfRange` outside `[0, count())`
    pub fn at(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    /// Iterate questions in display order
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
