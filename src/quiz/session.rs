//! Driver-owned quiz session state machine
//!
//! `NotStarted -> InProgress -> Completed`, with restart discarding all
//! collected answers from any state. The session is an explicit value owned
//! by whatever drives the quiz (browser bindings, a test harness); nothing
//! here is global or ambient.

use crate::error::QuizError;
use crate::quiz::bank::QuestionBank;
use crate::quiz::resolver::ResultResolver;
use crate::quiz::results::ResultEntry;

/// One quiz attempt, from first answer to resolved result
#[derive(Debug, Clone, Default)]
pub enum QuizSession {
    #[default]
    NotStarted,
    InProgress { answers: Vec<String> },
    Completed { key: String, entry: ResultEntry },
}

impl QuizSession {
    pub fn new() -> Self {
        Self::NotStarted
    }

    /// Append one trait answer.
    ///
    /// Recording from `NotStarted` begins the attempt (the first tap both
    /// starts the quiz and answers question one). Recording after completion
    /// is ignored - the driver has already moved to the results view.
    pub fn record_answer(&mut self, trait_value: &str) {
        match self {
            Self::NotStarted => {
                *self = Self::InProgress {
                    answers: vec![trait_value.to_string()],
                };
            }
            Self::InProgress { answers } => answers.push(trait_value.to_string()),
            Self::Completed { .. } => {
                log::warn!("Answer recorded after completion, ignoring");
            }
        }
    }

    /// Answers collected so far (empty outside `InProgress`)
    pub fn answers(&self) -> &[String] {
        match self {
            Self::InProgress { answers } => answers,
            _ => &[],
        }
    }

    /// Number of questions answered so far
    pub fn answered(&self) -> usize {
        self.answers().len()
    }

    /// Progress as `(answered, total)` for a progress bar
    pub fn progress(&self, bank: &QuestionBank) -> (usize, usize) {
        (self.answered(), bank.count())
    }

    /// Whether one answer has been collected per question in the bank
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.answered() == bank.count()
    }

    /// Resolve the collected answers and transition to `Completed`.
    ///
    /// Completeness is the driver's call (`is_complete`); resolution itself
    /// only rejects an empty sequence. Completing twice is a no-op.
    pub fn complete(&mut self, resolver: &ResultResolver) -> Result<(), QuizError> {
        match self {
            Self::NotStarted => Err(QuizError::EmptyAnswerSequence),
            Self::InProgress { answers } => {
                let resolution = resolver.resolve(answers)?;
                *self = Self::Completed {
                    key: resolution.key,
                    entry: resolution.entry.clone(),
                };
                Ok(())
            }
            Self::Completed { .. } => Ok(()),
        }
    }

    /// Resolved result, if the session has completed
    pub fn result(&self) -> Option<(&str, &ResultEntry)> {
        match self {
            Self::Completed { key, entry } => Some((key, entry)),
            _ => None,
        }
    }

    /// Discard the attempt entirely; no partial state survives
    pub fn restart(&mut self) {
        *self = Self::NotStarted;
    }
}
