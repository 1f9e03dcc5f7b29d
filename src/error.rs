//! Error taxonomy for the quiz core
//!
//! Load-time errors abort loading (no partially-validated bank is ever
//! exposed); per-call errors report programmer-contract violations to the
//! caller. A results-table miss is deliberately NOT an error - it is the
//! fallback path in [`crate::quiz::ResultsTable::get`].

use thiserror::Error;

/// Errors surfaced by the quiz core
#[derive(Error, Debug)]
pub enum QuizError {
    /// A question failed structural validation at load time
    #[error("malformed question {id}: {reason}")]
    MalformedQuestion { id: u32, reason: String },

    /// `QuestionBank::at` called with an index outside `[0, count())`
    #[error("question index {index} out of range (bank holds {count})")]
    OutOfRange { index: usize, count: usize },

    /// `resolve` called with no answers
    #[error("cannot resolve an empty answer sequence")]
    EmptyAnswerSequence,

    /// A source table was not valid JSON of the expected shape
    #[error("invalid table data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_question_display() {
        let err = QuizError::MalformedQuestion {
            id: 3,
            reason: "no options".to_string(),
        };
        assert_eq!(err.to_string(), "malformed question 3: no options");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = QuizError::OutOfRange { index: 8, count: 8 };
        assert_eq!(
            err.to_string(),
            "question index 8 out of range (bank holds 8)"
        );
    }
}
