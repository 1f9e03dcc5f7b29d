//! Jelly Quiz - scoring core for the "What jelly are you?" personality quiz
//!
//! Core modules:
//! - `quiz`: Deterministic scoring (question bank, dichotomies, resolver, session)
//! - `storage`: Saved-answer persistence (LocalStorage on web)
//! - `error`: Error taxonomy
//! - `wasm`: Browser driver bindings (wasm32 only)
//!
//! Rendering, routing and animation live entirely in the presentation layer;
//! this crate only hands it questions and takes back trait letters.

pub mod error;
pub mod quiz;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::QuizError;
pub use quiz::{
    AnswerOption, Dichotomy, Question, QuestionBank, Resolution, ResultEntry, ResultResolver,
    ResultsTable, QuizSession, DICHOTOMIES,
};
pub use storage::SavedAnswers;
