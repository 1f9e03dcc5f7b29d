//! Deterministic scoring core
//!
//! All quiz logic lives here. This module must stay pure and deterministic:
//! - No clocks, no randomness
//! - No platform or rendering dependencies
//! - Resolution is a pure function of the answer sequence plus static tables

pub mod bank;
pub mod dichotomy;
pub mod resolver;
pub mod results;
pub mod session;

pub use bank::{AnswerOption, Question, QuestionBank};
pub use dichotomy::{normalize_trait, Dichotomy, DICHOTOMIES, KEY_LEN};
pub use resolver::{personality_key, Resolution, ResultResolver};
pub use results::{ResultEntry, ResultsTable};
pub use session::QuizSession;
