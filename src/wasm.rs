//! Browser driver bindings
//!
//! Thin wasm-bindgen surface for the presentation layer: question access,
//! answer collection, resolution, restart, and saved-result resume. No DOM
//! or rendering code lives here - the page owns all of that.

use wasm_bindgen::prelude::*;

use crate::error::QuizError;
use crate::quiz::{QuestionBank, QuizSession, ResultResolver};
use crate::storage::SavedAnswers;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Jelly quiz core loaded");
}

fn to_js(err: QuizError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One quiz instance: embedded tables plus the in-progress session
#[wasm_bindgen]
pub struct JellyQuiz {
    bank: QuestionBank,
    resolver: ResultResolver,
    session: QuizSession,
}

#[wasm_bindgen]
impl JellyQuiz {
    /// Load the embedded tables and start an idle session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<JellyQuiz, JsValue> {
        Ok(JellyQuiz {
            bank: QuestionBank::load().map_err(to_js)?,
            resolver: ResultResolver::load().map_err(to_js)?,
            session: QuizSession::new(),
        })
    }

    #[wasm_bindgen(js_name = questionCount)]
    pub fn question_count(&self) -> usize {
        self.bank.count()
    }

    /// Question at `index`, serialized as JSON for the page to render
    #[wasm_bindgen(js_name = questionAt)]
    pub fn question_at(&self, index: usize) -> Result<String, JsValue> {
        let question = self.bank.at(index).map_err(to_js)?;
        serde_json::to_string(question).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of answers collected so far
    pub fn answered(&self) -> usize {
        self.session.answered()
    }

    /// Record the trait value of the option the user picked
    #[wasm_bindgen(js_name = recordAnswer)]
    pub fn record_answer(&mut self, trait_value: &str) {
        self.session.record_answer(trait_value);
    }

    /// Whether every question has been answered
    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete(&self.bank)
    }

    /// Resolve the collected answers, persist them, and return the result
    /// as JSON: `{ "key": ..., "entry": ... }`
    pub fn finish(&mut self) -> Result<String, JsValue> {
        let answers = self.session.answers().to_vec();
        self.session.complete(&self.resolver).map_err(to_js)?;
        if !answers.is_empty() {
            SavedAnswers::new(answers).save();
        }
        self.result_json()
            .ok_or_else(|| JsValue::from_str("session did not complete"))
    }

    /// Restore a previously completed quiz from LocalStorage, if any,
    /// returning the same JSON payload as `finish`
    pub fn resume(&mut self) -> Option<String> {
        let saved = SavedAnswers::load()?;
        if saved.answers.is_empty() {
            return None;
        }
        self.session = QuizSession::InProgress {
            answers: saved.answers,
        };
        self.session.complete(&self.resolver).ok()?;
        self.result_json()
    }

    /// Drop the session and any saved answers, back to a fresh quiz
    pub fn restart(&mut self) {
        self.session.restart();
        SavedAnswers::clear();
        log::info!("Quiz restarted");
    }

    fn result_json(&self) -> Option<String> {
        let (key, entry) = self.session.result()?;
        serde_json::to_string(&serde_json::json!({ "key": key, "entry": entry })).ok()
    }
}
