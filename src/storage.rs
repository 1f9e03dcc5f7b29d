//! Saved answer sequence
//!
//! The most recently completed AnswerSequence, persisted to LocalStorage so
//! a results view survives a reload. The scoring core never reads or writes
//! this - only the driver does, as a single read at session start and a
//! clear when a new quiz begins.

use serde::{Deserialize, Serialize};

/// A completed answer sequence, as persisted
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SavedAnswers {
    pub answers: Vec<String>,
}

impl SavedAnswers {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "jelly_quiz_answers";

    pub fn new(answers: Vec<String>) -> Self {
        Self { answers }
    }

    /// Load the saved sequence from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;

        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str::<SavedAnswers>(&json) {
            Ok(saved) => {
                log::info!("Loaded saved quiz ({} answers)", saved.answers.len());
                Some(saved)
            }
            Err(e) => {
                log::warn!("Discarding unreadable saved quiz: {e}");
                None
            }
        }
    }

    /// Save the sequence to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Quiz saved ({} answers)", self.answers.len());
            }
        }
    }

    /// Remove any saved sequence (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(Self::STORAGE_KEY);
            log::info!("Saved quiz cleared");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Option<Self> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear() {
        // No-op for native
    }
}
