//! Static results table
//!
//! An immutable key -> entry mapping loaded once at startup. A lookup miss
//! is not an error: the table owns a reserved "Unknown" fallback row and
//! `get` always returns something renderable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Embedded production results table
const RESULTS_JSON: &str = include_str!("../data/results.json");

/// Descriptive content for one personality key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub most_compatible: Vec<String>,
    #[serde(default)]
    pub least_compatible: Vec<String>,
}

impl ResultEntry {
    /// The reserved fallback row for keys with no table entry
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            summary: "No summary available.".to_string(),
            traits: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            most_compatible: Vec::new(),
            least_compatible: Vec::new(),
        }
    }
}

/// Immutable personality-key -> content mapping
#[derive(Debug, Clone)]
pub struct ResultsTable {
    entries: HashMap<String, ResultEntry>,
    fallback: ResultEntry,
}

impl ResultsTable {
    /// Load the embedded results table
    pub fn load() -> Result<Self, QuizError> {
        let table = Self::from_json(RESULTS_JSON)?;
        log::info!("Loaded {} result entries", table.len());
        Ok(table)
    }

    /// Parse a table from a JSON object keyed by personality key
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let entries: HashMap<String, ResultEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn new(entries: HashMap<String, ResultEntry>) -> Self {
        Self {
            entries,
            fallback: ResultEntry::unknown(),
        }
    }

    /// Entry for `key`, or the reserved fallback on a miss
    pub fn get(&self, key: &str) -> &ResultEntry {
        self.entries.get(key).unwrap_or(&self.fallback)
    }

    /// Whether `key` has a real (non-fallback) row
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
