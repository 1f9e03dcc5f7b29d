//! Trait alphabet and dichotomy pairs
//!
//! The personality key is assembled one symbol per dichotomy, in the fixed
//! order below. The pairs are data, not concatenation logic, so the key
//! layout and the tie-break rule stay visible and swappable without touching
//! the counting code.

use std::collections::HashMap;

/// Number of symbols in a personality key (one per dichotomy)
pub const KEY_LEN: usize = DICHOTOMIES.len();

/// One opposed pair of trait symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dichotomy {
    /// First-listed pole - wins an exact tie
    pub first: char,
    /// Opposing pole
    pub second: char,
}

/// The four dichotomies, in key order
pub const DICHOTOMIES: [Dichotomy; 4] = [
    Dichotomy::new('E', 'I'),
    Dichotomy::new('S', 'N'),
    Dichotomy::new('T', 'F'),
    Dichotomy::new('J', 'P'),
];

impl Dichotomy {
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// Majority vote between the two poles given per-symbol counts.
    ///
    /// An exact tie (including both-zero) selects the first-listed pole.
    /// That asymmetry is a pinned behavior, not an accident: every ambiguous
    /// sequence lands on the same key run after run.
    pub fn pick(&self, counts: &HashMap<char, usize>) -> char {
        let first = counts.get(&self.first).copied().unwrap_or(0);
        let second = counts.get(&self.second).copied().unwrap_or(0);
        if second > first { self.second } else { self.first }
    }

    /// Check whether a symbol belongs to this pair
    pub fn contains(&self, symbol: char) -> bool {
        symbol == self.first || symbol == self.second
    }
}

/// Normalize a raw trait value to its canonical symbol.
///
/// Trait tags arrive as short strings from the answer table (or from a
/// persisted sequence); the canonical form is the first non-whitespace
/// character, uppercased. Returns `None` for blank input so malformed
/// answers are skipped by the counter instead of crashing resolution.
pub fn normalize_trait(raw: &str) -> Option<char> {
    raw.trim().chars().next().map(|c| c.to_ascii_uppercase())
}
