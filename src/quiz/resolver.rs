//! Answer-sequence resolution
//!
//! Pure function of the completed answer sequence plus the static results
//! table:
//! - count normalized trait symbols
//! - majority vote per dichotomy, in fixed key order
//! - exact ties go to the first-listed pole
//! - a table miss returns the reserved fallback entry, never an error

use std::collections::HashMap;

use crate::error::QuizError;
use crate::quiz::dichotomy::{normalize_trait, DICHOTOMIES};
use crate::quiz::results::{ResultEntry, ResultsTable};

/// A resolved quiz: the derived key plus its content row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Derived personality key, always returned even on a table miss
    pub key: String,
    /// Matching table row, or the reserved fallback
    pub entry: &'a ResultEntry,
}

/// Turns completed answer sequences into personality results
#[derive(Debug, Clone)]
pub struct ResultResolver {
    table: ResultsTable,
}

impl ResultResolver {
    pub fn new(table: ResultsTable) -> Self {
        Self { table }
    }

    /// Resolver over the embedded results table
    pub fn load() -> Result<Self, QuizError> {
        Ok(Self::new(ResultsTable::load()?))
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    /// Resolve an answer sequence to its personality key and entry.
    ///
    /// Tolerates short or partially malformed sequences (the driver, not the
    /// resolver, enforces quiz completeness); only an empty sequence is an
    /// error, since an all-zero frequency table would tie-break its way to a
    /// valid-looking but meaningless key.
    pub fn resolve(&self, answers: &[String]) -> Result<Resolution<'_>, QuizError> {
        if answers.is_empty() {
            return Err(QuizError::EmptyAnswerSequence);
        }
        let key = personality_key(answers);
        let entry = self.table.get(&key);
        Ok(Resolution { key, entry })
    }
}

/// Derive the personality key from an answer sequence.
///
/// Blank answers are skipped; symbols outside the trait alphabet are counted
/// but belong to no dichotomy, so they never influence the key.
pub fn personality_key(answers: &[String]) -> String {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for answer in answers {
        if let Some(symbol) = normalize_trait(answer) {
            *counts.entry(symbol).or_insert(0) += 1;
        }
    }
    DICHOTOMIES.iter().map(|d| d.pick(&counts)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap as Map;

    fn answers(letters: &[&str]) -> Vec<String> {
        letters.iter().map(|s| s.to_string()).collect()
    }

    fn resolver_with(keys: &[(&str, &str)]) -> ResultResolver {
        let entries: Map<String, ResultEntry> = keys
            .iter()
            .map(|(key, name)| {
                let mut entry = ResultEntry::unknown();
                entry.name = name.to_string();
                (key.to_string(), entry)
            })
            .collect();
        ResultResolver::new(ResultsTable::new(entries))
    }

    #[test]
    fn test_majority_law() {
        assert!(personality_key(&answers(&["E", "E", "E", "I"])).starts_with('E'));
        assert!(personality_key(&answers(&["I", "I", "E"])).starts_with('I'));
        // Majority in one dichotomy is independent of the others
        assert_eq!(
            personality_key(&answers(&["I", "N", "N", "F", "F", "P", "I", "I"])),
            "INFP"
        );
    }

    #[test]
    fn test_tie_break_law() {
        // One of each symbol: every dichotomy ties, first pole wins each
        assert_eq!(
            personality_key(&answers(&["E", "I", "S", "N", "T", "F", "J", "P"])),
            "ESTJ"
        );
    }

    #[test]
    fn test_case_normalization() {
        assert_eq!(
            personality_key(&answers(&["e", "i", "s", "n", "t", "f", "j", "p"])),
            personality_key(&answers(&["E", "I", "S", "N", "T", "F", "J", "P"]))
        );
    }

    #[test]
    fn test_unknown_symbols_do_not_shift_the_key() {
        assert_eq!(
            personality_key(&answers(&["E", "X", "Q", "Z", "N"])),
            personality_key(&answers(&["E", "N"]))
        );
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let resolver = resolver_with(&[]);
        assert!(matches!(
            resolver.resolve(&[]),
            Err(QuizError::EmptyAnswerSequence)
        ));
    }

    #[test]
    fn test_incomplete_sequence_still_resolves() {
        let resolver = resolver_with(&[("ESTJ", "Firm Grape Jelly")]);
        let resolution = resolver.resolve(&answers(&["E"])).unwrap();
        // Single answer: E wins its dichotomy, the rest tie to first poles
        assert_eq!(resolution.key, "ESTJ");
        assert_eq!(resolution.entry.name, "Firm Grape Jelly");
    }

    #[test]
    fn test_fallback_law() {
        let resolver = resolver_with(&[("ESTJ", "Firm Grape Jelly")]);
        let resolution = resolver
            .resolve(&answers(&["I", "I", "N", "N", "F", "F", "P", "P"]))
            .unwrap();
        assert_eq!(resolution.key, "INFP");
        assert_eq!(resolution.entry.name, "Unknown");
        assert!(resolution.entry.strengths.is_empty());
    }

    #[test]
    fn test_end_to_end_against_embedded_tables() {
        use crate::quiz::bank::QuestionBank;

        let bank = QuestionBank::load().unwrap();
        let resolver = ResultResolver::load().unwrap();

        // Walk the bank picking the first-pole option whenever one exists
        let mut picked = Vec::new();
        for index in 0..bank.count() {
            let question = bank.at(index).unwrap();
            let option = question
                .options
                .iter()
                .find(|o| matches!(o.trait_value.as_str(), "E" | "S" | "T" | "J"))
                .unwrap_or(&question.options[0]);
            picked.push(option.trait_value.clone());
        }

        let resolution = resolver.resolve(&picked).unwrap();
        assert_eq!(resolution.key, "ESTJ");
        assert_ne!(resolution.entry.name, "Unknown");
    }

    prop_compose! {
        /// Sequences over the full trait alphabet plus junk symbols
        fn answer_seq()(letters in prop::collection::vec(
            prop::sample::select(vec![
                "E", "I", "S", "N", "T", "F", "J", "P", "e", "p", "x", "",
            ]),
            1..40,
        )) -> Vec<String> {
            letters.into_iter().map(String::from).collect()
        }
    }

    proptest! {
        #[test]
        fn prop_resolve_is_deterministic(seq in answer_seq()) {
            let resolver = resolver_with(&[("ESTJ", "Firm Grape Jelly")]);
            let a = resolver.resolve(&seq).unwrap();
            let b = resolver.resolve(&seq).unwrap();
            prop_assert_eq!(a.key, b.key);
            prop_assert_eq!(a.entry, b.entry);
        }

        #[test]
        fn prop_key_is_well_formed(seq in answer_seq()) {
            let key = personality_key(&seq);
            prop_assert_eq!(key.chars().count(), DICHOTOMIES.len());
            for (symbol, dichotomy) in key.chars().zip(DICHOTOMIES.iter()) {
                prop_assert!(dichotomy.contains(symbol));
            }
        }

        #[test]
        fn prop_strict_majority_wins(extra in 1usize..10, base in 0usize..10) {
            // E strictly outnumbers I -> key starts with E, regardless of noise
            let mut seq = vec!["I".to_string(); base];
            seq.extend(vec!["E".to_string(); base + extra]);
            seq.push("T".to_string());
            prop_assert!(personality_key(&seq).starts_with('E'));
        }
    }
}
