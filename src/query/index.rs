//! On-demand lookup index over a radiology database.
//!
//! The linear-scan queries never consult this; callers that issue many
//! lookups against one database can build it once and keep it alongside.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::radiology::RadiologyDatabase;
use crate::domain::RadiologyEntry;

fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"[\p{Alphabetic}\p{Nd}]+").expect("token pattern is valid")
    })
}

/// Split text into lowercased alphanumeric tokens (Unicode letters and digits)
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Id map and inverted token index borrowed from a database
#[derive(Debug)]
pub struct RadiologyIndex<'a> {
    db: &'a RadiologyDatabase,
    by_id: HashMap<&'a str, usize>,
    tokens: HashMap<String, Vec<usize>>,
}

impl<'a> RadiologyIndex<'a> {
    pub fn build(db: &'a RadiologyDatabase) -> Self {
        let mut by_id = HashMap::new();
        let mut tokens: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, entry) in db.entries().iter().enumerate() {
            // First occurrence wins, matching RadiologyDatabase::get
            by_id.entry(entry.id.as_str()).or_insert(pos);

            for text in entry.searchable_text() {
                for token in tokenize(text) {
                    let positions = tokens.entry(token).or_default();
                    if positions.last() != Some(&pos) {
                        positions.push(pos);
                    }
                }
            }
        }

        Self { db, by_id, tokens }
    }

    /// O(1) lookup by exact id
    pub fn get(&self, id: &str) -> Option<&'a RadiologyEntry> {
        self.by_id.get(id).map(|&pos| &self.db.entries()[pos])
    }

    /// Entries containing the whole token in a searchable field, in order.
    ///
    /// The argument is normalized like indexed text; anything that does not
    /// reduce to exactly one token matches nothing.
    pub fn entries_with_token(&self, token: &str) -> Vec<&'a RadiologyEntry> {
        let entries = self.db.entries();
        let mut tokens = tokenize(token);
        if tokens.len() != 1 {
            return Vec::new();
        }
        self.tokens
            .get(&tokens.remove(0))
            .map(|positions| positions.iter().map(|&pos| &entries[pos]).collect())
            .unwrap_or_default()
    }

    /// Number of distinct tokens indexed
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RadiologyCategory, RadiologyEntry};
    use crate::query::radiology_database;

    fn entry(id: &str, name: &str) -> RadiologyEntry {
        RadiologyEntry {
            id: id.to_string(),
            name: name.to_string(),
            category: RadiologyCategory::CtInterpretation,
            description: String::new(),
            technique: String::new(),
            normal_appearance: String::new(),
            abnormal_findings: Vec::new(),
            differential_diagnosis: Vec::new(),
            clinical_correlation: String::new(),
            key_pearls: Vec::new(),
            references: Vec::new(),
        }
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Appendicolith (25-30% of cases)");
        assert_eq!(tokens, vec!["appendicolith", "25", "30", "of", "cases"]);
    }

    #[test]
    fn test_tokenize_keeps_non_ascii_words_whole() {
        assert_eq!(tokenize("Ménétrier disease"), vec!["ménétrier", "disease"]);
        assert_eq!(tokenize("Signe de la DÉCHIRURE"), vec!["signe", "de", "la", "déchirure"]);
    }

    #[test]
    fn test_non_ascii_token_lookup_agrees_with_search() {
        let db = RadiologyDatabase::new(vec![entry("ct-menetrier", "Ménétrier disease")]);
        let index = RadiologyIndex::build(&db);

        assert_eq!(db.search("ménétrier").len(), 1);
        assert_eq!(index.entries_with_token("Ménétrier").len(), 1);
        assert!(index.entries_with_token("trier").is_empty());
        assert!(index.entries_with_token("m").is_empty());
        assert!(index.entries_with_token("ménétrier disease").is_empty());
    }

    #[test]
    fn test_index_get_matches_linear_lookup() {
        let db = radiology_database();
        let index = RadiologyIndex::build(db);

        for entry in db.entries() {
            assert_eq!(index.get(&entry.id), db.get(&entry.id));
        }
        assert!(index.get("nonexistent-id").is_none());
    }

    #[test]
    fn test_whole_token_lookup() {
        let db = radiology_database();
        let index = RadiologyIndex::build(db);

        let hits = index.entries_with_token("Appendicolith");
        assert!(hits.iter().any(|e| e.id == "ct-abdomen-appendicitis"));

        // Tokens are whole words, unlike substring search
        assert!(index.entries_with_token("appendicol").is_empty());
        assert!(index.token_count() > 0);
    }
}
