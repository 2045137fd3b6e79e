//! The radiology reference database and its linear-scan queries.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::content::builtin_radiology;
use crate::domain::{RadiologyCategory, RadiologyEntry};

/// Process-wide builtin database (constructed on first use)
static RADIOLOGY_DB: OnceLock<RadiologyDatabase> = OnceLock::new();

/// Ordered collection of radiology reference cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RadiologyDatabase {
    entries: Vec<RadiologyEntry>,
}

impl RadiologyDatabase {
    /// Wrap entries as-is; order is kept and duplicate ids are allowed
    pub fn new(entries: Vec<RadiologyEntry>) -> Self {
        Self { entries }
    }

    /// All entries in registry order
    pub fn entries(&self) -> &[RadiologyEntry] {
        &self.entries
    }

    /// Search entries by query (case-insensitive substring match)
    ///
    /// Scans name, description, abnormal findings, differential diagnosis,
    /// key pearls and clinical correlation. An empty query matches every
    /// entry.
    pub fn search(&self, query: &str) -> Vec<&RadiologyEntry> {
        let query_lower = query.to_lowercase();

        self.entries
            .iter()
            .filter(|entry| entry.matches_lowercase(&query_lower))
            .collect()
    }

    /// Entries whose category is in `categories`
    pub fn filter_by_category(&self, categories: &[RadiologyCategory]) -> Vec<&RadiologyEntry> {
        self.entries
            .iter()
            .filter(|entry| categories.contains(&entry.category))
            .collect()
    }

    /// Get an entry by ID (first match wins)
    pub fn get(&self, id: &str) -> Option<&RadiologyEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Ids that appear more than once, in order of second appearance
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) && !duplicates.contains(&entry.id.as_str()) {
                duplicates.push(entry.id.as_str());
            }
        }

        duplicates
    }

    /// Entry count per category, in category declaration order
    pub fn category_counts(&self) -> Vec<(RadiologyCategory, usize)> {
        RadiologyCategory::ALL
            .into_iter()
            .map(|category| {
                let count = self.entries.iter().filter(|e| e.category == category).count();
                (category, count)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The builtin radiology database
pub fn radiology_database() -> &'static RadiologyDatabase {
    RADIOLOGY_DB.get_or_init(|| RadiologyDatabase::new(builtin_radiology()))
}

/// Search the builtin database; see [`RadiologyDatabase::search`]
pub fn search_radiology_entries(query: &str) -> Vec<&'static RadiologyEntry> {
    radiology_database().search(query)
}

/// Filter the builtin database by category membership
pub fn filter_by_category(categories: &[RadiologyCategory]) -> Vec<&'static RadiologyEntry> {
    radiology_database().filter_by_category(categories)
}

/// Look up a builtin entry by exact id
pub fn get_entry_by_id(id: &str) -> Option<&'static RadiologyEntry> {
    radiology_database().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, category: RadiologyCategory, finding: &str) -> RadiologyEntry {
        RadiologyEntry {
            id: id.to_string(),
            name: format!("Card {}", id),
            category,
            description: String::new(),
            technique: "Portable technique".to_string(),
            normal_appearance: String::new(),
            abnormal_findings: vec![finding.to_string()],
            differential_diagnosis: Vec::new(),
            clinical_correlation: String::new(),
            key_pearls: Vec::new(),
            references: Vec::new(),
        }
    }

    fn sample_db() -> RadiologyDatabase {
        RadiologyDatabase::new(vec![
            card("a", RadiologyCategory::ChestXray, "Deep sulcus sign"),
            card("b", RadiologyCategory::Ultrasound, "Morison pouch fluid"),
            card("a", RadiologyCategory::Interventional, "Second card with id a"),
            card("c", RadiologyCategory::ChestXray, "Kerley B lines"),
        ])
    }

    #[test]
    fn test_search_preserves_order() {
        let db = sample_db();
        let results = db.search("CARD");
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let db = sample_db();
        assert_eq!(db.search("").len(), db.len());
    }

    #[test]
    fn test_search_skips_technique() {
        let db = sample_db();
        assert!(db.search("portable").is_empty());
        assert_eq!(db.search("morison").len(), 1);
    }

    #[test]
    fn test_filter_by_category() {
        let db = sample_db();

        let chest = db.filter_by_category(&[RadiologyCategory::ChestXray]);
        assert_eq!(chest.len(), 2);
        assert!(chest.iter().all(|e| e.category == RadiologyCategory::ChestXray));

        let mixed = db.filter_by_category(&[
            RadiologyCategory::Ultrasound,
            RadiologyCategory::ChestXray,
        ]);
        let ids: Vec<&str> = mixed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        assert!(db.filter_by_category(&[]).is_empty());
    }

    #[test]
    fn test_get_returns_first_match() {
        let db = sample_db();
        let entry = db.get("a").unwrap();
        assert_eq!(entry.category, RadiologyCategory::ChestXray);
        assert!(db.get("missing").is_none());
        assert!(db.get("A").is_none());
    }

    #[test]
    fn test_duplicate_ids() {
        assert_eq!(sample_db().duplicate_ids(), vec!["a"]);
        assert!(radiology_database().duplicate_ids().is_empty());
    }

    #[test]
    fn test_category_counts_cover_all_categories() {
        let counts = sample_db().category_counts();
        assert_eq!(counts.len(), RadiologyCategory::ALL.len());
        assert_eq!(counts[0], (RadiologyCategory::ChestXray, 2));
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = radiology_database() as *const RadiologyDatabase;
        let second = radiology_database() as *const RadiologyDatabase;
        assert_eq!(first, second);
    }
}
