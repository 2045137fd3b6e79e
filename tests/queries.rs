//! Radiology Query Integration Tests
//!
//! Tests for search, category filtering and id lookup over the builtin
//! radiology database.

use medlearn::query::{tokenize, RadiologyIndex};
use medlearn::{
    filter_by_category, get_entry_by_id, radiology_database, search_radiology_entries,
    RadiologyCategory,
};

fn ids<'a>(entries: &[&'a medlearn::RadiologyEntry]) -> Vec<&'a str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn test_builtin_database_shape() {
    let db = radiology_database();

    assert_eq!(db.len(), 23);
    assert!(db.duplicate_ids().is_empty());
    for (category, count) in db.category_counts() {
        assert!(count > 0, "no entries for {}", category);
    }
}

#[test]
fn test_search_matches_differentials_and_findings() {
    let results = search_radiology_entries("appendicolith");
    assert_eq!(ids(&results), vec!["ct-abdomen-appendicitis", "ct-renal-colic"]);
}

#[test]
fn test_search_is_case_insensitive() {
    assert_eq!(
        ids(&search_radiology_entries("APPENDICOLITH")),
        ids(&search_radiology_entries("appendicolith"))
    );

    let results = search_radiology_entries("pneumothorax");
    assert!(results.iter().any(|e| e.id == "cxr-pneumothorax"));
}

#[test]
fn test_search_edge_cases() {
    assert_eq!(search_radiology_entries("").len(), radiology_database().len());
    assert!(search_radiology_entries("zzz-no-such-finding").is_empty());
}

#[test]
fn test_search_preserves_database_order() {
    let db = radiology_database();
    let results = search_radiology_entries("contrast");
    assert!(!results.is_empty());

    let positions: Vec<usize> = results
        .iter()
        .map(|hit| db.entries().iter().position(|e| e.id == hit.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_queries_are_pure() {
    let before = radiology_database().clone();

    let first = ids(&search_radiology_entries("fracture"));
    let second = ids(&search_radiology_entries("fracture"));
    assert_eq!(first, second);

    let _ = filter_by_category(&[RadiologyCategory::Ultrasound]);
    let _ = get_entry_by_id("us-fast-exam");

    assert_eq!(&before, radiology_database());
}

#[test]
fn test_filter_by_category() {
    let chest = filter_by_category(&[RadiologyCategory::ChestXray]);
    assert_eq!(
        ids(&chest),
        vec![
            "cxr-systematic-approach",
            "cxr-pneumonia",
            "cxr-pneumothorax",
            "cxr-pleural-effusion"
        ]
    );

    let mixed = filter_by_category(&[
        RadiologyCategory::MusculoskeletalImaging,
        RadiologyCategory::ContrastStudies,
    ]);
    assert_eq!(
        ids(&mixed),
        vec![
            "contrast-iodinated",
            "contrast-gadolinium",
            "msk-fracture-basics",
            "msk-shoulder"
        ]
    );

    assert!(filter_by_category(&[]).is_empty());
}

#[test]
fn test_get_entry_by_id() {
    let entry = get_entry_by_id("radsafety-pregnancy").unwrap();
    assert_eq!(entry.category, RadiologyCategory::RadiationSafety);

    assert!(get_entry_by_id("cxr-pneumothorax").is_some());
    assert!(get_entry_by_id("nonexistent-id").is_none());
    assert!(get_entry_by_id("cxr-PNEUMOTHORAX").is_none());
    assert!(get_entry_by_id("").is_none());
}

#[test]
fn test_index_agrees_with_linear_queries() {
    let db = radiology_database();
    let index = RadiologyIndex::build(db);

    for entry in db.entries() {
        assert_eq!(index.get(&entry.id).map(|e| &e.id), Some(&entry.id));
    }

    let token = tokenize("Appendicolith").remove(0);
    let indexed = ids(&index.entries_with_token(&token));
    assert_eq!(indexed, ids(&search_radiology_entries("appendicolith")));
}
