//! Registry Integration Tests
//!
//! Tests for the builtin registry: completeness, id uniqueness,
//! validation and dangling-reference policy.

use std::collections::HashSet;

use medlearn::registry::IssueCategory;
use medlearn::{
    build_registry, ComplexityLevel, ContentType, DanglingPolicy, Exam, RegistryBuilder,
    RegistryError, ENDOCRINE_ANATOMY_CONTENT,
};

#[test]
fn test_every_builtin_topic_has_all_five_levels() {
    let registry = build_registry().unwrap();

    assert_eq!(registry.topics().len(), 7);
    for topic in registry.topics() {
        assert!(topic.is_complete(), "{} is missing levels", topic.id);
        for level in ComplexityLevel::ALL {
            let content = registry.level(&topic.id, level).unwrap();
            assert_eq!(content.level, level);
            assert!(!content.summary.trim().is_empty());
            assert!(!content.explanation.trim().is_empty());
        }
    }
}

#[test]
fn test_topic_ids_are_unique() {
    let registry = build_registry().unwrap();

    let ids: HashSet<&str> = registry.topics().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), registry.topics().len());
}

#[test]
fn test_endocrine_anatomy_index_resolves() {
    let registry = build_registry().unwrap();

    for (id, name) in ENDOCRINE_ANATOMY_CONTENT {
        let topic = registry.topic(id).unwrap();
        assert_eq!(topic.name, *name);
        assert_eq!(topic.content_type, ContentType::Structure);
        assert!(topic.tags.has_system("endocrine"));
    }
}

#[test]
fn test_builtin_content_has_no_validation_errors() {
    let registry = build_registry().unwrap();
    let report = registry.validate();

    assert_eq!(report.topics_checked, 7);
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors().collect::<Vec<_>>());

    let dangling: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.category == IssueCategory::CrossReferences)
        .collect();
    assert_eq!(dangling.len(), 9);
    assert!(dangling
        .iter()
        .all(|issue| issue.message.starts_with("Cross-reference to non-existent ID: ")));
}

#[test]
fn test_known_dangling_targets() {
    let registry = build_registry().unwrap();

    let targets: HashSet<&str> = registry
        .graph()
        .dangling()
        .iter()
        .map(|edge| edge.target.as_str())
        .collect();

    let expected: HashSet<&str> = [
        "system-endocrine",
        "condition-cushing-syndrome",
        "condition-pheochromocytoma",
        "condition-graves-disease",
        "condition-pneumonia",
    ]
    .into_iter()
    .collect();

    assert_eq!(targets, expected);
}

#[test]
fn test_deny_policy_rejects_builtin_content() {
    let result = RegistryBuilder::builtin()
        .dangling_policy(DanglingPolicy::Deny)
        .build();

    match result {
        Err(RegistryError::DanglingReferences { references }) => {
            assert_eq!(references.len(), 9);
            assert_eq!(references[0].to_string(), "anatomy-adrenal-cortex -> system-endocrine");
        }
        other => panic!("expected dangling error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_imaging_topics_carry_profiles() {
    let registry = build_registry().unwrap();

    let ids: Vec<&str> = registry.modalities().map(|(topic, _)| topic.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["topic-chest-xray-interpretation", "topic-ct-scan-principles"]
    );

    let ct = registry.imaging_profile("topic-ct-scan-principles").unwrap();
    assert!(ct.is_ionizing());
    assert!(registry.imaging_profile("anatomy-adrenal-cortex").is_none());
}

#[test]
fn test_exam_filters() {
    let registry = build_registry().unwrap();

    assert_eq!(registry.topics_for_exam(&Exam::Usmle).len(), 7);

    let psychiatry: Vec<&str> = registry
        .topics_for_exam(&"shelf:Psychiatry".parse().unwrap())
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(psychiatry, vec!["pathway-hpa-axis"]);
}
