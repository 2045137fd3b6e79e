//! Content validation: level progression, metadata and integrity checks.
//!
//! Findings are data, not errors. A report with only warnings is still a
//! publishable registry; errors mark content that breaks the level schema.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::graph::CrossReferenceGraph;
use crate::domain::{ComplexityLevel, EducationalContent, LevelContent};

fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"(?i)\b(todo|fixme|placeholder)\b").expect("placeholder pattern is valid")
    })
}

fn icd11_pattern() -> &'static Regex {
    static ICD11: OnceLock<Regex> = OnceLock::new();
    ICD11.get_or_init(|| Regex::new(r"^[A-Z]\d{1,2}\.?\d{0,3}$").expect("ICD-11 pattern is valid"))
}

/// True if the text contains TODO, FIXME or placeholder as a whole word
pub fn contains_placeholder(text: &str) -> bool {
    placeholder_pattern().is_match(text)
}

/// True if the code has the shape of an ICD-11 stem code
pub fn is_valid_icd11_code(code: &str) -> bool {
    icd11_pattern().is_match(code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Area a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Levels,
    ContentQuality,
    Metadata,
    Taxonomy,
    CrossReferences,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Levels => write!(f, "levels"),
            IssueCategory::ContentQuality => write!(f, "content-quality"),
            IssueCategory::Metadata => write!(f, "metadata"),
            IssueCategory::Taxonomy => write!(f, "taxonomy"),
            IssueCategory::CrossReferences => write!(f, "cross-references"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub topic_id: String,
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
}

impl ValidationIssue {
    fn error(topic_id: &str, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.to_string(),
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    fn warning(topic_id: &str, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.to_string(),
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }
}

/// All findings for a registry, in topic order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub topics_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// No errors (warnings allowed)
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Findings for one topic
    pub fn for_topic<'a>(&'a self, topic_id: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.topic_id == topic_id)
    }
}

/// Validate a single topic against the level schema and metadata rules
pub fn validate_topic(topic: &EducationalContent) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let id = topic.id.as_str();

    if id.trim().is_empty() {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::Metadata,
            format!("Topic \"{}\" has an empty id", topic.name),
        ));
    }

    check_levels(topic, &mut issues);
    check_text_quality(topic, &mut issues);
    check_metadata(topic, &mut issues);
    check_taxonomy(topic, &mut issues);

    for (i, reference) in topic.cross_references.iter().enumerate() {
        if reference.target_id.trim().is_empty() {
            issues.push(ValidationIssue::error(
                id,
                IssueCategory::CrossReferences,
                format!("Cross-reference {}: missing targetId", i + 1),
            ));
        }
    }

    issues
}

/// One warning per cross-reference whose target is not a known topic
pub fn validate_references(graph: &CrossReferenceGraph) -> Vec<ValidationIssue> {
    graph
        .dangling()
        .into_iter()
        .filter(|edge| !edge.target.trim().is_empty())
        .map(|edge| {
            ValidationIssue::warning(
                &edge.source,
                IssueCategory::CrossReferences,
                format!("Cross-reference to non-existent ID: {}", edge.target),
            )
        })
        .collect()
}

fn check_levels(topic: &EducationalContent, issues: &mut Vec<ValidationIssue>) {
    let id = topic.id.as_str();

    for missing in topic.missing_levels() {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::Levels,
            format!("Missing complexity level {}", missing),
        ));
    }

    for (key, content) in &topic.levels {
        if *key != content.level {
            issues.push(ValidationIssue::error(
                id,
                IssueCategory::Levels,
                format!("Level {} is stored under key {}", content.level, key),
            ));
        }
        check_level_content(id, *key, content, issues);
    }

    // Soft progression: explanations should not get shorter as levels rise
    let mut previous: Option<(ComplexityLevel, usize)> = None;
    for (key, content) in &topic.levels {
        let len = content.explanation.trim().chars().count();
        if let Some((prev_level, prev_len)) = previous {
            if len < prev_len {
                issues.push(ValidationIssue::warning(
                    id,
                    IssueCategory::Levels,
                    format!(
                        "Level {} explanation is shorter than level {} ({} < {} chars)",
                        key, prev_level, len, prev_len
                    ),
                ));
            }
        }
        previous = Some((*key, len));
    }
}

fn check_level_content(
    id: &str,
    level: ComplexityLevel,
    content: &LevelContent,
    issues: &mut Vec<ValidationIssue>,
) {
    if content.summary.trim().is_empty() {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::Levels,
            format!("Level {}: missing or empty summary", level),
        ));
    }

    if content.explanation.trim().is_empty() {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::Levels,
            format!("Level {}: missing or empty explanation", level),
        ));
    }

    if content.key_terms.is_empty() {
        issues.push(ValidationIssue::warning(
            id,
            IssueCategory::Levels,
            format!("Level {}: no key terms", level),
        ));
    }

    for (i, term) in content.key_terms.iter().enumerate() {
        if term.term.trim().is_empty() {
            issues.push(ValidationIssue::error(
                id,
                IssueCategory::Levels,
                format!("Level {}: key term {} has empty term", level, i + 1),
            ));
        } else if term.definition.trim().is_empty() {
            issues.push(ValidationIssue::error(
                id,
                IssueCategory::Levels,
                format!("Level {}: key term \"{}\" has empty definition", level, term.term),
            ));
        }
    }

    if content.clinical_notes.is_some() && level.get() <= 2 {
        issues.push(ValidationIssue::warning(
            id,
            IssueCategory::Levels,
            format!("Level {}: clinical notes are expected from level 3 up", level),
        ));
    }
}

fn check_text_quality(topic: &EducationalContent, issues: &mut Vec<ValidationIssue>) {
    let id = topic.id.as_str();

    if contains_placeholder(&topic.name) {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::ContentQuality,
            format!("Name contains placeholder text: {}", topic.name),
        ));
    }

    match topic.name_es.as_deref().map(str::trim) {
        None | Some("") => issues.push(ValidationIssue::warning(
            id,
            IssueCategory::ContentQuality,
            "Missing Spanish translation (nameEs)",
        )),
        Some(name_es) if contains_placeholder(name_es) => issues.push(ValidationIssue::error(
            id,
            IssueCategory::ContentQuality,
            format!("Spanish name contains placeholder text: {}", name_es),
        )),
        Some(_) => {}
    }

    for (level, content) in &topic.levels {
        let fields = [
            ("summary", Some(content.summary.as_str())),
            ("explanation", Some(content.explanation.as_str())),
            ("clinicalNotes", content.clinical_notes.as_deref()),
        ];
        for (field, text) in fields {
            if text.map(contains_placeholder).unwrap_or(false) {
                issues.push(ValidationIssue::error(
                    id,
                    IssueCategory::ContentQuality,
                    format!("Level {}: {} contains placeholder text", level, field),
                ));
            }
        }

        for term in &content.key_terms {
            if contains_placeholder(&term.term) || contains_placeholder(&term.definition) {
                issues.push(ValidationIssue::error(
                    id,
                    IssueCategory::ContentQuality,
                    format!(
                        "Level {}: key term \"{}\" contains placeholder text",
                        level, term.term
                    ),
                ));
            }
        }
    }
}

fn check_metadata(topic: &EducationalContent, issues: &mut Vec<ValidationIssue>) {
    let id = topic.id.as_str();

    if topic.version < 1 {
        issues.push(ValidationIssue::error(
            id,
            IssueCategory::Metadata,
            format!("Invalid version: {}. Must be a positive number.", topic.version),
        ));
    }

    if topic.updated_at < topic.created_at {
        issues.push(ValidationIssue::warning(
            id,
            IssueCategory::Metadata,
            format!(
                "updatedAt ({}) is earlier than createdAt ({})",
                topic.updated_at.to_rfc3339(),
                topic.created_at.to_rfc3339()
            ),
        ));
    }
}

fn check_taxonomy(topic: &EducationalContent, issues: &mut Vec<ValidationIssue>) {
    for system in &topic.tags.systems {
        let looks_like_code = system.starts_with("ICD-11")
            || system.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false);
        if !looks_like_code {
            continue;
        }

        let code = system.replacen("ICD-11:", "", 1);
        let code = code.trim();
        if !is_valid_icd11_code(code) {
            issues.push(ValidationIssue::warning(
                &topic.id,
                IssueCategory::Taxonomy,
                format!("Potentially invalid ICD-11 code format: {}", code),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentType, KeyTerm};

    fn complete(id: &str) -> EducationalContent {
        let mut topic = EducationalContent::new(id, ContentType::Concept, "Osmolality")
            .with_name_es("Osmolalidad")
            .authored_on(2026, 3, 1);
        for level in ComplexityLevel::ALL {
            let explanation = "x".repeat(10 * level.get() as usize);
            topic = topic.with_level(
                LevelContent::new(level, "Summary", explanation).with_term("osmole", "Unit"),
            );
        }
        topic
    }

    fn messages(issues: &[ValidationIssue], severity: Severity) -> Vec<&str> {
        issues
            .iter()
            .filter(|i| i.severity == severity)
            .map(|i| i.message.as_str())
            .collect()
    }

    #[test]
    fn test_complete_topic_is_clean() {
        assert!(validate_topic(&complete("concept-osmolality")).is_empty());
    }

    #[test]
    fn test_missing_level_is_error() {
        let mut topic = complete("concept-osmolality");
        topic.levels.remove(&ComplexityLevel::ALL[3]);

        let issues = validate_topic(&topic);
        assert_eq!(messages(&issues, Severity::Error), vec!["Missing complexity level 4"]);
    }

    #[test]
    fn test_level_key_mismatch_is_error() {
        let mut topic = complete("concept-osmolality");
        let misplaced = LevelContent::new(ComplexityLevel::ALL[0], "s", "x".repeat(60));
        topic.levels.insert(ComplexityLevel::ALL[1], misplaced.with_term("a", "b"));

        let issues = validate_topic(&topic);
        assert!(messages(&issues, Severity::Error)
            .contains(&"Level 1 is stored under key 2"));
    }

    #[test]
    fn test_empty_fields_and_terms() {
        let mut topic = complete("concept-osmolality");
        let level = ComplexityLevel::ALL[2];
        let broken = LevelContent::new(level, "  ", "x".repeat(30))
            .with_key_term(KeyTerm::new("", "orphan definition"))
            .with_key_term(KeyTerm::new("tonicity", ""));
        topic.levels.insert(level, broken);

        let errors: Vec<String> = validate_topic(&topic)
            .into_iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message)
            .collect();

        assert_eq!(
            errors,
            vec![
                "Level 3: missing or empty summary".to_string(),
                "Level 3: key term 1 has empty term".to_string(),
                "Level 3: key term \"tonicity\" has empty definition".to_string(),
            ]
        );
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(contains_placeholder("TODO: write this"));
        assert!(contains_placeholder("a Placeholder sentence"));
        assert!(!contains_placeholder("placeholders are plural"));
        assert!(!contains_placeholder("Mastodon"));

        let mut topic = complete("concept-osmolality");
        topic.name = "FIXME Osmolality".to_string();
        let issues = validate_topic(&topic);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::ContentQuality);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_warnings() {
        let mut topic = complete("concept-osmolality");
        topic.name_es = None;
        topic.created_at = topic.updated_at + chrono::Duration::days(1);
        topic.tags.systems = vec!["ICD-11: 5A00".to_string(), "ICD-11:5A11".to_string()];
        let level = ComplexityLevel::ALL[0];
        topic.levels.insert(
            level,
            LevelContent::new(level, "s", "x".repeat(500)).with_clinical_notes("early"),
        );

        let issues = validate_topic(&topic);
        assert!(messages(&issues, Severity::Error).is_empty());

        let warnings = messages(&issues, Severity::Warning);
        assert!(warnings.contains(&"Missing Spanish translation (nameEs)"));
        assert!(warnings.contains(&"Level 1: no key terms"));
        assert!(warnings.contains(&"Level 1: clinical notes are expected from level 3 up"));
        assert!(warnings.contains(&"Potentially invalid ICD-11 code format: 5A00"));
        assert!(warnings.iter().any(|w| w.starts_with("updatedAt")));
        assert!(warnings.iter().any(|w| w.starts_with("Level 2 explanation is shorter")));
    }

    #[test]
    fn test_icd11_shape() {
        assert!(is_valid_icd11_code("E27"));
        assert!(is_valid_icd11_code("E27.1"));
        assert!(!is_valid_icd11_code("5A00"));
        assert!(!is_valid_icd11_code("e27"));
    }

    #[test]
    fn test_version_and_reference_errors() {
        let mut topic = complete("concept-osmolality");
        topic.version = 0;
        topic.cross_references.push(crate::domain::CrossReference::new(
            " ",
            ContentType::Concept,
            crate::domain::Relationship::Related,
            "Blank",
        ));

        let errors = messages(&validate_topic(&topic), Severity::Error).len();
        assert_eq!(errors, 2);
    }
}
