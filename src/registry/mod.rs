//! The immutable content registry.
//!
//! A `Registry` is assembled once by `RegistryBuilder` from topics, modality
//! topics and radiology entries, then only read:
//! - Topics are indexed by id and kept in insertion order
//! - The cross-reference graph is built at construction
//! - The radiology database keeps array order
//!
//! # Usage
//!
//! ```no_run
//! let registry = medlearn::build_registry()?;
//! let cortex = registry.topic("anatomy-adrenal-cortex");
//! # Ok::<(), medlearn::RegistryError>(())
//! ```

pub mod graph;
pub mod validation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{
    ClinicalRelevance, ComplexityLevel, ContentType, EducationalContent, Exam, ImagingProfile,
    LevelContent, RadiologyEntry, RadiologyModalityContent,
};
use crate::query::RadiologyDatabase;
use crate::source::ContentBundle;

pub use graph::{CrossReferenceGraph, Edge};
pub use validation::{
    validate_references, validate_topic, IssueCategory, Severity, ValidationIssue,
    ValidationReport,
};

/// What to do with cross-references whose target is not in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DanglingPolicy {
    /// Log each dangling edge and keep it unresolved
    Warn,
    /// Fail construction
    Deny,
}

impl Default for DanglingPolicy {
    fn default() -> Self {
        Self::Warn
    }
}

impl std::fmt::Display for DanglingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DanglingPolicy::Warn => write!(f, "warn"),
            DanglingPolicy::Deny => write!(f, "deny"),
        }
    }
}

impl std::str::FromStr for DanglingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(DanglingPolicy::Warn),
            "deny" => Ok(DanglingPolicy::Deny),
            _ => anyhow::bail!("Unknown dangling policy: {} (expected warn or deny)", s),
        }
    }
}

/// A cross-reference that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub source: String,
    pub target: String,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Registry construction errors
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Duplicate topic id: {id}")]
    DuplicateTopicId { id: String },

    #[error("Duplicate radiology entry id: {id}")]
    DuplicateRadiologyId { id: String },

    #[error("{} dangling cross-reference(s): {}", .references.len(), join_references(.references))]
    DanglingReferences { references: Vec<DanglingReference> },
}

fn join_references(references: &[DanglingReference]) -> String {
    references
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects content and builds a `Registry`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    topics: Vec<EducationalContent>,
    imaging: Vec<(String, ImagingProfile)>,
    radiology: Vec<RadiologyEntry>,
    dangling_policy: DanglingPolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the compiled-in content
    pub fn builtin() -> Self {
        Self::new().bundle(ContentBundle::builtin())
    }

    pub fn topic(mut self, topic: EducationalContent) -> Self {
        self.topics.push(topic);
        self
    }

    pub fn topics(self, topics: impl IntoIterator<Item = EducationalContent>) -> Self {
        topics.into_iter().fold(self, Self::topic)
    }

    pub fn modality(mut self, modality: RadiologyModalityContent) -> Self {
        let (content, imaging) = modality.into_parts();
        self.imaging.push((content.id.clone(), imaging));
        self.topics.push(content);
        self
    }

    pub fn radiology_entry(mut self, entry: RadiologyEntry) -> Self {
        self.radiology.push(entry);
        self
    }

    /// Add everything in a content bundle
    pub fn bundle(self, bundle: ContentBundle) -> Self {
        debug!(
            topics = bundle.topics.len(),
            modalities = bundle.modalities.len(),
            radiology = bundle.radiology.len(),
            "Adding content bundle"
        );
        let ContentBundle {
            topics,
            modalities,
            radiology,
        } = bundle;

        let builder = self.topics(topics);
        let builder = modalities.into_iter().fold(builder, Self::modality);
        radiology.into_iter().fold(builder, Self::radiology_entry)
    }

    pub fn dangling_policy(mut self, policy: DanglingPolicy) -> Self {
        self.dangling_policy = policy;
        self
    }

    /// Validate uniqueness, build the graph and freeze the registry
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut by_id = HashMap::with_capacity(self.topics.len());
        for (pos, topic) in self.topics.iter().enumerate() {
            if by_id.insert(topic.id.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateTopicId {
                    id: topic.id.clone(),
                });
            }
        }

        let radiology = RadiologyDatabase::new(self.radiology);
        if let Some(id) = radiology.duplicate_ids().first() {
            return Err(RegistryError::DuplicateRadiologyId { id: id.to_string() });
        }

        let graph = CrossReferenceGraph::build(&self.topics);
        let dangling = graph.dangling();
        if !dangling.is_empty() {
            match self.dangling_policy {
                DanglingPolicy::Warn => {
                    for edge in &dangling {
                        warn!(
                            source = %edge.source,
                            target = %edge.target,
                            relationship = %edge.relationship,
                            "Dangling cross-reference"
                        );
                    }
                }
                DanglingPolicy::Deny => {
                    return Err(RegistryError::DanglingReferences {
                        references: dangling
                            .iter()
                            .map(|edge| DanglingReference {
                                source: edge.source.clone(),
                                target: edge.target.clone(),
                            })
                            .collect(),
                    });
                }
            }
        }

        info!(
            topics = self.topics.len(),
            radiology = radiology.len(),
            edges = graph.edge_count(),
            dangling = dangling.len(),
            "Registry built"
        );

        Ok(Registry {
            topics: self.topics,
            by_id,
            imaging: self.imaging.into_iter().collect(),
            graph,
            radiology,
        })
    }
}

/// Build the registry from the compiled-in content
pub fn build_registry() -> Result<Registry, RegistryError> {
    RegistryBuilder::builtin().build()
}

/// Read-only collection of topics, the cross-reference graph and the
/// radiology database
#[derive(Debug)]
pub struct Registry {
    topics: Vec<EducationalContent>,
    by_id: HashMap<String, usize>,
    imaging: HashMap<String, ImagingProfile>,
    graph: CrossReferenceGraph,
    radiology: RadiologyDatabase,
}

impl Registry {
    /// All topics in insertion order (modality topics included)
    pub fn topics(&self) -> &[EducationalContent] {
        &self.topics
    }

    /// Get a topic by ID
    pub fn topic(&self, id: &str) -> Option<&EducationalContent> {
        self.by_id.get(id).map(|&pos| &self.topics[pos])
    }

    /// Get one level of a topic
    pub fn level(&self, id: &str, level: ComplexityLevel) -> Option<&LevelContent> {
        self.topic(id).and_then(|topic| topic.level(level))
    }

    /// Imaging profile for a modality topic
    pub fn imaging_profile(&self, id: &str) -> Option<&ImagingProfile> {
        self.imaging.get(id)
    }

    /// Modality topics paired with their imaging profile, in topic order
    pub fn modalities(&self) -> impl Iterator<Item = (&EducationalContent, &ImagingProfile)> {
        self.topics
            .iter()
            .filter_map(|topic| self.imaging.get(&topic.id).map(|imaging| (topic, imaging)))
    }

    /// Search topics by query (case-insensitive substring match)
    ///
    /// Matches name, alternate names, keywords and every level summary.
    pub fn search_topics(&self, query: &str) -> Vec<&EducationalContent> {
        let query_lower = query.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&query_lower);

        self.topics
            .iter()
            .filter(|topic| {
                contains(&topic.name)
                    || topic.alternate_names.iter().any(|n| contains(n))
                    || topic.tags.keywords.iter().any(|k| contains(k))
                    || topic.levels.values().any(|l| contains(&l.summary))
            })
            .collect()
    }

    /// Filter topics by content type
    pub fn topics_by_type(&self, content_type: ContentType) -> Vec<&EducationalContent> {
        self.topics
            .iter()
            .filter(|topic| topic.content_type == content_type)
            .collect()
    }

    /// Topics tagged with a body system (case-insensitive)
    pub fn topics_by_system(&self, system: &str) -> Vec<&EducationalContent> {
        self.topics
            .iter()
            .filter(|topic| topic.tags.has_system(system))
            .collect()
    }

    /// Topics at or above a clinical relevance
    pub fn topics_with_relevance_at_least(
        &self,
        relevance: ClinicalRelevance,
    ) -> Vec<&EducationalContent> {
        self.topics
            .iter()
            .filter(|topic| topic.tags.clinical_relevance >= relevance)
            .collect()
    }

    /// Topics relevant to an exam
    pub fn topics_for_exam(&self, exam: &Exam) -> Vec<&EducationalContent> {
        self.topics
            .iter()
            .filter(|topic| topic.tags.exam_relevance.covers(exam))
            .collect()
    }

    pub fn graph(&self) -> &CrossReferenceGraph {
        &self.graph
    }

    pub fn radiology(&self) -> &RadiologyDatabase {
        &self.radiology
    }

    /// Run every content check over the registry
    pub fn validate(&self) -> ValidationReport {
        let mut issues: Vec<ValidationIssue> =
            self.topics.iter().flat_map(validate_topic).collect();
        issues.extend(validate_references(&self.graph));

        ValidationReport {
            topics_checked: self.topics.len(),
            issues,
        }
    }

    /// Snapshot the registry as a content bundle (re-loadable as a pack)
    pub fn to_bundle(&self) -> ContentBundle {
        let mut bundle = ContentBundle::default();
        for topic in &self.topics {
            match self.imaging.get(&topic.id) {
                Some(imaging) => bundle
                    .modalities
                    .push(RadiologyModalityContent::new(topic.clone(), imaging.clone())),
                None => bundle.topics.push(topic.clone()),
            }
        }
        bundle.radiology = self.radiology.entries().to_vec();
        bundle
    }

    /// SHA-256 of the JSON snapshot, as "sha256:<hex>"
    pub fn digest(&self) -> anyhow::Result<String> {
        let bytes = serde_json::to_vec(&self.to_bundle())?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin_modalities, builtin_radiology, builtin_topics};
    use crate::domain::{CrossReference, Relationship};

    fn complete(id: &str, content_type: ContentType) -> EducationalContent {
        ComplexityLevel::ALL.into_iter().fold(
            EducationalContent::new(id, content_type, id),
            |topic, level| topic.with_level(LevelContent::new(level, "summary", "explanation")),
        )
    }

    #[test]
    fn test_duplicate_topic_id_rejected() {
        let result = RegistryBuilder::new()
            .topic(complete("a", ContentType::Concept))
            .topic(complete("a", ContentType::Process))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateTopicId { ref id }) if id == "a"
        ));
    }

    #[test]
    fn test_modality_id_collides_with_topic() {
        let cxr = crate::content::chest_xray_interpretation();
        let clash = complete(&cxr.content.id, ContentType::Topic);

        let result = RegistryBuilder::new().topic(clash).modality(cxr).build();
        assert!(matches!(result, Err(RegistryError::DuplicateTopicId { .. })));
    }

    #[test]
    fn test_duplicate_radiology_id_rejected() {
        let entry = builtin_radiology().remove(0);
        let result = RegistryBuilder::new()
            .radiology_entry(entry.clone())
            .radiology_entry(entry)
            .build();

        assert!(matches!(result, Err(RegistryError::DuplicateRadiologyId { .. })));
    }

    #[test]
    fn test_dangling_policy() {
        let topic = complete("a", ContentType::Concept).with_cross_reference(CrossReference::new(
            "missing",
            ContentType::Condition,
            Relationship::Related,
            "Missing",
        ));

        let registry = RegistryBuilder::new().topic(topic.clone()).build().unwrap();
        assert_eq!(registry.graph().dangling().len(), 1);

        let err = RegistryBuilder::new()
            .topic(topic)
            .dangling_policy(DanglingPolicy::Deny)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 dangling cross-reference(s): a -> missing"
        );
    }

    #[test]
    fn test_dangling_policy_from_str() {
        assert_eq!("DENY".parse::<DanglingPolicy>().unwrap(), DanglingPolicy::Deny);
        assert!("ignore".parse::<DanglingPolicy>().is_err());
        assert_eq!(DanglingPolicy::default(), DanglingPolicy::Warn);
    }

    #[test]
    fn test_topic_queries() {
        let registry = build_registry().unwrap();

        assert!(registry.topic("anatomy-thyroid-gland").is_some());
        assert!(registry.topic("nonexistent-id").is_none());

        let level = ComplexityLevel::new(3).unwrap();
        assert_eq!(
            registry.level("pathway-hpa-axis", level).map(|l| l.level),
            Some(level)
        );

        let pathways = registry.topics_by_type(ContentType::Pathway);
        assert_eq!(pathways.len(), 1);

        let hits = registry.search_topics("HOUNSFIELD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "topic-ct-scan-principles");
    }

    #[test]
    fn test_to_bundle_splits_modalities() {
        let registry = build_registry().unwrap();
        let bundle = registry.to_bundle();

        assert_eq!(bundle.topics.len(), builtin_topics().len());
        assert_eq!(bundle.modalities.len(), builtin_modalities().len());
        assert_eq!(bundle.radiology.len(), registry.radiology().len());
    }

    #[test]
    fn test_digest_is_stable() {
        let first = build_registry().unwrap().digest().unwrap();
        let second = build_registry().unwrap().digest().unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("sha256:"));
        assert_eq!(first.len(), "sha256:".len() + 64);
    }
}
