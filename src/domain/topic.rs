//! Educational topics with five progressive complexity levels.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::cross_ref::CrossReference;
use super::level::{ComplexityLevel, LevelContent};
use super::tags::ContentTags;

/// Kind of concept a topic describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Structure => write!(f, "structure"),
            ContentType::System => write!(f, "system"),
            ContentType::Pathway => write!(f, "pathway"),
            ContentType::Process => write!(f, "process"),
            ContentType::Condition => write!(f, "condition"),
            ContentType::Concept => write!(f, "concept"),
            ContentType::Topic => write!(f, "topic"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(ContentType::Structure),
            "system" => Ok(ContentType::System),
            "pathway" => Ok(ContentType::Pathway),
            "process" => Ok(ContentType::Process),
            "condition" => Ok(ContentType::Condition),
            "concept" => Ok(ContentType::Concept),
            "topic" => Ok(ContentType::Topic),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

/// Editorial lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStatus {
    Draft,
    Review,
    Published,
    Archived,
}

impl Default for ContentStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Kind of media asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Image,
    Diagram,
    Video,
    Animation,
    #[serde(rename = "3d-model")]
    Model3d,
    Audio,
}

/// Reference to a media file; filenames are opaque and never resolved here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub filename: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of cited source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationType {
    Textbook,
    Article,
    Journal,
    Guideline,
    Website,
    Other,
}

/// A bibliographic citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    pub title: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Citation {
    pub fn new(
        id: impl Into<String>,
        citation_type: CitationType,
        title: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            citation_type,
            title: title.into(),
            source: source.into(),
            authors: Vec::new(),
            chapter: None,
            url: None,
            license: None,
        }
    }

    pub fn with_authors(mut self, authors: &[&str]) -> Self {
        self.authors.extend(authors.iter().map(|a| a.to_string()));
        self
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One educable concept: an organ, a pathway, an imaging modality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    /// Globally unique key (graph node and foreign-key target)
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    pub name: String,

    /// Spanish display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_es: Option<String>,

    #[serde(default)]
    pub alternate_names: Vec<String>,

    /// Content per complexity level, expected to hold exactly 1..=5
    pub levels: BTreeMap<ComplexityLevel, LevelContent>,

    #[serde(default)]
    pub media: Vec<MediaAsset>,

    #[serde(default)]
    pub citations: Vec<Citation>,

    #[serde(default)]
    pub cross_references: Vec<CrossReference>,

    #[serde(default)]
    pub tags: ContentTags,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Authorial version number (starts at 1)
    pub version: u32,

    #[serde(default)]
    pub status: ContentStatus,

    #[serde(default)]
    pub contributors: Vec<String>,
}

impl EducationalContent {
    /// Create a draft topic with no levels
    pub fn new(id: impl Into<String>, content_type: ContentType, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            content_type,
            name: name.into(),
            name_es: None,
            alternate_names: Vec::new(),
            levels: BTreeMap::new(),
            media: Vec::new(),
            citations: Vec::new(),
            cross_references: Vec::new(),
            tags: ContentTags::default(),
            created_at: now,
            updated_at: now,
            version: 1,
            status: ContentStatus::default(),
            contributors: Vec::new(),
        }
    }

    /// Get the content at a level
    pub fn level(&self, level: ComplexityLevel) -> Option<&LevelContent> {
        self.levels.get(&level)
    }

    /// Levels in 1..=5 that have no content
    pub fn missing_levels(&self) -> Vec<ComplexityLevel> {
        ComplexityLevel::ALL
            .into_iter()
            .filter(|level| !self.levels.contains_key(level))
            .collect()
    }

    /// True when all five levels are present and each matches its key
    pub fn is_complete(&self) -> bool {
        self.levels.len() == ComplexityLevel::ALL.len()
            && self.levels.iter().all(|(key, content)| *key == content.level)
    }

    pub fn with_name_es(mut self, name_es: impl Into<String>) -> Self {
        self.name_es = Some(name_es.into());
        self
    }

    pub fn with_alternate_names(mut self, names: &[&str]) -> Self {
        self.alternate_names.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Insert level content under its own level key
    pub fn with_level(mut self, content: LevelContent) -> Self {
        self.levels.insert(content.level, content);
        self
    }

    pub fn with_media(mut self, media: MediaAsset) -> Self {
        self.media.push(media);
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citations.push(citation);
        self
    }

    pub fn with_cross_reference(mut self, reference: CrossReference) -> Self {
        self.cross_references.push(reference);
        self
    }

    pub fn with_tags(mut self, tags: ContentTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributors.push(contributor.into());
        self
    }

    /// Set both timestamps to an authoring date (UTC midnight).
    ///
    /// An impossible date leaves the timestamps unchanged and logs a warning.
    pub fn authored_on(mut self, year: i32, month: u32, day: u32) -> Self {
        match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() {
            Some(at) => {
                self.created_at = at;
                self.updated_at = at;
            }
            None => tracing::warn!(
                id = %self.id,
                year,
                month,
                day,
                "Invalid authoring date, timestamps unchanged"
            ),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> ComplexityLevel {
        ComplexityLevel::new(n).unwrap()
    }

    fn complete_topic() -> EducationalContent {
        let mut topic =
            EducationalContent::new("anatomy-test", ContentType::Structure, "Test Gland");
        for n in 1..=5 {
            topic = topic.with_level(LevelContent::new(level(n), "summary", "explanation"));
        }
        topic
    }

    #[test]
    fn test_topic_defaults() {
        let topic = EducationalContent::new("x", ContentType::Concept, "X");
        assert_eq!(topic.version, 1);
        assert_eq!(topic.status, ContentStatus::Draft);
        assert_eq!(topic.missing_levels().len(), 5);
        assert!(!topic.is_complete());
    }

    #[test]
    fn test_complete_topic() {
        let topic = complete_topic();
        assert!(topic.is_complete());
        assert!(topic.missing_levels().is_empty());
        assert_eq!(topic.level(level(3)).unwrap().level, level(3));
    }

    #[test]
    fn test_mismatched_level_key_is_incomplete() {
        let mut topic = complete_topic();
        let misplaced = LevelContent::new(level(2), "s", "e");
        topic.levels.insert(level(4), misplaced);

        assert!(topic.missing_levels().is_empty());
        assert!(!topic.is_complete());
    }

    #[test]
    fn test_authored_on_sets_both_timestamps() {
        let topic = EducationalContent::new("x", ContentType::Topic, "X").authored_on(2026, 1, 30);
        assert_eq!(topic.created_at, topic.updated_at);
        assert_eq!(topic.created_at.to_rfc3339(), "2026-01-30T00:00:00+00:00");
    }

    #[test]
    fn test_authored_on_rejects_impossible_date() {
        let topic = EducationalContent::new("x", ContentType::Topic, "X").authored_on(2026, 1, 30);
        let unchanged = topic.clone().authored_on(2026, 2, 30);

        assert_eq!(unchanged.created_at, topic.created_at);
        assert_eq!(unchanged.updated_at, topic.updated_at);
        assert_ne!(unchanged.created_at.timestamp(), 0);
    }

    #[test]
    fn test_topic_json_round_trip_keeps_level_keys() {
        let topic = complete_topic().authored_on(2026, 2, 5);

        let json = serde_json::to_string(&topic).unwrap();
        assert!(json.contains(r#""type":"structure""#));
        assert!(json.contains(r#""5":{"level":5"#));

        let parsed: EducationalContent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, topic);
    }

    #[test]
    fn test_content_type_from_str() {
        assert_eq!("Pathway".parse::<ContentType>().unwrap(), ContentType::Pathway);
        assert!("organ".parse::<ContentType>().is_err());
    }
}
