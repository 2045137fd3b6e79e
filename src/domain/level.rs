//! Complexity levels and per-level content.
//!
//! Every topic is explained at five levels, from a lay explanation (1) to
//! subspecialist detail (5). A `ComplexityLevel` can only hold 1..=5.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised when constructing a complexity level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("Complexity level out of range: {0} (expected 1-5)")]
    OutOfRange(u8),
}

/// A complexity tier in 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComplexityLevel(u8);

impl ComplexityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All five levels in ascending order
    pub const ALL: [ComplexityLevel; 5] = [
        ComplexityLevel(1),
        ComplexityLevel(2),
        ComplexityLevel(3),
        ComplexityLevel(4),
        ComplexityLevel(5),
    ];

    /// Create a level, failing outside 1..=5
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LevelError::OutOfRange(value))
        }
    }

    /// Get the raw numeric value
    pub fn get(self) -> u8 {
        self.0
    }

    /// The next level up, if any
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }
}

impl TryFrom<u8> for ComplexityLevel {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ComplexityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

// Levels appear both as values and as map keys. JSON map keys arrive as
// strings ("1"), so the visitor accepts numbers and numeric strings.
struct LevelVisitor;

impl<'de> Visitor<'de> for LevelVisitor {
    type Value = ComplexityLevel;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a complexity level between 1 and 5")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let value = u8::try_from(value).map_err(|_| E::custom(LevelError::OutOfRange(u8::MAX)))?;
        ComplexityLevel::new(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        let value = u64::try_from(value).map_err(|_| E::custom(LevelError::OutOfRange(0)))?;
        self.visit_u64(value)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let parsed: u64 = value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))?;
        self.visit_u64(parsed)
    }
}

impl<'de> Deserialize<'de> for ComplexityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

impl std::str::FromStr for ComplexityLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid complexity level: {}", s))?;
        Ok(Self::new(value)?)
    }
}

/// A glossary term introduced at a given level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl KeyTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            pronunciation: None,
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }
}

/// Content of a topic at one complexity level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    /// Must equal the key this record is stored under
    pub level: ComplexityLevel,

    /// One or two sentence overview (required, non-empty)
    pub summary: String,

    /// Long-form explanation (required, non-empty)
    pub explanation: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_terms: Vec<KeyTerm>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analogies: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patient_counseling_points: Vec<String>,
}

impl LevelContent {
    /// Create level content with the required fields
    pub fn new(
        level: ComplexityLevel,
        summary: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            level,
            summary: summary.into(),
            explanation: explanation.into(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            clinical_notes: None,
            patient_counseling_points: Vec::new(),
        }
    }

    pub fn with_key_term(mut self, term: KeyTerm) -> Self {
        self.key_terms.push(term);
        self
    }

    /// Add a key term from a (term, definition) pair
    pub fn with_term(self, term: &str, definition: &str) -> Self {
        self.with_key_term(KeyTerm::new(term, definition))
    }

    pub fn with_analogy(mut self, analogy: impl Into<String>) -> Self {
        self.analogies.push(analogy.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_clinical_notes(mut self, notes: impl Into<String>) -> Self {
        self.clinical_notes = Some(notes.into());
        self
    }

    pub fn with_counseling_point(mut self, point: impl Into<String>) -> Self {
        self.patient_counseling_points.push(point.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_range() {
        assert!(ComplexityLevel::new(0).is_err());
        assert!(ComplexityLevel::new(1).is_ok());
        assert!(ComplexityLevel::new(5).is_ok());
        assert_eq!(ComplexityLevel::new(6), Err(LevelError::OutOfRange(6)));
    }

    #[test]
    fn test_level_next() {
        let four = ComplexityLevel::new(4).unwrap();
        assert_eq!(four.next().map(ComplexityLevel::get), Some(5));
        assert_eq!(ComplexityLevel::new(5).unwrap().next(), None);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("3".parse::<ComplexityLevel>().unwrap().get(), 3);
        assert!("9".parse::<ComplexityLevel>().is_err());
        assert!("three".parse::<ComplexityLevel>().is_err());
    }

    #[test]
    fn test_level_rejects_out_of_range_json() {
        let parsed: Result<ComplexityLevel, _> = serde_json::from_str("7");
        assert!(parsed.is_err());

        let parsed: ComplexityLevel = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.get(), 2);
    }

    #[test]
    fn test_level_accepts_string_keys() {
        let parsed: ComplexityLevel = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(parsed.get(), 4);

        let map: std::collections::BTreeMap<ComplexityLevel, String> =
            serde_json::from_str(r#"{"1": "a", "5": "b"}"#).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_level_content_builder() {
        let level = ComplexityLevel::new(3).unwrap();
        let content = LevelContent::new(level, "Summary", "Explanation")
            .with_term("cortisol", "Glucocorticoid hormone")
            .with_clinical_notes("Check morning cortisol");

        assert_eq!(content.key_terms.len(), 1);
        assert_eq!(content.key_terms[0].term, "cortisol");
        assert!(content.clinical_notes.is_some());
        assert!(content.analogies.is_empty());
    }

    #[test]
    fn test_level_content_serialization_is_camel_case() {
        let level = ComplexityLevel::new(1).unwrap();
        let content = LevelContent::new(level, "s", "e").with_counseling_point("Rest");

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["level"], 1);
        assert!(json.get("patientCounselingPoints").is_some());
        assert!(json.get("keyTerms").is_none());
    }
}
