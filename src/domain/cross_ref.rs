//! Typed, directed links between topics.

use serde::{Deserialize, Serialize};

use super::topic::ContentType;

/// Relationship carried by a cross-reference edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Parent => write!(f, "parent"),
            Relationship::Child => write!(f, "child"),
            Relationship::Sibling => write!(f, "sibling"),
            Relationship::Related => write!(f, "related"),
            Relationship::SeeAlso => write!(f, "see-also"),
        }
    }
}

impl std::str::FromStr for Relationship {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(Relationship::Parent),
            "child" => Ok(Relationship::Child),
            "sibling" => Ok(Relationship::Sibling),
            "related" => Ok(Relationship::Related),
            "see-also" | "see_also" | "seealso" => Ok(Relationship::SeeAlso),
            _ => anyhow::bail!("Unknown relationship: {}", s),
        }
    }
}

/// An outgoing edge declared on a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    /// Id of the referenced topic (not guaranteed to exist)
    pub target_id: String,

    /// Declared type of the target
    pub target_type: ContentType,

    pub relationship: Relationship,

    /// Display label for the link
    pub label: String,
}

impl CrossReference {
    pub fn new(
        target_id: impl Into<String>,
        target_type: ContentType,
        relationship: Relationship,
        label: impl Into<String>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            target_type,
            relationship,
            label: label.into(),
        }
    }
}
