//! Content sources feeding the registry builder.
//!
//! A source produces a `ContentBundle`; sources are read before the
//! registry is built and never consulted afterwards.
//!
//! - `BuiltinSource`: the compiled-in fixtures
//! - `DirectorySource`: JSON/YAML content packs in a directory

pub mod directory;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::{builtin_modalities, builtin_radiology, builtin_topics};
use crate::domain::{EducationalContent, RadiologyEntry, RadiologyModalityContent};

pub use directory::DirectorySource;

/// A unit of content: topics, modality topics and radiology entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<EducationalContent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modalities: Vec<RadiologyModalityContent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radiology: Vec<RadiologyEntry>,
}

impl ContentBundle {
    /// The compiled-in content
    pub fn builtin() -> Self {
        Self {
            topics: builtin_topics(),
            modalities: builtin_modalities(),
            radiology: builtin_radiology(),
        }
    }

    /// Append another bundle, keeping order
    pub fn merge(&mut self, other: ContentBundle) {
        self.topics.extend(other.topics);
        self.modalities.extend(other.modalities);
        self.radiology.extend(other.radiology);
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.modalities.is_empty() && self.radiology.is_empty()
    }
}

/// Trait for content sources
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name (for logs)
    fn name(&self) -> &str;

    /// Load everything this source provides
    async fn load(&self) -> Result<ContentBundle>;
}

/// The compiled-in fixtures
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl ContentSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<ContentBundle> {
        Ok(ContentBundle::builtin())
    }
}

/// Load and merge several sources in order
pub async fn load_all(sources: &[Box<dyn ContentSource>]) -> Result<ContentBundle> {
    let mut bundle = ContentBundle::default();
    for source in sources {
        let loaded = source.load().await?;
        tracing::info!(
            source = source.name(),
            topics = loaded.topics.len() + loaded.modalities.len(),
            radiology = loaded.radiology.len(),
            "Loaded content source"
        );
        bundle.merge(loaded);
    }
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_source() {
        let bundle = BuiltinSource.load().await.unwrap();
        assert_eq!(bundle, ContentBundle::builtin());
        assert!(!bundle.is_empty());
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut bundle = ContentBundle {
            radiology: builtin_radiology().into_iter().take(1).collect(),
            ..Default::default()
        };
        bundle.merge(ContentBundle {
            radiology: builtin_radiology().into_iter().skip(1).take(1).collect(),
            ..Default::default()
        });

        let ids: Vec<&str> = bundle.radiology.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["cxr-systematic-approach", "cxr-pneumonia"]);
    }

    #[test]
    fn test_bundle_fields_are_optional() {
        let bundle: ContentBundle = serde_json::from_str("{}").unwrap();
        assert!(bundle.is_empty());
    }
}
