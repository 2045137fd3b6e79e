//! medlearn - Multi-level medical education content registry
//!
//! Every topic is written at five complexity levels, from a plain-language
//! overview (level 1) up to specialist detail (level 5), and is tagged with
//! body systems, exam relevance and typed cross-references to other topics.
//! A radiology reference database sits alongside the topics.
//!
//! # Architecture
//!
//! Content is assembled once and then read-only:
//! - Sources (compiled-in fixtures, JSON/YAML content packs) yield bundles
//! - `RegistryBuilder` checks id uniqueness and resolves cross-references
//! - `Registry` answers lookups, tag filters, searches and validation
//!
//! # Modules
//!
//! - `domain`: Data structures (EducationalContent, LevelContent, RadiologyEntry)
//! - `content`: Compiled-in endocrine, imaging and radiology content
//! - `query`: Radiology search, category filters and id lookup
//! - `registry`: Registry, cross-reference graph and validation
//! - `source`: Content sources and pack loading
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the radiology database
//! medlearn search appendicolith
//!
//! # Read a topic at level 2
//! medlearn topic anatomy-adrenal-cortex --level 2
//!
//! # Validate builtin content plus a content pack
//! medlearn --content-dir ./packs validate
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod query;
pub mod registry;
pub mod source;

// Re-export main types at crate root for convenience
pub use content::{
    adrenal_cortex_anatomy, adrenal_medulla_anatomy, chest_xray_interpretation,
    ct_scan_principles, hpa_axis_pathway, pituitary_gland_anatomy, thyroid_gland_anatomy,
    ENDOCRINE_ANATOMY_CONTENT,
};
pub use domain::{
    ClinicalRelevance, ComplexityLevel, ContentTags, ContentType, CrossReference,
    EducationalContent, Exam, ImagingProfile, LevelContent, RadiologyCategory, RadiologyEntry,
    RadiologyModalityContent, Relationship,
};
pub use query::{
    filter_by_category, get_entry_by_id, radiology_database, search_radiology_entries,
    RadiologyDatabase,
};
pub use registry::{
    build_registry, DanglingPolicy, Registry, RegistryBuilder, RegistryError, Severity,
    ValidationIssue, ValidationReport,
};
pub use source::{BuiltinSource, ContentBundle, ContentSource, DirectorySource};
