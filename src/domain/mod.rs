//! Domain types for the content store.
//!
//! This module contains the core data structures:
//! - Topic: five-level educational content (`EducationalContent`)
//! - Level: complexity levels and per-level content
//! - CrossReference: typed links between topics
//! - Tags: taxonomy and exam relevance
//! - Radiology: reference cards and imaging-modality extensions

pub mod cross_ref;
pub mod level;
pub mod radiology;
pub mod tags;
pub mod topic;

// Re-export commonly used types
pub use cross_ref::{CrossReference, Relationship};
pub use level::{ComplexityLevel, KeyTerm, LevelContent, LevelError};
pub use radiology::{
    ContraindicationSeverity, ContrastAgent, ContrastClass, ImagingContraindication,
    ImagingModality, ImagingProfile, RadiationExposure, RadiologyCategory, RadiologyEntry,
    RadiologyModalityContent,
};
pub use tags::{ClinicalRelevance, ContentTags, Exam, ExamRelevance};
pub use topic::{
    Citation, CitationType, ContentStatus, ContentType, EducationalContent, MediaAsset, MediaType,
};
