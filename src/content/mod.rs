//! Compiled-in educational content.
//!
//! Every leaf module contributes fully-populated records; this module
//! aggregates them into the builtin bundle the registry is built from.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── endocrine.rs   # per-gland anatomy topics + HPA axis pathway
//! ├── imaging.rs     # five-level modality topics (CXR, CT)
//! └── radiology.rs   # radiology reference cards
//! ```

pub mod endocrine;
pub mod imaging;
pub mod radiology;

use crate::domain::{
    ComplexityLevel, EducationalContent, LevelContent, RadiologyModalityContent,
};

pub use endocrine::{
    adrenal_cortex_anatomy, adrenal_medulla_anatomy, hpa_axis_pathway, pituitary_gland_anatomy,
    thyroid_gland_anatomy, ENDOCRINE_ANATOMY_CONTENT,
};
pub use imaging::{chest_xray_interpretation, ct_scan_principles};
pub use radiology::builtin_radiology;

/// Build level content for a fixture; `n` is 1-based
pub(crate) fn level(n: usize, summary: &str, explanation: &str) -> LevelContent {
    LevelContent::new(ComplexityLevel::ALL[n - 1], summary, explanation)
}

/// All builtin five-level topics (modality topics excluded)
pub fn builtin_topics() -> Vec<EducationalContent> {
    vec![
        adrenal_cortex_anatomy(),
        adrenal_medulla_anatomy(),
        thyroid_gland_anatomy(),
        pituitary_gland_anatomy(),
        hpa_axis_pathway(),
    ]
}

/// All builtin imaging modality topics
pub fn builtin_modalities() -> Vec<RadiologyModalityContent> {
    vec![chest_xray_interpretation(), ct_scan_principles()]
}
