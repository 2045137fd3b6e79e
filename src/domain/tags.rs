//! Taxonomy tags attached to every topic.
//!
//! Tags are an auxiliary classification axis, orthogonal to the
//! cross-reference graph.

use serde::{Deserialize, Serialize};

/// How clinically important a topic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClinicalRelevance {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for ClinicalRelevance {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for ClinicalRelevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClinicalRelevance::Low => write!(f, "low"),
            ClinicalRelevance::Medium => write!(f, "medium"),
            ClinicalRelevance::High => write!(f, "high"),
            ClinicalRelevance::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for ClinicalRelevance {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ClinicalRelevance::Low),
            "medium" | "med" => Ok(ClinicalRelevance::Medium),
            "high" => Ok(ClinicalRelevance::High),
            "critical" => Ok(ClinicalRelevance::Critical),
            _ => anyhow::bail!("Unknown clinical relevance: {}", s),
        }
    }
}

/// Board-exam relevance flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRelevance {
    #[serde(default)]
    pub usmle: bool,

    #[serde(default)]
    pub nbme: bool,

    /// Shelf exams (e.g. "medicine", "surgery")
    #[serde(default)]
    pub shelf: Vec<String>,
}

/// An exam a topic can be relevant to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exam {
    Usmle,
    Nbme,
    Shelf(String),
}

impl std::str::FromStr for Exam {
    type Err = anyhow::Error;

    /// Parses `usmle`, `nbme`, or `shelf:<name>`
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "usmle" => Ok(Exam::Usmle),
            "nbme" => Ok(Exam::Nbme),
            _ => match lower.strip_prefix("shelf:") {
                Some(name) if !name.trim().is_empty() => Ok(Exam::Shelf(name.trim().to_string())),
                _ => anyhow::bail!("Unknown exam: {} (expected usmle, nbme, or shelf:<name>)", s),
            },
        }
    }
}

impl ExamRelevance {
    /// Check relevance to an exam; shelf names compare case-insensitively
    pub fn covers(&self, exam: &Exam) -> bool {
        match exam {
            Exam::Usmle => self.usmle,
            Exam::Nbme => self.nbme,
            Exam::Shelf(name) => self.shelf.iter().any(|s| s.eq_ignore_ascii_case(name)),
        }
    }
}

/// Structured taxonomy block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    #[serde(default)]
    pub systems: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structures: Vec<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub clinical_relevance: ClinicalRelevance,

    #[serde(default)]
    pub exam_relevance: ExamRelevance,
}

impl ContentTags {
    /// Check if the topic belongs to a body system (case-insensitive)
    pub fn has_system(&self, system: &str) -> bool {
        self.systems.iter().any(|s| s.eq_ignore_ascii_case(system))
    }
}
