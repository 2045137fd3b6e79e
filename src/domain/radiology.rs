//! Radiology reference cards and imaging-modality extensions.

use serde::{Deserialize, Serialize};

use super::topic::EducationalContent;

/// Imaging topic category (closed set of nine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiologyCategory {
    ChestXray,
    AbdominalXray,
    CtInterpretation,
    MriInterpretation,
    Ultrasound,
    ContrastStudies,
    RadiationSafety,
    Interventional,
    MusculoskeletalImaging,
}

impl RadiologyCategory {
    pub const ALL: [RadiologyCategory; 9] = [
        RadiologyCategory::ChestXray,
        RadiologyCategory::AbdominalXray,
        RadiologyCategory::CtInterpretation,
        RadiologyCategory::MriInterpretation,
        RadiologyCategory::Ultrasound,
        RadiologyCategory::ContrastStudies,
        RadiologyCategory::RadiationSafety,
        RadiologyCategory::Interventional,
        RadiologyCategory::MusculoskeletalImaging,
    ];

    /// Wire name, e.g. `chest-xray`
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiologyCategory::ChestXray => "chest-xray",
            RadiologyCategory::AbdominalXray => "abdominal-xray",
            RadiologyCategory::CtInterpretation => "ct-interpretation",
            RadiologyCategory::MriInterpretation => "mri-interpretation",
            RadiologyCategory::Ultrasound => "ultrasound",
            RadiologyCategory::ContrastStudies => "contrast-studies",
            RadiologyCategory::RadiationSafety => "radiation-safety",
            RadiologyCategory::Interventional => "interventional",
            RadiologyCategory::MusculoskeletalImaging => "musculoskeletal-imaging",
        }
    }
}

impl std::fmt::Display for RadiologyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RadiologyCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| anyhow::anyhow!("Unknown radiology category: {}", s))
    }
}

/// A single-resolution imaging reference card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiologyEntry {
    pub id: String,
    pub name: String,
    pub category: RadiologyCategory,
    pub description: String,
    pub technique: String,
    pub normal_appearance: String,
    #[serde(default)]
    pub abnormal_findings: Vec<String>,
    #[serde(default)]
    pub differential_diagnosis: Vec<String>,
    pub clinical_correlation: String,
    #[serde(default)]
    pub key_pearls: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl RadiologyEntry {
    /// Case-insensitive substring match over the searchable text fields.
    ///
    /// `needle` must already be lowercased. Technique, normal appearance and
    /// references are not searched.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(&self.name)
            || contains(&self.description)
            || self.abnormal_findings.iter().any(|f| contains(f))
            || self.differential_diagnosis.iter().any(|d| contains(d))
            || self.key_pearls.iter().any(|p| contains(p))
            || contains(&self.clinical_correlation)
    }

    /// All searchable text fields, in match order
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.abnormal_findings.iter().map(String::as_str))
            .chain(self.differential_diagnosis.iter().map(String::as_str))
            .chain(self.key_pearls.iter().map(String::as_str))
            .chain(std::iter::once(self.clinical_correlation.as_str()))
    }
}

/// Imaging modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImagingModality {
    Xray,
    Ct,
    Mri,
    Ultrasound,
    Nuclear,
    Pet,
    Fluoroscopy,
    Mammography,
    Dexa,
}

/// Ionizing radiation burden of a study
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiationExposure {
    None,
    Minimal,
    Low,
    Moderate,
    High,
}

/// Contrast agent family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastClass {
    Iodinated,
    GadoliniumBased,
    Barium,
    Microbubble,
}

/// A contrast agent used with a modality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastAgent {
    pub name: String,
    pub class: ContrastClass,
    /// Administration route (e.g. "intravenous", "oral")
    pub route: String,
    #[serde(default)]
    pub adverse_reactions: Vec<String>,
}

impl ContrastAgent {
    pub fn new(name: impl Into<String>, class: ContrastClass, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class,
            route: route.into(),
            adverse_reactions: Vec::new(),
        }
    }

    pub fn with_adverse_reactions(mut self, reactions: &[&str]) -> Self {
        self.adverse_reactions
            .extend(reactions.iter().map(|r| r.to_string()));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContraindicationSeverity {
    Absolute,
    Relative,
}

/// A condition that limits use of a modality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingContraindication {
    pub condition: String,
    pub severity: ContraindicationSeverity,
    pub rationale: String,
}

impl ImagingContraindication {
    pub fn absolute(condition: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            severity: ContraindicationSeverity::Absolute,
            rationale: rationale.into(),
        }
    }

    pub fn relative(condition: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            severity: ContraindicationSeverity::Relative,
            rationale: rationale.into(),
        }
    }
}

/// Imaging-specific facts attached to a modality topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagingProfile {
    pub modality: ImagingModality,
    pub radiation_exposure: RadiationExposure,
    /// Typical effective dose for a standard study, in mSv
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_effective_dose_msv: Option<f64>,
    #[serde(default)]
    pub contrast_agents: Vec<ContrastAgent>,
    #[serde(default)]
    pub contraindications: Vec<ImagingContraindication>,
}

impl ImagingProfile {
    pub fn new(modality: ImagingModality, radiation_exposure: RadiationExposure) -> Self {
        Self {
            modality,
            radiation_exposure,
            typical_effective_dose_msv: None,
            contrast_agents: Vec::new(),
            contraindications: Vec::new(),
        }
    }

    pub fn with_dose_msv(mut self, dose: f64) -> Self {
        self.typical_effective_dose_msv = Some(dose);
        self
    }

    pub fn with_contrast_agent(mut self, agent: ContrastAgent) -> Self {
        self.contrast_agents.push(agent);
        self
    }

    pub fn with_contraindication(mut self, contraindication: ImagingContraindication) -> Self {
        self.contraindications.push(contraindication);
        self
    }

    /// True when the modality uses ionizing radiation
    pub fn is_ionizing(&self) -> bool {
        self.radiation_exposure > RadiationExposure::None
    }

    /// Contraindications that rule the study out entirely
    pub fn absolute_contraindications(&self) -> impl Iterator<Item = &ImagingContraindication> {
        self.contraindications
            .iter()
            .filter(|c| c.severity == ContraindicationSeverity::Absolute)
    }
}

/// A five-level topic about an imaging modality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiologyModalityContent {
    #[serde(flatten)]
    pub content: EducationalContent,
    pub imaging: ImagingProfile,
}

impl RadiologyModalityContent {
    pub fn new(content: EducationalContent, imaging: ImagingProfile) -> Self {
        Self { content, imaging }
    }

    pub fn into_parts(self) -> (EducationalContent, ImagingProfile) {
        (self.content, self.imaging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> RadiologyEntry {
        RadiologyEntry {
            id: "ct-sample".to_string(),
            name: "CT: Sample".to_string(),
            category: RadiologyCategory::CtInterpretation,
            description: "Sample description".to_string(),
            technique: "Hidden technique keyword".to_string(),
            normal_appearance: "Normal".to_string(),
            abnormal_findings: vec!["Fat stranding".to_string()],
            differential_diagnosis: vec!["Diverticulitis".to_string()],
            clinical_correlation: "Correlate with lipase".to_string(),
            key_pearls: vec!["Look twice".to_string()],
            references: vec!["Secret reference".to_string()],
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(RadiologyCategory::ChestXray.to_string(), "chest-xray");
        assert_eq!(
            "Musculoskeletal-Imaging".parse::<RadiologyCategory>().unwrap(),
            RadiologyCategory::MusculoskeletalImaging
        );
        assert!("pet-ct".parse::<RadiologyCategory>().is_err());
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in RadiologyCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_matches_scanned_fields_only() {
        let entry = sample_entry();

        assert!(entry.matches_lowercase("fat stranding"));
        assert!(entry.matches_lowercase("diverticul"));
        assert!(entry.matches_lowercase("lipase"));
        assert!(entry.matches_lowercase("twice"));
        assert!(!entry.matches_lowercase("hidden technique"));
        assert!(!entry.matches_lowercase("secret reference"));
    }

    #[test]
    fn test_searchable_text_order() {
        let entry = sample_entry();
        let fields: Vec<&str> = entry.searchable_text().collect();

        assert_eq!(fields.first(), Some(&"CT: Sample"));
        assert_eq!(fields.last(), Some(&"Correlate with lipase"));
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_imaging_profile_helpers() {
        let profile = ImagingProfile::new(ImagingModality::Mri, RadiationExposure::None)
            .with_contraindication(ImagingContraindication::absolute(
                "Non-conditional pacemaker",
                "Device malfunction",
            ))
            .with_contraindication(ImagingContraindication::relative(
                "Claustrophobia",
                "May need sedation",
            ));

        assert!(!profile.is_ionizing());
        assert_eq!(profile.absolute_contraindications().count(), 1);
    }
}
