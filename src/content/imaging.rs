//! Imaging modality topics: five-level content plus an imaging profile.

use crate::domain::{
    Citation, CitationType, ClinicalRelevance, ContentStatus, ContentTags, ContentType,
    ContrastAgent, ContrastClass, CrossReference, EducationalContent, ExamRelevance,
    ImagingContraindication, ImagingModality, ImagingProfile, MediaAsset, MediaType,
    RadiationExposure, RadiologyModalityContent, Relationship,
};

use super::endocrine::ADRENAL_CORTEX_ID;
use super::level;

pub const CHEST_XRAY_ID: &str = "topic-chest-xray-interpretation";
pub const CT_PRINCIPLES_ID: &str = "topic-ct-scan-principles";

fn radiology_tags(structures: &[&str], keywords: &[&str]) -> ContentTags {
    ContentTags {
        systems: vec!["respiratory".to_string(), "radiology".to_string()],
        structures: structures.iter().map(|s| s.to_string()).collect(),
        topics: vec!["imaging".to_string(), "diagnostics".to_string()],
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        clinical_relevance: ClinicalRelevance::Critical,
        exam_relevance: ExamRelevance {
            usmle: true,
            nbme: true,
            shelf: vec![
                "medicine".to_string(),
                "surgery".to_string(),
                "emergency medicine".to_string(),
            ],
        },
    }
}

fn acr_contrast_manual() -> Citation {
    Citation::new(
        "acr-contrast-manual-2024",
        CitationType::Guideline,
        "ACR Manual on Contrast Media",
        "American College of Radiology",
    )
    .with_url("https://www.acr.org/Clinical-Resources/Contrast-Manual")
}

pub fn chest_xray_interpretation() -> RadiologyModalityContent {
    let content = EducationalContent::new(
        CHEST_XRAY_ID,
        ContentType::Topic,
        "Chest X-Ray Interpretation",
    )
    .with_name_es("Interpretacion de radiografia de torax")
    .with_alternate_names(&["CXR", "Chest radiograph", "Chest film"])
    .with_level(
        level(
            1,
            "A chest X-ray is a quick picture of the inside of your chest that shows your lungs, heart, and bones.",
            "A chest X-ray uses a tiny amount of radiation to make a black-and-white picture. Air looks dark, bones look white, and the heart and other soft parts look gray. Doctors use it to look for infections like pneumonia, fluid, or a collapsed lung.",
        )
        .with_term("X-ray", "A type of invisible light that passes through the body to make a picture")
        .with_analogy("An X-ray is like a shadow puppet show: dense things such as bone block the light and cast white shadows, while air lets it through and looks black.")
        .with_counseling_point("The radiation dose from one chest X-ray is about the same as a few days of natural background radiation."),
    )
    .with_level(
        level(
            2,
            "Chest X-rays are read by comparing densities (air, fat, soft tissue, bone, metal) and following a consistent order so nothing is missed.",
            "There are five basic densities on a radiograph, from darkest to brightest: air, fat, soft tissue or fluid, bone, and metal. Borders between structures of different density are visible; when two soft-tissue structures touch, the border disappears (the silhouette sign). Most chest films are taken from back to front (PA) with the patient standing and breathing in deeply, which gives the truest picture of heart size.",
        )
        .with_term("PA view", "Posteroanterior projection: X-rays travel from back to front")
        .with_term("silhouette sign", "Loss of a normal border when two structures of the same density touch")
        .with_analogy("Reading densities is like reading a topographic map: each shade tells you what kind of terrain lies under the surface."),
    )
    .with_level(
        level(
            3,
            "Systematic interpretation (ABCDE: airway, breathing, cardiac, diaphragm, everything else) after checking identity, projection, rotation, inspiration, and penetration.",
            "Confirm the patient, date, and projection before reading. Assess technical quality: spinous processes equidistant between clavicular heads (rotation), 9-10 posterior ribs above the diaphragm (inspiration), and vertebrae just visible behind the heart (penetration). Then go through the airway (tracheal position, carina), breathing (lung fields, pleura, costophrenic angles), cardiac (cardiothoracic ratio under 0.5 on PA), diaphragm (free air, contour), and everything else (bones, soft tissue, lines and tubes). Always review the hidden areas: apices, behind the heart, below the diaphragm, and the hila.",
        )
        .with_term("cardiothoracic ratio", "Maximal cardiac width divided by maximal thoracic width")
        .with_term("costophrenic angle", "Angle between the diaphragm and chest wall; blunting suggests effusion")
        .with_term("AP view", "Anteroposterior projection that magnifies the heart")
        .with_example("Right middle lobe pneumonia obscures the right heart border; right lower lobe pneumonia obscures the right hemidiaphragm.")
        .with_clinical_notes("Do not assess heart size on an AP or supine film: magnification overestimates the cardiothoracic ratio."),
    )
    .with_level(
        level(
            4,
            "Pattern recognition distinguishes airspace, interstitial, nodular, and pleural processes, and localizes disease using lobar anatomy and fissures.",
            "Airspace disease shows confluent opacity with air bronchograms; interstitial disease produces reticular or reticulonodular lines, Kerley B lines, and peribronchial cuffing in edema. Lobar collapse shifts fissures and mediastinum toward the lesion, whereas a large effusion pushes away. On a supine film pneumothorax collects anteriorly and inferiorly, producing the deep sulcus sign, and an effusion layers posteriorly as a hazy veil. Line and tube positions must be confirmed: endotracheal tube tip 3-5 cm above the carina, central venous catheter tip at the cavoatrial junction, nasogastric tube below the diaphragm in the stomach.",
        )
        .with_term("air bronchogram", "Air-filled bronchi visible against surrounding consolidated alveoli")
        .with_term("Kerley B lines", "Short horizontal peripheral lines from thickened interlobular septa")
        .with_term("deep sulcus sign", "Abnormally deep lateral costophrenic angle from pneumothorax on a supine film")
        .with_clinical_notes("Check every nasogastric tube on film before feeding: a tube in the right lower lobe bronchus is a recognized cause of aspiration injury."),
    )
    .with_level(
        level(
            5,
            "Expert chest radiograph interpretation integrates subtle signs, prior comparison, and clinical probability, and recognizes the limits of projection imaging and when cross-sectional imaging is required.",
            "Sensitivity for small pulmonary nodules is limited, and satisfaction of search remains the leading cause of missed lung cancer on chest radiographs; comparison with prior studies raises detection substantially. Tension pneumothorax is a clinical diagnosis and should not wait for imaging. Signs such as the Golden S (right upper lobe collapse with a central mass), the Luftsichel sign of left upper lobe collapse, and the continuous diaphragm sign of pneumomediastinum should prompt CT. Computer-aided detection and deep-learning triage tools improve nodule and pneumothorax detection but carry automation bias; report language should state confidence and recommend follow-up in line with Fleischner Society guidance for incidental nodules.",
        )
        .with_term("satisfaction of search", "Tendency to stop searching after the first abnormality is found")
        .with_term("Golden S sign", "Reverse S-shaped fissure from right upper lobe collapse around a central mass")
        .with_term("Fleischner criteria", "Guidelines for follow-up of incidental pulmonary nodules")
        .with_clinical_notes("A normal chest radiograph does not exclude pulmonary embolism, early interstitial lung disease, or small lung cancers."),
    )
    .with_media(MediaAsset {
        id: "cxr-normal-pa".to_string(),
        media_type: MediaType::Image,
        filename: "cxr-normal-pa.png".to_string(),
        title: "Normal PA Chest Radiograph".to_string(),
        description: Some("Annotated normal PA film with ABCDE landmarks".to_string()),
    })
    .with_citation(
        Citation::new(
            "felson-principles",
            CitationType::Textbook,
            "Felson's Principles of Chest Roentgenology, 5th ed.",
            "Elsevier",
        )
        .with_authors(&["Goodman LR"]),
    )
    .with_cross_reference(CrossReference::new(
        CT_PRINCIPLES_ID,
        ContentType::Topic,
        Relationship::Related,
        "CT Scan Principles",
    ))
    .with_cross_reference(CrossReference::new(
        "condition-pneumonia",
        ContentType::Condition,
        Relationship::SeeAlso,
        "Pneumonia",
    ))
    .with_tags(radiology_tags(
        &["lungs", "heart", "mediastinum", "pleura"],
        &["chest x-ray", "ABCDE", "silhouette sign", "pneumothorax", "pleural effusion"],
    ))
    .with_status(ContentStatus::Published)
    .with_contributor("Radiology content team")
    .authored_on(2026, 2, 5);

    let imaging = ImagingProfile::new(ImagingModality::Xray, RadiationExposure::Minimal)
        .with_dose_msv(0.02)
        .with_contraindication(ImagingContraindication::relative(
            "Pregnancy",
            "Fetal dose from a chest film is negligible with abdominal shielding; do not withhold a clinically indicated study",
        ));

    RadiologyModalityContent::new(content, imaging)
}

pub fn ct_scan_principles() -> RadiologyModalityContent {
    let content = EducationalContent::new(
        CT_PRINCIPLES_ID,
        ContentType::Topic,
        "CT Scan Principles",
    )
    .with_name_es("Principios de tomografia computarizada")
    .with_alternate_names(&["Computed tomography", "CAT scan"])
    .with_level(
        level(
            1,
            "A CT scan takes many X-ray pictures from different angles and a computer stacks them into detailed slices of the body.",
            "You lie on a table that slides through a large ring. An X-ray tube spins around you and a computer turns the measurements into thin slices, like slices of bread, so doctors can see inside organs in much more detail than a plain X-ray.",
        )
        .with_term("CT", "Computed tomography, an imaging test that makes cross-sectional pictures")
        .with_analogy("A CT scan is like slicing a loaf of bread and looking at every slice instead of only seeing the crust.")
        .with_counseling_point("Tell the staff if you have kidney problems, diabetes treated with metformin, or a previous reaction to contrast dye."),
    )
    .with_level(
        level(
            2,
            "CT measures how much each tiny volume of tissue blocks X-rays and shows it as a shade of gray on the Hounsfield scale.",
            "Each pixel is assigned a number in Hounsfield units (HU): water is 0, air is -1000, fat is around -100, and bone is several hundred to over 1000. Changing the window setting decides which range of numbers is displayed as shades of gray, so the same scan can be viewed for lungs, soft tissue, or bone. Contrast dye injected into a vein makes blood vessels and enhancing organs brighter.",
        )
        .with_term("Hounsfield unit", "Scale of X-ray attenuation where water is 0 and air is -1000")
        .with_term("window", "Display range of HU values mapped to gray levels")
        .with_term("contrast", "Substance that increases the visibility of vessels or organs"),
    )
    .with_level(
        level(
            3,
            "Protocol selection (non-contrast, arterial, portal venous, delayed) and window choice determine diagnostic yield; the adrenal gland and kidneys are classic examples of phase-dependent evaluation.",
            "Non-contrast CT detects hemorrhage, calcification, and urinary stones. An arterial phase (about 25-35 s) opacifies arteries for pulmonary embolism or aortic dissection; the portal venous phase (60-70 s) is the routine abdominal phase; delayed phases show urothelial filling or washout. Adrenal nodules under 10 HU on non-contrast CT are lipid-rich adenomas; indeterminate nodules use a washout protocol with 15-minute delayed imaging. Standard windows: lung (W 1500 / L -600), soft tissue (W 400 / L 40), bone (W 2000 / L 500), brain (W 80 / L 40).",
        )
        .with_term("portal venous phase", "Contrast phase about 70 seconds after injection, optimal for liver and bowel wall")
        .with_term("washout", "Loss of enhancement on delayed imaging used to characterize adrenal masses")
        .with_term("window level", "Center HU value of the displayed range")
        .with_clinical_notes("Order non-contrast CT first when hemorrhage or urolithiasis is suspected: contrast can mask both."),
    )
    .with_level(
        level(
            4,
            "CT image quality balances noise, spatial resolution, and dose through tube current, tube voltage, pitch, and reconstruction choices; contrast safety depends on renal function and reaction history.",
            "Noise falls with the square root of tube current, so halving noise requires four times the mAs. Lowering tube voltage raises iodine conspicuity, enabling lower contrast doses for CT angiography. Automatic exposure control modulates current by body habitus. Iterative and deep-learning reconstruction reduce noise and allow dose reductions of 30-60%. Post-contrast acute kidney injury risk is low with eGFR above 30; below that, weigh benefit and ensure hydration. Prior moderate or severe allergic-like reactions warrant premedication or an alternative study, while shellfish allergy is not a specific contraindication.",
        )
        .with_term("mAs", "Tube current-time product governing photon count and noise")
        .with_term("pitch", "Table travel per rotation divided by total collimated width")
        .with_term("iterative reconstruction", "Model-based reconstruction that reduces noise at lower dose")
        .with_clinical_notes("Metformin need not be held for eGFR above 30 without acute kidney injury; hold for 48 hours otherwise per ACR guidance."),
    )
    .with_level(
        level(
            5,
            "Advanced CT applications (dual-energy, perfusion, photon-counting) and quantitative imaging extend diagnostic capability while dose stewardship governs population risk.",
            "Dual-energy CT acquires two spectra to produce material decomposition maps, virtual non-contrast images, iodine maps for perfusion defects in pulmonary embolism, and uric acid characterization in gout. Photon-counting detectors resolve individual photon energies, improving spatial resolution and reducing electronic noise. CT perfusion in acute stroke estimates core and penumbra to select thrombectomy candidates beyond standard windows. Radiomics extracts texture features that may predict tumor genotype but requires harmonized acquisition. Diagnostic reference levels and dose registries benchmark CTDIvol and DLP across sites; for children, weight-based protocols and avoidance of multiphase studies substantially reduce lifetime attributable risk.",
        )
        .with_term("dual-energy CT", "Acquisition at two energy spectra enabling material decomposition")
        .with_term("CTDIvol", "Volume CT dose index describing scanner output per slice")
        .with_term("DLP", "Dose-length product, CTDIvol multiplied by scan length")
        .with_clinical_notes("Effective dose estimates from DLP are population averages; do not use them to counsel an individual on precise cancer risk."),
    )
    .with_citation(acr_contrast_manual())
    .with_citation(
        Citation::new(
            "bushberg-essential-physics",
            CitationType::Textbook,
            "The Essential Physics of Medical Imaging, 4th ed.",
            "Wolters Kluwer",
        )
        .with_authors(&["Bushberg JT", "Seibert JA", "Leidholdt EM", "Boone JM"])
        .with_chapter("Computed Tomography"),
    )
    .with_cross_reference(CrossReference::new(
        CHEST_XRAY_ID,
        ContentType::Topic,
        Relationship::Related,
        "Chest X-Ray Interpretation",
    ))
    .with_cross_reference(CrossReference::new(
        ADRENAL_CORTEX_ID,
        ContentType::Structure,
        Relationship::SeeAlso,
        "Adrenal Cortex (adrenal protocol CT)",
    ))
    .with_tags(ContentTags {
        systems: vec!["radiology".to_string()],
        ..radiology_tags(
            &["adrenal gland", "kidneys", "brain"],
            &[
                "computed tomography",
                "Hounsfield units",
                "contrast",
                "windowing",
                "radiation dose",
            ],
        )
    })
    .with_status(ContentStatus::Published)
    .with_contributor("Radiology content team")
    .authored_on(2026, 2, 5);

    let imaging = ImagingProfile::new(ImagingModality::Ct, RadiationExposure::Moderate)
        .with_dose_msv(7.0)
        .with_contrast_agent(
            ContrastAgent::new("Iohexol", ContrastClass::Iodinated, "intravenous")
                .with_adverse_reactions(&[
                    "urticaria",
                    "bronchospasm",
                    "post-contrast acute kidney injury",
                ]),
        )
        .with_contrast_agent(ContrastAgent::new(
            "Diatrizoate (oral)",
            ContrastClass::Iodinated,
            "oral",
        ))
        .with_contraindication(ImagingContraindication::relative(
            "Prior severe allergic-like reaction to iodinated contrast",
            "Consider premedication or a non-contrast alternative",
        ))
        .with_contraindication(ImagingContraindication::relative(
            "eGFR below 30 mL/min/1.73m2",
            "Higher risk of post-contrast acute kidney injury",
        ))
        .with_contraindication(ImagingContraindication::relative(
            "Pregnancy",
            "Use only when the benefit outweighs fetal dose; most studies outside the pelvis deliver negligible fetal dose",
        ));

    RadiologyModalityContent::new(content, imaging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modality_topics_are_complete() {
        for modality in [chest_xray_interpretation(), ct_scan_principles()] {
            assert!(modality.content.is_complete(), "{}", modality.content.id);
            assert_eq!(modality.content.content_type, ContentType::Topic);
            assert!(modality.imaging.is_ionizing());
        }
    }

    #[test]
    fn test_ct_profile() {
        let ct = ct_scan_principles();
        assert_eq!(ct.imaging.modality, ImagingModality::Ct);
        assert_eq!(ct.imaging.contrast_agents.len(), 2);
        assert_eq!(ct.imaging.absolute_contraindications().count(), 0);
        assert!(ct.content.tags.has_system("radiology"));
        assert!(!ct.content.tags.has_system("respiratory"));
    }

    #[test]
    fn test_modality_serializes_flat() {
        let cxr = chest_xray_interpretation();
        let json = serde_json::to_value(&cxr).unwrap();

        assert_eq!(json["id"], CHEST_XRAY_ID);
        assert_eq!(json["imaging"]["modality"], "xray");

        let parsed: RadiologyModalityContent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, cxr);
    }
}
