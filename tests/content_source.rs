//! Content Source Integration Tests
//!
//! Tests for loading JSON/YAML content packs from directories, merging
//! them with the builtin content and re-loading an exported registry.

use medlearn::cli::RegistryExport;
use medlearn::source::load_all;
use medlearn::{
    build_registry, BuiltinSource, ContentSource, ContentType, DirectorySource, RegistryBuilder,
    RegistryError,
};
use tempfile::TempDir;

const ENDOCRINE_SYSTEM_PACK: &str = r#"
topics:
  - id: system-endocrine
    type: system
    name: Endocrine System
    nameEs: Sistema endocrino
    createdAt: "2026-03-01T00:00:00Z"
    updatedAt: "2026-03-01T00:00:00Z"
    version: 1
    status: published
    levels:
      1:
        level: 1
        summary: Glands that send chemical messages through the blood.
        explanation: Hormones travel in the blood to tell distant organs what to do.
        keyTerms:
          - term: Hormone
            definition: A chemical messenger carried in the blood
      2:
        level: 2
        summary: Ductless glands secreting hormones into the circulation.
        explanation: Endocrine glands release hormones directly into capillaries, unlike exocrine glands which use ducts.
      3:
        level: 3
        summary: Hormone classes, transport and receptor mechanisms.
        explanation: Peptide hormones act on membrane receptors, while steroid and thyroid hormones cross membranes and bind intracellular receptors to change transcription.
      4:
        level: 4
        summary: Hierarchical axes with feedback control.
        explanation: Hypothalamic releasing hormones drive pituitary trophic hormones, which drive peripheral glands; peripheral hormones feed back negatively on both upper levels of each axis.
      5:
        level: 5
        summary: Receptor pharmacology and dynamic testing.
        explanation: Suppression tests probe autonomy of hormone secretion, stimulation tests probe reserve, and receptor-level defects explain hormone resistance syndromes despite normal or high circulating levels.
    tags:
      systems: [endocrine]
      clinicalRelevance: high
      examRelevance:
        usmle: true
        shelf: [medicine]
    crossReferences:
      - targetId: anatomy-adrenal-cortex
        targetType: structure
        relationship: child
        label: Adrenal cortex
"#;

const PEDIATRIC_US_PACK: &str = r#"{
  "radiology": [
    {
      "id": "us-pediatric-appendicitis",
      "name": "Pediatric Appendicitis Ultrasound",
      "category": "ultrasound",
      "description": "Graded-compression ultrasound as first-line imaging for suspected appendicitis in children.",
      "technique": "High-frequency linear transducer with graded compression in the right lower quadrant.",
      "normalAppearance": "Compressible blind-ending tubular structure under 6 mm.",
      "abnormalFindings": ["Non-compressible appendix over 6 mm", "Shadowing appendicolith"],
      "clinicalCorrelation": "Avoids ionizing radiation; proceed to MRI or CT if non-diagnostic.",
      "keyPearls": ["Non-visualized appendix is not a negative study"]
    }
  ]
}"#;

fn write_pack(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[tokio::test]
async fn test_directory_pack_merges_with_builtin() {
    let dir = TempDir::new().unwrap();
    write_pack(&dir, "endocrine-system.yaml", ENDOCRINE_SYSTEM_PACK);
    write_pack(&dir, "pediatric-us.json", PEDIATRIC_US_PACK);

    let sources: Vec<Box<dyn ContentSource>> =
        vec![Box::new(BuiltinSource), Box::new(DirectorySource::new(dir.path()))];
    let bundle = load_all(&sources).await.unwrap();
    let registry = RegistryBuilder::new().bundle(bundle).build().unwrap();

    let system = registry.topic("system-endocrine").unwrap();
    assert_eq!(system.content_type, ContentType::System);
    assert!(system.is_complete());

    // The new topic resolves the four Parent edges from the glands
    assert_eq!(registry.graph().dangling().len(), 5);
    assert_eq!(registry.graph().incoming("system-endocrine").len(), 4);
    assert!(registry.validate().is_ok());

    let hits: Vec<&str> = registry
        .radiology()
        .search("appendicolith")
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        hits,
        vec!["ct-abdomen-appendicitis", "ct-renal-colic", "us-pediatric-appendicitis"]
    );
}

#[tokio::test]
async fn test_pack_colliding_with_builtin_is_rejected() {
    let dir = TempDir::new().unwrap();
    let colliding =
        ENDOCRINE_SYSTEM_PACK.replace("id: system-endocrine", "id: anatomy-adrenal-cortex");
    write_pack(&dir, "colliding.yaml", &colliding);

    let sources: Vec<Box<dyn ContentSource>> =
        vec![Box::new(BuiltinSource), Box::new(DirectorySource::new(dir.path()))];
    let bundle = load_all(&sources).await.unwrap();

    match RegistryBuilder::new().bundle(bundle).build() {
        Err(RegistryError::DuplicateTopicId { id }) => assert_eq!(id, "anatomy-adrenal-cortex"),
        other => panic!("expected duplicate id error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_malformed_pack_names_the_file() {
    let dir = TempDir::new().unwrap();
    write_pack(&dir, "broken.json", "{ \"topics\": [ { \"id\": 5 } ] }");

    let err = DirectorySource::new(dir.path()).load().await.unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
}

#[tokio::test]
async fn test_exported_registry_reloads_identically() {
    let registry = build_registry().unwrap();
    let dir = TempDir::new().unwrap();

    let export = RegistryExport::new(&registry).unwrap();
    let json = export.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["digest"], export.digest.as_str());
    assert!(value["exportedAt"].is_string());
    write_pack(&dir, "export.json", &json);

    let bundle = DirectorySource::new(dir.path()).load().await.unwrap();
    let reloaded = RegistryBuilder::new().bundle(bundle).build().unwrap();

    assert_eq!(reloaded.topics(), registry.topics());
    assert_eq!(reloaded.radiology(), registry.radiology());
    assert_eq!(reloaded.digest().unwrap(), export.digest);
}
