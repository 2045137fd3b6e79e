//! Command-line interface for medlearn.
//!
//! Provides commands for searching the radiology database, browsing
//! topics and cross-references, validating content and exporting the
//! registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{self, ContentSettings};
use crate::domain::{
    ClinicalRelevance, ComplexityLevel, ContentType, EducationalContent, Exam, LevelContent,
    RadiologyCategory, RadiologyEntry,
};
use crate::registry::{Registry, RegistryBuilder, Severity};
use crate::source::{load_all, BuiltinSource, ContentBundle, ContentSource, DirectorySource};

/// medlearn - Multi-level medical education content registry
#[derive(Parser, Debug)]
#[command(name = "medlearn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub content: ContentArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where registry content comes from
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Extra content pack directory (repeatable)
    #[arg(long = "content-dir", global = true, value_name = "DIR")]
    pub content_dirs: Vec<PathBuf>,

    /// Skip the compiled-in content
    #[arg(long, global = true)]
    pub no_builtin: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search radiology entries (case-insensitive substring)
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List radiology entries in one or more categories
    Category {
        /// Categories to include
        #[arg(value_enum, required = true)]
        categories: Vec<CategoryArg>,
    },

    /// Show a radiology entry
    Entry {
        /// Entry ID (e.g., "cxr-pneumothorax")
        id: String,
    },

    /// Show a topic at all levels or one level
    Topic {
        /// Topic ID (e.g., "anatomy-adrenal-cortex")
        id: String,

        /// Complexity level (1-5)
        #[arg(short, long)]
        level: Option<ComplexityLevel>,
    },

    /// List topics, optionally filtered by tags
    Topics {
        /// Body system (e.g., "endocrine")
        #[arg(short, long)]
        system: Option<String>,

        /// Exam: usmle, nbme, or shelf:<name>
        #[arg(short, long)]
        exam: Option<Exam>,

        /// Minimum clinical relevance
        #[arg(short, long, value_enum)]
        relevance: Option<RelevanceArg>,

        /// Content type
        #[arg(short = 't', long = "type", value_enum)]
        content_type: Option<TopicTypeArg>,

        /// Substring query over names, keywords and summaries
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show outgoing and incoming cross-references of a topic
    Refs {
        /// Topic ID
        id: String,

        /// Also list topics reachable within this many hops
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Validate all content and print the report
    Validate {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Show registry counts and digest
    Stats,

    /// Export the registry as a JSON content pack
    Export {
        /// Output file (prints to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Radiology category for CLI (maps to RadiologyCategory)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
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

impl From<CategoryArg> for RadiologyCategory {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::ChestXray => RadiologyCategory::ChestXray,
            CategoryArg::AbdominalXray => RadiologyCategory::AbdominalXray,
            CategoryArg::CtInterpretation => RadiologyCategory::CtInterpretation,
            CategoryArg::MriInterpretation => RadiologyCategory::MriInterpretation,
            CategoryArg::Ultrasound => RadiologyCategory::Ultrasound,
            CategoryArg::ContrastStudies => RadiologyCategory::ContrastStudies,
            CategoryArg::RadiationSafety => RadiologyCategory::RadiationSafety,
            CategoryArg::Interventional => RadiologyCategory::Interventional,
            CategoryArg::MusculoskeletalImaging => RadiologyCategory::MusculoskeletalImaging,
        }
    }
}

/// Content type for CLI (maps to ContentType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TopicTypeArg {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl From<TopicTypeArg> for ContentType {
    fn from(t: TopicTypeArg) -> Self {
        match t {
            TopicTypeArg::Structure => ContentType::Structure,
            TopicTypeArg::System => ContentType::System,
            TopicTypeArg::Pathway => ContentType::Pathway,
            TopicTypeArg::Process => ContentType::Process,
            TopicTypeArg::Condition => ContentType::Condition,
            TopicTypeArg::Concept => ContentType::Concept,
            TopicTypeArg::Topic => ContentType::Topic,
        }
    }
}

/// Clinical relevance for CLI (maps to ClinicalRelevance)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RelevanceArg {
    Low,
    Medium,
    High,
    Critical,
}

impl From<RelevanceArg> for ClinicalRelevance {
    fn from(r: RelevanceArg) -> Self {
        match r {
            RelevanceArg::Low => ClinicalRelevance::Low,
            RelevanceArg::Medium => ClinicalRelevance::Medium,
            RelevanceArg::High => ClinicalRelevance::High,
            RelevanceArg::Critical => ClinicalRelevance::Critical,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config(&self.content);
        }

        let registry = load_registry(&self.content).await?;

        match self.command {
            Commands::Search { query, limit } => search_entries(&registry, &query, limit),
            Commands::Category { categories } => list_category(&registry, &categories),
            Commands::Entry { id } => show_entry(&registry, &id),
            Commands::Topic { id, level } => show_topic(&registry, &id, level),
            Commands::Topics {
                system,
                exam,
                relevance,
                content_type,
                query,
            } => {
                let filter = TopicFilter {
                    system,
                    exam,
                    relevance: relevance.map(Into::into),
                    content_type: content_type.map(Into::into),
                    query,
                };
                list_topics(&registry, &filter)
            }
            Commands::Refs { id, depth } => show_refs(&registry, &id, depth),
            Commands::Validate { strict } => validate(&registry, strict),
            Commands::Stats => show_stats(&registry),
            Commands::Export { output } => export(&registry, output).await,
            Commands::Config => Ok(()),
        }
    }
}

/// Collect sources from config and flags, then build the registry
pub async fn load_registry(args: &ContentArgs) -> Result<Registry> {
    let cfg = config::config()?;
    load_registry_with(&cfg.content, &cfg.pack_dirs(), args).await
}

/// Build the registry from explicit settings: builtin content (unless
/// disabled by either layer), then configured directories, then flag
/// directories
pub async fn load_registry_with(
    settings: &ContentSettings,
    config_dirs: &[PathBuf],
    args: &ContentArgs,
) -> Result<Registry> {
    let mut sources: Vec<Box<dyn ContentSource>> = Vec::new();
    if settings.include_builtin && !args.no_builtin {
        sources.push(Box::new(BuiltinSource));
    }
    for dir in config_dirs.iter().chain(args.content_dirs.iter()) {
        sources.push(Box::new(DirectorySource::new(dir)));
    }

    let bundle = load_all(&sources).await?;
    RegistryBuilder::new()
        .bundle(bundle)
        .dangling_policy(settings.dangling_policy)
        .build()
        .context("Failed to build registry")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn print_entry_table(entries: &[&RadiologyEntry]) {
    println!("{:<28} {:<24} {:<40}", "ID", "CATEGORY", "NAME");
    println!("{}", "-".repeat(92));

    for entry in entries {
        println!(
            "{:<28} {:<24} {:<40}",
            entry.id,
            entry.category.to_string(),
            truncate(&entry.name, 40)
        );
    }
}

/// Search radiology entries
fn search_entries(registry: &Registry, query: &str, limit: Option<usize>) -> Result<()> {
    let limit = match limit {
        Some(limit) => limit,
        None => config::config()?.content.search_limit,
    };

    let results = registry.radiology().search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    let shown = &results[..results.len().min(limit)];
    print_entry_table(shown);

    if shown.len() < results.len() {
        println!("\n({} more not shown, use --limit)", results.len() - shown.len());
    }

    Ok(())
}

/// List entries in the given categories
fn list_category(registry: &Registry, categories: &[CategoryArg]) -> Result<()> {
    let categories: Vec<RadiologyCategory> = categories.iter().map(|&c| c.into()).collect();
    let results = registry.radiology().filter_by_category(&categories);

    if results.is_empty() {
        println!("No entries in the selected categories");
        return Ok(());
    }

    print_entry_table(&results);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

/// Show a single radiology entry
fn show_entry(registry: &Registry, id: &str) -> Result<()> {
    let entry = registry
        .radiology()
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Radiology entry not found: {}", id))?;

    println!("{}", entry.name);
    println!("{}", "=".repeat(entry.name.chars().count()));
    println!("ID:       {}", entry.id);
    println!("Category: {}", entry.category);
    println!("\n{}", entry.description);
    println!("\nTechnique:\n  {}", entry.technique);
    println!("\nNormal appearance:\n  {}", entry.normal_appearance);
    print_list("Abnormal findings", &entry.abnormal_findings);
    print_list("Differential diagnosis", &entry.differential_diagnosis);
    println!("\nClinical correlation:\n  {}", entry.clinical_correlation);
    print_list("Key pearls", &entry.key_pearls);
    print_list("References", &entry.references);

    Ok(())
}

fn print_level(content: &LevelContent) {
    println!("\n--- Level {} ---", content.level);
    println!("{}", content.summary);
    println!("\n{}", content.explanation);

    if !content.key_terms.is_empty() {
        println!("\nKey terms:");
        for term in &content.key_terms {
            match &term.pronunciation {
                Some(p) => println!("  {} ({}): {}", term.term, p, term.definition),
                None => println!("  {}: {}", term.term, term.definition),
            }
        }
    }
    print_list("Analogies", &content.analogies);
    print_list("Examples", &content.examples);
    if let Some(notes) = &content.clinical_notes {
        println!("\nClinical notes: {}", notes);
    }
    print_list("Patient counseling", &content.patient_counseling_points);
}

/// Show a topic at all levels or one level
fn show_topic(registry: &Registry, id: &str, level: Option<ComplexityLevel>) -> Result<()> {
    let topic = registry
        .topic(id)
        .ok_or_else(|| anyhow::anyhow!("Topic not found: {}", id))?;

    println!("{}", topic.name);
    println!("{}", "=".repeat(topic.name.chars().count()));
    println!("ID:      {}", topic.id);
    println!("Type:    {}", topic.content_type);
    if let Some(name_es) = &topic.name_es {
        println!("Spanish: {}", name_es);
    }
    if !topic.alternate_names.is_empty() {
        println!("Also:    {}", topic.alternate_names.join(", "));
    }
    println!("Systems: {}", topic.tags.systems.join(", "));
    println!("Relevance: {}", topic.tags.clinical_relevance);
    println!("Version: {} ({:?})", topic.version, topic.status);

    if let Some(imaging) = registry.imaging_profile(id) {
        println!(
            "Imaging: {:?}, radiation {:?}{}",
            imaging.modality,
            imaging.radiation_exposure,
            imaging
                .typical_effective_dose_msv
                .map(|d| format!(", ~{} mSv", d))
                .unwrap_or_default()
        );
    }

    match level {
        Some(level) => {
            let content = topic
                .level(level)
                .ok_or_else(|| anyhow::anyhow!("Topic {} has no level {}", id, level))?;
            print_level(content);
        }
        None => topic.levels.values().for_each(print_level),
    }

    Ok(())
}

/// Tag-axis filters for the topics command (all optional, combined with AND)
#[derive(Debug, Default)]
pub struct TopicFilter {
    pub system: Option<String>,
    pub exam: Option<Exam>,
    pub relevance: Option<ClinicalRelevance>,
    pub content_type: Option<ContentType>,
    pub query: Option<String>,
}

impl TopicFilter {
    /// Apply the filters, keeping registry order
    pub fn apply<'a>(&self, registry: &'a Registry) -> Vec<&'a EducationalContent> {
        let mut topics: Vec<&EducationalContent> = match &self.query {
            Some(query) => registry.search_topics(query),
            None => registry.topics().iter().collect(),
        };

        if let Some(system) = &self.system {
            topics.retain(|t| t.tags.has_system(system));
        }
        if let Some(exam) = &self.exam {
            topics.retain(|t| t.tags.exam_relevance.covers(exam));
        }
        if let Some(relevance) = self.relevance {
            topics.retain(|t| t.tags.clinical_relevance >= relevance);
        }
        if let Some(content_type) = self.content_type {
            topics.retain(|t| t.content_type == content_type);
        }

        topics
    }
}

/// List topics matching the filters
fn list_topics(registry: &Registry, filter: &TopicFilter) -> Result<()> {
    let topics = filter.apply(registry);

    if topics.is_empty() {
        println!("No topics match");
        return Ok(());
    }

    println!("{:<34} {:<10} {:<10} {:<36}", "ID", "TYPE", "RELEVANCE", "NAME");
    println!("{}", "-".repeat(92));

    for topic in topics {
        println!(
            "{:<34} {:<10} {:<10} {:<36}",
            topic.id,
            topic.content_type.to_string(),
            topic.tags.clinical_relevance.to_string(),
            truncate(&topic.name, 36)
        );
    }

    Ok(())
}

/// Show cross-references of a topic
fn show_refs(registry: &Registry, id: &str, depth: Option<usize>) -> Result<()> {
    if registry.topic(id).is_none() {
        anyhow::bail!("Topic not found: {}", id);
    }

    let graph = registry.graph();

    println!("Outgoing:");
    let outgoing = graph.outgoing(id);
    if outgoing.is_empty() {
        println!("  (none)");
    }
    for edge in outgoing {
        let marker = if edge.resolved { "" } else { "  [dangling]" };
        println!(
            "  {:<10} -> {:<34} {}{}",
            edge.relationship.to_string(),
            edge.target,
            edge.label,
            marker
        );
    }

    println!("\nIncoming:");
    let incoming = graph.incoming(id);
    if incoming.is_empty() {
        println!("  (none)");
    }
    for edge in incoming {
        println!("  {:<10} <- {}", edge.relationship.to_string(), edge.source);
    }

    if let Some(depth) = depth {
        println!("\nReachable within {} hop(s):", depth);
        for target in graph.reachable(id, depth) {
            println!("  {}", target);
        }
    }

    Ok(())
}

/// Print the validation report; fail on errors (or warnings when strict)
fn validate(registry: &Registry, strict: bool) -> Result<()> {
    let report = registry.validate();

    for issue in &report.issues {
        let tag = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        println!(
            "[{}] {:<34} {:<16} {}",
            tag,
            issue.topic_id,
            issue.category.to_string(),
            issue.message
        );
    }

    println!(
        "\nChecked {} topic(s): {} error(s), {} warning(s)",
        report.topics_checked,
        report.error_count(),
        report.warning_count()
    );

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.error_count());
    }
    if strict && !report.is_clean() {
        anyhow::bail!(
            "Validation failed in strict mode with {} warning(s)",
            report.warning_count()
        );
    }

    Ok(())
}

/// Show registry counts and digest
fn show_stats(registry: &Registry) -> Result<()> {
    let types = [
        ContentType::Structure,
        ContentType::System,
        ContentType::Pathway,
        ContentType::Process,
        ContentType::Condition,
        ContentType::Concept,
        ContentType::Topic,
    ];

    println!("Topics: {}", registry.topics().len());
    for content_type in types {
        let count = registry.topics_by_type(content_type).len();
        if count > 0 {
            println!("  {:<24} {}", content_type.to_string(), count);
        }
    }
    println!("  {:<24} {}", "(with imaging profile)", registry.modalities().count());

    println!("\nRadiology entries: {}", registry.radiology().len());
    for (category, count) in registry.radiology().category_counts() {
        println!("  {:<24} {}", category.as_str(), count);
    }

    let graph = registry.graph();
    println!("\nCross-references: {}", graph.edge_count());
    println!("  {:<24} {}", "dangling", graph.dangling().len());

    println!("\nDigest: {}", registry.digest()?);

    Ok(())
}

/// JSON export document: a loadable content pack plus provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryExport {
    pub digest: String,
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub bundle: ContentBundle,
}

impl RegistryExport {
    /// Snapshot the registry now
    pub fn new(registry: &Registry) -> Result<Self> {
        Ok(Self {
            digest: registry.digest()?,
            exported_at: Utc::now(),
            bundle: registry.to_bundle(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize registry")
    }
}

/// Export the registry as JSON
async fn export(registry: &Registry, output: Option<PathBuf>) -> Result<()> {
    let document = RegistryExport::new(registry)?;
    let json = document.to_json()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            eprintln!("Exported registry to {} ({})", path.display(), document.digest);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Show resolved configuration (debug)
fn show_config(args: &ContentArgs) -> Result<()> {
    let cfg = config::config()?;

    println!("medlearn configuration");
    println!("{}", "-".repeat(40));
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Home:        {}", cfg.home.display());
    println!();
    println!("Content:");
    println!(
        "  Builtin:         {}",
        cfg.content.include_builtin && !args.no_builtin
    );
    println!("  Dangling policy: {}", cfg.content.dangling_policy);
    println!("  Search limit:    {}", cfg.content.search_limit);
    println!();
    println!("Content directories:");
    let pack_dirs = cfg.pack_dirs();
    if pack_dirs.is_empty() && args.content_dirs.is_empty() {
        println!("  (none)");
    }
    for dir in pack_dirs.iter().chain(args.content_dirs.iter()) {
        println!("  {}", dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{build_registry, DanglingPolicy};
    use tempfile::TempDir;

    fn pack_dir(entry_id: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let pack = format!(
            r#"{{"radiology": [{{
                "id": "{}",
                "name": "Pack entry {}",
                "category": "ultrasound",
                "description": "Entry loaded from a content pack",
                "technique": "Linear transducer",
                "normalAppearance": "Normal",
                "clinicalCorrelation": "None"
            }}]}}"#,
            entry_id, entry_id
        );
        std::fs::write(dir.path().join("pack.json"), pack).unwrap();
        dir
    }

    fn radiology_ids(registry: &Registry) -> Vec<&str> {
        registry.radiology().entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_no_builtin_flag_loads_only_packs() {
        let dir = pack_dir("us-pack-entry");
        let args = ContentArgs {
            content_dirs: vec![dir.path().to_path_buf()],
            no_builtin: true,
        };

        let registry = load_registry_with(&ContentSettings::default(), &[], &args)
            .await
            .unwrap();

        assert_eq!(radiology_ids(&registry), vec!["us-pack-entry"]);
        assert!(registry.radiology().get("cxr-pneumothorax").is_none());
        assert!(registry.topics().is_empty());
    }

    #[tokio::test]
    async fn test_builtin_content_precedes_pack_dirs() {
        let dir = pack_dir("us-pack-entry");
        let args = ContentArgs {
            content_dirs: vec![dir.path().to_path_buf()],
            no_builtin: false,
        };

        let registry = load_registry_with(&ContentSettings::default(), &[], &args)
            .await
            .unwrap();

        let ids = radiology_ids(&registry);
        assert_eq!(ids.len(), build_registry().unwrap().radiology().len() + 1);
        assert_eq!(ids.last(), Some(&"us-pack-entry"));
        assert!(registry.radiology().get("cxr-pneumothorax").is_some());
        assert_eq!(registry.topics().len(), 7);
    }

    #[tokio::test]
    async fn test_config_settings_apply() {
        let configured = pack_dir("us-configured");
        let flagged = pack_dir("us-flagged");
        let args = ContentArgs {
            content_dirs: vec![flagged.path().to_path_buf()],
            no_builtin: false,
        };

        // include_builtin = false in config wins even without the flag
        let settings = ContentSettings {
            include_builtin: false,
            ..Default::default()
        };
        let registry = load_registry_with(&settings, &[configured.path().to_path_buf()], &args)
            .await
            .unwrap();
        assert_eq!(radiology_ids(&registry), vec!["us-configured", "us-flagged"]);

        let settings = ContentSettings {
            dangling_policy: DanglingPolicy::Deny,
            ..Default::default()
        };
        let err = load_registry_with(&settings, &[], &ContentArgs::default())
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("dangling cross-reference"));
    }

    #[tokio::test]
    async fn test_missing_pack_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let args = ContentArgs {
            content_dirs: vec![temp.path().join("missing")],
            no_builtin: true,
        };

        assert!(load_registry_with(&ContentSettings::default(), &[], &args)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_load_registry_honors_flags() {
        let dir = pack_dir("us-pack-entry");
        let args = ContentArgs {
            content_dirs: vec![dir.path().to_path_buf()],
            no_builtin: true,
        };

        let registry = load_registry(&args).await.unwrap();
        assert!(registry.radiology().get("us-pack-entry").is_some());
        assert!(registry.radiology().get("cxr-pneumothorax").is_none());
    }

    #[test]
    fn test_cli_parses_global_content_args() {
        let cli = Cli::parse_from([
            "medlearn",
            "search",
            "pneumothorax",
            "--content-dir",
            "/tmp/a",
            "--content-dir",
            "/tmp/b",
            "--no-builtin",
        ]);

        assert_eq!(cli.content.content_dirs.len(), 2);
        assert!(cli.content.no_builtin);
        assert!(matches!(
            cli.command,
            Commands::Search { ref query, .. } if query == "pneumothorax"
        ));
    }

    #[test]
    fn test_cli_parses_topic_level_and_filters() {
        let cli = Cli::parse_from(["medlearn", "topic", "anatomy-adrenal-cortex", "--level", "3"]);
        match cli.command {
            Commands::Topic { level, .. } => assert_eq!(level.map(|l| l.get()), Some(3)),
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["medlearn", "topic", "x", "--level", "6"]).is_err());

        let cli = Cli::parse_from([
            "medlearn", "topics", "--exam", "shelf:surgery", "--type", "structure",
        ]);
        match cli.command {
            Commands::Topics { exam, content_type, .. } => {
                assert_eq!(exam, Some(Exam::Shelf("surgery".to_string())));
                assert!(matches!(content_type, Some(TopicTypeArg::Structure)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_category_requires_a_value() {
        assert!(Cli::try_parse_from(["medlearn", "category"]).is_err());
        let cli = Cli::parse_from(["medlearn", "category", "chest-xray", "ultrasound"]);
        assert!(matches!(
            cli.command,
            Commands::Category { ref categories } if categories.len() == 2
        ));
    }

    #[test]
    fn test_topic_filter_combines_with_and() {
        let registry = build_registry().unwrap();

        let filter = TopicFilter {
            system: Some("endocrine".to_string()),
            relevance: Some(ClinicalRelevance::Critical),
            ..Default::default()
        };
        let ids: Vec<&str> = filter.apply(&registry).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["anatomy-adrenal-cortex", "anatomy-thyroid-gland", "pathway-hpa-axis"]
        );

        let filter = TopicFilter {
            exam: Some(Exam::Shelf("surgery".to_string())),
            ..Default::default()
        };
        assert_eq!(filter.apply(&registry).len(), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer name", 8), "a lon...");
    }
}
