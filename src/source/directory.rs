//! Content packs loaded from a directory.
//!
//! Every `*.json`, `*.yaml` and `*.yml` file directly inside the directory
//! is parsed as a `ContentBundle`. Files are read in sorted path order so
//! registry order is stable across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use glob::Pattern;
use tokio::fs;

use super::{ContentBundle, ContentSource};

const PACK_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// A directory of JSON/YAML content packs
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pack files in the directory, sorted by path
    pub fn pack_files(&self) -> Result<Vec<PathBuf>> {
        let escaped = Pattern::escape(&self.root.to_string_lossy());
        let mut files = Vec::new();

        for ext in PACK_EXTENSIONS {
            let pattern = format!("{}/*.{}", escaped, ext);
            let paths = glob::glob(&pattern)
                .with_context(|| format!("Invalid content pack pattern: {}", pattern))?;
            for path in paths {
                let path = path.context("Failed to read content pack path")?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Parse one pack file by extension
pub async fn load_pack(path: &Path) -> Result<ContentBundle> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read content pack: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse content pack JSON: {}", path.display())),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse content pack YAML: {}", path.display())),
        _ => anyhow::bail!("Unsupported content pack format: {}", path.display()),
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<ContentBundle> {
        if !self.root.is_dir() {
            anyhow::bail!("Content directory not found: {}", self.root.display());
        }

        let mut bundle = ContentBundle::default();
        for path in self.pack_files()? {
            let pack = load_pack(&path).await?;
            tracing::debug!(
                path = %path.display(),
                topics = pack.topics.len(),
                modalities = pack.modalities.len(),
                radiology = pack.radiology.len(),
                "Loaded content pack"
            );
            bundle.merge(pack);
        }

        Ok(bundle)
    }
}
