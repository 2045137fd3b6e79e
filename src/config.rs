//! Configuration for medlearn.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDLEARN_HOME, MEDLEARN_CONTENT_DIR)
//! 2. Config file (.medlearn/config.yaml)
//! 3. Defaults (~/.medlearn, builtin content only)
//!
//! Packs placed in `$MEDLEARN_HOME/packs` are loaded before any configured
//! content directory.
//!
//! Config file discovery:
//! - Searches current directory and parents for .medlearn/config.yaml
//! - Content directories in the config file are relative to the project
//!   root (the parent of .medlearn/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::registry::DanglingPolicy;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .medlearn/)
    pub home: Option<String>,
    /// Content pack directories (relative to the project root)
    #[serde(default)]
    pub content_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub include_builtin: Option<bool>,
    pub dangling_policy: Option<DanglingPolicy>,
    pub search_limit: Option<usize>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to medlearn home (holds user-level packs)
    pub home: PathBuf,
    /// Content pack directories, in load order
    pub content_dirs: Vec<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Content loading settings
    pub content: ContentSettings,
}

impl ResolvedConfig {
    /// User-level pack directory under home
    pub fn home_pack_dir(&self) -> PathBuf {
        self.home.join("packs")
    }

    /// Directories to load, in order: the home pack directory (if present),
    /// then configured content directories
    pub fn pack_dirs(&self) -> Vec<PathBuf> {
        let home_packs = self.home_pack_dir();
        let mut dirs = Vec::with_capacity(self.content_dirs.len() + 1);
        if home_packs.is_dir() && !self.content_dirs.contains(&home_packs) {
            dirs.push(home_packs);
        }
        dirs.extend(self.content_dirs.iter().cloned());
        dirs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSettings {
    pub include_builtin: bool,
    pub dangling_policy: DanglingPolicy,
    /// Maximum rows printed by search commands
    pub search_limit: usize,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            include_builtin: true,
            dangling_policy: DanglingPolicy::default(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl ContentSettings {
    fn from_config(config: Option<&ContentConfig>) -> Self {
        let defaults = Self::default();
        match config {
            Some(c) => Self {
                include_builtin: c.include_builtin.unwrap_or(defaults.include_builtin),
                dangling_policy: c.dangling_policy.unwrap_or(defaults.dangling_policy),
                search_limit: c.search_limit.unwrap_or(defaults.search_limit),
            },
            None => defaults,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".medlearn").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Content directories from MEDLEARN_CONTENT_DIR (platform path-list syntax)
fn env_content_dirs() -> Option<Vec<PathBuf>> {
    std::env::var_os("MEDLEARN_CONTENT_DIR")
        .map(|value| std::env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()).collect())
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".medlearn");

    let config_file = find_config_file();

    let (home, content_dirs, content) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // .medlearn/ and the project root above it
        let medlearn_dir = config_path.parent().unwrap_or(Path::new("."));
        let base_dir = medlearn_dir.parent().unwrap_or(Path::new("."));

        let home = if let Ok(env_home) = std::env::var("MEDLEARN_HOME") {
            PathBuf::from(env_home)
        } else if let Some(ref home_path) = config.paths.home {
            resolve_path(medlearn_dir, home_path)
        } else {
            default_home.clone()
        };

        let content_dirs = env_content_dirs().unwrap_or_else(|| {
            config
                .paths
                .content_dirs
                .iter()
                .map(|dir| resolve_path(base_dir, dir))
                .collect()
        });

        let content = ContentSettings::from_config(config.content.as_ref());

        (home, content_dirs, content)
    } else {
        let home = std::env::var("MEDLEARN_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_home.clone());

        let content_dirs = env_content_dirs().unwrap_or_default();

        (home, content_dirs, ContentSettings::default())
    };

    Ok(ResolvedConfig {
        home,
        content_dirs,
        config_file,
        content,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let medlearn_dir = temp.path().join(".medlearn");
        std::fs::create_dir_all(&medlearn_dir).unwrap();

        let config_path = medlearn_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  home: ./
  content_dirs:
    - content/packs
    - /srv/medlearn/shared
content:
  include_builtin: false
  dangling_policy: deny
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.home, Some("./".to_string()));
        assert_eq!(config.paths.content_dirs.len(), 2);

        let settings = ContentSettings::from_config(config.content.as_ref());
        assert!(!settings.include_builtin);
        assert_eq!(settings.dangling_policy, DanglingPolicy::Deny);
        assert_eq!(settings.search_limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_minimal_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(&config_path, "version: \"1.0\"\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.paths.content_dirs.is_empty());
        assert_eq!(
            ContentSettings::from_config(config.content.as_ref()),
            ContentSettings::default()
        );
    }

    #[test]
    fn test_invalid_dangling_policy_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        std::fs::write(
            &config_path,
            "version: \"1.0\"\ncontent:\n  dangling_policy: ignore\n",
        )
        .unwrap();

        assert!(load_config_file(&config_path).is_err());
    }

    #[test]
    fn test_home_pack_dir_loaded_first_when_present() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("shared");
        let config = ResolvedConfig {
            home: temp.path().join("home"),
            content_dirs: vec![shared.clone()],
            config_file: None,
            content: ContentSettings::default(),
        };

        assert_eq!(config.pack_dirs(), vec![shared.clone()]);

        std::fs::create_dir_all(config.home_pack_dir()).unwrap();
        assert_eq!(config.pack_dirs(), vec![config.home_pack_dir(), shared]);
    }

    #[test]
    fn test_home_pack_dir_not_duplicated() {
        let temp = TempDir::new().unwrap();
        let home = temp.path().to_path_buf();
        std::fs::create_dir_all(home.join("packs")).unwrap();
        let config = ResolvedConfig {
            home: home.clone(),
            content_dirs: vec![home.join("packs")],
            config_file: None,
            content: ContentSettings::default(),
        };

        assert_eq!(config.pack_dirs(), vec![home.join("packs")]);
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
