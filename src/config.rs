use anyhow::{Context, Result};
use globset::Glob;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IngestConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("../data/notion_export")
}
fn default_output_path() -> PathBuf {
    PathBuf::from("../data/processed/documents.json")
}
fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

impl Config {
    /// Apply `--input` / `--output` overrides from the command line.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.ingest.input_dir = input;
        }
        if let Some(output) = output {
            self.ingest.output_path = output;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let ingest = &self.ingest;
        if ingest.include_globs.is_empty() {
            anyhow::bail!("ingest.include_globs must not be empty");
        }
        for pattern in ingest.include_globs.iter().chain(&ingest.exclude_globs) {
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;
        }
        if ingest.output_path.is_dir() {
            anyhow::bail!(
                "ingest.output_path is a directory: {}",
                ingest.output_path.display()
            );
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
