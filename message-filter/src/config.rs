use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing;

pub const CONFIG_FILE_NAME: &str = "filter.toml";

/// Seed configuration for an embedding application.
///
/// ```toml
/// [words]
/// banned = ["spam", "scam"]
/// files = ["lists/ru.txt"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub words: WordsConfig,
}

impl FilterConfig {
    /// Load `root/filter.toml`, falling back to defaults if it does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut cfg = if path.exists() {
            Self::read(&path)?
        } else {
            tracing::info!(
                "No config file found at {}. Using FilterConfig::default().",
                path.display()
            );
            FilterConfig::default()
        };
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    /// Load an explicit config file. Relative word-list paths resolve against
    /// the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut cfg = Self::read(path)?;
        let root = path.parent().unwrap_or_else(|| Path::new(""));
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str::<FilterConfig>(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    fn resolve_paths(&mut self, root: &Path) {
        for file in &mut self.words.files {
            *file = absolutize(root, file);
        }
    }

    /// Inline words followed by the contents of every word file, in order.
    pub fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.banned.clone();
        for file in &self.words.files {
            words.extend(read_word_list(file)?);
        }
        Ok(words)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsConfig {
    #[serde(default)]
    pub banned: Vec<String>,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Read a word list: one word per line, blank lines and `#` comments skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    Ok(parse_word_list(&text))
}

pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn absolutize(root: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}
