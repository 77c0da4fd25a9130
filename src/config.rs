//! Configuration management for the resume matcher

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nlp: NlpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    pub keyword_strategy: KeywordStrategy,
    /// External lexicon replacing the bundled one
    pub lexicon_path: Option<PathBuf>,
    pub extra_stop_words: Vec<String>,
    pub extra_skills: Vec<String>,
}

/// How keywords are selected for the gap analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordStrategy {
    /// Nouns, proper nouns and adjectives
    #[default]
    PartOfSpeech,
    /// Skill gazetteer matches, falling back to `PartOfSpeech`
    SkillEntity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub preview_chars: usize,
    pub session_log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
    Text,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            keyword_strategy: KeywordStrategy::PartOfSpeech,
            lexicon_path: None,
            extra_stop_words: Vec::new(),
            extra_skills: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
            preview_chars: 500,
            session_log: None,
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            MatcherError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.nlp.keyword_strategy, KeywordStrategy::PartOfSpeech);
        assert_eq!(config.output.format, OutputFormat::Console);
        assert_eq!(config.output.preview_chars, 500);
        assert!(config.nlp.lexicon_path.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.nlp.keyword_strategy = KeywordStrategy::SkillEntity;
        config.nlp.extra_skills = vec!["terraform cloud".to_string()];
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndetailed = true\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.output.detailed);
        assert_eq!(loaded.output.preview_chars, 500);
        assert_eq!(loaded.nlp, NlpConfig::default());
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output\nformat = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatcherError::Configuration(_)));
    }
}
