//! The linguistic model: stopwords, lemma exceptions, part-of-speech word
//! lists and the skill gazetteer.
//!
//! A `LanguageModel` is loaded once at startup and never mutated afterwards,
//! so it can be shared between analyses behind an `Arc` without locking.

use crate::config::NlpConfig;
use crate::error::{MatcherError, Result};
use crate::processing::tagger::PartOfSpeech;
use log::{debug, info};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

const BUNDLED_LEXICON: &str = include_str!("../../data/en_lexicon.toml");

#[derive(Debug, Deserialize)]
struct LexiconFile {
    name: String,
    #[serde(default)]
    version: Option<String>,
    stop_words: Vec<String>,
    #[serde(default)]
    noun_cues: Vec<String>,
    #[serde(default)]
    verb_cues: Vec<String>,
    #[serde(default)]
    lemma_exceptions: BTreeMap<String, String>,
    #[serde(default)]
    pos: PosLists,
    #[serde(default)]
    skills: SkillLists,
}

#[derive(Debug, Default, Deserialize)]
struct PosLists {
    #[serde(default)]
    nouns: Vec<String>,
    #[serde(default)]
    verbs: Vec<String>,
    #[serde(default)]
    adjectives: Vec<String>,
    #[serde(default)]
    adverbs: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SkillLists {
    #[serde(default)]
    technical: Vec<String>,
    #[serde(default)]
    soft: Vec<String>,
    #[serde(default)]
    role: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LanguageModel {
    name: String,
    stop_words: HashSet<String>,
    noun_cues: HashSet<String>,
    verb_cues: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
    word_tags: HashMap<String, Vec<PartOfSpeech>>,
    skills: Vec<String>,
}

impl LanguageModel {
    /// Load the lexicon compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_LEXICON, "bundled lexicon")
    }

    /// Load the lexicon the config names, bundled by default, with its extensions applied.
    pub fn from_config(config: &NlpConfig) -> Result<Self> {
        let model = match &config.lexicon_path {
            Some(path) => {
                info!("Loading lexicon from {}", path.display());
                Self::from_path(path)?
            }
            None => Self::bundled()?,
        };
        Ok(model
            .with_extra_stop_words(&config.extra_stop_words)
            .with_extra_skills(&config.extra_skills))
    }

    /// Load an external lexicon file in the bundled TOML layout.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatcherError::ModelUnavailable(format!(
                "Failed to read lexicon '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content).map_err(|e| {
            MatcherError::ModelUnavailable(format!("Failed to parse {}: {}", origin, e))
        })?;

        if file.stop_words.is_empty() {
            return Err(MatcherError::ModelUnavailable(format!(
                "{} defines no stopwords",
                origin
            )));
        }

        let mut word_tags: HashMap<String, Vec<PartOfSpeech>> = HashMap::new();
        let lists = [
            (&file.pos.nouns, PartOfSpeech::Noun),
            (&file.pos.verbs, PartOfSpeech::Verb),
            (&file.pos.adjectives, PartOfSpeech::Adjective),
            (&file.pos.adverbs, PartOfSpeech::Adverb),
        ];
        for (words, tag) in lists {
            for word in words {
                let tags = word_tags.entry(word.to_lowercase()).or_default();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        let mut model = Self {
            name: file.name,
            stop_words: lowercase_set(&file.stop_words),
            noun_cues: lowercase_set(&file.noun_cues),
            verb_cues: lowercase_set(&file.verb_cues),
            lemma_exceptions: file
                .lemma_exceptions
                .into_iter()
                .map(|(form, lemma)| (form.to_lowercase(), lemma.to_lowercase()))
                .collect(),
            word_tags,
            skills: Vec::new(),
        };

        let skills = file
            .skills
            .technical
            .into_iter()
            .chain(file.skills.soft)
            .chain(file.skills.role);
        model = model.with_extra_skills(skills);

        debug!(
            "Loaded language model '{}' (version {}): {} stopwords, {} lexicon entries, {} skills",
            model.name,
            file.version.as_deref().unwrap_or("unversioned"),
            model.stop_words.len(),
            model.word_tags.len(),
            model.skills.len()
        );

        Ok(model)
    }

    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn with_extra_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills.extend(
            skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self.skills.sort();
        self.skills.dedup();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive stopword test.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Lexicon tags for a lowercase word, in list order (nouns first).
    pub fn lexical_tags(&self, word: &str) -> &[PartOfSpeech] {
        self.word_tags.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_known(&self, word: &str, tag: PartOfSpeech) -> bool {
        self.lexical_tags(word).contains(&tag)
    }

    pub fn lemma_exception(&self, word: &str) -> Option<&str> {
        self.lemma_exceptions.get(word).map(String::as_str)
    }

    pub fn is_noun_cue(&self, word: &str) -> bool {
        self.noun_cues.contains(word)
    }

    pub fn is_verb_cue(&self, word: &str) -> bool {
        self.verb_cues.contains(word)
    }

    /// Lowercase skill phrases, sorted and deduplicated.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
