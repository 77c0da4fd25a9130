//! Keyword selection strategies for the gap analysis

use crate::config::KeywordStrategy;
use crate::error::{MatcherError, Result};
use crate::processing::document::KeywordSet;
use crate::processing::lexicon::LanguageModel;
use crate::processing::tagger::TaggedToken;
use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, warn};

/// Selects the salient terms of one document.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str, tagged: &[TaggedToken]) -> KeywordSet;

    fn strategy(&self) -> KeywordStrategy;
}

/// Surface forms tagged as nouns, proper nouns or adjectives.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartOfSpeechKeywords;

impl KeywordExtractor for PartOfSpeechKeywords {
    fn extract(&self, _text: &str, tagged: &[TaggedToken]) -> KeywordSet {
        tagged
            .iter()
            .filter(|t| t.pos.is_keyword_category())
            .map(|t| t.token.text.as_str())
            .collect()
    }

    fn strategy(&self) -> KeywordStrategy {
        KeywordStrategy::PartOfSpeech
    }
}

/// Skill gazetteer matches on word boundaries.
///
/// A document without any skill mention falls back to part-of-speech
/// keywords, so the gap analysis never silently goes empty.
pub struct SkillEntityKeywords {
    matcher: Option<AhoCorasick>,
    fallback: PartOfSpeechKeywords,
}

impl SkillEntityKeywords {
    pub fn new(model: &LanguageModel) -> Result<Self> {
        let skills = model.skills();
        if skills.is_empty() {
            warn!("Skill gazetteer is empty, skill extraction will use part-of-speech keywords");
            return Ok(Self {
                matcher: None,
                fallback: PartOfSpeechKeywords,
            });
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(skills)
            .map_err(|e| {
                MatcherError::ModelUnavailable(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            matcher: Some(matcher),
            fallback: PartOfSpeechKeywords,
        })
    }

    fn find_skills(&self, text: &str) -> KeywordSet {
        let Some(matcher) = &self.matcher else {
            return KeywordSet::new();
        };

        matcher
            .find_iter(text)
            .filter(|m| on_word_boundary(text, m.start(), m.end()))
            .map(|m| &text[m.start()..m.end()])
            .collect()
    }
}

impl KeywordExtractor for SkillEntityKeywords {
    fn extract(&self, text: &str, tagged: &[TaggedToken]) -> KeywordSet {
        let skills = self.find_skills(text);
        if skills.is_empty() && !text.trim().is_empty() {
            warn!("No skill entities found, falling back to part-of-speech keywords");
            return self.fallback.extract(text, tagged);
        }
        debug!("Found {} skill entities", skills.len());
        skills
    }

    fn strategy(&self) -> KeywordStrategy {
        KeywordStrategy::SkillEntity
    }
}

pub fn extractor_for(
    strategy: KeywordStrategy,
    model: &LanguageModel,
) -> Result<Box<dyn KeywordExtractor>> {
    Ok(match strategy {
        KeywordStrategy::PartOfSpeech => Box::new(PartOfSpeechKeywords),
        KeywordStrategy::SkillEntity => Box::new(SkillEntityKeywords::new(model)?),
    })
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric() && c != '+' && c != '#');
    before_ok && after_ok
}
