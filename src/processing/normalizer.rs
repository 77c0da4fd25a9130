//! Text normalization: stopword and punctuation removal plus lemmatization

use crate::config::{KeywordStrategy, NlpConfig};
use crate::error::Result;
use crate::processing::document::{KeywordSet, NormalizedText};
use crate::processing::keywords::{extractor_for, KeywordExtractor};
use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::LanguageModel;
use crate::processing::tagger::{PartOfSpeech, TaggedToken, Tagger};
use crate::processing::tokenizer::tokenize;
use log::debug;
use std::sync::Arc;

/// Holds the loaded language model and keyword strategy.
///
/// Cloning is cheap and clones share the same read-only model, so one
/// `Normalizer` can serve any number of concurrent analyses.
#[derive(Clone)]
pub struct Normalizer {
    model: Arc<LanguageModel>,
    keywords: Arc<dyn KeywordExtractor>,
}

impl Normalizer {
    pub fn new(model: Arc<LanguageModel>, strategy: KeywordStrategy) -> Result<Self> {
        let keywords: Arc<dyn KeywordExtractor> = Arc::from(extractor_for(strategy, &model)?);
        Ok(Self { model, keywords })
    }

    /// Load the model named by the config and apply its extensions.
    ///
    /// Any failure here is `ModelUnavailable` and should abort startup.
    pub fn from_config(config: &NlpConfig) -> Result<Self> {
        let model = LanguageModel::from_config(config)?;
        Self::new(Arc::new(model), config.keyword_strategy)
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    pub fn strategy(&self) -> KeywordStrategy {
        self.keywords.strategy()
    }

    /// Lemmas in source order, lowercased, without stopwords or punctuation.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.lemmatize_tagged(&self.tag(text))
    }

    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        let tagged = self.tag(text);
        self.keywords.extract(text, &tagged)
    }

    /// Normalize and extract keywords with a single tagging pass.
    pub fn process(&self, text: &str) -> (NormalizedText, KeywordSet) {
        let tagged = self.tag(text);
        let keywords = self.keywords.extract(text, &tagged);
        (self.lemmatize_tagged(&tagged), keywords)
    }

    fn lemmatize_tagged(&self, tagged: &[TaggedToken]) -> NormalizedText {
        let lemmatizer = Lemmatizer::new(&self.model);

        let lemmas: Vec<String> = tagged
            .iter()
            .filter(|t| {
                !matches!(
                    t.pos,
                    PartOfSpeech::Function | PartOfSpeech::Punctuation | PartOfSpeech::Symbol
                )
            })
            .map(|t| lemmatizer.lemmatize(&t.token.text, t.pos))
            .collect();

        debug!(
            "Normalized {} tokens into {} lemmas",
            tagged.len(),
            lemmas.len()
        );
        NormalizedText::new(lemmas)
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        Tagger::new(&self.model).tag(tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(
            Arc::new(LanguageModel::bundled().unwrap()),
            KeywordStrategy::PartOfSpeech,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_removes_stopwords_and_punctuation() {
        let normalized = normalizer()
            .normalize("Looking for a software engineer with Python and AWS experience.");
        assert_eq!(
            normalized.as_text(),
            "look software engineer python aws experience"
        );
    }

    #[test]
    fn test_normalize_lemmatizes_in_order() {
        let normalized = normalizer().normalize("Managed teams, running deployments!");
        assert_eq!(normalized.lemmas(), ["manage", "team", "run", "deployment"]);
    }

    #[test]
    fn test_empty_input() {
        let n = normalizer();
        assert!(n.normalize("").is_empty());
        assert!(n.normalize("  \n ").is_empty());
        assert!(n.extract_keywords("").is_empty());
    }

    #[test]
    fn test_stopwords_only() {
        assert!(normalizer().normalize("The and of it, is.").is_empty());
    }

    #[test]
    fn test_process_matches_separate_calls() {
        let n = normalizer();
        let text = "Experienced software engineer skilled in Python and cloud systems.";
        let (normalized, keywords) = n.process(text);
        assert_eq!(normalized, n.normalize(text));
        assert_eq!(keywords, n.extract_keywords(text));
    }

    #[test]
    fn test_from_config_applies_extensions() {
        let config = NlpConfig {
            extra_stop_words: vec!["python".to_string()],
            ..NlpConfig::default()
        };
        let n = Normalizer::from_config(&config).unwrap();
        assert_eq!(n.normalize("Python developer").as_text(), "developer");
        assert_eq!(n.strategy(), KeywordStrategy::PartOfSpeech);
    }
}
