//! Text normalization, keyword extraction and match scoring

pub mod analyzer;
pub mod document;
pub mod keywords;
pub mod lemmatizer;
pub mod lexicon;
pub mod normalizer;
pub mod similarity;
pub mod tagger;
pub mod tokenizer;
pub mod vectorizer;

pub use analyzer::{AnalysisOutcome, DegenerateInput, DocumentAnalysis, MatchAnalyzer, MatchResult};
pub use document::{Document, DocumentRole, KeywordSet, NormalizedText};
pub use normalizer::Normalizer;
