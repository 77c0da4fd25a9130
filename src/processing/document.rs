//! Document structures flowing through one analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Resume => write!(f, "resume"),
            DocumentRole::JobDescription => write!(f, "job_description"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub role: DocumentRole,
    pub text: String,
    /// Where the text came from, for reports
    pub source: Option<String>,
}

impl Document {
    pub fn new(role: DocumentRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            source: None,
        }
    }

    pub fn resume(text: impl Into<String>) -> Self {
        Self::new(DocumentRole::Resume, text)
    }

    pub fn job_description(text: impl Into<String>) -> Self {
        Self::new(DocumentRole::JobDescription, text)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The first `max_chars` characters, cut at a word boundary when possible.
    pub fn preview(&self, max_chars: usize) -> String {
        truncate_text(&self.text, max_chars)
    }
}

/// Ordered lowercase lemmas with stopwords and punctuation removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedText {
    lemmas: Vec<String>,
}

impl NormalizedText {
    pub fn new(lemmas: Vec<String>) -> Self {
        Self { lemmas }
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Space-joined lemmas.
    pub fn as_text(&self) -> String {
        self.lemmas.join(" ")
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Salient surface forms of a document, case-folded on insertion.
///
/// Case folding is the single case policy for keyword comparison, so `AWS`
/// and `aws` are the same keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, keyword: &str) -> bool {
        let folded = keyword.trim().to_lowercase();
        if folded.is_empty() {
            return false;
        }
        self.keywords.insert(folded)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(&keyword.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Keywords in `self` that `other` lacks.
    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet {
            keywords: self.keywords.difference(&other.keywords).cloned().collect(),
        }
    }

    pub fn is_subset(&self, other: &KeywordSet) -> bool {
        self.keywords.is_subset(&other.keywords)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.keywords.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

/// Truncate text to a maximum number of characters with an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let truncated = &text[..cut];
    // Avoid cutting a word in half
    let end = truncated.rfind(char::is_whitespace).unwrap_or(cut);
    format!("{}...", text[..end].trim_end())
}
