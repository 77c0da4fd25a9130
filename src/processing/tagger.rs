//! Part-of-speech tagging over the lexicon with shape and suffix heuristics

use crate::processing::lemmatizer::Lemmatizer;
use crate::processing::lexicon::LanguageModel;
use crate::processing::tokenizer::{Token, TokenKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Numeral,
    /// Stopwords: determiners, pronouns, prepositions, auxiliaries
    Function,
    Punctuation,
    Symbol,
}

impl PartOfSpeech {
    /// Categories selected as keywords.
    pub fn is_keyword_category(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Adjective
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub pos: PartOfSpeech,
}

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "ogy", "ics", "ure",
    "age", "er", "or",
];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ary", "ical", "al", "ic", "ant", "ent",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

pub struct Tagger<'a> {
    model: &'a LanguageModel,
    lemmatizer: Lemmatizer<'a>,
}

struct Context<'t> {
    prev_word: Option<String>,
    prev_tag: Option<PartOfSpeech>,
    token: &'t Token,
}

impl<'a> Tagger<'a> {
    pub fn new(model: &'a LanguageModel) -> Self {
        Self {
            model,
            lemmatizer: Lemmatizer::new(model),
        }
    }

    pub fn tag(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let (prev_word, prev_tag) = match tagged.last() {
                Some(prev) if !token.sentence_start => {
                    (Some(prev.token.text.to_lowercase()), Some(prev.pos))
                }
                _ => (None, None),
            };
            let pos = self.tag_token(&Context {
                prev_word,
                prev_tag,
                token: &token,
            });
            tagged.push(TaggedToken { token, pos });
        }

        tagged
    }

    fn tag_token(&self, ctx: &Context<'_>) -> PartOfSpeech {
        let token = ctx.token;
        match token.kind {
            TokenKind::Punctuation => return PartOfSpeech::Punctuation,
            TokenKind::Symbol => return PartOfSpeech::Symbol,
            TokenKind::Number => return PartOfSpeech::Numeral,
            TokenKind::Word => {}
        }

        let lower = token.text.to_lowercase();

        if self.model.is_stop_word(&lower) {
            return PartOfSpeech::Function;
        }

        let tags = self.model.lexical_tags(&lower);
        if !tags.is_empty() {
            return self.disambiguate(tags, ctx);
        }

        if let Some(pos) = self.inflected_tag(&lower, ctx) {
            return pos;
        }

        if let Some(pos) = shape_tag(token) {
            return pos;
        }

        if let Some(pos) = self.suffix_tag(&lower, ctx) {
            return pos;
        }

        PartOfSpeech::Noun
    }

    fn disambiguate(&self, tags: &[PartOfSpeech], ctx: &Context<'_>) -> PartOfSpeech {
        if tags.len() == 1 {
            return tags[0];
        }

        let prev = ctx.prev_word.as_deref();
        if prev.is_some_and(|w| self.model.is_noun_cue(w)) && tags.contains(&PartOfSpeech::Noun) {
            return PartOfSpeech::Noun;
        }
        if prev.is_some_and(|w| self.model.is_verb_cue(w)) && tags.contains(&PartOfSpeech::Verb) {
            return PartOfSpeech::Verb;
        }
        if ctx.prev_tag == Some(PartOfSpeech::Adjective) && tags.contains(&PartOfSpeech::Noun) {
            return PartOfSpeech::Noun;
        }
        // resume bullets and job duties open with a verb
        if ctx.token.sentence_start && tags.contains(&PartOfSpeech::Verb) {
            return PartOfSpeech::Verb;
        }
        tags[0]
    }

    /// Tag inflected forms whose base word the lexicon knows.
    fn inflected_tag(&self, lower: &str, ctx: &Context<'_>) -> Option<PartOfSpeech> {
        let as_verb = self.lemmatizer.known_candidate(lower, PartOfSpeech::Verb);
        let as_noun = self.lemmatizer.known_candidate(lower, PartOfSpeech::Noun);
        let after_noun_cue = ctx
            .prev_word
            .as_deref()
            .is_some_and(|w| self.model.is_noun_cue(w));

        if lower.ends_with("ing") || lower.ends_with("ed") {
            if as_verb.is_some() {
                return Some(if after_noun_cue && lower.ends_with("ing") {
                    PartOfSpeech::Noun
                } else {
                    PartOfSpeech::Verb
                });
            }
        } else if as_noun.is_some() {
            let after_verb_cue = ctx
                .prev_word
                .as_deref()
                .is_some_and(|w| self.model.is_verb_cue(w));
            return Some(if after_verb_cue && as_verb.is_some() {
                PartOfSpeech::Verb
            } else {
                PartOfSpeech::Noun
            });
        } else if as_verb.is_some() {
            return Some(PartOfSpeech::Verb);
        }

        self.lemmatizer
            .known_candidate(lower, PartOfSpeech::Adjective)
            .map(|_| PartOfSpeech::Adjective)
    }

    fn suffix_tag(&self, lower: &str, ctx: &Context<'_>) -> Option<PartOfSpeech> {
        if lower.chars().count() <= 4 {
            return None;
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Some(PartOfSpeech::Noun);
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Some(PartOfSpeech::Adjective);
        }
        if lower.ends_with("ly") {
            return Some(PartOfSpeech::Adverb);
        }
        if lower.ends_with("ing") {
            let after_noun_cue = ctx
                .prev_word
                .as_deref()
                .is_some_and(|w| self.model.is_noun_cue(w));
            return Some(if after_noun_cue {
                PartOfSpeech::Noun
            } else {
                PartOfSpeech::Verb
            });
        }
        if lower.ends_with("ed") || VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Some(PartOfSpeech::Verb);
        }
        None
    }
}

/// Proper nouns by surface shape: `AWS`, `Node.js`, `C++`, mid-sentence capitals.
fn shape_tag(token: &Token) -> Option<PartOfSpeech> {
    let text = token.text.as_str();
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();

    let has_inner_symbols = text
        .chars()
        .any(|c| !c.is_alphabetic() && c != '-' && c != '\'');
    let all_caps = letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase());
    let capitalized = text.chars().next().is_some_and(char::is_uppercase);

    if has_inner_symbols || all_caps || (capitalized && !token.sentence_start) {
        Some(PartOfSpeech::ProperNoun)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::tokenizer::tokenize;

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        let model = LanguageModel::bundled().unwrap();
        Tagger::new(&model)
            .tag(tokenize(text))
            .into_iter()
            .map(|t| (t.token.text, t.pos))
            .collect()
    }

    fn tag_of(tagged: &[(String, PartOfSpeech)], word: &str) -> PartOfSpeech {
        tagged
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, p)| *p)
            .unwrap_or_else(|| panic!("{word} not tagged"))
    }

    #[test]
    fn test_job_description_sentence() {
        let tagged = tags("Looking for a software engineer with Python and AWS experience.");
        assert_eq!(tag_of(&tagged, "Looking"), PartOfSpeech::Verb);
        assert_eq!(tag_of(&tagged, "for"), PartOfSpeech::Function);
        assert_eq!(tag_of(&tagged, "software"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "engineer"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "Python"), PartOfSpeech::ProperNoun);
        assert_eq!(tag_of(&tagged, "AWS"), PartOfSpeech::ProperNoun);
        assert_eq!(tag_of(&tagged, "experience"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "."), PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_resume_sentence() {
        let tagged = tags("Experienced software engineer skilled in Python and cloud systems.");
        assert_eq!(tag_of(&tagged, "Experienced"), PartOfSpeech::Adjective);
        assert_eq!(tag_of(&tagged, "skilled"), PartOfSpeech::Adjective);
        assert_eq!(tag_of(&tagged, "cloud"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "systems"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_context_disambiguation() {
        let tagged = tags("We design the design");
        assert_eq!(tagged[1], ("design".to_string(), PartOfSpeech::Verb));
        assert_eq!(tagged[3], ("design".to_string(), PartOfSpeech::Noun));
    }

    #[test]
    fn test_shapes_and_suffixes() {
        let tagged = tags("Deployed Node.js services with remarkable reliability quickly");
        assert_eq!(tag_of(&tagged, "Deployed"), PartOfSpeech::Verb);
        assert_eq!(tag_of(&tagged, "Node.js"), PartOfSpeech::ProperNoun);
        assert_eq!(tag_of(&tagged, "services"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "remarkable"), PartOfSpeech::Adjective);
        assert_eq!(tag_of(&tagged, "reliability"), PartOfSpeech::Noun);
        assert_eq!(tag_of(&tagged, "quickly"), PartOfSpeech::Adverb);
    }

    #[test]
    fn test_numbers_and_symbols() {
        let tagged = tags("5 years & more");
        assert_eq!(tag_of(&tagged, "5"), PartOfSpeech::Numeral);
        assert_eq!(tag_of(&tagged, "&"), PartOfSpeech::Symbol);
        assert_eq!(tag_of(&tagged, "years"), PartOfSpeech::Noun);
    }
}
