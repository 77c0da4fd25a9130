//! Rule-based lemmatization validated against the lexicon

use crate::processing::lexicon::LanguageModel;
use crate::processing::tagger::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ves", "f"),
    ("sses", "ss"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("s", ""),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ied", "y"),
    ("es", ""),
    ("es", "e"),
    ("s", ""),
    ("ing", ""),
    ("ing", "e"),
    ("ed", ""),
    ("ed", "e"),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("iest", "y"),
    ("ier", "y"),
    ("est", ""),
    ("est", "e"),
    ("er", ""),
    ("er", "e"),
];

/// Stem endings that lost a silent `e` (`automat-ing`, `configur-ed`).
const SILENT_E_ENDINGS: &[&str] = &["at", "ut", "ur", "iz", "is", "bl", "ys", "v", "c", "g"];

pub struct Lemmatizer<'a> {
    model: &'a LanguageModel,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(model: &'a LanguageModel) -> Self {
        Self { model }
    }

    /// Reduce a word to its lowercase dictionary form for the given tag.
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        let lower = word.to_lowercase();

        if !matches!(
            pos,
            PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Adjective
        ) {
            return lower;
        }

        if let Some(lemma) = self.model.lemma_exception(&lower) {
            return lemma.to_string();
        }

        if self.model.is_known(&lower, pos) {
            return lower;
        }

        if let Some(known) = self.known_candidate(&lower, pos) {
            return known;
        }

        match pos {
            PartOfSpeech::Noun => noun_heuristic(&lower),
            PartOfSpeech::Verb => verb_heuristic(&lower),
            _ => lower,
        }
    }

    /// First rule output the lexicon knows under `pos`.
    pub fn known_candidate(&self, lower: &str, pos: PartOfSpeech) -> Option<String> {
        let rules = match pos {
            PartOfSpeech::Noun => NOUN_RULES,
            PartOfSpeech::Verb => VERB_RULES,
            PartOfSpeech::Adjective => ADJECTIVE_RULES,
            _ => return None,
        };

        for (suffix, replacement) in rules {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < 2 {
                continue;
            }

            let candidate = format!("{}{}", stem, replacement);
            if self.model.is_known(&candidate, pos) {
                return Some(candidate);
            }

            if pos == PartOfSpeech::Verb && replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    if self.model.is_known(undoubled, pos) {
                        return Some(undoubled.to_string());
                    }
                }
            }
        }

        None
    }
}

fn noun_heuristic(lower: &str) -> String {
    if lower.chars().count() <= 3 || lower.ends_with("'s") {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

fn verb_heuristic(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ied").or_else(|| lower.strip_suffix("ies")) {
        if stem.chars().count() >= 2 {
            return format!("{}y", stem);
        }
    }

    for suffix in ["ing", "ed"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.chars().count() >= 2 && stem.chars().any(is_vowel) {
                return restore_stem(stem);
            }
        }
    }

    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && lower.chars().count() > 3 {
        return lower[..lower.len() - 1].to_string();
    }

    lower.to_string()
}

/// Undo consonant doubling or restore a dropped silent `e`.
fn restore_stem(stem: &str) -> String {
    if let Some(undoubled) = undouble(stem) {
        return undoubled.to_string();
    }

    let needs_e = SILENT_E_ENDINGS.iter().any(|ending| {
        stem.ends_with(ending) && !(ending.len() == 2 && vowel_before(stem, ending.len()))
    }) && !stem.ends_with("ic")
        && !stem.ends_with("ng");

    if needs_e || is_short_cvc(stem) {
        format!("{}e", stem)
    } else {
        stem.to_string()
    }
}

fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

fn vowel_before(stem: &str, ending_len: usize) -> bool {
    stem[..stem.len() - ending_len]
        .chars()
        .last()
        .is_some_and(is_vowel)
}

/// A single-syllable consonant-vowel-consonant stem such as `mak` or `writ`.
fn is_short_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let n = chars.len();
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    let vowel_groups = chars
        .windows(2)
        .filter(|w| !is_vowel(w[0]) && is_vowel(w[1]))
        .count()
        + usize::from(is_vowel(chars[0]));

    !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y') && vowel_groups == 1
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
