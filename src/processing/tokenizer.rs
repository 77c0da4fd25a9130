//! Word-boundary tokenization using Unicode segmentation

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Symbol,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Byte offset into the source text
    pub offset: usize,
    pub sentence_start: bool,
}

impl Token {
    fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self.kind, TokenKind::Punctuation | TokenKind::Symbol)
    }
}

/// Split text into word, number, punctuation and symbol tokens.
///
/// Whitespace is dropped and a line break starts a new sentence. Tech names
/// keep their suffixes (`C++`, `C#`) and hyphenated compounds stay whole.
/// A possessive `'s` becomes its own token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence_start = true;

    for (offset, piece) in text.split_word_bound_indices() {
        if piece.trim().is_empty() {
            // resume lines are independent units
            if piece.contains('\n') {
                sentence_start = true;
            }
            continue;
        }

        let kind = classify(piece);

        if (piece == "+" || piece == "#") && glue_suffix(&tokens, offset, text, piece) {
            if let Some(last) = tokens.last_mut() {
                last.text.push_str(piece);
            }
            continue;
        }

        if kind == TokenKind::Word {
            if let Some(base) = strip_possessive(piece) {
                tokens.push(Token {
                    text: base.to_string(),
                    kind,
                    offset,
                    sentence_start,
                });
                tokens.push(Token {
                    text: "'s".to_string(),
                    kind: TokenKind::Word,
                    offset: offset + base.len(),
                    sentence_start: false,
                });
                sentence_start = false;
                continue;
            }
        }

        tokens.push(Token {
            text: piece.to_string(),
            kind,
            offset,
            sentence_start: sentence_start && !matches!(kind, TokenKind::Punctuation),
        });

        match kind {
            TokenKind::Punctuation if matches!(piece, "." | "!" | "?" | "\u{2026}") => {
                sentence_start = true
            }
            TokenKind::Punctuation | TokenKind::Symbol => {}
            _ => sentence_start = false,
        }
    }

    join_hyphenated(tokens)
}

fn classify(piece: &str) -> TokenKind {
    if piece.chars().any(char::is_alphabetic) {
        TokenKind::Word
    } else if piece.chars().any(char::is_numeric) {
        TokenKind::Number
    } else if piece.chars().all(is_punctuation_char) {
        TokenKind::Punctuation
    } else {
        TokenKind::Symbol
    }
}

fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}'
            | '-' | '_' | '/' | '\\' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'
            | '\u{2013}' | '\u{2014}' | '\u{2026}' | '\u{2022}' | '\u{00B7}'
    )
}

/// `+` and `#` glue onto an adjacent word when no letter or digit follows.
fn glue_suffix(tokens: &[Token], offset: usize, text: &str, piece: &str) -> bool {
    let Some(last) = tokens.last() else {
        return false;
    };
    if last.kind != TokenKind::Word || last.end() != offset {
        return false;
    }
    text[offset + piece.len()..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn strip_possessive(word: &str) -> Option<&str> {
    ["'s", "\u{2019}s", "'S", "\u{2019}S"]
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|base| !base.is_empty())
}

fn join_hyphenated(tokens: Vec<Token>) -> Vec<Token> {
    let mut joined: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let is_hyphen = token.text == "-";
        let follows_word = joined
            .last()
            .is_some_and(|prev| prev.kind == TokenKind::Word && prev.end() == token.offset);
        let precedes_word = iter
            .peek()
            .is_some_and(|next| next.kind == TokenKind::Word && next.offset == token.end());

        if is_hyphen && follows_word && precedes_word {
            if let (Some(prev), Some(next)) = (joined.last_mut(), iter.next()) {
                prev.text.push('-');
                prev.text.push_str(&next.text);
            }
            continue;
        }
        joined.push(token);
    }

    joined
}
