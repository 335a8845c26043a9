//! Word tokenizer for entity recognition.

use std::sync::OnceLock;

use regex::Regex;

use super::gazetteer::{ORGANIZATION_SUFFIXES, PERSON_TITLES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// Surface form with sentence punctuation and possessives removed.
    pub text: String,
    pub lower: String,
    /// Punctuation (or a sentence boundary) separates this token from the
    /// previous one.
    pub breaks_before: bool,
    /// Ended in `'s`; a span never continues past it.
    pub possessive: bool,
}

impl Token {
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Two or more letters, all upper-case (`NATO`, `U.S.`).
    pub fn is_acronym(&self) -> bool {
        let letters: Vec<char> = self.text.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= 2
            && letters.len() <= 6
            && letters.iter().all(|c| c.is_uppercase())
            && self.text.chars().all(|c| c.is_alphabetic() || c == '.' || c == '&')
    }
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'’.&\-]*").expect("valid entity word regex")
    })
}

fn initialism_regex() -> &'static Regex {
    static INITIALISM: OnceLock<Regex> = OnceLock::new();
    INITIALISM.get_or_init(|| Regex::new(r"^(?:\p{L}\.)+$").expect("valid initialism regex"))
}

/// Split `text` into word tokens.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut prev_end = 0;
    let mut prev_ended_sentence = true;

    for m in word_regex().find_iter(text) {
        let gap = &text[prev_end..m.start()];
        prev_end = m.end();

        let breaks_before = prev_ended_sentence
            || gap.contains("\n\n")
            || gap.chars().any(|c| !c.is_whitespace());

        let mut raw = m.as_str();
        let mut ended_sentence = false;
        if raw.ends_with('.') && !keeps_trailing_period(raw) {
            raw = raw.trim_end_matches('.');
            ended_sentence = true;
        }
        raw = raw.trim_end_matches(['\'', '’', '-']);

        let mut possessive = false;
        for suffix in ["'s", "’s"] {
            if let Some(stripped) = raw.strip_suffix(suffix) {
                raw = stripped;
                possessive = true;
                break;
            }
        }

        prev_ended_sentence = ended_sentence || gap_ends_sentence(&text[m.end()..]);
        if raw.is_empty() {
            continue;
        }

        tokens.push(Token {
            text: raw.to_owned(),
            lower: raw.to_lowercase(),
            breaks_before,
            possessive,
        });
    }

    tokens
}

/// Initialisms, single initials and abbreviated titles keep their period
/// and do not end a sentence.
fn keeps_trailing_period(raw: &str) -> bool {
    if initialism_regex().is_match(raw) {
        return true;
    }
    let lower = raw.to_lowercase();
    PERSON_TITLES.contains(&lower.as_str()) || ORGANIZATION_SUFFIXES.contains(&lower.as_str())
}

/// Whether the punctuation run right after a token ends the sentence.
fn gap_ends_sentence(rest: &str) -> bool {
    rest.chars()
        .take_while(|c| !c.is_alphanumeric())
        .any(|c| matches!(c, '!' | '?'))
}
