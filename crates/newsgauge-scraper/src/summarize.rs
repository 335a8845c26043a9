//! Extractive summarizer.
//!
//! Scores every sentence by keyword density, overlap with the title,
//! length and position, keeps the best `max_sentences` and emits them in
//! their original order.

use std::collections::{HashMap, HashSet};

/// Words ignored when computing keywords and title overlap.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "said", "same", "says", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sen", "rep", "gov", "gen", "lt", "col", "sgt", "st", "jr",
    "sr", "inc", "corp", "co", "ltd", "vs", "no", "u.s", "u.k", "u.n", "jan", "feb", "mar", "apr",
    "aug", "sept", "sep", "oct", "nov", "dec",
];

const KEYWORD_COUNT: usize = 10;
const IDEAL_SENTENCE_WORDS: f64 = 20.0;

/// Summarize `text` into at most `max_sentences` sentences.
///
/// Sentences are joined with newlines. Text with no more sentences than the
/// limit is returned as its sentences unchanged.
#[must_use]
pub fn summarize(title: &str, text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if max_sentences == 0 || sentences.is_empty() {
        return String::new();
    }
    if sentences.len() <= max_sentences {
        return sentences.join("\n");
    }

    let keywords = top_keywords(text);
    let title_words: HashSet<String> = content_words(title).collect();

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, score_sentence(s, i, sentences.len(), &keywords, &title_words)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    let mut keep: Vec<usize> = scored.into_iter().take(max_sentences).map(|(i, _)| i).collect();
    keep.sort_unstable();

    keep.into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text into trimmed sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace and an
/// upper-case letter, digit or opening quote, unless the period closes a
/// known abbreviation or a single initial.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        current.push(c);

        if matches!(c, '.' | '!' | '?') {
            // Absorb closing quotes/brackets and repeated terminators.
            while i + 1 < chars.len()
                && matches!(chars[i + 1], '"' | '\'' | ')' | '”' | '’' | '.' | '!' | '?')
            {
                i += 1;
                current.push(chars[i]);
            }

            let mut j = i + 1;
            let mut saw_space = false;
            while j < chars.len() && chars[j].is_whitespace() {
                saw_space = true;
                j += 1;
            }
            let next_starts_sentence = j >= chars.len()
                || (saw_space
                    && (chars[j].is_uppercase()
                        || chars[j].is_ascii_digit()
                        || matches!(chars[j], '"' | '“' | '\'' | '‘')));

            if next_starts_sentence && !(c == '.' && ends_with_abbreviation(&current)) {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        } else if c == '\n' && i + 1 < chars.len() && chars[i + 1] == '\n' {
            // Paragraph breaks always end a sentence.
            push_sentence(&mut sentences, &current);
            current.clear();
        }
        i += 1;
    }
    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let sentence = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if sentence.chars().any(char::is_alphanumeric) {
        out.push(sentence);
    }
}

fn ends_with_abbreviation(current: &str) -> bool {
    let trimmed = current.trim_end_matches(['.', '"', '\'', ')', '”', '’']);
    let last = trimmed
        .rsplit(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or("");
    if last.chars().count() == 1 && last.chars().all(char::is_uppercase) {
        return true;
    }
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

fn content_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| w.chars().count() > 2 && !STOPWORDS.contains(&w.as_str()))
}

/// The most frequent content words, weighted by relative frequency.
#[allow(clippy::cast_precision_loss)]
fn top_keywords(text: &str) -> HashMap<String, f64> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in content_words(text) {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(KEYWORD_COUNT);

    let max = ranked.first().map_or(1, |(_, n)| *n).max(1);
    ranked
        .into_iter()
        .map(|(word, n)| (word, n as f64 / max as f64))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn score_sentence(
    sentence: &str,
    index: usize,
    total: usize,
    keywords: &HashMap<String, f64>,
    title_words: &HashSet<String>,
) -> f64 {
    let words: Vec<String> = content_words(sentence).collect();
    if words.is_empty() {
        return 0.0;
    }

    let keyword_score: f64 =
        words.iter().filter_map(|w| keywords.get(w)).sum::<f64>() / words.len() as f64;

    let title_score = if title_words.is_empty() {
        0.0
    } else {
        let unique: HashSet<&String> = words.iter().collect();
        unique.iter().filter(|w| title_words.contains(**w)).count() as f64
            / title_words.len() as f64
    };

    let word_count = sentence.split_whitespace().count() as f64;
    let length_score =
        (1.0 - (IDEAL_SENTENCE_WORDS - word_count).abs() / IDEAL_SENTENCE_WORDS).max(0.0);

    let relative = index as f64 / total.max(1) as f64;
    let position_score = 1.0 - relative * 0.8;

    keyword_score * 2.0 + title_score * 1.5 + length_score * 0.5 + position_score
}
