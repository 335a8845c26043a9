//! Rule-based named-entity recognition.
//!
//! Capitalized word runs are classified against gazetteers of known
//! organizations and locations, organization suffixes, person titles and
//! given names. A second pass tags bare surnames of people already found,
//! and a final case-insensitive gazetteer pass picks up locations outside
//! any capitalized run. Entity strings keep their surface form, so
//! `Paris` and `paris` are distinct entries.

mod gazetteer;
mod tokens;

use std::collections::HashSet;
use std::ops::Range;

use newsgauge_core::EntitySets;

use crate::analyzers::{AnalyzerError, EntityRecognizer};
use gazetteer::{
    AMBIGUOUS_LOCATIONS, DEMONYMS, FIRST_NAMES, FUNCTION_WORDS, KNOWN_ORGANIZATIONS, LOCATIONS,
    ORGANIZATION_PREFIXES, ORGANIZATION_SUFFIXES, PERSON_TITLES, SPAN_CONNECTORS,
};
use tokens::{tokenize, Token};

/// Longest location phrase, in words, probed by the gazetteer pass.
const MAX_LOCATION_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Person,
    Organization,
    Location,
}

/// Gazetteer-backed recognizer for people, organizations and places.
#[derive(Debug, Clone, Copy, Default)]
pub struct GazetteerRecognizer;

impl EntityRecognizer for GazetteerRecognizer {
    fn extract_entities(&self, text: &str) -> Result<EntitySets, AnalyzerError> {
        Ok(recognize(text))
    }
}

/// Extract people, organizations and locations from `text`.
///
/// Whitespace-only input yields three empty sets.
#[must_use]
pub fn recognize(text: &str) -> EntitySets {
    let mut sets = EntitySets::default();
    if text.trim().is_empty() {
        return sets;
    }

    let tokens = tokenize(text);
    let mut consumed = vec![false; tokens.len()];
    let mut unresolved: Vec<Range<usize>> = Vec::new();
    let mut surnames: HashSet<String> = HashSet::new();

    for span in capitalized_spans(&tokens) {
        match classify(&tokens, span.clone()) {
            Some((label, range)) => {
                if label == Label::Person {
                    surnames.insert(tokens[range.end - 1].lower.clone());
                }
                insert(&mut sets, label, surface(&tokens, range.clone()));
                consumed[range].iter_mut().for_each(|c| *c = true);
            }
            None => unresolved.push(span),
        }
    }

    for span in unresolved {
        if span.len() == 1 && surnames.contains(&tokens[span.start].lower) {
            insert(&mut sets, Label::Person, tokens[span.start].text.clone());
            consumed[span.start] = true;
        }
    }

    tag_gazetteer_locations(&tokens, &mut consumed, &mut sets);
    sets
}

fn insert(sets: &mut EntitySets, label: Label, entity: String) {
    let target = match label {
        Label::Person => &mut sets.people,
        Label::Organization => &mut sets.organizations,
        Label::Location => &mut sets.locations,
    };
    target.insert(entity);
}

fn surface(tokens: &[Token], range: Range<usize>) -> String {
    tokens[range]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_function_word(token: &Token) -> bool {
    FUNCTION_WORDS.contains(&token.lower.as_str()) && !token.is_acronym()
}

/// Maximal runs of capitalized tokens, joined across connectors such as
/// `of`, with leading and trailing function words trimmed.
fn capitalized_spans(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !tokens[i].is_capitalized() {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        while end < tokens.len() && !tokens[end - 1].possessive {
            let next = &tokens[end];
            if next.breaks_before {
                break;
            }
            if next.is_capitalized() {
                end += 1;
                continue;
            }
            let joins = SPAN_CONNECTORS.contains(&next.lower.as_str())
                && tokens.get(end + 1).is_some_and(|t| {
                    t.is_capitalized() && !t.breaks_before && !is_function_word(t)
                });
            if joins {
                end += 2;
                continue;
            }
            break;
        }
        i = end;

        let mut span = start..end;
        while !span.is_empty() && is_function_word(&tokens[span.start]) {
            span.start += 1;
        }
        while !span.is_empty() && is_function_word(&tokens[span.end - 1]) {
            span.end -= 1;
        }
        while !span.is_empty() && SPAN_CONNECTORS.contains(&tokens[span.start].lower.as_str()) {
            span.start += 1;
        }
        if !span.is_empty() {
            spans.push(span);
        }
    }

    spans
}

/// Label a capitalized span, returning the token range the label covers.
fn classify(tokens: &[Token], span: Range<usize>) -> Option<(Label, Range<usize>)> {
    let words = &tokens[span.clone()];
    let lower = words
        .iter()
        .map(|t| t.lower.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let first = words.first()?;
    let last = words.last()?;

    if KNOWN_ORGANIZATIONS.contains(&lower.as_str()) {
        // Short names like "WHO" or "AP" only count when written as acronyms.
        if words.len() > 1 || lower.len() > 3 || first.is_acronym() || lower == "fed" {
            return Some((Label::Organization, span));
        }
    }
    if LOCATIONS.contains(&lower.as_str()) && (lower.len() > 2 || first.is_acronym()) {
        return Some((Label::Location, span));
    }
    if words.len() >= 2 && ORGANIZATION_SUFFIXES.contains(&last.lower.as_str()) {
        return Some((Label::Organization, span));
    }
    if words.len() >= 3
        && ORGANIZATION_PREFIXES.contains(&first.lower.as_str())
        && words[1].lower == "of"
    {
        return Some((Label::Organization, span));
    }

    if let Some(title_at) = words
        .iter()
        .rposition(|t| PERSON_TITLES.contains(&t.lower.as_str()))
    {
        let name = span.start + title_at + 1..span.end;
        if !name.is_empty() && tokens[name.clone()].iter().all(is_name_like) {
            return Some((Label::Person, name));
        }
        return None;
    }

    if words.len() == 1 && first.is_acronym() {
        return Some((Label::Organization, span));
    }
    if words.len() >= 2 && FIRST_NAMES.contains(&first.lower.as_str()) {
        return Some((Label::Person, span));
    }
    if (2..=3).contains(&words.len())
        && words.iter().all(is_name_like)
        && !contains_location(words)
    {
        return Some((Label::Person, span));
    }

    None
}

/// Whether any run of `words` is a gazetteer location. Such spans are left
/// for the location pass rather than read as a personal name.
fn contains_location(words: &[Token]) -> bool {
    (0..words.len()).any(|start| {
        (start + 1..=words.len().min(start + MAX_LOCATION_WORDS)).any(|end| {
            let phrase = words[start..end]
                .iter()
                .map(|t| t.lower.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            phrase.len() > 2 && LOCATIONS.contains(&phrase.as_str())
        })
    })
}

fn is_name_like(token: &Token) -> bool {
    token.is_capitalized()
        && !token.is_acronym()
        && !DEMONYMS.contains(&token.lower.as_str())
        && !FUNCTION_WORDS.contains(&token.lower.as_str())
        && !PERSON_TITLES.contains(&token.lower.as_str())
        && token
            .text
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '-' | '.'))
}

/// Case-insensitive location lookup over tokens not claimed by another
/// entity. Ambiguous names must be capitalized; two-letter codes must be
/// upper-case.
fn tag_gazetteer_locations(tokens: &[Token], consumed: &mut [bool], sets: &mut EntitySets) {
    let mut i = 0;
    'outer: while i < tokens.len() {
        for n in (1..=MAX_LOCATION_WORDS).rev() {
            let end = i + n;
            if end > tokens.len()
                || consumed[i..end].iter().any(|c| *c)
                || tokens[i + 1..end].iter().any(|t| t.breaks_before)
            {
                continue;
            }

            let phrase = tokens[i..end]
                .iter()
                .map(|t| t.lower.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if !LOCATIONS.contains(&phrase.as_str()) {
                continue;
            }
            let head = &tokens[i];
            if AMBIGUOUS_LOCATIONS.contains(&phrase.as_str()) && !head.is_capitalized() {
                continue;
            }
            if phrase.len() <= 2 && !head.is_acronym() {
                continue;
            }

            insert(sets, Label::Location, surface(tokens, i..end));
            consumed[i..end].iter_mut().for_each(|c| *c = true);
            i = end;
            continue 'outer;
        }
        i += 1;
    }
}
