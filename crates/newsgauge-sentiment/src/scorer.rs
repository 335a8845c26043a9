//! Rule-based compound polarity scorer for news text.
//!
//! Word valences sit on a `[-4.0, 4.0]` scale. Each matched word is adjusted
//! for emphasis (ALL CAPS), preceding intensifiers and preceding negations;
//! clauses after "but" outweigh those before it. The summed valence is
//! normalized with `x / sqrt(x^2 + 15)` into `[-1.0, 1.0]`.

use crate::analyzers::{AnalyzerError, SentimentAnalyzer};

/// Bumped whenever [`LEXICON`] or the scoring rules change; scores are only
/// comparable within one version.
pub const LEXICON_VERSION: u32 = 1;

/// Word valences. Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("accomplish", 1.8),
    ("achievement", 2.1),
    ("advance", 1.3),
    ("agree", 1.5),
    ("agreement", 1.5),
    ("applaud", 2.0),
    ("approve", 1.9),
    ("approved", 1.8),
    ("benefit", 1.7),
    ("best", 3.2),
    ("better", 1.9),
    ("boost", 1.5),
    ("breakthrough", 2.3),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("celebrated", 2.7),
    ("champion", 2.4),
    ("confident", 2.2),
    ("cooperation", 1.6),
    ("deal", 0.8),
    ("effective", 2.1),
    ("encouraging", 2.4),
    ("excellent", 3.2),
    ("fair", 1.3),
    ("gain", 1.6),
    ("gains", 1.6),
    ("good", 1.9),
    ("great", 3.1),
    ("growth", 1.6),
    ("happy", 2.7),
    ("help", 1.7),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("innovative", 1.9),
    ("landmark", 1.5),
    ("lead", 0.9),
    ("like", 1.5),
    ("love", 3.2),
    ("optimistic", 2.3),
    ("pass", 0.8),
    ("passed", 0.9),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("popular", 1.8),
    ("positive", 2.3),
    ("praise", 2.6),
    ("praised", 2.6),
    ("progress", 1.8),
    ("prosperity", 2.4),
    ("protect", 1.6),
    ("rally", 1.0),
    ("recover", 1.5),
    ("recovery", 1.4),
    ("reform", 0.9),
    ("relief", 2.1),
    ("resolve", 1.6),
    ("safe", 1.9),
    ("secure", 1.4),
    ("strong", 2.3),
    ("strengthen", 1.8),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supported", 1.5),
    ("surge", 0.9),
    ("thrive", 2.4),
    ("triumph", 2.8),
    ("trust", 2.3),
    ("unity", 1.9),
    ("victory", 2.8),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    // Negative
    ("abuse", -3.2),
    ("accuse", -1.9),
    ("accused", -1.9),
    ("allegation", -1.6),
    ("angry", -2.3),
    ("attack", -2.1),
    ("attacked", -2.1),
    ("bad", -2.5),
    ("ban", -2.6),
    ("blame", -1.4),
    ("blamed", -1.4),
    ("block", -1.1),
    ("blocked", -1.2),
    ("chaos", -2.7),
    ("collapse", -2.2),
    ("concern", -1.4),
    ("concerns", -1.4),
    ("conflict", -1.3),
    ("controversial", -1.4),
    ("corrupt", -3.0),
    ("corruption", -3.1),
    ("crash", -1.7),
    ("crisis", -3.1),
    ("criticism", -1.9),
    ("criticize", -1.6),
    ("criticized", -1.7),
    ("cut", -1.1),
    ("cuts", -1.1),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("decline", -1.1),
    ("defeat", -2.0),
    ("deficit", -1.0),
    ("delay", -1.3),
    ("delayed", -1.4),
    ("deny", -1.4),
    ("dispute", -1.7),
    ("disaster", -3.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("fears", -2.0),
    ("fraud", -2.8),
    ("fight", -1.6),
    ("guilty", -1.8),
    ("harm", -2.5),
    ("hate", -2.7),
    ("illegal", -2.6),
    ("impasse", -1.3),
    ("indicted", -2.2),
    ("investigation", -0.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lawsuit", -1.3),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("oppose", -0.9),
    ("outrage", -2.3),
    ("poor", -2.1),
    ("problem", -1.7),
    ("protest", -1.0),
    ("recession", -2.1),
    ("reject", -1.7),
    ("rejected", -1.7),
    ("resign", -1.1),
    ("risk", -1.1),
    ("scandal", -2.9),
    ("shortage", -1.5),
    ("shutdown", -2.0),
    ("slump", -1.7),
    ("struggle", -1.5),
    ("threat", -2.4),
    ("threaten", -2.1),
    ("terrible", -3.2),
    ("tragedy", -3.4),
    ("turmoil", -2.2),
    ("uncertain", -1.2),
    ("unrest", -1.8),
    ("violence", -3.1),
    ("violent", -2.9),
    ("war", -2.9),
    ("warn", -1.4),
    ("warning", -1.4),
    ("weak", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
];

/// Words scaling the valence of a following lexicon word.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("strongly", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "cannot",
    "cant", "can't", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt",
    "wasn't", "wasnt", "aren't", "arent", "won't", "wont", "wouldn't", "shouldn't", "couldn't",
    "hasn't", "haven't", "hadn't",
];

const NEGATION_SCALAR: f64 = -0.74;
const CAPS_INCREMENT: f64 = 0.733;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;

/// Lexicon scorer exposed as a [`SentimentAnalyzer`] service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn version(&self) -> u32 {
        LEXICON_VERSION
    }
}

impl SentimentAnalyzer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64, AnalyzerError> {
        Ok(lexicon_score(text))
    }
}

/// Score a text string with the news lexicon.
///
/// Returns a compound score clamped to `[-1.0, 1.0]`; `0.0` for empty text
/// or text with no lexicon words.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let raw: Vec<&str> = text.split_whitespace().collect();
    let words: Vec<String> = raw.iter().map(|w| normalize_word(w)).collect();
    if words.iter().all(String::is_empty) {
        return 0.0;
    }

    let shouting_everywhere = raw
        .iter()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .all(|w| is_all_caps(w));

    let mut valences: Vec<f64> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let Some(base) = lookup(word) else {
            valences.push(0.0);
            continue;
        };
        let mut valence = base;

        if !shouting_everywhere && is_all_caps(raw[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for (distance, decay) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            let Some(prev) = i.checked_sub(distance).map(|j| words[j].as_str()) else {
                break;
            };
            if let Some(boost) = booster(prev) {
                // Boosters push away from zero, dampeners toward it.
                valence += boost * decay * valence.signum();
            }
            if NEGATIONS.contains(&prev) {
                valence *= NEGATION_SCALAR;
                break;
            }
        }

        valences.push(valence);
    }

    if let Some(but_index) = words.iter().position(|w| w == "but") {
        for (i, v) in valences.iter_mut().enumerate() {
            if i < but_index {
                *v *= 0.5;
            } else if i > but_index {
                *v *= 1.5;
            }
        }
    }

    let mut sum: f64 = valences.iter().sum();
    if sum != 0.0 {
        sum += punctuation_emphasis(text).copysign(sum);
    }

    normalize(sum)
}

fn lookup(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(lex_word, _)| *lex_word == word)
        .map(|(_, weight)| *weight)
}

fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, scalar)| *scalar)
}

fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .trim_matches('\'')
        .replace('’', "'")
        .to_lowercase()
}

fn is_all_caps(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let mut emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
    if questions > 1 {
        #[allow(clippy::cast_precision_loss)]
        let q = questions.min(3) as f64;
        emphasis += q * QUESTION_INCREMENT;
    }
    emphasis
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
