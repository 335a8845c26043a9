//! Pluggable analysis services applied to every fetched article.

use std::sync::Arc;

use newsgauge_core::EntitySets;

use crate::entities::GazetteerRecognizer;
use crate::scorer::LexiconScorer;

/// Failure reported by an analyzer implementation.
pub type AnalyzerError = Box<dyn std::error::Error + Send + Sync>;

/// Named-entity recognition over article text.
pub trait EntityRecognizer: Send + Sync {
    /// Extract people, organizations and locations from `text`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the text cannot be analyzed.
    fn extract_entities(&self, text: &str) -> Result<EntitySets, AnalyzerError>;
}

/// Compound polarity scoring.
pub trait SentimentAnalyzer: Send + Sync {
    /// Score `text` in `[-1.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the text cannot be scored.
    fn score(&self, text: &str) -> Result<f64, AnalyzerError>;
}

/// Analyzer services constructed once per process and shared across fetches.
#[derive(Clone)]
pub struct Analyzers {
    pub entities: Arc<dyn EntityRecognizer>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
}

impl Analyzers {
    #[must_use]
    pub fn new(
        entities: Arc<dyn EntityRecognizer>,
        sentiment: Arc<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            entities,
            sentiment,
        }
    }
}

impl Default for Analyzers {
    /// The built-in gazetteer recognizer and lexicon scorer.
    fn default() -> Self {
        Self::new(Arc::new(GazetteerRecognizer), Arc::new(LexiconScorer))
    }
}

impl std::fmt::Debug for Analyzers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzers").finish_non_exhaustive()
    }
}
