//! Article analysis and topic pipeline for newsgauge.
//!
//! Fetches the articles discovered for a topic, extracts named entities from
//! each article's text, scores the sentiment of its summary with a news
//! lexicon, and aggregates the scores into a per-date trend.

pub mod analyzers;
pub mod entities;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod scorer;

pub use analyzers::{AnalyzerError, Analyzers, EntityRecognizer, SentimentAnalyzer};
pub use entities::{recognize, GazetteerRecognizer};
pub use error::FetchError;
pub use fetcher::{analyze_article, ArticleFetcher};
pub use pipeline::{Pipeline, RunOutcome, TopicReport};
pub use scorer::{lexicon_score, LexiconScorer, LEXICON_VERSION};
