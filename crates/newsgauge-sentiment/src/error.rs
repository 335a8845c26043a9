use newsgauge_scraper::ScraperError;
use thiserror::Error;

/// Why one article produced no record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Scraper(#[from] ScraperError),

    #[error("entity extraction failed: {0}")]
    Entities(String),

    #[error("sentiment scoring failed: {0}")]
    Scoring(String),
}
