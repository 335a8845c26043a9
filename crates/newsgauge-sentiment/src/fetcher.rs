//! Per-URL fetch, extraction and analysis.

use newsgauge_core::ArticleRecord;
use newsgauge_scraper::{ExtractedArticle, NewsClient};

use crate::analyzers::Analyzers;
use crate::error::FetchError;

/// Turns article URLs into analyzed [`ArticleRecord`]s.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: NewsClient,
    analyzers: Analyzers,
}

impl ArticleFetcher {
    #[must_use]
    pub fn new(client: NewsClient, analyzers: Analyzers) -> Self {
        Self { client, analyzers }
    }

    /// Fetch and analyze one article, logging and swallowing any failure.
    pub async fn fetch(&self, url: &str) -> Option<ArticleRecord> {
        match self.try_fetch(url).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(url, error = %e, "article skipped");
                None
            }
        }
    }

    /// Fetch and analyze one article.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Scraper`] when the download or content extraction fails.
    /// - [`FetchError::Entities`] / [`FetchError::Scoring`] when an analyzer
    ///   rejects the article.
    pub async fn try_fetch(&self, url: &str) -> Result<ArticleRecord, FetchError> {
        let article = self.client.fetch_article(url).await?;
        analyze_article(article, &self.analyzers)
    }
}

/// Run entity recognition on the full text and sentiment on the summary.
///
/// # Errors
///
/// Returns [`FetchError::Entities`] or [`FetchError::Scoring`] when an
/// analyzer fails or the score is not a finite number.
pub fn analyze_article(
    article: ExtractedArticle,
    analyzers: &Analyzers,
) -> Result<ArticleRecord, FetchError> {
    let entities = analyzers
        .entities
        .extract_entities(&article.text)
        .map_err(|e| FetchError::Entities(e.to_string()))?;

    let sentiment = analyzers
        .sentiment
        .score(&article.summary)
        .map_err(|e| FetchError::Scoring(e.to_string()))?;
    if !sentiment.is_finite() {
        return Err(FetchError::Scoring(format!(
            "analyzer returned non-finite score {sentiment}"
        )));
    }

    Ok(ArticleRecord {
        url: article.url,
        title: article.title,
        summary: article.summary,
        text: article.text,
        publish_date: article.publish_date,
        date_source: article.date_source,
        sentiment: sentiment.clamp(-1.0, 1.0),
        people: entities.people,
        organizations: entities.organizations,
        locations: entities.locations,
    })
}
