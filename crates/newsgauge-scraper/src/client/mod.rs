//! HTTP client shared by link discovery and article fetching.

use std::time::Duration;

use newsgauge_core::AppConfig;
use reqwest::Client;

use crate::error::ScraperError;

pub(crate) const DEFAULT_SEARCH_BASE_URL: &str = "https://news.google.com";
pub(crate) const DEFAULT_SEARCH_QUALIFIER: &str = "politics";
pub(crate) const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// Used when the configured `User-Agent` is blank; the search surface
/// rejects requests without one.
pub(super) const BROWSER_FALLBACK_UA: &str = "Mozilla/5.0";

/// HTTP client for the news search page and for article pages.
///
/// Every request is bounded by the timeout given at construction. Requests
/// are never retried; a failed request is reported once to the caller.
#[derive(Debug, Clone)]
pub struct NewsClient {
    pub(crate) client: Client,
    /// Origin of the search surface, without trailing slash.
    pub(crate) search_base_url: String,
    /// Word appended to every topic query.
    pub(crate) search_qualifier: String,
    /// Sentences kept by the extractive summarizer.
    pub(crate) summary_sentences: usize,
}

impl NewsClient {
    /// Creates a `NewsClient` with the given request timeout and `User-Agent`.
    ///
    /// Search base, qualifier and summary length start at their defaults; see
    /// [`NewsClient::with_search_base_url`] and friends.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let user_agent = if user_agent.trim().is_empty() {
            BROWSER_FALLBACK_UA
        } else {
            user_agent
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.clamp(1, 10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            search_base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            search_qualifier: DEFAULT_SEARCH_QUALIFIER.to_string(),
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
        })
    }

    /// Builds a client from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(config.request_timeout_secs, &config.user_agent)?
            .with_search_base_url(&config.search_base_url)
            .with_search_qualifier(&config.search_qualifier)
            .with_summary_sentences(config.summary_sentences))
    }

    #[must_use]
    pub fn with_search_base_url(mut self, base_url: &str) -> Self {
        self.search_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_search_qualifier(mut self, qualifier: &str) -> Self {
        self.search_qualifier = qualifier.trim().to_string();
        self
    }

    #[must_use]
    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences.max(1);
        self
    }

    #[must_use]
    pub fn search_base_url(&self) -> &str {
        &self.search_base_url
    }

    /// Issues a single GET and returns the body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` is not an absolute http(s) URL.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] on network, timeout or body decoding failure.
    pub(crate) async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Parses `url` and requires an http or https scheme.
pub(crate) fn parse_http_url(url: &str) -> Result<reqwest::Url, ScraperError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
