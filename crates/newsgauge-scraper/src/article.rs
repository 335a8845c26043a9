//! Article download and content extraction.

use chrono::{DateTime, FixedOffset, Local};
use newsgauge_core::DateSource;
use scraper::Html;

use crate::client::NewsClient;
use crate::dates::find_publish_date;
use crate::error::ScraperError;
use crate::html::{extract_main_text, extract_meta_description, extract_title};
use crate::jsonld::extract_json_ld_article;
use crate::summarize::summarize;

/// Structured content of one article page, before entity and sentiment
/// analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    pub url: String,
    pub title: String,
    pub text: String,
    pub summary: String,
    /// Publish time in the offset the page gave.
    pub publish_date: DateTime<FixedOffset>,
    pub date_source: DateSource,
}

impl NewsClient {
    /// Download `url` and extract its article content.
    ///
    /// When the page carries no publish date, the local time at extraction
    /// is used.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`], [`ScraperError::UnexpectedStatus`] or
    ///   [`ScraperError::Http`] when the download fails.
    /// - [`ScraperError::EmptyContent`] when no article text can be extracted.
    pub async fn fetch_article(&self, url: &str) -> Result<ExtractedArticle, ScraperError> {
        let body = self.get_html(url).await?;
        extract_article(&body, url, self.summary_sentences, Local::now().fixed_offset())
    }
}

/// Extract title, main text, summary and publish date from an article page.
///
/// `now` is substituted for the publish date when the page has none.
///
/// # Errors
///
/// Returns [`ScraperError::EmptyContent`] when neither the page body, its
/// JSON-LD `articleBody` nor its meta description yields any text.
pub fn extract_article(
    html: &str,
    url: &str,
    summary_sentences: usize,
    now: DateTime<FixedOffset>,
) -> Result<ExtractedArticle, ScraperError> {
    let document = Html::parse_document(html);
    let json_ld = extract_json_ld_article(html).unwrap_or_default();

    let mut title = extract_title(&document);
    if title.is_empty() {
        title.clone_from(&json_ld.headline);
    }

    let mut text = extract_main_text(&document);
    if text.is_empty() {
        text.clone_from(&json_ld.body);
    }
    if text.is_empty() {
        text = extract_meta_description(&document);
    }
    if text.trim().is_empty() {
        return Err(ScraperError::EmptyContent {
            url: url.to_owned(),
        });
    }

    let (publish_date, date_source) =
        find_publish_date(&document, json_ld.date_published.as_deref(), url)
            .unwrap_or((now, DateSource::Defaulted));

    let summary = summarize(&title, &text, summary_sentences);

    tracing::debug!(
        url,
        title = %title,
        chars = text.len(),
        date_source = %date_source,
        "extracted article"
    );

    Ok(ExtractedArticle {
        url: url.to_owned(),
        title,
        text,
        summary,
        publish_date,
        date_source,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap().fixed_offset()
    }

    const FULL_PAGE: &str = r#"<html><head>
      <title>Ignored | Example News</title>
      <meta property="og:title" content="Council approves transit plan">
      <meta property="article:published_time" content="2024-04-02T15:04:05Z">
    </head><body>
      <header><p>Example News navigation bar with many links</p></header>
      <article>
        <h1>Council approves transit plan</h1>
        <p>The city council approved the transit plan on Tuesday after a long debate.</p>
        <p>Supporters said the plan would cut commute times across the region.</p>
      </article>
    </body></html>"#;

    #[test]
    fn extracts_all_fields_from_full_page() {
        let article =
            extract_article(FULL_PAGE, "https://example.com/transit", 5, now()).unwrap();
        assert_eq!(article.url, "https://example.com/transit");
        assert_eq!(article.title, "Council approves transit plan");
        assert!(article.text.starts_with("The city council approved"));
        assert!(!article.text.contains("navigation"));
        assert_eq!(
            article.publish_date,
            Utc.with_ymd_and_hms(2024, 4, 2, 15, 4, 5).unwrap().fixed_offset()
        );
        assert_eq!(article.date_source, DateSource::Metadata);
        assert!(article.summary.contains("transit plan"));
    }

    #[test]
    fn evening_publish_time_keeps_source_calendar_date() {
        let html = r#"<html><head>
          <meta property="article:published_time" content="2024-01-01T20:00:00-05:00">
        </head><body><p>Late evening story about the budget vote in the capital.</p></body></html>"#;
        let article = extract_article(html, "https://example.com/late", 5, now()).unwrap();
        assert_eq!(article.publish_date.date_naive().to_string(), "2024-01-01");
        assert_eq!(article.publish_date.to_rfc3339(), "2024-01-01T20:00:00-05:00");
    }

    #[test]
    fn missing_date_defaults_to_processing_time() {
        let html = "<html><body><p>A story with no metadata at all about the election.</p></body></html>";
        let article = extract_article(html, "https://example.com/story", 5, now()).unwrap();
        assert_eq!(article.publish_date, now());
        assert_eq!(article.date_source, DateSource::Defaulted);
    }

    #[test]
    fn url_date_used_when_page_has_none() {
        let html = "<html><body><p>A story with no metadata at all about the election.</p></body></html>";
        let article =
            extract_article(html, "https://example.com/2024/02/29/story", 5, now()).unwrap();
        assert_eq!(article.date_source, DateSource::Url);
        assert_eq!(article.publish_date.date_naive().to_string(), "2024-02-29");
    }

    #[test]
    fn falls_back_to_json_ld_body_and_headline() {
        let html = r#"<html><head><script type="application/ld+json">
            {"@type":"NewsArticle","headline":"Structured headline",
             "articleBody":"Structured body text about the vote.","datePublished":"2024-05-05"}
            </script></head><body><div>no paragraphs</div></body></html>"#;
        let article = extract_article(html, "https://example.com/x", 5, now()).unwrap();
        assert_eq!(article.title, "Structured headline");
        assert_eq!(article.text, "Structured body text about the vote.");
        assert_eq!(article.publish_date.date_naive().to_string(), "2024-05-05");
    }

    #[test]
    fn empty_page_is_an_extraction_error() {
        let err = extract_article("<html><body></body></html>", "https://example.com/e", 5, now())
            .unwrap_err();
        assert!(
            matches!(err, ScraperError::EmptyContent { ref url } if url == "https://example.com/e"),
            "expected EmptyContent, got: {err:?}"
        );
    }

    #[test]
    fn summary_is_limited_to_configured_sentences() {
        let html = "<html><body><article>\
            <p>First sentence about the senate vote. Second sentence about the senate vote.</p>\
            <p>Third sentence about the senate vote. Fourth sentence about the senate vote.</p>\
            </article></body></html>";
        let article = extract_article(html, "https://example.com/s", 2, now()).unwrap();
        assert_eq!(article.summary.lines().count(), 2);
    }
}
