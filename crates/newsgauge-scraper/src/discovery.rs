//! Article link discovery on the news search page.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

use crate::client::NewsClient;
use crate::error::ScraperError;

/// Relative-path prefix the search page uses for article links.
const ARTICLE_LINK_PREFIX: &str = "./articles/";

/// Fixed locale parameters appended to every search query.
const LOCALE_PARAMS: &str = "hl=en-US&gl=US&ceid=US:en";

impl NewsClient {
    /// Discover up to `max_results` article URLs for `topic`.
    ///
    /// Issues one GET to the search page. Transport, status and parse
    /// failures are logged and produce an empty list.
    pub async fn discover(&self, topic: &str, max_results: usize) -> Vec<String> {
        match self.try_discover(topic, max_results).await {
            Ok(urls) => {
                tracing::info!(topic, count = urls.len(), "discovered article links");
                urls
            }
            Err(e) => {
                tracing::warn!(topic, error = %e, "article discovery failed");
                Vec::new()
            }
        }
    }

    /// Like [`NewsClient::discover`] but returns the failure reason.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the search page cannot be fetched.
    pub async fn try_discover(
        &self,
        topic: &str,
        max_results: usize,
    ) -> Result<Vec<String>, ScraperError> {
        if max_results == 0 {
            return Ok(Vec::new());
        }
        let url = build_search_url(&self.search_base_url, topic, &self.search_qualifier);
        tracing::debug!(%url, "querying news search");
        let body = self.get_html(&url).await?;
        Ok(parse_search_results(
            &body,
            &self.search_base_url,
            max_results,
        ))
    }
}

/// Build the search URL for `topic` with the qualifier and locale appended.
#[must_use]
pub fn build_search_url(base_url: &str, topic: &str, qualifier: &str) -> String {
    let topic = topic.trim();
    let query = if qualifier.is_empty() {
        topic.to_string()
    } else {
        format!("{topic} {qualifier}")
    };
    let encoded = utf8_percent_encode(&query, NON_ALPHANUMERIC);
    format!(
        "{}/search?q={encoded}&{LOCALE_PARAMS}",
        base_url.trim_end_matches('/')
    )
}

/// Extract absolute article URLs from a search results page.
///
/// Looks at the first `max_results` `<article>` elements in document order
/// and takes the first link inside each. Links outside the `./articles/`
/// convention are skipped.
#[must_use]
pub fn parse_search_results(html: &str, base_url: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let article_selector = Selector::parse("article").expect("valid article selector");
    let link_selector = Selector::parse("a[href]").expect("valid link selector");

    document
        .select(&article_selector)
        .take(max_results)
        .filter_map(|article| {
            let href = article.select(&link_selector).next()?.value().attr("href")?;
            let resolved = resolve_article_link(href, base_url);
            if resolved.is_none() {
                tracing::debug!(href, "skipping link outside article convention");
            }
            resolved
        })
        .collect()
}

/// Rewrite a `./articles/...` href into an absolute URL under `base_url`.
fn resolve_article_link(href: &str, base_url: &str) -> Option<String> {
    let rest = href.trim().strip_prefix(ARTICLE_LINK_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(format!(
        "{}/articles/{rest}",
        base_url.trim_end_matches('/')
    ))
}
