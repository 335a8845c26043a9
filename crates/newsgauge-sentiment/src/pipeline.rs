//! Topic pipeline orchestration.

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, StreamExt};
use newsgauge_core::{aggregate, ArticleRecord, TrendPoint};
use newsgauge_scraper::NewsClient;

use crate::analyzers::Analyzers;
use crate::fetcher::ArticleFetcher;

const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Results of a run that produced at least one article record.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicReport {
    pub topic: String,
    /// Records in discovery order.
    pub records: Vec<ArticleRecord>,
    /// Per-date mean sentiment, ascending by date.
    pub trend: Vec<TrendPoint>,
    /// Number of distinct URLs discovery returned.
    pub discovered: usize,
    /// Number of fetches that completed without producing a record.
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(TopicReport),
    /// Discovery found nothing, or every article failed.
    NoArticles { discovered: usize },
}

/// Discover, fetch, analyze and aggregate news for one topic.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: NewsClient,
    fetcher: ArticleFetcher,
    max_concurrent_fetches: usize,
}

impl Pipeline {
    #[must_use]
    pub fn new(client: NewsClient, analyzers: Analyzers) -> Self {
        let fetcher = ArticleFetcher::new(client.clone(), analyzers);
        Self {
            client,
            fetcher,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Bound the number of article fetches in flight. Values below 1 are
    /// raised to 1.
    #[must_use]
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    /// Run the pipeline to completion.
    pub async fn run(&self, topic: &str, max_results: usize) -> RunOutcome {
        self.run_until(topic, max_results, std::future::pending::<()>())
            .await
    }

    /// Run the pipeline until it completes or `shutdown` resolves.
    ///
    /// 1. Discover up to `max_results` article URLs for `topic`.
    /// 2. Fetch and analyze each URL, at most `max_concurrent_fetches` at a
    ///    time, keeping results in discovery order.
    /// 3. Aggregate the successful records into a per-date trend.
    ///
    /// Once `shutdown` resolves no further fetch starts and in-flight fetches
    /// are dropped; records gathered so far are still aggregated.
    pub async fn run_until<F>(&self, topic: &str, max_results: usize, shutdown: F) -> RunOutcome
    where
        F: Future<Output = ()>,
    {
        let mut urls = self.client.discover(topic, max_results).await;
        let mut seen = HashSet::new();
        urls.retain(|url| seen.insert(url.clone()));

        let discovered = urls.len();
        if discovered == 0 {
            tracing::info!(topic, "no article links discovered");
            return RunOutcome::NoArticles { discovered };
        }
        tracing::info!(topic, discovered, "fetching articles");

        let results: Vec<Option<ArticleRecord>> = stream::iter(urls.iter())
            .map(|url| self.fetcher.fetch(url))
            .buffered(self.max_concurrent_fetches)
            .take_until(shutdown)
            .collect()
            .await;

        let attempted = results.len();
        if attempted < discovered {
            tracing::warn!(
                topic,
                attempted,
                discovered,
                "run cancelled before all articles were fetched"
            );
        }

        let records: Vec<ArticleRecord> = results.into_iter().flatten().collect();
        let failed = attempted - records.len();

        if records.is_empty() {
            tracing::info!(topic, discovered, failed, "no articles could be processed");
            return RunOutcome::NoArticles { discovered };
        }

        let trend = aggregate(&records);
        tracing::info!(
            topic,
            records = records.len(),
            failed,
            dates = trend.len(),
            "topic run complete"
        );

        RunOutcome::Completed(TopicReport {
            topic: topic.to_owned(),
            records,
            trend,
            discovered,
            failed,
        })
    }
}
