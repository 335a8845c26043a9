//! `analyze` command: run the topic pipeline and present the results.

use std::future::Future;
use std::path::PathBuf;

use chrono::Utc;
use newsgauge_core::AppConfig;
use newsgauge_scraper::NewsClient;
use newsgauge_sentiment::{Analyzers, Pipeline, RunOutcome};

use crate::{export, report};

/// Printed when a run yields no article records.
pub(crate) const NO_ARTICLES_MESSAGE: &str = "No articles could be processed.";

#[derive(Debug, Clone)]
pub(crate) struct AnalyzeOptions {
    pub topic: String,
    pub max_results: usize,
    pub concurrency: Option<usize>,
    pub qualifier: Option<String>,
    pub export: Option<PathBuf>,
}

/// Build the pipeline from config plus command-line overrides.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_pipeline(
    config: &AppConfig,
    options: &AnalyzeOptions,
) -> anyhow::Result<Pipeline> {
    let mut client = NewsClient::from_app_config(config)?;
    if let Some(qualifier) = options.qualifier.as_deref() {
        client = client.with_search_qualifier(qualifier);
    }
    let concurrency = options.concurrency.unwrap_or(config.max_concurrent_fetches);
    Ok(Pipeline::new(client, Analyzers::default()).with_max_concurrent_fetches(concurrency))
}

/// Run the pipeline for `options.topic`, print the report and optionally
/// export it. Stops fetching once `shutdown` resolves.
///
/// A run with no usable articles prints [`NO_ARTICLES_MESSAGE`] and
/// succeeds.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built or the export file
/// cannot be written.
pub(crate) async fn run_analyze<F>(
    config: &AppConfig,
    options: AnalyzeOptions,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let pipeline = build_pipeline(config, &options)?;
    tracing::info!(
        topic = %options.topic,
        max_results = options.max_results,
        "starting analysis"
    );

    let outcome = pipeline
        .run_until(&options.topic, options.max_results, shutdown)
        .await;

    let topic_report = match outcome {
        RunOutcome::Completed(topic_report) => topic_report,
        RunOutcome::NoArticles { discovered } => {
            tracing::debug!(discovered, "run produced no records");
            println!("{NO_ARTICLES_MESSAGE}");
            return Ok(());
        }
    };

    print!("{}", report::render_report(&topic_report)?);

    if let Some(path) = options.export.as_deref() {
        export::write_export(path, &topic_report, Utc::now())?;
        println!(
            "Exported {} articles to {}",
            topic_report.records.len(),
            path.display()
        );
    }

    Ok(())
}
