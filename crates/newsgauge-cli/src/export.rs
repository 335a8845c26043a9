//! JSON export of a completed topic run.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use newsgauge_core::{ExportRow, TrendPoint};
use newsgauge_sentiment::TopicReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct ExportDocument<'a> {
    pub topic: &'a str,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<ExportRow>,
    pub trend: &'a [TrendPoint],
}

impl<'a> ExportDocument<'a> {
    pub(crate) fn from_report(report: &'a TopicReport, generated_at: DateTime<Utc>) -> Self {
        Self {
            topic: &report.topic,
            generated_at,
            articles: report.records.iter().map(ExportRow::from).collect(),
            trend: &report.trend,
        }
    }
}

/// Write `report` to `path` as pretty-printed JSON, replacing any existing
/// file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub(crate) fn write_export(
    path: &Path,
    report: &TopicReport,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<()> {
    let document = ExportDocument::from_report(report, generated_at);
    let json = serde_json::to_string_pretty(&document).context("failed to serialize export")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), articles = document.articles.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use newsgauge_core::{ArticleRecord, DateSource};
    use serde_json::Value;

    use super::*;

    fn report() -> TopicReport {
        let record = ArticleRecord {
            url: "https://news.test/a".to_owned(),
            title: "Budget passes".to_owned(),
            summary: "The budget passed.".to_owned(),
            text: "The budget passed. Jane Doe voted yes.".to_owned(),
            publish_date: FixedOffset::west_opt(5 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 1, 21, 30, 0)
                .unwrap(),
            date_source: DateSource::Url,
            sentiment: 0.5,
            people: ["Jane Doe".to_owned(), "John Roe".to_owned()].into_iter().collect(),
            organizations: Default::default(),
            locations: std::iter::once("Ohio".to_owned()).collect(),
        };
        TopicReport {
            topic: "budget".to_owned(),
            records: vec![record],
            trend: vec![TrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                mean_sentiment: 0.5,
                article_count: 1,
            }],
            discovered: 1,
            failed: 0,
        }
    }

    #[test]
    fn writes_articles_and_trend_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("budget.json");
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

        write_export(&path, &report(), generated_at).unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["topic"], "budget");
        assert_eq!(value["generated_at"], "2024-01-03T00:00:00Z");

        let article = &value["articles"][0];
        assert_eq!(article["title"], "Budget passes");
        assert_eq!(article["url"], "https://news.test/a");
        assert_eq!(article["date"], "2024-01-01T21:30:00-05:00");
        assert_eq!(article["sentiment"], 0.5);
        assert_eq!(article["people"], "Jane Doe, John Roe");
        assert_eq!(article["organizations"], "");
        assert_eq!(article["locations"], "Ohio");

        assert_eq!(value["trend"][0]["date"], "2024-01-01");
        assert_eq!(value["trend"][0]["mean_sentiment"], 0.5);
        assert_eq!(value["trend"][0]["article_count"], 1);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_export(&path, &report(), Utc::now()).unwrap_err();
        assert!(err.to_string().contains("failed to write export"), "got: {err:#}");
    }
}
