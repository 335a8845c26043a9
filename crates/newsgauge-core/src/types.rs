use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Where an article's publish date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// Page metadata: meta tags, JSON-LD or `<time>` elements.
    Metadata,
    /// A `/YYYY/MM/DD/` segment in the article URL.
    Url,
    /// No date was found; the processing time was substituted.
    Defaulted,
}

impl std::fmt::Display for DateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSource::Metadata => write!(f, "metadata"),
            DateSource::Url => write!(f, "url"),
            DateSource::Defaulted => write!(f, "defaulted"),
        }
    }
}

/// Named entities found in one text, one set per category.
///
/// Sets dedupe by exact string: `"Paris"` and `"paris"` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySets {
    pub people: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl EntitySets {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.locations.is_empty()
    }
}

/// One processed article.
///
/// Only ever built for a page that downloaded and parsed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub text: String,
    /// Publish time in the offset the source page gave.
    pub publish_date: DateTime<FixedOffset>,
    pub date_source: DateSource,
    /// Compound polarity of `summary`, in `[-1.0, 1.0]`.
    pub sentiment: f64,
    pub people: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl ArticleRecord {
    /// Calendar date of `publish_date` in its own offset, used for trend
    /// grouping.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.publish_date.date_naive()
    }
}

/// Mean sentiment for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mean_sentiment: f64,
    /// Number of records averaged into `mean_sentiment`.
    pub article_count: usize,
}

/// Flat tabular form of an [`ArticleRecord`] for export.
///
/// Entity sets are rendered as `", "`-joined strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub title: String,
    pub summary: String,
    pub text: String,
    pub url: String,
    pub date: DateTime<FixedOffset>,
    pub sentiment: f64,
    pub people: String,
    pub organizations: String,
    pub locations: String,
}

impl From<&ArticleRecord> for ExportRow {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            title: record.title.clone(),
            summary: record.summary.clone(),
            text: record.text.clone(),
            url: record.url.clone(),
            date: record.publish_date,
            sentiment: record.sentiment,
            people: join_entities(&record.people),
            organizations: join_entities(&record.organizations),
            locations: join_entities(&record.locations),
        }
    }
}

fn join_entities(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
