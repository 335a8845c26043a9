//! Markdown console report for a completed topic run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write};

use newsgauge_core::ArticleRecord;
use newsgauge_sentiment::TopicReport;

/// Render the trend table, each article and the entity tables.
///
/// # Errors
///
/// Returns [`fmt::Error`] if formatting into the buffer fails.
pub(crate) fn render_report(report: &TopicReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report)?;
    Ok(out)
}

fn write_report<W: Write>(out: &mut W, report: &TopicReport) -> fmt::Result {
    writeln!(out, "# News Sentiment: {}", report.topic)?;
    writeln!(out)?;
    writeln!(
        out,
        "**Articles**: {} analyzed, {} discovered, {} failed",
        report.records.len(),
        report.discovered,
        report.failed
    )?;
    writeln!(out)?;

    writeln!(out, "## Sentiment Trend")?;
    writeln!(out)?;
    writeln!(out, "| Date | Mean Sentiment | Articles |")?;
    writeln!(out, "|------|----------------|----------|")?;
    for point in &report.trend {
        writeln!(
            out,
            "| {} | {:.2} | {} |",
            point.date.format("%Y-%m-%d"),
            point.mean_sentiment,
            point.article_count
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Articles")?;
    for record in &report.records {
        writeln!(out)?;
        write_article(out, record)?;
    }
    writeln!(out)?;

    writeln!(out, "## Entities by Article")?;
    writeln!(out)?;
    writeln!(out, "| Article | People | Organizations | Locations |")?;
    writeln!(out, "|---------|--------|---------------|-----------|")?;
    for record in &report.records {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            display_title(record),
            entity_cell(&record.people),
            entity_cell(&record.organizations),
            entity_cell(&record.locations)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Named Entities")?;
    writeln!(out)?;
    let entities = entity_counts(&report.records);
    if entities.is_empty() {
        writeln!(out, "No named entities found.")?;
    } else {
        writeln!(out, "| Entity | Type | Articles |")?;
        writeln!(out, "|--------|------|----------|")?;
        for (name, kind, count) in entities {
            writeln!(out, "| {name} | {kind} | {count} |")?;
        }
    }

    Ok(())
}

fn display_title(record: &ArticleRecord) -> &str {
    if record.title.trim().is_empty() {
        "(untitled)"
    } else {
        record.title.as_str()
    }
}

fn entity_cell(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        "-".to_owned()
    } else {
        names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

fn write_article<W: Write>(out: &mut W, record: &ArticleRecord) -> fmt::Result {
    writeln!(out, "### {}", display_title(record))?;
    writeln!(out)?;
    writeln!(
        out,
        "- **Published**: {} ({})",
        record.publish_date.format("%Y-%m-%d"),
        record.date_source
    )?;
    writeln!(out, "- **Sentiment**: {:.2}", record.sentiment)?;
    writeln!(out)?;
    if !record.summary.is_empty() {
        writeln!(out, "{}", record.summary)?;
        writeln!(out)?;
    }
    writeln!(out, "Read more: {}", record.url)
}

/// Entities with the number of articles mentioning them, most frequent
/// first.
fn entity_counts(records: &[ArticleRecord]) -> Vec<(String, &'static str, usize)> {
    let mut counts: BTreeMap<(&'static str, &str), usize> = BTreeMap::new();
    for record in records {
        let labeled = [
            ("person", &record.people),
            ("organization", &record.organizations),
            ("location", &record.locations),
        ];
        for (kind, names) in labeled {
            for name in names {
                *counts.entry((kind, name.as_str())).or_insert(0) += 1;
            }
        }
    }

    let mut rows: Vec<(String, &'static str, usize)> = counts
        .into_iter()
        .map(|((kind, name), count)| (name.to_owned(), kind, count))
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(b.1)).then_with(|| a.0.cmp(&b.0)));
    rows
}
