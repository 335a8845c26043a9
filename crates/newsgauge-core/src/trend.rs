//! Per-date sentiment trend aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{ArticleRecord, TrendPoint};

/// Group records by the calendar date of their publish time and average
/// their sentiment.
///
/// Returns one [`TrendPoint`] per distinct date, ascending.
#[must_use]
pub fn aggregate(records: &[ArticleRecord]) -> Vec<TrendPoint> {
    aggregate_dated(records.iter().map(|r| (Some(r.date()), r.sentiment)))
}

/// Aggregate `(date, sentiment)` pairs whose date may be absent.
///
/// Rows without a date are excluded from every group.
pub fn aggregate_dated<I>(rows: I) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = (Option<NaiveDate>, f64)>,
{
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    let mut skipped = 0usize;

    for (date, sentiment) in rows {
        let Some(date) = date else {
            skipped += 1;
            continue;
        };
        let entry = groups.entry(date).or_insert((0.0, 0));
        entry.0 += sentiment;
        entry.1 += 1;
    }

    if skipped > 0 {
        tracing::debug!(skipped, "excluded undated rows from trend aggregation");
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let mean_sentiment = sum / count as f64;
            TrendPoint {
                date,
                mean_sentiment,
                article_count: count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::types::DateSource;

    fn record(y: i32, m: u32, d: u32, hour: u32, sentiment: f64) -> ArticleRecord {
        record_at(0, y, m, d, hour, sentiment)
    }

    fn record_at(
        offset_hours: i32,
        y: i32,
        m: u32,
        d: u32,
        hour: u32,
        sentiment: f64,
    ) -> ArticleRecord {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        ArticleRecord {
            url: format!("https://example.com/{y}-{m}-{d}-{hour}"),
            title: String::new(),
            summary: String::new(),
            text: String::new(),
            publish_date: offset.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap(),
            date_source: DateSource::Metadata,
            sentiment,
            people: BTreeSet::new(),
            organizations: BTreeSet::new(),
            locations: BTreeSet::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn same_date_records_are_averaged() {
        let points = aggregate(&[record(2024, 1, 1, 8, 0.5), record(2024, 1, 1, 20, -0.3)]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date(2024, 1, 1));
        assert!(
            (points[0].mean_sentiment - 0.1).abs() < 1e-9,
            "expected 0.1, got {}",
            points[0].mean_sentiment
        );
        assert_eq!(points[0].article_count, 2);
    }

    #[test]
    fn points_are_sorted_by_date_ascending() {
        let points = aggregate(&[
            record(2024, 1, 3, 0, 0.3),
            record(2024, 1, 1, 0, 0.1),
            record(2024, 1, 2, 0, 0.2),
        ]);
        let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
    }

    #[test]
    fn time_of_day_is_discarded() {
        let points = aggregate(&[record(2024, 5, 6, 0, 1.0), record(2024, 5, 6, 23, 0.0)]);
        assert_eq!(points.len(), 1);
        assert!((points[0].mean_sentiment - 0.5).abs() < 1e-9);
    }

    #[test]
    fn late_evening_negative_offset_stays_on_source_date() {
        // 22:00 at UTC-5 is already Jan 2 in UTC.
        let points = aggregate(&[
            record_at(-5, 2024, 1, 1, 22, 0.4),
            record(2024, 1, 1, 9, 0.2),
        ]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date(2024, 1, 1));
        assert_eq!(points[0].article_count, 2);
    }

    #[test]
    fn undated_rows_are_excluded() {
        let points = aggregate_dated([
            (Some(date(2024, 2, 1)), 0.4),
            (None, -1.0),
            (Some(date(2024, 2, 1)), 0.2),
        ]);
        assert_eq!(points.len(), 1);
        assert!((points[0].mean_sentiment - 0.3).abs() < 1e-9);
        assert_eq!(points[0].article_count, 2);
    }

    #[test]
    fn all_undated_rows_yield_no_points() {
        assert!(aggregate_dated([(None, 0.5), (None, -0.5)]).is_empty());
    }
}
