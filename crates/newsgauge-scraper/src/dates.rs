//! Publish-date detection from page metadata and article URLs.
//!
//! Dates are taken at face value; nothing checks them against the article
//! text. The offset a page publishes is kept so the calendar date matches
//! the one the source printed.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use newsgauge_core::DateSource;
use regex::Regex;
use scraper::{Html, Selector};

/// Meta attribute values (`property`, `name` or `itemprop`) carrying a
/// publish date, in priority order.
const DATE_META_KEYS: &[&str] = &[
    "article:published_time",
    "og:published_time",
    "datepublished",
    "pubdate",
    "publishdate",
    "publish-date",
    "publish_date",
    "parsely-pub-date",
    "sailthru.date",
    "dc.date",
    "dc.date.issued",
    "date",
];

/// Find the publish date of a page.
///
/// Probes meta tags, then JSON-LD (`json_ld_date`), then `<time datetime>`
/// elements, then a date segment in `url`.
#[must_use]
pub fn find_publish_date(
    document: &Html,
    json_ld_date: Option<&str>,
    url: &str,
) -> Option<(DateTime<FixedOffset>, DateSource)> {
    if let Some(date) = date_from_meta(document) {
        return Some((date, DateSource::Metadata));
    }
    if let Some(date) = json_ld_date.and_then(parse_date_str) {
        return Some((date, DateSource::Metadata));
    }
    if let Some(date) = date_from_time_elements(document) {
        return Some((date, DateSource::Metadata));
    }
    date_from_url(url).map(|date| (date, DateSource::Url))
}

fn date_from_meta(document: &Html) -> Option<DateTime<FixedOffset>> {
    let selector = Selector::parse("meta[content]").expect("valid meta selector");
    let mut found: Vec<(usize, DateTime<FixedOffset>)> = Vec::new();

    for el in document.select(&selector) {
        let value = el.value();
        let key = value
            .attr("property")
            .or_else(|| value.attr("name"))
            .or_else(|| value.attr("itemprop"))
            .map(str::to_lowercase);
        let Some(key) = key else {
            continue;
        };
        let Some(rank) = DATE_META_KEYS.iter().position(|k| *k == key) else {
            continue;
        };
        if let Some(date) = value.attr("content").and_then(parse_date_str) {
            found.push((rank, date));
        }
    }

    found.into_iter().min_by_key(|(rank, _)| *rank).map(|(_, d)| d)
}

fn date_from_time_elements(document: &Html) -> Option<DateTime<FixedOffset>> {
    let selector = Selector::parse("time[datetime]").expect("valid time selector");
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("datetime"))
        .find_map(parse_date_str)
}

/// Extract a `YYYY/MM/DD` or `YYYY-MM-DD` segment from an article URL.
#[must_use]
pub fn date_from_url(url: &str) -> Option<DateTime<FixedOffset>> {
    let cap = url_date_regex().captures(url)?;
    let year: i32 = cap.get(1)?.as_str().parse().ok()?;
    let month: u32 = cap.get(2)?.as_str().parse().ok()?;
    let day: u32 = cap.get(3)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(as_utc(date.and_hms_opt(0, 0, 0)?))
}

fn url_date_regex() -> &'static Regex {
    static URL_DATE: OnceLock<Regex> = OnceLock::new();
    URL_DATE.get_or_init(|| {
        Regex::new(r"/((?:19|20)\d{2})[/-](\d{1,2})[/-](\d{1,2})(?:/|-|$)")
            .expect("valid url date regex")
    })
}

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).fixed_offset()
}

/// Parse a date string in any of the formats news sites commonly emit.
///
/// The source offset is preserved. Values without an offset are taken as
/// UTC.
#[must_use]
pub fn parse_date_str(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(as_utc(naive));
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0).map(as_utc);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn ymd(date: DateTime<FixedOffset>) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let date = parse_date_str("2024-01-01T23:30:00-05:00").unwrap();
        assert_eq!(ymd(date), (2024, 1, 1), "source calendar date kept");
        assert_eq!(date.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn naive_values_are_taken_as_utc() {
        let date = parse_date_str("2024-07-04 22:00:00").unwrap();
        assert_eq!(date.offset().local_minus_utc(), 0);
        assert_eq!(ymd(date), (2024, 7, 4));
    }

    #[test]
    fn parses_rfc2822() {
        let date = parse_date_str("Tue, 05 Mar 2024 10:00:00 GMT").unwrap();
        assert_eq!(ymd(date), (2024, 3, 5));
    }

    #[test]
    fn parses_compact_offset() {
        let date = parse_date_str("2024-06-10T08:00:00+0000").unwrap();
        assert_eq!(ymd(date), (2024, 6, 10));
    }

    #[test]
    fn parses_naive_and_plain_dates() {
        assert_eq!(ymd(parse_date_str("2024-07-04 12:00:00").unwrap()), (2024, 7, 4));
        assert_eq!(ymd(parse_date_str("2024-07-04").unwrap()), (2024, 7, 4));
        assert_eq!(ymd(parse_date_str("July 4, 2024").unwrap()), (2024, 7, 4));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date_str("").is_none());
        assert!(parse_date_str("yesterday").is_none());
        assert!(parse_date_str("2024-13-45").is_none());
    }

    #[test]
    fn url_date_segments() {
        let date = date_from_url("https://example.com/2023/11/05/story-slug").unwrap();
        assert_eq!(ymd(date), (2023, 11, 5));
        let date = date_from_url("https://example.com/news/2023-02-28-budget").unwrap();
        assert_eq!(ymd(date), (2023, 2, 28));
        assert!(date_from_url("https://example.com/articles/CBMi123").is_none());
        assert!(date_from_url("https://example.com/2023/02/30/invalid").is_none());
    }

    #[test]
    fn url_date_regex_is_compiled_once() {
        assert!(std::ptr::eq(url_date_regex(), url_date_regex()));
    }

    #[test]
    fn meta_date_wins_over_url() {
        let document = Html::parse_document(
            r#"<html><head>
            <meta name="date" content="2024-01-09">
            <meta property="article:published_time" content="2024-01-08T09:00:00Z">
            </head></html>"#,
        );
        let (date, source) =
            find_publish_date(&document, None, "https://example.com/2020/01/01/x").unwrap();
        assert_eq!(ymd(date), (2024, 1, 8), "higher-priority key wins");
        assert_eq!(source, DateSource::Metadata);
    }

    #[test]
    fn json_ld_then_time_then_url() {
        let empty = Html::parse_document("<html><head></head><body></body></html>");
        let (date, _) = find_publish_date(&empty, Some("2024-02-02"), "https://x.test/a").unwrap();
        assert_eq!(ymd(date), (2024, 2, 2));

        let with_time = Html::parse_document(
            r#"<html><body><time datetime="2024-03-03T10:00:00Z">March 3</time></body></html>"#,
        );
        let (date, source) = find_publish_date(&with_time, None, "https://x.test/a").unwrap();
        assert_eq!(ymd(date), (2024, 3, 3));
        assert_eq!(source, DateSource::Metadata);

        let (date, source) =
            find_publish_date(&empty, None, "https://x.test/2022/12/31/a").unwrap();
        assert_eq!(ymd(date), (2022, 12, 31));
        assert_eq!(source, DateSource::Url);
    }

    #[test]
    fn no_date_anywhere() {
        let empty = Html::parse_document("<html></html>");
        assert!(find_publish_date(&empty, None, "https://x.test/a").is_none());
    }
}
