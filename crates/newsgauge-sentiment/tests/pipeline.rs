//! End-to-end pipeline tests against a local `wiremock` news server.

use chrono::NaiveDate;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsgauge_scraper::NewsClient;
use newsgauge_sentiment::{Analyzers, Pipeline, RunOutcome};

fn pipeline(server: &MockServer) -> Pipeline {
    let client = NewsClient::new(5, "Mozilla/5.0")
        .expect("failed to build test NewsClient")
        .with_search_base_url(&server.uri());
    Pipeline::new(client, Analyzers::default()).with_max_concurrent_fetches(2)
}

fn search_page(ids: &[&str]) -> String {
    let mut html = String::from("<html><body>");
    for id in ids {
        html.push_str(&format!(
            r#"<article><a href="./articles/{id}">Story {id}</a></article>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn article_page(title: &str, published: &str, body: &str) -> String {
    format!(
        r#"<html><head>
        <meta property="og:title" content="{title}">
        <meta property="article:published_time" content="{published}">
        </head><body><article><p>{body}</p></article></body></html>"#
    )
}

async fn mount_search(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(ids)))
        .mount(server)
        .await;
}

async fn mount_article(server: &MockServer, id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/articles/{id}")))
        .respond_with(response)
        .mount(server)
        .await;
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn failed_articles_are_skipped_and_rest_aggregated() {
    let server = MockServer::start().await;
    mount_search(&server, &["a1", "a2", "a3", "a4", "a5"]).await;

    mount_article(
        &server,
        "a1",
        ResponseTemplate::new(200).set_body_string(article_page(
            "Peace deal reached",
            "2024-01-01T08:00:00Z",
            "Leaders in Geneva celebrated a great victory for peace and cooperation.",
        )),
    )
    .await;
    mount_article(&server, "a2", ResponseTemplate::new(500)).await;
    mount_article(
        &server,
        "a3",
        ResponseTemplate::new(200).set_body_string(article_page(
            "Talks collapse",
            "2024-01-01T17:30:00Z",
            "President Joe Biden warned of chaos and crisis after talks collapsed.",
        )),
    )
    .await;
    mount_article(
        &server,
        "a4",
        ResponseTemplate::new(200).set_body_string("<html><body></body></html>"),
    )
    .await;
    mount_article(
        &server,
        "a5",
        ResponseTemplate::new(200).set_body_string(article_page(
            "Markets steady",
            "2024-01-02T12:00:00Z",
            "The Federal Reserve held rates steady on the second day of the meeting.",
        )),
    )
    .await;

    let outcome = pipeline(&server).run("peace talks", 10).await;
    let RunOutcome::Completed(report) = outcome else {
        panic!("expected a completed run, got: {outcome:?}");
    };

    assert_eq!(report.topic, "peace talks");
    assert_eq!(report.discovered, 5);
    assert_eq!(report.failed, 2);

    let urls: Vec<String> = report.records.iter().map(|r| r.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/articles/a1", server.uri()),
            format!("{}/articles/a3", server.uri()),
            format!("{}/articles/a5", server.uri()),
        ],
        "records keep discovery order"
    );

    let peace = &report.records[0];
    assert_eq!(peace.title, "Peace deal reached");
    assert!(peace.sentiment > 0.0);
    assert!(peace.locations.contains("Geneva"));

    let collapse = &report.records[1];
    assert!(collapse.sentiment < 0.0);
    assert!(collapse.people.contains("Joe Biden"));

    assert!(report.records[2].organizations.contains("Federal Reserve"));

    let dates: Vec<NaiveDate> = report.trend.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 1, 2)]);
    assert_eq!(report.trend[0].article_count, 2);
    let expected_mean = (peace.sentiment + collapse.sentiment) / 2.0;
    assert!((report.trend[0].mean_sentiment - expected_mean).abs() < 1e-12);
    assert!((report.trend[1].mean_sentiment - report.records[2].sentiment).abs() < 1e-12);
}

#[tokio::test]
async fn no_discovered_links_means_no_articles() {
    let server = MockServer::start().await;
    mount_search(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/articles/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = pipeline(&server).run("nothing here", 10).await;
    assert_eq!(outcome, RunOutcome::NoArticles { discovered: 0 });
}

#[tokio::test]
async fn all_fetches_failing_means_no_articles() {
    let server = MockServer::start().await;
    mount_search(&server, &["x1", "x2"]).await;
    mount_article(&server, "x1", ResponseTemplate::new(404)).await;
    mount_article(&server, "x2", ResponseTemplate::new(503)).await;

    let outcome = pipeline(&server).run("broken", 10).await;
    assert_eq!(outcome, RunOutcome::NoArticles { discovered: 2 });
}

#[tokio::test]
async fn duplicate_links_are_fetched_once() {
    let server = MockServer::start().await;
    mount_search(&server, &["d1", "d1"]).await;

    Mock::given(method("GET"))
        .and(path("/articles/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page(
            "Budget vote",
            "2024-03-05T10:00:00Z",
            "Lawmakers approved the budget after a long debate in Congress.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let RunOutcome::Completed(report) = pipeline(&server).run("budget", 10).await else {
        panic!("expected a completed run");
    };
    assert_eq!(report.discovered, 1);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn shutdown_before_fetching_keeps_nothing() {
    let server = MockServer::start().await;
    mount_search(&server, &["s1", "s2"]).await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/articles/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = pipeline(&server)
        .run_until("cancelled", 10, std::future::ready(()))
        .await;
    assert_eq!(outcome, RunOutcome::NoArticles { discovered: 2 });
}
