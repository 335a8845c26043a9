use std::path::PathBuf;

use newsgauge_core::AppConfig;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["newsgauge"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["newsgauge", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["newsgauge", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Config)));
}

#[test]
fn analyze_defaults_to_ten_articles() {
    let cli = Cli::try_parse_from(["newsgauge", "analyze", "--topic", "US elections"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            ref topic,
            articles: 10,
            concurrency: None,
            qualifier: None,
            export: None,
        }) if topic == "US elections"
    ));
}

#[test]
fn analyze_accepts_all_flags() {
    let cli = Cli::try_parse_from([
        "newsgauge",
        "analyze",
        "--topic",
        "climate",
        "--articles",
        "20",
        "--concurrency",
        "8",
        "--qualifier",
        "science",
        "--export",
        "out.json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Analyze {
            articles: 20,
            concurrency: Some(8),
            qualifier: Some(ref q),
            export: Some(ref path),
            ..
        }) if q == "science" && path == &PathBuf::from("out.json")
    ));
}

#[test]
fn analyze_requires_topic() {
    assert!(Cli::try_parse_from(["newsgauge", "analyze"]).is_err());
}

#[test]
fn analyze_rejects_article_count_outside_range() {
    for count in ["4", "21", "0"] {
        let result =
            Cli::try_parse_from(["newsgauge", "analyze", "--topic", "x", "--articles", count]);
        assert!(result.is_err(), "--articles {count} should be rejected");
    }
    for count in ["5", "20"] {
        let result =
            Cli::try_parse_from(["newsgauge", "analyze", "--topic", "x", "--articles", count]);
        assert!(result.is_ok(), "--articles {count} should be accepted");
    }
}

#[test]
fn analyze_rejects_zero_concurrency() {
    let result =
        Cli::try_parse_from(["newsgauge", "analyze", "--topic", "x", "--concurrency", "0"]);
    assert!(result.is_err());
}

#[test]
fn build_pipeline_applies_overrides() {
    let options = analyze::AnalyzeOptions {
        topic: "budget".to_owned(),
        max_results: 10,
        concurrency: Some(2),
        qualifier: Some("economy".to_owned()),
        export: None,
    };
    assert!(analyze::build_pipeline(&AppConfig::default(), &options).is_ok());
}

#[tokio::test]
async fn run_analyze_with_unreachable_search_reports_no_articles() {
    let config = AppConfig {
        search_base_url: "http://127.0.0.1:9".to_owned(),
        request_timeout_secs: 2,
        ..AppConfig::default()
    };
    let options = analyze::AnalyzeOptions {
        topic: "anything".to_owned(),
        max_results: 5,
        concurrency: None,
        qualifier: None,
        export: None,
    };
    let result = analyze::run_analyze(&config, options, std::future::pending::<()>()).await;
    assert!(result.is_ok(), "no-articles runs succeed: {result:?}");
}
