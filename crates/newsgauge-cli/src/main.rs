mod analyze;
mod export;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsgauge")]
#[command(about = "Track news sentiment for a topic over time")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover, analyze and report on recent articles for a topic
    Analyze {
        /// Topic to search for, e.g. "US elections"
        #[arg(long)]
        topic: String,

        /// Number of search results to consider
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(5..=20))]
        articles: u16,

        /// Article fetches in flight at once (overrides NEWSGAUGE_MAX_CONCURRENT_FETCHES)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        concurrency: Option<u16>,

        /// Word appended to the topic query (overrides NEWSGAUGE_SEARCH_QUALIFIER)
        #[arg(long)]
        qualifier: Option<String>,

        /// Write the analyzed articles and trend to this JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = newsgauge_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze {
            topic,
            articles,
            concurrency,
            qualifier,
            export,
        }) => {
            let options = analyze::AnalyzeOptions {
                topic,
                max_results: usize::from(articles),
                concurrency: concurrency.map(usize::from),
                qualifier,
                export,
            };
            analyze::run_analyze(&config, options, shutdown_signal()).await?;
        }
        Some(Commands::Config) => print_config(&config),
        None => println!("newsgauge: run `newsgauge analyze --topic <TOPIC>` or `newsgauge --help`"),
    }

    Ok(())
}

fn print_config(config: &newsgauge_core::AppConfig) {
    let rows = [
        ("NEWSGAUGE_ENV", config.env.to_string()),
        ("NEWSGAUGE_LOG_LEVEL", config.log_level.clone()),
        ("NEWSGAUGE_SEARCH_BASE_URL", config.search_base_url.clone()),
        ("NEWSGAUGE_SEARCH_QUALIFIER", config.search_qualifier.clone()),
        ("NEWSGAUGE_USER_AGENT", config.user_agent.clone()),
        (
            "NEWSGAUGE_REQUEST_TIMEOUT_SECS",
            config.request_timeout_secs.to_string(),
        ),
        (
            "NEWSGAUGE_MAX_CONCURRENT_FETCHES",
            config.max_concurrent_fetches.to_string(),
        ),
        (
            "NEWSGAUGE_SUMMARY_SENTENCES",
            config.summary_sentences.to_string(),
        ),
    ];

    println!("{:<35}VALUE", "SETTING");
    for (key, value) in rows {
        println!("{key:<35}{value}");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; run cannot be interrupted");
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl-c, finishing with the articles fetched so far");
}

#[cfg(test)]
mod tests;
