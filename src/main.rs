//! Grawt main entry point
//!
//! This is the command-line interface for the Grawt article crawler.

use anyhow::Context;
use clap::Parser;
use grawt::config::{load_config_with_hash, DEFAULT_CONFIG_PATH};
use grawt::{Article, ConfigError, Crawler};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Grawt: crawl a site and extract its articles
///
/// Starting from a seed URL, Grawt scrapes headline, body text, publish date
/// and links from each page, following links on the seed's domain up to a
/// depth limit. URLs scraped in earlier runs are skipped.
#[derive(Parser, Debug)]
#[command(name = "grawt")]
#[command(version)]
#[command(about = "Depth-bounded article crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum link depth to follow from the seed
    #[arg(short = 'd', long, default_value_t = 2)]
    max_depth: u32,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print every article as JSON instead of one headline per line
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        Err(ConfigError::Created { path }) => {
            println!("Config file created at: {}", path.display());
            println!("Please fill out the config and restart the application");
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context("loading configuration");
        }
    };

    let mut crawler = Crawler::new(config).context("initializing crawler")?;

    let cancel = crawler.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current page");
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let articles = crawler
        .crawl_site(&cli.url, cli.max_depth)
        .await
        .with_context(|| format!("crawling {}", cli.url))?;

    print_articles(&articles.into_iter().collect::<Vec<_>>(), cli.json)?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("grawt=info,warn"),
            1 => EnvFilter::new("grawt=debug,info"),
            2 => EnvFilter::new("grawt=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints headlines, or the key-value form of every article with `json`
fn print_articles(articles: &[Article], json: bool) -> anyhow::Result<()> {
    if json {
        let values = articles
            .iter()
            .map(Article::to_value)
            .collect::<Result<Vec<_>, _>>()
            .context("serializing articles")?;
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for article in articles {
            println!("{}", article.headline.trim());
        }
    }
    Ok(())
}
