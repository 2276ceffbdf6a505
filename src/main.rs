//! Bookgrab main entry point
//!
//! This is the command-line interface for the bookgrab catalog scraper.

use anyhow::Context;
use bookgrab::config::{load_config, split_csv, validate, Config};
use bookgrab::crawler::Scraper;
use bookgrab::output::{post_results, print_summary, summarize, write_json, write_xml, UploadOutcome};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Bookgrab: a paginated catalog scraper
///
/// Bookgrab discovers the categories of a book catalog site, crawls up to
/// three of them page by page, filters the extracted records, writes JSON
/// and XML result files, and POSTs the JSON to a configured endpoint.
#[derive(Parser, Debug)]
#[command(name = "bookgrab")]
#[command(version)]
#[command(about = "A category-bounded catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (default: ./bookgrab.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the catalog site
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Category to scrape; repeatable, values may be comma-separated
    #[arg(short = 'C', long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Keep only records priced at least this much
    #[arg(long, value_name = "PRICE")]
    min_price: Option<f64>,

    /// Keep only records priced at most this much
    #[arg(long, value_name = "PRICE")]
    max_price: Option<f64>,

    /// Keep only records with exactly this star rating (1-5)
    #[arg(long, value_name = "STARS")]
    stars: Option<u8>,

    /// Endpoint receiving the JSON results via POST
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Directory for books.json and books.xml
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "AGENT")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run failed: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load and merge the configuration layers, command-line flags last
    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli);
    validate(&config).context("invalid configuration")?;

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let scraper = Scraper::new(config.clone(), cancel)?;
    let client = scraper.client().clone();
    let books = scraper.run().await?;

    let (json_path, json) =
        write_json(&books, &config.output_dir).context("failed to write JSON output")?;
    tracing::info!("Wrote {}", json_path.display());

    let xml_path = write_xml(&books, &config.output_dir).context("failed to write XML output")?;
    tracing::info!("Wrote {}", xml_path.display());

    let upload = upload_results(&client, &config, &json).await?;

    print_summary(&summarize(&books), upload.as_ref());
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookgrab=info,warn"),
            1 => EnvFilter::new("bookgrab=debug,info"),
            2 => EnvFilter::new("bookgrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line flags on top of the merged file/env configuration
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if !cli.categories.is_empty() {
        config.categories = cli.categories.iter().flat_map(|raw| split_csv(raw)).collect();
    }
    if let Some(min_price) = cli.min_price {
        config.min_price = Some(min_price);
    }
    if let Some(max_price) = cli.max_price {
        config.max_price = Some(max_price);
    }
    if let Some(stars) = cli.stars {
        config.stars = Some(stars);
    }
    if let Some(api_url) = &cli.api_url {
        config.api_url = Some(api_url.clone());
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }
}

/// Cancels the run on the first interrupt so in-flight fetches stop cleanly
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling run");
            cancel.cancel();
        }
    });
}

/// POSTs the results when an endpoint is configured
async fn upload_results(
    client: &reqwest::Client,
    config: &Config,
    json: &str,
) -> anyhow::Result<Option<UploadOutcome>> {
    let Some(api_url) = config.api_url.as_deref() else {
        tracing::info!("No API URL configured, skipping upload");
        return Ok(None);
    };

    let outcome = post_results(client, api_url, json)
        .await
        .context("failed to POST results")?;
    Ok(Some(outcome))
}
