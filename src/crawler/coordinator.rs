//! Scrape orchestration
//!
//! The coordinator drives one full run in a fixed sequence: discover the
//! category map from the home page, resolve the selection against it, crawl
//! each selected category's pages in order, then filter the combined records.
//! Writing files, uploading, and printing the summary belong to the binary;
//! the library run ends with the filtered records.

use crate::book::Book;
use crate::config::Config;
use crate::crawler::category::crawl_category;
use crate::crawler::discovery::discover_categories;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::filter::apply_filters;
use crate::crawler::selection::select_categories;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Drives one full scrape run.
pub struct Scraper {
    client: Client,
    config: Config,
    cancel: CancellationToken,
}

impl Scraper {
    /// Creates a scraper with its own HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - The merged, validated configuration
    /// * `cancel` - Token cancelling the whole run
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to run
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config, cancel: CancellationToken) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self {
            client,
            config,
            cancel,
        })
    }

    /// The client shared by all fetches of this run. The binary reuses it
    /// for the result upload.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Runs the scrape and returns the filtered records.
    ///
    /// An empty category map short-circuits to an empty result with a
    /// warning; no listing page is fetched. Any fetch failure, including
    /// cancellation, abandons the run and surfaces as the error.
    pub async fn run(&self) -> crate::Result<Vec<Book>> {
        let base_url = Url::parse(&self.config.base_url)?;
        tracing::info!("Starting scrape of {}", base_url);

        let categories = discover_categories(&self.client, &base_url, &self.cancel).await?;
        if categories.is_empty() {
            tracing::warn!("No categories found on {}", base_url);
            return Ok(Vec::new());
        }
        tracing::info!("Found {} categories", categories.len());

        let selected = select_categories(&categories, &self.config.categories);
        tracing::info!(
            "Selected categories: {}",
            selected
                .iter()
                .map(|entry| entry.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut all_books = Vec::new();
        for entry in &selected {
            tracing::info!("Crawling category '{}' ({})", entry.name, entry.url);
            let books = crawl_category(&self.client, &entry.name, &entry.url, &self.cancel).await?;
            tracing::info!("Category '{}' yielded {} records", entry.name, books.len());
            all_books.extend(books);
        }

        let collected = all_books.len();
        let filtered = apply_filters(all_books, &self.config);
        tracing::info!(
            "Collected {} records, {} remain after filters",
            collected,
            filtered.len()
        );

        Ok(filtered)
    }
}

/// Builds a [`Scraper`] and runs it once.
///
/// # Arguments
///
/// * `config` - The merged, validated configuration
/// * `cancel` - Token cancelling the whole run
///
/// # Returns
///
/// * `Ok(Vec<Book>)` - The filtered records
/// * `Err(ScrapeError)` - The run was abandoned
///
/// # Example
///
/// ```no_run
/// use bookgrab::config::load_config;
/// use bookgrab::crawler::run_scrape;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(None)?;
/// let books = run_scrape(config, CancellationToken::new()).await?;
/// println!("{} records", books.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config, cancel: CancellationToken) -> crate::Result<Vec<Book>> {
    let scraper = Scraper::new(config, cancel)?;
    scraper.run().await
}
