//! Crawl pipeline for the catalog site
//!
//! This module contains the scraping logic, including:
//! - HTTP fetching with cancellation support
//! - Category discovery from the home page nav
//! - Selection of requested categories with backfill
//! - Paginated per-category extraction
//! - Record filtering

mod category;
mod coordinator;
mod discovery;
mod fetcher;
mod filter;
mod selection;
pub(crate) mod selectors;

pub use category::{crawl_category, parse_listing_page, ListingPage};
pub use coordinator::{run_scrape, Scraper};
pub use discovery::{discover_categories, parse_category_nav, CategoryEntry, CategoryMap};
pub use fetcher::{build_http_client, fetch_html, REQUEST_TIMEOUT};
pub use filter::apply_filters;
pub use selection::{select_categories, DEFAULT_CATEGORIES, SELECTION_LIMIT};
