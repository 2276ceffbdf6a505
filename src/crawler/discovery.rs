//! Category discovery from the home page nav list.

use crate::crawler::fetcher::fetch_html;
use crate::crawler::selectors;
use reqwest::Client;
use scraper::Html;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use url::Url;

/// One discovered category: display name plus absolute listing URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    /// Decoded, trimmed name as shown in the nav.
    pub name: String,
    /// Absolute URL of the category's first listing page.
    pub url: Url,
}

/// Insertion-ordered category map with case-insensitive name lookup.
///
/// Keys are normalized names (trimmed and lowercased); the stored display
/// name keeps the casing of the first occurrence. Re-inserting an existing
/// key replaces the URL but neither the display name nor the position, so
/// iteration order is always first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    entries: Vec<CategoryEntry>,
    index: HashMap<String, usize>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized lookup key for a display name.
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Inserts or updates a category.
    pub fn insert(&mut self, name: &str, url: Url) {
        let key = Self::normalize(name);
        match self.index.get(&key) {
            Some(&at) => self.entries[at].url = url,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(CategoryEntry {
                    name: name.trim().to_string(),
                    url,
                });
            }
        }
    }

    /// Looks a category up by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.index
            .get(&Self::normalize(name))
            .map(|&at| &self.entries[at])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&Self::normalize(name))
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses the home page's nav list into a category map.
///
/// Entries with an empty name or href are skipped, as are hrefs that do not
/// resolve against `base_url`. A page without the nav structure yields an
/// empty map; that is the caller's "nothing to do" signal, not an error.
pub fn parse_category_nav(html: &str, base_url: &Url) -> CategoryMap {
    let document = Html::parse_document(html);
    let mut map = CategoryMap::new();

    for link in document.select(&selectors::CATEGORY_LINKS) {
        let name = link.text().collect::<String>().trim().to_string();
        let href = link.value().attr("href").unwrap_or("").trim().to_string();
        if name.is_empty() || href.is_empty() {
            continue;
        }

        match base_url.join(&href) {
            Ok(url) => map.insert(&name, url),
            Err(e) => {
                tracing::debug!("Skipping category '{}' with bad href '{}': {}", name, href, e);
            }
        }
    }

    map
}

/// Fetches the home page and discovers the categories it links to.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base_url` - The catalog's home page
/// * `cancel` - Token cancelling the whole run
///
/// # Returns
///
/// * `Ok(CategoryMap)` - Discovered categories, possibly empty
/// * `Err(ScrapeError)` - The home page could not be fetched
pub async fn discover_categories(
    client: &Client,
    base_url: &Url,
    cancel: &CancellationToken,
) -> crate::Result<CategoryMap> {
    let html = fetch_html(client, base_url, cancel).await?;
    let map = parse_category_nav(&html, base_url);
    tracing::debug!("Discovered {} categories on {}", map.len(), base_url);
    Ok(map)
}
