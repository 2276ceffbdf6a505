//! Category selection with deterministic backfill.

use crate::crawler::discovery::{CategoryEntry, CategoryMap};
use std::collections::HashSet;

/// Categories substituted when the user requested none.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Travel", "Mystery", "Science Fiction"];

/// Upper bound on categories crawled per run.
pub const SELECTION_LIMIT: usize = 3;

/// Resolves the requested category names against the discovered map.
///
/// Matching entries are taken in discovery order, capped at
/// [`SELECTION_LIMIT`]. When fewer than the limit match, the remaining slots
/// are backfilled with the other discovered categories, again in discovery
/// order. Nothing is invented: a map with two entries yields two, and a
/// category never appears twice.
///
/// # Arguments
///
/// * `map` - Categories discovered on the home page
/// * `requested` - Names the user asked for; empty falls back to
///   [`DEFAULT_CATEGORIES`]
pub fn select_categories(map: &CategoryMap, requested: &[String]) -> Vec<CategoryEntry> {
    let mut wanted: HashSet<String> = requested
        .iter()
        .map(|name| CategoryMap::normalize(name))
        .filter(|key| !key.is_empty())
        .collect();

    if wanted.is_empty() {
        tracing::info!(
            "No categories requested, using defaults: {}",
            DEFAULT_CATEGORIES.join(", ")
        );
        wanted = DEFAULT_CATEGORIES
            .iter()
            .map(|name| CategoryMap::normalize(name))
            .collect();
    }

    let mut selected: Vec<CategoryEntry> = map
        .iter()
        .filter(|entry| wanted.contains(&CategoryMap::normalize(&entry.name)))
        .take(SELECTION_LIMIT)
        .cloned()
        .collect();

    if selected.len() < SELECTION_LIMIT {
        let taken: HashSet<String> = selected
            .iter()
            .map(|entry| CategoryMap::normalize(&entry.name))
            .collect();

        for entry in map.iter() {
            if selected.len() >= SELECTION_LIMIT {
                break;
            }
            if !taken.contains(&CategoryMap::normalize(&entry.name)) {
                selected.push(entry.clone());
            }
        }
    }

    selected
}
