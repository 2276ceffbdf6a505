//! End-of-run summary
//!
//! Aggregates the filtered records into the block printed after a run:
//! record count, per-category counts, and the price spread.

use crate::book::Book;
use crate::output::upload::UploadOutcome;

/// Aggregates over the records a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of records written and uploaded.
    pub count: usize,

    /// Category name and record count, in first-appearance order.
    pub by_category: Vec<(String, usize)>,

    /// Cheapest price, 0.0 for an empty run.
    pub min_price: f64,

    /// Mean price rounded to two decimals, 0.0 for an empty run.
    pub avg_price: f64,

    /// Most expensive price, 0.0 for an empty run.
    pub max_price: f64,
}

/// Computes the summary for a set of records.
pub fn summarize(books: &[Book]) -> RunSummary {
    let mut by_category: Vec<(String, usize)> = Vec::new();
    for book in books {
        match by_category
            .iter_mut()
            .find(|(name, _)| name == &book.category)
        {
            Some((_, count)) => *count += 1,
            None => by_category.push((book.category.clone(), 1)),
        }
    }

    let mut min_price = 0.0;
    let mut avg_price = 0.0;
    let mut max_price = 0.0;
    if !books.is_empty() {
        min_price = books.iter().map(|b| b.price).fold(f64::INFINITY, f64::min);
        max_price = books.iter().map(|b| b.price).fold(0.0, f64::max);
        let sum: f64 = books.iter().map(|b| b.price).sum();
        avg_price = round2(sum / books.len() as f64);
    }

    RunSummary {
        count: books.len(),
        by_category,
        min_price,
        avg_price,
        max_price,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Prints the summary block to stdout.
///
/// `upload` is `None` when no API endpoint was configured; the block says so
/// instead of showing a status.
pub fn print_summary(summary: &RunSummary, upload: Option<&UploadOutcome>) {
    let categories = summary
        .by_category
        .iter()
        .map(|(name, count)| format!("{}:{}", name, count))
        .collect::<Vec<_>>()
        .join(", ");

    println!();
    println!("===== RUN SUMMARY =====");
    println!("Records sent: {}", summary.count);
    println!("Categories: {}", categories);
    println!(
        "Price (min/avg/max): {} / {} / {}",
        summary.min_price, summary.avg_price, summary.max_price
    );
    match upload {
        Some(outcome) => println!(
            "API status: {} ({})",
            outcome.status,
            if outcome.ok { "success" } else { "failure" }
        ),
        None => println!("API status: skipped (no API URL configured)"),
    }
    println!("=======================");
}
