//! The scraped record type.

use serde::{Deserialize, Serialize};

/// One catalog item extracted from a listing page.
///
/// A record is built once from a product block during the crawl and never
/// mutated afterwards; filtering drops whole records but does not edit them.
/// Serialized field names are lowercase, matching the JSON files and the
/// upload payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Full title, decoded and trimmed.
    pub title: String,
    /// Price as a plain number, currency markers stripped. `0.0` when the
    /// displayed text was unparseable.
    pub price: f64,
    /// Star rating 1-5, or 0 when the rating element was missing or odd.
    pub stars: u8,
    /// Display name of the category the record was found under.
    pub category: String,
    /// Absolute URL of the item's detail page.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_lowercase_field_names() {
        let book = Book {
            title: "A Light in the Attic".to_string(),
            price: 51.77,
            stars: 3,
            category: "Poetry".to_string(),
            url: "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
                .to_string(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["title"], "A Light in the Attic");
        assert_eq!(json["price"], 51.77);
        assert_eq!(json["stars"], 3);
        assert_eq!(json["category"], "Poetry");
        assert!(json["url"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let book = Book {
            title: "Sharp Objects".to_string(),
            price: 47.82,
            stars: 4,
            category: "Mystery".to_string(),
            url: "https://books.toscrape.com/catalogue/sharp-objects_997/index.html".to_string(),
        };

        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
