//! Post-extraction record filtering.

use crate::book::Book;
use crate::config::Config;

/// Applies the configured price band and exact-star criteria.
///
/// Unset criteria pass everything, so with none configured this is the
/// identity. Bounds are inclusive. Order is preserved; records are dropped,
/// never modified.
pub fn apply_filters(books: Vec<Book>, config: &Config) -> Vec<Book> {
    books
        .into_iter()
        .filter(|book| config.min_price.map_or(true, |min| book.price >= min))
        .filter(|book| config.max_price.map_or(true, |max| book.price <= max))
        .filter(|book| config.stars.map_or(true, |stars| book.stars == stars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, price: f64, stars: u8) -> Book {
        Book {
            title: title.to_string(),
            price,
            stars,
            category: "Travel".to_string(),
            url: format!("https://books.example.com/{}", title),
        }
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let input = vec![book("a", 5.0, 1), book("b", 50.0, 5)];
        let output = apply_filters(input.clone(), &Config::default());
        assert_eq!(output, input);
    }

    #[test]
    fn test_price_band_is_inclusive() {
        let config = Config {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Config::default()
        };
        let input = vec![
            book("below", 9.99, 3),
            book("at-min", 10.0, 3),
            book("inside", 15.0, 3),
            book("at-max", 20.0, 3),
            book("above", 20.01, 3),
        ];

        let output = apply_filters(input, &config);
        assert_eq!(titles(&output), ["at-min", "inside", "at-max"]);
    }

    #[test]
    fn test_stars_must_match_exactly() {
        let config = Config {
            stars: Some(4),
            ..Config::default()
        };
        let input = vec![book("three", 5.0, 3), book("four", 5.0, 4), book("five", 5.0, 5)];

        let output = apply_filters(input, &config);
        assert_eq!(titles(&output), ["four"]);
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let config = Config {
            min_price: Some(10.0),
            stars: Some(2),
            ..Config::default()
        };
        let input = vec![
            book("cheap-two-star", 5.0, 2),
            book("pricey-two-star", 15.0, 2),
            book("pricey-three-star", 15.0, 3),
        ];

        let output = apply_filters(input, &config);
        assert_eq!(titles(&output), ["pricey-two-star"]);
    }

    #[test]
    fn test_all_filtered_leaves_empty() {
        let config = Config {
            min_price: Some(100.0),
            ..Config::default()
        };
        let output = apply_filters(vec![book("a", 5.0, 1)], &config);
        assert!(output.is_empty());
    }
}
