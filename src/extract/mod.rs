//! Pure parsers for scraped field text.

mod price;
mod rating;

pub use price::parse_price;
pub use rating::parse_rating;
