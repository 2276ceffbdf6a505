//! CSS selectors for the catalog's listing markup.
//!
//! All selectors are compiled once and shared. The `unwrap` calls only see
//! literal selector strings, so a failure is a typo caught by the tests.

use scraper::Selector;
use std::sync::LazyLock;

/// Anchors nested one level under the sidebar nav list, one per category.
/// The top-level "Books" anchor sits outside the nested list and is skipped.
pub static CATEGORY_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul.nav-list li ul li a").unwrap());

/// One product block per catalog item.
pub static PRODUCT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").unwrap());

/// Heading link inside a product block, carrying title and detail href.
pub static PRODUCT_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3 a").unwrap());

/// Displayed price inside a product block.
pub static PRICE_DISPLAY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.price_color").unwrap());

/// Star-rating element; the rating word lives in its class attribute.
pub static STAR_RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").unwrap());

/// Pagination "next" link at the bottom of a listing page.
pub static NEXT_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li.next a").unwrap());
