//! Per-category pagination crawl and listing extraction.

use crate::book::Book;
use crate::crawler::fetcher::fetch_html;
use crate::crawler::selectors;
use crate::extract::{parse_price, parse_rating};
use reqwest::Client;
use scraper::Html;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Books extracted from one listing page plus the raw "next" href, if any.
#[derive(Debug)]
pub struct ListingPage {
    pub books: Vec<Book>,
    pub next_href: Option<String>,
}

/// Extracts every product block on one listing page.
///
/// Detail links resolve against `page_url`, the page the block actually sits
/// on, because pagination moves the document base from page to page. Missing
/// sub-elements degrade per field (empty title, price 0.0, stars 0) and the
/// record is still produced; only the page itself failing to fetch loses
/// records, and that is handled upstream.
///
/// # Arguments
///
/// * `html` - The listing page body
/// * `page_url` - Absolute URL the body was fetched from
/// * `category` - Display name stamped on every extracted record
pub fn parse_listing_page(html: &str, page_url: &Url, category: &str) -> ListingPage {
    let document = Html::parse_document(html);
    let mut books = Vec::new();

    for block in document.select(&selectors::PRODUCT_BLOCK) {
        let link = block.select(&selectors::PRODUCT_LINK).next();

        let title = link
            .and_then(|a| a.value().attr("title"))
            .unwrap_or("")
            .trim()
            .to_string();
        let href = link.and_then(|a| a.value().attr("href")).unwrap_or("").trim();

        let price_text = block
            .select(&selectors::PRICE_DISPLAY)
            .next()
            .map(|p| p.text().collect::<String>())
            .unwrap_or_default();
        let price = parse_price(price_text.trim());

        let star_class = block
            .select(&selectors::STAR_RATING)
            .next()
            .and_then(|p| p.value().attr("class"))
            .unwrap_or("");
        let stars = parse_rating(star_class);

        // An unresolvable href degrades to the listing page URL, same as an
        // absent one.
        let url = match page_url.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => page_url.to_string(),
        };

        books.push(Book {
            title,
            price,
            stars,
            category: category.to_string(),
            url,
        });
    }

    let next_href = document
        .select(&selectors::NEXT_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty());

    ListingPage { books, next_href }
}

/// Crawls one category from its first page until pagination runs out.
///
/// Pages are fetched strictly in sequence; each "next" href resolves against
/// the page that linked it. Every record carries the category's display name.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `name` - Category display name
/// * `start_url` - Absolute URL of the category's first page
/// * `cancel` - Token cancelling the whole run
///
/// # Returns
///
/// * `Ok(Vec<Book>)` - All records of the category, page order preserved
/// * `Err(ScrapeError)` - A page failed to fetch or a next link was malformed
pub async fn crawl_category(
    client: &Client,
    name: &str,
    start_url: &Url,
    cancel: &CancellationToken,
) -> crate::Result<Vec<Book>> {
    let mut books = Vec::new();
    let mut page_url = start_url.clone();
    let mut page_number = 1u32;

    loop {
        let html = fetch_html(client, &page_url, cancel).await?;
        let page = parse_listing_page(&html, &page_url, name);
        tracing::debug!(
            "Category '{}' page {}: {} product blocks",
            name,
            page_number,
            page.books.len()
        );
        books.extend(page.books);

        let Some(next) = page.next_href else {
            break;
        };
        page_url = page_url.join(&next)?;
        page_number += 1;
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://books.example.com/catalogue/category/books/travel_2/index.html")
            .unwrap()
    }

    fn block(title: &str, price: &str, stars: &str, href: &str) -> String {
        format!(
            r#"<article class="product_pod">
            <h3><a href="{href}" title="{title}">{title}</a></h3>
            <p class="star-rating {stars}"></p>
            <p class="price_color">{price}</p>
            </article>"#
        )
    }

    fn listing(blocks: &str, next: Option<&str>) -> String {
        let pager = next
            .map(|href| format!(r#"<ul class="pager"><li class="next"><a href="{href}">next</a></li></ul>"#))
            .unwrap_or_default();
        format!("<html><body><section>{}{}</section></body></html>", blocks, pager)
    }

    #[test]
    fn test_extracts_full_product_block() {
        let html = listing(
            &block("It's Only the Himalayas", "£45.17", "Two", "../../../its-only-the-himalayas_981/index.html"),
            None,
        );
        let page = parse_listing_page(&html, &page_url(), "Travel");

        assert_eq!(page.books.len(), 1);
        let book = &page.books[0];
        assert_eq!(book.title, "It's Only the Himalayas");
        assert_eq!(book.price, 45.17);
        assert_eq!(book.stars, 2);
        assert_eq!(book.category, "Travel");
        assert_eq!(
            book.url,
            "https://books.example.com/catalogue/its-only-the-himalayas_981/index.html"
        );
        assert!(page.next_href.is_none());
    }

    #[test]
    fn test_decodes_entities_in_title_attribute() {
        let html = listing(
            &block("Salt &amp; Pepper", "£10.00", "Three", "salt/index.html"),
            None,
        );
        let page = parse_listing_page(&html, &page_url(), "Cooking");
        assert_eq!(page.books[0].title, "Salt & Pepper");
    }

    #[test]
    fn test_degrades_missing_fields_without_dropping_record() {
        let html = listing(r#"<article class="product_pod"><h3></h3></article>"#, None);
        let page = parse_listing_page(&html, &page_url(), "Travel");

        assert_eq!(page.books.len(), 1);
        let book = &page.books[0];
        assert_eq!(book.title, "");
        assert_eq!(book.price, 0.0);
        assert_eq!(book.stars, 0);
        // Empty href resolves to the page itself.
        assert_eq!(book.url, page_url().as_str());
    }

    #[test]
    fn test_reads_next_href() {
        let html = listing(&block("A", "£1.00", "One", "a/index.html"), Some("page-2.html"));
        let page = parse_listing_page(&html, &page_url(), "Travel");
        assert_eq!(page.next_href.as_deref(), Some("page-2.html"));
    }

    #[test]
    fn test_blank_next_href_means_last_page() {
        let html = listing(&block("A", "£1.00", "One", "a/index.html"), Some("  "));
        let page = parse_listing_page(&html, &page_url(), "Travel");
        assert!(page.next_href.is_none());
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        let page = parse_listing_page("<html><body></body></html>", &page_url(), "Travel");
        assert!(page.books.is_empty());
        assert!(page.next_href.is_none());
    }

    #[test]
    fn test_preserves_document_order() {
        let blocks = format!(
            "{}{}{}",
            block("First", "£1.00", "One", "f/index.html"),
            block("Second", "£2.00", "Two", "s/index.html"),
            block("Third", "£3.00", "Three", "t/index.html"),
        );
        let page = parse_listing_page(&listing(&blocks, None), &page_url(), "Travel");
        let titles: Vec<_> = page.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }
}
