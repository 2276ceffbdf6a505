//! Price text normalization.

/// Parses a displayed price into a plain number.
///
/// Keeps only ASCII digits, dots, and commas, then treats commas as decimal
/// separators. This tolerates currency symbols and the mangled encodings the
/// catalog sometimes serves (e.g. `Â£51.77`). Unparseable text yields `0.0`
/// rather than an error; a missing price is not worth losing the record over.
///
/// # Arguments
///
/// * `text` - The raw price text as displayed on the listing page
///
/// # Returns
///
/// The parsed price, always non-negative, or `0.0` on failure
///
/// # Example
///
/// ```
/// use bookgrab::extract::parse_price;
///
/// assert_eq!(parse_price("£51.77"), 51.77);
/// assert_eq!(parse_price("13,99 €"), 13.99);
/// assert_eq!(parse_price("gratis"), 0.0);
/// ```
pub fn parse_price(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let normalized = kept.replace(',', ".");
    normalized.parse::<f64>().unwrap_or(0.0)
}
