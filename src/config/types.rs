use serde::Deserialize;
use std::path::PathBuf;

/// Base URL used when no other layer provides one.
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/";

/// Runtime configuration for a scrape run.
///
/// Values are merged from four layers, later layers winning per field:
/// built-in defaults, an optional TOML file, `BOOKS_`-prefixed environment
/// variables, and command-line flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the catalog site; its nav list names the categories.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Requested category names, compared case-insensitively against the
    /// discovered nav entries. Empty means "use the built-in defaults".
    pub categories: Vec<String>,

    /// Keep only records priced at least this much.
    #[serde(rename = "min-price")]
    pub min_price: Option<f64>,

    /// Keep only records priced at most this much.
    #[serde(rename = "max-price")]
    pub max_price: Option<f64>,

    /// Keep only records with exactly this star rating (1-5).
    pub stars: Option<u8>,

    /// Endpoint that receives the JSON results via POST. Unset skips the
    /// upload entirely.
    #[serde(rename = "api-url")]
    pub api_url: Option<String>,

    /// Directory where books.json and books.xml are written.
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,

    /// User-Agent header sent with every request.
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            categories: Vec::new(),
            min_price: None,
            max_price: None,
            stars: None,
            api_url: None,
            output_dir: PathBuf::from("output"),
            user_agent: format!("bookgrab/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
