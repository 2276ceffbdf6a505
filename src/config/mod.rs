//! Configuration module for bookgrab
//!
//! Handles layered configuration: built-in defaults, an optional TOML file,
//! `BOOKS_`-prefixed environment variables, and finally command-line flags
//! applied by the binary. Validation runs once on the merged result.
//!
//! # Example
//!
//! ```no_run
//! use bookgrab::config::{load_config, validate};
//!
//! let config = load_config(None).unwrap();
//! validate(&config).unwrap();
//! println!("Scraping {}", config.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{load_config, split_csv, DEFAULT_CONFIG_FILE};

// Re-export validation
pub use validation::validate;
