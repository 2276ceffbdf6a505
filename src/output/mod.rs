//! Result serialization, upload, and the end-of-run summary
//!
//! This module handles everything that happens after the crawl produced its
//! records:
//! - Writing the JSON and XML result files
//! - POSTing the JSON to the configured endpoint
//! - Printing the summary block

mod json;
mod stats;
mod upload;
mod xml;

pub use json::{write_json, JSON_FILE};
pub use stats::{print_summary, summarize, RunSummary};
pub use upload::{post_results, UploadOutcome};
pub use xml::{write_xml, XML_FILE};
