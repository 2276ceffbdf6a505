//! JSON result file.

use crate::book::Book;
use std::fs;
use std::path::{Path, PathBuf};

/// File name written inside the output directory.
pub const JSON_FILE: &str = "books.json";

/// Writes `books.json` under `dir`, creating the directory as needed.
///
/// Returns the file path together with the serialized text; the same text is
/// what the upload step POSTs, so the file and the API always see identical
/// bytes. An empty run writes `[]`.
pub fn write_json(books: &[Book], dir: &Path) -> crate::Result<(PathBuf, String)> {
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(books)?;
    let path = dir.join(JSON_FILE);
    fs::write(&path, &json)?;

    Ok((path, json))
}
