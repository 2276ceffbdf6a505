//! XML result file.
//!
//! Tag names are capitalized (`Books`, `Book`, `Title`, ...) while the JSON
//! output is lowercase, so serialization goes through XML-only mirror types
//! instead of reusing the [`Book`] serde derive.

use crate::book::Book;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name written inside the output directory.
pub const XML_FILE: &str = "books.xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "Books")]
struct XmlBooks<'a> {
    #[serde(rename = "Book")]
    items: Vec<XmlBook<'a>>,
}

#[derive(Serialize)]
struct XmlBook<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Stars")]
    stars: u8,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Url")]
    url: &'a str,
}

impl<'a> From<&'a Book> for XmlBook<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            title: &book.title,
            price: book.price,
            stars: book.stars,
            category: &book.category,
            url: &book.url,
        }
    }
}

/// Writes `books.xml` under `dir`, creating the directory as needed.
///
/// The document is indented and carries an XML declaration; an empty run
/// still produces a valid document with an empty root element.
pub fn write_xml(books: &[Book], dir: &Path) -> crate::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let wrapper = XmlBooks {
        items: books.iter().map(XmlBook::from).collect(),
    };

    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    wrapper.serialize(serializer)?;

    let path = dir.join(XML_FILE);
    fs::write(&path, format!("{}\n{}", XML_DECLARATION, body))?;

    Ok(path)
}
