//! JSON corpus loader
//!
//! A corpus file is a JSON object mapping each URL to its ground truth:
//!
//! ```json
//! {
//!   "https://www.example.com/2021/05/article.html": {
//!     "file": "example-article.html",
//!     "authors": ["Jane Doe", "John Smith"]
//!   }
//! }
//! ```
//!
//! Missing `file` or `authors` fields are read as empty, which makes the
//! entry ineligible rather than failing the whole load.

use crate::error::HarnessError;
use byline_domain::{ComparisonEntry, Corpus};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Entry as it appears in a corpus file
#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(default, alias = "File")]
    file: String,
    #[serde(default, alias = "Authors")]
    authors: Vec<String>,
}

impl From<EntryRecord> for ComparisonEntry {
    fn from(record: EntryRecord) -> Self {
        ComparisonEntry {
            file: record.file,
            authors: record.authors,
        }
    }
}

/// Parse a corpus from its JSON text
pub fn parse_corpus(json: &str) -> Result<Corpus, HarnessError> {
    let records: BTreeMap<String, EntryRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|(url, record)| (url, ComparisonEntry::from(record)))
        .collect())
}

/// Load a corpus from a JSON file
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus, HarnessError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| HarnessError::Corpus(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_corpus(&json)
}
