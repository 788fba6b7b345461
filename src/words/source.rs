//! Structured word source (`words.json`).

use crate::error::{MergeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Only the `words` field is read; anything else in the document is ignored.
#[derive(Debug, Deserialize)]
struct WordSource {
    words: Option<Vec<String>>,
}

/// Load the canonical word sequence from a JSON document at `path`.
///
/// Words are returned as stored; normalization happens in the merge.
pub fn load_canonical_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::from_read(path, e))?;
    parse_canonical_words(&content, path)
}

fn parse_canonical_words(content: &str, path: &Path) -> Result<Vec<String>> {
    let source: WordSource = serde_json::from_str(content)
        .map_err(|e| MergeError::Parse { path: path.to_path_buf(), source: e })?;

    let words = source.words.ok_or_else(|| MergeError::MissingWords { path: path.to_path_buf() })?;
    tracing::debug!("Loaded {} canonical words from {}", words.len(), path.display());
    Ok(words)
}
