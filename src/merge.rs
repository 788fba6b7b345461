//! Merge the canonical word source into the working list.

use crate::domain::{MergePaths, MergeSummary};
use crate::error::Result;
use crate::words::{load_canonical_words, read_working_list, write_working_list, WordSet};
use std::path::Path;

/// Merge `source_path` into `text_path` and return the resulting word count.
///
/// Both inputs are fully read before the text file is replaced; on any error
/// the text file is left untouched.
pub fn merge_word_lists(source_path: &Path, text_path: &Path) -> Result<usize> {
    let summary = merge_with_summary(&MergePaths::new(source_path, text_path))?;
    Ok(summary.total)
}

/// Same as [`merge_word_lists`], with per-input counts.
pub fn merge_with_summary(paths: &MergePaths) -> Result<MergeSummary> {
    let canonical = load_canonical_words(&paths.source)?;
    let working = read_working_list(&paths.working)?;

    let canonical_set: WordSet = canonical.iter().collect();
    let working_set: WordSet = working.iter().collect();

    let mut merged = working_set.clone();
    let added = merged.absorb(&canonical_set);
    write_working_list(&paths.working, &merged)?;

    let summary = MergeSummary {
        canonical: canonical_set.len(),
        working: working_set.len(),
        added,
        total: merged.len(),
    };
    tracing::info!(
        canonical = summary.canonical,
        working = summary.working,
        added = summary.added,
        total = summary.total,
        "Merged {} into {}",
        paths.source.display(),
        paths.working.display()
    );
    Ok(summary)
}
