//! Core domain types shared by the merger and the CLI.

use std::path::{Path, PathBuf};

/// Structured source holding the canonical word list.
pub const DEFAULT_SOURCE_FILE: &str = "words.json";

/// Plain-text working list, one word per line.
pub const DEFAULT_WORKING_FILE: &str = "words.txt";

/// Locations of the two files taking part in a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePaths {
    pub source: PathBuf,
    pub working: PathBuf,
}

impl MergePaths {
    pub fn new(source: impl Into<PathBuf>, working: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), working: working.into() }
    }

    /// Resolve the default file names against `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_SOURCE_FILE), dir.join(DEFAULT_WORKING_FILE))
    }
}

impl Default for MergePaths {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_FILE, DEFAULT_WORKING_FILE)
    }
}

/// Counts gathered while merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Distinct normalized words in the structured source.
    pub canonical: usize,
    /// Distinct normalized words in the working list before the merge.
    pub working: usize,
    /// Canonical words that were not already in the working list.
    pub added: usize,
    /// Words written back to the working list.
    pub total: usize,
}
