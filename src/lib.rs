//! wordlist-merge: keep a hand-edited word list in sync with its canonical source
//!
//! Merges the `words` array of a JSON document into a plain-text list of one
//! word per line, lowercasing, deduplicating and sorting the result so the
//! list can be binary-searched by a spell checker.

pub mod domain;
pub mod error;
pub mod merge;
pub mod words;

pub use domain::{MergePaths, MergeSummary};
pub use error::MergeError;
pub use merge::{merge_with_summary, merge_word_lists};
