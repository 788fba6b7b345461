//! Word normalization and set union
//!
//! Both inputs are reduced to trimmed, lowercase, non-empty words and unioned
//! into a [`WordSet`], which always iterates in ascending byte order.

pub mod source;
pub mod working;

pub use source::load_canonical_words;
pub use working::{read_working_list, write_working_list};

use std::collections::BTreeSet;

/// Trim and lowercase a raw word. Returns `None` when nothing is left.
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// A deduplicated, sorted set of normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw word. Returns `true` if it was not already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_word(raw) {
            Some(word) => self.words.insert(word),
            None => false,
        }
    }

    pub fn contains(&self, raw: &str) -> bool {
        normalize_word(raw).is_some_and(|w| self.words.contains(&w))
    }

    /// Add every word of `other`. Returns how many were new.
    pub fn absorb(&mut self, other: &WordSet) -> usize {
        let before = self.words.len();
        self.words.extend(other.words.iter().cloned());
        self.words.len() - before
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for raw in iter {
            set.insert(raw.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

/// Union of the canonical words and the working list.
///
/// Origin is not tracked: a word from either side appears exactly once.
pub fn merge_words<C, W>(canonical: C, working: W) -> WordSet
where
    C: IntoIterator,
    C::Item: AsRef<str>,
    W: IntoIterator,
    W::Item: AsRef<str>,
{
    let mut merged: WordSet = canonical.into_iter().collect();
    let working: WordSet = working.into_iter().collect();
    merged.absorb(&working);
    merged
}
