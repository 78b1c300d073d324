//! The immutable word set the ladder search walks over.

use std::fs;
use std::path::Path;

use crate::error::{LadderError, Result};

/// A duplicate-free, lowercase set of words.
///
/// Words are kept sorted so every scan over the dictionary visits them in the
/// same order. The set is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped and
    /// duplicates collapse. Fails with [`LadderError::EmptyDictionary`] if
    /// nothing is left.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(LadderError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Parse a newline-delimited word list.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines())
    }

    /// Load a newline-delimited word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LadderError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            "Loaded {} words into dictionary",
            dictionary.len()
        );

        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words in scan order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with exactly `length` characters
    pub fn words_of_length(&self, length: usize) -> usize {
        self.words.iter().filter(|w| w.chars().count() == length).count()
    }
}

