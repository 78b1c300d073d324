//! Error types for dictionary loading and ladder search.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the ladder search and its dictionary loader.
///
/// Every variant is fatal for the operation that produced it. A failed search
/// yields no usable ladder.
#[derive(Debug, Error)]
pub enum LadderError {
    /// An expansion step admitted no candidates.
    ///
    /// The frontier has no unclosed neighbor left, so the ladder cannot be
    /// extended from `from`.
    #[error("No path available from '{from}'")]
    NoPath { from: String },

    /// The word list could not be read.
    #[error("Failed to load dictionary from {}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list contained no words.
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// The start or stop word cannot form a ladder.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A specialized `Result` type for ladder operations.
pub type Result<T> = std::result::Result<T, LadderError>;
