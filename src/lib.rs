//! # Word Ladder
//!
//! Finds a "word ladder" between two dictionary words using a greedy,
//! Hamming-distance guided search.
//!
//! Each step scores the admissible dictionary words by `g + h` (distance from
//! the start word plus distance to the stop word), commits to the cheapest one
//! and never backtracks. The result is a ladder, not necessarily the shortest.

pub mod dictionary;
pub mod error;
pub mod heuristic;
pub mod search;

pub use dictionary::Dictionary;
pub use error::{LadderError, Result};
pub use heuristic::{hamming_distance, HammingHeuristic, Heuristic, UNDEFINED_DISTANCE};
pub use search::{Candidate, Ladder, LadderSearch, NeighborPolicy, StepReport};

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Result<Dictionary> {
    Dictionary::parse(include_str!("../dictionary/words.txt"))
}
