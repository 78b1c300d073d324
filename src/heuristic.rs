//! Distance heuristics between dictionary words.
//!
//! The search only needs one measure: the Hamming distance, i.e. the number of
//! positions at which two equal-length words differ. Words of different length
//! have no Hamming distance; that case is reported with a `-1` sentinel rather
//! than an error so the cost arithmetic in the search stays integral.

/// Sentinel returned when two words have different lengths.
pub const UNDEFINED_DISTANCE: i32 = -1;

/// A distance estimate between two words.
pub trait Heuristic: Send + Sync {
    /// Distance from `a` to `b`, or [`UNDEFINED_DISTANCE`] when undefined.
    fn distance(&self, a: &str, b: &str) -> i32;
}

/// Hamming distance heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingHeuristic;

impl Heuristic for HammingHeuristic {
    fn distance(&self, a: &str, b: &str) -> i32 {
        hamming_distance(a, b)
    }
}

/// Count the character positions at which `a` and `b` differ.
///
/// Lengths are compared in characters, so multi-byte letters count once.
pub fn hamming_distance(a: &str, b: &str) -> i32 {
    if a.chars().count() != b.chars().count() {
        return UNDEFINED_DISTANCE;
    }
    let differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    i32::try_from(differing).unwrap_or(i32::MAX)
}

