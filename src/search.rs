//! Greedy ladder search over an implicit word graph.
//!
//! Vertices are dictionary words. Each step rebuilds a working set of scored
//! candidates, commits to the cheapest one and appends it to the ladder. There
//! is no open list and no backtracking: a word that has been scored once is
//! closed for the rest of the search, whether or not it was selected.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use clap::ValueEnum;
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::error::{LadderError, Result};
use crate::heuristic::{HammingHeuristic, Heuristic};

/// Which dictionary words are admitted as candidates during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NeighborPolicy {
    /// Same length as the start word and exactly one substitution away from it.
    #[default]
    Adjacent,
    /// Every unclosed word, scored against the current frontier word.
    Unconstrained,
}

/// A word scored during one expansion step.
///
/// Two candidates are equal when their words are equal; `cost` never takes part
/// in identity. Ranking is done by comparing `cost` explicitly.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub word: String,
    pub cost: i32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

/// What a single expansion step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// The word appended to the ladder
    pub selected: String,
    /// Its `g + h` cost
    pub cost: i32,
    /// Number of candidates admitted into the working set this step
    pub admitted: usize,
    /// Size of the closed set after the step
    pub closed_total: usize,
}

/// The ordered words discovered by a search, excluding the start word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder(Vec<String>);

impl Ladder {
    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Whether the ladder ends at `stop`
    pub fn reaches(&self, stop: &str) -> bool {
        self.last() == Some(stop)
    }

    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Ladder {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shortest path: [{}]", self.0.join(", "))
    }
}

#[derive(Debug, Default)]
struct SearchState {
    closed: HashSet<String>,
    path: Vec<String>,
    working: Vec<Candidate>,
}

impl SearchState {
    fn reset(&mut self) {
        self.closed.clear();
        self.path.clear();
        self.working.clear();
    }
}

/// The greedy ladder search engine.
///
/// One engine owns one dictionary and may run any number of searches; all
/// per-search state is cleared at the start of [`LadderSearch::find_path`].
#[derive(Debug)]
pub struct LadderSearch<H = HammingHeuristic> {
    dictionary: Dictionary,
    heuristic: H,
    policy: NeighborPolicy,
    state: SearchState,
}

impl LadderSearch<HammingHeuristic> {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_heuristic(dictionary, HammingHeuristic)
    }
}

impl<H: Heuristic> LadderSearch<H> {
    pub fn with_heuristic(dictionary: Dictionary, heuristic: H) -> Self {
        Self {
            dictionary,
            heuristic,
            policy: NeighborPolicy::default(),
            state: SearchState::default(),
        }
    }

    pub fn with_policy(mut self, policy: NeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> NeighborPolicy {
        self.policy
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The ladder built so far by the current (or last) search
    pub fn path(&self) -> &[String] {
        &self.state.path
    }

    pub fn closed_len(&self) -> usize {
        self.state.closed.len()
    }

    pub fn is_closed(&self, word: &str) -> bool {
        self.state.closed.contains(word)
    }

    /// Build a ladder from `start` towards `stop`.
    ///
    /// Steps until the newest word is `stop` or every dictionary word has been
    /// closed. On exhaustion the returned ladder does not end at `stop`.
    /// `start == stop` yields an empty ladder.
    pub fn find_path(&mut self, start: &str, stop: &str) -> Result<Ladder> {
        self.state.reset();
        validate_endpoints(start, stop)?;

        if start == stop {
            return Ok(Ladder::default());
        }

        tracing::debug!(
            start,
            stop,
            policy = ?self.policy,
            same_length = self.dictionary.words_of_length(start.chars().count()),
            "Starting search over {} words",
            self.dictionary.len()
        );

        let mut steps = 0usize;
        while !self.reached(stop) && self.state.closed.len() < self.dictionary.len() {
            self.step(start, stop)?;
            steps += 1;
        }

        let ladder = Ladder(self.state.path.clone());
        if ladder.reaches(stop) {
            tracing::info!(start, stop, steps, "Found ladder of {} words", ladder.len());
        } else {
            tracing::warn!(
                start,
                stop,
                steps,
                closed = self.state.closed.len(),
                "Dictionary exhausted before reaching stop word"
            );
        }
        Ok(ladder)
    }

    /// Run one expansion step and append the selected word to the ladder.
    ///
    /// Fails with [`LadderError::InvalidInput`] for unusable endpoints and with
    /// [`LadderError::NoPath`] when no candidate is admitted.
    pub fn step(&mut self, start: &str, stop: &str) -> Result<StepReport> {
        validate_endpoints(start, stop)?;

        let current = self
            .state
            .path
            .last()
            .map_or_else(|| start.to_string(), Clone::clone);

        self.expand(start, stop, &current);

        let selected = select_lowest_cost(&self.state.working, stop)
            .cloned()
            .ok_or_else(|| LadderError::NoPath {
                from: current.clone(),
            })?;

        self.state.path.push(selected.word.clone());

        let report = StepReport {
            selected: selected.word,
            cost: selected.cost,
            admitted: self.state.working.len(),
            closed_total: self.state.closed.len(),
        };
        tracing::debug!(
            current = %current,
            selected = %report.selected,
            cost = report.cost,
            admitted = report.admitted,
            closed = report.closed_total,
            "expansion step"
        );
        Ok(report)
    }

    fn reached(&self, stop: &str) -> bool {
        self.state.path.last().is_some_and(|w| w == stop)
    }

    /// Rebuild the working set and close every word scored this step.
    ///
    /// Scoring runs in parallel; the collect keeps dictionary order so the
    /// working set is enumerated exactly as a sequential scan would build it.
    fn expand(&mut self, start: &str, stop: &str, current: &str) {
        let closed = &self.state.closed;
        let heuristic = &self.heuristic;
        let policy = self.policy;
        let start_len = start.chars().count();

        let scored: Vec<(&str, Option<i32>)> = self
            .dictionary
            .words()
            .par_iter()
            .filter(|w| !closed.contains(w.as_str()))
            .filter_map(|w| match policy {
                // Adjacency is measured against the original start word, not
                // the current frontier word, so later steps never admit words
                // more than one substitution from start.
                NeighborPolicy::Adjacent => (w.chars().count() == start_len
                    && heuristic.distance(start, w) == 1)
                    .then(|| (w.as_str(), Some(path_cost(heuristic, start, w, stop)))),
                // The start word itself scores `0 + h`, so it can tie with stop.
                NeighborPolicy::Unconstrained => {
                    Some((w.as_str(), defined_cost(heuristic, current, w, stop)))
                }
            })
            .collect();

        self.state.working.clear();
        for (word, cost) in scored {
            self.state.closed.insert(word.to_string());
            if let Some(cost) = cost {
                self.state.working.push(Candidate {
                    word: word.to_string(),
                    cost,
                });
            }
        }
    }
}

fn validate_endpoints(start: &str, stop: &str) -> Result<()> {
    if start.is_empty() || stop.is_empty() {
        return Err(LadderError::InvalidInput(
            "start and stop words must not be empty".to_string(),
        ));
    }
    if start.chars().count() != stop.chars().count() {
        return Err(LadderError::InvalidInput(format!(
            "'{start}' and '{stop}' have different lengths"
        )));
    }
    Ok(())
}

/// `g + h`: distance from `origin` to `word` plus distance from `word` to `stop`.
fn path_cost<H: Heuristic>(heuristic: &H, origin: &str, word: &str, stop: &str) -> i32 {
    heuristic.distance(origin, word) + heuristic.distance(word, stop)
}

/// Like [`path_cost`], but `None` if either distance is undefined.
fn defined_cost<H: Heuristic>(heuristic: &H, origin: &str, word: &str, stop: &str) -> Option<i32> {
    let g = heuristic.distance(origin, word);
    let h = heuristic.distance(word, stop);
    (g >= 0 && h >= 0).then_some(g + h)
}

/// Single pass over the working set keeping the first strictly-cheapest
/// candidate. Seeing `stop` ends the pass immediately, so candidates after it
/// are never compared.
fn select_lowest_cost<'a>(working: &'a [Candidate], stop: &str) -> Option<&'a Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in working {
        if best.map_or(true, |b| candidate.cost < b.cost) {
            best = Some(candidate);
        }
        if candidate.word == stop {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(word: &str, cost: i32) -> Candidate {
        Candidate {
            word: word.to_string(),
            cost,
        }
    }

    #[test]
    fn test_select_stops_scanning_at_goal() {
        let working = vec![candidate("aaa", 3), candidate("bbb", 2), candidate("ccc", 0)];
        let best = select_lowest_cost(&working, "bbb").unwrap();
        assert_eq!(best.word, "bbb");
    }

    #[test]
    fn test_select_keeps_cheaper_word_seen_before_goal() {
        let working = vec![candidate("aaa", 1), candidate("bbb", 2), candidate("ccc", 0)];
        let best = select_lowest_cost(&working, "bbb").unwrap();
        assert_eq!(best.word, "aaa");
    }

    #[test]
    fn test_select_ties_resolve_to_first() {
        let working = vec![candidate("aaa", 2), candidate("bbb", 2)];
        assert_eq!(select_lowest_cost(&working, "zzz").unwrap().word, "aaa");
    }

    #[test]
    fn test_select_empty_working_set() {
        assert!(select_lowest_cost(&[], "cot").is_none());
    }

    #[test]
    fn test_candidate_identity_ignores_cost() {
        assert_eq!(candidate("cot", 1), candidate("cot", 7));

        let mut set = HashSet::new();
        set.insert(candidate("cot", 1));
        assert!(!set.insert(candidate("cot", 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_defined_cost_rejects_length_mismatch() {
        let h = HammingHeuristic;
        assert_eq!(defined_cost(&h, "cat", "cots", "cot"), None);
        assert_eq!(defined_cost(&h, "cat", "cot", "cot"), Some(1));
    }

    #[test]
    fn test_validate_endpoints() {
        assert!(validate_endpoints("cat", "cot").is_ok());
        assert!(matches!(
            validate_endpoints("cat", "cots"),
            Err(LadderError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_endpoints("", "cot"),
            Err(LadderError::InvalidInput(_))
        ));
    }
}
