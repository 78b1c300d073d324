use word_ladder::{hamming_distance, HammingHeuristic, Heuristic, UNDEFINED_DISTANCE};

#[test]
fn test_identical_words() {
    assert_eq!(hamming_distance("cat", "cat"), 0);
    assert_eq!(hamming_distance("ruby", "ruby"), 0);
}

#[test]
fn test_single_substitution() {
    assert_eq!(hamming_distance("cat", "cot"), 1);
    assert_eq!(hamming_distance("duck", "luck"), 1);
}

#[test]
fn test_every_position_differs() {
    assert_eq!(hamming_distance("cat", "dog"), 3);
    assert_eq!(hamming_distance("duck", "ruby"), 3);
}

#[test]
fn test_symmetry() {
    let pairs = [("cat", "cot"), ("cold", "warm"), ("duck", "ruby"), ("abc", "cba")];
    for (a, b) in pairs {
        assert_eq!(hamming_distance(a, b), hamming_distance(b, a), "{} / {}", a, b);
    }
}

#[test]
fn test_unequal_length_is_undefined() {
    assert_eq!(hamming_distance("cat", "cats"), UNDEFINED_DISTANCE);
    assert_eq!(hamming_distance("cats", "cat"), -1);
    assert_eq!(hamming_distance("", "a"), -1);
}

#[test]
fn test_empty_words() {
    assert_eq!(hamming_distance("", ""), 0);
}

#[test]
fn test_positional_not_set_based() {
    // Same letters, different positions
    assert_eq!(hamming_distance("tab", "bat"), 2);
}

#[test]
fn test_heuristic_trait_object() {
    let heuristic: Box<dyn Heuristic> = Box::new(HammingHeuristic);
    assert_eq!(heuristic.distance("cog", "dog"), 1);
    assert_eq!(heuristic.distance("cog", "dogs"), UNDEFINED_DISTANCE);
}

#[test]
fn test_counts_multibyte_chars_once() {
    assert_eq!(hamming_distance("café", "cafe"), 1);
    assert_eq!(hamming_distance("naïve", "naive"), 1);
}

#[test]
fn test_trait_matches_free_function() {
    let h = HammingHeuristic;
    assert_eq!(h.distance("cold", "cord"), hamming_distance("cold", "cord"));
    assert_eq!(h.distance("cold", "co"), UNDEFINED_DISTANCE);
}
