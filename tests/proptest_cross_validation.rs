//! Property tests checking the automaton and the trie search against the
//! classical dynamic-programming edit distance.

use levenshtein_search::distance::{levenshtein, search_naive};
use levenshtein_search::{Dictionary, LevenshteinAutomaton};
use proptest::prelude::*;
use std::collections::HashMap;

/// Small alphabet so random strings are often close to each other.
fn ascii_word() -> impl Strategy<Value = String> {
    "[a-d]{0,8}"
}

/// Mixes one-, two- and three-byte code points.
fn unicode_word() -> impl Strategy<Value = String> {
    "[aé日b]{0,6}"
}

fn distance() -> impl Strategy<Value = usize> {
    0usize..=4
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_automaton_agrees_with_levenshtein(
        pattern in ascii_word(),
        input in ascii_word(),
        k in distance(),
    ) {
        let automaton = LevenshteinAutomaton::new(&pattern, k).unwrap();
        let expected = levenshtein(&pattern, &input) <= k;
        prop_assert_eq!(automaton.matches(&input), expected);
    }

    #[test]
    fn prop_automaton_agrees_with_levenshtein_unicode(
        pattern in unicode_word(),
        input in unicode_word(),
        k in distance(),
    ) {
        let automaton = LevenshteinAutomaton::new(&pattern, k).unwrap();
        let distance = levenshtein(&pattern, &input);
        let state = automaton.run(&input);
        prop_assert_eq!(automaton.is_match(&state), distance <= k);
        if distance <= k {
            prop_assert_eq!(automaton.distance(&state), Some(distance));
        }
    }

    #[test]
    fn prop_state_invariants(
        pattern in ascii_word(),
        input in ascii_word(),
        k in distance(),
    ) {
        let automaton = LevenshteinAutomaton::new(&pattern, k).unwrap();
        let mut state = automaton.start();
        for c in input.chars() {
            state = automaton.step(&state, c);
            let positions = state.positions();
            prop_assert_eq!(positions.len(), state.distances().len());
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(positions.iter().all(|&p| p <= automaton.pattern_len()));
            prop_assert!(state.distances().iter().all(|&d| usize::from(d) <= k));
            prop_assert!(state.len() <= 2 * k + 1);
        }
    }

    #[test]
    fn prop_pruning_is_final(
        pattern in ascii_word(),
        input in ascii_word(),
        k in distance(),
    ) {
        let automaton = LevenshteinAutomaton::new(&pattern, k).unwrap();
        let chars: Vec<char> = input.chars().collect();
        let mut state = automaton.start();
        let mut dead_at = None;

        for (i, &c) in chars.iter().enumerate() {
            state = automaton.step(&state, c);
            if dead_at.is_some() {
                prop_assert!(!automaton.can_match(&state));
            } else if !automaton.can_match(&state) {
                dead_at = Some(i + 1);
            }
        }

        if let Some(dead) = dead_at {
            for end in dead..=chars.len() {
                let prefix: String = chars[..end].iter().collect();
                prop_assert!(levenshtein(&pattern, &prefix) > k);
            }
        }
    }

    #[test]
    fn prop_live_state_can_still_match(
        pattern in ascii_word(),
        input in ascii_word(),
        k in distance(),
    ) {
        let automaton = LevenshteinAutomaton::new(&pattern, k).unwrap();
        let state = automaton.run(&input);
        if let Some(&position) = state.positions().first() {
            // Completing with the rest of the pattern costs nothing more.
            let completion: String = input
                .chars()
                .chain(automaton.pattern()[position..].iter().copied())
                .collect();
            prop_assert!(automaton.matches(&completion));
        }
    }

    #[test]
    fn prop_search_all_matches_linear_scan(
        words in prop::collection::vec(ascii_word(), 0..40),
        query in ascii_word(),
        k in 0usize..=3,
    ) {
        let dictionary: Dictionary = words.iter().collect();
        let expected = search_naive(&words, &query, k).unwrap();
        let actual = dictionary.search_all(&query, k).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_exact_search_finds_only_the_word(
        words in prop::collection::vec(ascii_word(), 1..20),
        query in ascii_word(),
    ) {
        let dictionary: Dictionary = words.iter().collect();
        let results = dictionary.search_all(&query, 0).unwrap();
        if words.contains(&query) {
            prop_assert_eq!(results.len(), 1);
            prop_assert_eq!(results.get(&query), dictionary.get(&query));
        } else {
            prop_assert!(results.is_empty());
        }
    }

    #[test]
    fn prop_counters(words in prop::collection::vec(unicode_word(), 0..50)) {
        let mut dictionary = Dictionary::new();
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            let is_new = dictionary.put(word);
            let count = expected.entry(word.as_str()).or_insert(0);
            prop_assert_eq!(is_new, *count == 0);
            *count += 1;
        }

        prop_assert_eq!(dictionary.total_occurrences(), words.len());
        prop_assert_eq!(dictionary.unique_word_count(), expected.len());
        for (word, count) in &expected {
            prop_assert_eq!(dictionary.get(word).map(|info| info.count), Some(*count));
        }
        let sum: usize = dictionary.iter().map(|(_, info)| info.count).sum();
        prop_assert_eq!(sum, dictionary.total_occurrences());
    }
}
