//! Classical dynamic-programming edit distance.
//!
//! This is the O(n·m) baseline the automaton search is checked and measured
//! against. It never looks at the trie.

use crate::error::check_distance;
use crate::{Result, WordInformation};
use std::collections::HashMap;

/// Levenshtein distance between `a` and `b`, counted in code points.
///
/// ```rust
/// use levenshtein_search::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Linear scan over `words`, computing the full distance for each one.
///
/// Repeated words are counted, so passing a raw token stream yields the same
/// map as building a [`Dictionary`](crate::Dictionary) and calling
/// [`search_all`](crate::Dictionary::search_all).
pub fn search_naive<S>(
    words: impl IntoIterator<Item = S>,
    query: &str,
    max_distance: usize,
) -> Result<HashMap<String, WordInformation>>
where
    S: AsRef<str>,
{
    check_distance(max_distance)?;

    let mut results: HashMap<String, WordInformation> = HashMap::new();
    for word in words {
        let word = word.as_ref();
        if let Some(information) = results.get_mut(word) {
            information.count += 1;
            continue;
        }
        if levenshtein(query, word) <= max_distance {
            results.insert(word.to_owned(), WordInformation::new());
        }
    }
    Ok(results)
}
