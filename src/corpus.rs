//! Splitting free text into dictionary words.

use unicode_segmentation::UnicodeSegmentation;

/// Words of `text` per Unicode word boundaries, punctuation and whitespace
/// dropped. Case is left untouched.
///
/// ```rust
/// let words: Vec<&str> = levenshtein_search::corpus::words("\"Oh dear!\" said the Rabbit.").collect();
/// assert_eq!(words, ["Oh", "dear", "said", "the", "Rabbit"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
}
