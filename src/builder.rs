use crate::{corpus, Dictionary};
use std::borrow::Cow;
use tracing::debug;

/// Builder for [`Dictionary`].
///
/// ```rust
/// use levenshtein_search::DictionaryBuilder;
///
/// let dictionary = DictionaryBuilder::new()
///     .lowercase(true)
///     .build_from_text("The Rabbit said: the end.");
///
/// assert_eq!(dictionary.get("the").map(|info| info.count), Some(2));
/// assert_eq!(dictionary.unique_word_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    lowercase: bool,
    min_word_len: usize,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    /// Words are stored as given; empty words are skipped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lowercase: false,
            min_word_len: 1,
        }
    }

    /// Lowercase every word before it is inserted.
    #[must_use]
    pub fn lowercase(mut self, value: bool) -> Self {
        self.lowercase = value;
        self
    }

    /// Skip words shorter than `len` code points, counted on the stored form
    /// (after lowercasing). `0` keeps the empty word.
    #[must_use]
    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Builds a [`Dictionary`] from a word list, one occurrence per item.
    pub fn build<S>(self, words: impl IntoIterator<Item = S>) -> Dictionary
    where
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        let mut skipped = 0usize;

        for word in words {
            let word = if self.lowercase {
                Cow::Owned(word.as_ref().to_lowercase())
            } else {
                Cow::Borrowed(word.as_ref())
            };
            if word.chars().count() < self.min_word_len {
                skipped += 1;
                continue;
            }
            dictionary.put(&word);
        }

        debug!(
            total_occurrences = dictionary.total_occurrences(),
            unique_words = dictionary.unique_word_count(),
            skipped,
            "dictionary built"
        );
        dictionary
    }

    /// Tokenises `text` with [`corpus::words`] and builds from the result.
    pub fn build_from_text(self, text: &str) -> Dictionary {
        self.build(corpus::words(text))
    }
}
