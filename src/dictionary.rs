use crate::corpus;
use crate::trie::{TrieNode, Words};
use crate::WordInformation;

/// Word store backed by a character trie, with corpus counters.
///
/// ```rust
/// use levenshtein_search::Dictionary;
///
/// let mut dictionary = Dictionary::new();
/// assert!(dictionary.put("banana"));
/// assert!(!dictionary.put("banana"));
/// assert_eq!(dictionary.get("banana").map(|info| info.count), Some(2));
/// assert_eq!(dictionary.total_occurrences(), 2);
/// assert_eq!(dictionary.unique_word_count(), 1);
/// ```
///
/// Writers need `&mut self`; any number of readers may search a dictionary
/// concurrently as long as nobody is inserting.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub(crate) root: TrieNode,
    total_occurrences: usize,
    unique_word_count: usize,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`. Returns `true` if the word is new.
    ///
    /// The empty string is a valid word and is stored on the root.
    pub fn put(&mut self, word: &str) -> bool {
        let is_new = self.root.insert(word);
        self.total_occurrences += 1;
        if is_new {
            self.unique_word_count += 1;
        }
        is_new
    }

    /// Exact lookup.
    pub fn get(&self, word: &str) -> Option<&WordInformation> {
        self.root.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Inserts every word of `text` as tokenised by [`corpus::words`] and
    /// returns how many were inserted.
    pub fn put_text(&mut self, text: &str) -> usize {
        corpus::words(text).map(|word| self.put(word)).count()
    }

    /// Number of `put` calls so far, duplicates included.
    #[inline]
    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }

    /// Number of distinct words stored.
    #[inline]
    pub fn unique_word_count(&self) -> usize {
        self.unique_word_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.unique_word_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unique_word_count == 0
    }

    /// Root of the underlying trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Every stored word with its payload, in code point order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.put(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(words);
        dictionary
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (String, WordInformation);
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
