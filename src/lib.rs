//! Dictionary search by edit distance.
//!
//! A [`Dictionary`] stores words in a character trie. A query is compiled to
//! a [`LevenshteinAutomaton`] whose states are sparse rows of the classical
//! edit-distance matrix: only cells within the distance bound `K` are kept,
//! so a state has at most `2K+1` entries and each step costs `O(K)` no matter
//! how long the query is.
//!
//! [`Dictionary::search_all`] walks the trie and the automaton together. The
//! automaton advances once per trie edge and a whole subtree is skipped once
//! [`LevenshteinAutomaton::can_match`] turns false.
//!
//! ```rust
//! use levenshtein_search::DictionaryBuilder;
//!
//! let dictionary = DictionaryBuilder::new().build(["banana", "orange", "monkey"]);
//!
//! assert_eq!(dictionary.search_all("banana", 0).unwrap().len(), 1);
//! assert_eq!(dictionary.search_all("a", 5).unwrap().len(), 2);
//! assert_eq!(dictionary.search_all("a", 6).unwrap().len(), 3);
//! ```

mod automaton;
mod builder;
pub mod corpus;
mod dictionary;
pub mod digraph;
pub mod distance;
mod error;
mod search;
mod structs;
mod trie;

pub use automaton::LevenshteinAutomaton;
pub use builder::DictionaryBuilder;
pub use dictionary::Dictionary;
pub use error::{Error, MAX_DISTANCE, Result};
pub use structs::*;
pub use trie::{TrieNode, Words};
