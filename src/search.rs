use crate::trie::TrieNode;
use crate::{AutomatonState, Dictionary, LevenshteinAutomaton, Result, WordInformation};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Pending node of the co-traversal.
struct Frame<'a> {
    node: &'a TrieNode,
    /// Automaton state after reading the edge into `node`.
    state: AutomatonState,
    /// Byte length of the parent's word in the shared path buffer.
    prefix_len: usize,
    /// Edge label leading to `node`; `None` for the root.
    edge: Option<char>,
}

impl Dictionary {
    /// Every stored word within `max_distance` edits of `query`.
    ///
    /// The trie and the automaton are walked together, stepping the automaton
    /// once per trie edge. A subtree is abandoned as soon as the automaton
    /// reports that no continuation can match, so shared prefixes are
    /// rejected once rather than once per word.
    ///
    /// ```rust
    /// use levenshtein_search::Dictionary;
    ///
    /// let dictionary: Dictionary = ["banana", "orange", "monkey"].into_iter().collect();
    /// let found = dictionary.search_all("banan", 1).unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found["banana"].count, 1);
    /// ```
    pub fn search_all(
        &self,
        query: &str,
        max_distance: usize,
    ) -> Result<HashMap<String, WordInformation>> {
        let automaton = LevenshteinAutomaton::new(query, max_distance)?;
        Ok(self.search_with(&automaton))
    }

    /// Same as [`search_all`](Self::search_all) with a prebuilt automaton.
    pub fn search_with(&self, automaton: &LevenshteinAutomaton) -> HashMap<String, WordInformation> {
        let mut results = HashMap::new();
        let mut visited = 0usize;
        let mut pruned = 0usize;

        // Depth-first, so every frame still on the stack is a descendant of
        // the current path and `path[..prefix_len]` is its parent's word.
        let mut path = String::new();
        let mut stack = vec![Frame {
            node: &self.root,
            state: automaton.start(),
            prefix_len: 0,
            edge: None,
        }];

        while let Some(Frame {
            node,
            state,
            prefix_len,
            edge,
        }) = stack.pop()
        {
            visited += 1;
            path.truncate(prefix_len);
            if let Some(c) = edge {
                path.push(c);
            }

            if let Some(&information) = node.information() {
                if automaton.is_match(&state) {
                    results.insert(path.clone(), information);
                }
            }

            for (c, child) in node.children() {
                let next = automaton.step(&state, c);
                if !automaton.can_match(&next) {
                    trace!(prefix = %path, edge = %c, "pruned");
                    pruned += 1;
                    continue;
                }
                stack.push(Frame {
                    node: child,
                    state: next,
                    prefix_len: path.len(),
                    edge: Some(c),
                });
            }
        }

        debug!(
            query = %automaton.searched_term(),
            max_distance = automaton.max_distance(),
            visited,
            pruned,
            matches = results.len(),
            "search finished"
        );
        results
    }
}
