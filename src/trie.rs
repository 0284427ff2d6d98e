use crate::WordInformation;
use std::collections::BTreeMap;
use std::mem;

/// A single node of the character trie.
///
/// Children are owned exclusively by their parent. A node carries
/// [`WordInformation`] iff some inserted word ends exactly here.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Outgoing edges keyed by the next code point.
    pub(crate) children: BTreeMap<char, TrieNode>,
    /// Payload of the word ending at this node, if any.
    pub(crate) information: Option<WordInformation>,
}

impl TrieNode {
    /// Inserts `word`, creating missing nodes along its path.
    ///
    /// Returns `true` when the word was not stored before; otherwise its count
    /// is incremented and `false` is returned.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = word
            .chars()
            .fold(self, |node, c| node.children.entry(c).or_default());

        if let Some(information) = node.information.as_mut() {
            information.count += 1;
            return false;
        }
        node.information = Some(WordInformation::new());
        true
    }

    /// Exact lookup. `None` when a path edge is missing or the final node is
    /// only a prefix of other words.
    pub fn get(&self, word: &str) -> Option<&WordInformation> {
        self.find_node(word)?.information.as_ref()
    }

    /// Node reached by following `prefix` from here.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    #[inline]
    pub fn information(&self) -> Option<&WordInformation> {
        self.information.as_ref()
    }

    /// Outgoing edges in code point order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }
}

// Dropping a long single-branch chain recursively would exhaust the stack,
// so the subtree is flattened onto a heap stack first.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// Depth-first iterator over every stored word below a node.
///
/// Built with an explicit stack and a single path buffer, so arbitrarily deep
/// tries are safe to walk.
pub struct Words<'a> {
    /// `(node, parent word length in bytes, edge into node)`.
    stack: Vec<(&'a TrieNode, usize, Option<char>)>,
    path: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Self {
        Self {
            stack: vec![(root, 0, None)],
            path: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = (String, WordInformation);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, prefix_len, edge)) = self.stack.pop() {
            self.path.truncate(prefix_len);
            if let Some(c) = edge {
                self.path.push(c);
            }
            let len = self.path.len();
            self.stack
                .extend(node.children.iter().rev().map(|(&c, child)| (child, len, Some(c))));
            if let Some(&information) = node.information() {
                return Some((self.path.clone(), information));
            }
        }
        None
    }
}
