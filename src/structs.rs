use smallvec::SmallVec;

/// Number of edits, stored in one byte inside automaton states.
pub type Distance = u8;

/// Inline capacity of a state; covers `2K+1` live entries up to `K = 3`
/// before spilling to the heap.
const INLINE_POSITIONS: usize = 8;

/// One row of the edit-distance matrix, keeping only the cells within budget.
///
/// Instead of the dense row
/// `[3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 2, 3, 3]`
/// for `K = 2`, only the surviving cells are tracked:
/// `positions = [11, 12, 13]`, `distances = [2, 1, 2]`.
///
/// States are produced by [`LevenshteinAutomaton`](crate::LevenshteinAutomaton)
/// and are never mutated once built. Two states are interchangeable iff both
/// sequences are equal, which is what the derived `Eq` and `Hash` compare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AutomatonState {
    pub(crate) positions: SmallVec<[usize; INLINE_POSITIONS]>,
    pub(crate) distances: SmallVec<[Distance; INLINE_POSITIONS]>,
}

impl AutomatonState {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: SmallVec::with_capacity(capacity),
            distances: SmallVec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, position: usize, distance: Distance) {
        debug_assert!(self.positions.last().is_none_or(|&last| last < position));
        self.positions.push(position);
        self.distances.push(distance);
    }

    /// Pattern offsets still reachable within the budget, strictly increasing.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Edit counts aligned with [`positions`](Self::positions).
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Number of tracked cells.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` for the dead state, from which nothing can match any more.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Per-word payload stored on terminal trie nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordInformation {
    /// How many times the word was inserted.
    pub count: usize,
}

impl WordInformation {
    pub(crate) fn new() -> Self {
        Self { count: 1 }
    }
}
