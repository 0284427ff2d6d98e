use crate::error::check_distance;
use crate::{AutomatonState, Distance, Error, Result};

/// Levenshtein automaton for a single query term.
///
/// The automaton itself only holds the pattern and the distance bound; all
/// progress lives in [`AutomatonState`] values, so one automaton can drive
/// any number of independent walks.
///
/// ```rust
/// use levenshtein_search::LevenshteinAutomaton;
///
/// let automaton = LevenshteinAutomaton::new("woof", 1).unwrap();
/// let state = "wof"
///     .chars()
///     .fold(automaton.start(), |state, c| automaton.step(&state, c));
/// assert!(automaton.is_match(&state));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevenshteinAutomaton {
    pattern: Vec<char>,
    max_distance: usize,
}

impl LevenshteinAutomaton {
    /// Builds the automaton for `pattern`, tolerating up to `max_distance` edits.
    ///
    /// The pattern is addressed by code point. Fails when the bound does not fit
    /// the per-cell distance type (see [`MAX_DISTANCE`](crate::MAX_DISTANCE)).
    pub fn new(pattern: &str, max_distance: usize) -> Result<Self> {
        check_distance(max_distance)?;
        Ok(Self {
            pattern: pattern.chars().collect(),
            max_distance,
        })
    }

    /// Same as [`new`](Self::new) for bounds that arrive as signed integers.
    pub fn from_signed(pattern: &str, max_distance: i64) -> Result<Self> {
        if max_distance < 0 {
            return Err(Error::NegativeDistance(max_distance));
        }
        let max_distance = usize::try_from(max_distance).unwrap_or(usize::MAX);
        Self::new(pattern, max_distance)
    }

    #[inline]
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    #[inline]
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// Pattern length in code points.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// The searched term as a string.
    pub fn searched_term(&self) -> String {
        self.pattern.iter().collect()
    }

    /// State before any input has been read: reaching pattern offset `i`
    /// costs `i` deletions, kept up to the bound.
    pub fn start(&self) -> AutomatonState {
        let last = self.max_distance.min(self.pattern.len());
        let mut state = AutomatonState::with_capacity(last + 1);
        for position in 0..=last {
            // position <= max_distance <= MAX_DISTANCE
            state.push(position, position as Distance);
        }
        state
    }

    /// Advances `state` by one input character.
    pub fn step(&self, state: &AutomatonState, character: char) -> AutomatonState {
        self.step_by(state, |expected| expected == character)
    }

    /// Advances `state` by a character that occurs nowhere in the pattern.
    pub fn step_other(&self, state: &AutomatonState) -> AutomatonState {
        self.step_by(state, |_| false)
    }

    /// Sparse row update. Each tracked cell feeds the cell one to its right;
    /// the left neighbour comes from the row being built and the upper
    /// neighbour from the previous row, both only when they are adjacent.
    fn step_by(&self, state: &AutomatonState, matches: impl Fn(char) -> bool) -> AutomatonState {
        debug_assert!(
            state.positions.last().is_none_or(|&p| p <= self.pattern.len()),
            "state built for a longer pattern"
        );
        let max = self.max_distance;
        let mut next = AutomatonState::with_capacity(state.len() + 1);

        // The character is an insertion in front of the whole pattern.
        if let (Some(&0), Some(&distance)) = (state.positions.first(), state.distances.first()) {
            if usize::from(distance) < max {
                next.push(0, distance + 1);
            }
        }

        for (i, (&position, &distance)) in state.positions.iter().zip(&state.distances).enumerate()
        {
            if position == self.pattern.len() {
                break;
            }

            let cost = usize::from(!matches(self.pattern[position]));
            let mut value = usize::from(distance) + cost;

            if let (Some(&left), Some(&left_distance)) = (next.positions.last(), next.distances.last())
            {
                if left == position {
                    value = value.min(usize::from(left_distance) + 1);
                }
            }
            if state.positions.get(i + 1) == Some(&(position + 1)) {
                value = value.min(usize::from(state.distances[i + 1]) + 1);
            }

            if value <= max {
                // value <= max_distance <= MAX_DISTANCE
                next.push(position + 1, value as Distance);
            }
        }

        next
    }

    /// `false` once every continuation is already over budget.
    #[inline]
    pub fn can_match(&self, state: &AutomatonState) -> bool {
        !state.positions.is_empty()
    }

    /// `true` when the input read so far is within the bound of the whole pattern.
    #[inline]
    pub fn is_match(&self, state: &AutomatonState) -> bool {
        state.positions.last() == Some(&self.pattern.len())
    }

    /// Edit distance between the pattern and the input read so far, if within
    /// the bound.
    pub fn distance(&self, state: &AutomatonState) -> Option<usize> {
        if self.is_match(state) {
            state.distances.last().map(|&d| usize::from(d))
        } else {
            None
        }
    }

    /// Runs the automaton over a whole string.
    pub fn run(&self, input: &str) -> AutomatonState {
        let mut state = self.start();
        for c in input.chars() {
            state = self.step(&state, c);
            if !self.can_match(&state) {
                break;
            }
        }
        state
    }

    /// `true` when `input` is within the bound of the pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.is_match(&self.run(input))
    }
}
