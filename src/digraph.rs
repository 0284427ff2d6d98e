//! Graphviz export of the full state graph of an automaton.
//!
//! Only used to look at automata, never on the search path. The graph is
//! explored with a worklist; states are deduplicated structurally.

use crate::{AutomatonState, LevenshteinAutomaton, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

/// Edge label of the state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Any character not spelled out on a sibling edge. Rendered as a dashed
    /// `*` edge.
    Other,
    /// A pattern character, including a literal `*`.
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub label: Label,
}

/// Every state reachable from the start state, numbered in discovery order
/// (the start state is `0`).
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    pub states: usize,
    /// Sorted by source, then target.
    pub transitions: Vec<Transition>,
    /// Ids of accepting states, ascending.
    pub matching: Vec<usize>,
}

/// Explores the automaton for `pattern` / `max_distance` completely.
pub fn create_digraph(pattern: &str, max_distance: usize) -> Result<Digraph> {
    let automaton = LevenshteinAutomaton::new(pattern, max_distance)?;
    Ok(explore(&automaton))
}

/// Builds the state graph of an existing automaton.
pub fn explore(automaton: &LevenshteinAutomaton) -> Digraph {
    let start = automaton.start();
    let mut ids: HashMap<AutomatonState, usize> = HashMap::new();
    ids.insert(start.clone(), 0);
    let mut worklist = vec![(0usize, start)];

    let mut transitions = Vec::new();
    let mut matching = Vec::new();

    while let Some((id, state)) = worklist.pop() {
        if automaton.is_match(&state) {
            matching.push(id);
        }

        for label in labels(automaton, &state) {
            let next = match label {
                Label::Other => automaton.step_other(&state),
                Label::Char(c) => automaton.step(&state, c),
            };
            let to = match ids.get(&next) {
                Some(&known) => known,
                None => {
                    let fresh = ids.len();
                    ids.insert(next.clone(), fresh);
                    worklist.push((fresh, next));
                    fresh
                }
            };
            transitions.push(Transition { from: id, to, label });
        }
    }

    transitions.sort();
    matching.sort_unstable();

    debug!(
        states = ids.len(),
        transitions = transitions.len(),
        "automaton explored"
    );
    Digraph {
        states: ids.len(),
        transitions,
        matching,
    }
}

/// Outgoing labels of a state: the catch-all edge, then each distinct
/// pattern character under a tracked position.
fn labels(automaton: &LevenshteinAutomaton, state: &AutomatonState) -> Vec<Label> {
    let pattern = automaton.pattern();
    let spelled: BTreeSet<char> = state
        .positions()
        .iter()
        .filter_map(|&position| pattern.get(position).copied())
        .collect();

    let mut labels = Vec::with_capacity(spelled.len() + 1);
    labels.push(Label::Other);
    labels.extend(spelled.into_iter().map(Label::Char));
    labels
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        for Transition { from, to, label } in &self.transitions {
            match label {
                Label::Char(c) => writeln!(f, "{from} -> {to} [label=\" {c} \"]")?,
                Label::Other => writeln!(f, "{from} -> {to} [label=\" * \", style=dashed]")?,
            }
        }
        for id in &self.matching {
            writeln!(f, "{id} [style=filled]")?;
        }
        writeln!(f, "}}")
    }
}
