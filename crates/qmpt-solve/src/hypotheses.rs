use log::trace;
use qmpt_core::{Bindings, Clause, Term};

/// Subgoal sets seen while proving one goal, frozen as `(goal, subgoals)`
/// templates. Lives for a single top-level solve.
#[derive(Debug, Clone, Default)]
pub struct HypothesisStore {
    entries: Vec<Clause>,
}

impl HypothesisStore {
    pub fn new() -> Self {
        HypothesisStore {
            entries: Vec::new(),
        }
    }

    /// Record `(goal, subgoals)` unless a variant is already present.
    /// Returns whether a new entry was added.
    pub fn record(&mut self, bindings: &Bindings, goal: &Term, subgoals: &[Term]) -> bool {
        let entry = Clause::freeze(bindings, goal, subgoals);
        if self.entries.iter().any(|known| known.is_variant_of(&entry)) {
            return false;
        }
        trace!("hypothesis #{}: {}", self.entries.len(), entry);
        self.entries.push(entry);
        true
    }

    /// Is `(goal, subgoals)` a variant of a recorded entry? Subgoal order
    /// does not matter.
    pub fn contains(&self, bindings: &Bindings, goal: &Term, subgoals: &[Term]) -> bool {
        let probe = Clause::freeze(bindings, goal, subgoals);
        self.entries.iter().any(|known| known.is_variant_of(&probe))
    }

    pub fn get(&self, idx: usize) -> Option<&Clause> {
        self.entries.get(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../tests/unit/hypotheses_tests.rs"]
mod tests;
