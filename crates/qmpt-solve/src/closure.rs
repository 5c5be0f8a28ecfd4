//! Contradiction-absorbing closure.
//!
//! Given the goal and a subgoal set, closure first records the set as a
//! hypothesis and then tries to cancel a subgoal `X` against a subgoal `Z`
//! of some earlier hypothesis for the same goal, where one is the negation
//! of the other. What remains of both sets is merged and closed in turn; an
//! empty set closes trivially.

use log::trace;
use qmpt_core::{dedup_alpha, unify, Bindings, Clause, Term};

use crate::config::SolverConfig;
use crate::hypotheses::HypothesisStore;

/// Try to close `subgoals` for `goal`. On success the bindings made along
/// the way stay in place; on failure nothing is left bound, though the
/// hypotheses recorded on the way are kept.
pub fn close_hypotheses(
    bindings: &mut Bindings,
    hypotheses: &mut HypothesisStore,
    config: &SolverConfig,
    goal: &Term,
    subgoals: &[Term],
) -> bool {
    let mut closure = Closure {
        bindings,
        hypotheses,
        config,
        path: Vec::new(),
    };
    closure.close(goal, subgoals)
}

struct Closure<'a> {
    bindings: &'a mut Bindings,
    hypotheses: &'a mut HypothesisStore,
    config: &'a SolverConfig,
    /// Subgoal sets currently being closed, outermost first
    path: Vec<Clause>,
}

impl Closure<'_> {
    fn close(&mut self, goal: &Term, subgoals: &[Term]) -> bool {
        if subgoals.is_empty() {
            return true;
        }
        if let Some(limit) = self.config.max_closure_depth {
            if self.path.len() >= limit {
                trace!("closure depth limit {} reached", limit);
                return false;
            }
        }

        let state = Clause::freeze(self.bindings, goal, subgoals);
        if self.path.iter().any(|open| open.is_variant_of(&state)) {
            trace!("closure cycle at {}", state);
            return false;
        }

        // Record, then drop whatever the dedup bound.
        let mark = self.bindings.mark();
        let deduped = dedup_alpha(self.bindings, subgoals);
        self.hypotheses.record(self.bindings, goal, &deduped);
        self.bindings.undo(mark);

        self.path.push(state);
        let closed = self.pair_off(goal, subgoals);
        self.path.pop();
        closed
    }

    fn pair_off(&mut self, goal: &Term, subgoals: &[Term]) -> bool {
        for (i, x) in subgoals.iter().enumerate() {
            let rest_x = without(subgoals, i);
            // Hypotheses recorded while pairing this X are not paired with it.
            let known = self.hypotheses.len();
            for h in 0..known {
                let Some(hypothesis) = self.hypotheses.get(h) else {
                    break;
                };
                let mark = self.bindings.mark();
                let (hyp_goal, hyp_subgoals) = hypothesis.instantiate(self.bindings);
                if unify(self.bindings, &hyp_goal, goal)
                    && self.cancel_against(goal, x, &rest_x, &hyp_subgoals)
                {
                    return true;
                }
                self.bindings.undo(mark);
            }
        }
        false
    }

    fn cancel_against(&mut self, goal: &Term, x: &Term, rest_x: &[Term], others: &[Term]) -> bool {
        for (j, z) in others.iter().enumerate() {
            for (left, right) in [(x, z), (z, x)] {
                let mark = self.bindings.mark();
                if unify(self.bindings, left, &Term::neg(right.clone())) {
                    trace!(
                        "cancel {} against {}",
                        self.bindings.resolve(x),
                        self.bindings.resolve(z)
                    );
                    let mut merged = rest_x.to_vec();
                    merged.extend(without(others, j));
                    let merged = dedup_alpha(self.bindings, &merged);
                    if self.close(goal, &merged) {
                        return true;
                    }
                }
                self.bindings.undo(mark);
            }
        }
        false
    }
}

fn without(terms: &[Term], idx: usize) -> Vec<Term> {
    terms[..idx].iter().chain(&terms[idx + 1..]).cloned().collect()
}

#[cfg(test)]
#[path = "../tests/unit/closure_tests.rs"]
mod tests;
