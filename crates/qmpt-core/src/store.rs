use log::trace;
use qmpt_ast as ast;
use std::collections::VecDeque;

use crate::bindings::{Bindings, Mark};
use crate::clause::{Clause, ClauseError};
use crate::convert;
use crate::term::Term;
use crate::unification::unify;

/// The rule database. Newly asserted clauses go to the front, so lookups see
/// the most recent assertion first.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: VecDeque<Clause>,
}

impl RuleStore {
    pub fn new() -> Self {
        RuleStore {
            rules: VecDeque::new(),
        }
    }

    /// Remove every rule and fact
    pub fn reset(&mut self) {
        self.rules.clear();
    }

    pub fn add(&mut self, clause: Clause) {
        trace!("assert {}", clause);
        self.rules.push_front(clause);
    }

    pub fn add_fact(&mut self, head: &ast::Term) -> Result<(), ClauseError> {
        self.add_rule(head, &[])
    }

    pub fn add_rule(&mut self, head: &ast::Term, body: &[ast::Term]) -> Result<(), ClauseError> {
        let clause = convert::clause_from_ast(head, body)?;
        self.add(clause);
        Ok(())
    }

    pub fn add_clause(&mut self, clause: &ast::Clause) -> Result<(), ClauseError> {
        self.add_rule(&clause.head, &clause.body)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Clause> {
        self.rules.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.rules.iter()
    }

    /// Try rule `idx` against `goal`. On a match the head is unified with
    /// the goal (bindings stay in place) and the instantiated antecedents
    /// are returned; otherwise nothing is bound.
    ///
    /// Search frames resume at a rule index after backtracking, so the
    /// solver drives this directly rather than [`RuleStore::matching_rules`].
    pub fn try_rule(&self, idx: usize, bindings: &mut Bindings, goal: &Term) -> Option<Vec<Term>> {
        let clause = self.rules.get(idx)?;
        if !clause.could_match(bindings, goal) {
            return None;
        }
        let (head, body) = clause.instantiate(bindings);
        if unify(bindings, goal, &head) {
            Some(body)
        } else {
            None
        }
    }

    /// Lazily enumerate the rules matching `goal`, in store order. Each item
    /// is the instantiated `(head, antecedents)` with the unifier applied;
    /// the bindings are undone before the next rule is tried, while the
    /// variables of earlier items stay allocated.
    pub fn matching_rules<'a>(
        &'a self,
        bindings: &'a mut Bindings,
        goal: &Term,
    ) -> MatchingRules<'a> {
        MatchingRules {
            store: self,
            mark: bindings.mark(),
            bindings,
            goal: goal.clone(),
            next: 0,
        }
    }
}

pub struct MatchingRules<'a> {
    store: &'a RuleStore,
    bindings: &'a mut Bindings,
    mark: Mark,
    goal: Term,
    next: usize,
}

impl Iterator for MatchingRules<'_> {
    type Item = (Term, Vec<Term>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.store.len() {
            let idx = self.next;
            self.next += 1;
            if let Some(body) = self.store.try_rule(idx, self.bindings, &self.goal) {
                let head = self.bindings.resolve(&self.goal);
                let body = self.bindings.resolve_all(&body);
                self.bindings.unbind(self.mark);
                return Some((head, body));
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/store_tests.rs"]
mod tests;
