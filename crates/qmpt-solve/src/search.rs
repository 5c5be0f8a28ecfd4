//! Depth-first expansion search.
//!
//! Each frame on the stack is a choice point over `(selected subgoal, rule)`
//! pairs for one working set. Taking a choice undoes everything bound since
//! the frame was pushed, so a frame can always be resumed where it left off.

use log::{debug, trace};
use qmpt_ast::Symbol;
use qmpt_core::{dedup_structural, lift, Bindings, Mark, RuleStore, Term, Var};

use crate::closure::close_hypotheses;
use crate::config::SolverConfig;
use crate::hypotheses::HypothesisStore;
use crate::substitution::Substitution;

struct Frame {
    subgoals: Vec<Term>,
    mark: Mark,
    depth: usize,
    pick: usize,
    next_rule: usize,
}

impl Frame {
    fn new(subgoals: Vec<Term>, mark: Mark, depth: usize) -> Self {
        Frame {
            subgoals,
            mark,
            depth,
            pick: 0,
            next_rule: 0,
        }
    }

    /// Next untried `(subgoal index, rule index)` choice
    fn advance(&mut self, rule_count: usize) -> Option<(usize, usize)> {
        while self.pick < self.subgoals.len() {
            if self.next_rule < rule_count {
                let rule = self.next_rule;
                self.next_rule += 1;
                return Some((self.pick, rule));
            }
            self.pick += 1;
            self.next_rule = 0;
        }
        None
    }
}

/// Lazy iterator over the solutions of one goal. Dropping it abandons the
/// search; the hypothesis store it owns goes with it.
pub struct Solutions<'a> {
    rules: &'a RuleStore,
    config: SolverConfig,
    bindings: Bindings,
    hypotheses: HypothesisStore,
    goal: Term,
    goal_vars: Vec<(Symbol, Var)>,
    stack: Vec<Frame>,
    found: usize,
}

impl<'a> Solutions<'a> {
    pub(crate) fn new(
        rules: &'a RuleStore,
        config: SolverConfig,
        bindings: Bindings,
        goal: Term,
        goal_vars: Vec<(Symbol, Var)>,
    ) -> Self {
        debug!("solve {} against {} rules", bindings.resolve(&goal), rules.len());
        let root = Frame::new(vec![goal.clone()], bindings.mark(), 0);
        Solutions {
            rules,
            config,
            bindings,
            hypotheses: HypothesisStore::new(),
            goal,
            goal_vars,
            stack: vec![root],
            found: 0,
        }
    }

    /// Variables currently allocated in this search's binding store
    #[cfg(test)]
    pub(crate) fn var_count(&self) -> usize {
        self.bindings.var_count()
    }

    fn substitution(&self) -> Substitution {
        let mut answer = Substitution::new();
        for (name, var) in &self.goal_vars {
            answer.bind(*name, lift(&self.bindings, &Term::Var(*var)));
        }
        answer
    }
}

impl Iterator for Solutions<'_> {
    type Item = Substitution;

    fn next(&mut self) -> Option<Substitution> {
        if let Some(limit) = self.config.solution_limit {
            if self.found >= limit {
                self.stack.clear();
                return None;
            }
        }

        while let Some(frame) = self.stack.last_mut() {
            self.bindings.undo(frame.mark);
            let Some((pick, rule)) = frame.advance(self.rules.len()) else {
                self.stack.pop();
                continue;
            };
            let selected = frame.subgoals[pick].clone();
            let Some(mut merged) = self.rules.try_rule(rule, &mut self.bindings, &selected) else {
                continue;
            };
            merged.extend(
                frame
                    .subgoals
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != pick)
                    .map(|(_, term)| term.clone()),
            );
            let depth = frame.depth + 1;
            let merged = dedup_structural(&self.bindings, &merged);

            trace!(
                "expand {} by rule #{} into [{}]",
                self.bindings.resolve(&selected),
                rule,
                show(&self.bindings, &merged)
            );

            if self.hypotheses.contains(&self.bindings, &self.goal, &merged) {
                trace!("already visited");
                continue;
            }

            if close_hypotheses(
                &mut self.bindings,
                &mut self.hypotheses,
                &self.config,
                &self.goal,
                &merged,
            ) {
                self.found += 1;
                let answer = self.substitution();
                debug!("solution #{}: {}", self.found, answer);
                return Some(answer);
            }

            if self.config.max_depth.is_some_and(|limit| depth >= limit) {
                trace!("depth limit reached");
                continue;
            }
            let mark = self.bindings.mark();
            self.stack.push(Frame::new(merged, mark, depth));
        }
        None
    }
}

fn show(bindings: &Bindings, terms: &[Term]) -> String {
    terms
        .iter()
        .map(|term| bindings.resolve(term).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
