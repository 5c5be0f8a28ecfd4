use crate::term::{Term, Var};

/// A point that [`Bindings::undo`] can return to: the trail length and the
/// number of variables allocated at the time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    trail: usize,
    slots: usize,
}

/// Variable cells for one solve, with a trail of bindings for backtracking.
///
/// Undo releases both the bindings and the variables allocated since the
/// mark, so the store only grows with the depth of the current search. A
/// variable index past the end of the store reads as unbound, so an empty
/// store can be used to inspect clause templates.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    slots: Vec<Option<Term>>,
    trail: Vec<Var>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            slots: Vec::new(),
            trail: Vec::new(),
        }
    }

    /// Allocate a fresh unbound variable
    pub fn fresh(&mut self) -> Term {
        Term::Var(self.fresh_var())
    }

    pub fn fresh_var(&mut self) -> Var {
        self.slots.push(None);
        Var::new(self.slots.len() - 1)
    }

    /// Allocate `count` consecutive fresh variables and return the first index
    pub fn fresh_block(&mut self, count: usize) -> usize {
        let base = self.slots.len();
        self.slots.resize(base + count, None);
        base
    }

    pub fn var_count(&self) -> usize {
        self.slots.len()
    }

    pub fn lookup(&self, var: Var) -> Option<&Term> {
        self.slots.get(var.index()).and_then(Option::as_ref)
    }

    /// Bind an unbound variable; the binding is recorded on the trail.
    pub fn bind(&mut self, var: Var, term: Term) {
        debug_assert!(self.lookup(var).is_none(), "rebinding {:?}", var);
        if var.index() >= self.slots.len() {
            self.slots.resize(var.index() + 1, None);
        }
        self.slots[var.index()] = Some(term);
        self.trail.push(var);
    }

    /// Follow variable bindings until an unbound variable or a non-variable
    pub fn walk<'a>(&'a self, mut term: &'a Term) -> &'a Term {
        while let Term::Var(var) = term {
            match self.lookup(*var) {
                Some(bound) => term = bound,
                None => break,
            }
        }
        term
    }

    /// Substitute bindings throughout the term
    pub fn resolve(&self, term: &Term) -> Term {
        match self.walk(term) {
            Term::Neg(inner) => Term::neg(self.resolve(inner)),
            Term::Compound(functor, args) => Term::Compound(
                *functor,
                args.iter().map(|arg| self.resolve(arg)).collect(),
            ),
            other => other.clone(),
        }
    }

    pub fn resolve_all(&self, terms: &[Term]) -> Vec<Term> {
        terms.iter().map(|term| self.resolve(term)).collect()
    }

    pub fn mark(&self) -> Mark {
        Mark {
            trail: self.trail.len(),
            slots: self.slots.len(),
        }
    }

    /// Drop every binding made and every variable allocated since `mark`.
    /// Terms over the released variables must not be used afterwards.
    pub fn undo(&mut self, mark: Mark) {
        self.unbind(mark);
        self.slots.truncate(mark.slots);
    }

    /// Drop every binding made since `mark` but keep the variables
    /// allocated since then, so terms over them stay usable.
    pub fn unbind(&mut self, mark: Mark) {
        while self.trail.len() > mark.trail {
            if let Some(var) = self.trail.pop() {
                if let Some(slot) = self.slots.get_mut(var.index()) {
                    *slot = None;
                }
            }
        }
    }
}
