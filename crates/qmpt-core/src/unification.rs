//! Unification and equivalence tests over [`Bindings`].
//!
//! There is no occurs check: `X = f(X)` succeeds and leaves a cyclic binding
//! that [`Bindings::resolve`] will not terminate on.

use std::collections::HashMap;

use crate::bindings::Bindings;
use crate::term::{Term, Var};

/// Unify two terms. On failure no bindings are left behind.
pub fn unify(bindings: &mut Bindings, left: &Term, right: &Term) -> bool {
    let mark = bindings.mark();
    if unify_terms(bindings, left, right) {
        true
    } else {
        bindings.undo(mark);
        false
    }
}

fn unify_terms(bindings: &mut Bindings, left: &Term, right: &Term) -> bool {
    let left = bindings.walk(left).clone();
    let right = bindings.walk(right).clone();

    match (&left, &right) {
        (Term::Var(a), Term::Var(b)) if a == b => true,
        (Term::Var(var), _) => {
            bindings.bind(*var, right.clone());
            true
        }
        (_, Term::Var(var)) => {
            bindings.bind(*var, left.clone());
            true
        }
        (Term::Atom(a), Term::Atom(b)) => a == b,
        (Term::Int(a), Term::Int(b)) => a == b,
        (Term::Str(a), Term::Str(b)) => a == b,
        (Term::Neg(a), Term::Neg(b)) => unify_terms(bindings, a, b),
        (Term::Compound(f, xs), Term::Compound(g, ys)) => {
            f == g
                && xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| unify_terms(bindings, x, y))
        }
        _ => false,
    }
}

/// Identity after dereferencing: same shape, same constants, same variables
pub fn structurally_equal(bindings: &Bindings, left: &Term, right: &Term) -> bool {
    match (bindings.walk(left), bindings.walk(right)) {
        (Term::Var(a), Term::Var(b)) => a == b,
        (Term::Atom(a), Term::Atom(b)) => a == b,
        (Term::Int(a), Term::Int(b)) => a == b,
        (Term::Str(a), Term::Str(b)) => a == b,
        (Term::Neg(a), Term::Neg(b)) => structurally_equal(bindings, a, b),
        (Term::Compound(f, xs), Term::Compound(g, ys)) => {
            f == g
                && xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| structurally_equal(bindings, x, y))
        }
        _ => false,
    }
}

/// A bijection between the free variables of two terms
#[derive(Debug, Clone, Default)]
pub struct Renaming {
    forward: HashMap<Var, Var>,
    backward: HashMap<Var, Var>,
}

impl Renaming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `left` with `right`, failing if either is already paired elsewhere
    fn pair(&mut self, left: Var, right: Var) -> bool {
        match (self.forward.get(&left), self.backward.get(&right)) {
            (None, None) => {
                self.forward.insert(left, right);
                self.backward.insert(right, left);
                true
            }
            (Some(mapped), Some(back)) => *mapped == right && *back == left,
            _ => false,
        }
    }

    /// Extend the renaming so that `left` and `right` coincide.
    /// The renaming may be partially extended when this returns false.
    pub fn extend(&mut self, bindings: &Bindings, left: &Term, right: &Term) -> bool {
        match (bindings.walk(left), bindings.walk(right)) {
            (Term::Var(a), Term::Var(b)) => self.pair(*a, *b),
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Int(a), Term::Int(b)) => a == b,
            (Term::Str(a), Term::Str(b)) => a == b,
            (Term::Neg(a), Term::Neg(b)) => self.extend(bindings, a, b),
            (Term::Compound(f, xs), Term::Compound(g, ys)) => {
                f == g
                    && xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys.iter())
                        .all(|(x, y)| self.extend(bindings, x, y))
            }
            _ => false,
        }
    }
}

/// Equal up to a consistent, bijective renaming of free variables. Pure.
pub fn alpha_equivalent(bindings: &Bindings, left: &Term, right: &Term) -> bool {
    Renaming::new().extend(bindings, left, right)
}

/// If the terms are alpha-equivalent, unify them so they become identical.
pub fn alpha_unify(bindings: &mut Bindings, left: &Term, right: &Term) -> bool {
    alpha_equivalent(bindings, left, right) && unify(bindings, left, right)
}

/// Order-insensitive alpha-equivalence of two term sets under one renaming
/// that starts from `renaming`.
pub fn alpha_equivalent_sets(
    bindings: &Bindings,
    renaming: &Renaming,
    left: &[Term],
    right: &[Term],
) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut used = vec![false; right.len()];
    match_sets(bindings, renaming, left, right, &mut used)
}

fn match_sets(
    bindings: &Bindings,
    renaming: &Renaming,
    left: &[Term],
    right: &[Term],
    used: &mut [bool],
) -> bool {
    let Some((first, rest)) = left.split_first() else {
        return true;
    };
    for (idx, candidate) in right.iter().enumerate() {
        if used[idx] {
            continue;
        }
        let mut attempt = renaming.clone();
        if attempt.extend(bindings, first, candidate) {
            used[idx] = true;
            if match_sets(bindings, &attempt, rest, right, used) {
                return true;
            }
            used[idx] = false;
        }
    }
    false
}

#[cfg(test)]
#[path = "../tests/unit/unification_tests.rs"]
mod tests;
