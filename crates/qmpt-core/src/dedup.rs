//! Duplicate removal for subgoal sequences. All variants keep the earliest
//! occurrence of each class and preserve relative order.

use log::trace;

use crate::bindings::Bindings;
use crate::term::Term;
use crate::unification::{alpha_equivalent, alpha_unify, structurally_equal};

/// Drop terms identical to an earlier one
pub fn dedup_structural(bindings: &Bindings, terms: &[Term]) -> Vec<Term> {
    let mut kept: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        if !kept
            .iter()
            .any(|existing| structurally_equal(bindings, existing, term))
        {
            kept.push(term.clone());
        }
    }
    kept
}

/// Drop terms alpha-equivalent to an earlier one, without binding anything
pub fn dedup_alpha_pure(bindings: &Bindings, terms: &[Term]) -> Vec<Term> {
    let mut kept: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        if !kept
            .iter()
            .any(|existing| alpha_equivalent(bindings, existing, term))
        {
            kept.push(term.clone());
        }
    }
    kept
}

/// Collapse alpha-equivalent terms into their earliest representative by
/// unifying them, which may bind variables shared with other terms.
///
/// Binding a duplicate can make two surviving terms equivalent, so passes
/// repeat until one removes nothing. The result is therefore a fixpoint:
/// deduplicating it again changes neither the sequence nor the bindings.
pub fn dedup_alpha(bindings: &mut Bindings, terms: &[Term]) -> Vec<Term> {
    let mut current = terms.to_vec();
    loop {
        let mut kept: Vec<Term> = Vec::with_capacity(current.len());
        let mut collapsed = false;
        for term in current {
            if kept
                .iter()
                .any(|existing| alpha_unify(bindings, existing, &term))
            {
                collapsed = true;
            } else {
                kept.push(term);
            }
        }
        if !collapsed {
            return kept;
        }
        trace!("alpha dedup collapsed terms, {} left", kept.len());
        current = kept;
    }
}

#[cfg(test)]
#[path = "../tests/unit/dedup_tests.rs"]
mod tests;
