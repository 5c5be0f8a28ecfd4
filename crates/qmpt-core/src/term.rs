//! Engine-side terms.
//!
//! Unlike the surface [`qmpt_ast::Term`], variables here are indices into a
//! [`Bindings`](crate::Bindings) store and sub-terms are shared through `Rc`,
//! so cloning a term during search is cheap.

use qmpt_ast::Symbol;
use std::fmt;
use std::rc::Rc;

use crate::bindings::Bindings;
use crate::convert;

/// A logic variable: a slot in a binding store or in a clause template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    pub fn new(index: usize) -> Self {
        Var(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// The same variable moved `base` slots up
    pub fn offset(self, base: usize) -> Self {
        Var(self.0 + base)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Var(Var),
    Atom(Symbol),
    Int(i64),
    Str(Symbol),
    /// `-T`
    Neg(Rc<Term>),
    Compound(Symbol, Rc<[Term]>),
}

impl Term {
    pub fn atom(name: &str) -> Self {
        Term::Atom(qmpt_ast::symbol(name))
    }

    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    pub fn neg(term: Term) -> Self {
        Term::Neg(Rc::new(term))
    }

    /// `functor(args...)`; with no arguments this is the atom `functor`.
    pub fn compound(functor: &str, args: Vec<Term>) -> Self {
        if args.is_empty() {
            Term::atom(functor)
        } else {
            Term::Compound(qmpt_ast::symbol(functor), args.into())
        }
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(var) => Some(*var),
            _ => None,
        }
    }

    /// `Some(t)` iff this term is `-t`. Callers walk the term first.
    pub fn negation_of(&self) -> Option<&Term> {
        match self {
            Term::Neg(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Atoms, compounds and negations of those can head a rule or be proved.
    pub fn is_callable(&self) -> bool {
        match self {
            Term::Atom(_) | Term::Compound(_, _) => true,
            Term::Neg(inner) => inner.is_callable(),
            Term::Var(_) | Term::Int(_) | Term::Str(_) => false,
        }
    }

    /// Rebuild the term with every variable moved `base` slots up.
    pub fn offset_vars(&self, base: usize) -> Term {
        match self {
            Term::Var(var) => Term::Var(var.offset(base)),
            Term::Atom(_) | Term::Int(_) | Term::Str(_) => self.clone(),
            Term::Neg(inner) => Term::neg(inner.offset_vars(base)),
            Term::Compound(functor, args) => Term::Compound(
                *functor,
                args.iter().map(|arg| arg.offset_vars(base)).collect(),
            ),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", convert::lift(&Bindings::new(), self))
    }
}
