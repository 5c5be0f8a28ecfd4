use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::bindings::Bindings;
use crate::term::{Term, Var};
use crate::unification::{alpha_equivalent_sets, Renaming};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// Heads and antecedents must be atoms, compounds or their negations
    #[error("malformed rule `{clause}`: `{term}` is not a callable term")]
    MalformedRule { clause: String, term: String },
}

/// A clause template: head, antecedents and the number of local variables.
///
/// Variables inside a template are numbered `0..vars` and only mean
/// something after [`Clause::instantiate`] moves them into a binding store.
/// The same type holds the frozen `(goal, subgoals)` pairs of the
/// hypothesis store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    head: Term,
    body: Vec<Term>,
    vars: usize,
}

impl Clause {
    /// Build a rule template from locally numbered terms, rejecting heads or
    /// antecedents that cannot be proved.
    pub fn new(head: Term, body: Vec<Term>, vars: usize) -> Result<Self, ClauseError> {
        let clause = Clause { head, body, vars };
        let bad = std::iter::once(&clause.head)
            .chain(clause.body.iter())
            .find(|term| !term.is_callable());
        match bad {
            Some(term) => Err(ClauseError::MalformedRule {
                clause: clause.to_string(),
                term: term.to_string(),
            }),
            None => Ok(clause),
        }
    }

    /// Snapshot live terms as a template: resolve them through `bindings`
    /// and renumber the remaining free variables by first occurrence.
    pub fn freeze(bindings: &Bindings, head: &Term, body: &[Term]) -> Self {
        let mut renumber = HashMap::new();
        let head = freeze_term(bindings, head, &mut renumber);
        let body = body
            .iter()
            .map(|term| freeze_term(bindings, term, &mut renumber))
            .collect();
        Clause {
            head,
            body,
            vars: renumber.len(),
        }
    }

    pub fn head(&self) -> &Term {
        &self.head
    }

    pub fn body(&self) -> &[Term] {
        &self.body
    }

    pub fn var_count(&self) -> usize {
        self.vars
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// A copy of the clause over fresh variables of `bindings`
    pub fn instantiate(&self, bindings: &mut Bindings) -> (Term, Vec<Term>) {
        let base = bindings.fresh_block(self.vars);
        let head = self.head.offset_vars(base);
        let body = self.body.iter().map(|term| term.offset_vars(base)).collect();
        (head, body)
    }

    /// Same head up to renaming and the same antecedents up to renaming and
    /// order, under a single renaming.
    pub fn is_variant_of(&self, other: &Clause) -> bool {
        if self.vars != other.vars || self.body.len() != other.body.len() {
            return false;
        }
        let templates = Bindings::new();
        let mut renaming = Renaming::new();
        renaming.extend(&templates, &self.head, &other.head)
            && alpha_equivalent_sets(&templates, &renaming, &self.body, &other.body)
    }

    /// Cheap pre-filter: could `goal` unify with this clause's head?
    /// Only the outermost functor, arity and negation are compared.
    pub fn could_match(&self, bindings: &Bindings, goal: &Term) -> bool {
        shallow_compatible(bindings, goal, &self.head)
    }
}

fn freeze_term(bindings: &Bindings, term: &Term, renumber: &mut HashMap<Var, Var>) -> Term {
    match bindings.walk(term) {
        Term::Var(var) => {
            let next = renumber.len();
            Term::Var(*renumber.entry(*var).or_insert_with(|| Var::new(next)))
        }
        Term::Neg(inner) => Term::neg(freeze_term(bindings, inner, renumber)),
        Term::Compound(functor, args) => Term::Compound(
            *functor,
            args.iter()
                .map(|arg| freeze_term(bindings, arg, renumber))
                .collect(),
        ),
        other => other.clone(),
    }
}

// `goal` lives in `bindings`; `head` is a template and is not walked.
fn shallow_compatible(bindings: &Bindings, goal: &Term, head: &Term) -> bool {
    match (bindings.walk(goal), head) {
        (Term::Var(_), _) | (_, Term::Var(_)) => true,
        (Term::Atom(a), Term::Atom(b)) => a == b,
        (Term::Int(a), Term::Int(b)) => a == b,
        (Term::Str(a), Term::Str(b)) => a == b,
        (Term::Neg(a), Term::Neg(b)) => shallow_compatible(bindings, a, b),
        (Term::Compound(f, xs), Term::Compound(g, ys)) => f == g && xs.len() == ys.len(),
        _ => false,
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if !self.body.is_empty() {
            write!(f, " :- ")?;
            for (idx, antecedent) in self.body.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", antecedent)?;
            }
        }
        write!(f, ".")
    }
}
