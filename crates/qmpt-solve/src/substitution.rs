use indexmap::IndexMap;
use qmpt_ast::{Symbol, Term};
use std::fmt;

/// Answer to a query: goal variable names mapped to resolved terms, in the
/// order the variables first appear in the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<Symbol, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Substitution {
            bindings: IndexMap::new(),
        }
    }

    pub fn bind(&mut self, var: Symbol, term: Term) {
        self.bindings.insert(var, term);
    }

    pub fn get(&self, var: &Symbol) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Look a variable up by name
    pub fn value(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(var, _)| var.as_str() == name)
            .map(|(_, term)| term)
    }

    pub fn contains(&self, var: &Symbol) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Term)> {
        self.bindings.iter()
    }

    /// Replace bound variables in a surface term
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(var) => self.bindings.get(var).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
            Term::Compound(functor, args) => {
                Term::Compound(*functor, args.iter().map(|arg| self.apply(arg)).collect())
            }
            Term::Negated(inner) => Term::negated(self.apply(inner)),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bindings.is_empty() {
            return write!(f, "true");
        }
        for (idx, (var, term)) in self.bindings.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", var.as_str(), term)?;
        }
        Ok(())
    }
}
