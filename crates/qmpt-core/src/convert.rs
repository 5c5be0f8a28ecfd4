//! Moving terms between the surface syntax and the engine.

use indexmap::IndexMap;
use qmpt_ast::{self as ast, Symbol, Value, ANONYMOUS};

use crate::bindings::Bindings;
use crate::clause::{Clause, ClauseError};
use crate::term::{Term, Var};

/// Maps variable names to locally numbered variables. Every `_` is distinct.
#[derive(Debug, Clone, Default)]
pub struct VarScope {
    named: IndexMap<Symbol, Var>,
    count: usize,
}

impl VarScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(&mut self, name: Symbol) -> Var {
        if name.as_str() == ANONYMOUS {
            return self.next();
        }
        if let Some(var) = self.named.get(&name) {
            return *var;
        }
        let var = self.next();
        self.named.insert(name, var);
        var
    }

    fn next(&mut self) -> Var {
        let var = Var::new(self.count);
        self.count += 1;
        var
    }

    /// Number of variables allocated, anonymous ones included
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Named variables in order of first occurrence
    pub fn named(&self) -> impl Iterator<Item = (Symbol, Var)> + '_ {
        self.named.iter().map(|(name, var)| (*name, *var))
    }
}

/// Convert a surface term, numbering its variables through `scope`
pub fn lower(term: &ast::Term, scope: &mut VarScope) -> Term {
    match term {
        ast::Term::Variable(name) => Term::Var(scope.var(*name)),
        ast::Term::Constant(Value::Atom(name)) => Term::Atom(*name),
        ast::Term::Constant(Value::Integer(n)) => Term::Int(*n),
        ast::Term::Constant(Value::String(s)) => Term::Str(*s),
        ast::Term::Compound(functor, args) if args.is_empty() => Term::Atom(*functor),
        ast::Term::Compound(functor, args) => Term::Compound(
            *functor,
            args.iter().map(|arg| lower(arg, scope)).collect(),
        ),
        ast::Term::Negated(inner) => Term::neg(lower(inner, scope)),
    }
}

/// Resolve an engine term back into surface syntax. Unbound variables are
/// rendered as `_G<index>`.
pub fn lift(bindings: &Bindings, term: &Term) -> ast::Term {
    match bindings.walk(term) {
        Term::Var(var) => ast::Term::var(&format!("_G{}", var.index())),
        Term::Atom(name) => ast::Term::Constant(Value::Atom(*name)),
        Term::Int(n) => ast::Term::int(*n),
        Term::Str(s) => ast::Term::Constant(Value::String(*s)),
        Term::Neg(inner) => ast::Term::negated(lift(bindings, inner)),
        Term::Compound(functor, args) => ast::Term::Compound(
            *functor,
            args.iter().map(|arg| lift(bindings, arg)).collect(),
        ),
    }
}

/// Build a rule template from a surface head and antecedents
pub fn clause_from_ast(head: &ast::Term, body: &[ast::Term]) -> Result<Clause, ClauseError> {
    let mut scope = VarScope::new();
    let head = lower(head, &mut scope);
    let body = body.iter().map(|term| lower(term, &mut scope)).collect();
    Clause::new(head, body, scope.len())
}

/// A goal converted into live terms of a binding store
#[derive(Debug, Clone)]
pub struct Goal {
    pub term: Term,
    /// Named goal variables in order of first occurrence
    pub vars: Vec<(Symbol, Var)>,
}

/// Convert a goal, allocating its variables in `bindings`
pub fn goal_from_ast(bindings: &mut Bindings, goal: &ast::Term) -> Goal {
    let mut scope = VarScope::new();
    let local = lower(goal, &mut scope);
    let base = bindings.fresh_block(scope.len());
    Goal {
        term: local.offset_vars(base),
        vars: scope
            .named()
            .map(|(name, var)| (name, var.offset(base)))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/convert_tests.rs"]
mod tests;
