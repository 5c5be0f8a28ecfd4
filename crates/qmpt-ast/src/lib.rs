//! Abstract Syntax Tree (AST) definitions for QMPT programs
//!
//! A QMPT program is a list of Horn-like clauses over first-order terms, plus
//! queries. Literals may be negated with a prefix `-`; the solver treats a
//! negated term as an ordinary term whose complement is the un-negated one.
//!
//! # Key Components
//!
//! - **Program**: A collection of statements (clauses and queries)
//! - **Clause**: A head term implied by a conjunction of antecedent terms
//! - **Term**: Variables, constants, compound terms, or negated terms
//! - **Value**: Constant values (integers, strings, atoms)
//!
//! # Example
//!
//! ```
//! use qmpt_ast::{Clause, Term};
//!
//! // logic_forward([A, B], C) :- add(A, B, C).
//! let rule = Clause::rule(
//!     Term::compound("logic_forward", vec![
//!         Term::list(vec![Term::var("A"), Term::var("B")]),
//!         Term::var("C"),
//!     ]),
//!     vec![Term::compound("add", vec![Term::var("A"), Term::var("B"), Term::var("C")])],
//! );
//! assert_eq!(rule.to_string(), "logic_forward([A, B], C) :- add(A, B, C).");
//! ```

use internment::Intern;
use std::fmt;

/// Interned string for efficient storage and comparison
pub type Symbol = Intern<String>;

/// Functor used for list cells: `[H | T]` is `'[|]'(H, T)`.
pub const LIST_CONS: &str = "[|]";
/// Atom naming the empty list.
pub const LIST_NIL: &str = "[]";
/// Name of the anonymous variable; every occurrence is distinct.
pub const ANONYMOUS: &str = "_";

pub fn symbol(name: &str) -> Symbol {
    Intern::new(name.to_string())
}

/// A QMPT program consists of clauses and queries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Clause(Clause),
    Query(Query),
}

/// A clause has a head and a (possibly empty) body: `add(0, 0, 0).` or
/// `logic_forward([A, B], C) :- add(A, B, C).`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clause {
    pub head: Term,
    pub body: Vec<Term>,
}

/// A query names a single goal: `?- logic_forward([3, 4], R).`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    pub goal: Term,
}

/// A term can be a variable, constant, compound term, or a negated term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// Variable: uppercase or starts with underscore (X, Res, _tmp)
    Variable(Symbol),
    /// Constant: integer, string, or lowercase identifier
    Constant(Value),
    /// Compound term: functor with arguments (f(a, b))
    Compound(Symbol, Vec<Term>),
    /// Negated term: `-T`
    Negated(Box<Term>),
}

/// Constant values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Integer(i64),
    String(Symbol),
    Atom(Symbol),
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }

    /// Add a statement to the program
    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Clause(clause) => Some(clause),
            Statement::Query(_) => None,
        })
    }

    pub fn queries(&self) -> impl Iterator<Item = &Query> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Query(query) => Some(query),
            Statement::Clause(_) => None,
        })
    }
}

impl Clause {
    pub fn fact(head: Term) -> Self {
        Clause {
            head,
            body: Vec::new(),
        }
    }

    pub fn rule(head: Term, body: Vec<Term>) -> Self {
        Clause { head, body }
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }
}

impl Term {
    pub fn var(name: &str) -> Self {
        Term::Variable(symbol(name))
    }

    pub fn atom(name: &str) -> Self {
        Term::Constant(Value::Atom(symbol(name)))
    }

    pub fn int(value: i64) -> Self {
        Term::Constant(Value::Integer(value))
    }

    pub fn string(value: &str) -> Self {
        Term::Constant(Value::String(symbol(value)))
    }

    /// Build `functor(args...)`; with no arguments this is the atom `functor`.
    pub fn compound(functor: &str, args: Vec<Term>) -> Self {
        if args.is_empty() {
            Term::atom(functor)
        } else {
            Term::Compound(symbol(functor), args)
        }
    }

    pub fn negated(term: Term) -> Self {
        Term::Negated(Box::new(term))
    }

    pub fn nil() -> Self {
        Term::atom(LIST_NIL)
    }

    pub fn cons(head: Term, tail: Term) -> Self {
        Term::Compound(symbol(LIST_CONS), vec![head, tail])
    }

    /// Build a proper list `[a, b, c]`
    pub fn list(items: Vec<Term>) -> Self {
        Term::list_with_tail(items, Term::nil())
    }

    /// Build `[a, b | Tail]`
    pub fn list_with_tail(items: Vec<Term>, tail: Term) -> Self {
        items
            .into_iter()
            .rev()
            .fold(tail, |acc, item| Term::cons(item, acc))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Term::Variable(name) if name.as_str() == ANONYMOUS)
    }

    /// Check if the term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Compound(_, args) => args.iter().all(Term::is_ground),
            Term::Negated(inner) => inner.is_ground(),
        }
    }

    /// Split a list term into its items and a non-`[]` tail, if any.
    pub fn as_list(&self) -> Option<(Vec<&Term>, Option<&Term>)> {
        let mut items = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                Term::Compound(functor, args) if functor.as_str() == LIST_CONS && args.len() == 2 => {
                    items.push(&args[0]);
                    cursor = &args[1];
                }
                Term::Constant(Value::Atom(name)) if name.as_str() == LIST_NIL => {
                    return Some((items, None));
                }
                _ if items.is_empty() => return None,
                tail => return Some((items, Some(tail))),
            }
        }
    }

    /// Named variables in order of first occurrence, anonymous ones excluded
    pub fn variables(&self) -> Vec<Symbol> {
        fn collect(term: &Term, vars: &mut Vec<Symbol>) {
            match term {
                Term::Variable(name) => {
                    if name.as_str() != ANONYMOUS && !vars.contains(name) {
                        vars.push(*name);
                    }
                }
                Term::Constant(_) => {}
                Term::Compound(_, args) => {
                    for arg in args {
                        collect(arg, vars);
                    }
                }
                Term::Negated(inner) => collect(inner, vars),
            }
        }

        let mut vars = Vec::new();
        collect(self, &mut vars);
        vars
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s.as_str()),
            Value::Atom(a) => write!(f, "{}", a.as_str()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((items, tail)) = self.as_list() {
            write!(f, "[")?;
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            if let Some(tail) = tail {
                write!(f, " | {}", tail)?;
            }
            return write!(f, "]");
        }
        match self {
            Term::Variable(name) => write!(f, "{}", name.as_str()),
            Term::Constant(value) => write!(f, "{}", value),
            Term::Compound(functor, args) => {
                write!(f, "{}(", functor.as_str())?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            // `-(-3)` keeps the negation apart from a negative literal
            Term::Negated(inner) => match inner.as_ref() {
                Term::Constant(Value::Integer(n)) if *n < 0 => write!(f, "-({})", inner),
                _ => write!(f, "-{}", inner),
            },
        }
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

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?- {}.", self.goal)
    }
}

#[cfg(test)]
#[path = "../tests/unit/ast_tests.rs"]
mod tests;
