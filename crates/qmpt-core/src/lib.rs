//! Core data structures for the QMPT solver
//!
//! This crate holds the engine's term model and everything that works on
//! individual terms and clauses:
//! - **Bindings**: variable cells with a trail for undoing bindings
//! - **Unification**: `unify`, structural identity and alpha-equivalence
//! - **Dedup**: duplicate removal for subgoal sequences
//! - **Clause**: rule templates and their instantiation
//! - **RuleStore**: the rule database
//! - **Convert**: moving terms to and from `qmpt_ast`

pub mod bindings;
pub mod clause;
pub mod convert;
pub mod dedup;
pub mod store;
pub mod term;
pub mod unification;

pub use bindings::{Bindings, Mark};
pub use clause::{Clause, ClauseError};
pub use convert::{clause_from_ast, goal_from_ast, lift, lower, Goal, VarScope};
pub use dedup::{dedup_alpha, dedup_alpha_pure, dedup_structural};
pub use store::{MatchingRules, RuleStore};
pub use term::{Term, Var};
pub use unification::{
    alpha_equivalent, alpha_equivalent_sets, alpha_unify, structurally_equal, unify, Renaming,
};
