//! Paraconsistent solving for QMPT programs
//!
//! A goal is proved by backward expansion: pick a subgoal, replace it by the
//! antecedents of a matching rule, and after every step try to close the
//! resulting subgoal set. Closure cancels complementary literals (`X` and
//! `-X`) across the pool of subgoal sets already seen for the same goal, so
//! a contradiction in the rules is absorbed instead of proving everything.
//!
//! # Example
//!
//! ```
//! use qmpt_ast::Term;
//! use qmpt_solve::Engine;
//!
//! let mut engine = Engine::new();
//! engine.consult("g :- a. g :- -a.").unwrap();
//!
//! // Neither `a` nor `-a` is known, but one of the two must hold.
//! assert!(engine.prove(&Term::atom("g")));
//! ```

pub mod closure;
pub mod config;
pub mod engine;
pub mod hypotheses;
pub mod search;
pub mod substitution;

pub use closure::close_hypotheses;
pub use config::{ConfigError, SolverConfig};
pub use engine::{Engine, EngineError};
pub use hypotheses::HypothesisStore;
pub use search::Solutions;
pub use substitution::Substitution;
