//! Knowledge bases for abductive label revision
//!
//! A [`Kb`] pairs a loaded solver with the set of values a label may take.
//! Given labels that are probably wrong and the result they should produce,
//! [`Kb::abduce_candidates`] searches for the smallest revisions that make
//! `logic_forward(Labels, Result)` provable.
//!
//! # Example
//!
//! ```
//! use qmpt_ast::Term;
//! use qmpt_kb::Kb;
//!
//! let mut kb = Kb::addition().unwrap();
//! let labels = vec![Term::int(3), Term::int(9)];
//!
//! assert_eq!(kb.logic_forward(&labels), Some(Term::int(12)));
//!
//! let candidates = kb.abduce_candidates(&labels, &Term::int(7), 1, 0).unwrap();
//! assert_eq!(candidates[0].labels, vec![Term::int(3), Term::int(4)]);
//! ```

pub mod cache;
pub mod kb;

pub use cache::{LruCache, DEFAULT_CACHE_SIZE};
pub use kb::{combinations, AbductionKey, Candidate, Kb, KbError};
