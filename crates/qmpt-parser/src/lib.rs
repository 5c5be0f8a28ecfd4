//! Parser for QMPT programs
//!
//! This crate implements a parser combinator-based parser using the Chumsky library.
//! It parses QMPT programs from text into an AST (Abstract Syntax Tree).
//!
//! # Supported Syntax
//!
//! - **Facts**: `add(3, 4, 7).`
//! - **Rules**: `logic_forward([A, B], C) :- add(A, B, C).`
//! - **Negated literals**: `-a.` or `g :- -a.`
//! - **Lists**: `[1, 2, 3]`, `[H | T]`
//! - **Queries**: `?- logic_forward([3, 4], R).`
//! - **Comments**: `% line` and `/* block */`
//!
//! # Example
//!
//! ```
//! use qmpt_parser::{parse_program, SrcId};
//!
//! let program_text = "add(3, 4, 7). logic_forward([A, B], C) :- add(A, B, C).";
//! let program = parse_program(program_text, SrcId::empty()).expect("Parse error");
//! assert_eq!(program.statements.len(), 2);
//! ```

mod parser;
mod span;
mod src;
mod token;

pub use parser::{parse_program, parse_query, parse_term, ParseError};
pub use span::Span;
pub use src::SrcId;
pub use token::{LexError, Token};
