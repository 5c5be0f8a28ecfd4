//! Parser implementation details.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::stream::Stream;
use internment::Intern;
use std::fmt;

use crate::token::{lexer, LexError, SpannedToken, Token};
use crate::{Span, SrcId};
use qmpt_ast::*;

type ParserError = Simple<Token, Span>;

#[derive(Debug, Clone)]
pub enum ParseError {
    Lex(LexError),
    Parse(ParserError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(error) => error.span(),
            ParseError::Parse(error) => error.span(),
        }
    }

    /// Short description of what went wrong, without location
    pub fn message(&self) -> String {
        match self {
            ParseError::Lex(error) => describe(error),
            ParseError::Parse(error) => describe(error),
        }
    }
}

fn describe<I: fmt::Display + std::hash::Hash + Eq>(error: &Simple<I, Span>) -> String {
    let found = match error.found() {
        Some(found) => format!("'{}'", found),
        None => "end of input".to_string(),
    };
    let mut message = match error.reason() {
        SimpleReason::Custom(msg) => return msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("Unclosed delimiter '{}', found {}", delimiter, found)
        }
        SimpleReason::Unexpected => format!("Unexpected {}", found),
    };
    if let Some(label) = error.label() {
        message.push_str(&format!(" while parsing {}", label));
    }
    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some(token) => format!("'{}'", token),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    if !expected.is_empty() {
        message.push_str(&format!(", expected {}", expected.join(" or ")));
    }
    message
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{} at {}:{}", self.message(), span.src(), span.start())
    }
}

impl std::error::Error for ParseError {}

fn ident_token() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Ident(ident) => ident }.labelled("identifier")
}

fn variable_token() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Variable(ident) => ident }.labelled("variable")
}

fn string_token() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::String(value) => value }.labelled("string")
}

fn number_token() -> impl Parser<Token, i64, Error = ParserError> + Clone {
    select! { Token::Number(number) => number }
        .try_map(|value: String, span| {
            value
                .parse::<i64>()
                .map_err(|_| ParserError::custom(span, "invalid integer"))
        })
        .labelled("number")
}

fn token(kind: Token) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    just(kind)
}

fn lex_with_src(input: &str, src: SrcId) -> Result<Vec<SpannedToken>, Vec<ParseError>> {
    let len = input.chars().count();
    let eoi = Span::point(src, len);
    let stream = Stream::from_iter(
        eoi,
        input
            .chars()
            .enumerate()
            .map(|(idx, ch)| (ch, Span::new(src, idx..idx + 1))),
    );
    lexer()
        .parse(stream)
        .map_err(|errors| errors.into_iter().map(ParseError::Lex).collect())
}

#[cfg(test)]
fn lex(input: &str) -> Result<Vec<SpannedToken>, Vec<ParseError>> {
    lex_with_src(input, SrcId::empty())
}

fn parse_with<T>(
    parser: impl Parser<Token, T, Error = ParserError>,
    input: &str,
    src: SrcId,
) -> Result<T, Vec<ParseError>> {
    let tokens = lex_with_src(input, src)?;
    let end = input.chars().count();
    let eoi = Span::point(src, end);
    let stream = Stream::from_iter(eoi, tokens.into_iter());
    parser
        .parse(stream)
        .map_err(|errors| errors.into_iter().map(ParseError::Parse).collect())
}

/// Parse a term: variable, number, string, atom, compound, list, or `-Term`
fn term() -> impl Parser<Token, Term, Error = ParserError> + Clone {
    recursive(|term| {
        let variable = variable_token().map(|name| Term::Variable(Intern::new(name)));

        let number = number_token().map(Term::int);

        let string = string_token().map(|s| Term::Constant(Value::String(Intern::new(s))));

        let args = term
            .clone()
            .separated_by(token(Token::Comma))
            .at_least(1)
            .delimited_by(token(Token::LParen), token(Token::RParen));

        let compound_or_atom = ident_token()
            .then(args.or_not())
            .map(|(name, args)| match args {
                Some(args) => Term::Compound(Intern::new(name), args),
                None => Term::Constant(Value::Atom(Intern::new(name))),
            });

        let list = term
            .clone()
            .separated_by(token(Token::Comma))
            .then(token(Token::Pipe).ignore_then(term.clone()).or_not())
            .delimited_by(token(Token::LBracket), token(Token::RBracket))
            .try_map(|(items, tail), span| match tail {
                Some(_) if items.is_empty() => {
                    Err(ParserError::custom(span, "list tail without elements"))
                }
                Some(tail) => Ok(Term::list_with_tail(items, tail)),
                None => Ok(Term::list(items)),
            })
            .labelled("list");

        let parens = term
            .clone()
            .delimited_by(token(Token::LParen), token(Token::RParen));

        let negative_number = token(Token::Minus)
            .ignore_then(number_token())
            .map(|n| Term::int(-n));

        let negated = token(Token::Minus)
            .ignore_then(term.clone())
            .map(Term::negated)
            .labelled("negated term");

        choice((
            negative_number,
            negated,
            variable,
            number,
            string,
            list,
            parens,
            compound_or_atom,
        ))
    })
    .labelled("term")
}

fn clause() -> impl Parser<Token, Clause, Error = ParserError> + Clone {
    let body = token(Token::RuleSep)
        .ignore_then(term().separated_by(token(Token::Comma)).at_least(1))
        .or_not();

    term()
        .then(body)
        .then_ignore(token(Token::Dot))
        .map(|(head, body)| Clause {
            head,
            body: body.unwrap_or_default(),
        })
        .labelled("clause")
}

/// Parse a query: ?- goal.
fn query() -> impl Parser<Token, Query, Error = ParserError> + Clone {
    token(Token::QueryStart)
        .ignore_then(term())
        .then_ignore(token(Token::Dot))
        .map(|goal| Query { goal })
        .labelled("query")
}

/// Parse a statement
fn statement() -> impl Parser<Token, Statement, Error = ParserError> + Clone {
    choice((query().map(Statement::Query), clause().map(Statement::Clause)))
        .labelled("statement")
}

/// Parse a program
pub fn program() -> impl Parser<Token, Program, Error = ParserError> + Clone {
    statement()
        .repeated()
        .map(|statements| Program { statements })
        .then_ignore(end())
        .labelled("program")
}

/// Parse a whole program from text
pub fn parse_program(input: &str, src: SrcId) -> Result<Program, Vec<ParseError>> {
    parse_with(program(), input, src)
}

/// Parse a query: `?- goal.`
pub fn parse_query(input: &str, src: SrcId) -> Result<Query, Vec<ParseError>> {
    parse_with(query().then_ignore(end()), input, src)
}

/// Parse a single term; a trailing `.` is accepted so goals can be typed
/// either way on the command line.
pub fn parse_term(input: &str, src: SrcId) -> Result<Term, Vec<ParseError>> {
    let parser = term()
        .then_ignore(token(Token::Dot).or_not())
        .then_ignore(end());
    parse_with(parser, input, src)
}

#[cfg(test)]
#[path = "../tests/unit/parser_tests.rs"]
mod tests;
