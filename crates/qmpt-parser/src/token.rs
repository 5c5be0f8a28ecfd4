use chumsky::prelude::*;
use std::fmt;

use crate::Span;

pub type SpannedToken = (Token, Span);
pub type LexError = Simple<char, Span>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Ident(String),
    Variable(String),
    Number(String),
    String(String),
    Minus,
    RuleSep,
    QueryStart,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Pipe,
    Comma,
    Dot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(text) => write!(f, "{}", text),
            Token::Variable(text) => write!(f, "{}", text),
            Token::Number(text) => write!(f, "{}", text),
            Token::String(text) => write!(f, "\"{}\"", text),
            Token::Minus => write!(f, "-"),
            Token::RuleSep => write!(f, ":-"),
            Token::QueryStart => write!(f, "?-"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Pipe => write!(f, "|"),
            Token::Comma => write!(f, ","),
            Token::Dot => write!(f, "."),
        }
    }
}

fn string_literal() -> impl Parser<char, String, Error = LexError> + Clone {
    let escape_sequence = just('\\').ignore_then(choice((
        just('"').to('"'),
        just('n').to('\n'),
        just('t').to('\t'),
        just('\\').to('\\'),
    )));

    let string_char = choice((
        escape_sequence,
        filter(|c| *c != '"' && *c != '\\' && *c != '\n'),
    ));

    just('"')
        .ignore_then(string_char.repeated())
        .then_ignore(just('"'))
        .collect::<String>()
        .labelled("string")
}

fn number_literal() -> impl Parser<char, String, Error = LexError> + Clone {
    text::int(10).labelled("number")
}

fn identifier() -> impl Parser<char, Token, Error = LexError> + Clone {
    text::ident()
        .map(|ident: String| {
            if ident.starts_with(|c: char| c.is_uppercase() || c == '_') {
                Token::Variable(ident)
            } else {
                Token::Ident(ident)
            }
        })
        .labelled("identifier")
}

fn line_comment() -> impl Parser<char, (), Error = LexError> + Clone {
    just('%')
        .then(filter(|c| *c != '\n').repeated())
        .ignored()
        .labelled("line comment")
}

fn block_comment() -> impl Parser<char, (), Error = LexError> + Clone {
    just("/*")
        .then(take_until(just("*/")))
        .ignored()
        .labelled("block comment")
}

fn comment() -> impl Parser<char, (), Error = LexError> + Clone {
    block_comment().or(line_comment()).labelled("comment")
}

fn spacing() -> impl Parser<char, (), Error = LexError> + Clone {
    comment()
        .or(text::whitespace().at_least(1).ignored())
        .repeated()
        .ignored()
}

pub fn lexer() -> impl Parser<char, Vec<SpannedToken>, Error = LexError> + Clone {
    let punct = choice((
        just(":-").to(Token::RuleSep),
        just("?-").to(Token::QueryStart),
        just('-').to(Token::Minus),
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('[').to(Token::LBracket),
        just(']').to(Token::RBracket),
        just('|').to(Token::Pipe),
        just(',').to(Token::Comma),
        just('.').to(Token::Dot),
    ));

    let token = choice((
        string_literal().map(Token::String),
        number_literal().map(Token::Number),
        identifier(),
        punct,
    ))
    .map_with_span(|token, span| (token, span))
    .padded_by(spacing());

    spacing()
        .ignore_then(token.repeated())
        .then_ignore(end())
}
