//! Lexer
//!
//! Splits IR text into spanned tokens.
//!
//! Supported tokens:
//! - Identifiers: `module`, `arith.addi`, `i64`, `true`
//! - Value names: `%x`, `%0`, `%tmp.1`
//! - Integers: `42`, `-7`
//! - Strings: `"text"` with `\"`, `\\`, `\n`, `\t` escapes
//! - Punctuation: `{ } = , :`
//! - Line comments: `// ...`

use chumsky::prelude::*;
use std::fmt;

/// Byte span into the source text
pub type Span = SimpleSpan;

/// A value paired with its span
pub type Spanned<T> = (T, Span);

/// Tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Ident(String),
    ValueId(String),
    /// Integer text, range-checked when the module is built
    Int(String),
    Str(String),
    Ctrl(char),
}

impl Token {
    /// Human readable form used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Str(_) => "string literal".to_string(),
            other => format!("'{}'", other),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}", name),
            Token::ValueId(name) => write!(f, "%{}", name),
            Token::Int(text) => write!(f, "{}", text),
            Token::Str(text) => write!(f, "{:?}", text),
            Token::Ctrl(ch) => write!(f, "{}", ch),
        }
    }
}

/// Lexer over the whole input
pub fn lexer<'src>(
) -> impl Parser<'src, &'src str, Vec<Spanned<Token>>, extra::Err<Rich<'src, char, Span>>> {
    let value_id = just('%')
        .ignore_then(
            any()
                .filter(|c: &char| is_value_char(*c))
                .repeated()
                .at_least(1)
                .to_slice(),
        )
        .map(|name: &str| Token::ValueId(name.to_string()))
        .labelled("value name");

    let escape = just('\\').ignore_then(choice((
        just('"'),
        just('\\'),
        just('n').to('\n'),
        just('t').to('\t'),
    )));

    let string = none_of("\\\"\n")
        .or(escape)
        .repeated()
        .collect::<String>()
        .delimited_by(just('"'), just('"'))
        .map(Token::Str)
        .labelled("string literal");

    let integer = just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .map(|text: &str| Token::Int(text.to_string()))
        .labelled("integer");

    let ident = any()
        .filter(|c: &char| is_ident_start(*c))
        .then(any().filter(|c: &char| is_ident_char(*c)).repeated())
        .to_slice()
        .map(|name: &str| Token::Ident(name.to_string()))
        .labelled("identifier");

    let ctrl = one_of("{}=,:").map(Token::Ctrl);

    let token = choice((value_id, string, integer, ident, ctrl));

    let comment = just("//")
        .then(any().and_is(just('\n').not()).repeated())
        .padded();
    let trivia = text::whitespace().then(comment.repeated());

    trivia.clone().ignore_then(
        token
            .map_with(|token, e| (token, e.span()))
            .then_ignore(trivia)
            .repeated()
            .collect(),
    )
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '$')
}

fn is_value_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '$' | '-')
}
