//! Token grammar
//!
//! ```text
//! module    := 'module' '{' operation* '}'
//! operation := [value '='] op-name [value (',' value)*] [attr-dict] [':' type]
//! attr-dict := '{' [ident '=' attribute (',' ident '=' attribute)*] '}'
//! attribute := integer | 'true' | 'false' | string
//! ```
//!
//! The grammar only checks shape. Vocabulary and SSA rules are applied when
//! the syntax tree is lowered into a module.

use crate::lexer::{Span, Spanned, Token};
use chumsky::input::ValueInput;
use chumsky::prelude::*;

/// Attribute literal as written
#[derive(Debug, Clone, PartialEq)]
pub enum RawAttribute {
    Int(String),
    Str(String),
    Bool(bool),
}

/// One operation as written
#[derive(Debug, Clone, PartialEq)]
pub struct RawOperation {
    pub result: Option<Spanned<String>>,
    pub name: Spanned<String>,
    pub operands: Vec<Spanned<String>>,
    pub attributes: Vec<(Spanned<String>, Spanned<RawAttribute>)>,
    /// Span of the ':' and the type text
    pub ty: Option<(Span, Spanned<String>)>,
}

/// Parser for a whole module body
pub fn module<'tokens, I>(
) -> impl Parser<'tokens, I, Vec<RawOperation>, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    let ctrl = |ch: char| just(Token::Ctrl(ch));

    let value = select! { Token::ValueId(name) => name }
        .map_with(|name, e| (name, e.span()))
        .labelled("value name");

    let ident = select! { Token::Ident(name) => name }.map_with(|name, e| (name, e.span()));

    let result = value.clone().then_ignore(ctrl('='));

    // A value followed by '=' is the result of the next operation
    let operand = value.then_ignore(ctrl('=').not().rewind());
    let operands = operand
        .separated_by(ctrl(','))
        .collect::<Vec<_>>()
        .labelled("operands");

    let literal = select! {
        Token::Int(text) => RawAttribute::Int(text),
        Token::Str(text) => RawAttribute::Str(text),
        Token::Ident(word) if word == "true" => RawAttribute::Bool(true),
        Token::Ident(word) if word == "false" => RawAttribute::Bool(false),
    }
    .map_with(|literal, e| (literal, e.span()))
    .labelled("attribute value");

    let attributes = ident
        .clone()
        .labelled("attribute name")
        .then_ignore(ctrl('='))
        .then(literal)
        .separated_by(ctrl(','))
        .collect::<Vec<_>>()
        .delimited_by(ctrl('{'), ctrl('}'))
        .labelled("attribute dictionary");

    let ty = ctrl(':')
        .map_with(|_, e| e.span())
        .then(ident.clone().labelled("type"));

    let operation = result
        .or_not()
        .then(ident.labelled("operation name"))
        .then(operands)
        .then(attributes.or_not())
        .then(ty.or_not())
        .map(
            |((((result, name), operands), attributes), ty)| RawOperation {
                result,
                name,
                operands,
                attributes: attributes.unwrap_or_default(),
                ty,
            },
        );

    just(Token::Ident("module".to_string()))
        .labelled("'module'")
        .ignore_then(
            operation
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(ctrl('{'), ctrl('}')),
        )
        .then_ignore(end())
}
