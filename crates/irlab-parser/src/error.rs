//! Parser error types

use crate::lexer::{Span, Token};
use chumsky::error::Rich;
use irlab_core::{Printable, Printer};
use std::fmt;
use thiserror::Error;

/// What went wrong while parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Character that does not fit the token being lexed
    #[error("expected {expected}, found character {found:?}")]
    UnexpectedCharacter { expected: String, found: char },

    /// Integer literal out of range
    #[error("invalid integer literal '{0}'")]
    InvalidInteger(String),

    /// A different token was expected
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// Input ended early
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    /// Operand refers to a value that has not been defined
    #[error("use of undefined value '%{0}'")]
    UndefinedValue(String),

    /// Result name is already defined
    #[error("redefinition of value '%{0}'")]
    RedefinedValue(String),

    /// Operation is not part of any loaded dialect
    #[error("unregistered operation '{0}'")]
    UnregisteredOperation(String),

    /// Operand count does not match the definition
    #[error("'{op}' expects {expected} operand(s), found {found}")]
    OperandCount {
        op: String,
        expected: String,
        found: usize,
    },

    /// Operation defines a result but has no type annotation
    #[error("result of '{0}' is missing a type annotation")]
    MissingResultType(String),

    /// Type annotation on an operation without a result
    #[error("'{0}' has a type annotation but no result")]
    TypeWithoutResult(String),

    /// Operation defines a result although it has none
    #[error("'{0}' does not produce a result")]
    UnexpectedResult(String),

    /// Operation produces a result that is not bound to a name
    #[error("result of '{0}' must be bound to a value name")]
    MissingResult(String),

    /// Required attribute is absent
    #[error("'{op}' requires attribute '{attribute}'")]
    MissingAttribute { op: String, attribute: String },

    /// Attribute key given twice
    #[error("duplicate attribute '{0}'")]
    DuplicateAttribute(String),

    /// Type annotation could not be parsed
    #[error("invalid type '{0}'")]
    InvalidType(String),
}

/// Parser error with its source position
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{line}:{column}: {kind}")]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// 1-based line
    pub line: usize,
    /// 1-based column (in characters)
    pub column: usize,
    /// The source line the error points into
    pub snippet: String,
}

impl ParseError {
    /// Create an error at a position of `source`
    pub fn at(kind: ParseErrorKind, source: &str, line: usize, column: usize) -> Self {
        let snippet = source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or_default()
            .to_string();

        Self {
            kind,
            line,
            column,
            snippet,
        }
    }

    /// Create an error at the start of a byte span of `source`
    pub fn spanned(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        let (line, column) = line_column(source, span.start);
        Self::at(kind, source, line, column)
    }

    /// Convert a lexer error
    pub(crate) fn from_lexer(err: &Rich<'_, char, Span>, source: &str) -> Self {
        let expected = expected_list(err);
        let kind = match err.found() {
            Some(found) => ParseErrorKind::UnexpectedCharacter {
                expected,
                found: *found,
            },
            None => ParseErrorKind::UnexpectedEof { expected },
        };
        Self::spanned(kind, source, *err.span())
    }

    /// Convert a syntax error raised over the token stream
    pub(crate) fn from_syntax(err: &Rich<'_, Token, Span>, source: &str) -> Self {
        let expected = expected_list(err);
        let kind = match err.found() {
            Some(found) => ParseErrorKind::UnexpectedToken {
                expected,
                found: found.describe(),
            },
            None => ParseErrorKind::UnexpectedEof { expected },
        };
        Self::spanned(kind, source, *err.span())
    }
}

/// 1-based line and character column of a byte offset
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

fn expected_list<T: fmt::Display>(err: &Rich<'_, T, Span>) -> String {
    let mut expected: Vec<String> = err.expected().map(ToString::to_string).collect();
    expected.sort();
    expected.dedup();

    match expected.as_slice() {
        [] => "something else".to_string(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

impl Printable for ParseError {
    fn print(&self, printer: &mut Printer) {
        printer.write_line(&format!(
            "<input>:{}:{}: error: {}",
            self.line, self.column, self.kind
        ));
        printer.write_line(&self.snippet);
        printer.write_line(&format!("{}^", " ".repeat(self.column.saturating_sub(1))));
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
