//! Module parser
//!
//! Parses IR text into a [`Module`], checking every operation against the
//! vocabulary loaded into the [`Context`].

use crate::error::{ParseError, ParseErrorKind, Result};
use crate::lexer::{lexer, Span, Spanned};
use crate::syntax::{self, RawAttribute, RawOperation};
use chumsky::prelude::*;
use irlab_core::{Arity, Attribute, Context, Module, OpName, Operation, Type, Value};
use std::collections::{BTreeMap, HashSet};

/// Module parser
pub struct ModuleParser<'a> {
    source: &'a str,
    ctx: &'a Context,
    defined: HashSet<String>,
}

impl<'a> ModuleParser<'a> {
    /// Parse a module from text
    pub fn parse(source: &'a str, ctx: &'a Context) -> Result<Module> {
        let raw = Self::parse_syntax(source)?;

        let mut parser = Self {
            source,
            ctx,
            defined: HashSet::new(),
        };

        let mut module = Module::new();
        for raw_op in raw {
            let operation = parser.lower_operation(raw_op)?;
            module.push_operation(operation);
        }

        log::debug!("parsed module with {} operations", module.len());
        Ok(module)
    }

    fn parse_syntax(source: &str) -> Result<Vec<RawOperation>> {
        let (tokens, lex_errors) = lexer().parse(source).into_output_errors();
        if let Some(err) = lex_errors.first() {
            return Err(ParseError::from_lexer(err, source));
        }
        let tokens = tokens.unwrap_or_default();

        let eoi = Span::from(source.len()..source.len());
        let (ops, syntax_errors) = syntax::module()
            .parse(tokens.as_slice().map(eoi, |(token, span)| (token, span)))
            .into_output_errors();
        if let Some(err) = syntax_errors.first() {
            return Err(ParseError::from_syntax(err, source));
        }

        Ok(ops.unwrap_or_default())
    }

    fn error_at(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::spanned(kind, self.source, span)
    }

    // =========================================================================
    // Lowering
    // =========================================================================

    fn lower_operation(&mut self, raw: RawOperation) -> Result<Operation> {
        let (full_name, name_span) = raw.name;
        let name = OpName::parse(&full_name).ok_or_else(|| {
            self.error_at(
                ParseErrorKind::UnexpectedToken {
                    expected: "operation name of the form 'dialect.op'".to_string(),
                    found: format!("'{}'", full_name),
                },
                name_span,
            )
        })?;

        let mut operands = Vec::with_capacity(raw.operands.len());
        for (operand, span) in raw.operands {
            if !self.defined.contains(&operand) {
                return Err(self.error_at(ParseErrorKind::UndefinedValue(operand), span));
            }
            operands.push(operand);
        }

        let attributes = self.lower_attributes(raw.attributes)?;

        let result = match (&raw.result, raw.ty) {
            (Some((value_name, _)), Some((_, (type_text, type_span)))) => {
                let ty = Type::parse(&type_text).map_err(|_| {
                    self.error_at(ParseErrorKind::InvalidType(type_text.clone()), type_span)
                })?;
                Some(Value::new(value_name.clone(), ty))
            }
            (Some(_), None) => {
                return Err(self.error_at(
                    ParseErrorKind::MissingResultType(name.to_string()),
                    name_span,
                ));
            }
            (None, Some((colon_span, _))) => {
                return Err(self.error_at(
                    ParseErrorKind::TypeWithoutResult(name.to_string()),
                    colon_span,
                ));
            }
            (None, None) => None,
        };

        let operation = Operation {
            name,
            result,
            operands,
            attributes,
        };

        self.check_against_vocabulary(&operation, name_span)?;

        if let Some((value_name, span)) = raw.result {
            if !self.defined.insert(value_name.clone()) {
                return Err(self.error_at(ParseErrorKind::RedefinedValue(value_name), span));
            }
        }

        Ok(operation)
    }

    fn lower_attributes(
        &self,
        raw: Vec<(Spanned<String>, Spanned<RawAttribute>)>,
    ) -> Result<BTreeMap<String, Attribute>> {
        let mut attributes = BTreeMap::new();

        for ((key, key_span), (literal, literal_span)) in raw {
            let value = match literal {
                RawAttribute::Int(text) => match text.parse::<i64>() {
                    Ok(value) => Attribute::Integer(value),
                    Err(_) => {
                        return Err(
                            self.error_at(ParseErrorKind::InvalidInteger(text), literal_span)
                        );
                    }
                },
                RawAttribute::Str(text) => Attribute::String(text),
                RawAttribute::Bool(flag) => Attribute::Bool(flag),
            };

            if attributes.insert(key.clone(), value).is_some() {
                return Err(self.error_at(ParseErrorKind::DuplicateAttribute(key), key_span));
            }
        }

        Ok(attributes)
    }

    // =========================================================================
    // Vocabulary checks
    // =========================================================================

    fn check_against_vocabulary(&self, op: &Operation, name_span: Span) -> Result<()> {
        let op_name = op.name.to_string();
        let definition = self.ctx.resolve(&op.name).map_err(|_| {
            self.error_at(
                ParseErrorKind::UnregisteredOperation(op_name.clone()),
                name_span,
            )
        })?;

        let Some(definition) = definition else {
            return Ok(());
        };

        if !definition.arity.accepts(op.operands.len()) {
            let expected = match definition.arity {
                Arity::Fixed(n) => n.to_string(),
                Arity::Variadic => "any number of".to_string(),
            };
            return Err(self.error_at(
                ParseErrorKind::OperandCount {
                    op: op_name,
                    expected,
                    found: op.operands.len(),
                },
                name_span,
            ));
        }

        match (definition.has_result, op.result.is_some()) {
            (true, false) => {
                return Err(self.error_at(ParseErrorKind::MissingResult(op_name), name_span));
            }
            (false, true) => {
                return Err(self.error_at(ParseErrorKind::UnexpectedResult(op_name), name_span));
            }
            _ => {}
        }

        for attribute in &definition.required_attributes {
            if !op.attributes.contains_key(attribute) {
                return Err(self.error_at(
                    ParseErrorKind::MissingAttribute {
                        op: op_name,
                        attribute: attribute.clone(),
                    },
                    name_span,
                ));
            }
        }

        Ok(())
    }
}
