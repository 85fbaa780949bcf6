//! Module verifier
//!
//! Checks every operation against its registered definition and checks that
//! operand and result types agree. The parser only checks the shape of the
//! text; type agreement is established here.

use crate::error::{ApplicationError, Result};
use crate::pass::ModulePass;
use irlab_core::{Attribute, Context, Module, Operation, Type};
use std::collections::HashMap;

/// Verification pass (`verify`)
#[derive(Debug, Default)]
pub struct Verifier {
    /// Types of the values defined so far
    value_types: HashMap<String, Type>,
}

impl Verifier {
    pub const NAME: &'static str = "verify";

    /// Create a new verifier
    pub fn new() -> Self {
        Self::default()
    }

    fn invalid(op: &Operation, message: impl Into<String>) -> ApplicationError {
        ApplicationError::VerificationFailed {
            pass: Self::NAME.to_string(),
            op: op.name.to_string(),
            message: message.into(),
        }
    }

    /// Verify a whole module
    pub fn verify(&mut self, ctx: &Context, module: &Module) -> Result<()> {
        self.value_types.clear();
        for op in module.iter() {
            self.verify_operation(ctx, op)?;
        }
        Ok(())
    }

    fn verify_operation(&mut self, ctx: &Context, op: &Operation) -> Result<()> {
        let mut operand_types = Vec::with_capacity(op.operands.len());
        for operand in &op.operands {
            match self.value_types.get(operand) {
                Some(ty) => operand_types.push(*ty),
                None => {
                    return Err(Self::invalid(
                        op,
                        format!("use of undefined value '%{}'", operand),
                    ))
                }
            }
        }

        let definition = ctx
            .resolve(&op.name)
            .map_err(|_| Self::invalid(op, "operation is not registered"))?;

        if let Some(definition) = definition {
            if !definition.arity.accepts(op.operands.len()) {
                return Err(Self::invalid(
                    op,
                    format!("unexpected operand count {}", op.operands.len()),
                ));
            }

            if definition.has_result != op.result.is_some() {
                let message = if definition.has_result {
                    "expected a result"
                } else {
                    "expected no result"
                };
                return Err(Self::invalid(op, message));
            }

            for attribute in &definition.required_attributes {
                if op.attribute(attribute).is_none() {
                    return Err(Self::invalid(
                        op,
                        format!("missing attribute '{}'", attribute),
                    ));
                }
            }

            if definition.same_operand_and_result_type {
                if let Some(ty) = op.result_type() {
                    if let Some(other) = operand_types.iter().find(|t| **t != ty) {
                        return Err(Self::invalid(
                            op,
                            format!("operand type {} does not match result type {}", other, ty),
                        ));
                    }
                }
            }
        }

        if op.is("arith", "constant") {
            self.verify_constant(op)?;
        }

        if let Some(result) = &op.result {
            if self.value_types.contains_key(&result.name) {
                return Err(Self::invalid(
                    op,
                    format!("redefinition of value '%{}'", result.name),
                ));
            }
            self.value_types.insert(result.name.clone(), result.ty);
        }

        Ok(())
    }

    fn verify_constant(&self, op: &Operation) -> Result<()> {
        let Some(ty) = op.result_type() else {
            return Ok(());
        };

        match op.attribute("value") {
            Some(Attribute::Integer(value)) if ty.wrap(*value) == *value => Ok(()),
            Some(Attribute::Integer(value)) => Err(Self::invalid(
                op,
                format!("value {} does not fit in {}", value, ty),
            )),
            Some(_) => Err(Self::invalid(op, "'value' must be an integer")),
            None => Ok(()),
        }
    }
}

impl ModulePass for Verifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()> {
        self.verify(ctx, module)?;
        tracing::debug!("verify: {} operations ok", module.len());
        Ok(())
    }
}
