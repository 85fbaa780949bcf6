//! Constant folding optimizer
//!
//! Evaluates `arith` operations whose operands are all constants and
//! replaces them with `arith.constant` operations.

use crate::dialects::arith::{self, BINARY_OPS};
use crate::error::{ApplicationError, Result};
use crate::pass::ModulePass;
use irlab_core::{Context, Module, Operation, Type};
use std::collections::HashMap;

/// Constant folding pass (`constant-fold`)
#[derive(Debug, Default)]
pub struct ConstantFolder {
    folded: usize,
}

impl ConstantFolder {
    pub const NAME: &'static str = "constant-fold";

    /// Create a new constant folder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations folded by the last application
    pub fn folded(&self) -> usize {
        self.folded
    }

    /// Try to fold a single operation given the constants seen so far
    fn fold_op(
        &self,
        ctx: &Context,
        op: &Operation,
        constants: &HashMap<String, i64>,
    ) -> Result<Option<Operation>> {
        if op.name.dialect != "arith"
            || !BINARY_OPS.contains(&op.name.op.as_str())
            || !ctx.is_pure(&op.name)
            || op.operands.len() != 2
        {
            return Ok(None);
        }

        let Some(result) = &op.result else {
            return Ok(None);
        };

        let (Some(&lhs), Some(&rhs)) = (
            constants.get(&op.operands[0]),
            constants.get(&op.operands[1]),
        ) else {
            return Ok(None);
        };

        match arith::evaluate(&op.name.op, lhs, rhs) {
            Some(value) => Ok(Some(Operation::constant(
                result.name.clone(),
                value,
                result.ty,
            ))),
            None if rhs == 0 => Err(ApplicationError::failed(
                Self::NAME,
                format!("division by zero in '%{}'", result.name),
            )),
            None => Ok(None),
        }
    }
}

impl ModulePass for ConstantFolder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()> {
        let mut constants: HashMap<String, i64> = HashMap::new();
        let mut types: HashMap<String, Type> = HashMap::new();
        self.folded = 0;

        for op in module.operations.iter_mut() {
            // Ill-typed operations are left for the verifier
            let same_types = op.result_type().map_or(false, |ty| {
                op.operands.iter().all(|operand| types.get(operand) == Some(&ty))
            });

            if same_types {
                if let Some(folded) = self.fold_op(ctx, op, &constants)? {
                    tracing::trace!("folded {} into {}", op, folded);
                    *op = folded;
                    self.folded += 1;
                }
            }

            if let Some(result) = &op.result {
                types.insert(result.name.clone(), result.ty);
                if let Some(value) = op.constant_value() {
                    constants.insert(result.name.clone(), value);
                }
            }
        }

        tracing::debug!("constant-fold: folded {} operations", self.folded);
        Ok(())
    }
}
