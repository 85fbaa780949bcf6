//! Canonicalization
//!
//! Rewrites algebraic identities of the `arith` dialect, then removes the
//! operations left dead by the rewrites:
//!
//! | pattern          | rewrite        |
//! |------------------|----------------|
//! | `x + 0`, `0 + x` | `x`            |
//! | `x - 0`          | `x`            |
//! | `x * 1`, `1 * x` | `x`            |
//! | `x * 0`, `0 * x` | `constant 0`   |
//! | `x - x`          | `constant 0`   |

use crate::error::Result;
use crate::optimizer::DeadCodeEliminator;
use crate::pass::ModulePass;
use irlab_core::{Context, Module, Operation, Type};
use std::collections::HashMap;

/// Outcome of matching one operation against the identities
enum Rewrite {
    /// Forward uses of the result to this value
    Forward(String),
    /// Replace the operation with a zero constant
    Zero,
}

/// Canonicalizer (`canonicalize`)
#[derive(Debug, Default)]
pub struct Canonicalizer {
    rewrites: usize,
}

impl Canonicalizer {
    pub const NAME: &'static str = "canonicalize";

    /// Create a new canonicalizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identities rewritten by the last application
    pub fn rewrites(&self) -> usize {
        self.rewrites
    }

    fn match_identity(op: &Operation, constants: &HashMap<String, i64>) -> Option<Rewrite> {
        if op.name.dialect != "arith" || op.operands.len() != 2 {
            return None;
        }

        let lhs = &op.operands[0];
        let rhs = &op.operands[1];
        let lhs_value = constants.get(lhs).copied();
        let rhs_value = constants.get(rhs).copied();

        match op.name.op.as_str() {
            "addi" if rhs_value == Some(0) => Some(Rewrite::Forward(lhs.clone())),
            "addi" if lhs_value == Some(0) => Some(Rewrite::Forward(rhs.clone())),
            "subi" if rhs_value == Some(0) => Some(Rewrite::Forward(lhs.clone())),
            "subi" if lhs == rhs => Some(Rewrite::Zero),
            "muli" if rhs_value == Some(0) || lhs_value == Some(0) => Some(Rewrite::Zero),
            "muli" if rhs_value == Some(1) => Some(Rewrite::Forward(lhs.clone())),
            "muli" if lhs_value == Some(1) => Some(Rewrite::Forward(rhs.clone())),
            _ => None,
        }
    }
}

impl ModulePass for Canonicalizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()> {
        let mut constants: HashMap<String, i64> = HashMap::new();
        let mut types: HashMap<String, Type> = HashMap::new();
        let mut forwards: HashMap<String, String> = HashMap::new();
        let mut kept = Vec::with_capacity(module.len());
        self.rewrites = 0;

        for mut op in module.operations.drain(..) {
            for operand in op.operands.iter_mut() {
                if let Some(target) = forwards.get(operand) {
                    *operand = target.clone();
                }
            }

            let well_typed = ctx.is_pure(&op.name)
                && op.result_type().map_or(false, |ty| {
                    op.operands.iter().all(|operand| types.get(operand) == Some(&ty))
                });

            let rewrite = if well_typed {
                Self::match_identity(&op, &constants)
            } else {
                None
            };

            match (rewrite, op.result.clone()) {
                (Some(Rewrite::Forward(target)), Some(result)) => {
                    tracing::trace!("canonicalize: %{} -> %{}", result.name, target);
                    forwards.insert(result.name, target);
                    self.rewrites += 1;
                    continue;
                }
                (Some(Rewrite::Zero), Some(result)) => {
                    op = Operation::constant(result.name, 0, result.ty);
                    self.rewrites += 1;
                }
                _ => {}
            }

            if let Some(result) = &op.result {
                types.insert(result.name.clone(), result.ty);
                if let Some(value) = op.constant_value() {
                    constants.insert(result.name.clone(), value);
                }
            }
            kept.push(op);
        }

        module.operations = kept;
        let removed = DeadCodeEliminator::new().eliminate(ctx, module);

        tracing::debug!(
            "canonicalize: {} rewrites, {} operations removed",
            self.rewrites,
            removed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::builtin_context;
    use irlab_parser::ModuleParser;

    fn run(source: &str) -> Module {
        let mut ctx = builtin_context(true).unwrap();
        let mut module = ModuleParser::parse(source, &ctx).unwrap();
        Canonicalizer::new().apply(&mut ctx, &mut module).unwrap();
        module
    }

    #[test]
    fn test_forwarding_identities() {
        let module = run(
            "module {
  %x = test.source : i64
  %zero = arith.constant {value = 0} : i64
  %one = arith.constant {value = 1} : i64
  %a = arith.addi %x, %zero : i64
  %b = arith.addi %zero, %a : i64
  %c = arith.subi %b, %zero : i64
  %d = arith.muli %c, %one : i64
  %e = arith.muli %one, %d : i64
  test.print %e
}",
        );

        assert_eq!(
            module.to_string(),
            "module {\n  %x = test.source : i64\n  test.print %x\n}\n"
        );
    }

    #[test]
    fn test_zero_identities() {
        let module = run(
            "module {
  %x = test.source : i64
  %zero = arith.constant {value = 0} : i64
  %a = arith.muli %x, %zero : i64
  %b = arith.subi %x, %x : i64
  test.print %a, %b
}",
        );

        assert_eq!(
            module.to_string(),
            "module {
  %x = test.source : i64
  %a = arith.constant {value = 0} : i64
  %b = arith.constant {value = 0} : i64
  test.print %a, %b
}
"
        );
    }

    #[test]
    fn test_type_mismatch_not_rewritten() {
        let module = run(
            "module {
  %x = test.source : i32
  %zero = arith.constant {value = 0} : i64
  %a = arith.addi %x, %zero : i64
  test.print %a
}",
        );

        assert!(module.defining_op("a").unwrap().is("arith", "addi"));
    }
}
