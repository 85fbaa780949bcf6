//! Common subexpression elimination
//!
//! Merges side-effect free operations that compute the same thing: same
//! operation name, operands, attributes and result type. Later duplicates are
//! removed and their uses redirected to the first occurrence.

use crate::error::Result;
use crate::pass::ModulePass;
use irlab_core::{Attribute, Context, Module, OpName, Operation, Type};
use std::collections::{BTreeMap, HashMap};

/// Structural identity of a pure operation
#[derive(Debug, PartialEq, Eq, Hash)]
struct ExprKey {
    name: OpName,
    operands: Vec<String>,
    attributes: BTreeMap<String, Attribute>,
    ty: Option<Type>,
}

impl ExprKey {
    fn of(op: &Operation) -> Self {
        Self {
            name: op.name.clone(),
            operands: op.operands.clone(),
            attributes: op.attributes.clone(),
            ty: op.result_type(),
        }
    }
}

/// Common subexpression eliminator (`cse`)
#[derive(Debug, Default)]
pub struct CommonSubexpressionEliminator;

impl CommonSubexpressionEliminator {
    pub const NAME: &'static str = "cse";

    /// Create a new eliminator
    pub fn new() -> Self {
        Self
    }
}

impl ModulePass for CommonSubexpressionEliminator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&mut self, ctx: &mut Context, module: &mut Module) -> Result<()> {
        let mut available: HashMap<ExprKey, String> = HashMap::new();
        let mut replacements: HashMap<String, String> = HashMap::new();
        let mut kept = Vec::with_capacity(module.len());

        for mut op in module.operations.drain(..) {
            for operand in op.operands.iter_mut() {
                if let Some(replacement) = replacements.get(operand) {
                    *operand = replacement.clone();
                }
            }

            let Some(result) = op.result_name().map(str::to_string) else {
                kept.push(op);
                continue;
            };

            if !ctx.is_pure(&op.name) {
                kept.push(op);
                continue;
            }

            let key = ExprKey::of(&op);
            match available.get(&key) {
                Some(existing) => {
                    tracing::trace!("cse: %{} duplicates %{}", result, existing);
                    replacements.insert(result, existing.clone());
                }
                None => {
                    available.insert(key, result);
                    kept.push(op);
                }
            }
        }

        tracing::debug!("cse: merged {} operations", replacements.len());
        module.operations = kept;
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
        CommonSubexpressionEliminator::new()
            .apply(&mut ctx, &mut module)
            .unwrap();
        module
    }

    #[test]
    fn test_merges_duplicates() {
        let module = run(
            "module {
  %a = arith.constant {value = 1} : i64
  %b = arith.constant {value = 1} : i64
  %c = arith.addi %a, %b : i64
  %d = arith.addi %b, %a : i64
  test.print %c, %d
}",
        );

        // %b folds into %a, which makes %d identical to %c
        assert_eq!(
            module.to_string(),
            "module {
  %a = arith.constant {value = 1} : i64
  %c = arith.addi %a, %a : i64
  test.print %c, %c
}
"
        );
    }

    #[test]
    fn test_distinct_types_not_merged() {
        let module = run(
            "module {
  %a = arith.constant {value = 1} : i64
  %b = arith.constant {value = 1} : i32
  test.print %a, %b
}",
        );

        assert_eq!(module.len(), 3);
    }

    #[test]
    fn test_side_effects_not_merged() {
        let module = run(
            "module {
  %a = test.source : i64
  %b = test.source : i64
  test.print %a, %b
}",
        );

        assert_eq!(module.len(), 3);
    }
}
