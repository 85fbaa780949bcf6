//! Custom pass example
//!
//! This example demonstrates:
//! - Implementing ModulePass
//! - Registering it on a Session next to the built-in passes

use irlab_core::{Context, Module};
use irlab_demos::{init_tracing, show};
use irlab_sdk::{ApplicationError, ModulePass, SessionBuilder};

/// Reverses the order of `test.print` operands
struct ReversePrints;

impl ModulePass for ReversePrints {
    fn name(&self) -> &str {
        "reverse-prints"
    }

    fn apply(&mut self, _ctx: &mut Context, module: &mut Module) -> Result<(), ApplicationError> {
        for op in module.operations.iter_mut().filter(|op| op.is("test", "print")) {
            op.operands.reverse();
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    println!("=== Custom Pass Example ===\n");

    let mut session = SessionBuilder::new()
        .add_pass("reverse-prints", "Reverse the operands of test.print", || ReversePrints)
        .build()?;

    session.set_source(
        "module {
  %a = test.source : i64
  %b = test.source : i64
  test.print %a, %b
}
",
    );
    session.select_pass("reverse-prints")?;
    session.select_pass("rename-values")?;
    show("reverse-prints, rename-values", &session);

    Ok(())
}
