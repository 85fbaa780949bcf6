//! Interactive session example
//!
//! This example demonstrates:
//! - Creating a Session with the built-in passes
//! - Editing the source and selecting passes one by one
//! - Copying the reconstructed invocation to a clipboard

use irlab_demos::{init_tracing, show};
use irlab_sdk::{MemoryClipboard, SessionBuilder};

const SOURCE: &str = r#"// computes (4 + 5) * (4 + 5) and prints it
module {
  %a = arith.constant {value = 4} : i64
  %b = arith.constant {value = 5} : i64
  %zero = arith.constant {value = 0} : i64
  %x = arith.addi %a, %b : i64
  %y = arith.addi %a, %b : i64
  %z = arith.addi %y, %zero : i64
  %p = arith.muli %x, %z : i64
  test.print %p
}
"#;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    println!("=== Interactive Session Example ===\n");

    let mut session = SessionBuilder::new().build()?;

    println!("Available passes:");
    for pass in session.available_passes() {
        println!("  {:<14} {}", pass.name, pass.description);
    }
    println!();

    show("empty session", &session);

    session.set_source(SOURCE);
    show("source loaded", &session);

    for pass in ["canonicalize", "cse", "constant-fold", "dce", "rename-values"] {
        session.select_pass(pass)?;
        show(&format!("after selecting {}", pass), &session);
    }

    let mut clipboard = MemoryClipboard::new();
    session.copy_query(&mut clipboard)?;
    println!("Copied query: {:?}", clipboard.text());

    session.clear_passes();
    show("passes cleared", &session);

    println!("Recomputations: {}", session.recompute_count());
    Ok(())
}
