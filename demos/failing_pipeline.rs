//! Failure rendering example
//!
//! This example demonstrates:
//! - How parse errors are rendered in the output pane
//! - How a failing pass replaces the output with its error
//! - That the session recovers as soon as the input changes

use irlab_demos::{init_tracing, show};
use irlab_sdk::{SessionBuilder, SessionConfig};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    println!("=== Failing Pipeline Example ===\n");

    let config = SessionConfig::from_yaml("allow_unregistered: false\n")?;
    let mut session = SessionBuilder::new().with_config(config).build()?;

    // Unknown operation in a strict vocabulary
    session.set_source("module {\n  %a = arith.negi : i64\n}\n");
    show("parse error", &session);

    // Division by a value canonicalize proves to be zero
    session.set_source(
        "module {
  %a = arith.constant {value = 7} : i64
  %x = test.source : i64
  %z = arith.subi %x, %x : i64
  %q = arith.divsi %a, %z : i64
  test.print %q
}
",
    );
    session.select_pass("canonicalize")?;
    show("canonicalize", &session);
    session.select_pass("constant-fold")?;
    show("canonicalize, constant-fold", &session);

    // Operand types that do not agree
    session.clear_passes();
    session.set_source(
        "module {
  %a = arith.constant {value = 1} : i32
  %b = arith.addi %a, %a : i64
  test.print %b
}
",
    );
    session.select_pass("verify")?;
    show("verify", &session);

    if let Err(err) = session.select_pass("loop-unroll") {
        println!("Rejected selection: {}", err);
    }

    Ok(())
}
