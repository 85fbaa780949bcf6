//! Built-in dialects
//!
//! - `arith`: integer constants and arithmetic
//! - `test`: side-effecting sources and sinks used to anchor values

pub mod arith;
pub mod testing;

pub use arith::arith_dialect;
pub use testing::test_dialect;

use irlab_core::{Context, Dialect, Result};

/// All built-in dialects, in load order
pub fn builtin_dialects() -> Vec<Dialect> {
    vec![arith_dialect(), test_dialect()]
}

/// Create a fresh context with every built-in dialect loaded
pub fn builtin_context(allow_unregistered: bool) -> Result<Context> {
    let mut ctx = Context::new(allow_unregistered);
    for dialect in builtin_dialects() {
        ctx.load_dialect(dialect)?;
    }
    Ok(ctx)
}
