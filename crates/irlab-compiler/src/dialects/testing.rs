//! `test` dialect

use irlab_core::{Arity, Dialect, OpDefinition};

/// Build the `test` dialect
///
/// `test.source` produces a value unknown at compile time and `test.print`
/// consumes values; both have side effects, so passes never remove them.
pub fn test_dialect() -> Dialect {
    Dialect::new("test")
        .with_op(OpDefinition::new("print").operands(Arity::Variadic))
        .with_op(OpDefinition::new("source").with_result())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_dialect_is_impure() {
        let dialect = test_dialect();
        assert!(dialect.operations().all(|op| !op.pure));
        assert!(dialect.get("source").unwrap().has_result);
        assert_eq!(dialect.get("print").unwrap().arity, Arity::Variadic);
    }
}
