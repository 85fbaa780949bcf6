//! `arith` dialect

use irlab_core::{Arity, Dialect, OpDefinition};

/// Binary integer operations of the `arith` dialect
pub const BINARY_OPS: [&str; 5] = ["addi", "subi", "muli", "divsi", "remsi"];

/// Build the `arith` dialect
pub fn arith_dialect() -> Dialect {
    let mut dialect = Dialect::new("arith").with_op(
        OpDefinition::new("constant")
            .with_result()
            .requires("value")
            .pure(),
    );

    for op in BINARY_OPS {
        dialect = dialect.with_op(
            OpDefinition::new(op)
                .operands(Arity::Fixed(2))
                .with_result()
                .pure()
                .same_operand_and_result_type(),
        );
    }

    dialect
}

/// Evaluate a binary `arith` operation with wrapping semantics
///
/// Returns `None` for unknown operations and for division or remainder by
/// zero.
pub fn evaluate(op: &str, lhs: i64, rhs: i64) -> Option<i64> {
    match op {
        "addi" => Some(lhs.wrapping_add(rhs)),
        "subi" => Some(lhs.wrapping_sub(rhs)),
        "muli" => Some(lhs.wrapping_mul(rhs)),
        "divsi" if rhs != 0 => Some(lhs.wrapping_div(rhs)),
        "remsi" if rhs != 0 => Some(lhs.wrapping_rem(rhs)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arith_definitions() {
        let dialect = arith_dialect();
        assert_eq!(dialect.len(), 6);

        let constant = dialect.get("constant").unwrap();
        assert_eq!(constant.arity, Arity::Fixed(0));
        assert_eq!(constant.required_attributes, vec!["value"]);

        let addi = dialect.get("addi").unwrap();
        assert_eq!(addi.arity, Arity::Fixed(2));
        assert!(addi.pure);
        assert!(addi.same_operand_and_result_type);
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("addi", 2, 3), Some(5));
        assert_eq!(evaluate("subi", 2, 3), Some(-1));
        assert_eq!(evaluate("muli", -4, 3), Some(-12));
        assert_eq!(evaluate("divsi", 7, 2), Some(3));
        assert_eq!(evaluate("divsi", -7, 2), Some(-3));
        assert_eq!(evaluate("remsi", -7, 2), Some(-1));
        assert_eq!(evaluate("divsi", 1, 0), None);
        assert_eq!(evaluate("remsi", 1, 0), None);
        assert_eq!(evaluate("andi", 1, 1), None);
    }

    #[test]
    fn test_evaluate_wraps() {
        assert_eq!(evaluate("addi", i64::MAX, 1), Some(i64::MIN));
        assert_eq!(evaluate("divsi", i64::MIN, -1), Some(i64::MIN));
    }
}
