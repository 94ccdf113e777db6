//! Property-based tests for the parser and evaluator.

use proptest::prelude::*;

use super::ast::{BinaryOp, Expr, Function};
use super::parse;

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| Expr::Number(n as f64)),
        (0.0f64..1e6).prop_map(Expr::Number),
        Just(Expr::Variable("x".to_string())),
    ]
}

fn binary_op() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Pow),
    ]
}

fn function() -> impl Strategy<Value = Function> {
    proptest::sample::select(Function::ALL.to_vec())
}

// Trees the parser can produce: positive literals, `x`, registry calls.
fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::negate),
            (function(), inner.clone()).prop_map(|(f, arg)| Expr::call(f.name(), arg)),
            (binary_op(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::binary(op, l, r)),
        ]
    })
}

proptest! {
    #[test]
    fn printed_tree_reparses_to_same_tree(e in expr()) {
        let printed = e.to_string();
        let reparsed = parse(&printed);
        prop_assert_eq!(reparsed, Ok(e), "printed as {}", printed);
    }

    #[test]
    fn sums_and_differences_group_right(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let source = format!("{} - {} - {}", a, b, c);
        let (a, b, c) = (a as f64, b as f64, c as f64);
        prop_assert_eq!(parse(&source).unwrap().evaluate(0.0), a - (b - c));
    }

    #[test]
    fn leading_minus_is_squared_away(n in 0u32..1000) {
        let n = n as f64;
        let value = parse(&format!("-{}^2", n)).unwrap().evaluate(0.0);
        prop_assert_eq!(value, n * n);
    }
}
