//! Property tests for numeric promotion and evaluator determinism.

use lint_ir::{ArenaBuilder, BinaryOp, DeclKind, Declaration, Modifiers, TypeRef};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rayon::prelude::*;

use crate::errors::FoldError;
use crate::operators::evaluate_binary;
use crate::{evaluate, EvalConfig, Value};

proptest! {
    #[test]
    fn int_plus_long_promotes_to_long(a in any::<i32>(), b in any::<i64>()) {
        let sum = evaluate_binary(&Value::Int(a), &Value::Long(b), BinaryOp::Add);
        prop_assert_eq!(sum, Ok(Value::Long(i64::from(a).wrapping_add(b))));
    }

    #[test]
    fn narrow_operands_yield_int(a in any::<i8>(), b in any::<i16>()) {
        let product = evaluate_binary(&Value::Byte(a), &Value::Short(b), BinaryOp::Mul);
        prop_assert_eq!(product, Ok(Value::Int(i32::from(a) * i32::from(b))));
    }

    #[test]
    fn float_and_double_yield_double(a in -1.0e6f32..1.0e6, b in -1.0e6f64..1.0e6) {
        let sum = evaluate_binary(&Value::Float(a), &Value::Double(b), BinaryOp::Add);
        prop_assert_eq!(sum, Ok(Value::Double(f64::from(a) + b)));
    }

    #[test]
    fn int_division_matches_wrapping_div(a in any::<i32>(), b in any::<i32>()) {
        let quotient = evaluate_binary(&Value::Int(a), &Value::Int(b), BinaryOp::Div);
        if b == 0 {
            prop_assert_eq!(quotient, Err(FoldError::DivisionByZero));
        } else {
            prop_assert_eq!(quotient, Ok(Value::Int(a.wrapping_div(b))));
        }
    }

    #[test]
    fn shift_distance_is_masked(a in any::<i64>(), n in 0i32..256) {
        let shifted = evaluate_binary(&Value::Long(a), &Value::Int(n), BinaryOp::Shl);
        prop_assert_eq!(shifted, Ok(Value::Long(a << (n & 0x3f))));
    }

    #[test]
    fn folding_is_idempotent(operands in proptest::collection::vec(any::<i32>(), 1..8), partial in any::<bool>()) {
        let mut b = ArenaBuilder::new();
        let ids: Vec<_> = operands.iter().map(|&n| b.int(n)).collect();
        let sum = b.polyadic(BinaryOp::Sub, &ids);
        let arena = b.finish();
        let config = EvalConfig::STRICT.with_partial(partial);

        let first = evaluate(&arena, sum, config);
        let second = evaluate(&arena, sum, config);
        prop_assert_eq!(&first, &second);
        let expected = operands[1..].iter().fold(operands[0], |acc, &n| acc.wrapping_sub(n));
        prop_assert_eq!(first, Value::Int(expected));
    }
}

#[test]
fn shared_tree_folds_identically_across_threads() {
    crate::tests::init_tracing();

    // static final int BASE = 40; ... BASE + 2 and "v" + BASE
    let mut b = ArenaBuilder::new();
    let forty = b.int(40);
    let base = b.field(
        Declaration::new("BASE", DeclKind::Field, TypeRef::INT)
            .with_modifiers(Modifiers::FINAL | Modifiers::STATIC),
        Some(forty),
    );
    let read = b.reference(base);
    let two = b.int(2);
    let sum = b.binary(BinaryOp::Add, read, two);
    let prefix = b.string("v");
    let read_again = b.reference(base);
    let label = b.binary(BinaryOp::Add, prefix, read_again);
    let arena = b.finish();

    let results: Vec<(Value, Value)> = (0..256)
        .into_par_iter()
        .map(|i| {
            let config = EvalConfig::STRICT.with_partial(i % 2 == 0);
            (evaluate(&arena, sum, config), evaluate(&arena, label, config))
        })
        .collect();

    for (number, text) in results {
        assert_eq!(number, Value::Int(42));
        assert_eq!(text, Value::string("v40"));
    }
}
