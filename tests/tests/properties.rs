use proptest::prelude::*;
use reckon_eval::{evaluate, ErrorKind};
use tests::error_kind;

fn operator() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('^')]
}

/// Well-formed expressions built from small operands.
fn expression() -> impl Strategy<Value = String> {
    let leaf = (0u32..1000).prop_map(|n| n.to_string());
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l}{op}{r}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

proptest! {
    #[test]
    fn foreign_characters_are_illegal(
        prefix in "[0-9+*/()]{0,8}",
        bad in "[a-zA-Z .,=%!_ ]",
        suffix in "[0-9+*/^()-]{0,8}",
    ) {
        let expr = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(error_kind(&expr), Some(ErrorKind::IllegalCharacter));
    }

    #[test]
    fn leading_signs_are_rejected(
        sign in "[+-]",
        n in 0u32..1_000_000,
        rest in "([+*/^][0-9]{1,3}){0,3}",
    ) {
        let expr = format!("{sign}{n}{rest}");
        prop_assert_eq!(error_kind(&expr), Some(ErrorKind::UnsupportedSignPrefix));
    }

    #[test]
    fn signs_after_operators_are_rejected(
        a in 0u32..1000,
        op in operator(),
        sign in "[+-]",
        b in 0u32..1000,
    ) {
        let expr = format!("{a}{op}{sign}{b}");
        prop_assert_eq!(error_kind(&expr), Some(ErrorKind::UnsupportedSignPrefix));
    }

    #[test]
    fn operands_above_i32_are_out_of_range(n in 2_147_483_648u64..u64::MAX, op in operator()) {
        let expr = format!("1{op}{n}");
        prop_assert_eq!(error_kind(&expr), Some(ErrorKind::OperandOutOfRange));
    }

    #[test]
    fn differences_of_operands_are_exact(a in 0i64..=i32::MAX as i64, b in 0i64..=i32::MAX as i64) {
        let expr = format!("{a}-{b}");
        prop_assert_eq!(evaluate(&expr), Ok((a - b) as f64));
    }

    #[test]
    fn evaluation_is_deterministic(expr in expression()) {
        let first = evaluate(&expr);
        let second = evaluate(&expr);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn well_formed_expressions_never_fail_validation_or_parsing(expr in expression()) {
        if let Some(kind) = error_kind(&expr) {
            prop_assert!(
                matches!(kind, ErrorKind::ArithmeticOverflow | ErrorKind::UndefinedResult),
                "{} failed with {:?}", expr, kind
            );
        }
    }
}
