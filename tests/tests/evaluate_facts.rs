use pretty_assertions::assert_eq;
use reckon_eval::{evaluate, CalcConfig, Calculator, ErrorCategory, ErrorKind, EvalError, Value};
use reckon_parser::ParserConfig;
use tests::{assert_approx, error_kind, init_test_logger, nested};

#[test]
fn precedence() {
    init_test_logger();
    assert_eq!(evaluate("(100+200)*3+99"), Ok(999.0));
    assert_eq!(evaluate("6^2+1"), Ok(37.0));
}

#[test]
fn division_is_real() {
    assert_approx("1/3", 0.3333333333333333);
    assert_approx("11^2/50", 2.42);
    assert_eq!(evaluate("7/2"), Ok(3.5));
}

#[test]
fn negative_results_are_allowed() {
    assert_eq!(evaluate("5-9"), Ok(-4.0));
    assert_eq!(evaluate("0-2147483647-1"), Ok(-2147483648.0));
}

#[test]
fn chained_exponents_are_left_associative() {
    assert_eq!(evaluate("(2^(2^(1^(20/5))))^2"), Ok(16.0));
    assert_eq!(evaluate("2^3^2"), Ok(64.0));
}

#[test]
fn large_products_are_exact() {
    assert_eq!(
        evaluate("((100+1)^3)*((4^16)+255)"),
        Ok(4425109362762851.0)
    );
    let evaluation = Calculator::default()
        .evaluate_detailed("((100+1)^3)*((4^16)+255)")
        .unwrap();
    assert_eq!(evaluation.value, Value::Int64(4425109362762851));
}

#[test]
fn invalid_input() {
    assert_eq!(error_kind("85m/2^2/500"), Some(ErrorKind::IllegalCharacter));
    assert_eq!(error_kind("1 + 2"), Some(ErrorKind::IllegalCharacter));
    assert_eq!(error_kind("(2147483648*1)+500"), Some(ErrorKind::OperandOutOfRange));
    assert_eq!(error_kind("-200^3"), Some(ErrorKind::UnsupportedSignPrefix));
    assert_eq!(error_kind("4^(3753+-9)"), Some(ErrorKind::UnsupportedSignPrefix));

    let err = evaluate("85m/2^2/500").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidInput);
}

#[test]
fn malformed_syntax() {
    for expr in ["1+*8", "(1+2*5", "", "1+", "(1)2", "1+2)", "()"] {
        assert_eq!(error_kind(expr), Some(ErrorKind::SyntaxError), "{expr:?}");
    }
    let err = evaluate("(1+2*5").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::MalformedSyntax);
    assert!(matches!(err, EvalError::Syntax(_)));
}

#[test]
fn overflow() {
    for expr in ["455^455", "2147483647+1", "1/0", "0/0", "2^30*2", "65536*65536"] {
        assert_eq!(error_kind(expr), Some(ErrorKind::ArithmeticOverflow), "{expr}");
    }
    assert_eq!(
        evaluate("2147483647+1").unwrap_err().category(),
        ErrorCategory::Overflow
    );
}

#[test]
fn int64_operands_widen_the_check() {
    // 4^16 no longer fits 32 bits, so the sum is checked in 64 bits
    assert_eq!(evaluate("4^16+1"), Ok(4294967297.0));
    // a reduced value of 1e15 or more is real-valued
    assert_eq!(evaluate("2^62*2"), Ok(9223372036854775808.0));
}

#[test]
fn undefined_result() {
    let err = evaluate("(0-8)^(1/3)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedResult);
    assert_eq!(err.category(), ErrorCategory::Other);
}

#[test]
fn nesting_limit() {
    assert_eq!(evaluate(&nested(100)), Ok(1.0));
    assert_eq!(error_kind(&nested(101)), Some(ErrorKind::NestingTooDeep));

    let relaxed = Calculator::new(CalcConfig {
        parser: ParserConfig {
            max_nesting_depth: 200,
        },
    });
    assert_eq!(relaxed.evaluate(&nested(150)), Ok(1.0));
}

#[test]
fn long_flat_expressions_are_accepted() {
    assert_eq!(evaluate(&vec!["1"; 1025].join("+")), Ok(1025.0));
    assert_eq!(evaluate(&vec!["1"; 1100].join("*")), Ok(1.0));
    assert_eq!(evaluate(&vec!["2"; 50_000].join("-")), Ok(-99_996.0));

    // flat chains inside the deepest allowed nesting
    let inner = vec!["3"; 2000].join("/");
    let deep = format!("{}{inner}{}", "(".repeat(100), ")".repeat(100));
    assert!(evaluate(&deep).is_ok());
}

#[test]
fn evaluation_is_idempotent() {
    let calc = Calculator::default();
    for expr in ["(100+200)*3+99", "1/3", "((100+1)^3)*((4^16)+255)", "11^2/50"] {
        let first = calc.evaluate(expr).unwrap();
        let second = calc.evaluate(expr).unwrap();
        assert_eq!(first.to_bits(), second.to_bits(), "{expr}");
    }
}
