//! Shared helpers for the acceptance tests.

use std::sync::Once;

use log::LevelFilter;
use reckon_eval::{evaluate, ErrorKind};

static INIT: Once = Once::new();

/// Initialize the logger once for the whole test binary
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// The error kind `expression` fails with, or `None` if it evaluates.
pub fn error_kind(expression: &str) -> Option<ErrorKind> {
    evaluate(expression).err().map(|err| err.kind())
}

/// Assert that `expression` evaluates to `expected` within `1e-9`.
#[track_caller]
pub fn assert_approx(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(actual) => assert!(
            (actual - expected).abs() < 1e-9,
            "{expression}: expected {expected}, got {actual}"
        ),
        Err(err) => panic!("{expression}: expected {expected}, got error {err}"),
    }
}

/// `depth` pairs of parentheses around `1`.
pub fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}
