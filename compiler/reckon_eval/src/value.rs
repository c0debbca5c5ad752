//! Runtime values.
//!
//! Literals are typed by magnitude: `Int32` when they fit 32 bits, `Int64`
//! otherwise, and `Real` for values produced by division or carried over from
//! exponent reduction. Binary operations promote along
//! `Int32 -> Int64 -> Real` and check every integer result for overflow.

use std::fmt;

use reckon_ast::{format_number, BinaryOperator, LiteralNode};

/// A numeric value during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Real(f64),
}

/// Why a binary operation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    /// Integer overflow, a non-finite real, or a zero divisor
    Overflow,
    /// Only reachable through `Pow`
    Undefined,
}

impl Value {
    pub fn as_real(&self) -> f64 {
        match *self {
            Value::Int32(n) => n as f64,
            Value::Int64(n) => n as f64,
            Value::Real(x) => x,
        }
    }

    /// The narrowest integer type holding `n`.
    pub fn from_int(n: i64) -> Self {
        match i32::try_from(n) {
            Ok(small) => Value::Int32(small),
            Err(_) => Value::Int64(n),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int32(n) => Some(n as i64),
            Value::Int64(n) => Some(n),
            Value::Real(_) => None,
        }
    }

    /// Apply a binary operator to two values.
    pub fn apply(op: BinaryOperator, left: Value, right: Value) -> Result<Value, ArithmeticFault> {
        match op {
            BinaryOperator::Div => Self::divide(left.as_real(), right.as_real()),
            BinaryOperator::Pow => Self::power(left.as_real(), right.as_real()),
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul => {
                match (left, right) {
                    (Value::Int32(a), Value::Int32(b)) => {
                        let result = match op {
                            BinaryOperator::Add => a.checked_add(b),
                            BinaryOperator::Sub => a.checked_sub(b),
                            _ => a.checked_mul(b),
                        };
                        result.map(Value::Int32).ok_or(ArithmeticFault::Overflow)
                    }
                    _ => match (left.as_i64(), right.as_i64()) {
                        (Some(a), Some(b)) => {
                            let result = match op {
                                BinaryOperator::Add => a.checked_add(b),
                                BinaryOperator::Sub => a.checked_sub(b),
                                _ => a.checked_mul(b),
                            };
                            result.map(Value::Int64).ok_or(ArithmeticFault::Overflow)
                        }
                        _ => {
                            let (a, b) = (left.as_real(), right.as_real());
                            let result = match op {
                                BinaryOperator::Add => a + b,
                                BinaryOperator::Sub => a - b,
                                _ => a * b,
                            };
                            Self::finite(result)
                        }
                    },
                }
            }
        }
    }

    fn divide(a: f64, b: f64) -> Result<Value, ArithmeticFault> {
        if b == 0.0 {
            return Err(ArithmeticFault::Overflow);
        }
        Self::finite(a / b)
    }

    /// `base ^ power`, exact when both are integral and the result fits `i64`.
    pub fn power(base: f64, power: f64) -> Result<Value, ArithmeticFault> {
        if let Some(exact) = exact_power(base, power) {
            return Ok(Value::from_int(exact));
        }
        let result = base.powf(power);
        if result.is_nan() {
            Err(ArithmeticFault::Undefined)
        } else {
            Self::finite(result)
        }
    }

    fn finite(x: f64) -> Result<Value, ArithmeticFault> {
        if x.is_finite() {
            Ok(Value::Real(x))
        } else {
            Err(ArithmeticFault::Overflow)
        }
    }

    /// The literal an exponent result is substituted back as.
    ///
    /// Integral values below 1e15 in magnitude become integer literals and
    /// keep their overflow checks; everything else becomes a real literal.
    pub fn to_literal(&self) -> LiteralNode {
        match *self {
            Value::Int32(n) => LiteralNode::Int(n as i64),
            Value::Int64(n) if (n as f64).abs() < 1e15 => LiteralNode::Int(n),
            Value::Int64(n) => LiteralNode::Float(n as f64),
            Value::Real(x) if x.fract() == 0.0 && x.abs() < 1e15 => LiteralNode::Int(x as i64),
            Value::Real(x) => LiteralNode::Float(x),
        }
    }
}

impl From<LiteralNode> for Value {
    fn from(lit: LiteralNode) -> Self {
        match lit {
            LiteralNode::Int(n) => Value::from_int(n),
            LiteralNode::Float(x) => Value::Real(x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Real(x) => f.write_str(&format_number(*x)),
        }
    }
}

fn exact_power(base: f64, power: f64) -> Option<i64> {
    let integral = |x: f64| x.fract() == 0.0 && x.abs() <= i64::MAX as f64;
    if !integral(base) || !integral(power) || power < 0.0 || power > u32::MAX as f64 {
        return None;
    }
    (base as i64).checked_pow(power as u32)
}
