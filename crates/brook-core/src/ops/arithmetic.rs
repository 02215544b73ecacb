// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Arithmetic operators.
//!
//! Operands are coerced with the numeric conversion table and combined with
//! plain IEEE-754 double arithmetic, which already gives the required
//! propagation: NaN is absorbing, `Infinity + -Infinity` is NaN, nonzero
//! divided by zero is a signed infinity and `0 / 0` is NaN.

use crate::Value;

/// `a + b`
///
/// If either operand is text the result is the concatenation of both text
/// conversions. Otherwise both operands are added as numbers.
#[must_use]
pub fn add(a: &Value, b: &Value) -> Value {
    if a.is_text() || b.is_text() {
        let lhs = a.to_text();
        let rhs = b.to_text();
        let mut joined = String::with_capacity(lhs.len() + rhs.len());
        joined.push_str(&lhs);
        joined.push_str(&rhs);
        return Value::text(joined);
    }
    Value::number(a.to_number() + b.to_number())
}

/// `a - b`
#[must_use]
pub fn subtract(a: &Value, b: &Value) -> Value {
    Value::number(a.to_number() - b.to_number())
}

/// `a * b`
#[must_use]
pub fn multiply(a: &Value, b: &Value) -> Value {
    Value::number(a.to_number() * b.to_number())
}

/// `a / b`
#[must_use]
pub fn divide(a: &Value, b: &Value) -> Value {
    Value::number(a.to_number() / b.to_number())
}

/// `a % b`
///
/// Truncating remainder: the sign follows the dividend. A zero or NaN divisor
/// and an infinite dividend give NaN.
#[must_use]
pub fn remainder(a: &Value, b: &Value) -> Value {
    Value::number(a.to_number() % b.to_number())
}

/// `-a`
#[must_use]
pub fn negate(a: &Value) -> Value {
    Value::number(-a.to_number())
}
