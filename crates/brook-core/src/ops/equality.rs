// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Strict and loose equality.

use crate::Value;

/// Check if two numbers have the same representation.
///
/// All NaNs are one value and equal each other; otherwise numbers compare as
/// doubles, so `0` and `-0` are the same number.
#[inline]
fn same_number(x: f64, y: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return x.is_nan() && y.is_nan();
    }
    x == y
}

/// `a === b`
///
/// - Different kinds are never equal
/// - `undefined` and `null` equal themselves
/// - Numbers compare by representation: `NaN === NaN` is true
/// - Text compares by content
/// - Objects, arrays and functions compare by slot identity
#[must_use]
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => same_number(*x, *y),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Object(x), Value::Object(y))
        | (Value::Array(x), Value::Array(y))
        | (Value::Function(x), Value::Function(y)) => x == y,
        _ => false,
    }
}

/// `a !== b`
#[must_use]
pub fn strict_not_equals(a: &Value, b: &Value) -> bool {
    !strict_equals(a, b)
}

/// `a == b`
///
/// Same-kind operands compare like [`strict_equals`]. Across kinds:
/// - `null` and `undefined` equal each other and nothing else
/// - a boolean is converted to a number first
/// - number against text compares numerically
/// - compound values never equal a primitive
#[must_use]
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    if a.kind() == b.kind() {
        return strict_equals(a, b);
    }

    match (a, b) {
        (Value::Undefined | Value::Null, other) | (other, Value::Undefined | Value::Null) => {
            other.is_nullish()
        }
        (Value::Boolean(_), other) => loose_equals(&Value::number(a.to_number()), other),
        (other, Value::Boolean(_)) => loose_equals(other, &Value::number(b.to_number())),
        (Value::Number(n), Value::Text(_)) => *n == b.to_number(),
        (Value::Text(_), Value::Number(n)) => a.to_number() == *n,
        _ => false,
    }
}

/// `a != b`
#[must_use]
pub fn loose_not_equals(a: &Value, b: &Value) -> bool {
    !loose_equals(a, b)
}
