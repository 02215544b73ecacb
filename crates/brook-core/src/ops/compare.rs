// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Relational ordering.
//!
//! Only numbers, booleans, null and text take part in ordering. Undefined and
//! compound values have no ordered form, so every comparison involving them
//! is false, even a value compared with itself.

use crate::Value;
use core::cmp::Ordering;

/// A value projected into an ordered domain.
enum Ordered<'a> {
    Number(f64),
    Text(&'a str),
}

impl Ordered<'_> {
    fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => crate::value::number::parse(s),
        }
    }
}

fn ordered(value: &Value) -> Option<Ordered<'_>> {
    match value {
        Value::Null | Value::Boolean(_) | Value::Number(_) => {
            Some(Ordered::Number(value.to_number()))
        }
        Value::Text(s) => Some(Ordered::Text(s)),
        Value::Undefined | Value::Object(_) | Value::Array(_) | Value::Function(_) => None,
    }
}

/// Compare two values.
///
/// Two texts compare lexicographically by character. Any other pair of
/// ordered operands compares numerically, text coerced to a number.
/// Returns `None` when the pair is incomparable: an operand without an
/// ordered form, or a numeric comparison involving NaN.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let lhs = ordered(a)?;
    let rhs = ordered(b)?;
    match (&lhs, &rhs) {
        (Ordered::Text(x), Ordered::Text(y)) => Some(x.chars().cmp(y.chars())),
        _ => lhs.to_number().partial_cmp(&rhs.to_number()),
    }
}

/// `a >= b`
#[must_use]
pub fn compare_ge(a: &Value, b: &Value) -> Value {
    Value::boolean(matches!(
        compare(a, b),
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

/// `a > b`
#[must_use]
pub fn compare_gt(a: &Value, b: &Value) -> Value {
    Value::boolean(matches!(compare(a, b), Some(Ordering::Greater)))
}

/// `a <= b`
#[must_use]
pub fn compare_le(a: &Value, b: &Value) -> Value {
    Value::boolean(matches!(
        compare(a, b),
        Some(Ordering::Less | Ordering::Equal)
    ))
}

/// `a < b`
#[must_use]
pub fn compare_lt(a: &Value, b: &Value) -> Value {
    Value::boolean(matches!(compare(a, b), Some(Ordering::Less)))
}
