// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Logical operators.
//!
//! `&&` and `||` select one of their operands rather than producing a
//! boolean, so they return a reference to the chosen operand.

use crate::Value;

/// `!a`
#[must_use]
pub fn logical_not(a: &Value) -> Value {
    Value::boolean(!a.to_boolean())
}

/// `a && b`: `b` if `a` is truthy, else `a`.
#[must_use]
pub fn logical_and<'a>(a: &'a Value, b: &'a Value) -> &'a Value {
    if a.to_boolean() { b } else { a }
}

/// `a || b`: `a` if `a` is truthy, else `b`.
#[must_use]
pub fn logical_or<'a>(a: &'a Value, b: &'a Value) -> &'a Value {
    if a.to_boolean() { a } else { b }
}
