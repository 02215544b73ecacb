// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Coercion and comparison engine.
//!
//! Every operator is a total function over the value cross-product: invalid
//! coercions resolve to `NaN` or `false`, never to an error.
//!
//! Two comparison families follow different rules:
//! - strict equality compares numbers by representation, so `NaN === NaN`
//! - relational ordering follows IEEE-754, so any comparison involving
//!   `NaN` is false, including `NaN >= NaN`

#[cfg(test)]
mod equality_test;

mod arithmetic;
mod compare;
mod equality;
mod logical;

pub use arithmetic::{add, divide, multiply, negate, remainder, subtract};
pub use compare::{compare, compare_ge, compare_gt, compare_le, compare_lt};
pub use equality::{loose_equals, loose_not_equals, strict_equals, strict_not_equals};
pub use logical::{logical_and, logical_not, logical_or};

use crate::Value;

/// Binary operators with eager operands.
///
/// `&&` and `||` are not listed: they select an operand and short-circuit,
/// so the evaluator handles them with [`logical_and`] and [`logical_or`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Rem,
    /// `a === b`
    StrictEq,
    /// `a !== b`
    StrictNe,
    /// `a == b`
    LooseEq,
    /// `a != b`
    LooseNe,
    /// `a < b`
    Lt,
    /// `a > b`
    Gt,
    /// `a <= b`
    Le,
    /// `a >= b`
    Ge,
}

/// Number of binary operators.
pub const BINARY_OP_COUNT: usize = 13;

/// Operator symbol table, in declaration order.
const BINARY_OPS: [(BinaryOp, &str); BINARY_OP_COUNT] = [
    (BinaryOp::Add, "+"),
    (BinaryOp::Sub, "-"),
    (BinaryOp::Mul, "*"),
    (BinaryOp::Div, "/"),
    (BinaryOp::Rem, "%"),
    (BinaryOp::StrictEq, "==="),
    (BinaryOp::StrictNe, "!=="),
    (BinaryOp::LooseEq, "=="),
    (BinaryOp::LooseNe, "!="),
    (BinaryOp::Lt, "<"),
    (BinaryOp::Gt, ">"),
    (BinaryOp::Le, "<="),
    (BinaryOp::Ge, ">="),
];

impl BinaryOp {
    /// Look up an operator by its source symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BINARY_OPS
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|(op, _)| *op)
    }

    /// Get the source symbol of this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        BINARY_OPS
            .iter()
            .find(|(op, _)| *op == self)
            .map_or("?", |(_, s)| *s)
    }

    /// Apply this operator to two values.
    #[must_use]
    pub fn apply(self, a: &Value, b: &Value) -> Value {
        match self {
            Self::Add => add(a, b),
            Self::Sub => subtract(a, b),
            Self::Mul => multiply(a, b),
            Self::Div => divide(a, b),
            Self::Rem => remainder(a, b),
            Self::StrictEq => Value::boolean(strict_equals(a, b)),
            Self::StrictNe => Value::boolean(strict_not_equals(a, b)),
            Self::LooseEq => Value::boolean(loose_equals(a, b)),
            Self::LooseNe => Value::boolean(loose_not_equals(a, b)),
            Self::Lt => compare_lt(a, b),
            Self::Gt => compare_gt(a, b),
            Self::Le => compare_le(a, b),
            Self::Ge => compare_ge(a, b),
        }
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!a`
    Not,
    /// `-a`
    Neg,
}

impl UnaryOp {
    /// Apply this operator to a value.
    #[must_use]
    pub fn apply(self, a: &Value) -> Value {
        match self {
            Self::Not => logical_not(a),
            Self::Neg => negate(a),
        }
    }
}
