// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Expression tree.
//!
//! Expressions are built directly by the caller; there is no parser here.
//! The constructors mirror source syntax:
//!
//! ```text
//! {name: "Alex", say: a9}   Expr::object([("name", Expr::text("Alex")), ("say", Expr::ident("a9"))])
//! a[name]["name"].name      Expr::index(Expr::index(Expr::ident("a"), ..), ..).member("name")
//! ```


use brook_core::ops::{BinaryOp, UnaryOp};
use brook_core::{CodeRef, Value};
use std::sync::Arc;

/// Property key of a member expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    /// `object.name`
    Static(Arc<str>),
    /// `object[expr]`, the key converted to text when evaluated.
    Computed(Box<Expr>),
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Primitive constant.
    Literal(Value),
    /// Read of a binding.
    Ident(Arc<str>),
    /// Property read.
    Member {
        /// Expression producing the base value.
        object: Box<Expr>,
        /// Property key.
        key: Key,
    },
    /// Object literal.
    Object(Vec<(Arc<str>, Expr)>),
    /// Array literal.
    Array(Vec<Expr>),
    /// Function literal.
    Function {
        /// Parameter names.
        params: Vec<Arc<str>>,
        /// Executable body.
        code: CodeRef,
    },
    /// Unary operator.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },
    /// Binary operator with both operands evaluated.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// `lhs && rhs`
    And(Box<Expr>, Box<Expr>),
    /// `lhs || rhs`
    Or(Box<Expr>, Box<Expr>),
    /// Call of an intrinsic by name.
    Call {
        /// Intrinsic name.
        callee: Arc<str>,
        /// Arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// `undefined`
    #[must_use]
    pub const fn undefined() -> Self {
        Self::Literal(Value::Undefined)
    }

    /// `null`
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Value::Null)
    }

    /// Boolean literal.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Literal(Value::Boolean(b))
    }

    /// Number literal.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::Literal(Value::Number(n))
    }

    /// Text literal.
    #[must_use]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Self::Literal(Value::text(s))
    }

    /// Identifier.
    #[must_use]
    pub fn ident(name: impl Into<Arc<str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Object literal.
    #[must_use]
    pub fn object<K: Into<Arc<str>>>(members: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Object(
            members
                .into_iter()
                .map(|(name, expr)| (name.into(), expr))
                .collect(),
        )
    }

    /// Array literal.
    #[must_use]
    pub fn array(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Array(elements.into_iter().collect())
    }

    /// Function literal.
    #[must_use]
    pub fn function<P: Into<Arc<str>>>(params: impl IntoIterator<Item = P>, code: CodeRef) -> Self {
        Self::Function {
            params: params.into_iter().map(Into::into).collect(),
            code,
        }
    }

    /// `self.name`
    #[must_use]
    pub fn member(self, name: impl Into<Arc<str>>) -> Self {
        Self::Member {
            object: Box::new(self),
            key: Key::Static(name.into()),
        }
    }

    /// `self[key]`
    #[must_use]
    pub fn index(self, key: Self) -> Self {
        Self::Member {
            object: Box::new(self),
            key: Key::Computed(Box::new(key)),
        }
    }

    /// Unary operator.
    #[must_use]
    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Binary operator.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// `lhs && rhs`
    #[must_use]
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::And(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs || rhs`
    #[must_use]
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Intrinsic call.
    #[must_use]
    pub fn call(callee: impl Into<Arc<str>>, args: impl IntoIterator<Item = Self>) -> Self {
        Self::Call {
            callee: callee.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Returns true if this expression can be assigned to.
    #[must_use]
    pub const fn is_assignable(&self) -> bool {
        matches!(self, Self::Ident(_) | Self::Member { .. })
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}
