// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Expression evaluation.
//!
//! Every result is classified for the arena. Identifier, member and element
//! reads that find a slot are aliases; container literals are minted;
//! everything else, operator results included, is fresh. `&&` and `||`
//! pass the selected operand through unchanged, so `a || b` is still an
//! alias of whichever binding it selected.
//!
//! An intrinsic call may collect while a literal is half built, so element
//! results and operand bases are held as temporary roots.

use super::{Runtime, check_base};
use crate::{Expr, RuntimeError};
use brook_arena::{ContainerLiteral, Evaluated, FunctionBody};
use brook_core::Value;
use tracing::trace;

/// Names that evaluate to constants instead of bindings.
fn global_constant(name: &str) -> Option<Value> {
    match name {
        "undefined" => Some(Value::Undefined),
        "NaN" => Some(Value::nan()),
        "Infinity" => Some(Value::infinity()),
        _ => None,
    }
}

impl Runtime {
    /// Evaluate an expression.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] for undeclared names, property access on
    /// `undefined` or `null`, unknown intrinsics and arena failures.
    pub fn eval(&mut self, expr: &Expr) -> Result<Evaluated, RuntimeError> {
        let depth = self.temporaries.len();
        let result = self.eval_expr(expr);
        self.temporaries.truncate(depth);
        result
    }

    /// Intermediate results that a later operand could outlive are held
    /// as collection roots until the enclosing [`Runtime::eval`] returns.
    fn eval_expr(&mut self, expr: &Expr) -> Result<Evaluated, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(Evaluated::Fresh(value.clone())),

            Expr::Ident(name) => {
                if let Some(value) = global_constant(name) {
                    return Ok(Evaluated::Fresh(value));
                }
                let slot = self.lookup(name)?;
                trace!(name = &**name, slot = %slot, "alias of binding");
                Ok(Evaluated::Alias(slot))
            }

            Expr::Member { object, key } => {
                let base = self.eval_value(object)?;
                self.hold_value(&base);
                let key = self.property_key(key)?;
                check_base(&base, &key)?;
                Ok(self.arena.get_property(&base, &key)?)
            }

            Expr::Object(members) => {
                let mut evaluated = Vec::with_capacity(members.len());
                for (name, member) in members {
                    let member = self.eval(member)?;
                    self.hold(&member);
                    evaluated.push((name.clone(), member));
                }
                let slot = self
                    .arena
                    .build_container(ContainerLiteral::Object(evaluated))?;
                Ok(Evaluated::Minted(slot))
            }

            Expr::Array(elements) => {
                let mut evaluated = Vec::with_capacity(elements.len());
                for element in elements {
                    let element = self.eval(element)?;
                    self.hold(&element);
                    evaluated.push(element);
                }
                let slot = self
                    .arena
                    .build_container(ContainerLiteral::Array(evaluated))?;
                Ok(Evaluated::Minted(slot))
            }

            Expr::Function { params, code } => {
                let body = FunctionBody::new(params.clone(), *code, self.env.id());
                let slot = self
                    .arena
                    .build_container(ContainerLiteral::Function(body))?;
                Ok(Evaluated::Minted(slot))
            }

            Expr::Unary { op, operand } => {
                let value = self.eval_value(operand)?;
                Ok(Evaluated::Fresh(op.apply(&value)))
            }

            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval_value(lhs)?;
                self.hold_value(&lhs);
                let rhs = self.eval_value(rhs)?;
                Ok(Evaluated::Fresh(op.apply(&lhs, &rhs)))
            }

            Expr::And(lhs, rhs) => {
                let left = self.eval(lhs)?;
                let value = self.arena.resolve(&left)?;
                if !value.to_boolean() {
                    return Ok(left);
                }
                self.eval(rhs)
            }

            Expr::Or(lhs, rhs) => {
                let left = self.eval(lhs)?;
                let value = self.arena.resolve(&left)?;
                if value.to_boolean() {
                    return Ok(left);
                }
                self.eval(rhs)
            }

            Expr::Call { callee, args } => self.call_intrinsic(callee, args),
        }
    }

    /// Evaluate an expression to its value.
    ///
    /// # Errors
    ///
    /// See [`Runtime::eval`].
    pub fn eval_value(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        let evaluated = self.eval(expr)?;
        Ok(self.arena.resolve(&evaluated)?)
    }
}
