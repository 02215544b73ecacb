// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Brook Scenario Tests
//!
//! End-to-end scenarios replaying small programs against
//! [`brook_runtime::Runtime`]: arithmetic, relational and equality tables,
//! the allocation counts of declarations and literals, object and array
//! behaviour, and a doubly-linked list.
//!
//! The scenarios live under `tests/`; this library only provides the
//! statement vocabulary they are written in.

use brook_runtime::{Expr, Runtime, RuntimeError};

/// A statement of a scenario program.
#[derive(Clone, Debug)]
pub enum Stmt {
    /// `var name = init;`
    Var(&'static str, Option<Expr>),
    /// `target = value;`
    Assign(Expr, Expr),
    /// `expr;`
    Eval(Expr),
}

impl Stmt {
    /// `var name = init;`
    #[must_use]
    pub const fn var(name: &'static str, init: Expr) -> Self {
        Self::Var(name, Some(init))
    }

    /// `target = value;`
    #[must_use]
    pub const fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign(target, value)
    }
}

/// Run statements in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first [`RuntimeError`] raised by a statement.
pub fn run(rt: &mut Runtime, program: &[Stmt]) -> Result<(), RuntimeError> {
    for stmt in program {
        match stmt {
            Stmt::Var(name, init) => {
                rt.declare(name, init.as_ref())?;
            }
            Stmt::Assign(target, value) => rt.assign(target, value)?,
            Stmt::Eval(expr) => {
                rt.eval(expr)?;
            }
        }
    }
    Ok(())
}
