// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! A runtime wrapper for scenario tests.

use brook_core::ops::strict_equals;
use brook_runtime::{ArenaConfig, Expr, Reclamation, Runtime, RuntimeConfig, Value};
use brook_spec_tests::{Stmt, run};

/// A stateful runtime for replaying scenario programs.
pub struct TestRuntime {
    rt: Runtime,
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRuntime {
    /// Runtime with reclamation disabled.
    pub fn new() -> Self {
        super::init_tracing();
        Self {
            rt: Runtime::default(),
        }
    }

    /// Runtime collecting with mark-and-sweep after every binding removal.
    pub fn mark_sweep() -> Self {
        super::init_tracing();
        let arena = ArenaConfig::new().with_reclamation(Reclamation::MarkSweep);
        Self {
            rt: Runtime::new(
                RuntimeConfig::new()
                    .with_arena(arena)
                    .with_collect_on_remove(true),
            ),
        }
    }

    /// Access the wrapped runtime.
    pub fn runtime(&mut self) -> &mut Runtime {
        &mut self.rt
    }

    /// Run a program.
    ///
    /// # Errors
    ///
    /// Returns the first runtime error rendered as text.
    pub fn run(&mut self, program: &[Stmt]) -> Result<(), String> {
        run(&mut self.rt, program).map_err(|e| e.to_string())
    }

    /// Evaluate an expression to a value.
    ///
    /// # Errors
    ///
    /// Returns the runtime error rendered as text.
    pub fn eval(&mut self, expr: &Expr) -> Result<Value, String> {
        self.rt.eval_value(expr).map_err(|e| e.to_string())
    }

    /// `assert_eq(actual, expected)`: strict equality of both sides.
    ///
    /// # Errors
    ///
    /// Returns a message naming both values if they differ.
    pub fn check(&mut self, actual: &Expr, expected: &Expr) -> Result<(), String> {
        let lhs = self.eval(actual)?;
        let rhs = self.eval(expected)?;
        if strict_equals(&lhs, &rhs) {
            Ok(())
        } else {
            Err(format!(
                "expected {}, got {}",
                self.rt.display(&rhs),
                self.rt.display(&lhs)
            ))
        }
    }

    /// `gb_variables_count()`
    ///
    /// # Errors
    ///
    /// Returns a message if the intrinsic does not produce a number.
    pub fn variables_count(&mut self) -> Result<f64, String> {
        match self.eval(&Expr::call("gb_variables_count", []))? {
            Value::Number(count) => Ok(count),
            other => Err(format!("gb_variables_count returned {other:?}")),
        }
    }
}
