// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared test infrastructure for scenario tests.
//!
//! This module provides:
//! - [`TestRuntime`] - A runtime wrapper with `assert_eq`-style checks
//! - Expression shorthands for writing scenario programs
//!
//! This module is not a test file, so helpers report failures as `Err`
//! instead of panicking.

#![allow(
    dead_code,
    clippy::must_use_candidate,
    reason = "each test binary uses a subset of the helpers"
)]

mod test_runtime;

pub use test_runtime::TestRuntime;

use brook_core::ops::BinaryOp;
use brook_runtime::Expr;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Number literal.
pub const fn n(x: f64) -> Expr {
    Expr::number(x)
}

/// Text literal.
pub fn t(s: &str) -> Expr {
    Expr::text(s)
}

/// Identifier.
pub fn id(name: &str) -> Expr {
    Expr::ident(name)
}

/// `lhs op rhs`
pub fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// `-operand`
pub fn neg(operand: Expr) -> Expr {
    Expr::unary(brook_core::ops::UnaryOp::Neg, operand)
}

/// `NaN`
pub fn nan() -> Expr {
    id("NaN")
}

/// `Infinity`
pub fn inf() -> Expr {
    id("Infinity")
}

/// `-Infinity`
pub fn neg_inf() -> Expr {
    neg(inf())
}
