// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Built-in introspection functions.
//!
//! Intrinsics are looked up by name; user-defined function calls are not
//! dispatched here.

use super::Runtime;
use crate::{Expr, RuntimeError};
use brook_arena::Evaluated;
use brook_core::Value;
use std::sync::Arc;
use tracing::debug;

/// An intrinsic function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Intrinsic {
    /// `gb_variables_count()`: number of live slots.
    VariablesCount = 0,
    /// `gb_total_allocations()`: number of slots ever allocated.
    TotalAllocations = 1,
    /// `gb_collect()`: run a collection, returns the number of freed slots.
    Collect = 2,
}

/// Number of intrinsics.
pub const INTRINSIC_COUNT: usize = 3;

/// Intrinsic name table, indexed by discriminant.
const INTRINSICS: [(Intrinsic, &str); INTRINSIC_COUNT] = [
    (Intrinsic::VariablesCount, "gb_variables_count"),
    (Intrinsic::TotalAllocations, "gb_total_allocations"),
    (Intrinsic::Collect, "gb_collect"),
];

/// Look up an intrinsic by name.
#[must_use]
pub fn lookup_intrinsic(name: &str) -> Option<Intrinsic> {
    INTRINSICS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(intrinsic, _)| *intrinsic)
}

/// Get the name of an intrinsic.
#[must_use]
pub const fn intrinsic_name(intrinsic: Intrinsic) -> &'static str {
    INTRINSICS[intrinsic as usize].1
}

impl Runtime {
    /// Call an intrinsic.
    ///
    /// Arguments are evaluated left to right for their effects; no
    /// intrinsic takes parameters.
    pub(super) fn call_intrinsic(
        &mut self,
        callee: &Arc<str>,
        args: &[Expr],
    ) -> Result<Evaluated, RuntimeError> {
        let intrinsic = lookup_intrinsic(callee)
            .ok_or_else(|| RuntimeError::UnknownIntrinsic(Arc::clone(callee)))?;
        for arg in args {
            self.eval(arg)?;
        }

        let result = match intrinsic {
            Intrinsic::VariablesCount => self.live_slot_count() as f64,
            Intrinsic::TotalAllocations => self.arena.total_allocations() as f64,
            Intrinsic::Collect => {
                let stats = self.collect_garbage();
                debug!(freed = stats.freed, "collection requested");
                stats.freed as f64
            }
        };
        Ok(Evaluated::Fresh(Value::number(result)))
    }
}
