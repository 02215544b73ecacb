// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Brook Runtime
//!
//! The statement-level layer above the arena: a flat binding table, an
//! expression tree and an evaluator that classifies every result so the
//! arena can tell aliases from fresh values.
//!
//! ```text
//! Expr ──eval──► Evaluated ──declare / assign / member──► Arena
//!                  │
//!                  ├─ Fresh(value)   literal or computed result
//!                  ├─ Alias(slot)    bare read of a binding, property, element
//!                  └─ Minted(slot)   container literal, slot already allocated
//! ```
//!
//! Parsing and control flow are not part of this crate; callers build
//! [`Expr`] trees directly and drive them through [`Runtime`].

pub mod config;
pub mod env;
mod error;
pub mod eval;
pub mod expr;

pub use config::{ConfigError, RuntimeConfig};
pub use env::Environment;
pub use error::RuntimeError;
pub use eval::{Intrinsic, Runtime, lookup_intrinsic};
pub use expr::{Expr, Key};

pub use brook_arena::{ArenaConfig, CollectionStats, Evaluated, Reclamation};
pub use brook_core::{SlotId, Value};
