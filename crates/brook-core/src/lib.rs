// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Brook Core
//!
//! Value representation and the coercion/comparison engine for the Brook
//! runtime.
//!
//! This crate provides:
//! - The closed set of runtime value kinds ([`Value`], [`ValueKind`])
//! - Slot handles used by compound values ([`SlotId`])
//! - Number formatting and text-to-number parsing
//! - Arithmetic, relational and equality operators ([`ops`])
//!
//! Everything here is pure. Slots and container bodies live in the arena
//! crate; compound values only carry the handle of the slot that owns their
//! body, so identity comparison needs no arena access.

pub mod ops;
pub mod types;
pub mod value;

pub use types::{CodeRef, EnvRef, SlotId};
pub use value::{Value, ValueKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
