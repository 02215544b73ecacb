// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core type definitions for Brook.
//!
//! Newtypes for the handles that cross the boundary between the value core,
//! the arena and the execution layer. Using newtypes prevents mixing a slot
//! index with an opaque code or environment reference.


mod handle;

pub use handle::{CodeRef, EnvRef, SlotId};
