// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Brook Arena
//!
//! The slot table behind every Brook binding.
//!
//! A slot holds exactly one [`Value`](brook_core::Value). Bindings, object
//! properties and array elements all refer to slots by [`SlotId`]; the arena
//! alone owns slot storage. Container literals own a [`Body`] stored in the
//! slot that was allocated for the container, and the compound value
//! carries that slot's id.
//!
//! The arena counts live slots. Aliasing an existing slot never allocates;
//! materializing a fresh value always does:
//!
//! ```text
//! var a = 1;            +1  fresh value
//! var b = a;            +1  declaration copies a's value into a new slot
//! var o = {x: 1, y: a}; +2  container slot (adopted by o) + x; y aliases a
//! ```
//!
//! With [`Reclamation::MarkSweep`] the arena can free slots that are no longer
//! reachable from a set of roots, which keeps the count honest across
//! cyclic structures.

pub mod arena;
pub mod body;
pub mod config;
mod error;
mod evaluated;

pub use arena::{Arena, CollectionStats, ContainerLiteral, Root, Slot};
pub use body::{ArrayBody, Body, FunctionBody, ObjectBody, Properties, array_index};
pub use config::{ArenaConfig, Reclamation};
pub use error::ArenaError;
pub use evaluated::Evaluated;

pub use brook_core::SlotId;
