// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The binding table.
//!
//! One flat table maps names to slots; there is no scope chain. Bindings
//! are the roots of reclamation: a slot stays alive as long as it is
//! reachable from some bound slot.

#[cfg(test)]
mod env_test;

use brook_core::{EnvRef, SlotId};
use std::collections::HashMap;
use std::sync::Arc;

/// Flat name-to-slot table.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: HashMap<Arc<str>, SlotId>,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference to this environment for function bodies.
    #[must_use]
    pub const fn id(&self) -> EnvRef {
        EnvRef::GLOBAL
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Look up the slot bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SlotId> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `slot`, returning the previously bound slot.
    pub fn bind(&mut self, name: impl Into<Arc<str>>, slot: SlotId) -> Option<SlotId> {
        self.bindings.insert(name.into(), slot)
    }

    /// Remove the binding for `name`.
    pub fn remove(&mut self, name: &str) -> Option<SlotId> {
        self.bindings.remove(name)
    }

    /// Iterate over all bound slots.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.bindings.values().copied()
    }
}
