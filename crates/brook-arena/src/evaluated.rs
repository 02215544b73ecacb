// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Result of evaluating an expression, as seen by the arena.

use brook_core::{SlotId, Value};

/// An evaluated expression, classified by where its value lives.
///
/// The classification decides allocation: a bare read of an existing slot is
/// an [`Alias`](Self::Alias) and never allocates when used as a container
/// member, a [`Fresh`](Self::Fresh) value still needs a slot, and a
/// [`Minted`](Self::Minted) slot was allocated while evaluating (a container
/// literal) and is adopted by whoever stores it.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluated {
    /// A value that does not live in any slot yet.
    Fresh(Value),
    /// A direct read of a live binding, property or element slot.
    Alias(SlotId),
    /// A slot allocated during evaluation that nothing refers to yet.
    Minted(SlotId),
}

impl Evaluated {
    /// Get the slot backing this result, if any.
    #[must_use]
    pub const fn slot(&self) -> Option<SlotId> {
        match self {
            Self::Fresh(_) => None,
            Self::Alias(slot) | Self::Minted(slot) => Some(*slot),
        }
    }

    /// Returns true for a bare read of an existing slot.
    #[must_use]
    pub const fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }
}

impl From<Value> for Evaluated {
    fn from(value: Value) -> Self {
        Self::Fresh(value)
    }
}
