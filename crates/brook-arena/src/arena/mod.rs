// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The slot table.
//!
//! Slots live in a single growable table indexed by [`SlotId`]. Freed slots
//! go onto a free list and their ids are handed out again, so the table only
//! grows when no freed slot is available:
//!
//! ```text
//! slots: [ #0 live ][ #1 free ][ #2 live ][ #3 live ]
//! free:  [ #1 ]
//! alloc  -> #1
//! ```
//!
//! Two counters are kept: the number of live slots, which is what the
//! `gb_variables_count` introspection reports, and the total number of
//! allocations ever made, which never decreases.

#[cfg(test)]
mod arena_test;

mod collect;
mod display;
mod members;
mod property;

pub use collect::{CollectionStats, Root};
pub use members::ContainerLiteral;

use crate::{ArenaConfig, ArenaError, Body, Evaluated};
use brook_core::{SlotId, Value};
use tracing::{trace, warn};

/// A storage unit holding exactly one value.
///
/// A slot allocated for a container literal also owns the container's body.
/// Its value starts out as the compound value referring to itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    value: Value,
    body: Option<Body>,
}

impl Slot {
    /// Get the stored value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Get the owned container body, if any.
    #[inline]
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }
}

/// Table of value slots with allocation accounting.
#[derive(Debug, Default)]
pub struct Arena {
    config: ArenaConfig,
    slots: Vec<Option<Slot>>,
    free: Vec<SlotId>,
    live: usize,
    total: u64,
    collections: u64,
}

impl Arena {
    /// Create an empty arena.
    #[must_use]
    pub const fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            total: 0,
            collections: 0,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of live slots.
    #[inline]
    #[must_use]
    pub const fn live_slot_count(&self) -> usize {
        self.live
    }

    /// Number of allocations made since creation, freed slots included.
    #[inline]
    #[must_use]
    pub const fn total_allocations(&self) -> u64 {
        self.total
    }

    /// Number of collection cycles that ran.
    #[must_use]
    pub const fn collections(&self) -> u64 {
        self.collections
    }

    /// Check whether `slot` refers to a live slot.
    #[must_use]
    pub fn is_live(&self, slot: SlotId) -> bool {
        matches!(self.slots.get(slot.index()), Some(Some(_)))
    }

    /// Iterate over the ids of all live slots in table order.
    pub fn live_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_some())
            .map(|(index, _)| SlotId::new(index as u32))
    }

    /// Allocate a slot holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if the capacity is reached.
    pub fn alloc(&mut self, value: Value) -> Result<SlotId, ArenaError> {
        self.insert(Slot { value, body: None })
    }

    /// Allocate a slot owning `body`.
    ///
    /// The slot's value is the compound value referring to the new slot.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if the capacity is reached.
    pub fn alloc_body(&mut self, body: Body) -> Result<SlotId, ArenaError> {
        let slot = self.insert(Slot {
            value: Value::Undefined,
            body: None,
        })?;
        let entry = self.slot_mut(slot)?;
        entry.value = body.value_at(slot);
        entry.body = Some(body);
        Ok(slot)
    }

    fn insert(&mut self, slot: Slot) -> Result<SlotId, ArenaError> {
        let capacity = self.config.capacity;
        if self.live >= capacity as usize {
            warn!(capacity, "arena capacity reached");
            return Err(ArenaError::Exhausted { capacity });
        }

        let id = if let Some(id) = self.free.pop() {
            if let Some(entry) = self.slots.get_mut(id.index()) {
                *entry = Some(slot);
            }
            id
        } else {
            let index =
                u32::try_from(self.slots.len()).map_err(|_| ArenaError::Exhausted { capacity })?;
            self.slots.push(Some(slot));
            SlotId::new(index)
        };

        self.live += 1;
        self.total += 1;
        trace!(slot = %id, live = self.live, "slot allocated");
        Ok(id)
    }

    /// Get a live slot.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if the slot is not live.
    pub fn get(&self, slot: SlotId) -> Result<&Slot, ArenaError> {
        self.slots
            .get(slot.index())
            .and_then(Option::as_ref)
            .ok_or(ArenaError::DanglingSlot(slot))
    }

    fn slot_mut(&mut self, slot: SlotId) -> Result<&mut Slot, ArenaError> {
        self.slots
            .get_mut(slot.index())
            .and_then(Option::as_mut)
            .ok_or(ArenaError::DanglingSlot(slot))
    }

    /// Get the value stored in a slot.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if the slot is not live.
    pub fn value(&self, slot: SlotId) -> Result<&Value, ArenaError> {
        self.get(slot).map(Slot::value)
    }

    /// Replace the value stored in a slot. Never allocates.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if the slot is not live.
    pub fn set_value(&mut self, slot: SlotId, value: Value) -> Result<(), ArenaError> {
        self.slot_mut(slot)?.value = value;
        Ok(())
    }

    /// Get the container body owned by a slot.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if the slot is not live, or
    /// [`ArenaError::NotAContainer`] if it owns no body.
    pub fn body(&self, slot: SlotId) -> Result<&Body, ArenaError> {
        self.get(slot)?
            .body()
            .ok_or(ArenaError::NotAContainer(slot))
    }

    fn body_mut(&mut self, slot: SlotId) -> Result<&mut Body, ArenaError> {
        self.slot_mut(slot)?
            .body
            .as_mut()
            .ok_or(ArenaError::NotAContainer(slot))
    }

    /// Get the value of an evaluated expression.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if the result refers to a slot
    /// that is not live.
    pub fn resolve(&self, evaluated: &Evaluated) -> Result<Value, ArenaError> {
        match evaluated {
            Evaluated::Fresh(value) => Ok(value.clone()),
            Evaluated::Alias(slot) | Evaluated::Minted(slot) => self.value(*slot).cloned(),
        }
    }
}
