// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Declarations, container members and container literals.
//!
//! These operations carry the allocation contract. Depending on how the
//! expression was classified:
//!
//! | operation                   | `Fresh` | `Alias` | `Minted` |
//! |-----------------------------|---------|---------|----------|
//! | `declare_binding`           | +1      | +1      | adopt    |
//! | `evaluate_container_member` | +1      | share   | adopt    |
//!
//! `build_container` adds exactly one slot for the container itself. A
//! minted slot was counted when its literal was built, so the container
//! slot of `var o = {}` is the one slot counted for both the literal and its
//! declaration.

use super::Arena;
use crate::{ArenaError, ArrayBody, Body, Evaluated, FunctionBody, ObjectBody};
use brook_core::SlotId;
use std::sync::Arc;
use tracing::debug;

/// A container literal with evaluated members.
#[derive(Clone, Debug)]
pub enum ContainerLiteral {
    /// `{name: expr, ...}`
    Object(Vec<(Arc<str>, Evaluated)>),
    /// `[expr, ...]`
    Array(Vec<Evaluated>),
    /// `function (params) { ... }`
    Function(FunctionBody),
}

impl Arena {
    /// Create the slot for a declared binding.
    ///
    /// Fresh values and aliases get a new slot; an alias has its current
    /// value copied, so later assignments to either binding stay separate.
    /// A minted slot is adopted as is.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if a slot is needed and none is
    /// available, or [`ArenaError::DanglingSlot`] for a stale result.
    pub fn declare_binding(&mut self, initializer: Evaluated) -> Result<SlotId, ArenaError> {
        match initializer {
            Evaluated::Fresh(value) => self.alloc(value),
            Evaluated::Alias(source) => {
                let value = self.value(source)?.clone();
                self.alloc(value)
            }
            Evaluated::Minted(slot) => {
                self.get(slot)?;
                Ok(slot)
            }
        }
    }

    /// Resolve the slot a container member refers to.
    ///
    /// Returns the slot and whether it was allocated for this member. A bare
    /// read of an existing slot is shared, not copied.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if a slot is needed and none is
    /// available, or [`ArenaError::DanglingSlot`] for a stale result.
    pub fn evaluate_container_member(
        &mut self,
        member: Evaluated,
    ) -> Result<(SlotId, bool), ArenaError> {
        match member {
            Evaluated::Fresh(value) => Ok((self.alloc(value)?, true)),
            Evaluated::Alias(slot) => {
                self.get(slot)?;
                Ok((slot, false))
            }
            Evaluated::Minted(slot) => {
                self.get(slot)?;
                Ok((slot, true))
            }
        }
    }

    /// Build a container from its evaluated members.
    ///
    /// Members are resolved in order, then exactly one slot is allocated for
    /// the container. Returns the container slot, whose value is the new
    /// compound value.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if the capacity is reached.
    pub fn build_container(&mut self, literal: ContainerLiteral) -> Result<SlotId, ArenaError> {
        let body = match literal {
            ContainerLiteral::Object(members) => {
                let mut object = ObjectBody::new();
                for (name, member) in members {
                    let (slot, _) = self.evaluate_container_member(member)?;
                    object.properties.insert(name, slot);
                }
                Body::Object(object)
            }
            ContainerLiteral::Array(members) => {
                let mut array = ArrayBody::new();
                for member in members {
                    let (slot, _) = self.evaluate_container_member(member)?;
                    array.push(slot);
                }
                Body::Array(array)
            }
            ContainerLiteral::Function(function) => Body::Function(function),
        };

        let kind = body.kind();
        let slot = self.alloc_body(body)?;
        debug!(slot = %slot, ?kind, live = self.live, "container built");
        Ok(slot)
    }
}
