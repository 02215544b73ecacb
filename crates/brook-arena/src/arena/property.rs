// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Property reads and writes.
//!
//! Keys are text. On arrays, canonical integer keys address elements and
//! `length` addresses the element count; every other key is a named
//! property.

use super::Arena;
use crate::{ArenaError, Body, Evaluated, array_index};
use brook_core::value::number;
use brook_core::{SlotId, Value};
use std::sync::Arc;
use tracing::trace;

/// Key of the element count on arrays and text.
const LENGTH: &str = "length";

/// Largest array length plus one.
const MAX_ARRAY_LENGTH: f64 = 4_294_967_296.0;

impl Arena {
    /// Read a property.
    ///
    /// A property backed by a slot is returned as an alias of that slot.
    /// Missing properties read as a fresh `undefined`, never an error.
    /// Text has `length` and indexed characters; other primitives have no
    /// properties.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::DanglingSlot`] if `base` refers to a slot that
    /// is not live.
    pub fn get_property(&self, base: &Value, key: &str) -> Result<Evaluated, ArenaError> {
        let Some(owner) = base.handle() else {
            return Ok(Evaluated::Fresh(primitive_property(base, key)));
        };

        let found = match self.body(owner)? {
            Body::Array(array) => {
                if let Some(index) = array_index(key) {
                    array.get(index)
                } else if key == LENGTH {
                    return Ok(Evaluated::Fresh(Value::number(f64::from(array.len()))));
                } else {
                    array.properties.get(key)
                }
            }
            body => body.properties().get(key),
        };
        Ok(found.map_or(Evaluated::Fresh(Value::Undefined), Evaluated::Alias))
    }

    /// Write a property.
    ///
    /// An existing property has its slot's value replaced. A missing
    /// property is resolved like a container member: a bare read shares the
    /// source slot, anything else gets a new slot. Writing an array element
    /// past the end grows the array with holes; writing `length` truncates
    /// or extends it. Writes to primitives are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidArrayLength`] for a bad `length`, or
    /// [`ArenaError::Exhausted`] if a slot is needed and none is available.
    pub fn set_property(
        &mut self,
        base: &Value,
        key: &str,
        value: Evaluated,
    ) -> Result<(), ArenaError> {
        let Some(owner) = base.handle() else {
            trace!(key, base = base.type_name(), "write to primitive ignored");
            return Ok(());
        };

        if matches!(self.body(owner)?, Body::Array(_)) {
            if let Some(index) = array_index(key) {
                return self.set_element(owner, index, value);
            }
            if key == LENGTH {
                let len = array_length(&self.resolve(&value)?)?;
                if let Body::Array(array) = self.body_mut(owner)? {
                    array.set_len(len);
                }
                return Ok(());
            }
        }

        match self.body(owner)?.properties().get(key) {
            Some(slot) => {
                let value = self.resolve(&value)?;
                self.set_value(slot, value)
            }
            None => {
                let (slot, _) = self.evaluate_container_member(value)?;
                self.body_mut(owner)?
                    .properties_mut()
                    .insert(Arc::from(key), slot);
                Ok(())
            }
        }
    }

    fn set_element(
        &mut self,
        owner: SlotId,
        index: u32,
        value: Evaluated,
    ) -> Result<(), ArenaError> {
        let existing = match self.body(owner)? {
            Body::Array(array) => array.get(index),
            _ => return Err(ArenaError::NotAContainer(owner)),
        };

        if let Some(slot) = existing {
            let value = self.resolve(&value)?;
            return self.set_value(slot, value);
        }

        let (slot, _) = self.evaluate_container_member(value)?;
        if let Body::Array(array) = self.body_mut(owner)? {
            array.set(index, slot);
        }
        Ok(())
    }
}

fn primitive_property(base: &Value, key: &str) -> Value {
    let Some(text) = base.as_text() else {
        return Value::Undefined;
    };
    if key == LENGTH {
        return Value::number(text.chars().count() as f64);
    }
    array_index(key)
        .and_then(|index| text.chars().nth(index as usize))
        .map_or(Value::Undefined, |c| Value::text(c.to_string()))
}

fn array_length(value: &Value) -> Result<u32, ArenaError> {
    let n = value.to_number();
    if n >= 0.0 && n < MAX_ARRAY_LENGTH && n.fract() == 0.0 {
        Ok(n as u32)
    } else {
        Err(ArenaError::InvalidArrayLength(number::format(n)))
    }
}
