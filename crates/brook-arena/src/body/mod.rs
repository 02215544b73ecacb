// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Container bodies.
//!
//! A body is stored in the slot allocated for its container literal. Bodies
//! never hold values directly, only the ids of member slots, so a member can
//! alias a slot that is also bound to a variable.


mod properties;

pub use properties::Properties;

use brook_core::{CodeRef, EnvRef, SlotId, Value, ValueKind};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Object body: properties in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectBody {
    /// Named properties.
    pub properties: Properties,
}

impl ObjectBody {
    /// Create an empty object body.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Properties::new(),
        }
    }
}

/// Array body: indexed elements plus named properties.
///
/// Elements are stored sparsely by index. Indices below `len` without an
/// element are holes left behind by writes past the end or by growing
/// `length`; they read as `undefined` and take no space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayBody {
    elements: BTreeMap<u32, SlotId>,
    len: u32,
    /// Named, non-index properties.
    pub properties: Properties,
}

impl ArrayBody {
    /// Create an empty array body.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            len: 0,
            properties: Properties::new(),
        }
    }

    /// Create an array body from member slots.
    #[must_use]
    pub fn from_slots(slots: impl IntoIterator<Item = SlotId>) -> Self {
        let mut array = Self::new();
        for slot in slots {
            array.push(slot);
        }
        array
    }

    /// Number of elements, holes included.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the slot at `index`, or `None` for holes and out-of-range reads.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<SlotId> {
        self.elements.get(&index).copied()
    }

    /// Store `slot` at `index`, growing the array with holes if needed.
    pub fn set(&mut self, index: u32, slot: SlotId) {
        self.elements.insert(index, slot);
        if index >= self.len {
            self.len = index.saturating_add(1);
        }
    }

    /// Append an element.
    ///
    /// An array already at the maximum length stays unchanged.
    pub fn push(&mut self, slot: SlotId) {
        if self.len < u32::MAX {
            self.elements.insert(self.len, slot);
            self.len += 1;
        }
    }

    /// Truncate or extend the array to `len` elements.
    pub fn set_len(&mut self, len: u32) {
        if len < self.len {
            self.elements.retain(|index, _| *index < len);
        }
        self.len = len;
    }

    /// Iterate over present elements in index order, holes skipped.
    pub fn elements(&self) -> impl Iterator<Item = (u32, SlotId)> + '_ {
        self.elements.iter().map(|(index, slot)| (*index, *slot))
    }
}

/// Function body.
///
/// The code and environment references are opaque here; calling belongs to
/// the execution layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionBody {
    /// Parameter names in declaration order.
    pub params: Vec<Arc<str>>,
    /// Executable body.
    pub code: CodeRef,
    /// Defining environment.
    pub env: EnvRef,
    /// Named properties attached after creation.
    pub properties: Properties,
}

impl FunctionBody {
    /// Create a function body.
    #[must_use]
    pub fn new(params: Vec<Arc<str>>, code: CodeRef, env: EnvRef) -> Self {
        Self {
            params,
            code,
            env,
            properties: Properties::new(),
        }
    }
}

/// A container body owned by a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// Object body.
    Object(ObjectBody),
    /// Array body.
    Array(ArrayBody),
    /// Function body.
    Function(FunctionBody),
}

impl Body {
    /// Get the value kind of containers with this body.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Build the compound value referring to this body when it is owned by
    /// `slot`.
    #[must_use]
    pub const fn value_at(&self, slot: SlotId) -> Value {
        match self {
            Self::Object(_) => Value::Object(slot),
            Self::Array(_) => Value::Array(slot),
            Self::Function(_) => Value::Function(slot),
        }
    }

    /// Get the named properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        match self {
            Self::Object(body) => &body.properties,
            Self::Array(body) => &body.properties,
            Self::Function(body) => &body.properties,
        }
    }

    /// Get the named properties mutably.
    pub const fn properties_mut(&mut self) -> &mut Properties {
        match self {
            Self::Object(body) => &mut body.properties,
            Self::Array(body) => &mut body.properties,
            Self::Function(body) => &mut body.properties,
        }
    }

    /// Call `f` with every member slot this body refers to.
    pub fn for_each_member(&self, mut f: impl FnMut(SlotId)) {
        if let Self::Array(array) = self {
            array.elements().for_each(|(_, slot)| f(slot));
        }
        self.properties().slots().for_each(f);
    }
}

/// Parse a property key as an array index.
///
/// Only canonical decimal integers below `2^32 - 1` are indices: `"0"`,
/// `"17"`. `"01"`, `"-1"`, `"1.5"` and `" 1"` are ordinary property names.
#[must_use]
pub fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    let index: u32 = key.parse().ok()?;
    if index == u32::MAX {
        return None;
    }
    Some(index)
}
