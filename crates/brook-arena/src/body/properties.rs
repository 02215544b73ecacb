// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Insertion-ordered property table.

use brook_core::SlotId;
use std::sync::Arc;

/// Property names mapped to member slots, in insertion order.
///
/// Lookups are linear; container literals in practice carry a handful of
/// properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(Arc<str>, SlotId)>,
}

impl Properties {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the slot of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SlotId> {
        self.entries
            .iter()
            .find(|(key, _)| &**key == name)
            .map(|(_, slot)| *slot)
    }

    /// Insert or rebind a property.
    ///
    /// A new name is appended; an existing name keeps its position and the
    /// previous slot is returned.
    pub fn insert(&mut self, name: Arc<str>, slot: SlotId) -> Option<SlotId> {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(&mut entry.1, slot));
        }
        self.entries.push((name, slot));
        None
    }

    /// Iterate over `(name, slot)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SlotId)> {
        self.entries.iter().map(|(key, slot)| (&**key, *slot))
    }

    /// Iterate over member slots in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.entries.iter().map(|(_, slot)| *slot)
    }
}
