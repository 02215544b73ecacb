// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the binding table.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn bind_and_lookup() {
    let mut env = Environment::new();
    assert!(env.is_empty());

    assert_eq!(env.bind("a", SlotId::new(1)), None);
    assert_eq!(env.lookup("a"), Some(SlotId::new(1)));
    assert_eq!(env.lookup("b"), None);
    assert_eq!(env.len(), 1);
}

#[test]
fn rebinding_returns_previous_slot() {
    let mut env = Environment::new();
    env.bind("i", SlotId::new(1));

    assert_eq!(env.bind("i", SlotId::new(7)), Some(SlotId::new(1)));
    assert_eq!(env.lookup("i"), Some(SlotId::new(7)));
    assert_eq!(env.len(), 1);
}

#[test]
fn remove_binding() {
    let mut env = Environment::new();
    env.bind("a", SlotId::new(1));

    assert_eq!(env.remove("a"), Some(SlotId::new(1)));
    assert_eq!(env.remove("a"), None);
    assert_eq!(env.lookup("a"), None);
}

#[test]
fn slots_cover_all_bindings() {
    let mut env = Environment::new();
    env.bind("a", SlotId::new(1));
    env.bind("b", SlotId::new(2));

    let mut slots: Vec<SlotId> = env.slots().collect();
    slots.sort();
    assert_eq!(slots, [SlotId::new(1), SlotId::new(2)]);
    assert_eq!(env.id(), EnvRef::GLOBAL);
}
