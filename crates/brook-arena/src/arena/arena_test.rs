// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for slot allocation and access.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::{ObjectBody, Reclamation};

fn setup() -> Arena {
    Arena::new(ArenaConfig::default())
}

#[test]
fn new_arena_is_empty() {
    let arena = setup();
    assert_eq!(arena.live_slot_count(), 0);
    assert_eq!(arena.total_allocations(), 0);
    assert_eq!(arena.live_slots().count(), 0);
}

#[test]
fn alloc_counts_every_slot() {
    let mut arena = setup();
    let a = arena.alloc(Value::number(1.0)).unwrap();
    let b = arena.alloc(Value::number(1.0)).unwrap();

    assert_ne!(a, b);
    assert_eq!(arena.live_slot_count(), 2);
    assert_eq!(arena.total_allocations(), 2);
    assert_eq!(arena.value(a).unwrap(), &Value::number(1.0));
    assert!(arena.is_live(a));
}

#[test]
fn set_value_never_allocates() {
    let mut arena = setup();
    let slot = arena.alloc(Value::undefined()).unwrap();
    arena.set_value(slot, Value::text("Hello")).unwrap();

    assert_eq!(arena.value(slot).unwrap(), &Value::text("Hello"));
    assert_eq!(arena.live_slot_count(), 1);
}

#[test]
fn body_slot_refers_to_itself() {
    let mut arena = setup();
    let slot = arena.alloc_body(Body::Object(ObjectBody::new())).unwrap();

    assert_eq!(arena.value(slot).unwrap(), &Value::object(slot));
    assert!(matches!(arena.body(slot).unwrap(), Body::Object(_)));
    assert_eq!(arena.live_slot_count(), 1);
}

#[test]
fn plain_slot_has_no_body() {
    let mut arena = setup();
    let slot = arena.alloc(Value::null()).unwrap();
    assert_eq!(arena.body(slot), Err(ArenaError::NotAContainer(slot)));
}

#[test]
fn unknown_slot_is_dangling() {
    let mut arena = setup();
    let missing = SlotId::new(42);

    assert_eq!(arena.get(missing), Err(ArenaError::DanglingSlot(missing)));
    assert_eq!(
        arena.set_value(missing, Value::null()),
        Err(ArenaError::DanglingSlot(missing))
    );
    assert!(!arena.is_live(missing));
}

#[test]
fn capacity_exhaustion_is_fatal() {
    let mut arena = Arena::new(ArenaConfig::new().with_capacity(2));
    arena.alloc(Value::number(1.0)).unwrap();
    arena.alloc(Value::number(2.0)).unwrap();

    let err = arena.alloc(Value::number(3.0)).unwrap_err();
    assert_eq!(err, ArenaError::Exhausted { capacity: 2 });
    assert!(err.is_fatal());
    assert_eq!(arena.live_slot_count(), 2);
    assert_eq!(arena.total_allocations(), 2);
}

#[test]
fn freed_capacity_is_reusable() {
    let config = ArenaConfig::new()
        .with_capacity(2)
        .with_reclamation(Reclamation::MarkSweep);
    let mut arena = Arena::new(config);
    let keep = arena.alloc(Value::number(1.0)).unwrap();
    let garbage = arena.alloc(Value::number(2.0)).unwrap();
    assert!(arena.alloc(Value::number(3.0)).is_err());

    arena.collect([keep]);
    let reused = arena.alloc(Value::number(3.0)).unwrap();

    assert_eq!(reused, garbage);
    assert_eq!(arena.live_slot_count(), 2);
    assert_eq!(arena.total_allocations(), 3);
}

#[test]
fn resolve_evaluated() {
    let mut arena = setup();
    let slot = arena.alloc(Value::boolean(true)).unwrap();
    let container = arena.alloc_body(Body::Object(ObjectBody::new())).unwrap();

    assert_eq!(
        arena.resolve(&Evaluated::Fresh(Value::null())).unwrap(),
        Value::null()
    );
    assert_eq!(
        arena.resolve(&Evaluated::Alias(slot)).unwrap(),
        Value::boolean(true)
    );
    assert_eq!(
        arena.resolve(&Evaluated::Minted(container)).unwrap(),
        Value::object(container)
    );
}

#[test]
fn errors_render() {
    assert_eq!(
        ArenaError::Exhausted { capacity: 4 }.to_string(),
        "arena exhausted: all 4 slots are live"
    );
    assert_eq!(
        ArenaError::DanglingSlot(SlotId::new(7)).to_string(),
        "slot #7 is not live"
    );
    assert!(!ArenaError::NotAContainer(SlotId::new(1)).is_fatal());
}
