// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for strict and loose equality.

use super::*;
use crate::{SlotId, Value};

fn n(x: f64) -> Value {
    Value::number(x)
}

fn t(s: &str) -> Value {
    Value::text(s)
}

// --- Strict inequality ---

#[test]
fn strict_ne_same_kind() {
    assert!(strict_not_equals(&n(3.0), &n(4.0)));
    assert!(!strict_not_equals(&n(3.0), &n(3.0)));
    assert!(strict_not_equals(&Value::boolean(true), &Value::boolean(false)));
    assert!(!strict_not_equals(&Value::boolean(true), &Value::boolean(true)));
    assert!(!strict_not_equals(&t("hello"), &t("hello")));
    assert!(strict_not_equals(&t("hello"), &t("hell")));
}

#[test]
fn strict_singletons_equal_themselves() {
    assert!(!strict_not_equals(&Value::undefined(), &Value::undefined()));
    assert!(!strict_not_equals(&Value::null(), &Value::null()));
}

#[test]
fn strict_nan_and_infinity_equal_themselves() {
    // Representation equality, unlike IEEE `==`
    assert!(!strict_not_equals(&Value::nan(), &Value::nan()));
    assert!(!strict_not_equals(&Value::infinity(), &Value::infinity()));
    assert!(strict_equals(&Value::neg_infinity(), &Value::neg_infinity()));
    assert!(!strict_equals(&Value::infinity(), &Value::neg_infinity()));
}

#[test]
fn strict_different_kinds_never_equal() {
    assert!(strict_not_equals(&n(3.0), &Value::boolean(true)));
    assert!(strict_not_equals(&n(3.0), &Value::undefined()));
    assert!(strict_not_equals(&n(3.0), &Value::null()));
    assert!(strict_not_equals(&n(3.0), &Value::nan()));
    assert!(strict_not_equals(&n(3.0), &Value::infinity()));
    assert!(strict_not_equals(&Value::undefined(), &Value::null()));
    assert!(strict_not_equals(&t("hello"), &n(3.0)));
    assert!(strict_not_equals(&t("hello"), &Value::boolean(false)));
    assert!(strict_not_equals(&Value::boolean(true), &t("hello")));
    assert!(strict_not_equals(&n(1.0), &t("1")));
}

#[test]
fn strict_zero_signs_are_equal() {
    assert!(strict_equals(&n(0.0), &n(-0.0)));
}

#[test]
fn strict_compound_uses_identity() {
    let a = SlotId::new(1);
    let b = SlotId::new(2);
    assert!(strict_equals(&Value::object(a), &Value::object(a)));
    assert!(!strict_equals(&Value::object(a), &Value::object(b)));
    assert!(strict_equals(&Value::array(b), &Value::array(b)));
    assert!(!strict_equals(&Value::array(a), &Value::object(a)));
    assert!(strict_equals(&Value::function(a), &Value::function(a)));
}

// --- Loose equality ---

#[test]
fn loose_nullish() {
    assert!(loose_equals(&Value::null(), &Value::undefined()));
    assert!(loose_equals(&Value::undefined(), &Value::null()));
    assert!(!loose_equals(&Value::null(), &n(0.0)));
    assert!(!loose_equals(&Value::undefined(), &Value::boolean(false)));
    assert!(loose_not_equals(&Value::object(SlotId::new(3)), &Value::null()));
}

#[test]
fn loose_number_and_text() {
    assert!(loose_equals(&n(1.0), &t("1")));
    assert!(loose_equals(&t(" 2 "), &n(2.0)));
    assert!(!loose_equals(&n(1.0), &t("one")));
}

#[test]
fn loose_booleans_convert_to_numbers() {
    assert!(loose_equals(&Value::boolean(true), &n(1.0)));
    assert!(loose_equals(&n(0.0), &Value::boolean(false)));
    assert!(loose_equals(&Value::boolean(true), &t("1")));
    assert!(!loose_equals(&Value::boolean(true), &t("true")));
}

#[test]
fn loose_same_kind_matches_strict() {
    assert!(loose_equals(&n(10.0), &n(10.0)));
    assert!(loose_not_equals(&n(9.0), &n(10.0)));
    assert!(loose_equals(&t("a"), &t("a")));
    let slot = SlotId::new(8);
    assert!(loose_equals(&Value::object(slot), &Value::object(slot)));
    assert!(loose_not_equals(&Value::object(slot), &Value::object(SlotId::new(9))));
}

#[test]
fn loose_compound_never_equals_primitive() {
    assert!(!loose_equals(&Value::array(SlotId::new(1)), &n(0.0)));
    assert!(!loose_equals(&t("[object Object]"), &Value::object(SlotId::new(1))));
}
