// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for value construction, inspection and conversions.

use super::{Value, ValueKind};
use crate::SlotId;

#[test]
fn default_is_undefined() {
    assert!(Value::default().is_undefined());
}

#[test]
fn constructors_and_kinds() {
    assert_eq!(Value::undefined().kind(), ValueKind::Undefined);
    assert_eq!(Value::null().kind(), ValueKind::Null);
    assert_eq!(Value::boolean(true).kind(), ValueKind::Boolean);
    assert_eq!(Value::number(1.0).kind(), ValueKind::Number);
    assert_eq!(Value::nan().kind(), ValueKind::Number);
    assert_eq!(Value::text("hi").kind(), ValueKind::Text);
    assert_eq!(Value::object(SlotId::new(0)).kind(), ValueKind::Object);
    assert_eq!(Value::array(SlotId::new(0)).kind(), ValueKind::Array);
    assert_eq!(Value::function(SlotId::new(0)).kind(), ValueKind::Function);
}

#[test]
fn compound_handles() {
    let slot = SlotId::new(5);
    assert_eq!(Value::object(slot).handle(), Some(slot));
    assert_eq!(Value::array(slot).handle(), Some(slot));
    assert_eq!(Value::function(slot).handle(), Some(slot));
    assert_eq!(Value::number(5.0).handle(), None);
    assert!(Value::object(slot).is_compound());
    assert!(!Value::text("x").is_compound());
    assert!(ValueKind::Array.is_compound());
    assert!(!ValueKind::Null.is_compound());
}

#[test]
fn predicates() {
    assert!(Value::null().is_nullish());
    assert!(Value::undefined().is_nullish());
    assert!(!Value::boolean(false).is_nullish());
    assert!(Value::nan().is_nan());
    assert!(!Value::infinity().is_nan());
    assert!(Value::text("").is_text());
    assert!(Value::number(0.0).is_number());
}

#[test]
fn type_names() {
    assert_eq!(Value::undefined().type_name(), "undefined");
    assert_eq!(Value::text("a").type_name(), "string");
    assert_eq!(Value::array(SlotId::new(1)).type_name(), "array");
}

// --- Numeric conversion table ---

#[test]
fn to_number_table() {
    assert_eq!(Value::boolean(true).to_number(), 1.0);
    assert_eq!(Value::boolean(false).to_number(), 0.0);
    assert_eq!(Value::null().to_number(), 0.0);
    assert!(Value::undefined().to_number().is_nan());
    assert_eq!(Value::number(-4.5).to_number(), -4.5);
    assert_eq!(Value::text("12").to_number(), 12.0);
    assert!(Value::text("hello").to_number().is_nan());
    assert!(Value::object(SlotId::new(0)).to_number().is_nan());
    assert!(Value::array(SlotId::new(0)).to_number().is_nan());
    assert!(Value::function(SlotId::new(0)).to_number().is_nan());
}

#[test]
fn to_boolean_table() {
    assert!(!Value::undefined().to_boolean());
    assert!(!Value::null().to_boolean());
    assert!(!Value::boolean(false).to_boolean());
    assert!(Value::boolean(true).to_boolean());
    assert!(!Value::number(0.0).to_boolean());
    assert!(!Value::number(-0.0).to_boolean());
    assert!(!Value::nan().to_boolean());
    assert!(Value::infinity().to_boolean());
    assert!(Value::neg_infinity().to_boolean());
    assert!(!Value::text("").to_boolean());
    assert!(Value::text("0").to_boolean());
    assert!(Value::object(SlotId::new(0)).to_boolean());
    assert!(Value::array(SlotId::new(0)).to_boolean());
}

#[test]
fn to_text_table() {
    assert_eq!(Value::undefined().to_text(), "undefined");
    assert_eq!(Value::null().to_text(), "null");
    assert_eq!(Value::boolean(true).to_text(), "true");
    assert_eq!(Value::number(1.0).to_text(), "1");
    assert_eq!(Value::neg_infinity().to_text(), "-Infinity");
    assert_eq!(Value::text("Hello").to_text(), "Hello");
    assert_eq!(Value::object(SlotId::new(2)).to_text(), "[object Object]");
}

#[test]
fn from_conversions() {
    assert_eq!(Value::from(true), Value::boolean(true));
    assert_eq!(Value::from(2.5), Value::number(2.5));
    assert_eq!(Value::from(3), Value::number(3.0));
    assert_eq!(Value::from("a"), Value::text("a"));
    assert_eq!(Value::from(String::from("b")), Value::text("b"));
}

#[test]
fn equality_uses_representation() {
    // Deliberately unlike IEEE: NaN equals itself
    assert_eq!(Value::nan(), Value::nan());
    assert_eq!(Value::infinity(), Value::infinity());
    assert_ne!(Value::number(1.0), Value::text("1"));
}

#[test]
fn debug_and_display() {
    assert_eq!(format!("{:?}", Value::number(1.0)), "Number(1)");
    assert_eq!(format!("{:?}", Value::text("x")), "Text(\"x\")");
    assert_eq!(format!("{:?}", Value::object(SlotId::new(4))), "Object(SlotId(4))");
    assert_eq!(format!("{}", Value::nan()), "NaN");
}
