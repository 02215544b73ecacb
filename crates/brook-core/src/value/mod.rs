// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Value representation for Brook.
//!
//! Values are immutable snapshots. Primitive values (undefined, null,
//! booleans, numbers, text) are stored inline. Compound values (objects,
//! arrays, functions) store the [`SlotId`] of the slot that owns their body
//! in the arena, so copying a compound value copies a reference, never the
//! body.
//!
//! Mutating an object or array means replacing the value stored in one of
//! its member slots; that happens in the arena, not here.

#[cfg(test)]
mod mod_test;

pub mod number;

use crate::SlotId;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Kind tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    /// The `undefined` singleton.
    Undefined = 0,
    /// The `null` singleton.
    Null = 1,
    /// `true` or `false`.
    Boolean = 2,
    /// IEEE-754 double.
    Number = 3,
    /// Immutable text.
    Text = 4,
    /// Property map.
    Object = 5,
    /// Indexed sequence.
    Array = 6,
    /// Callable.
    Function = 7,
}

impl ValueKind {
    /// Returns true for kinds whose values live in an arena body.
    #[inline]
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Object | Self::Array | Self::Function)
    }
}

/// A Brook value.
///
/// The set of kinds is closed. Equality (`==` on this type) is the strict
/// equality of [`crate::ops::strict_equals`]: numbers compare by
/// representation, so `NaN == NaN` holds, and compound values compare by
/// slot identity.
#[derive(Clone, Default)]
pub enum Value {
    /// The `undefined` value.
    #[default]
    Undefined,
    /// The `null` value.
    Null,
    /// Boolean true or false.
    Boolean(bool),
    /// Double-precision number, including NaN and the infinities.
    Number(f64),
    /// Immutable text.
    Text(Arc<str>),
    /// Object whose body is owned by the given slot.
    Object(SlotId),
    /// Array whose body is owned by the given slot.
    Array(SlotId),
    /// Function whose body is owned by the given slot.
    Function(SlotId),
}

impl Value {
    /// Create the undefined value.
    #[inline]
    #[must_use]
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create the null value.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value.
    #[inline]
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Create a number value.
    #[inline]
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create the NaN number.
    #[inline]
    #[must_use]
    pub const fn nan() -> Self {
        Self::Number(f64::NAN)
    }

    /// Create positive infinity.
    #[inline]
    #[must_use]
    pub const fn infinity() -> Self {
        Self::Number(f64::INFINITY)
    }

    /// Create negative infinity.
    #[inline]
    #[must_use]
    pub const fn neg_infinity() -> Self {
        Self::Number(f64::NEG_INFINITY)
    }

    /// Create a text value.
    #[inline]
    #[must_use]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Self::Text(s.into())
    }

    /// Create an object value from the slot owning its body.
    #[inline]
    #[must_use]
    pub const fn object(slot: SlotId) -> Self {
        Self::Object(slot)
    }

    /// Create an array value from the slot owning its body.
    #[inline]
    #[must_use]
    pub const fn array(slot: SlotId) -> Self {
        Self::Array(slot)
    }

    /// Create a function value from the slot owning its body.
    #[inline]
    #[must_use]
    pub const fn function(slot: SlotId) -> Self {
        Self::Function(slot)
    }

    /// Get the kind tag.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
            Self::Function(_) => ValueKind::Function,
        }
    }

    /// Check if this value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if this value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is undefined or null.
    #[inline]
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Check if this value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this value is the NaN number.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }

    /// Check if this value is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this value is an object, array or function.
    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        self.kind().is_compound()
    }

    /// Get the body slot of a compound value.
    #[inline]
    #[must_use]
    pub const fn handle(&self) -> Option<SlotId> {
        match self {
            Self::Object(slot) | Self::Array(slot) | Self::Function(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Get the number payload, without coercion.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text payload, without coercion.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name of this value for diagnostics.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
        }
    }

    /// Numeric conversion.
    ///
    /// `true -> 1`, `false -> 0`, `null -> 0`, `undefined -> NaN`, text is
    /// parsed (NaN when unparsable) and compound values have no primitive
    /// conversion, so they become NaN.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Object(_) | Self::Array(_) | Self::Function(_) => f64::NAN,
            Self::Null | Self::Boolean(false) => 0.0,
            Self::Boolean(true) => 1.0,
            Self::Number(n) => *n,
            Self::Text(s) => number::parse(s),
        }
    }

    /// Truthiness.
    ///
    /// Falsy: `undefined`, `null`, `false`, `0`, `-0`, `NaN` and empty text.
    /// Every compound value is truthy.
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => !(n.is_nan() || *n == 0.0),
            Self::Text(s) => !s.is_empty(),
            Self::Object(_) | Self::Array(_) | Self::Function(_) => true,
        }
    }

    /// Text conversion, as used by concatenation.
    ///
    /// Compound values render as their tag; rendering their contents needs
    /// the arena.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Undefined => Cow::Borrowed("undefined"),
            Self::Null => Cow::Borrowed("null"),
            Self::Boolean(true) => Cow::Borrowed("true"),
            Self::Boolean(false) => Cow::Borrowed("false"),
            Self::Number(n) => Cow::Owned(number::format(*n)),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Object(_) => Cow::Borrowed("[object Object]"),
            Self::Array(_) => Cow::Borrowed("[object Array]"),
            Self::Function(_) => Cow::Borrowed("[object Function]"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::strict_equals(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Null => write!(f, "Null"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Number(n) => write!(f, "Number({})", number::format(*n)),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Object(slot) => write!(f, "Object({slot:?})"),
            Self::Array(slot) => write!(f, "Array({slot:?})"),
            Self::Function(slot) => write!(f, "Function({slot:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
