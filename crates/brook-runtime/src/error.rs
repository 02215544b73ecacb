// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Runtime error type.

use brook_arena::ArenaError;
use std::sync::Arc;
use thiserror::Error;

/// Errors from evaluating expressions and statements.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read or assignment of a name that was never declared.
    #[error("{0} is not defined")]
    UndeclaredBinding(Arc<str>),

    /// Property access on `undefined` or `null`.
    #[error("cannot access property '{property}' of {base}")]
    PropertyOfNullish {
        /// Property key.
        property: String,
        /// `"undefined"` or `"null"`.
        base: &'static str,
    },

    /// Assignment to something that is neither a binding nor a property.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    /// Call of a name that is not an intrinsic.
    #[error("{0} is not a function")]
    UnknownIntrinsic(Arc<str>),

    /// Arena failure.
    #[error(transparent)]
    Arena(#[from] ArenaError),
}

impl RuntimeError {
    /// Returns true if execution cannot continue, which is the case for
    /// arena exhaustion only.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Arena(err) => err.is_fatal(),
            _ => false,
        }
    }
}
