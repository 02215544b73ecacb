// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Arena error type.

use brook_core::SlotId;
use thiserror::Error;

/// Errors from arena operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Every slot the arena may hand out is live.
    #[error("arena exhausted: all {capacity} slots are live")]
    Exhausted {
        /// Configured maximum number of live slots.
        capacity: u32,
    },

    /// The slot id was never allocated or has been reclaimed.
    #[error("slot {0} is not live")]
    DanglingSlot(SlotId),

    /// The slot holds no container body.
    #[error("slot {0} does not hold a container body")]
    NotAContainer(SlotId),

    /// An array length that is not a non-negative integer below 2^32.
    #[error("invalid array length: {0}")]
    InvalidArrayLength(String),
}

impl ArenaError {
    /// Returns true for resource exhaustion, which ends execution.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
