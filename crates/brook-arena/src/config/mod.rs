// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Arena configuration.


use serde::{Deserialize, Serialize};

/// Reclamation policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reclamation {
    /// Slots are never freed; the live count only grows.
    #[default]
    Disabled,
    /// Unreachable slots are freed by [`Arena::collect`](crate::Arena::collect).
    MarkSweep,
}

impl Reclamation {
    /// Look up a policy by name.
    ///
    /// Accepts `off` and `disabled` for [`Reclamation::Disabled`] and
    /// `mark-sweep` for [`Reclamation::MarkSweep`], ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" | "disabled" => Some(Self::Disabled),
            "mark-sweep" => Some(Self::MarkSweep),
            _ => None,
        }
    }

    /// Get the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::MarkSweep => "mark-sweep",
        }
    }
}

/// Arena configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Maximum number of live slots.
    pub capacity: u32,
    /// Reclamation policy.
    pub reclamation: Reclamation,
}

impl ArenaConfig {
    /// Default maximum number of live slots.
    pub const DEFAULT_CAPACITY: u32 = u32::MAX;

    /// Create the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            reclamation: Reclamation::Disabled,
        }
    }

    /// Set the maximum number of live slots.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the reclamation policy.
    #[must_use]
    pub const fn with_reclamation(mut self, reclamation: Reclamation) -> Self {
        self.reclamation = reclamation;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
