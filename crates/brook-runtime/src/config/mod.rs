// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Runtime configuration.
//!
//! Configuration is built in code with the `with_*` builders, deserialized
//! with `serde`, or read from the environment:
//!
//! | variable                  | values                              |
//! |---------------------------|-------------------------------------|
//! | `BROOK_ARENA_CAPACITY`    | maximum live slots, `1..=4294967295` |
//! | `BROOK_RECLAMATION`       | `off`, `disabled`, `mark-sweep`     |
//! | `BROOK_COLLECT_ON_REMOVE` | `true`, `false`, `1`, `0`           |


use brook_arena::{ArenaConfig, Reclamation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variable holding the arena capacity.
pub const ENV_ARENA_CAPACITY: &str = "BROOK_ARENA_CAPACITY";

/// Variable holding the reclamation policy.
pub const ENV_RECLAMATION: &str = "BROOK_RECLAMATION";

/// Variable enabling collection after a binding is removed.
pub const ENV_COLLECT_ON_REMOVE: &str = "BROOK_COLLECT_ON_REMOVE";

/// Errors from reading configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The capacity is not a positive 32-bit integer.
    #[error("BROOK_ARENA_CAPACITY: invalid capacity {0:?}")]
    InvalidCapacity(String),

    /// The reclamation policy is unknown.
    #[error("BROOK_RECLAMATION: unknown reclamation policy {0:?}")]
    InvalidReclamation(String),

    /// A boolean flag is not `true`, `false`, `1` or `0`.
    #[error("{var}: invalid flag {value:?}")]
    InvalidFlag {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Runtime configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Arena settings.
    pub arena: ArenaConfig,
    /// Run a collection whenever a binding is removed.
    pub collect_on_remove: bool,
}

impl RuntimeConfig {
    /// Create the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: ArenaConfig::new(),
            collect_on_remove: false,
        }
    }

    /// Set the arena configuration.
    #[must_use]
    pub const fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    /// Enable or disable collection on binding removal.
    #[must_use]
    pub const fn with_collect_on_remove(mut self, enabled: bool) -> Self {
        self.collect_on_remove = enabled;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(raw) = lookup(ENV_ARENA_CAPACITY) {
            let capacity = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&c| c > 0)
                .ok_or(ConfigError::InvalidCapacity(raw))?;
            config.arena = config.arena.with_capacity(capacity);
        }

        if let Some(raw) = lookup(ENV_RECLAMATION) {
            let policy =
                Reclamation::from_name(&raw).ok_or(ConfigError::InvalidReclamation(raw))?;
            config.arena = config.arena.with_reclamation(policy);
        }

        if let Some(raw) = lookup(ENV_COLLECT_ON_REMOVE) {
            config.collect_on_remove = parse_flag(ENV_COLLECT_ON_REMOVE, raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw }),
    }
}
