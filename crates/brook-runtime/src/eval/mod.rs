// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The runtime: statements over the binding table and the arena.


mod expression;
mod intrinsics;

pub use intrinsics::{INTRINSIC_COUNT, Intrinsic, intrinsic_name, lookup_intrinsic};

use crate::{Environment, Expr, Key, RuntimeConfig, RuntimeError};
use brook_arena::{Arena, CollectionStats, Evaluated, Root};
use brook_core::{SlotId, Value};
use std::sync::Arc;
use tracing::debug;

/// A binding table together with the arena its slots live in.
#[derive(Debug, Default)]
pub struct Runtime {
    config: RuntimeConfig,
    arena: Arena,
    env: Environment,
    /// Slots held by expressions still being evaluated; collection roots
    /// alongside the bindings.
    temporaries: Vec<Root>,
}

impl Runtime {
    /// Create a runtime with an empty arena and no bindings.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            arena: Arena::new(config.arena),
            env: Environment::new(),
            temporaries: Vec::new(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Get the arena.
    #[must_use]
    pub const fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Get the binding table.
    #[must_use]
    pub const fn env(&self) -> &Environment {
        &self.env
    }

    /// Number of live slots.
    ///
    /// This is the `gb_variables_count()` intrinsic.
    #[must_use]
    pub const fn live_slot_count(&self) -> usize {
        self.arena.live_slot_count()
    }

    /// `var name = init;` or `var name;`
    ///
    /// Always creates a slot for the binding, except that a container
    /// literal initializer hands over the slot allocated for it.
    /// Redeclaring a name rebinds it to the new slot; without an initializer
    /// the new slot starts with the current value.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] if evaluating the initializer fails or the
    /// arena is exhausted.
    pub fn declare(&mut self, name: &str, init: Option<&Expr>) -> Result<SlotId, RuntimeError> {
        let initializer = match (init, self.env.lookup(name)) {
            (Some(expr), _) => self.eval(expr)?,
            (None, Some(previous)) => Evaluated::Alias(previous),
            (None, None) => Evaluated::Fresh(Value::Undefined),
        };

        let slot = self.arena.declare_binding(initializer)?;
        self.env.bind(name, slot);
        debug!(name, slot = %slot, live = self.live_slot_count(), "binding declared");
        Ok(slot)
    }

    /// `target = value;`
    ///
    /// Assigning to a binding replaces the value in its slot. Assigning to
    /// a property follows [`Arena::set_property`]. The target's base and key
    /// are evaluated before the value.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidAssignmentTarget`] for targets other
    /// than identifiers and member expressions, and
    /// [`RuntimeError::UndeclaredBinding`] for unknown names.
    pub fn assign(&mut self, target: &Expr, value: &Expr) -> Result<(), RuntimeError> {
        match target {
            Expr::Ident(name) => {
                let slot = self.lookup(name)?;
                let evaluated = self.eval(value)?;
                let value = self.arena.resolve(&evaluated)?;
                debug!(name = &**name, slot = %slot, "binding assigned");
                self.arena.set_value(slot, value)?;
            }
            Expr::Member { object, key } => {
                let depth = self.temporaries.len();
                let result = self.assign_property(object, key, value);
                self.temporaries.truncate(depth);
                result?;
            }
            _ => return Err(RuntimeError::InvalidAssignmentTarget),
        }
        Ok(())
    }

    /// Remove a binding.
    ///
    /// Returns the slot the name was bound to. With `collect_on_remove` set,
    /// a collection runs afterwards.
    pub fn remove_binding(&mut self, name: &str) -> Option<SlotId> {
        let slot = self.env.remove(name)?;
        debug!(name, slot = %slot, "binding removed");
        if self.config.collect_on_remove {
            self.collect_garbage();
        }
        Some(slot)
    }

    /// Free every slot not reachable from a binding or from a partially
    /// evaluated expression.
    ///
    /// Does nothing unless the arena runs mark-and-sweep reclamation.
    pub fn collect_garbage(&mut self) -> CollectionStats {
        let roots: Vec<Root> = self
            .env
            .slots()
            .map(Root::Slot)
            .chain(self.temporaries.iter().copied())
            .collect();
        self.arena.collect_from(roots)
    }

    /// Get the current value of a binding.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UndeclaredBinding`] for unknown names.
    pub fn value_of(&self, name: &str) -> Result<Value, RuntimeError> {
        let slot = self.lookup(name)?;
        Ok(self.arena.value(slot)?.clone())
    }

    /// Render a value with container contents.
    #[must_use]
    pub fn display(&self, value: &Value) -> String {
        self.arena.display(value)
    }

    fn assign_property(
        &mut self,
        object: &Expr,
        key: &Key,
        value: &Expr,
    ) -> Result<(), RuntimeError> {
        let base = self.eval_value(object)?;
        self.hold_value(&base);
        let key = self.property_key(key)?;
        check_base(&base, &key)?;
        let evaluated = self.eval(value)?;
        debug!(key = &*key, "property assigned");
        self.arena.set_property(&base, &key, evaluated)?;
        Ok(())
    }

    /// Keep the slot behind an intermediate result alive until the
    /// enclosing evaluation finishes.
    fn hold(&mut self, evaluated: &Evaluated) {
        match evaluated {
            Evaluated::Fresh(value) => self.hold_value(value),
            Evaluated::Alias(slot) | Evaluated::Minted(slot) => {
                self.temporaries.push(Root::Slot(*slot));
            }
        }
    }

    fn hold_value(&mut self, value: &Value) {
        if let Some(handle) = value.handle() {
            self.temporaries.push(Root::Handle(handle));
        }
    }

    fn lookup(&self, name: &str) -> Result<SlotId, RuntimeError> {
        self.env
            .lookup(name)
            .ok_or_else(|| RuntimeError::UndeclaredBinding(Arc::from(name)))
    }

    fn property_key(&mut self, key: &Key) -> Result<Arc<str>, RuntimeError> {
        match key {
            Key::Static(name) => Ok(Arc::clone(name)),
            Key::Computed(expr) => Ok(Arc::from(self.eval_value(expr)?.to_text())),
        }
    }
}

fn check_base(base: &Value, key: &str) -> Result<(), RuntimeError> {
    if base.is_nullish() {
        return Err(RuntimeError::PropertyOfNullish {
            property: key.to_string(),
            base: base.type_name(),
        });
    }
    Ok(())
}
