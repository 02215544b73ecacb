// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mark-and-sweep reclamation.
//!
//! Marking starts from the given root slots and follows two kinds of edges:
//! the handle inside a compound value leads to the body owned by that slot,
//! and a body leads to its member slots. A body is only reachable through a
//! handle, so the body of a container slot that was overwritten with another
//! value is dropped along with every member nothing else refers to.
//! Everything left unmarked is freed and its id goes onto the free list.
//! Cycles terminate because a slot is marked and traced at most once.

use super::Arena;
use crate::Reclamation;
use brook_core::SlotId;
use tracing::{debug, trace};

/// A reference the collector starts from or follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Root {
    /// The value stored in a slot.
    Slot(SlotId),
    /// A compound value's handle: the body owned by the slot, together with
    /// the slot itself.
    Handle(SlotId),
}

impl Root {
    const fn slot(self) -> SlotId {
        match self {
            Self::Slot(id) | Self::Handle(id) => id,
        }
    }
}

/// Statistics from one collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectionStats {
    /// Slots found reachable.
    pub marked: usize,
    /// Slots freed.
    pub freed: usize,
}

impl Arena {
    /// Free every slot not reachable from the values stored in `roots`.
    ///
    /// Does nothing under [`Reclamation::Disabled`]. Roots that are not live
    /// are skipped.
    pub fn collect(&mut self, roots: impl IntoIterator<Item = SlotId>) -> CollectionStats {
        self.collect_from(roots.into_iter().map(Root::Slot))
    }

    /// Free every slot not reachable from `roots`.
    ///
    /// Like [`Arena::collect`], but roots may also be handles of compound
    /// values that are not stored in any slot.
    pub fn collect_from(&mut self, roots: impl IntoIterator<Item = Root>) -> CollectionStats {
        if self.config.reclamation == Reclamation::Disabled {
            trace!("reclamation disabled, collection skipped");
            return CollectionStats::default();
        }

        let mut marked = vec![false; self.slots.len()];
        let mut traced = vec![false; self.slots.len()];
        let mut work: Vec<Root> = roots.into_iter().collect();
        let mut marked_count = 0;

        while let Some(root) = work.pop() {
            let id = root.slot();
            let (Some(Some(slot)), Some(seen)) =
                (self.slots.get(id.index()), marked.get_mut(id.index()))
            else {
                continue;
            };
            if !*seen {
                *seen = true;
                marked_count += 1;
                if let Some(handle) = slot.value.handle() {
                    work.push(Root::Handle(handle));
                }
            }

            let Root::Handle(_) = root else {
                continue;
            };
            let (Some(body), Some(done)) = (&slot.body, traced.get_mut(id.index())) else {
                continue;
            };
            if !*done {
                *done = true;
                body.for_each_member(|member| work.push(Root::Slot(member)));
            }
        }

        let mut freed = 0;
        for (index, entry) in self.slots.iter_mut().enumerate() {
            let Some(slot) = entry.as_mut() else {
                continue;
            };
            if !marked[index] {
                *entry = None;
                self.free.push(SlotId::new(index as u32));
                freed += 1;
            } else if !traced[index] && slot.body.is_some() {
                // Kept for its value only; no handle reaches the body
                trace!(slot = index, "unreachable body dropped");
                slot.body = None;
            }
        }

        self.live -= freed;
        self.collections += 1;
        debug!(marked = marked_count, freed, live = self.live, "collection finished");

        CollectionStats {
            marked: marked_count,
            freed,
        }
    }
}
