//! Deferred zone changes.
//!
//! Mutators never move an object themselves. They push a `ZoneChange` and
//! the game state applies the queue in FIFO order at its next flush, so a
//! resolving command never observes a half-moved world.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, ZoneRef};

/// A pending move of `object` into `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneChange {
    pub object: EntityId,
    pub destination: ZoneRef,
}

/// Presentation hint emitted for every applied zone change.
///
/// Objects entering a hidden zone are detached from the view; everything
/// else is attached at its new slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneNotice {
    Attach { object: EntityId, zone: ZoneRef },
    Detach { object: EntityId, zone: ZoneRef },
}

impl ZoneNotice {
    #[must_use]
    pub fn object(&self) -> EntityId {
        match self {
            ZoneNotice::Attach { object, .. } | ZoneNotice::Detach { object, .. } => *object,
        }
    }
}

/// FIFO queue of pending zone changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZoneChangeQueue {
    pending: VecDeque<ZoneChange>,
}

impl ZoneChangeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: EntityId, destination: ZoneRef) {
        self.pending.push_back(ZoneChange { object, destination });
    }

    pub fn pop(&mut self) -> Option<ZoneChange> {
        self.pending.pop_front()
    }

    /// Whether `object` has a move waiting.
    #[must_use]
    pub fn is_pending(&self, object: EntityId) -> bool {
        self.pending.iter().any(|c| c.object == object)
    }

    /// Where `object` ends up once the queue is flushed, if it has a move waiting.
    #[must_use]
    pub fn final_destination(&self, object: EntityId) -> Option<ZoneRef> {
        self.pending
            .iter()
            .rev()
            .find(|c| c.object == object)
            .map(|c| c.destination)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneChange> {
        self.pending.iter()
    }
}
