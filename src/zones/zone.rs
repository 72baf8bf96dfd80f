//! A single ordered zone.
//!
//! Order is position: index `i` in `contents` is visual slot `i`. The zone
//! only stores ids; the matching `slot` field on each object is renumbered
//! by the game state after every structural change.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameRng, PlayerId, ZoneConfig, ZoneKind, ZoneRef};

/// Ordered container of object ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    owner: PlayerId,
    kind: ZoneKind,
    in_play: bool,
    hidden: bool,
    contents: Vec<EntityId>,
    /// Ids added during the current tick.
    newly_added: Vec<EntityId>,
}

impl Zone {
    #[must_use]
    pub fn new(owner: PlayerId, kind: ZoneKind, config: &ZoneConfig) -> Self {
        Self {
            owner,
            kind,
            in_play: config.in_play,
            hidden: config.is_hidden,
            contents: Vec::new(),
            newly_added: Vec::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn zone_ref(&self) -> ZoneRef {
        ZoneRef::new(self.owner, self.kind)
    }

    /// Residents are permanents.
    #[must_use]
    pub fn in_play(&self) -> bool {
        self.in_play
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn contents(&self) -> &[EntityId] {
        &self.contents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.contents.contains(&id)
    }

    /// Append; returns the new slot.
    pub fn push(&mut self, id: EntityId) -> usize {
        self.contents.push(id);
        self.newly_added.push(id);
        self.contents.len() - 1
    }

    /// Detach; returns whether `id` was present.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.contents.iter().position(|&c| c == id) {
            Some(index) => {
                self.contents.remove(index);
                true
            }
            None => false,
        }
    }

    /// The last entry, which is the top of a library.
    #[must_use]
    pub fn top(&self) -> Option<EntityId> {
        self.contents.last().copied()
    }

    /// Uniform permutation of the contents.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.contents);
    }

    /// Ids appended since the last `clear_newly_added`, oldest first.
    #[must_use]
    pub fn newly_added(&self) -> &[EntityId] {
        &self.newly_added
    }

    pub fn clear_newly_added(&mut self) {
        self.newly_added.clear();
    }
}
