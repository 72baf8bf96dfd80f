//! Entity identification system.
//!
//! Every card instance in a game (including each player's homebase) lives
//! in the `GameState` object arena and is addressed by an `EntityId`.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially as objects are created at game setup:
//! - homebases first, one per player
//! - then deck entries in deck-list order
//!
//! Objects are never removed from the arena. A card that dies stays alive
//! in its owner's discard pile with the same id, so an id is stable for the
//! whole game.
//!
//! ```
//! use convergence::core::EntityId;
//!
//! let first = EntityId::new(0);
//! assert_eq!(first.index(), 0);
//! assert_eq!(format!("{}", first), "Entity(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a game object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this object in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
