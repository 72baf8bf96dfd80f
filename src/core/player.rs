//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Space Convergence is a two-player game: `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Life total, resource pool and land-drop bookkeeping for one side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::entity::EntityId;
use super::mana::ManaAmount;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// ```
    /// use convergence::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use convergence::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i32> = PlayerMap::new(|_| 20);
/// life[PlayerId::new(1)] = 15;
/// assert_eq!(life[PlayerId::new(0)], 20);
/// assert_eq!(life[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Build from exactly one value per player, in player order.
    ///
    /// Returns `None` when the iterator does not yield exactly two values.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let data: Vec<T> = values.into_iter().collect();
        (data.len() == PLAYER_COUNT).then_some(Self { data })
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Mutable state for one side of the table.
///
/// Zones are owned by the `ZoneManager`; a player only keeps the id of its
/// homebase, the pseudo-permanent that represents it for targeting and
/// damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub life: i32,
    /// Recomputed at the start of each of this player's turns.
    pub resources: ManaAmount,
    pub land_drops_used: u32,
    pub land_drops_per_turn: u32,
    pub homebase: EntityId,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, life: i32, homebase: EntityId, land_drops_per_turn: u32) -> Self {
        Self {
            id,
            life,
            resources: ManaAmount::default(),
            land_drops_used: 0,
            land_drops_per_turn,
            homebase,
        }
    }

    /// Whether another resource card may be played this turn.
    #[must_use]
    pub fn has_land_drop(&self) -> bool {
        self.land_drops_used < self.land_drops_per_turn
    }

    /// Consume one land drop. Returns false if the limit is already used.
    pub fn use_land_drop(&mut self) -> bool {
        if !self.has_land_drop() {
            return false;
        }
        self.land_drops_used += 1;
        true
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life <= 0
    }
}
