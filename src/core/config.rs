//! Game configuration types.
//!
//! Games are configured from a JSON document:
//! - `ZoneConfig`: layout and flags for one zone
//! - `PlayerConfig`: a player's seven zones, homebase card and starting life
//! - `GameConfig`: card table, both players, deck lists and session tuning
//!
//! Everything here is trusted content. A malformed document fails to load
//! with a `LoadError`; there is no partial load.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{LoadError, LoadResult};
use super::player::{PlayerId, PLAYER_COUNT};
use crate::cards::CardSpec;

/// The seven zones every player has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneKind {
    Home,
    Resources,
    Attack,
    Defense,
    Hand,
    DiscardPile,
    /// The draw pile.
    Laboratory,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 7] = [
        ZoneKind::Home,
        ZoneKind::Resources,
        ZoneKind::Attack,
        ZoneKind::Defense,
        ZoneKind::Hand,
        ZoneKind::DiscardPile,
        ZoneKind::Laboratory,
    ];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ZoneKind::Home => 0,
            ZoneKind::Resources => 1,
            ZoneKind::Attack => 2,
            ZoneKind::Defense => 3,
            ZoneKind::Hand => 4,
            ZoneKind::DiscardPile => 5,
            ZoneKind::Laboratory => 6,
        }
    }

    #[must_use]
    pub const fn mask(self) -> ZoneMask {
        ZoneMask(1 << self.index())
    }
}

/// Set of zone kinds, combinable with `|` and tested with `contains`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ZoneKind>", into = "Vec<ZoneKind>")]
pub struct ZoneMask(u8);

impl ZoneMask {
    pub const NONE: Self = Self(0);
    pub const HOME: Self = ZoneKind::Home.mask();
    pub const RESOURCES: Self = ZoneKind::Resources.mask();
    pub const ATTACK: Self = ZoneKind::Attack.mask();
    pub const DEFENSE: Self = ZoneKind::Defense.mask();
    pub const HAND: Self = ZoneKind::Hand.mask();
    pub const DISCARD_PILE: Self = ZoneKind::DiscardPile.mask();
    pub const LABORATORY: Self = ZoneKind::Laboratory.mask();

    /// Zones whose residents are permanents: Home | Defense | Attack.
    pub const PLAY: Self = Self(Self::HOME.0 | Self::DEFENSE.0 | Self::ATTACK.0);

    #[must_use]
    pub const fn contains(self, kind: ZoneKind) -> bool {
        self.0 & kind.mask().0 != 0
    }

    #[must_use]
    pub const fn intersects(self, other: ZoneMask) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ZoneMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Vec<ZoneKind>> for ZoneMask {
    fn from(kinds: Vec<ZoneKind>) -> Self {
        kinds.into_iter().fold(Self::NONE, |mask, k| mask | k.mask())
    }
}

impl From<ZoneMask> for Vec<ZoneKind> {
    fn from(mask: ZoneMask) -> Self {
        ZoneKind::ALL.into_iter().filter(|k| mask.contains(*k)).collect()
    }
}

/// Address of one zone: its owner and kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneRef {
    pub player: PlayerId,
    pub kind: ZoneKind,
}

impl ZoneRef {
    #[must_use]
    pub const fn new(player: PlayerId, kind: ZoneKind) -> Self {
        Self { player, kind }
    }
}

impl std::fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:?}", self.player, self.kind)
    }
}

/// Configuration for a single zone.
///
/// Only `in_play` and `is_hidden` affect the rules. The vectors are layout
/// data for the presentation layer and default to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    #[serde(default)]
    pub base_pos: [f32; 2],
    #[serde(default)]
    pub slot_offset: [f32; 2],
    #[serde(default)]
    pub top_left: [f32; 2],
    #[serde(default)]
    pub bottom_right: [f32; 2],

    /// Residents are permanents: they keep combat state and can trigger.
    pub in_play: bool,

    /// Residents are not shown; the presentation layer detaches them.
    pub is_hidden: bool,
}

impl ZoneConfig {
    /// A zone with no layout data.
    #[must_use]
    pub fn new(in_play: bool, is_hidden: bool) -> Self {
        Self {
            base_pos: [0.0; 2],
            slot_offset: [0.0; 2],
            top_left: [0.0; 2],
            bottom_right: [0.0; 2],
            in_play,
            is_hidden,
        }
    }
}

/// One player's side of the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub home: ZoneConfig,
    pub resources: ZoneConfig,
    pub attack: ZoneConfig,
    pub defense: ZoneConfig,
    pub hand: ZoneConfig,
    pub discard_pile: ZoneConfig,
    pub laboratory: ZoneConfig,

    /// The card used as this player's own permanent.
    pub homebase: CardSpec,

    pub starting_life: i32,

    /// Presentation only.
    #[serde(default)]
    pub face_left: bool,
}

impl PlayerConfig {
    /// Zone configuration for a kind.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &ZoneConfig {
        match kind {
            ZoneKind::Home => &self.home,
            ZoneKind::Resources => &self.resources,
            ZoneKind::Attack => &self.attack,
            ZoneKind::Defense => &self.defense,
            ZoneKind::Hand => &self.hand,
            ZoneKind::DiscardPile => &self.discard_pile,
            ZoneKind::Laboratory => &self.laboratory,
        }
    }
}

fn default_response_window_ticks() -> u32 {
    60
}

fn default_opening_hand() -> u32 {
    5
}

fn default_land_drops() -> u32 {
    1
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Card table keyed by card name.
    pub cards: FxHashMap<String, CardSpec>,

    /// Exactly two entries.
    pub players: Vec<PlayerConfig>,

    /// One list of card names per player.
    pub decks: Vec<Vec<String>>,

    /// Length of the response window in update ticks.
    #[serde(default = "default_response_window_ticks")]
    pub response_window_ticks: u32,

    #[serde(default = "default_opening_hand")]
    pub opening_hand: u32,

    #[serde(default = "default_land_drops")]
    pub land_drops_per_turn: u32,

    #[serde(default)]
    pub seed: u64,
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> LoadResult<Self> {
        let config: GameConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check shape constraints serde cannot express.
    pub fn validate(&self) -> LoadResult<()> {
        if self.players.len() != PLAYER_COUNT {
            return Err(LoadError::PlayerCount { found: self.players.len() });
        }
        if self.decks.len() != PLAYER_COUNT {
            return Err(LoadError::DeckCount { found: self.decks.len() });
        }
        for (player, deck) in self.decks.iter().enumerate() {
            if let Some(name) = deck.iter().find(|n| !self.cards.contains_key(*n)) {
                return Err(LoadError::UnknownCard {
                    player,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}
