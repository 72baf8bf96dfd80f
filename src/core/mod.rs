//! Core engine types: entities, players, mana, configuration, intents, state.
//!
//! These are the building blocks every other module works with. A game is
//! configured through `GameConfig` and lives in one `GameState`.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod mana;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Intent};
pub use config::{GameConfig, PlayerConfig, ZoneConfig, ZoneKind, ZoneMask, ZoneRef};
pub use entity::EntityId;
pub use error::{LoadError, LoadResult};
pub use mana::{ManaAmount, ManaColor, ManaParseError, MANA_SLOTS};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
