//! # Space Convergence
//!
//! Rules engine for a two-player trading card game.
//!
//! ## Design Principles
//!
//! 1. **Content-Driven**: Cards, zones and players are loaded from JSON.
//!    Abilities are expression trees (`Selector`, `Calculation`, `Command`)
//!    rather than code.
//!
//! 2. **One Session Object**: Everything a game touches lives in its
//!    `GameState`. There are no globals, so games and tests run side by
//!    side.
//!
//! 3. **Deferred Moves**: Rules never move an object directly. They queue a
//!    zone change, and a single flush applies queued moves in order.
//!
//! ## Architecture
//!
//! - **Arena**: `GameObject`s live in one vector indexed by `EntityId`.
//!   Zones, players and modifiers refer to objects by id.
//!
//! - **Tick Loop**: The presentation layer calls `GameState::update` once a
//!   frame and feeds player input through `GameState::apply`.
//!
//! - **Soft Failures**: Illegal intents are logged and ignored. Only loading
//!   can fail with an error.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, mana, configuration, intents, state
//! - `zones`: Zones and the zone-change queue
//! - `cards`: Card specs, instances and registry
//! - `effects`: The ability DSL and timed modifiers
//! - `triggers`: Event subscriptions
//! - `rules`: Playing, combat, abilities and turn sequencing
//!
//! ## Example
//!
//! ```
//! use convergence::{GameConfig, GameState, Intent, PlayerId};
//! use serde_json::json;
//!
//! let zone = |in_play: bool, hidden: bool| json!({"inPlay": in_play, "isHidden": hidden});
//! let player = json!({
//!     "home": zone(true, false), "resources": zone(false, false),
//!     "attack": zone(true, false), "defense": zone(true, false),
//!     "hand": zone(false, false), "discardPile": zone(false, false),
//!     "laboratory": zone(false, true),
//!     "homebase": {"art": "base", "cardType": ["Homebase"]},
//!     "startingLife": 20
//! });
//!
//! let config = GameConfig::from_value(json!({
//!     "cards": {"Ore": {"art": "ore", "cardType": ["Resource"], "produces": "R"}},
//!     "players": [player.clone(), player],
//!     "decks": [["Ore", "Ore"], ["Ore"]],
//!     "openingHand": 1
//! }))
//! .unwrap();
//!
//! let mut game = GameState::new(&config).unwrap();
//! game.start();
//! assert_eq!(game.player(PlayerId::new(0)).life, 20);
//!
//! game.apply(PlayerId::new(0), Intent::EndTurn);
//! assert!(game.in_response_window());
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod triggers;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, EntityId, GameConfig, GameRng, GameState, Intent, LoadError, LoadResult,
    ManaAmount, Player, PlayerConfig, PlayerId, PlayerMap, ZoneConfig, ZoneKind, ZoneMask, ZoneRef,
};

pub use crate::zones::{Zone, ZoneManager, ZoneNotice};

pub use crate::cards::{
    ActivatedAbilitySpec, AltCost, AltCostKind, CardRegistry, CardSpec, CardType, CardTypes,
    GameObject, Keyword, Keywords,
};

pub use crate::rules::{GameResult, MAX_TRIGGER_DEPTH};

pub use crate::effects::{
    Calculation, Command, CompareOp, Duration, EffectContext, EffectResolver, Selector,
};

pub use crate::triggers::{TriggerData, TriggerRegistry, TriggerSpec, TriggerType};
