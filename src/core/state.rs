//! Game state: the session object that owns one game.
//!
//! ## GameState
//!
//! Everything a game needs lives here, so independent games never share
//! anything:
//! - The object arena (`GameObject`s indexed by `EntityId`)
//! - Players, zones and the card registry
//! - The in-play list and trigger registry
//! - The zone-change queue and the response-window countdown
//! - RNG and the intent history
//!
//! The rules themselves are `impl GameState` blocks in the `rules` module.

use std::sync::Arc;

use im::Vector;
use log::info;

use super::action::{ActionRecord, Intent};
use super::config::{GameConfig, PlayerConfig, ZoneKind, ZoneRef};
use super::entity::EntityId;
use super::error::{LoadError, LoadResult};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardRegistry, CardSpec, GameObject};
use crate::effects::{ControlEffect, UpgradeEffect};
use crate::triggers::TriggerRegistry;
use crate::zones::{Zone, ZoneChangeQueue, ZoneManager, ZoneNotice};

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Arena; never shrinks.
    pub(crate) objects: Vec<GameObject>,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) zones: ZoneManager,
    pub(crate) cards: CardRegistry,
    pub(crate) triggers: TriggerRegistry,

    /// Objects currently in an in-play zone, in order of arrival.
    pub(crate) in_play: Vec<EntityId>,
    pub(crate) queue: ZoneChangeQueue,
    pub(crate) notices: Vec<ZoneNotice>,

    pub(crate) active_player: PlayerId,
    /// Ticks left in the response window, if one is running.
    pub(crate) response_timer: Option<u32>,
    pub(crate) response_window_ticks: u32,
    pub(crate) opening_hand: u32,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,
    /// Intent sequence within the turn.
    pub(crate) action_sequence: u32,
    pub(crate) trigger_depth: u32,

    /// Deterministic RNG.
    pub rng: GameRng,

    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Build a game from a loaded configuration.
    ///
    /// Creates both homebases and every deck card, places them (homebases in
    /// Home, decks in the Laboratory) and flushes. Call `start` to shuffle
    /// and deal.
    pub fn new(config: &GameConfig) -> LoadResult<Self> {
        config.validate()?;
        let player_configs: PlayerMap<&PlayerConfig> = PlayerMap::from_values(config.players.iter())
            .ok_or(LoadError::PlayerCount {
                found: config.players.len(),
            })?;

        let mut state = Self {
            objects: Vec::new(),
            players: PlayerMap::new(|id| Player::new(id, 0, EntityId(0), config.land_drops_per_turn)),
            zones: ZoneManager::new(&player_configs),
            cards: CardRegistry::from_table(&config.cards),
            triggers: TriggerRegistry::new(),
            in_play: Vec::new(),
            queue: ZoneChangeQueue::new(),
            notices: Vec::new(),
            active_player: PlayerId::new(0),
            response_timer: None,
            response_window_ticks: config.response_window_ticks,
            opening_hand: config.opening_hand,
            turn_number: 1,
            action_sequence: 0,
            trigger_depth: 0,
            rng: GameRng::new(config.seed),
            history: Vector::new(),
        };

        for player in PlayerId::all() {
            let player_config = player_configs[player];
            let mut spec = player_config.homebase.clone();
            spec.name = format!("Homebase {}", player.index());
            let homebase = state.create_object(Arc::new(spec), player, ZoneKind::Home);
            state.players[player] = Player::new(
                player,
                player_config.starting_life,
                homebase,
                config.land_drops_per_turn,
            );
        }

        for (player, deck) in PlayerId::all().zip(&config.decks) {
            for name in deck {
                let spec = state.cards.get(name).cloned().ok_or_else(|| LoadError::UnknownCard {
                    player: player.index(),
                    name: name.clone(),
                })?;
                state.create_object(spec, player, ZoneKind::Laboratory);
            }
        }

        state.flush_zone_changes();
        info!(
            "game created: {} objects, {} card names, seed {}",
            state.objects.len(),
            state.cards.len(),
            state.rng.seed()
        );
        Ok(state)
    }

    /// Add an object to the arena and queue it into `owner`'s `kind` zone.
    pub(crate) fn create_object(&mut self, spec: Arc<CardSpec>, owner: PlayerId, kind: ZoneKind) -> EntityId {
        let id = EntityId::new(self.objects.len() as u32);
        self.objects.push(GameObject::new(id, spec, owner));
        self.queue.push(id, ZoneRef::new(owner, kind));
        id
    }

    /// Create a new instance of a registered card, queued into a zone.
    ///
    /// Returns `None` for an unknown card name. The object is placed at the
    /// next flush.
    pub fn create_card(&mut self, name: &str, owner: PlayerId, kind: ZoneKind) -> Option<EntityId> {
        let spec = Arc::clone(self.cards.get(name)?);
        Some(self.create_object(spec, owner, kind))
    }

    // === Objects ===

    #[must_use]
    pub fn object(&self, id: EntityId) -> Option<&GameObject> {
        self.objects.get(id.index())
    }

    pub fn object_mut(&mut self, id: EntityId) -> Option<&mut GameObject> {
        self.objects.get_mut(id.index())
    }

    #[must_use]
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Arena access for ids the engine produced itself.
    pub(crate) fn obj(&self, id: EntityId) -> &GameObject {
        &self.objects[id.index()]
    }

    pub(crate) fn obj_mut(&mut self, id: EntityId) -> &mut GameObject {
        &mut self.objects[id.index()]
    }

    #[must_use]
    pub fn in_play(&self) -> &[EntityId] {
        &self.in_play
    }

    #[must_use]
    pub fn is_in_play(&self, id: EntityId) -> bool {
        self.in_play.contains(&id)
    }

    /// Apply a control effect. Homebases cannot change hands.
    pub fn add_control_effect(&mut self, target: EntityId, effect: ControlEffect) {
        if let Some(obj) = self.object_mut(target) {
            if !obj.is_homebase() {
                obj.add_control_effect(effect);
            }
        }
    }

    pub fn add_upgrade_effect(&mut self, target: EntityId, effect: UpgradeEffect) {
        if let Some(obj) = self.object_mut(target) {
            obj.add_upgrade_effect(effect);
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// The object standing in for `player`.
    #[must_use]
    pub fn homebase(&self, player: PlayerId) -> EntityId {
        self.players[player].homebase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    // === Zones ===

    #[must_use]
    pub fn zone(&self, zone: ZoneRef) -> &Zone {
        self.zones.get(zone)
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn pending_zone_changes(&self) -> &ZoneChangeQueue {
        &self.queue
    }

    /// Take the presentation notices produced by flushes so far.
    pub fn drain_notices(&mut self) -> Vec<ZoneNotice> {
        std::mem::take(&mut self.notices)
    }

    // === Registries ===

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    // === Turn progression ===

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Ticks left before the next turn begins, while a response window runs.
    #[must_use]
    pub fn response_timer(&self) -> Option<u32> {
        self.response_timer
    }

    #[must_use]
    pub fn in_response_window(&self) -> bool {
        self.response_timer.is_some()
    }

    // === Action History ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn record_action(&mut self, player: PlayerId, intent: Intent) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, intent, self.turn_number, sequence));
    }
}
