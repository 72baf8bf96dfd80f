//! Turn sequencing and the intent entry point.
//!
//! A turn ends in two steps. `end_turn_start_timer` sweeps wounded objects,
//! hands the active pointer to the opponent and opens a response window.
//! When `update` has counted the window down, `end_turn_timer_expired`
//! sweeps again and begins the new active player's turn: resource refresh,
//! draw, damage from its untapped attackers, untap. Every in-play object
//! then ticks its modifiers.
//!
//! Attackers therefore deal their damage at their controller's next turn
//! boundary, after the opponent has had a full turn to block them.

use log::{debug, info};

use crate::core::{
    ActionRecord, EntityId, GameState, Intent, ManaAmount, PlayerId, ZoneKind, ZoneMask, ZoneRef,
};

use super::{reject, GameResult};

impl GameState {
    /// Shuffle both libraries, deal opening hands and begin player 0's turn.
    pub fn start(&mut self) {
        info!(
            "game start: seed {}, opening hand {}",
            self.rng.seed(),
            self.opening_hand
        );
        for player in PlayerId::all() {
            let library = ZoneRef::new(player, ZoneKind::Laboratory);
            self.zones.get_mut(library).shuffle(&mut self.rng);
            self.renumber(library);
        }
        for player in PlayerId::all() {
            for _ in 0..self.opening_hand {
                self.draw(player);
            }
        }
        self.flush_zone_changes();

        self.begin_my_turn(self.active_player);
        self.flush_zone_changes();
    }

    /// One tick: flush queued moves, then count down the response window.
    ///
    /// Each zone's `newly_added` list afterwards holds what this tick placed.
    pub fn update(&mut self) {
        self.zones.clear_newly_added();
        self.flush_zone_changes();
        let Some(ticks) = self.response_timer else {
            return;
        };
        match ticks.saturating_sub(1) {
            0 => {
                self.response_timer = None;
                self.end_turn_timer_expired();
            }
            remaining => self.response_timer = Some(remaining),
        }
    }

    /// Apply an intent from `player`.
    ///
    /// Every intent is recorded, accepted or not. Returns whether it was
    /// accepted.
    pub fn apply(&mut self, player: PlayerId, intent: Intent) -> bool {
        self.record_action(player, intent.clone());
        if let Some(result) = self.result() {
            return reject(format_args!("game is over: {result:?}"));
        }

        match intent {
            Intent::Play { card } => self.play(player, card),
            Intent::PlayOn { card, target } => self.play_on(player, card, target),
            Intent::UseOn { card, target } => self.use_on(player, card, target),
            Intent::Activate { card, ability, target } => self.activate(player, card, ability, target),
            Intent::EnterAttack { card } => self.enter_attack(player, card),
            Intent::WithdrawAttack { card } => self.withdraw_attack(player, card),
            Intent::EndTurn => self.end_turn_start_timer(player),
        }
    }

    /// End `player`'s turn and open the response window.
    pub fn end_turn_start_timer(&mut self, player: PlayerId) -> bool {
        if player != self.active_player {
            return reject(format_args!("{player} ended a turn that is not theirs"));
        }
        if self.response_timer.is_some() {
            return reject(format_args!("response window already running"));
        }

        self.sweep_wounds();
        self.flush_zone_changes();
        self.active_player = player.opponent();
        self.response_timer = Some(self.response_window_ticks);
        info!(
            "{player} ends turn {}; response window of {} ticks",
            self.turn_number, self.response_window_ticks
        );
        true
    }

    /// Close the response window and begin the active player's turn.
    pub fn end_turn_timer_expired(&mut self) {
        self.sweep_wounds();
        self.flush_zone_changes();

        self.turn_number += 1;
        self.action_sequence = 0;
        let active = self.active_player;
        self.begin_my_turn(active);
        self.begin_any_turn(active);
        self.flush_zone_changes();
        info!("turn {} begins for {active}", self.turn_number);
    }

    fn begin_my_turn(&mut self, player: PlayerId) {
        self.players[player].land_drops_used = 0;
        self.refresh_resources(player);
        self.draw(player);

        let opponent_base = self.homebase(player.opponent());
        let controlled: Vec<EntityId> = self
            .in_play
            .iter()
            .copied()
            .filter(|&id| self.obj(id).controller == player)
            .collect();
        for id in controlled {
            let obj = self.obj(id);
            if obj.is_attacking() && !obj.tapped {
                let power = obj.power;
                self.deal_damage(id, opponent_base, power, true);
            }
            let obj = self.obj_mut(id);
            obj.tapped = false;
            obj.damage = 0;
        }
    }

    fn begin_any_turn(&mut self, active: PlayerId) {
        let Self { objects, in_play, .. } = self;
        for id in in_play.iter() {
            objects[id.index()].tick_effects(active, |source| in_play.contains(&source));
        }
    }

    /// Set resources to what `player`'s permanents and resource cards produce.
    fn refresh_resources(&mut self, player: PlayerId) {
        let mut total = ManaAmount::default();
        for obj in &self.objects {
            if obj.controller == player && obj.in_zones(ZoneMask::PLAY | ZoneMask::RESOURCES) {
                if let Some(produces) = &obj.spec.produces {
                    total.add(produces);
                }
            }
        }
        debug!("{player} refreshes resources to {total}");
        self.players[player].resources = total;
    }

    /// Send lethally wounded permanents to the discard pile.
    fn sweep_wounds(&mut self) {
        let wounded: Vec<EntityId> = self
            .in_play
            .iter()
            .copied()
            .filter(|&id| {
                let obj = self.obj(id);
                !obj.is_homebase() && !obj.dead && obj.is_lethally_wounded()
            })
            .collect();
        // Queued behind any pending move, so the discard pile is where it ends.
        for id in wounded {
            self.obj_mut(id).dead = true;
            debug!("{} dies", self.obj(id));
            let owner = self.obj(id).owner;
            let pile = ZoneRef::new(owner, ZoneKind::DiscardPile);
            if self.queue.final_destination(id) != Some(pile) {
                self.move_zone(id, pile);
            }
        }
    }

    /// Queue the top card of `player`'s library into their hand.
    ///
    /// Cards already on their way somewhere are skipped. Returns `None` when
    /// the library is empty.
    pub fn draw(&mut self, player: PlayerId) -> Option<EntityId> {
        let library = self.zones.get(ZoneRef::new(player, ZoneKind::Laboratory));
        let Some(card) = library
            .contents()
            .iter()
            .rev()
            .copied()
            .find(|&id| !self.queue.is_pending(id))
        else {
            debug!("{player} draws from an empty library");
            return None;
        };
        self.move_zone(card, ZoneRef::new(player, ZoneKind::Hand));
        Some(card)
    }

    /// The outcome, once a player's life has reached zero.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let defeated: Vec<PlayerId> = PlayerId::all()
            .filter(|&player| self.players[player].is_defeated())
            .collect();
        match defeated.as_slice() {
            [] => None,
            [loser] => Some(GameResult::Winner(loser.opponent())),
            _ => Some(GameResult::Draw),
        }
    }

    /// Intents of the current turn, oldest first.
    pub fn turn_history(&self) -> impl Iterator<Item = &ActionRecord> {
        let turn = self.turn_number;
        self.history.iter().filter(move |record| record.turn == turn)
    }
}
