//! Playing cards from hand and moving creatures in and out of the attack.
//!
//! Where a card goes when played:
//! - creatures to Defense, tapped unless they have haste
//! - resources to the Resources zone, using a land drop
//! - actions resolve their effect and go to the discard pile
//! - anything else to Home

use std::sync::Arc;

use log::debug;

use crate::cards::{CardType, Keyword};
use crate::core::{EntityId, GameState, PlayerId, ZoneKind, ZoneRef};
use crate::effects::{EffectContext, EffectResolver};
use crate::triggers::{TriggerData, TriggerType};

use super::reject;

impl GameState {
    /// Play an untargeted card from `player`'s hand.
    pub fn play(&mut self, player: PlayerId, card: EntityId) -> bool {
        if player != self.active_player {
            return reject(format_args!("{player} played {card} out of turn"));
        }
        let Some(obj) = self.object(card) else {
            return reject(format_args!("no object {card}"));
        };
        if obj.zone != Some(ZoneRef::new(player, ZoneKind::Hand)) {
            return reject(format_args!("{card} is not in {player}'s hand"));
        }
        let spec = Arc::clone(&obj.spec);
        if spec.needs_target() {
            return reject(format_args!("{card} needs a target"));
        }
        let is_resource = spec.is_type(CardType::Resource);
        if is_resource && !self.players[player].has_land_drop() {
            return reject(format_args!("{player} has no land drop left"));
        }
        if !self.players[player].resources.try_spend(spec.cost.as_ref()) {
            return reject(format_args!("{player} cannot pay for {card}"));
        }
        if is_resource {
            self.players[player].use_land_drop();
        }

        let destination = if spec.is_type(CardType::Creature) {
            let obj = self.obj_mut(card);
            obj.tapped = !obj.has_keyword(Keyword::Haste);
            ZoneKind::Defense
        } else if is_resource {
            ZoneKind::Resources
        } else if spec.is_type(CardType::Action) {
            ZoneKind::DiscardPile
        } else {
            ZoneKind::Home
        };

        debug!("{player} plays {}", self.obj(card));
        self.fire_trigger(TriggerType::PlayCard, TriggerData::new(player).with_subject(card));
        if destination == ZoneKind::DiscardPile {
            if let Some(effect) = &spec.effect {
                let mut ctx = EffectContext::new(card, player);
                EffectResolver::run(self, effect, &mut ctx);
            }
        }
        self.move_zone(card, ZoneRef::new(player, destination));
        true
    }

    /// Play a targeted action card from hand onto `target`.
    pub fn play_on(&mut self, player: PlayerId, card: EntityId, target: EntityId) -> bool {
        if player != self.active_player {
            return reject(format_args!("{player} played {card} out of turn"));
        }
        let Some(obj) = self.object(card) else {
            return reject(format_args!("no object {card}"));
        };
        if obj.zone != Some(ZoneRef::new(player, ZoneKind::Hand)) {
            return reject(format_args!("{card} is not in {player}'s hand"));
        }
        let spec = Arc::clone(&obj.spec);
        let (Some(selector), Some(effect)) = (&spec.target, &spec.effect) else {
            return reject(format_args!("{card} is not a targeted action"));
        };
        if !spec.is_type(CardType::Action) {
            return reject(format_args!("{card} is not an action"));
        }
        if !self.can_target(card, player, selector, target) {
            return reject(format_args!("{target} is not a legal target for {card}"));
        }
        if !self.players[player].resources.try_spend(spec.cost.as_ref()) {
            return reject(format_args!("{player} cannot pay for {card}"));
        }

        debug!("{player} plays {} on {target}", self.obj(card));
        self.fire_trigger(TriggerType::PlayCard, TriggerData::new(player).with_subject(card));
        let mut ctx = EffectContext::new(card, player).with_target(Some(target));
        EffectResolver::run(self, effect, &mut ctx);
        self.discard(card);
        true
    }

    /// Drag `card` onto `target`: block an attacker, or cast onto it.
    pub fn use_on(&mut self, player: PlayerId, card: EntityId, target: EntityId) -> bool {
        let (Some(c), Some(t)) = (self.object(card), self.object(target)) else {
            return reject(format_args!("no object {card} or {target}"));
        };
        if c.controller != player {
            return reject(format_args!("{player} does not control {card}"));
        }

        let is_block = c.is_type(CardType::Creature)
            && t.is_type(CardType::Creature)
            && t.is_attacking()
            && c.controller != t.controller;
        if is_block {
            return self.block(card, target);
        }
        if c.zone_kind() == Some(ZoneKind::Hand) && c.spec.needs_target() {
            return self.play_on(player, card, target);
        }
        reject(format_args!("{card} has no use on {target}"))
    }

    /// Move an untapped defender into the attack.
    pub fn enter_attack(&mut self, player: PlayerId, card: EntityId) -> bool {
        if player != self.active_player {
            return reject(format_args!("{player} attacked out of turn"));
        }
        let Some(obj) = self.object(card) else {
            return reject(format_args!("no object {card}"));
        };
        if obj.controller != player || obj.zone_kind() != Some(ZoneKind::Defense) {
            return reject(format_args!("{card} is not {player}'s defender"));
        }
        if !obj.is_type(CardType::Creature) || obj.tapped {
            return reject(format_args!("{card} cannot attack"));
        }
        debug!("{player} attacks with {}", obj);
        self.move_zone(card, ZoneRef::new(player, ZoneKind::Attack));
        true
    }

    /// Move an attacker back to defense.
    pub fn withdraw_attack(&mut self, player: PlayerId, card: EntityId) -> bool {
        if player != self.active_player {
            return reject(format_args!("{player} withdrew out of turn"));
        }
        let Some(obj) = self.object(card) else {
            return reject(format_args!("no object {card}"));
        };
        if obj.controller != player || !obj.is_attacking() {
            return reject(format_args!("{card} is not {player}'s attacker"));
        }
        self.move_zone(card, ZoneRef::new(player, ZoneKind::Defense));
        true
    }
}
